use chrono::{FixedOffset, Offset, Utc};
use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub insights: InsightsConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let utc_offset_minutes = env::var("APP_UTC_OFFSET_MINUTES")
            .unwrap_or_else(|_| DEFAULT_UTC_OFFSET_MINUTES.to_string())
            .trim()
            .parse::<i32>()
            .map_err(|_| ConfigError::InvalidUtcOffset)?;
        let reference_offset = utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or(ConfigError::InvalidUtcOffset)?;

        let launch_window_days = env::var("APP_LAUNCH_WINDOW_DAYS")
            .unwrap_or_else(|_| DEFAULT_LAUNCH_WINDOW_DAYS.to_string())
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|days| (1..=MAX_LAUNCH_WINDOW_DAYS).contains(days))
            .ok_or(ConfigError::InvalidLaunchWindow)?;

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            insights: InsightsConfig {
                reference_offset,
                launch_window_days,
            },
        })
    }
}

/// US Eastern standard time; the dashboard's "today" rolls over at local midnight there.
const DEFAULT_UTC_OFFSET_MINUTES: i32 = -300;
const DEFAULT_LAUNCH_WINDOW_DAYS: u32 = 30;
const MAX_LAUNCH_WINDOW_DAYS: u32 = 366;

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing and metrics controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Controls how the scoring endpoints resolve "today" and how far ahead they search.
#[derive(Debug, Clone)]
pub struct InsightsConfig {
    pub reference_offset: FixedOffset,
    pub launch_window_days: u32,
}

impl Default for InsightsConfig {
    fn default() -> Self {
        Self {
            reference_offset: FixedOffset::east_opt(DEFAULT_UTC_OFFSET_MINUTES * 60)
                .unwrap_or_else(|| Utc.fix()),
            launch_window_days: DEFAULT_LAUNCH_WINDOW_DAYS,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidUtcOffset,
    InvalidLaunchWindow,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidUtcOffset => write!(
                f,
                "APP_UTC_OFFSET_MINUTES must be a whole number of minutes within +/-24 hours"
            ),
            ConfigError::InvalidLaunchWindow => write!(
                f,
                "APP_LAUNCH_WINDOW_DAYS must be between 1 and {MAX_LAUNCH_WINDOW_DAYS}"
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidUtcOffset
            | ConfigError::InvalidLaunchWindow => None,
        }
    }
}
