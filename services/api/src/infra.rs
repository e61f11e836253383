use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use vibeworks_hub::config::InsightsConfig;
use vibeworks_hub::insights::{InsightsService, LifePathNumber, SystemClock};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Wall-clock service resolving "today" in the configured reference zone.
pub(crate) fn system_insights_service(config: &InsightsConfig) -> Arc<InsightsService<SystemClock>> {
    let clock = Arc::new(SystemClock::new(config.reference_offset));
    Arc::new(InsightsService::new(clock, config))
}

pub(crate) fn parse_life_path(raw: &str) -> Result<LifePathNumber, String> {
    let value = raw
        .trim()
        .parse::<u8>()
        .map_err(|err| format!("failed to parse '{raw}' as a life path number ({err})"))?;
    LifePathNumber::try_from(value).map_err(|err| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn life_path_argument_accepts_master_numbers_only() {
        assert_eq!(parse_life_path(" 22 ").map(LifePathNumber::value), Ok(22));
        assert!(parse_life_path("12").is_err());
        assert!(parse_life_path("eight").is_err());
    }

    #[test]
    fn system_service_carries_the_configured_window() {
        let config = InsightsConfig {
            launch_window_days: 14,
            ..InsightsConfig::default()
        };
        assert_eq!(system_insights_service(&config).launch_window_days(), 14);
    }
}
