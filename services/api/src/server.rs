use crate::cli::ServeArgs;
use crate::infra::{system_insights_service, AppState};
use crate::routes::with_insight_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;
use vibeworks_hub::config::AppConfig;
use vibeworks_hub::error::AppError;
use vibeworks_hub::telemetry;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let insights_service = system_insights_service(&config.insights);

    let app = with_insight_routes(insights_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        utc_offset = %config.insights.reference_offset,
        launch_window_days = config.insights.launch_window_days,
        "vibeworks insights service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
