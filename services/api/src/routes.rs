use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde_json::json;
use std::sync::Arc;
use vibeworks_hub::insights::{insights_router, Clock, InsightsService};

pub(crate) fn with_insight_routes<C>(service: Arc<InsightsService<C>>) -> axum::Router
where
    C: Clock + 'static,
{
    insights_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use axum::response::Response;
    use chrono::{FixedOffset, TimeZone};
    use metrics_exporter_prometheus::PrometheusBuilder;
    use std::sync::atomic::{AtomicBool, Ordering};
    use tower::ServiceExt;
    use vibeworks_hub::config::InsightsConfig;
    use vibeworks_hub::insights::FixedClock;

    fn state(ready: bool) -> AppState {
        let recorder = PrometheusBuilder::new().build_recorder();
        AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(recorder.handle()),
        }
    }

    fn app(state: AppState) -> axum::Router {
        let now = FixedOffset::west_opt(5 * 3600)
            .expect("valid offset")
            .with_ymd_and_hms(2000, 1, 21, 12, 0, 0)
            .single()
            .expect("valid instant");
        let service = Arc::new(InsightsService::new(
            Arc::new(FixedClock::new(now)),
            &InsightsConfig::default(),
        ));
        with_insight_routes(service).layer(Extension(state))
    }

    async fn get(router: axum::Router, uri: &str) -> Response {
        router
            .oneshot(Request::get(uri).body(Body::empty()).expect("build request"))
            .await
            .expect("router response")
    }

    #[tokio::test]
    async fn health_is_always_ok() {
        let response = get(app(state(false)), "/health").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn readiness_follows_the_flag() {
        let state = state(false);
        let response = get(app(state.clone()), "/ready").await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        state.readiness.store(true, Ordering::Release);
        let response = get(app(state), "/ready").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn metrics_render_as_prometheus_text() {
        let response = get(app(state(true)), "/metrics").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/plain; version=0.0.4"
        );
    }

    #[tokio::test]
    async fn insight_routes_are_mounted() {
        let response = app(state(true))
            .oneshot(
                Request::post("/api/v1/insights/launch-days")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{}"))
                    .expect("build request"),
            )
            .await
            .expect("router response");
        assert_eq!(response.status(), StatusCode::OK);
    }
}
