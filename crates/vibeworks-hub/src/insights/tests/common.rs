use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::Response;
use axum::Router;
use chrono::{FixedOffset, NaiveDate, TimeZone};
use serde_json::Value;
use tower::ServiceExt;

use crate::config::InsightsConfig;
use crate::insights::{insights_router, FixedClock, InsightsService};

/// 2024-01-01 09:00 in UTC-5.
pub(super) fn morning_clock() -> Arc<FixedClock> {
    let offset = FixedOffset::west_opt(5 * 3600).expect("valid offset");
    let now = offset
        .with_ymd_and_hms(2024, 1, 1, 9, 0, 0)
        .single()
        .expect("valid instant");
    Arc::new(FixedClock::new(now))
}

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub(super) fn build_service() -> Arc<InsightsService<FixedClock>> {
    Arc::new(InsightsService::new(
        morning_clock(),
        &InsightsConfig::default(),
    ))
}

pub(super) fn build_router() -> Router {
    insights_router(build_service())
}

pub(super) async fn post_json(router: Router, uri: &str, payload: Value) -> Response {
    router
        .oneshot(
            axum::http::Request::post(uri)
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    serde_json::to_vec(&payload).expect("serialize payload"),
                ))
                .expect("build request"),
        )
        .await
        .expect("router response")
}

pub(super) async fn json_body(response: Response) -> (StatusCode, Value) {
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    let value = serde_json::from_slice(&body).expect("json body");
    (status, value)
}
