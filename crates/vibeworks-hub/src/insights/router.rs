use std::io::Cursor;
use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use chrono::NaiveDate;
use serde::Deserialize;

use super::calendar::{deserialize_date, deserialize_optional_date};
use super::clock::Clock;
use super::numerology::LifePathNumber;
use super::service::InsightsService;
use super::team::TeamMember;
use crate::error::AppError;

/// Router builder exposing the scoring endpoints.
pub fn insights_router<C>(service: Arc<InsightsService<C>>) -> Router
where
    C: Clock + 'static,
{
    Router::new()
        .route("/api/v1/insights/numerology", post(numerology_handler::<C>))
        .route(
            "/api/v1/insights/deal-probability",
            post(deal_probability_handler::<C>),
        )
        .route("/api/v1/insights/daily", post(daily_handler::<C>))
        .route("/api/v1/insights/launch-days", post(launch_days_handler::<C>))
        .route("/api/v1/insights/team", post(team_handler::<C>))
        .route("/api/v1/insights/pipeline", post(pipeline_handler::<C>))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumerologyRequest {
    #[serde(deserialize_with = "deserialize_date")]
    pub birth_date: NaiveDate,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub today: Option<NaiveDate>,
    #[serde(default)]
    pub hour: Option<u32>,
}

fn default_deal_stage() -> String {
    "Discovery".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealProbabilityRequest {
    #[serde(default)]
    pub deal_value: f64,
    #[serde(default = "default_deal_stage")]
    pub deal_stage: String,
    pub life_path_number: LifePathNumber,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub today: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyRequest {
    pub life_path_number: LifePathNumber,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub today: Option<NaiveDate>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchDaysRequest {
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub from: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRequest {
    pub members: Vec<TeamMember>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineRequest {
    pub life_path_number: LifePathNumber,
    pub csv: String,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub today: Option<NaiveDate>,
}

pub(crate) async fn numerology_handler<C>(
    State(service): State<Arc<InsightsService<C>>>,
    Json(request): Json<NumerologyRequest>,
) -> Response
where
    C: Clock + 'static,
{
    match service.numerology(
        request.birth_date,
        request.first_name.as_deref(),
        request.today,
        request.hour,
    ) {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(error) => AppError::from(error).into_response(),
    }
}

pub(crate) async fn deal_probability_handler<C>(
    State(service): State<Arc<InsightsService<C>>>,
    Json(request): Json<DealProbabilityRequest>,
) -> Response
where
    C: Clock + 'static,
{
    let result = service.deal_probability(
        request.deal_value,
        &request.deal_stage,
        request.life_path_number,
        request.today,
    );
    (StatusCode::OK, Json(result)).into_response()
}

pub(crate) async fn daily_handler<C>(
    State(service): State<Arc<InsightsService<C>>>,
    Json(request): Json<DailyRequest>,
) -> Response
where
    C: Clock + 'static,
{
    let timing = service.daily(
        request.life_path_number,
        request.user_id.as_deref(),
        request.today,
    );
    (StatusCode::OK, Json(timing)).into_response()
}

pub(crate) async fn launch_days_handler<C>(
    State(service): State<Arc<InsightsService<C>>>,
    Json(request): Json<LaunchDaysRequest>,
) -> Response
where
    C: Clock + 'static,
{
    (StatusCode::OK, Json(service.launch_days(request.from))).into_response()
}

pub(crate) async fn team_handler<C>(
    State(service): State<Arc<InsightsService<C>>>,
    Json(request): Json<TeamRequest>,
) -> Response
where
    C: Clock + 'static,
{
    (StatusCode::OK, Json(service.team(&request.members))).into_response()
}

pub(crate) async fn pipeline_handler<C>(
    State(service): State<Arc<InsightsService<C>>>,
    Json(request): Json<PipelineRequest>,
) -> Response
where
    C: Clock + 'static,
{
    let reader = Cursor::new(request.csv.into_bytes());
    match service.pipeline(reader, request.life_path_number, request.today) {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(error) => AppError::from(error).into_response(),
    }
}
