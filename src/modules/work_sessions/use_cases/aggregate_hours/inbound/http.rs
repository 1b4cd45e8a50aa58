use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::modules::work_sessions::core::periods::Period;
use crate::shell::http::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct HoursParams {
    pub user_id: String,
    pub period: Period,
}

#[derive(Serialize)]
pub struct HoursResponse {
    pub user_id: String,
    pub period: Period,
    pub hours: f64,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<HoursParams>,
) -> impl IntoResponse {
    match state
        .aggregate_hours
        .for_period(&params.user_id, params.period)
        .await
    {
        Ok(hours) => Json(HoursResponse {
            user_id: params.user_id,
            period: params.period,
            hours,
        })
        .into_response(),
        Err(e) => error_response(&e),
    }
}
