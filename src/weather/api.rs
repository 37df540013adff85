use axum::{extract::State, Json};
use chrono::NaiveDate;
use serde::Deserialize;
use std::sync::Arc;

use crate::api::AppState;
use crate::kernel::DailyWeather;

#[derive(Debug, Deserialize)]
pub struct ForecastQuery {
    pub start: NaiveDate,
    pub days: u32,
}

/// Thin wrapper over the forecast collaborator. Performs no agronomic
/// computation — it is an external collaborator boundary only.
pub async fn query_weather(
    State(app_state): State<Arc<AppState>>, axum::extract::Query(q): axum::extract::Query<ForecastQuery>,
) -> Json<Vec<DailyWeather>> {
    match app_state.forecast.fetch_days(q.start, q.days).await {
        Ok(days) => Json(days),
        Err(e) => {
            tracing::warn!("forecast query failed: {e}");
            Json(Vec::new())
        }
    }
}
