use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::AppError;
use crate::kernel::{plan_zone_schedule, DailyWeather, IrrigationScheduleEntry, Zone};
use crate::weather::client::ForecastClient;

pub struct AppState {
    pub forecast: Arc<dyn ForecastClient>,
}

/// The repository's trivial HTTP greeting endpoint.
pub async fn hello() -> &'static str {
    "zoneplan is running"
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ScheduleRequest {
    pub zone: Zone,
    pub weather: Vec<DailyWeather>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ScheduleResponse {
    pub entries: Vec<IrrigationScheduleEntry>,
}

#[derive(Debug, Serialize)]
pub struct ScheduleErrorResponse {
    pub error: String,
}

/// `POST /zones/:id/schedule` — the external collaborator boundary around
/// the kernel. Deserializes at the edge, hands plain data to
/// `plan_zone_schedule`, serializes the result. No agronomic computation
/// happens here.
pub async fn plan_schedule(
    State(_app_state): State<Arc<AppState>>, Json(req): Json<ScheduleRequest>,
) -> Result<Json<ScheduleResponse>, (axum::http::StatusCode, Json<ScheduleErrorResponse>)> {
    match plan_zone_schedule(&req.zone, &req.weather) {
        Ok(entries) => Ok(Json(ScheduleResponse { entries })),
        Err(AppError::ConfigurationInvalid(msg)) => {
            Err((axum::http::StatusCode::BAD_REQUEST, Json(ScheduleErrorResponse { error: msg })))
        }
        Err(e) => Err((
            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            Json(ScheduleErrorResponse { error: e.to_string() }),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::{GrassRef, PrecipitationSource, SoilRef, ZoneEnabled};
    use crate::units::{LitresPerMinute, Metres, MmPerHour, SquareMetres};
    use crate::weather::client::ForecastClient;
    use async_trait::async_trait;
    use chrono::NaiveDate;

    struct StubForecast;

    #[async_trait]
    impl ForecastClient for StubForecast {
        async fn fetch_days(&self, start: NaiveDate, _days: u32) -> Result<Vec<DailyWeather>, AppError> {
            Ok(vec![DailyWeather { date: start, et0_mm: None, rainfall_mm: None, sunrise: None }])
        }
    }

    fn zone() -> Zone {
        Zone {
            id: 1,
            label: "test".into(),
            enabled: ZoneEnabled::Enabled,
            root_depth_m: Metres(0.3),
            allowable_depletion_fraction: 0.5,
            efficiency: 0.8,
            flow_rate_l_per_min: LitresPerMinute(15.0),
            area_m2: SquareMetres(100.0),
            precipitation_source: PrecipitationSource::Explicit(MmPerHour(9.0)),
            current_depletion_mm: None,
            grass: GrassRef { name: "kentucky_bluegrass".to_string(), kc: 0.85 },
            soil: SoilRef { awhc_mm_per_m: 150.0, infiltration_mm_per_hr: MmPerHour(25.0) },
            location: None,
        }
    }

    #[tokio::test]
    async fn plan_schedule_rejects_invalid_zone() {
        let state = Arc::new(AppState { forecast: Arc::new(StubForecast) });
        let mut z = zone();
        z.root_depth_m = Metres(0.0);
        let req = ScheduleRequest { zone: z, weather: vec![] };

        let result = plan_schedule(State(state), Json(req)).await;
        assert!(result.is_err());
        let (status, _) = result.unwrap_err();
        assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn plan_schedule_returns_entries_for_valid_zone() {
        let state = Arc::new(AppState { forecast: Arc::new(StubForecast) });
        let req = ScheduleRequest {
            zone: zone(),
            weather: vec![DailyWeather {
                date: NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
                et0_mm: Some(crate::units::Millimeters(2.0)),
                rainfall_mm: None,
                sunrise: None,
            }],
        };

        let result = plan_schedule(State(state), Json(req)).await;
        assert!(result.is_ok());
    }
}
