use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{debug, error};

use crate::error::AppError;
use crate::kernel::DailyWeather;
use crate::units::Millimeters;

/// Raw shape of a single forecast day as returned by the upstream provider.
/// Every field but the date is optional upstream too — the mapping below is
/// where that tolerance is implemented, not the kernel.
#[derive(Debug, Deserialize)]
struct ForecastDay {
    date: NaiveDate,
    et0_mm: Option<f64>,
    rainfall_mm: Option<f64>,
}

#[async_trait]
pub trait ForecastClient: Send + Sync {
    async fn fetch_days(&self, start: NaiveDate, days: u32) -> Result<Vec<DailyWeather>, AppError>;
}

pub struct HttpForecastClient {
    base_url: String,
    api_token: String,
    http: reqwest::Client,
}

impl HttpForecastClient {
    pub fn new(base_url: String, api_token: String) -> Self {
        Self { base_url, api_token, http: reqwest::Client::new() }
    }
}

#[async_trait]
impl ForecastClient for HttpForecastClient {
    async fn fetch_days(&self, start: NaiveDate, days: u32) -> Result<Vec<DailyWeather>, AppError> {
        let url = format!("{}/forecast?start={}&days={}", self.base_url, start, days);
        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.api_token)
            .send()
            .await
            .map_err(|e| {
                error!("forecast request to {} failed: {:?}", url, e);
                AppError::WeatherError(e.to_string())
            })?;

        let days: Vec<ForecastDay> = response.json().await.map_err(|e| {
            error!("forecast response from {} could not be parsed: {:?}", url, e);
            AppError::WeatherError(e.to_string())
        })?;

        debug!("fetched {} forecast days from {}", days.len(), self.base_url);

        Ok(days
            .into_iter()
            .map(|d| DailyWeather {
                date: d.date,
                et0_mm: d.et0_mm.map(Millimeters),
                rainfall_mm: d.rainfall_mm.map(Millimeters),
                sunrise: None,
            })
            .collect())
    }
}
