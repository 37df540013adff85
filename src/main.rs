use axum::routing::post;
use axum::{routing::get, Router};
use axum_server::Server;
use std::sync::Arc;

use api::AppState;
use config::{run_options::get_args, Config};
use weather::client::HttpForecastClient;

mod api;
mod catalog;
mod config;
mod error;
mod kernel;
mod units;
mod utils;
mod weather;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    utils::start_log();

    let args = get_args();
    let cfg = Config::load(args);

    let forecast = Arc::new(HttpForecastClient::new(cfg.forecast.base_url.clone(), cfg.forecast.api_token.clone()));
    let app_state = Arc::new(AppState { forecast });

    let app = Router::new()
        .route("/", get(api::hello))
        .route("/weather", get(weather::api::query_weather))
        .route("/zones/:id/schedule", post(api::plan_schedule))
        .with_state(app_state);

    tracing::info!("starting HTTP server on {}", cfg.web_server.address);
    Server::bind(cfg.web_server.address.parse().unwrap()).serve(app.into_make_service()).await.unwrap();
    Ok(())
}
