pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;

use std::sync::Arc;

use geolookup_rs::Geolocator;

use crate::adapters::app_state::AppState;
use crate::application::services::weather_service::WeatherService;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "debug".to_string()))
        .init();

    let config = config::Config::from_env().expect("Failed to load configuration");

    let geolocator = Geolocator::init(None);
    let state = AppState {
        weather_service: Arc::new(WeatherService::new(config.clone(), geolocator)),
    };

    let http_config = adapters::http::HttpServerConfig {
        port: &config.server_port,
    };
    let http_server = adapters::http::HttpServer::new(http_config, state)
        .await
        .expect("Failed to create HTTP server");
    http_server.run().await.expect("Failed to run HTTP server");
}
