use std::net::SocketAddr;

use anyhow::Context;
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::*,
};
use tokio::net;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::app_state::AppState;
use crate::domain::errors::AppError;
use crate::domain::weather::{TomorrowReport, WeatherReport};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpServerConfig<'a> {
    pub port: &'a str,
}

pub struct HttpServer {
    router: Router,
    listener: net::TcpListener,
}

impl HttpServer {
    pub async fn new(config: HttpServerConfig<'_>, state: AppState) -> anyhow::Result<Self> {
        let trace_layer =
            TraceLayer::new_for_http().make_span_with(|request: &axum::extract::Request<_>| {
                let uri = request.uri().to_string();
                tracing::info_span!("http_request", method = ?request.method(), uri)
            });

        let router = Router::new()
            .route("/health", get(health_route))
            .nest("/api", api_routes(state))
            .layer(trace_layer)
            .layer(CorsLayer::permissive());

        let addr = SocketAddr::from((
            [0, 0, 0, 0, 0, 0, 0, 0],
            config.port.parse::<u16>().unwrap_or(3000),
        ));

        let listener = net::TcpListener::bind(&addr)
            .await
            .with_context(|| format!("failed to listen on port {}", config.port))?;

        Ok(Self { router, listener })
    }

    pub async fn run(self) -> anyhow::Result<()> {
        tracing::debug!("listening on {}", self.listener.local_addr().unwrap());
        axum::serve(self.listener, self.router)
            .await
            .context("received error from running server")?;
        Ok(())
    }
}

fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/weather", get(weather_here))
        .route("/weather/{city}", get(weather_for_city))
        .route("/weather/{city}/tomorrow", get(weather_tomorrow))
        .with_state(state)
}

async fn health_route() -> (StatusCode, &'static str) {
    (StatusCode::OK, "OK")
}

async fn weather_here(State(state): State<AppState>) -> Result<Json<WeatherReport>, AppError> {
    Ok(Json(state.weather_service.report_auto().await?))
}

async fn weather_for_city(
    State(state): State<AppState>,
    Path(city): Path<String>,
) -> Result<Json<WeatherReport>, AppError> {
    Ok(Json(state.weather_service.report_for(&city).await?))
}

async fn weather_tomorrow(
    State(state): State<AppState>,
    Path(city): Path<String>,
) -> Result<Json<TomorrowReport>, AppError> {
    Ok(Json(state.weather_service.tomorrow_for(&city).await?))
}
