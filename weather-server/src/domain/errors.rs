use axum::{http::StatusCode, response::IntoResponse};
use geolookup_rs::errors::GeolookupError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("API error: {0}")]
    ReqwestError(#[from] reqwest::Error),
    #[error("Geolocation error: {0}")]
    GeolocationError(#[from] GeolookupError),
    #[error("City {0} was not found")]
    CityNotFound(String),
    #[error("Weather API returned error ({status}): {body}")]
    WeatherApi {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("Invalid data {0}")]
    InvalidData(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            AppError::CityNotFound(_) => (StatusCode::NOT_FOUND, self.to_string()).into_response(),
            AppError::GeolocationError(_) | AppError::WeatherApi { .. } => {
                (StatusCode::BAD_GATEWAY, self.to_string()).into_response()
            }
            AppError::InvalidData(_) => (StatusCode::BAD_REQUEST, self.to_string()).into_response(),
            AppError::ReqwestError(e) => (
                e.status()
                    .map(|f| StatusCode::from_u16(f.as_u16()))
                    .unwrap_or(Ok(StatusCode::BAD_GATEWAY))
                    .unwrap(),
                e.to_string(),
            )
                .into_response(),
        }
    }
}
