use reqwest::{Client, StatusCode};

use crate::config::Config;
use crate::domain::errors::AppError;
use crate::domain::weather::ForecastResponse;

const FORECAST_DAYS: &str = "3";

/// Fetch a 3-day forecast for `city` from weatherapi.com.
pub async fn fetch_forecast(
    config: &Config,
    client: &Client,
    city: &str,
) -> Result<ForecastResponse, AppError> {
    let url = format!("{}/v1/forecast.json", config.weatherapi_host);

    let res = client
        .get(&url)
        .query(&[
            ("key", config.weatherapi_key.as_str()),
            ("q", city),
            ("days", FORECAST_DAYS),
        ])
        .send()
        .await?;

    let status = res.status();
    // weatherapi answers 400 for names it cannot match
    if status == StatusCode::BAD_REQUEST {
        return Err(AppError::CityNotFound(city.to_string()));
    }
    if !status.is_success() {
        let body = res
            .text()
            .await
            .unwrap_or_else(|_| "<could not read body>".into());
        return Err(AppError::WeatherApi { status, body });
    }

    Ok(res.json::<ForecastResponse>().await?)
}
