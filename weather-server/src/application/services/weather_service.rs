use geolookup_rs::Geolocator;
use reqwest::Client;

use crate::adapters::weather_api;
use crate::config::Config;
use crate::domain::errors::AppError;
use crate::domain::weather::{ForecastResponse, TomorrowReport, WeatherReport};

#[derive(Clone)]
pub struct WeatherService {
    config: Config,
    client: Client,
    geolocator: Geolocator,
}

impl WeatherService {
    pub fn new(config: Config, geolocator: Geolocator) -> Self {
        Self {
            config,
            client: Client::new(),
            geolocator,
        }
    }

    async fn forecast(&self, city: &str) -> Result<ForecastResponse, AppError> {
        weather_api::fetch_forecast(&self.config, &self.client, city).await
    }

    /// Today's report for a named city.
    pub async fn report_for(&self, city: &str) -> Result<WeatherReport, AppError> {
        Ok(WeatherReport::from_forecast(&self.forecast(city).await?))
    }

    /// Today's report for wherever the caller appears to be.
    pub async fn report_auto(&self) -> Result<WeatherReport, AppError> {
        let city = self.geolocator.resolve_city().await?;
        if city.is_empty() {
            return Err(AppError::InvalidData(
                "geolocation returned no city for your address".into(),
            ));
        }
        tracing::debug!(%city, "resolved caller city");
        self.report_for(&city).await
    }

    /// Tomorrow's summary for a named city.
    pub async fn tomorrow_for(&self, city: &str) -> Result<TomorrowReport, AppError> {
        let data = self.forecast(city).await?;
        TomorrowReport::from_forecast(&data).ok_or_else(|| {
            AppError::InvalidData("forecast did not include tomorrow".to_string())
        })
    }
}
