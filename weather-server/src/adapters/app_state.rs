use std::sync::Arc;

use crate::application::services::weather_service::WeatherService;

#[derive(Clone)]
pub struct AppState {
    pub weather_service: Arc<WeatherService>,
}
