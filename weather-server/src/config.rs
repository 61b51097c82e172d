use std::env;

use anyhow::Context;

const SERVER_PORT_KEY: &str = "SERVER_PORT";

const WEATHERAPI_KEY: &str = "WEATHERAPI_KEY";

const WEATHERAPI_HOST_KEY: &str = "WEATHERAPI_HOST";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub server_port: String,
    pub weatherapi_key: String,
    pub weatherapi_host: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Config> {
        dotenv::dotenv().ok();

        let server_port = load_env(SERVER_PORT_KEY).unwrap_or("3000".to_string());

        let weatherapi_key = load_env(WEATHERAPI_KEY).context("Failed to get weather API key")?;

        let weatherapi_host =
            load_env(WEATHERAPI_HOST_KEY).unwrap_or("http://api.weatherapi.com".to_string());

        Ok(Config {
            server_port,
            weatherapi_key,
            weatherapi_host,
        })
    }
}

fn load_env(key: &str) -> anyhow::Result<String> {
    env::var(key).with_context(|| format!("failed to load environment variable {}", key))
}
