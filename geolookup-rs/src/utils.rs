use crate::errors::{GeolookupError, Stage};
use reqwest::Client;
use serde::de::DeserializeOwned;

#[cfg(feature = "tracing")]
use tracing::{debug, error, info, instrument};

#[cfg_attr(feature = "tracing", instrument(skip(url)))]
pub async fn get_json<T: DeserializeOwned>(url: &str, stage: Stage) -> Result<T, GeolookupError> {
    let client = Client::new();
    #[cfg(feature = "tracing")]
    debug!(%url, "Sending geolocation request");

    let res = client
        .get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|source| {
            #[cfg(feature = "tracing")]
            error!(error = %source, "Request failed before a response arrived");
            GeolookupError::Transport { stage, source }
        })?;

    let status = res.status();
    if !status.is_success() {
        let body = res
            .text()
            .await
            .unwrap_or_else(|_| "<could not read body>".into());
        #[cfg(feature = "tracing")]
        error!(status = ?status, body = %body, "Geolocation API returned error");
        return Err(GeolookupError::Api {
            stage,
            status,
            body,
        });
    }

    #[cfg(feature = "tracing")]
    info!(status = ?status, "Geolocation request successful");
    res.json::<T>().await.map_err(|source| {
        #[cfg(feature = "tracing")]
        error!(error = %source, "Could not decode geolocation response");
        GeolookupError::Transport { stage, source }
    })
}
