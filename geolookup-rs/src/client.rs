use crate::errors::{GeolookupError, Stage};
use crate::types::{Config, GeoRecord, IpRecord};
use crate::utils::get_json;
use std::sync::Arc;

#[derive(Clone)]
pub struct Geolocator {
    pub config: Arc<Config>,
}

impl Geolocator {
    pub fn init(config: Option<Config>) -> Self {
        Self {
            config: Arc::new(config.unwrap_or_default()),
        }
    }

    /// Look up the caller's own public IP address.
    pub async fn public_ip(&self) -> Result<IpRecord, GeolookupError> {
        let url = format!("{}://{}/", self.config.protocol, self.config.ip_host);
        get_json(&url, Stage::IpLookup).await
    }

    /// Fetch coarse location data for `ip`, or for the request's own origin
    /// when no address is given.
    pub async fn locate(&self, ip: Option<&str>) -> Result<GeoRecord, GeolookupError> {
        let url = match ip {
            Some(ip) => format!(
                "{}://{}/v1/ip/geo/{}.json",
                self.config.protocol, self.config.geo_host, ip
            ),
            None => format!(
                "{}://{}/v1/ip/geo.json",
                self.config.protocol, self.config.geo_host
            ),
        };
        get_json(&url, Stage::GeoLookup).await
    }

    /// Resolve the caller's city name: look up the public IP, then geolocate
    /// that address. The city comes back exactly as the provider sent it; an
    /// empty string means the provider has no city-level data for the address.
    ///
    /// The first failed call aborts the chain. No retries, no fallback value;
    /// the caller decides whether to try again.
    pub async fn resolve_city(&self) -> Result<String, GeolookupError> {
        let ip = self.public_ip().await?;
        let geo = self.locate(Some(&ip.ip)).await?;
        Ok(geo.city)
    }
}
