use serde::Deserialize;

#[derive(Debug, Clone)]
pub struct Config {
    pub protocol: String,
    pub ip_host: String,
    pub geo_host: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            protocol: "https".to_string(),
            ip_host: "json.geoiplookup.io".to_string(),
            geo_host: "get.geojs.io".to_string(),
        }
    }
}

/// The caller's public address as reported by the IP-lookup endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct IpRecord {
    pub ip: String,
}

/// Coarse location data for an address.
///
/// Only `city` feeds [`Geolocator::resolve_city`](crate::Geolocator::resolve_city);
/// the rest is kept for callers that want more than the city name. A provider
/// with no city-level data yields an empty string, not an error.
#[derive(Debug, Clone, Deserialize)]
pub struct GeoRecord {
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub timezone: Option<String>,
}
