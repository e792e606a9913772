//! Nominatim geocoding backend (OpenStreetMap)
//!
//! Uses the free Nominatim API for forward geocoding.
//! Rate limit: 1 request per second (enforced by User-Agent requirement)

use crate::error::{Error, Result};
use crate::geo::Coordinates;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One ranked geocoder hit, exactly as the wire delivers it
///
/// Coordinates arrive as decimal strings; call [`Candidate::coordinates`]
/// to get validated numeric values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub display_name: String,
    pub lat: String,
    pub lon: String,
    #[serde(default)]
    pub address: Address,
}

/// Partial address metadata attached to a candidate
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub postcode: Option<String>,
}

impl Candidate {
    /// Parse and range-check the decimal-string coordinates
    ///
    /// Malformed strings are rejected here rather than propagated as NaN
    /// into a Location.
    pub fn coordinates(&self) -> Result<Coordinates> {
        let lat: f64 = self.lat.parse().map_err(|_| {
            Error::InvalidCoordinates(format!("Invalid latitude: {}", self.lat))
        })?;
        let lon: f64 = self.lon.parse().map_err(|_| {
            Error::InvalidCoordinates(format!("Invalid longitude: {}", self.lon))
        })?;

        let coords = Coordinates::new(lon, lat);
        coords.validate()?;
        Ok(coords)
    }
}

/// Trait for geocoding backends
pub trait GeocodeBackend: Send + Sync {
    /// Search for a free-text place name
    ///
    /// Returns ranked candidates, best match first.
    fn search(
        &self,
        query: &str,
    ) -> impl std::future::Future<Output = Result<Vec<Candidate>>> + Send;
}

/// Nominatim geocoding backend
#[derive(Debug, Clone)]
pub struct NominatimBackend {
    client: reqwest::Client,
    base_url: String,
    limit: u32,
}

impl NominatimBackend {
    /// Create a backend against the given API base URL
    pub fn new(base_url: &str, user_agent: &str, limit: u32, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Geocoding(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            limit,
        })
    }
}

impl GeocodeBackend for NominatimBackend {
    async fn search(&self, query: &str) -> Result<Vec<Candidate>> {
        let url = format!(
            "{}/search?format=json&q={}&addressdetails=1&limit={}",
            self.base_url,
            urlencoding::encode(query),
            self.limit
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Geocoding(format!("Nominatim request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(Error::Geocoding(format!(
                "Nominatim returned status: {}",
                response.status()
            )));
        }

        let candidates: Vec<Candidate> = response
            .json()
            .await
            .map_err(|e| Error::Geocoding(format!("Failed to parse Nominatim response: {}", e)))?;

        Ok(candidates)
    }
}
