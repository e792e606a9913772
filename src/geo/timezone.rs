//! Timezone lookup backend (TimeZoneDB)
//!
//! Resolves a coordinate pair to an IANA zone identifier. The lookup is
//! advisory: callers absorb failures into a UTC default instead of
//! propagating them.

use crate::error::{Error, Result};
use crate::geo::Coordinates;
use serde::Deserialize;
use std::time::Duration;

/// Trait for timezone lookup backends
pub trait TimezoneBackend: Send + Sync {
    /// Look up the IANA zone identifier for a coordinate pair
    fn lookup(
        &self,
        coords: Coordinates,
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}

/// TimeZoneDB lookup backend
#[derive(Debug, Clone)]
pub struct TimezoneDbBackend {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

/// TimeZoneDB get-time-zone response
#[derive(Debug, Deserialize)]
struct TimezoneDbResponse {
    #[serde(rename = "zoneName")]
    zone_name: Option<String>,
}

impl TimezoneDbBackend {
    /// Create a backend against the given API base URL
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Timezone(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }
}

impl TimezoneBackend for TimezoneDbBackend {
    async fn lookup(&self, coords: Coordinates) -> Result<String> {
        let url = format!(
            "{}/get-time-zone?key={}&format=json&by=position&lat={}&lng={}",
            self.base_url, self.api_key, coords.lat, coords.lon
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Timezone(format!("Timezone request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(Error::Timezone(format!(
                "Timezone API returned status: {}",
                response.status()
            )));
        }

        let data: TimezoneDbResponse = response
            .json()
            .await
            .map_err(|e| Error::Timezone(format!("Failed to parse timezone response: {}", e)))?;

        data.zone_name
            .ok_or_else(|| Error::Timezone("No zone name in response".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_with_zone_name() {
        let json = r#"{"status": "OK", "zoneName": "Europe/Paris", "gmtOffset": 3600}"#;
        let parsed: TimezoneDbResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.zone_name.as_deref(), Some("Europe/Paris"));
    }

    #[test]
    fn test_response_without_zone_name() {
        let json = r#"{"status": "FAILED"}"#;
        let parsed: TimezoneDbResponse = serde_json::from_str(json).unwrap();
        assert!(parsed.zone_name.is_none());
    }

    #[test]
    fn test_backend_creation() {
        let backend = TimezoneDbBackend::new(
            "https://api.timezonedb.com/v2.1/",
            "test-key",
            Duration::from_secs(8),
        )
        .unwrap();
        assert_eq!(backend.base_url, "https://api.timezonedb.com/v2.1");
    }
}
