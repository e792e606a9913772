//! Canonical Location records
//!
//! The normalizer turns one selected geocoder candidate into a
//! fully-populated [`Location`]. Once the candidate's coordinates parse,
//! normalization cannot fail: a broken timezone or currency lookup degrades
//! to a default instead of blocking the selection.

use crate::constants::fallback;
use crate::currency::CurrencyTable;
use crate::error::Result;
use crate::geo::nominatim::Candidate;
use crate::geo::timezone::TimezoneBackend;
use crate::geo::Coordinates;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// The normalized, fully-defaulted record used by the map
///
/// Immutable value; replaced wholesale on each new selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// First comma-delimited segment of the geocoder's display name
    pub name: String,
    /// Country name, empty when unknown
    pub country: String,
    /// Postal code, empty when unknown
    pub postcode: String,
    /// (lon, lat) degrees
    pub coordinates: Coordinates,
    /// IANA zone identifier, "UTC" when the lookup degrades
    pub timezone_id: String,
    /// ISO 4217 code, "USD" for unmapped countries
    pub currency_code: String,
    /// Uppercase alpha-2 code, empty when absent
    pub country_code: String,
}

/// Builds canonical Locations from raw candidates
#[derive(Debug, Clone)]
pub struct LocationNormalizer<T> {
    timezone: T,
    currency: CurrencyTable,
}

impl<T: TimezoneBackend> LocationNormalizer<T> {
    pub fn new(timezone: T, currency: CurrencyTable) -> Self {
        Self { timezone, currency }
    }

    /// Normalize a selected candidate into a canonical Location
    ///
    /// The only failure mode is a candidate whose lat/lon strings do not
    /// parse to in-range numbers; everything downstream of that is
    /// absorbed into default field values.
    pub async fn normalize(&self, candidate: &Candidate) -> Result<Location> {
        let coordinates = candidate.coordinates()?;

        let timezone_id = match self.timezone.lookup(coordinates).await {
            Ok(zone) => zone,
            Err(e) => {
                warn!("Timezone lookup failed, defaulting to UTC: {}", e);
                fallback::TIMEZONE_ID.to_string()
            }
        };

        let country_code = candidate
            .address
            .country_code
            .as_deref()
            .unwrap_or("")
            .to_uppercase();
        let currency_code = self.currency.resolve(&country_code);

        Ok(Location {
            name: display_name_head(&candidate.display_name),
            country: candidate.address.country.clone().unwrap_or_default(),
            postcode: candidate.address.postcode.clone().unwrap_or_default(),
            coordinates,
            timezone_id,
            currency_code,
            country_code,
        })
    }
}

/// First comma-delimited segment of a display name, trimmed
fn display_name_head(display_name: &str) -> String {
    display_name
        .split(',')
        .next()
        .unwrap_or(display_name)
        .trim()
        .to_string()
}
