//! Geographic primitives
//!
//! Coordinates in (lon, lat) degrees and screen-space pixels, shared by the
//! geocoding backends and the map view.

pub mod nominatim;
pub mod timezone;

use serde::{Deserialize, Serialize};

/// A geographic coordinate (longitude, latitude) in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lon: f64,
    pub lat: f64,
}

impl Coordinates {
    /// Create new coordinates
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Validate that coordinates are within valid ranges
    ///
    /// Longitude: -180 to 180
    /// Latitude: -90 to 90
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.lon < -180.0 || self.lon > 180.0 {
            return Err(crate::error::Error::InvalidCoordinates(format!(
                "Longitude {} is out of range [-180, 180]",
                self.lon
            )));
        }
        if self.lat < -90.0 || self.lat > 90.0 {
            return Err(crate::error::Error::InvalidCoordinates(format!(
                "Latitude {} is out of range [-90, 90]",
                self.lat
            )));
        }
        Ok(())
    }
}

/// A screen-space pixel position reported by the map widget
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pixel {
    pub x: f64,
    pub y: f64,
}

impl Pixel {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
