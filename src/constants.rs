//! Centralized constants for the placemark crate
//!
//! This module consolidates constants that are used across multiple modules
//! to avoid duplication and ensure consistency.

/// External API endpoints
pub mod api {
    /// OpenStreetMap Nominatim geocoding API
    pub const NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org";

    /// TimeZoneDB coordinate-to-zone lookup API
    pub const TIMEZONEDB_URL: &str = "https://api.timezonedb.com/v2.1";

    /// Timeout applied to every outbound request, in seconds
    pub const REQUEST_TIMEOUT_SECS: u64 = 8;
}

/// Search settings
pub mod search {
    /// Maximum number of ranked candidates requested from the geocoder
    pub const RESULT_LIMIT: u32 = 5;
}

/// Camera and marker settings
pub mod map {
    /// Initial camera center, (lon, lat) degrees
    pub const HOME_CENTER: (f64, f64) = (0.0, 20.0);

    /// Initial (world overview) zoom level
    pub const HOME_ZOOM: u8 = 2;

    /// Zoom level used when flying to a selected location
    pub const FOCUS_ZOOM: u8 = 12;

    /// Zoom bounds enforced on every camera directive
    pub const MIN_ZOOM: u8 = 2;
    pub const MAX_ZOOM: u8 = 19;

    /// Camera animation duration in milliseconds
    pub const FLY_DURATION_MS: u64 = 1000;

    /// Pixel tolerance for marker hit tests
    pub const HIT_TOLERANCE_PX: f64 = 5.0;
}

/// Popup settings
pub mod popup {
    /// Interval between clock ticks while a popup is open
    pub const CLOCK_TICK_SECS: u64 = 1;

    /// Strftime pattern for the popup clock
    pub const CLOCK_FORMAT: &str = "%H:%M:%S";
}

/// Fallback values used when a lookup degrades
pub mod fallback {
    /// Timezone used when the lookup fails or omits a zone name
    pub const TIMEZONE_ID: &str = "UTC";

    /// Currency used for unmapped country codes
    pub const CURRENCY_CODE: &str = "USD";
}
