//! Default configuration values
//!
//! Named constants for all tunable parameters

use crate::constants::{api, search};

/// Default geocoder base URL
pub const DEFAULT_GEOCODER_URL: &str = api::NOMINATIM_URL;

/// Default User-Agent sent to the geocoder (Nominatim requires one)
pub const DEFAULT_USER_AGENT: &str = concat!("placemark/", env!("CARGO_PKG_VERSION"));

/// Default number of ranked candidates per search
pub const DEFAULT_RESULT_LIMIT: u32 = search::RESULT_LIMIT;

/// Default timezone lookup base URL
pub const DEFAULT_TIMEZONE_URL: &str = api::TIMEZONEDB_URL;

/// Default outbound request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = api::REQUEST_TIMEOUT_SECS;

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application directory name (for XDG paths)
pub const APP_DIR_NAME: &str = "placemark";
