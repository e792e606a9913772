//! placemark: Location Search and Map Synchronization Engine
//!
//! A client-side engine that resolves free-text place queries into
//! normalized Location records and keeps an injected map widget (camera,
//! marker, popup) synchronized with the selection and with pointer input.
//!
//! ## Features
//!
//! - Nominatim-backed forward geocoding with strictly-typed candidates
//! - Location normalization with timezone and currency enrichment,
//!   degrading to defaults instead of failing
//! - Camera/marker state machine over a pluggable rendering widget
//! - Hit-test driven popup with a per-second timezone-aware clock
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use placemark::{Config, Engine};
//! use placemark::geo::Pixel;
//! # use placemark::map::widget::{CameraDirective, MapWidget, Marker};
//! # struct MyWidget;
//! # impl MapWidget for MyWidget {
//! #     fn set_camera(&mut self, _d: CameraDirective) {}
//! #     fn set_features(&mut self, _m: &[Marker]) {}
//! #     fn has_feature_at_pixel(&self, _p: Pixel, _t: f64) -> bool { false }
//! # }
//!
//! # async fn demo() -> placemark::Result<()> {
//! let config = Config::load()?;
//! let mut engine = Engine::from_config(&config, MyWidget)?;
//!
//! engine.set_query("Paris");
//! engine.search().await;
//! let location = engine.select(0).await?;
//! println!("Flying to {} ({})", location.name, location.timezone_id);
//!
//! // Widget adapter routes pointer events back in
//! engine.clicked(Pixel::new(120.0, 80.0));
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod constants;
pub mod currency;
pub mod engine;
pub mod error;
pub mod geo;
pub mod location;
pub mod map;
pub mod search;

// Re-export commonly used types
pub use config::Config;
pub use currency::CurrencyTable;
pub use engine::Engine;
pub use error::{Error, Result};
pub use geo::{Coordinates, Pixel};
pub use location::{Location, LocationNormalizer};
pub use search::{SearchController, SearchStatus};
