//! Map widget seam
//!
//! The tile-rendering widget is an external collaborator: the engine issues
//! camera and feature directives and asks it for pixel hit tests, never
//! drawing anything itself. Implementations adapt a concrete renderer to
//! this trait.

use crate::geo::{Coordinates, Pixel};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Icon styling for a point marker, passed through to the renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerIcon {
    /// Icon image source
    pub src: String,
    /// Anchor within the icon, fractional (x, y)
    pub anchor: (f64, f64),
    /// Scale factor applied to the source image
    pub scale: f64,
}

impl Default for MarkerIcon {
    fn default() -> Self {
        Self {
            src: "https://cdn.jsdelivr.net/gh/pointhi/leaflet-color-markers/img/marker-icon-2x-red.png"
                .to_string(),
            // Pin tip sits at the bottom center of the image
            anchor: (0.5, 1.0),
            scale: 0.5,
        }
    }
}

/// A point feature drawn by the widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub coordinates: Coordinates,
    pub icon: MarkerIcon,
}

impl Marker {
    pub fn new(coordinates: Coordinates) -> Self {
        Self {
            coordinates,
            icon: MarkerIcon::default(),
        }
    }
}

/// A camera move issued to the widget
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraDirective {
    pub center: Coordinates,
    pub zoom: u8,
    /// Animation duration; zero means jump without animating
    pub duration: Duration,
}

/// Directive surface of the rendering widget
pub trait MapWidget {
    /// Move the camera; a new directive supersedes any animation in flight
    fn set_camera(&mut self, directive: CameraDirective);

    /// Replace the drawn feature set wholesale
    fn set_features(&mut self, markers: &[Marker]);

    /// Whether any feature lies within `tolerance_px` of the pixel
    fn has_feature_at_pixel(&self, pixel: Pixel, tolerance_px: f64) -> bool;
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Records every directive and hit-tests against a fixed screen
    /// position for the marker
    pub(crate) struct RecordingWidget {
        pub cameras: Vec<CameraDirective>,
        pub markers: Vec<Marker>,
        /// Where the marker renders on screen, for hit tests
        pub marker_pixel: Pixel,
    }

    impl RecordingWidget {
        pub fn new() -> Self {
            Self {
                cameras: Vec::new(),
                markers: Vec::new(),
                marker_pixel: Pixel::new(100.0, 100.0),
            }
        }
    }

    impl MapWidget for RecordingWidget {
        fn set_camera(&mut self, directive: CameraDirective) {
            self.cameras.push(directive);
        }

        fn set_features(&mut self, markers: &[Marker]) {
            self.markers = markers.to_vec();
        }

        fn has_feature_at_pixel(&self, pixel: Pixel, tolerance_px: f64) -> bool {
            if self.markers.is_empty() {
                return false;
            }
            let dx = pixel.x - self.marker_pixel.x;
            let dy = pixel.y - self.marker_pixel.y;
            (dx * dx + dy * dy).sqrt() <= tolerance_px
        }
    }
}
