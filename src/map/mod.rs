//! Map view controller
//!
//! Owns the camera and the single-marker layer, and keeps both consistent
//! with the last published Location. The widget handle is injected, never
//! global; hit tests from the pointer machinery go through here.

pub mod popup;
pub mod widget;

use crate::constants::map as map_constants;
use crate::geo::{Coordinates, Pixel};
use crate::location::Location;
use std::time::Duration;
use tracing::debug;
use widget::{CameraDirective, MapWidget, Marker};

/// Current camera position and animation flag
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    pub center: Coordinates,
    pub zoom: u8,
    /// True while a camera animation issued by us is presumed in flight
    pub animating: bool,
}

impl CameraState {
    /// World-overview starting state
    fn home() -> Self {
        let (lon, lat) = map_constants::HOME_CENTER;
        Self {
            center: Coordinates::new(lon, lat),
            zoom: map_constants::HOME_ZOOM,
            animating: false,
        }
    }
}

/// State machine over camera + marker, driving an injected widget
pub struct MapView<W> {
    widget: W,
    camera: CameraState,
    marker: Option<Marker>,
}

impl<W: MapWidget> MapView<W> {
    /// Take ownership of the widget and sync it to the home view
    pub fn new(mut widget: W) -> Self {
        let camera = CameraState::home();
        widget.set_camera(CameraDirective {
            center: camera.center,
            zoom: camera.zoom,
            duration: Duration::ZERO,
        });
        widget.set_features(&[]);
        Self {
            widget,
            camera,
            marker: None,
        }
    }

    /// React to a published Location: replace the marker and fly to it
    ///
    /// The marker layer is replaced wholesale (never appended), and the
    /// camera directive supersedes any animation still in flight. Callers
    /// must close the popup before invoking this, so no stale popup can
    /// outlive its marker. Re-publishing the same Location is idempotent.
    pub fn show_location(&mut self, location: &Location) {
        let marker = Marker::new(location.coordinates);
        self.widget.set_features(std::slice::from_ref(&marker));
        self.marker = Some(marker);

        let zoom = map_constants::FOCUS_ZOOM
            .clamp(map_constants::MIN_ZOOM, map_constants::MAX_ZOOM);
        self.camera = CameraState {
            center: location.coordinates,
            zoom,
            animating: true,
        };
        debug!(
            "Flying to {:?} at ({}, {})",
            location.name, location.coordinates.lon, location.coordinates.lat
        );
        self.widget.set_camera(CameraDirective {
            center: location.coordinates,
            zoom,
            duration: Duration::from_millis(map_constants::FLY_DURATION_MS),
        });
    }

    /// Remove the marker, returning to an empty map
    pub fn clear(&mut self) {
        self.marker = None;
        self.widget.set_features(&[]);
    }

    /// Whether a feature renders within tolerance of the pixel
    pub fn hit_test(&self, pixel: Pixel) -> bool {
        self.widget
            .has_feature_at_pixel(pixel, map_constants::HIT_TOLERANCE_PX)
    }

    /// Called by the widget adapter when the camera animation completes
    pub fn animation_done(&mut self) {
        self.camera.animating = false;
    }

    pub fn camera(&self) -> &CameraState {
        &self.camera
    }

    pub fn marker(&self) -> Option<&Marker> {
        self.marker.as_ref()
    }

    pub fn widget(&self) -> &W {
        &self.widget
    }
}
