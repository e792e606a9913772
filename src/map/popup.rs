//! Hit-test and popup state machine
//!
//! Pointer interaction over the marker layer: hover recomputes the cursor
//! affordance on every event, a click on a feature opens the popup anchored
//! at that pixel, and a click elsewhere closes it. While the popup is open a
//! clock ticks once per second in the Location's timezone; the ticking task
//! is aborted the instant the popup closes or is replaced.

use crate::constants::popup as popup_constants;
use crate::geo::Pixel;
use crate::location::Location;
use chrono::Utc;
use chrono_tz::Tz;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Cursor affordance reported back to the widget adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    Default,
    Pointer,
}

/// Open/closed state of the info popup
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PopupState {
    pub visible: bool,
    /// Click pixel the popup is anchored to; None while closed
    pub anchor: Option<Pixel>,
}

impl PopupState {
    fn closed() -> Self {
        Self {
            visible: false,
            anchor: None,
        }
    }
}

/// Snapshot of the fields the popup displays for a Location
#[derive(Debug, Clone, PartialEq)]
pub struct PopupContent {
    pub name: String,
    pub country: String,
    pub postcode: String,
    /// "lat, lon" to four decimal places
    pub coordinates: String,
    pub currency_code: String,
    /// TLD-style lowercased country code, e.g. ".fr"
    pub country_tld: String,
}

impl PopupContent {
    pub fn new(location: &Location) -> Self {
        Self {
            name: location.name.clone(),
            country: location.country.clone(),
            postcode: location.postcode.clone(),
            coordinates: format!(
                "{:.4}, {:.4}",
                location.coordinates.lat, location.coordinates.lon
            ),
            currency_code: location.currency_code.clone(),
            country_tld: format!(".{}", location.country_code.to_lowercase()),
        }
    }
}

/// Once-per-second clock in a fixed timezone, running as a scoped task
///
/// The task is aborted when the handle drops, so a closed or replaced popup
/// can never leak periodic work.
pub struct PopupClock {
    zone: Tz,
    rx: watch::Receiver<String>,
    task: JoinHandle<()>,
}

impl PopupClock {
    /// Start ticking in the given IANA zone; unparseable ids fall back to UTC
    pub fn start(timezone_id: &str) -> Self {
        let zone: Tz = timezone_id.parse().unwrap_or_else(|_| {
            warn!("Unknown timezone {:?}, clock falls back to UTC", timezone_id);
            chrono_tz::UTC
        });

        let (tx, rx) = watch::channel(format_now(zone));
        let task = tokio::spawn(async move {
            let mut ticks =
                tokio::time::interval(Duration::from_secs(popup_constants::CLOCK_TICK_SECS));
            // The first tick of an interval fires immediately
            ticks.tick().await;
            loop {
                ticks.tick().await;
                if tx.send(format_now(zone)).is_err() {
                    break;
                }
            }
        });

        debug!("Popup clock started in {}", zone);
        Self { zone, rx, task }
    }

    /// Receiver for formatted tick values
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.rx.clone()
    }

    /// Most recent formatted time
    pub fn now(&self) -> String {
        self.rx.borrow().clone()
    }

    pub fn zone(&self) -> Tz {
        self.zone
    }
}

impl Drop for PopupClock {
    fn drop(&mut self) {
        debug!("Popup clock stopped");
        self.task.abort();
    }
}

fn format_now(zone: Tz) -> String {
    Utc::now()
        .with_timezone(&zone)
        .format(popup_constants::CLOCK_FORMAT)
        .to_string()
}

/// Pointer interaction state machine
pub struct PopupMachine {
    state: PopupState,
    clock: Option<PopupClock>,
}

impl PopupMachine {
    pub fn new() -> Self {
        Self {
            state: PopupState::closed(),
            clock: None,
        }
    }

    pub fn state(&self) -> &PopupState {
        &self.state
    }

    /// The clock for the currently open popup, if any
    pub fn clock(&self) -> Option<&PopupClock> {
        self.clock.as_ref()
    }

    /// Per-event hover check; recomputed on every pointer move, never latched
    pub fn hover(&self, hit: bool) -> Cursor {
        if hit {
            Cursor::Pointer
        } else {
            Cursor::Default
        }
    }

    /// Handle a pointer click at `pixel`
    ///
    /// A hit on a feature opens the popup anchored there, sourcing content
    /// from the published Location; a miss closes it. Opening over an
    /// already-open popup re-anchors and restarts the clock.
    pub fn click(&mut self, pixel: Pixel, hit: bool, location: Option<&Location>) {
        match (hit, location) {
            (true, Some(location)) => {
                self.state = PopupState {
                    visible: true,
                    anchor: Some(pixel),
                };
                self.clock = Some(PopupClock::start(&location.timezone_id));
            }
            _ => self.close(),
        }
    }

    /// Force the popup closed; called whenever the marker set changes
    pub fn invalidate(&mut self) {
        self.close();
    }

    fn close(&mut self) {
        self.state = PopupState::closed();
        // Dropping the clock aborts its ticking task
        self.clock = None;
    }
}

impl Default for PopupMachine {
    fn default() -> Self {
        Self::new()
    }
}
