//! Engine wiring
//!
//! Composes the search controller, map view, and popup machine into one
//! interaction engine: free-text query in, synchronized camera/marker/popup
//! out. Pointer events from the widget adapter enter through
//! [`Engine::pointer_moved`] and [`Engine::clicked`]; there are no
//! accumulating callbacks to unsubscribe.

use crate::config::Config;
use crate::currency::CurrencyTable;
use crate::error::{Error, Result};
use crate::geo::nominatim::{Candidate, GeocodeBackend, NominatimBackend};
use crate::geo::timezone::{TimezoneBackend, TimezoneDbBackend};
use crate::geo::Pixel;
use crate::location::{Location, LocationNormalizer};
use crate::map::popup::{Cursor, PopupContent, PopupMachine, PopupState};
use crate::map::widget::MapWidget;
use crate::map::MapView;
use crate::search::{SearchController, SearchStatus};
use tokio::sync::watch;
use tracing::info;

/// The location resolution and map synchronization engine
pub struct Engine<G, T, W> {
    search: SearchController<G, T>,
    map: MapView<W>,
    popup: PopupMachine,
    current: Option<Location>,
}

impl<W: MapWidget> Engine<NominatimBackend, TimezoneDbBackend, W> {
    /// Build an engine with the live HTTP backends described by the config
    pub fn from_config(config: &Config, widget: W) -> Result<Self> {
        let geocoder = NominatimBackend::new(
            &config.geocoder.base_url,
            &config.geocoder.user_agent,
            config.geocoder.result_limit,
            config.request_timeout(),
        )?;
        let timezone = TimezoneDbBackend::new(
            &config.timezone.base_url,
            &config.timezone.api_key,
            config.request_timeout(),
        )?;
        Ok(Self::new(
            geocoder,
            timezone,
            config.currency.clone(),
            widget,
        ))
    }
}

impl<G, T, W> Engine<G, T, W>
where
    G: GeocodeBackend,
    T: TimezoneBackend,
    W: MapWidget,
{
    /// Wire the components around injected backends and widget
    pub fn new(geocoder: G, timezone: T, currency: CurrencyTable, widget: W) -> Self {
        Self {
            search: SearchController::new(geocoder, LocationNormalizer::new(timezone, currency)),
            map: MapView::new(widget),
            popup: PopupMachine::new(),
            current: None,
        }
    }

    /// Update the query text; no search is triggered
    pub fn set_query(&self, text: &str) {
        self.search.set_query(text);
    }

    pub fn query(&self) -> String {
        self.search.query()
    }

    pub fn status(&self) -> SearchStatus {
        self.search.status()
    }

    /// Ranked candidates from the last completed search
    pub fn results(&self) -> Vec<Candidate> {
        self.search.results()
    }

    /// Run the search for the current query (no-op when blank)
    pub async fn search(&self) {
        self.search.search().await;
    }

    /// Select the candidate at `index` in the current results
    ///
    /// Normalizes it, publishes the Location, and synchronizes the map:
    /// the popup is forced closed before the new marker is drawn.
    pub async fn select(&mut self, index: usize) -> Result<Location> {
        let candidate = self
            .results()
            .into_iter()
            .nth(index)
            .ok_or_else(|| Error::Geocoding(format!("No candidate at index {}", index)))?;

        let location = self.search.select(&candidate).await?;
        info!("Selected {:?}", location.name);
        self.apply(location.clone());
        Ok(location)
    }

    /// Apply an already-normalized Location, as if it had been selected
    pub fn publish(&mut self, location: Location) {
        self.apply(location);
    }

    fn apply(&mut self, location: Location) {
        // Invariant: no stale popup may outlive its marker
        self.popup.invalidate();
        self.map.show_location(&location);
        self.current = Some(location);
    }

    /// Route a pointer-move event; returns the cursor affordance
    pub fn pointer_moved(&self, pixel: Pixel) -> Cursor {
        self.popup.hover(self.map.hit_test(pixel))
    }

    /// Route a pointer click: hit opens the popup, miss closes it
    pub fn clicked(&mut self, pixel: Pixel) {
        let hit = self.map.hit_test(pixel);
        self.popup.click(pixel, hit, self.current.as_ref());
    }

    /// Subscribe to Locations published by selection
    pub fn subscribe(&self) -> watch::Receiver<Option<Location>> {
        self.search.subscribe()
    }

    pub fn current_location(&self) -> Option<&Location> {
        self.current.as_ref()
    }

    pub fn popup_state(&self) -> &PopupState {
        self.popup.state()
    }

    /// Content for the open popup, if one is open
    pub fn popup_content(&self) -> Option<PopupContent> {
        if !self.popup.state().visible {
            return None;
        }
        self.current.as_ref().map(PopupContent::new)
    }

    /// Formatted clock value for the open popup, if one is open
    pub fn popup_clock(&self) -> Option<String> {
        self.popup.clock().map(|clock| clock.now())
    }

    pub fn map(&self) -> &MapView<W> {
        &self.map
    }

    pub fn map_mut(&mut self) -> &mut MapView<W> {
        &mut self.map
    }
}
