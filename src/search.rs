//! Search controller
//!
//! Owns the query text, the in-flight request state, and the ranked
//! candidate list. Selection normalizes the candidate and publishes the
//! resulting Location on a watch channel.
//!
//! Overlapping searches are guarded with a ticket: each `search()` call
//! bumps the ticket before the network round trip and re-checks it after,
//! so only the most recently initiated call's response is ever applied.

use crate::error::Result;
use crate::geo::nominatim::{Candidate, GeocodeBackend};
use crate::geo::timezone::TimezoneBackend;
use crate::location::{Location, LocationNormalizer};
use serde::{Deserialize, Serialize};
use std::sync::Mutex;
use tokio::sync::watch;
use tracing::{debug, warn};

/// Request state of the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStatus {
    Idle,
    Loading,
}

#[derive(Debug)]
struct SearchState {
    query: String,
    status: SearchStatus,
    results: Vec<Candidate>,
    ticket: u64,
}

/// Manages query text, request state, and the ranked candidate list
pub struct SearchController<G, T> {
    backend: G,
    normalizer: LocationNormalizer<T>,
    // Never held across an await; state transitions stay serialized.
    state: Mutex<SearchState>,
    publisher: watch::Sender<Option<Location>>,
}

impl<G: GeocodeBackend, T: TimezoneBackend> SearchController<G, T> {
    pub fn new(backend: G, normalizer: LocationNormalizer<T>) -> Self {
        let (publisher, _) = watch::channel(None);
        Self {
            backend,
            normalizer,
            state: Mutex::new(SearchState {
                query: String::new(),
                status: SearchStatus::Idle,
                results: Vec::new(),
                ticket: 0,
            }),
            publisher,
        }
    }

    /// Subscribe to published Locations
    ///
    /// A late subscriber immediately observes the most recent Location.
    pub fn subscribe(&self) -> watch::Receiver<Option<Location>> {
        self.publisher.subscribe()
    }

    /// Update the query text; does not trigger a search
    pub fn set_query(&self, text: &str) {
        let mut state = self.state.lock().unwrap();
        state.query = text.to_string();
    }

    pub fn query(&self) -> String {
        self.state.lock().unwrap().query.clone()
    }

    pub fn status(&self) -> SearchStatus {
        self.state.lock().unwrap().status
    }

    /// Current candidate list, in geocoder rank order
    pub fn results(&self) -> Vec<Candidate> {
        self.state.lock().unwrap().results.clone()
    }

    /// Issue the geocoding request for the current query
    ///
    /// No-op for a blank query. Failures are logged and recovered locally:
    /// the results list is cleared and the controller returns to idle.
    pub async fn search(&self) {
        let (query, ticket) = {
            let mut state = self.state.lock().unwrap();
            let query = state.query.trim().to_string();
            if query.is_empty() {
                return;
            }
            state.ticket += 1;
            state.status = SearchStatus::Loading;
            (query, state.ticket)
        };

        debug!("Searching for {:?}", query);
        let outcome = self.backend.search(&query).await;

        let mut state = self.state.lock().unwrap();
        if state.ticket != ticket {
            debug!("Discarding stale response for {:?}", query);
            return;
        }

        match outcome {
            Ok(results) => {
                debug!("Search returned {} candidates", results.len());
                state.results = results;
            }
            Err(e) => {
                warn!("Search failed: {}", e);
                state.results.clear();
            }
        }
        state.status = SearchStatus::Idle;
    }

    /// Select one candidate: normalize it, publish the Location, and
    /// return to the empty-search state
    pub async fn select(&self, candidate: &Candidate) -> Result<Location> {
        let location = self.normalizer.normalize(candidate).await?;

        self.publisher.send_replace(Some(location.clone()));

        let mut state = self.state.lock().unwrap();
        state.query.clear();
        state.results.clear();
        state.status = SearchStatus::Idle;
        // A selection supersedes any search still in flight.
        state.ticket += 1;

        Ok(location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::CurrencyTable;
    use crate::error::Error;
    use crate::geo::nominatim::Address;
    use crate::geo::Coordinates;
    use std::sync::Arc;
    use std::time::Duration;

    struct FixedZone;

    impl TimezoneBackend for FixedZone {
        async fn lookup(&self, _coords: Coordinates) -> Result<String> {
            Ok("Europe/Paris".to_string())
        }
    }

    /// Geocoder fake: canned results, with failure and delay keyed on the
    /// query text so error paths and overlap can be simulated
    struct FakeGeocoder;

    impl GeocodeBackend for FakeGeocoder {
        async fn search(&self, query: &str) -> Result<Vec<Candidate>> {
            if query.starts_with("slow") {
                tokio::time::sleep(Duration::from_millis(100)).await;
            }
            if query == "boom" {
                return Err(Error::Geocoding("boom".to_string()));
            }
            Ok(vec![
                candidate(&format!("{} (first)", query)),
                candidate(&format!("{} (second)", query)),
            ])
        }
    }

    fn candidate(display_name: &str) -> Candidate {
        Candidate {
            display_name: display_name.to_string(),
            lat: "48.8566".to_string(),
            lon: "2.3522".to_string(),
            address: Address {
                country: Some("France".to_string()),
                country_code: Some("fr".to_string()),
                postcode: Some("75000".to_string()),
            },
        }
    }

    fn controller() -> SearchController<FakeGeocoder, FixedZone> {
        SearchController::new(
            FakeGeocoder,
            LocationNormalizer::new(FixedZone, CurrencyTable::default()),
        )
    }

    #[tokio::test]
    async fn test_blank_query_is_a_noop() {
        let ctl = controller();
        ctl.set_query("   ");
        ctl.search().await;

        assert!(ctl.results().is_empty());
        assert_eq!(ctl.status(), SearchStatus::Idle);
    }

    #[tokio::test]
    async fn test_search_preserves_rank_order() {
        let ctl = controller();
        ctl.set_query("Paris");
        ctl.search().await;

        let results = ctl.results();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].display_name, "Paris (first)");
        assert_eq!(results[1].display_name, "Paris (second)");
        assert_eq!(ctl.status(), SearchStatus::Idle);
    }

    #[tokio::test]
    async fn test_search_failure_clears_results_and_stays_idle() {
        let ctl = controller();
        ctl.set_query("Paris");
        ctl.search().await;
        assert!(!ctl.results().is_empty());

        ctl.set_query("boom");
        ctl.search().await;

        assert!(ctl.results().is_empty());
        assert_eq!(ctl.status(), SearchStatus::Idle);
    }

    #[tokio::test]
    async fn test_select_publishes_and_resets() {
        let ctl = controller();
        let mut rx = ctl.subscribe();
        ctl.set_query("Paris");
        ctl.search().await;

        let picked = ctl.results()[0].clone();
        let location = ctl.select(&picked).await.unwrap();

        assert_eq!(location.name, "Paris (first)");
        assert_eq!(location.country, "France");
        assert_eq!(ctl.query(), "");
        assert!(ctl.results().is_empty());

        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().as_ref(), Some(&location));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_response_is_discarded() {
        let ctl = Arc::new(controller());

        ctl.set_query("slow query");
        let slow = {
            let ctl = Arc::clone(&ctl);
            tokio::spawn(async move { ctl.search().await })
        };
        // Let the slow search reach its await before superseding it
        tokio::task::yield_now().await;

        ctl.set_query("fast query");
        ctl.search().await;
        slow.await.unwrap();

        let results = ctl.results();
        assert_eq!(results[0].display_name, "fast query (first)");
        assert_eq!(ctl.status(), SearchStatus::Idle);
    }
}
