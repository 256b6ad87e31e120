use std::sync::Arc;

use eventos_core::EventStore;
use eventos_core::countdown::{Clock, SystemClock};
use tokio::sync::RwLock;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    // Each request holds the lock until its file write has finished
    pub store: Arc<RwLock<EventStore>>,
    /// Source of "now" for countdown snapshots on the card page
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(store: EventStore) -> Self {
        Self::with_clock(store, Arc::new(SystemClock))
    }

    pub fn with_clock(store: EventStore, clock: Arc<dyn Clock>) -> Self {
        AppState {
            store: Arc::new(RwLock::new(store)),
            clock,
        }
    }
}
