//! Delete events.

use super::{EventStore, document};
use crate::error::{EventosError, EventosResult};
use crate::event::EventRecord;

impl EventStore {
    /// Remove event `id`, persist, and hand back the removed record.
    pub fn delete(&mut self, id: u64) -> EventosResult<EventRecord> {
        let index = self.position(id).ok_or(EventosError::EventNotFound(id))?;
        let doc = document::read(&self.path)?;

        let removed = self.events.remove(index);
        self.commit(doc)?;

        tracing::info!(id, title = %removed.title, "event deleted");
        Ok(removed)
    }
}
