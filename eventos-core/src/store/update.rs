//! Update events in place.

use super::{EventStore, document};
use crate::error::{EventosError, EventosResult};
use crate::event::{EventPatch, EventRecord};

impl EventStore {
    /// Merge the supplied fields into event `id` and persist.
    ///
    /// Unknown ids are reported before the patch is validated.
    pub fn update(&mut self, id: u64, patch: EventPatch) -> EventosResult<EventRecord> {
        let index = self.position(id).ok_or(EventosError::EventNotFound(id))?;
        patch.validate()?;
        let doc = document::read(&self.path)?;

        patch.apply(&mut self.events[index]);
        self.commit(doc)?;

        tracing::info!(id, "event updated");
        Ok(self.events[index].clone())
    }
}
