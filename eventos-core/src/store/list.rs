//! Read access to the stored events.

use super::EventStore;
use crate::error::{EventosError, EventosResult};
use crate::event::EventRecord;

impl EventStore {
    /// All events in insertion order.
    pub fn list(&self) -> &[EventRecord] {
        &self.events
    }

    pub fn get(&self, id: u64) -> EventosResult<&EventRecord> {
        self.events
            .iter()
            .find(|e| e.id == id)
            .ok_or(EventosError::EventNotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::{new_event, temp_store};
    use crate::error::EventosError;

    #[test]
    fn test_list_keeps_insertion_order() {
        let (_dir, mut store) = temp_store();
        for title in ["Uno", "Dos", "Tres"] {
            store.create(new_event(title)).unwrap();
        }

        let titles: Vec<&str> = store.list().iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Uno", "Dos", "Tres"]);
    }

    #[test]
    fn test_get_unknown_id() {
        let (_dir, store) = temp_store();
        assert!(matches!(store.get(999), Err(EventosError::EventNotFound(999))));
    }
}
