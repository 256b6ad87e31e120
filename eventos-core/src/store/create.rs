//! Create events.

use super::{EventStore, document};
use crate::error::EventosResult;
use crate::event::{EventRecord, NewEvent};

impl EventStore {
    /// Validate `fields`, assign the next identifier and persist.
    pub fn create(&mut self, fields: NewEvent) -> EventosResult<EventRecord> {
        let record = fields.into_record(self.next_id)?;
        let doc = document::read(&self.path)?;

        self.next_id += 1;
        self.events.push(record.clone());
        self.commit(doc)?;

        tracing::info!(id = record.id, title = %record.title, "event created");
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::{new_event, read_cards, temp_store};
    use crate::error::{EventosError, ValidationError};

    #[test]
    fn test_first_event_gets_id_one() {
        let (_dir, mut store) = temp_store();
        let created = store.create(new_event("Senderismo")).unwrap();

        assert_eq!(created.id, 1);
        assert_eq!(created.img_url, "");
        assert_eq!(read_cards(store.path()).len(), 1);
    }

    #[test]
    fn test_ids_are_not_reused_after_deleting_the_last() {
        let (_dir, mut store) = temp_store();
        store.create(new_event("A")).unwrap();
        let b = store.create(new_event("B")).unwrap();
        store.delete(b.id).unwrap();

        let c = store.create(new_event("C")).unwrap();
        assert_eq!(c.id, 3);
    }

    #[test]
    fn test_missing_date_time_rejected_without_writing() {
        let (_dir, mut store) = temp_store();
        let mut fields = new_event("Sin fecha");
        fields.date_time = None;

        let err = store.create(fields).unwrap_err();
        assert!(matches!(
            err,
            EventosError::Validation(ValidationError::MissingDateTime)
        ));
        assert!(err.to_string().contains("dateTime"));
        assert!(store.is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_corrupt_document_blocks_create() {
        let (_dir, mut store) = temp_store();
        store.create(new_event("A")).unwrap();
        std::fs::write(store.path(), "[[[").unwrap();

        assert!(matches!(
            store.create(new_event("B")),
            Err(EventosError::DocumentParse { .. })
        ));
        // Reads keep serving the in-memory snapshot
        assert_eq!(store.list().len(), 1);
    }
}
