//! Event storage in a single JSON document.
//!
//! [`EventStore`] owns the in-memory collection and rewrites the whole data
//! file after every mutation. Each mutating operation validates its input,
//! re-reads the document, mutates memory, then writes; if the write fails
//! the in-memory collection is already changed and the two disagree until
//! the next successful write.

mod create;
mod delete;
mod document;
mod list;
mod update;

use std::path::{Path, PathBuf};

use crate::error::EventosResult;
use crate::event::EventRecord;

pub struct EventStore {
    path: PathBuf,
    events: Vec<EventRecord>,
    next_id: u64,
}

impl EventStore {
    /// Load the collection from `path`.
    ///
    /// A missing file starts an empty store; the file is created by the first
    /// mutation.
    pub fn open(path: impl Into<PathBuf>) -> EventosResult<Self> {
        let path = path.into();
        let doc = document::read(&path)?;
        let events = document::records(&path, &doc)?;
        let next_id = events.iter().map(|e| e.id).max().map_or(1, |max| max + 1);

        tracing::info!(
            path = %path.display(),
            events = events.len(),
            next_id,
            "event store opened"
        );

        Ok(EventStore {
            path,
            events,
            next_id,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    fn position(&self, id: u64) -> Option<usize> {
        self.events.iter().position(|e| e.id == id)
    }

    fn commit(&self, doc: document::Document) -> EventosResult<()> {
        document::write(&self.path, doc, &self.events)
    }
}
