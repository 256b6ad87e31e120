//! Reading and rewriting the persisted JSON document.
//!
//! The document is a JSON object whose `cards` array holds every record.
//! Other top-level keys are carried through untouched on every rewrite.

use std::path::Path;

use serde_json::{Map, Value};

use crate::constants::CARDS_KEY;
use crate::error::{EventosError, EventosResult};
use crate::event::EventRecord;

pub(super) type Document = Map<String, Value>;

/// Read the document; a missing file is an empty document.
pub(super) fn read(path: &Path) -> EventosResult<Document> {
    if !path.exists() {
        return Ok(Document::new());
    }

    let content = std::fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&content).map_err(|e| parse_error(path, e))?;

    match value {
        Value::Object(doc) => Ok(doc),
        _ => Err(parse_error(path, "top level is not a JSON object")),
    }
}

/// Records stored in `doc`; a missing `cards` key means none.
pub(super) fn records(path: &Path, doc: &Document) -> EventosResult<Vec<EventRecord>> {
    match doc.get(CARDS_KEY) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(cards) => {
            serde_json::from_value(cards.clone()).map_err(|e| parse_error(path, e))
        }
    }
}

/// Rewrite the whole file with `records` as the `cards` array.
pub(super) fn write(path: &Path, mut doc: Document, records: &[EventRecord]) -> EventosResult<()> {
    let cards =
        serde_json::to_value(records).map_err(|e| EventosError::Serialization(e.to_string()))?;
    doc.insert(CARDS_KEY.to_string(), cards);

    let content = serde_json::to_string_pretty(&Value::Object(doc))
        .map_err(|e| EventosError::Serialization(e.to_string()))?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| write_error(path, e))?;
    }

    std::fs::write(path, content).map_err(|e| write_error(path, e))
}

fn parse_error(path: &Path, reason: impl ToString) -> EventosError {
    EventosError::DocumentParse {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

fn write_error(path: &Path, reason: impl ToString) -> EventosError {
    EventosError::DocumentWrite {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}
