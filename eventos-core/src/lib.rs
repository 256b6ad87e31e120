//! Core types for eventos.
//!
//! This crate provides everything the server and CLI share:
//! - `EventRecord` and the create/update request shapes
//! - `store` for the JSON document holding every event
//! - `countdown` for the per-card countdown engine
//! - `format` for card date labels

pub mod config;
pub mod constants;
pub mod countdown;
pub mod error;
pub mod event;
pub mod format;
pub mod instant;
pub mod store;

pub use config::EventosConfig;
pub use error::{EventosError, EventosResult, TargetError, ValidationError};
pub use event::{EventPatch, EventRecord, NewEvent};
pub use store::EventStore;
