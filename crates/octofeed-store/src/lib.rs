//! In-memory entity store for GitHub-style activity events.
//!
//! This crate provides the model types and a single-node store with the
//! CRUD surface the API needs:
//! - Event ingestion with duplicate-id rejection and actor/repo write-through
//! - Ascending-by-id scans, full and per-actor
//! - Avatar updates that leave every other actor field untouched
//! - Bulk erase of events

mod error;
mod store;
mod types;

pub use error::StoreError;
pub use store::EventStore;
pub use types::{
    Actor, EVENT_TIME_FORMAT, Event, PUSH_EVENT, Repo, format_event_time, parse_event_time,
};
