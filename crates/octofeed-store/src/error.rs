//! Error types for the entity store.

use thiserror::Error;

/// Errors that can occur in store operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// An event with this id has already been ingested.
    #[error("duplicate event id: {0}")]
    DuplicateEvent(i64),

    /// No actor with this id exists.
    #[error("actor not found: {0}")]
    ActorNotFound(i64),

    /// An update tried to change the immutable login field.
    #[error("login mismatch for actor {id}")]
    LoginMismatch { id: i64 },
}
