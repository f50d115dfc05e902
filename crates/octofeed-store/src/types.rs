//! Model types for stored activity records.

use chrono::{DateTime, NaiveDateTime, Utc};

/// Wire timestamp format for event records (`yyyy-MM-dd HH:mm:ss`).
pub const EVENT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Event kind that counts toward push streaks.
pub const PUSH_EVENT: &str = "PushEvent";

/// A GitHub-style user identity associated with events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub id: i64,
    /// Immutable once stored; update requests must match this value.
    pub login: String,
    pub avatar: String,
}

/// A repository events are performed against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repo {
    pub id: i64,
    pub name: String,
    pub url: String,
}

/// A timestamped action performed by an actor against a repository.
///
/// The embedded actor and repo are owned copies; ingestion writes them
/// through to their own tables and keeps the copies in line with later
/// upserts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: i64,
    /// Event type string (wire field `type`).
    pub kind: String,
    pub actor: Actor,
    pub repo: Repo,
    pub created_at: DateTime<Utc>,
}

/// Parse a wire timestamp, substituting the current instant when the
/// string does not match [`EVENT_TIME_FORMAT`].
///
/// Stateless; safe to call from concurrent request handlers.
pub fn parse_event_time(raw: &str) -> DateTime<Utc> {
    NaiveDateTime::parse_from_str(raw, EVENT_TIME_FORMAT)
        .map(|naive| naive.and_utc())
        .unwrap_or_else(|_| Utc::now())
}

/// Render a stored timestamp back into the wire format.
pub fn format_event_time(at: DateTime<Utc>) -> String {
    at.format(EVENT_TIME_FORMAT).to_string()
}
