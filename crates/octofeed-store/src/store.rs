//! In-memory entity store.

use std::collections::BTreeMap;

use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::{Actor, Event, Repo, StoreError};

/// In-memory tables for events, actors, and repos.
///
/// All methods take `&self`; a single `RwLock` guards the tables so the
/// duplicate-id check and the writes it gates happen atomically. Two
/// concurrent ingests of the same id resolve to exactly one success.
#[derive(Default)]
pub struct EventStore {
    inner: RwLock<Tables>,
}

#[derive(Default)]
struct Tables {
    events: BTreeMap<i64, Event>,
    actors: BTreeMap<i64, Actor>,
    repos: BTreeMap<i64, Repo>,
}

impl Tables {
    /// Replace the actor row and the copies embedded in stored events.
    fn upsert_actor(&mut self, actor: &Actor) {
        self.actors.insert(actor.id, actor.clone());
        for event in self.events.values_mut() {
            if event.actor.id == actor.id {
                event.actor = actor.clone();
            }
        }
    }

    fn upsert_repo(&mut self, repo: &Repo) {
        self.repos.insert(repo.id, repo.clone());
        for event in self.events.values_mut() {
            if event.repo.id == repo.id {
                event.repo = repo.clone();
            }
        }
    }
}

impl EventStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ingest an event, writing its actor and repo through to their tables.
    ///
    /// A duplicate event id is rejected before any table is touched.
    pub async fn insert_event(&self, event: Event) -> Result<(), StoreError> {
        let mut tables = self.inner.write().await;
        if tables.events.contains_key(&event.id) {
            return Err(StoreError::DuplicateEvent(event.id));
        }

        tables.upsert_actor(&event.actor);
        tables.upsert_repo(&event.repo);

        debug!(id = event.id, kind = %event.kind, actor = event.actor.id, "stored event");
        tables.events.insert(event.id, event);
        Ok(())
    }

    /// All events, ascending by id.
    pub async fn events(&self) -> Vec<Event> {
        self.inner.read().await.events.values().cloned().collect()
    }

    /// One actor's events, ascending by id.
    ///
    /// Fails with [`StoreError::ActorNotFound`] when the actor id is
    /// unknown. An actor that exists but has no events yields an empty
    /// vector.
    pub async fn events_for_actor(&self, actor_id: i64) -> Result<Vec<Event>, StoreError> {
        let tables = self.inner.read().await;
        if !tables.actors.contains_key(&actor_id) {
            return Err(StoreError::ActorNotFound(actor_id));
        }
        Ok(tables
            .events
            .values()
            .filter(|event| event.actor.id == actor_id)
            .cloned()
            .collect())
    }

    /// Look up a single actor.
    pub async fn find_actor(&self, id: i64) -> Option<Actor> {
        self.inner.read().await.actors.get(&id).cloned()
    }

    /// All known actors, ascending by id.
    pub async fn actors(&self) -> Vec<Actor> {
        self.inner.read().await.actors.values().cloned().collect()
    }

    /// Update an actor's avatar, leaving every other field untouched.
    ///
    /// The provided login must match the stored one; login is immutable
    /// through this operation and a mismatch leaves the record unchanged.
    pub async fn update_avatar(
        &self,
        id: i64,
        login: &str,
        avatar: &str,
    ) -> Result<Actor, StoreError> {
        let mut tables = self.inner.write().await;
        let stored = tables.actors.get(&id).ok_or(StoreError::ActorNotFound(id))?;
        if stored.login != login {
            return Err(StoreError::LoginMismatch { id });
        }

        let updated = Actor {
            avatar: avatar.to_string(),
            ..stored.clone()
        };
        tables.upsert_actor(&updated);
        Ok(updated)
    }

    /// Erase all events. Actors and repos survive.
    pub async fn clear_events(&self) {
        let mut tables = self.inner.write().await;
        let count = tables.events.len();
        tables.events.clear();
        info!(count, "erased all events");
    }
}
