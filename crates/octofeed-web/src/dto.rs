//! Wire records for the JSON API.

use serde::{Deserialize, Serialize};

use octofeed_store::{Actor, Event, Repo, format_event_time, parse_event_time};

/// Actor wire record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActorDto {
    pub id: i64,
    pub login: String,
    #[serde(rename = "avatar_url")]
    pub avatar: String,
}

/// Repo wire record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoDto {
    pub id: i64,
    pub name: String,
    pub url: String,
}

/// Event wire record with nested actor and repo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventDto {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    /// `yyyy-MM-dd HH:mm:ss`; an unparsable value falls back to the
    /// ingestion instant.
    pub created_at: String,
    pub actor: ActorDto,
    pub repo: RepoDto,
}

impl From<Actor> for ActorDto {
    fn from(actor: Actor) -> Self {
        Self {
            id: actor.id,
            login: actor.login,
            avatar: actor.avatar,
        }
    }
}

impl From<ActorDto> for Actor {
    fn from(dto: ActorDto) -> Self {
        Self {
            id: dto.id,
            login: dto.login,
            avatar: dto.avatar,
        }
    }
}

impl From<Repo> for RepoDto {
    fn from(repo: Repo) -> Self {
        Self {
            id: repo.id,
            name: repo.name,
            url: repo.url,
        }
    }
}

impl From<RepoDto> for Repo {
    fn from(dto: RepoDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            url: dto.url,
        }
    }
}

impl EventDto {
    /// Build the stored event, parsing the timestamp with the
    /// current-instant fallback.
    pub fn into_event(self) -> Event {
        Event {
            id: self.id,
            kind: self.kind,
            actor: self.actor.into(),
            repo: self.repo.into(),
            created_at: parse_event_time(&self.created_at),
        }
    }
}

impl From<Event> for EventDto {
    fn from(event: Event) -> Self {
        Self {
            id: event.id,
            kind: event.kind,
            created_at: format_event_time(event.created_at),
            actor: event.actor.into(),
            repo: event.repo.into(),
        }
    }
}
