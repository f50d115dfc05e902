//! HTTP API for the octofeed event service.
//!
//! A thin axum layer over the entity store and ranking engine:
//! - Wire DTOs translating the JSON records to and from the stored model
//! - The route table for ingestion, listing, ranking, and avatar updates
//! - Status-code mapping for store rejections

mod dto;
mod error;
mod routes;

pub use dto::{ActorDto, EventDto, RepoDto};
pub use error::ApiError;
pub use routes::{AppState, create_router};
