//! Web routes.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use octofeed_rank::{RankMode, rank_actors};
use octofeed_store::EventStore;

use crate::dto::{ActorDto, EventDto};
use crate::error::ApiError;

/// Shared state for the API server.
pub struct AppState {
    pub store: EventStore,
}

/// Create the API router.
pub fn create_router(store: EventStore) -> Router {
    let state = Arc::new(AppState { store });

    Router::new()
        .route("/", get(index))
        .route("/erase", delete(erase_events))
        .route("/events", post(create_event).get(list_events))
        .route("/events/actors/{actor_id}", get(events_by_actor))
        .route("/actors", put(update_actor).get(actors_by_count))
        .route("/actors/streak", get(actors_by_streak))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Liveness probe.
async fn index() -> &'static str {
    "octofeed event api"
}

async fn erase_events(State(state): State<Arc<AppState>>) -> StatusCode {
    state.store.clear_events().await;
    StatusCode::OK
}

async fn create_event(
    State(state): State<Arc<AppState>>,
    Json(body): Json<EventDto>,
) -> Result<StatusCode, ApiError> {
    state.store.insert_event(body.into_event()).await?;
    Ok(StatusCode::CREATED)
}

async fn list_events(State(state): State<Arc<AppState>>) -> Json<Vec<EventDto>> {
    let events = state.store.events().await;
    Json(events.into_iter().map(EventDto::from).collect())
}

async fn events_by_actor(
    State(state): State<Arc<AppState>>,
    Path(actor_id): Path<i64>,
) -> Result<Json<Vec<EventDto>>, ApiError> {
    let events = state.store.events_for_actor(actor_id).await?;
    Ok(Json(events.into_iter().map(EventDto::from).collect()))
}

async fn update_actor(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ActorDto>,
) -> Result<Json<ActorDto>, ApiError> {
    let updated = state
        .store
        .update_avatar(body.id, &body.login, &body.avatar)
        .await?;
    Ok(Json(ActorDto::from(updated)))
}

async fn actors_by_count(State(state): State<Arc<AppState>>) -> Json<Vec<ActorDto>> {
    ranked(&state, RankMode::ByCount).await
}

async fn actors_by_streak(State(state): State<Arc<AppState>>) -> Json<Vec<ActorDto>> {
    ranked(&state, RankMode::ByStreak).await
}

/// Snapshot the store and rank actors under the given mode.
async fn ranked(state: &AppState, mode: RankMode) -> Json<Vec<ActorDto>> {
    let events = state.store.events().await;
    let actors = state.store.actors().await;
    let ordered = rank_actors(&events, &actors, mode);
    Json(ordered.into_iter().map(ActorDto::from).collect())
}
