//! End-to-end tests for the HTTP surface, driven through the router
//! in-process with `tower::ServiceExt::oneshot`.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use tower::ServiceExt;

use octofeed_store::EventStore;
use octofeed_web::create_router;

fn app() -> Router {
    create_router(EventStore::new())
}

fn event_json(id: i64, kind: &str, created_at: &str, actor_id: i64, login: &str) -> Value {
    json!({
        "id": id,
        "type": kind,
        "created_at": created_at,
        "actor": {
            "id": actor_id,
            "login": login,
            "avatar_url": format!("https://avatars.example/{login}"),
        },
        "repo": {
            "id": 100,
            "name": "repo-100",
            "url": "https://github.example/repo-100",
        },
    })
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}

async fn post_event(app: &Router, body: &Value) -> StatusCode {
    let request = Request::builder()
        .method("POST")
        .uri("/events")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await.0
}

async fn put_actor(app: &Router, body: &Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("PUT")
        .uri("/actors")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

fn ranked_logins(body: &Value) -> Vec<&str> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|actor| actor["login"].as_str().unwrap())
        .collect()
}

#[tokio::test]
async fn liveness_endpoint_answers() {
    let app = app();
    let response = app
        .clone()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn ingested_events_list_ascending_by_id() {
    let app = app();
    for id in [3, 1, 2] {
        let body = event_json(id, "PushEvent", "2021-01-01 10:00:00", 1, "ada");
        assert_eq!(post_event(&app, &body).await, StatusCode::CREATED);
    }

    let (status, body) = get(&app, "/events").await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|event| event["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 3]);
    // Stored timestamps render back in the wire format.
    assert_eq!(body[0]["created_at"], "2021-01-01 10:00:00");
}

#[tokio::test]
async fn empty_event_listing_is_an_empty_array() {
    let (status, body) = get(&app(), "/events").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn duplicate_event_id_is_rejected() {
    let app = app();
    let first = event_json(1, "PushEvent", "2021-01-01 10:00:00", 1, "ada");
    assert_eq!(post_event(&app, &first).await, StatusCode::CREATED);

    let second = event_json(1, "CreateEvent", "2021-01-02 10:00:00", 2, "brian");
    assert_eq!(post_event(&app, &second).await, StatusCode::BAD_REQUEST);

    // The stored event is still the first one.
    let (_, body) = get(&app, "/events").await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["type"], "PushEvent");
}

#[tokio::test]
async fn unparsable_timestamp_is_accepted_with_fallback() {
    let app = app();
    let body = event_json(1, "PushEvent", "yesterday-ish", 1, "ada");
    assert_eq!(post_event(&app, &body).await, StatusCode::CREATED);

    let (_, listed) = get(&app, "/events").await;
    let created_at = listed[0]["created_at"].as_str().unwrap();
    // The garbage input was replaced by a well-formed instant.
    assert_ne!(created_at, "yesterday-ish");
    assert_eq!(created_at.len(), "2021-01-01 10:00:00".len());
}

#[tokio::test]
async fn events_by_actor_requires_known_actor() {
    let (status, _) = get(&app(), "/events/actors/42").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn events_by_actor_filters_and_ascends() {
    let app = app();
    let bodies = [
        event_json(4, "PushEvent", "2021-01-01 10:00:00", 1, "ada"),
        event_json(2, "PushEvent", "2021-01-02 10:00:00", 2, "brian"),
        event_json(3, "WatchEvent", "2021-01-03 10:00:00", 1, "ada"),
    ];
    for body in &bodies {
        post_event(&app, body).await;
    }

    let (status, body) = get(&app, "/events/actors/1").await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|event| event["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![3, 4]);
}

#[tokio::test]
async fn avatar_update_flow() {
    let app = app();
    post_event(
        &app,
        &event_json(1, "PushEvent", "2021-01-01 10:00:00", 1, "ada"),
    )
    .await;

    // Unknown actor id.
    let (status, _) = put_actor(
        &app,
        &json!({"id": 9, "login": "ada", "avatar_url": "https://x"}),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Login differs from the stored value.
    let (status, _) = put_actor(
        &app,
        &json!({"id": 1, "login": "eve", "avatar_url": "https://x"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Matching login updates the avatar and returns the record.
    let (status, body) = put_actor(
        &app,
        &json!({"id": 1, "login": "ada", "avatar_url": "https://avatars.example/next"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["login"], "ada");
    assert_eq!(body["avatar_url"], "https://avatars.example/next");

    // The update is visible through the event listing too.
    let (_, listed) = get(&app, "/events").await;
    assert_eq!(listed[0]["actor"]["avatar_url"], "https://avatars.example/next");
}

#[tokio::test]
async fn actors_ranked_by_event_count() {
    let app = app();
    let bodies = [
        event_json(1, "PushEvent", "2021-01-01 10:00:00", 1, "ada"),
        event_json(2, "WatchEvent", "2021-01-02 10:00:00", 2, "brian"),
        event_json(3, "PushEvent", "2021-01-03 10:00:00", 2, "brian"),
    ];
    for body in &bodies {
        post_event(&app, body).await;
    }

    let (status, body) = get(&app, "/actors").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ranked_logins(&body), vec!["brian", "ada"]);
}

#[tokio::test]
async fn actors_ranked_by_streak() {
    let app = app();
    let bodies = [
        // ada: pushes on three consecutive days, streak 2.
        event_json(1, "PushEvent", "2021-01-01 10:00:00", 1, "ada"),
        event_json(2, "PushEvent", "2021-01-02 09:00:00", 1, "ada"),
        event_json(3, "PushEvent", "2021-01-03 08:00:00", 1, "ada"),
        // brian: a single push, streak 0, but still listed.
        event_json(4, "PushEvent", "2021-01-04 10:00:00", 2, "brian"),
        // grace: no pushes at all, absent.
        event_json(5, "WatchEvent", "2021-01-05 10:00:00", 3, "grace"),
    ];
    for body in &bodies {
        post_event(&app, body).await;
    }

    let (status, body) = get(&app, "/actors/streak").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ranked_logins(&body), vec!["ada", "brian"]);
}

#[tokio::test]
async fn erase_clears_events_only() {
    let app = app();
    post_event(
        &app,
        &event_json(1, "PushEvent", "2021-01-01 10:00:00", 1, "ada"),
    )
    .await;

    let request = Request::builder()
        .method("DELETE")
        .uri("/erase")
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);

    let (_, events) = get(&app, "/events").await;
    assert_eq!(events, json!([]));

    // Actors survive the erase: the actor endpoint still resolves them,
    // even though the ranking (driven by events) is now empty.
    let (status, _) = get(&app, "/events/actors/1").await;
    assert_eq!(status, StatusCode::OK);

    let (_, ranked) = get(&app, "/actors").await;
    assert_eq!(ranked, json!([]));
}
