//! Integration tests for show routes

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Request, StatusCode},
    Router,
};
use chrono::{Duration, Utc};
use pretty_assertions::assert_eq;
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::EntityTrait;
use tower::util::ServiceExt;

use bandstand::db::entities::shows;
use bandstand::handlers;
use bandstand::state::AppState;
use bandstand::test_utils::*;

fn create_test_router(state: &AppState) -> Router {
    Router::new()
        .merge(handlers::routes())
        .with_state(state.clone())
}

fn form_request(uri: &str, pairs: &[(&str, &str)]) -> Request<Body> {
    let body = serde_urlencoded::to_string(pairs).unwrap();
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_shows_page_lists_joined_names() {
    let state = setup_test_app_state().await;
    let venue = create_test_venue(&state.db, "The Musical Hop", "San Francisco", "CA").await;
    let artist = create_test_artist(&state.db, "Guns N Petals", "San Francisco", "CA").await;
    let start: DateTimeWithTimeZone = (Utc::now() + Duration::days(5)).into();
    create_test_show(&state.db, artist.id, venue.id, start).await;

    let app = create_test_router(&state);
    let response = app
        .oneshot(
            Request::builder()
                .uri("/shows")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("Guns N Petals"));
    assert!(body.contains("The Musical Hop"));
}

#[tokio::test]
async fn test_create_show_form_renders() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/shows/create")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("name=\"start_time\""));
}

#[tokio::test]
async fn test_create_show_persists_record() {
    let state = setup_test_app_state().await;
    let venue = create_test_venue(&state.db, "The Musical Hop", "San Francisco", "CA").await;
    let artist = create_test_artist(&state.db, "Guns N Petals", "San Francisco", "CA").await;

    let app = create_test_router(&state);
    let response = app
        .oneshot(form_request(
            "/shows/create",
            &[
                ("artist_id", &artist.id.to_string()),
                ("venue_id", &venue.id.to_string()),
                ("start_time", "2035-04-01T20:00"),
            ],
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let saved = shows::Entity::find().one(&state.db).await.unwrap().unwrap();
    assert_eq!(saved.artist_id, artist.id);
    assert_eq!(saved.venue_id, venue.id);
}

#[tokio::test]
async fn test_create_show_with_missing_artist_is_rejected() {
    let state = setup_test_app_state().await;
    let venue = create_test_venue(&state.db, "The Musical Hop", "San Francisco", "CA").await;

    let app = create_test_router(&state);
    let response = app
        .oneshot(form_request(
            "/shows/create",
            &[
                ("artist_id", "99999"),
                ("venue_id", &venue.id.to_string()),
                ("start_time", "2035-04-01T20:00"),
            ],
        ))
        .await
        .unwrap();

    // The foreign key rejects the insert; the handler surfaces a generic error
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let saved = shows::Entity::find().all(&state.db).await.unwrap();
    assert!(saved.is_empty(), "no partial show may persist");
}

#[tokio::test]
async fn test_create_show_with_invalid_timestamp_is_rejected() {
    let state = setup_test_app_state().await;
    let venue = create_test_venue(&state.db, "The Musical Hop", "San Francisco", "CA").await;
    let artist = create_test_artist(&state.db, "Guns N Petals", "San Francisco", "CA").await;

    let app = create_test_router(&state);
    let response = app
        .oneshot(form_request(
            "/shows/create",
            &[
                ("artist_id", &artist.id.to_string()),
                ("venue_id", &venue.id.to_string()),
                ("start_time", "whenever"),
            ],
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let saved = shows::Entity::find().all(&state.db).await.unwrap();
    assert!(saved.is_empty());
}

#[tokio::test]
async fn test_health_check() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "ok");
}
