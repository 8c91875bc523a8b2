//! Integration tests for venue routes
//!
//! Drives the real router with url-encoded form submissions and verifies
//! the persisted state afterwards.

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

use bandstand::db::entities::{shows, venues};
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
async fn test_venues_page_groups_by_city_and_state() {
    let state = setup_test_app_state().await;
    create_test_venue(&state.db, "The Musical Hop", "San Francisco", "CA").await;
    create_test_venue(&state.db, "The Dueling Pianos Bar", "New York", "NY").await;

    let app = create_test_router(&state);
    let response = app
        .oneshot(
            Request::builder()
                .uri("/venues")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("San Francisco, CA"));
    assert!(body.contains("New York, NY"));
    assert!(body.contains("The Musical Hop"));
    assert!(body.contains("The Dueling Pianos Bar"));
}

#[tokio::test]
async fn test_venue_search_is_case_insensitive() {
    let state = setup_test_app_state().await;
    create_test_venue(&state.db, "ABC Lounge", "New York", "NY").await;
    create_test_venue(&state.db, "The Musical Hop", "San Francisco", "CA").await;

    let app = create_test_router(&state);
    let response = app
        .oneshot(form_request("/venues/search", &[("search_term", "abc")]))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("1 results found"));
    assert!(body.contains("ABC Lounge"));
    assert!(!body.contains("The Musical Hop"));
}

#[tokio::test]
async fn test_venue_detail_shows_profile_and_show_buckets() {
    let state = setup_test_app_state().await;
    let venue = create_test_venue(&state.db, "The Musical Hop", "San Francisco", "CA").await;
    let artist = create_test_artist(&state.db, "Guns N Petals", "San Francisco", "CA").await;

    let past: DateTimeWithTimeZone = (Utc::now() - Duration::days(30)).into();
    let upcoming: DateTimeWithTimeZone = (Utc::now() + Duration::days(30)).into();
    create_test_show(&state.db, artist.id, venue.id, past).await;
    create_test_show(&state.db, artist.id, venue.id, upcoming).await;

    let app = create_test_router(&state);
    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/venues/{}", venue.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("The Musical Hop"));
    assert!(body.contains("Upcoming shows (1)"));
    assert!(body.contains("Past shows (1)"));
    assert!(body.contains("Guns N Petals"));
}

#[tokio::test]
async fn test_venue_detail_missing_returns_404() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/venues/42")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_venue_form_renders() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/venues/create")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("List a venue"));
    assert!(body.contains("name=\"genres\""));
}

#[tokio::test]
async fn test_create_venue_persists_submitted_fields() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(form_request(
            "/venues/create",
            &[
                ("name", "The Musical Hop"),
                ("city", "San Francisco"),
                ("state", "CA"),
                ("address", "1015 Folsom Street"),
                ("phone", "123-123-1234"),
                ("image_link", "https://example.com/hop.jpg"),
                ("website_link", "https://themusicalhop.com"),
                ("facebook_link", "https://www.facebook.com/TheMusicalHop"),
                ("genres", "Jazz"),
                ("genres", "Reggae"),
                ("genres", "Classical"),
                ("seeking_talent", "y"),
                ("seeking_description", "Looking for a local artist."),
            ],
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let saved = venues::Entity::find().one(&state.db).await.unwrap().unwrap();
    assert_eq!(saved.name, "The Musical Hop");
    assert_eq!(saved.city, "San Francisco");
    assert_eq!(saved.state, "CA");
    assert_eq!(saved.address, "1015 Folsom Street");
    assert_eq!(saved.phone, Some("123-123-1234".to_string()));
    assert_eq!(saved.website, Some("https://themusicalhop.com".to_string()));
    assert_eq!(saved.genre_list(), vec!["Jazz", "Reggae", "Classical"]);
    assert!(saved.seeking_talent);
    assert_eq!(
        saved.seeking_description,
        Some("Looking for a local artist.".to_string())
    );
}

#[tokio::test]
async fn test_create_venue_missing_required_field_is_rejected() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(form_request(
            "/venues/create",
            &[("name", "The Musical Hop"), ("city", "San Francisco")],
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let saved = venues::Entity::find().all(&state.db).await.unwrap();
    assert!(saved.is_empty(), "rejected submission must not persist");
}

#[tokio::test]
async fn test_edit_venue_is_full_overwrite() {
    let state = setup_test_app_state().await;
    let venue = create_test_venue(&state.db, "The Musical Hop", "San Francisco", "CA").await;

    let app = create_test_router(&state);
    let response = app
        .oneshot(form_request(
            &format!("/venues/{}/edit", venue.id),
            &[
                ("name", "The Musical Hop II"),
                ("city", "Oakland"),
                ("state", "CA"),
                ("address", "500 Broadway"),
                ("genres", "Blues"),
                // no phone, no seeking_talent checkbox
            ],
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let saved = venues::Entity::find_by_id(venue.id)
        .one(&state.db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(saved.name, "The Musical Hop II");
    assert_eq!(saved.city, "Oakland");
    assert_eq!(saved.address, "500 Broadway");
    assert_eq!(saved.genre_list(), vec!["Blues"]);
    assert_eq!(saved.phone, None, "cleared field must be overwritten");
    assert!(!saved.seeking_talent);
}

#[tokio::test]
async fn test_edit_form_prefills_existing_values() {
    let state = setup_test_app_state().await;
    let venue = create_test_venue(&state.db, "The Musical Hop", "San Francisco", "CA").await;

    let app = create_test_router(&state);
    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/venues/{}/edit", venue.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("value=\"The Musical Hop\""));
    assert!(body.contains("value=\"San Francisco\""));
}

#[tokio::test]
async fn test_delete_venue_cascades_owned_shows() {
    let state = setup_test_app_state().await;
    let venue = create_test_venue(&state.db, "The Musical Hop", "San Francisco", "CA").await;
    let artist = create_test_artist(&state.db, "Guns N Petals", "San Francisco", "CA").await;
    let start: DateTimeWithTimeZone = (Utc::now() + Duration::days(7)).into();
    create_test_show(&state.db, artist.id, venue.id, start).await;

    let app = create_test_router(&state);
    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/venues/{}", venue.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let venues_left = venues::Entity::find().all(&state.db).await.unwrap();
    let shows_left = shows::Entity::find().all(&state.db).await.unwrap();
    assert!(venues_left.is_empty());
    assert!(shows_left.is_empty());
}

#[tokio::test]
async fn test_delete_missing_venue_returns_404() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/venues/42")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_route_renders_404_page() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/no-such-page")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_string(response).await;
    assert!(body.contains("404"));
}
