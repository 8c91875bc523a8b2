pub mod artists;
pub mod health;
pub mod shows;
pub mod venues;

use axum::{
    response::Html,
    routing::{get, post},
    Router,
};
use sea_orm::prelude::DateTimeWithTimeZone;

use crate::error::AppError;
use crate::state::AppState;
use crate::templates::home_page;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/health", get(health::health_check))
        // Venues
        .route("/venues", get(venues::list))
        .route("/venues/search", post(venues::search))
        .route("/venues/create", get(venues::create_form).post(venues::create))
        .route("/venues/:id", get(venues::detail).delete(venues::delete))
        .route("/venues/:id/edit", get(venues::edit_form).post(venues::edit))
        // Artists
        .route("/artists", get(artists::list))
        .route("/artists/search", post(artists::search))
        .route("/artists/create", get(artists::create_form).post(artists::create))
        .route("/artists/:id", get(artists::detail).delete(artists::delete))
        .route("/artists/:id/edit", get(artists::edit_form).post(artists::edit))
        // Shows
        .route("/shows", get(shows::list))
        .route("/shows/create", get(shows::create_form).post(shows::create))
        .fallback(not_found)
}

async fn home() -> Html<String> {
    Html(home_page().into_string())
}

async fn not_found() -> AppError {
    AppError::NotFound("The page you were looking for does not exist.".to_string())
}

pub(crate) fn format_start_time(start_time: DateTimeWithTimeZone) -> String {
    start_time.format("%Y-%m-%d %H:%M").to_string()
}
