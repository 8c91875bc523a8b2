use axum::{
    extract::{Form, State},
    response::{Html, Redirect},
};
use chrono::Utc;
use sea_orm::prelude::DateTimeWithTimeZone;

use crate::{
    db::repositories::ShowRepository,
    error::Result,
    forms::ShowForm,
    state::AppState,
    templates::{show_form_page, shows_page, ShowRowData},
};

use super::format_start_time;

pub async fn list(State(state): State<AppState>) -> Result<Html<String>> {
    let shows = ShowRepository::new(state.db.clone())
        .list_with_details()
        .await?
        .into_iter()
        .map(|s| ShowRowData {
            venue_id: s.venue_id,
            venue_name: s.venue_name,
            artist_id: s.artist_id,
            artist_name: s.artist_name,
            artist_image_link: s.artist_image_link,
            start_time: format_start_time(s.start_time),
        })
        .collect::<Vec<_>>();

    Ok(Html(shows_page(&shows).into_string()))
}

pub async fn create_form() -> Html<String> {
    Html(show_form_page().into_string())
}

/// A show referencing a missing artist or venue is rejected by the
/// database's foreign keys; the handler only validates the field formats.
pub async fn create(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Redirect> {
    let form = ShowForm::from_pairs(&pairs)?;
    let now: DateTimeWithTimeZone = Utc::now().into();

    let show = ShowRepository::new(state.db.clone())
        .create(form.into_active_model(now))
        .await?;
    tracing::info!(
        show_id = show.id,
        artist_id = show.artist_id,
        venue_id = show.venue_id,
        "show listed"
    );

    Ok(Redirect::to("/"))
}
