use axum::{
    extract::{Form, Path, State},
    response::{Html, Redirect},
};
use chrono::Utc;
use sea_orm::prelude::DateTimeWithTimeZone;

use crate::{
    db::repositories::{ArtistRepository, ShowRepository},
    error::{AppError, Result},
    forms::ArtistForm,
    state::AppState,
    templates::{
        artist_detail_page, artist_form_page, artists_page, search_results_page,
        ArtistDetailData, ArtistFormData, ArtistOverviewData, AttachedShowData, SearchResultData,
    },
};

use super::format_start_time;
use super::venues::SearchForm;

pub async fn list(State(state): State<AppState>) -> Result<Html<String>> {
    let artists = ArtistRepository::new(state.db.clone())
        .list_all()
        .await?
        .into_iter()
        .map(|a| ArtistOverviewData {
            id: a.id,
            name: a.name,
        })
        .collect::<Vec<_>>();

    Ok(Html(artists_page(&artists).into_string()))
}

pub async fn search(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Result<Html<String>> {
    let artists = ArtistRepository::new(state.db.clone());
    let shows = ShowRepository::new(state.db.clone());
    let now: DateTimeWithTimeZone = Utc::now().into();

    let mut results = Vec::new();
    for artist in artists.search_by_name(&form.search_term).await? {
        let num_upcoming_shows = shows.count_upcoming_for_artist(artist.id, now).await?;
        results.push(SearchResultData {
            id: artist.id,
            name: artist.name,
            num_upcoming_shows,
        });
    }

    Ok(Html(
        search_results_page("Artist search", "/artists", &form.search_term, &results)
            .into_string(),
    ))
}

pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Html<String>> {
    let artist = ArtistRepository::new(state.db.clone())
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Artist {} not found", id)))?;

    let shows = ShowRepository::new(state.db.clone());
    let now: DateTimeWithTimeZone = Utc::now().into();

    let upcoming_shows = shows
        .upcoming_for_artist(id, now)
        .await?
        .into_iter()
        .map(|s| AttachedShowData {
            id: s.venue_id,
            name: s.venue_name,
            image_link: s.venue_image_link,
            start_time: format_start_time(s.start_time),
        })
        .collect();
    let past_shows = shows
        .past_for_artist(id, now)
        .await?
        .into_iter()
        .map(|s| AttachedShowData {
            id: s.venue_id,
            name: s.venue_name,
            image_link: s.venue_image_link,
            start_time: format_start_time(s.start_time),
        })
        .collect();

    let data = ArtistDetailData {
        id: artist.id,
        genres: artist.genre_list(),
        name: artist.name,
        city: artist.city,
        state: artist.state,
        phone: artist.phone,
        website: artist.website,
        facebook_link: artist.facebook_link,
        seeking_venue: artist.seeking_venue,
        seeking_description: artist.seeking_description,
        image_link: artist.image_link,
        past_shows,
        upcoming_shows,
    };

    Ok(Html(artist_detail_page(&data).into_string()))
}

pub async fn create_form() -> Html<String> {
    Html(
        artist_form_page("List an artist", "/artists/create", &ArtistFormData::default())
            .into_string(),
    )
}

pub async fn create(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Redirect> {
    let form = ArtistForm::from_pairs(&pairs)?;
    let now: DateTimeWithTimeZone = Utc::now().into();

    let artist = ArtistRepository::new(state.db.clone())
        .create(form.into_active_model(now)?)
        .await?;
    tracing::info!(artist_id = artist.id, name = %artist.name, "artist listed");

    Ok(Redirect::to("/"))
}

pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Html<String>> {
    let artist = ArtistRepository::new(state.db.clone())
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Artist {} not found", id)))?;

    let values = ArtistFormData {
        genres: artist.genre_list(),
        name: artist.name,
        city: artist.city,
        state: artist.state,
        phone: artist.phone.unwrap_or_default(),
        image_link: artist.image_link.unwrap_or_default(),
        website: artist.website.unwrap_or_default(),
        facebook_link: artist.facebook_link.unwrap_or_default(),
        seeking_venue: artist.seeking_venue,
        seeking_description: artist.seeking_description.unwrap_or_default(),
    };

    Ok(Html(
        artist_form_page("Edit artist", &format!("/artists/{}/edit", id), &values)
            .into_string(),
    ))
}

/// Full-record overwrite from the submitted form.
pub async fn edit(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Redirect> {
    let repo = ArtistRepository::new(state.db.clone());
    let existing = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Artist {} not found", id)))?;

    let form = ArtistForm::from_pairs(&pairs)?;
    let now: DateTimeWithTimeZone = Utc::now().into();
    repo.update(form.apply_to(existing, now)?).await?;

    Ok(Redirect::to(&format!("/artists/{}", id)))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Redirect> {
    let deleted = ArtistRepository::new(state.db.clone())
        .delete_by_id(id)
        .await?;
    if deleted == 0 {
        return Err(AppError::NotFound(format!("Artist {} not found", id)));
    }
    tracing::info!(artist_id = id, "artist deleted");

    Ok(Redirect::to("/"))
}
