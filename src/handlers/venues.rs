use axum::{
    extract::{Form, Path, State},
    response::{Html, Redirect},
};
use chrono::Utc;
use sea_orm::prelude::DateTimeWithTimeZone;
use serde::Deserialize;

use crate::{
    db::repositories::{ShowRepository, VenueRepository},
    error::{AppError, Result},
    forms::VenueForm,
    state::AppState,
    templates::{
        search_results_page, venue_detail_page, venue_form_page, venues_page, AreaData,
        AttachedShowData, SearchResultData, VenueDetailData, VenueFormData, VenueOverviewData,
    },
};

use super::format_start_time;

#[derive(Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub search_term: String,
}

/// Venues grouped by distinct (city, state), each with its upcoming-show count.
pub async fn list(State(state): State<AppState>) -> Result<Html<String>> {
    let venues = VenueRepository::new(state.db.clone());
    let shows = ShowRepository::new(state.db.clone());
    let now: DateTimeWithTimeZone = Utc::now().into();

    let mut areas = Vec::new();
    for (city, us_state) in venues.distinct_locations().await? {
        let mut area_venues = Vec::new();
        for venue in venues.find_by_city_and_state(&city, &us_state).await? {
            let num_upcoming_shows = shows.count_upcoming_for_venue(venue.id, now).await?;
            area_venues.push(VenueOverviewData {
                id: venue.id,
                name: venue.name,
                num_upcoming_shows,
            });
        }
        areas.push(AreaData {
            city,
            state: us_state,
            venues: area_venues,
        });
    }

    Ok(Html(venues_page(&areas).into_string()))
}

/// Case-insensitive substring search over venue names.
pub async fn search(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Result<Html<String>> {
    let venues = VenueRepository::new(state.db.clone());
    let shows = ShowRepository::new(state.db.clone());
    let now: DateTimeWithTimeZone = Utc::now().into();

    let mut results = Vec::new();
    for venue in venues.search_by_name(&form.search_term).await? {
        let num_upcoming_shows = shows.count_upcoming_for_venue(venue.id, now).await?;
        results.push(SearchResultData {
            id: venue.id,
            name: venue.name,
            num_upcoming_shows,
        });
    }

    Ok(Html(
        search_results_page("Venue search", "/venues", &form.search_term, &results)
            .into_string(),
    ))
}

pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Html<String>> {
    let venue = VenueRepository::new(state.db.clone())
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Venue {} not found", id)))?;

    let shows = ShowRepository::new(state.db.clone());
    let now: DateTimeWithTimeZone = Utc::now().into();

    let upcoming_shows = shows
        .upcoming_for_venue(id, now)
        .await?
        .into_iter()
        .map(|s| AttachedShowData {
            id: s.artist_id,
            name: s.artist_name,
            image_link: s.artist_image_link,
            start_time: format_start_time(s.start_time),
        })
        .collect();
    let past_shows = shows
        .past_for_venue(id, now)
        .await?
        .into_iter()
        .map(|s| AttachedShowData {
            id: s.artist_id,
            name: s.artist_name,
            image_link: s.artist_image_link,
            start_time: format_start_time(s.start_time),
        })
        .collect();

    let data = VenueDetailData {
        id: venue.id,
        genres: venue.genre_list(),
        name: venue.name,
        address: venue.address,
        city: venue.city,
        state: venue.state,
        phone: venue.phone,
        website: venue.website,
        facebook_link: venue.facebook_link,
        seeking_talent: venue.seeking_talent,
        seeking_description: venue.seeking_description,
        image_link: venue.image_link,
        past_shows,
        upcoming_shows,
    };

    Ok(Html(venue_detail_page(&data).into_string()))
}

pub async fn create_form() -> Html<String> {
    Html(
        venue_form_page("List a venue", "/venues/create", &VenueFormData::default())
            .into_string(),
    )
}

pub async fn create(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Redirect> {
    let form = VenueForm::from_pairs(&pairs)?;
    let now: DateTimeWithTimeZone = Utc::now().into();

    let venue = VenueRepository::new(state.db.clone())
        .create(form.into_active_model(now)?)
        .await?;
    tracing::info!(venue_id = venue.id, name = %venue.name, "venue listed");

    Ok(Redirect::to("/"))
}

pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Html<String>> {
    let venue = VenueRepository::new(state.db.clone())
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Venue {} not found", id)))?;

    let values = VenueFormData {
        genres: venue.genre_list(),
        name: venue.name,
        city: venue.city,
        state: venue.state,
        address: venue.address,
        phone: venue.phone.unwrap_or_default(),
        image_link: venue.image_link.unwrap_or_default(),
        website: venue.website.unwrap_or_default(),
        facebook_link: venue.facebook_link.unwrap_or_default(),
        seeking_talent: venue.seeking_talent,
        seeking_description: venue.seeking_description.unwrap_or_default(),
    };

    Ok(Html(
        venue_form_page("Edit venue", &format!("/venues/{}/edit", id), &values).into_string(),
    ))
}

/// Full-record overwrite from the submitted form.
pub async fn edit(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Redirect> {
    let repo = VenueRepository::new(state.db.clone());
    let existing = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Venue {} not found", id)))?;

    let form = VenueForm::from_pairs(&pairs)?;
    let now: DateTimeWithTimeZone = Utc::now().into();
    repo.update(form.apply_to(existing, now)?).await?;

    Ok(Redirect::to(&format!("/venues/{}", id)))
}

/// Deleting a venue removes its shows through the cascade foreign key.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Redirect> {
    let deleted = VenueRepository::new(state.db.clone())
        .delete_by_id(id)
        .await?;
    if deleted == 0 {
        return Err(AppError::NotFound(format!("Venue {} not found", id)));
    }
    tracing::info!(venue_id = id, "venue deleted");

    Ok(Redirect::to("/"))
}
