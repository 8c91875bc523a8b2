use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, JoinType,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::db::entities::{artists, shows, venues};
use crate::error::Result;

/// Case-insensitive substring pattern for name search.
///
/// Lowers both the column and the term so the match behaves the same on
/// Postgres and SQLite.
fn name_pattern(term: &str) -> String {
    format!("%{}%", term.to_lowercase())
}

pub struct VenueRepository {
    db: DatabaseConnection,
}

impl VenueRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list_all(&self) -> Result<Vec<venues::Model>> {
        Ok(venues::Entity::find()
            .order_by_asc(venues::Column::Name)
            .all(&self.db)
            .await?)
    }

    /// Unique (city, state) pairs across all venues.
    pub async fn distinct_locations(&self) -> Result<Vec<(String, String)>> {
        Ok(venues::Entity::find()
            .select_only()
            .column(venues::Column::City)
            .column(venues::Column::State)
            .distinct()
            .order_by_asc(venues::Column::State)
            .order_by_asc(venues::Column::City)
            .into_tuple()
            .all(&self.db)
            .await?)
    }

    pub async fn find_by_city_and_state(
        &self,
        city: &str,
        state: &str,
    ) -> Result<Vec<venues::Model>> {
        Ok(venues::Entity::find()
            .filter(venues::Column::City.eq(city))
            .filter(venues::Column::State.eq(state))
            .order_by_asc(venues::Column::Name)
            .all(&self.db)
            .await?)
    }

    /// Case-insensitive substring search over venue names, ordered by name.
    pub async fn search_by_name(&self, term: &str) -> Result<Vec<venues::Model>> {
        Ok(venues::Entity::find()
            .filter(
                Expr::expr(Func::lower(Expr::col((
                    venues::Entity,
                    venues::Column::Name,
                ))))
                .like(name_pattern(term)),
            )
            .order_by_asc(venues::Column::Name)
            .all(&self.db)
            .await?)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<venues::Model>> {
        Ok(venues::Entity::find_by_id(id).one(&self.db).await?)
    }

    pub async fn create(&self, venue: venues::ActiveModel) -> Result<venues::Model> {
        Ok(venue.insert(&self.db).await?)
    }

    pub async fn update(&self, venue: venues::ActiveModel) -> Result<venues::Model> {
        Ok(venue.update(&self.db).await?)
    }

    /// Delete a venue; owned shows go with it via the cascade foreign key.
    pub async fn delete_by_id(&self, id: i32) -> Result<u64> {
        let result = venues::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected)
    }
}

pub struct ArtistRepository {
    db: DatabaseConnection,
}

impl ArtistRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list_all(&self) -> Result<Vec<artists::Model>> {
        Ok(artists::Entity::find()
            .order_by_asc(artists::Column::Name)
            .all(&self.db)
            .await?)
    }

    pub async fn search_by_name(&self, term: &str) -> Result<Vec<artists::Model>> {
        Ok(artists::Entity::find()
            .filter(
                Expr::expr(Func::lower(Expr::col((
                    artists::Entity,
                    artists::Column::Name,
                ))))
                .like(name_pattern(term)),
            )
            .order_by_asc(artists::Column::Name)
            .all(&self.db)
            .await?)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<artists::Model>> {
        Ok(artists::Entity::find_by_id(id).one(&self.db).await?)
    }

    pub async fn create(&self, artist: artists::ActiveModel) -> Result<artists::Model> {
        Ok(artist.insert(&self.db).await?)
    }

    pub async fn update(&self, artist: artists::ActiveModel) -> Result<artists::Model> {
        Ok(artist.update(&self.db).await?)
    }

    pub async fn delete_by_id(&self, id: i32) -> Result<u64> {
        let result = artists::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected)
    }
}

/// Joined projection for the shows listing page.
#[derive(Debug, Clone, FromQueryResult)]
pub struct ShowDetails {
    pub venue_id: i32,
    pub venue_name: String,
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: sea_orm::prelude::DateTimeWithTimeZone,
}

/// A venue's show joined with the performing artist.
#[derive(Debug, Clone, FromQueryResult)]
pub struct ShowWithArtist {
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: sea_orm::prelude::DateTimeWithTimeZone,
}

/// An artist's show joined with the hosting venue.
#[derive(Debug, Clone, FromQueryResult)]
pub struct ShowWithVenue {
    pub venue_id: i32,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub start_time: sea_orm::prelude::DateTimeWithTimeZone,
}

pub struct ShowRepository {
    db: DatabaseConnection,
}

impl ShowRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list_with_details(&self) -> Result<Vec<ShowDetails>> {
        Ok(shows::Entity::find()
            .select_only()
            .column(shows::Column::VenueId)
            .column_as(venues::Column::Name, "venue_name")
            .column(shows::Column::ArtistId)
            .column_as(artists::Column::Name, "artist_name")
            .column_as(artists::Column::ImageLink, "artist_image_link")
            .column(shows::Column::StartTime)
            .join(JoinType::InnerJoin, shows::Relation::Venue.def())
            .join(JoinType::InnerJoin, shows::Relation::Artist.def())
            .order_by_asc(shows::Column::StartTime)
            .into_model::<ShowDetails>()
            .all(&self.db)
            .await?)
    }

    pub async fn create(&self, show: shows::ActiveModel) -> Result<shows::Model> {
        Ok(show.insert(&self.db).await?)
    }

    fn venue_shows_base(venue_id: i32) -> sea_orm::Select<shows::Entity> {
        shows::Entity::find()
            .select_only()
            .column(shows::Column::ArtistId)
            .column_as(artists::Column::Name, "artist_name")
            .column_as(artists::Column::ImageLink, "artist_image_link")
            .column(shows::Column::StartTime)
            .join(JoinType::InnerJoin, shows::Relation::Artist.def())
            .filter(shows::Column::VenueId.eq(venue_id))
            .order_by_asc(shows::Column::StartTime)
    }

    /// Shows at a venue strictly after `now`. A show starting at exactly
    /// `now` is in neither the upcoming nor the past bucket.
    pub async fn upcoming_for_venue(
        &self,
        venue_id: i32,
        now: sea_orm::prelude::DateTimeWithTimeZone,
    ) -> Result<Vec<ShowWithArtist>> {
        Ok(Self::venue_shows_base(venue_id)
            .filter(shows::Column::StartTime.gt(now))
            .into_model::<ShowWithArtist>()
            .all(&self.db)
            .await?)
    }

    pub async fn past_for_venue(
        &self,
        venue_id: i32,
        now: sea_orm::prelude::DateTimeWithTimeZone,
    ) -> Result<Vec<ShowWithArtist>> {
        Ok(Self::venue_shows_base(venue_id)
            .filter(shows::Column::StartTime.lt(now))
            .into_model::<ShowWithArtist>()
            .all(&self.db)
            .await?)
    }

    fn artist_shows_base(artist_id: i32) -> sea_orm::Select<shows::Entity> {
        shows::Entity::find()
            .select_only()
            .column(shows::Column::VenueId)
            .column_as(venues::Column::Name, "venue_name")
            .column_as(venues::Column::ImageLink, "venue_image_link")
            .column(shows::Column::StartTime)
            .join(JoinType::InnerJoin, shows::Relation::Venue.def())
            .filter(shows::Column::ArtistId.eq(artist_id))
            .order_by_asc(shows::Column::StartTime)
    }

    pub async fn upcoming_for_artist(
        &self,
        artist_id: i32,
        now: sea_orm::prelude::DateTimeWithTimeZone,
    ) -> Result<Vec<ShowWithVenue>> {
        Ok(Self::artist_shows_base(artist_id)
            .filter(shows::Column::StartTime.gt(now))
            .into_model::<ShowWithVenue>()
            .all(&self.db)
            .await?)
    }

    pub async fn past_for_artist(
        &self,
        artist_id: i32,
        now: sea_orm::prelude::DateTimeWithTimeZone,
    ) -> Result<Vec<ShowWithVenue>> {
        Ok(Self::artist_shows_base(artist_id)
            .filter(shows::Column::StartTime.lt(now))
            .into_model::<ShowWithVenue>()
            .all(&self.db)
            .await?)
    }

    pub async fn count_upcoming_for_venue(
        &self,
        venue_id: i32,
        now: sea_orm::prelude::DateTimeWithTimeZone,
    ) -> Result<u64> {
        Ok(shows::Entity::find()
            .filter(shows::Column::VenueId.eq(venue_id))
            .filter(shows::Column::StartTime.gt(now))
            .count(&self.db)
            .await?)
    }

    pub async fn count_upcoming_for_artist(
        &self,
        artist_id: i32,
        now: sea_orm::prelude::DateTimeWithTimeZone,
    ) -> Result<u64> {
        Ok(shows::Entity::find()
            .filter(shows::Column::ArtistId.eq(artist_id))
            .filter(shows::Column::StartTime.gt(now))
            .count(&self.db)
            .await?)
    }
}
