//! Test utilities for Bandstand
//!
//! Provides helpers for creating isolated test environments with:
//! - In-memory SQLite databases (one per test)
//! - AppState factories
//! - Test data generators

use chrono::Utc;
use migration::MigratorTrait;
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::{ActiveModelTrait, Database, DatabaseConnection, Set};

use crate::config::Config;
use crate::db::entities::{artists, shows, venues};
use crate::state::AppState;

/// Setup an in-memory SQLite database with all migrations applied
///
/// Each call creates a fresh, isolated database perfect for parallel testing
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory database");

    // Run all migrations
    migration::Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Create a test configuration with sensible defaults
pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        server_host: "127.0.0.1".to_string(),
        server_port: 3000,
    }
}

/// Create a complete test AppState with an isolated database
pub async fn setup_test_app_state() -> AppState {
    let db = setup_test_db().await;
    AppState::new(db, test_config())
}

// ============================================================================
// Test Data Factories
// ============================================================================

/// Create a test venue in the database
pub async fn create_test_venue(
    db: &DatabaseConnection,
    name: &str,
    city: &str,
    state: &str,
) -> venues::Model {
    let now = Utc::now().into();
    let venue = venues::ActiveModel {
        name: Set(name.to_string()),
        city: Set(city.to_string()),
        state: Set(state.to_string()),
        address: Set("123 Main Street".to_string()),
        phone: Set(None),
        image_link: Set(None),
        website: Set(None),
        facebook_link: Set(None),
        genres: Set(r#"["Rock n Roll"]"#.to_string()),
        seeking_talent: Set(false),
        seeking_description: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    venue.insert(db).await.expect("Failed to insert test venue")
}

/// Create a test artist in the database
pub async fn create_test_artist(
    db: &DatabaseConnection,
    name: &str,
    city: &str,
    state: &str,
) -> artists::Model {
    let now = Utc::now().into();
    let artist = artists::ActiveModel {
        name: Set(name.to_string()),
        city: Set(city.to_string()),
        state: Set(state.to_string()),
        phone: Set(None),
        image_link: Set(None),
        website: Set(None),
        facebook_link: Set(None),
        genres: Set(r#"["Jazz"]"#.to_string()),
        seeking_venue: Set(false),
        seeking_description: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    artist.insert(db).await.expect("Failed to insert test artist")
}

/// Create a test show in the database
pub async fn create_test_show(
    db: &DatabaseConnection,
    artist_id: i32,
    venue_id: i32,
    start_time: DateTimeWithTimeZone,
) -> shows::Model {
    let now = Utc::now().into();
    let show = shows::ActiveModel {
        artist_id: Set(artist_id),
        venue_id: Set(venue_id),
        start_time: Set(start_time),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    show.insert(db).await.expect("Failed to insert test show")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_setup_test_db() {
        let db = setup_test_db().await;
        // Verify we can query the database (it has tables from migrations)
        use sea_orm::EntityTrait;
        let venues = venues::Entity::find().all(&db).await.unwrap();
        assert_eq!(venues.len(), 0);
    }

    #[tokio::test]
    async fn test_parallel_databases() {
        // Run two database setups in parallel - they should not interfere
        let (db1, db2) = tokio::join!(setup_test_db(), setup_test_db());

        let venue1 = create_test_venue(&db1, "Venue 1", "New York", "NY").await;
        let venue2 = create_test_venue(&db2, "Venue 2", "San Francisco", "CA").await;

        // Both should be ID 1 (separate databases)
        assert_eq!(venue1.id, 1);
        assert_eq!(venue2.id, 1);

        use sea_orm::EntityTrait;
        let db1_venues = venues::Entity::find().all(&db1).await.unwrap();
        let db2_venues = venues::Entity::find().all(&db2).await.unwrap();

        assert_eq!(db1_venues.len(), 1);
        assert_eq!(db2_venues.len(), 1);
        assert_eq!(db1_venues[0].name, "Venue 1");
        assert_eq!(db2_venues[0].name, "Venue 2");
    }
}
