//! Typed decoding of url-encoded form submissions.
//!
//! The genre multi-select submits repeated `genres` keys, which the plain
//! struct deserializer cannot represent, so handlers extract the raw pair
//! list and fold it through these parsers. Validation failures are client
//! errors and never reach the database.

use chrono::{DateTime, NaiveDateTime};
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::Set;

use crate::db::entities::{artists, shows, venues};
use crate::error::{AppError, Result};

fn field<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
}

fn required(pairs: &[(String, String)], key: &str) -> Result<String> {
    match field(pairs, key) {
        Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        _ => Err(AppError::BadRequest(format!(
            "the {} field is required",
            key
        ))),
    }
}

fn optional(pairs: &[(String, String)], key: &str) -> Option<String> {
    field(pairs, key)
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn multi(pairs: &[(String, String)], key: &str) -> Vec<String> {
    pairs
        .iter()
        .filter(|(k, _)| k == key)
        .map(|(_, v)| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect()
}

/// Checkbox semantics: present in the submission means checked.
fn checkbox(pairs: &[(String, String)], key: &str) -> bool {
    field(pairs, key).is_some()
}

fn parse_id(pairs: &[(String, String)], key: &str) -> Result<i32> {
    required(pairs, key)?
        .parse()
        .map_err(|_| AppError::BadRequest(format!("the {} field must be a numeric id", key)))
}

/// Accepts RFC 3339, the HTML `datetime-local` format, and a plain
/// `YYYY-MM-DD HH:MM:SS`; naive values are taken as UTC.
fn parse_start_time(value: &str) -> Result<DateTimeWithTimeZone> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt);
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(naive.and_utc().into());
        }
    }
    Err(AppError::BadRequest(
        "the start_time field must be a valid date and time".to_string(),
    ))
}

#[derive(Debug, Clone)]
pub struct VenueForm {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub genres: Vec<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

impl VenueForm {
    pub fn from_pairs(pairs: &[(String, String)]) -> Result<Self> {
        Ok(Self {
            name: required(pairs, "name")?,
            city: required(pairs, "city")?,
            state: required(pairs, "state")?,
            address: required(pairs, "address")?,
            phone: optional(pairs, "phone"),
            image_link: optional(pairs, "image_link"),
            website: optional(pairs, "website_link"),
            facebook_link: optional(pairs, "facebook_link"),
            genres: multi(pairs, "genres"),
            seeking_talent: checkbox(pairs, "seeking_talent"),
            seeking_description: optional(pairs, "seeking_description"),
        })
    }

    pub fn into_active_model(self, now: DateTimeWithTimeZone) -> Result<venues::ActiveModel> {
        let genres = serde_json::to_string(&self.genres)?;
        Ok(venues::ActiveModel {
            name: Set(self.name),
            city: Set(self.city),
            state: Set(self.state),
            address: Set(self.address),
            phone: Set(self.phone),
            image_link: Set(self.image_link),
            website: Set(self.website),
            facebook_link: Set(self.facebook_link),
            genres: Set(genres),
            seeking_talent: Set(self.seeking_talent),
            seeking_description: Set(self.seeking_description),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        })
    }

    /// Full-record overwrite: every editable column is written, so fields
    /// cleared in the form are cleared on the record.
    pub fn apply_to(
        self,
        existing: venues::Model,
        now: DateTimeWithTimeZone,
    ) -> Result<venues::ActiveModel> {
        let genres = serde_json::to_string(&self.genres)?;
        let mut active: venues::ActiveModel = existing.into();
        active.name = Set(self.name);
        active.city = Set(self.city);
        active.state = Set(self.state);
        active.address = Set(self.address);
        active.phone = Set(self.phone);
        active.image_link = Set(self.image_link);
        active.website = Set(self.website);
        active.facebook_link = Set(self.facebook_link);
        active.genres = Set(genres);
        active.seeking_talent = Set(self.seeking_talent);
        active.seeking_description = Set(self.seeking_description);
        active.updated_at = Set(now);
        Ok(active)
    }
}

#[derive(Debug, Clone)]
pub struct ArtistForm {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub genres: Vec<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

impl ArtistForm {
    pub fn from_pairs(pairs: &[(String, String)]) -> Result<Self> {
        Ok(Self {
            name: required(pairs, "name")?,
            city: required(pairs, "city")?,
            state: required(pairs, "state")?,
            phone: optional(pairs, "phone"),
            image_link: optional(pairs, "image_link"),
            website: optional(pairs, "website_link"),
            facebook_link: optional(pairs, "facebook_link"),
            genres: multi(pairs, "genres"),
            seeking_venue: checkbox(pairs, "seeking_venue"),
            seeking_description: optional(pairs, "seeking_description"),
        })
    }

    pub fn into_active_model(self, now: DateTimeWithTimeZone) -> Result<artists::ActiveModel> {
        let genres = serde_json::to_string(&self.genres)?;
        Ok(artists::ActiveModel {
            name: Set(self.name),
            city: Set(self.city),
            state: Set(self.state),
            phone: Set(self.phone),
            image_link: Set(self.image_link),
            website: Set(self.website),
            facebook_link: Set(self.facebook_link),
            genres: Set(genres),
            seeking_venue: Set(self.seeking_venue),
            seeking_description: Set(self.seeking_description),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        })
    }

    pub fn apply_to(
        self,
        existing: artists::Model,
        now: DateTimeWithTimeZone,
    ) -> Result<artists::ActiveModel> {
        let genres = serde_json::to_string(&self.genres)?;
        let mut active: artists::ActiveModel = existing.into();
        active.name = Set(self.name);
        active.city = Set(self.city);
        active.state = Set(self.state);
        active.phone = Set(self.phone);
        active.image_link = Set(self.image_link);
        active.website = Set(self.website);
        active.facebook_link = Set(self.facebook_link);
        active.genres = Set(genres);
        active.seeking_venue = Set(self.seeking_venue);
        active.seeking_description = Set(self.seeking_description);
        active.updated_at = Set(now);
        Ok(active)
    }
}

#[derive(Debug, Clone)]
pub struct ShowForm {
    pub artist_id: i32,
    pub venue_id: i32,
    pub start_time: DateTimeWithTimeZone,
}

impl ShowForm {
    pub fn from_pairs(pairs: &[(String, String)]) -> Result<Self> {
        let start_time = parse_start_time(&required(pairs, "start_time")?)?;
        Ok(Self {
            artist_id: parse_id(pairs, "artist_id")?,
            venue_id: parse_id(pairs, "venue_id")?,
            start_time,
        })
    }

    pub fn into_active_model(self, now: DateTimeWithTimeZone) -> shows::ActiveModel {
        shows::ActiveModel {
            artist_id: Set(self.artist_id),
            venue_id: Set(self.venue_id),
            start_time: Set(self.start_time),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn venue_form_collects_repeated_genres_in_order() {
        let form = VenueForm::from_pairs(&pairs(&[
            ("name", "The Dueling Pianos Bar"),
            ("city", "New York"),
            ("state", "NY"),
            ("address", "335 Delancey Street"),
            ("genres", "Classical"),
            ("genres", "R&B"),
            ("genres", "Hip-Hop"),
        ]))
        .unwrap();

        assert_eq!(form.genres, vec!["Classical", "R&B", "Hip-Hop"]);
    }

    #[test]
    fn venue_form_rejects_missing_required_field() {
        let result = VenueForm::from_pairs(&pairs(&[
            ("name", "Park Square Live Music & Coffee"),
            ("city", "San Francisco"),
            ("state", "CA"),
        ]));

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[test]
    fn checkbox_is_true_only_when_present() {
        let base = [
            ("name", "Guns N Petals"),
            ("city", "San Francisco"),
            ("state", "CA"),
        ];

        let unchecked = ArtistForm::from_pairs(&pairs(&base)).unwrap();
        assert!(!unchecked.seeking_venue);

        let mut with_flag = base.to_vec();
        with_flag.push(("seeking_venue", "y"));
        let checked = ArtistForm::from_pairs(&pairs(&with_flag)).unwrap();
        assert!(checked.seeking_venue);
    }

    #[test]
    fn empty_optional_fields_become_none() {
        let form = VenueForm::from_pairs(&pairs(&[
            ("name", "The Musical Hop"),
            ("city", "San Francisco"),
            ("state", "CA"),
            ("address", "1015 Folsom Street"),
            ("phone", ""),
            ("website_link", "  "),
        ]))
        .unwrap();

        assert_eq!(form.phone, None);
        assert_eq!(form.website, None);
    }

    #[test]
    fn show_form_parses_datetime_local_as_utc() {
        let form = ShowForm::from_pairs(&pairs(&[
            ("artist_id", "4"),
            ("venue_id", "1"),
            ("start_time", "2035-04-01T20:00"),
        ]))
        .unwrap();

        assert_eq!(form.artist_id, 4);
        assert_eq!(form.venue_id, 1);
        assert_eq!(form.start_time.hour(), 20);
    }

    #[test]
    fn show_form_parses_rfc3339() {
        let form = ShowForm::from_pairs(&pairs(&[
            ("artist_id", "4"),
            ("venue_id", "1"),
            ("start_time", "2035-04-01T20:00:00+00:00"),
        ]))
        .unwrap();

        assert_eq!(form.start_time.hour(), 20);
    }

    #[test]
    fn show_form_rejects_non_numeric_ids() {
        let result = ShowForm::from_pairs(&pairs(&[
            ("artist_id", "the band"),
            ("venue_id", "1"),
            ("start_time", "2035-04-01T20:00"),
        ]));

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[test]
    fn show_form_rejects_garbage_timestamps() {
        let result = ShowForm::from_pairs(&pairs(&[
            ("artist_id", "4"),
            ("venue_id", "1"),
            ("start_time", "next friday"),
        ]));

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }
}
