use maud::{html, Markup};

/// Genres offered by the listing forms.
pub const GENRES: &[&str] = &[
    "Alternative",
    "Blues",
    "Classical",
    "Country",
    "Electronic",
    "Folk",
    "Funk",
    "Hip-Hop",
    "Heavy Metal",
    "Instrumental",
    "Jazz",
    "Musical Theatre",
    "Pop",
    "Punk",
    "R&B",
    "Reggae",
    "Rock n Roll",
    "Soul",
    "Other",
];

pub struct VenueOverviewData {
    pub id: i32,
    pub name: String,
    pub num_upcoming_shows: u64,
}

pub struct AreaData {
    pub city: String,
    pub state: String,
    pub venues: Vec<VenueOverviewData>,
}

pub struct ArtistOverviewData {
    pub id: i32,
    pub name: String,
}

pub struct SearchResultData {
    pub id: i32,
    pub name: String,
    pub num_upcoming_shows: u64,
}

/// A show as it appears on an entity's detail page: the other party's
/// id/name/image plus a preformatted start time.
pub struct AttachedShowData {
    pub id: i32,
    pub name: String,
    pub image_link: Option<String>,
    pub start_time: String,
}

pub struct ShowRowData {
    pub venue_id: i32,
    pub venue_name: String,
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: String,
}

pub struct VenueDetailData {
    pub id: i32,
    pub name: String,
    pub genres: Vec<String>,
    pub address: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    pub image_link: Option<String>,
    pub past_shows: Vec<AttachedShowData>,
    pub upcoming_shows: Vec<AttachedShowData>,
}

pub struct ArtistDetailData {
    pub id: i32,
    pub name: String,
    pub genres: Vec<String>,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub image_link: Option<String>,
    pub past_shows: Vec<AttachedShowData>,
    pub upcoming_shows: Vec<AttachedShowData>,
}

/// Prefill values for the venue form; `Default` gives the empty create form.
#[derive(Default)]
pub struct VenueFormData {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub image_link: String,
    pub website: String,
    pub facebook_link: String,
    pub genres: Vec<String>,
    pub seeking_talent: bool,
    pub seeking_description: String,
}

#[derive(Default)]
pub struct ArtistFormData {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub image_link: String,
    pub website: String,
    pub facebook_link: String,
    pub genres: Vec<String>,
    pub seeking_venue: bool,
    pub seeking_description: String,
}

pub fn genre_badges(genres: &[String]) -> Markup {
    html! {
        @for genre in genres {
            span class="badge" { (genre) }
        }
    }
}

pub fn attached_show_list(title: &str, link_prefix: &str, shows: &[AttachedShowData]) -> Markup {
    html! {
        h2 { (title) " (" (shows.len()) ")" }
        @if shows.is_empty() {
            p class="muted" { "No shows." }
        } @else {
            ul class="plain" {
                @for show in shows {
                    li class="card" {
                        a href={(link_prefix) "/" (show.id)} { (show.name) }
                        span class="muted" { " - " (show.start_time) }
                    }
                }
            }
        }
    }
}

pub fn text_field(name: &str, label: &str, value: &str) -> Markup {
    html! {
        label for=(name) { (label) }
        input type="text" id=(name) name=(name) value=(value);
    }
}

pub fn genre_checkboxes(selected: &[String]) -> Markup {
    html! {
        label { "Genres" }
        div {
            @for genre in GENRES {
                span style="display: inline-block; margin-right: 0.75rem;" {
                    input type="checkbox" name="genres" value=(genre)
                        checked[selected.iter().any(|g| g == genre)];
                    " " (genre)
                }
            }
        }
    }
}

pub fn seeking_fields(flag_name: &str, flag_label: &str, checked: bool, description: &str) -> Markup {
    html! {
        label {
            input type="checkbox" name=(flag_name) value="y" checked[checked];
            " " (flag_label)
        }
        (text_field("seeking_description", "Seeking description", description))
    }
}
