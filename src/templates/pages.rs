use axum::http::StatusCode;
use maud::{html, Markup};

use super::components::{
    attached_show_list, genre_badges, genre_checkboxes, seeking_fields, text_field, AreaData,
    ArtistDetailData, ArtistFormData, ArtistOverviewData, SearchResultData, ShowRowData,
    VenueDetailData, VenueFormData,
};
use super::layout::base_layout;

pub fn home_page() -> Markup {
    base_layout(
        "Home",
        html! {
            h1 { "Bandstand" }
            p { "Browse the venues and artists playing in your city, or list your own." }
            ul class="plain" {
                li class="card" { a href="/venues" { "Browse venues" } }
                li class="card" { a href="/artists" { "Browse artists" } }
                li class="card" { a href="/shows" { "See upcoming shows" } }
            }
        },
    )
}

pub fn venues_page(areas: &[AreaData]) -> Markup {
    base_layout(
        "Venues",
        html! {
            h1 { "Venues" }
            (search_box("/venues/search", "Search venues"))
            @if areas.is_empty() {
                p class="muted" { "No venues listed yet." }
            }
            @for area in areas {
                div class="card" {
                    h2 { (area.city) ", " (area.state) }
                    ul class="plain" {
                        @for venue in &area.venues {
                            li {
                                a href={"/venues/" (venue.id)} { (venue.name) }
                                span class="muted" {
                                    " - " (venue.num_upcoming_shows) " upcoming shows"
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn artists_page(artists: &[ArtistOverviewData]) -> Markup {
    base_layout(
        "Artists",
        html! {
            h1 { "Artists" }
            (search_box("/artists/search", "Search artists"))
            @if artists.is_empty() {
                p class="muted" { "No artists listed yet." }
            }
            ul class="plain" {
                @for artist in artists {
                    li class="card" {
                        a href={"/artists/" (artist.id)} { (artist.name) }
                    }
                }
            }
        },
    )
}

pub fn search_results_page(
    title: &str,
    link_prefix: &str,
    term: &str,
    results: &[SearchResultData],
) -> Markup {
    base_layout(
        title,
        html! {
            h1 { (title) }
            p class="muted" {
                (results.len()) " results found for \"" (term) "\""
            }
            ul class="plain" {
                @for result in results {
                    li class="card" {
                        a href={(link_prefix) "/" (result.id)} { (result.name) }
                        span class="muted" {
                            " - " (result.num_upcoming_shows) " upcoming shows"
                        }
                    }
                }
            }
        },
    )
}

pub fn venue_detail_page(venue: &VenueDetailData) -> Markup {
    base_layout(
        &venue.name,
        html! {
            h1 { (venue.name) }
            (genre_badges(&venue.genres))
            div class="card" {
                p { (venue.address) ", " (venue.city) ", " (venue.state) }
                @if let Some(phone) = &venue.phone {
                    p { "Phone: " (phone) }
                }
                @if let Some(website) = &venue.website {
                    p { a href=(website) { (website) } }
                }
                @if let Some(facebook) = &venue.facebook_link {
                    p { a href=(facebook) { "Facebook" } }
                }
                @if venue.seeking_talent {
                    p { b { "Seeking talent" } }
                    @if let Some(description) = &venue.seeking_description {
                        p { (description) }
                    }
                } @else {
                    p class="muted" { "Not currently seeking talent" }
                }
                @if let Some(image) = &venue.image_link {
                    img src=(image) alt=(venue.name) style="max-width: 20rem;";
                }
            }
            (attached_show_list("Upcoming shows", "/artists", &venue.upcoming_shows))
            (attached_show_list("Past shows", "/artists", &venue.past_shows))
            p {
                a href={"/venues/" (venue.id) "/edit"} { "Edit venue" }
            }
        },
    )
}

pub fn artist_detail_page(artist: &ArtistDetailData) -> Markup {
    base_layout(
        &artist.name,
        html! {
            h1 { (artist.name) }
            (genre_badges(&artist.genres))
            div class="card" {
                p { (artist.city) ", " (artist.state) }
                @if let Some(phone) = &artist.phone {
                    p { "Phone: " (phone) }
                }
                @if let Some(website) = &artist.website {
                    p { a href=(website) { (website) } }
                }
                @if let Some(facebook) = &artist.facebook_link {
                    p { a href=(facebook) { "Facebook" } }
                }
                @if artist.seeking_venue {
                    p { b { "Seeking venues" } }
                    @if let Some(description) = &artist.seeking_description {
                        p { (description) }
                    }
                } @else {
                    p class="muted" { "Not currently seeking venues" }
                }
                @if let Some(image) = &artist.image_link {
                    img src=(image) alt=(artist.name) style="max-width: 20rem;";
                }
            }
            (attached_show_list("Upcoming shows", "/venues", &artist.upcoming_shows))
            (attached_show_list("Past shows", "/venues", &artist.past_shows))
            p {
                a href={"/artists/" (artist.id) "/edit"} { "Edit artist" }
            }
        },
    )
}

pub fn venue_form_page(title: &str, action: &str, values: &VenueFormData) -> Markup {
    base_layout(
        title,
        html! {
            h1 { (title) }
            form method="post" action=(action) {
                (text_field("name", "Name", &values.name))
                (text_field("city", "City", &values.city))
                (text_field("state", "State", &values.state))
                (text_field("address", "Address", &values.address))
                (text_field("phone", "Phone", &values.phone))
                (text_field("image_link", "Image link", &values.image_link))
                (text_field("website_link", "Website", &values.website))
                (text_field("facebook_link", "Facebook link", &values.facebook_link))
                (genre_checkboxes(&values.genres))
                (seeking_fields(
                    "seeking_talent",
                    "Seeking talent",
                    values.seeking_talent,
                    &values.seeking_description,
                ))
                button type="submit" { "Save venue" }
            }
        },
    )
}

pub fn artist_form_page(title: &str, action: &str, values: &ArtistFormData) -> Markup {
    base_layout(
        title,
        html! {
            h1 { (title) }
            form method="post" action=(action) {
                (text_field("name", "Name", &values.name))
                (text_field("city", "City", &values.city))
                (text_field("state", "State", &values.state))
                (text_field("phone", "Phone", &values.phone))
                (text_field("image_link", "Image link", &values.image_link))
                (text_field("website_link", "Website", &values.website))
                (text_field("facebook_link", "Facebook link", &values.facebook_link))
                (genre_checkboxes(&values.genres))
                (seeking_fields(
                    "seeking_venue",
                    "Seeking venues",
                    values.seeking_venue,
                    &values.seeking_description,
                ))
                button type="submit" { "Save artist" }
            }
        },
    )
}

pub fn shows_page(shows: &[ShowRowData]) -> Markup {
    base_layout(
        "Shows",
        html! {
            h1 { "Shows" }
            @if shows.is_empty() {
                p class="muted" { "No shows listed yet." }
            }
            ul class="plain" {
                @for show in shows {
                    li class="card" {
                        a href={"/artists/" (show.artist_id)} { (show.artist_name) }
                        " at "
                        a href={"/venues/" (show.venue_id)} { (show.venue_name) }
                        span class="muted" { " - " (show.start_time) }
                    }
                }
            }
        },
    )
}

pub fn show_form_page() -> Markup {
    base_layout(
        "List a show",
        html! {
            h1 { "List a show" }
            form method="post" action="/shows/create" {
                (text_field("artist_id", "Artist ID", ""))
                (text_field("venue_id", "Venue ID", ""))
                label for="start_time" { "Start time" }
                input type="datetime-local" id="start_time" name="start_time";
                button type="submit" { "Save show" }
            }
        },
    )
}

pub fn error_page(status: StatusCode, message: &str) -> Markup {
    let title = match status {
        StatusCode::NOT_FOUND => "Page not found",
        StatusCode::BAD_REQUEST => "Invalid request",
        _ => "Something went wrong",
    };
    base_layout(
        title,
        html! {
            h1 { (status.as_u16()) " - " (title) }
            p { (message) }
            p { a href="/" { "Back to home" } }
        },
    )
}

fn search_box(action: &str, placeholder: &str) -> Markup {
    html! {
        form method="post" action=(action) style="margin-bottom: 1rem;" {
            input type="text" name="search_term" placeholder=(placeholder);
            button type="submit" { "Search" }
        }
    }
}
