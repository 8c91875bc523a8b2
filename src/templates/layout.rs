use maud::{html, Markup, DOCTYPE};

pub fn base_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " - Bandstand" }

                style {
                    r#"
                    body { font-family: system-ui, sans-serif; margin: 0; background: #fafafa; color: #1a1a1a; }
                    nav { background: #fff; border-bottom: 1px solid #e5e5e5; padding: 0 1.5rem; display: flex; align-items: center; height: 3.5rem; gap: 1rem; }
                    nav .brand { font-weight: 700; font-size: 1.15rem; margin-right: auto; text-decoration: none; color: #1a1a1a; }
                    nav a { color: #444; text-decoration: none; font-size: 0.95rem; }
                    nav a:hover { color: #d35400; }
                    main { max-width: 56rem; margin: 0 auto; padding: 2rem 1.5rem; }
                    h1 { font-size: 1.6rem; } h2 { font-size: 1.2rem; }
                    .card { background: #fff; border: 1px solid #e5e5e5; border-radius: 0.5rem; padding: 1rem 1.25rem; margin-bottom: 1rem; }
                    .muted { color: #777; font-size: 0.9rem; }
                    .badge { display: inline-block; background: #f0e6dd; border-radius: 0.75rem; padding: 0.1rem 0.6rem; margin-right: 0.3rem; font-size: 0.85rem; }
                    ul.plain { list-style: none; padding: 0; }
                    form label { display: block; margin-top: 0.75rem; font-weight: 600; font-size: 0.9rem; }
                    form input[type=text], form input[type=datetime-local] { width: 100%; padding: 0.4rem; border: 1px solid #ccc; border-radius: 0.25rem; }
                    form button { margin-top: 1rem; background: #d35400; color: #fff; border: none; border-radius: 0.25rem; padding: 0.5rem 1.25rem; cursor: pointer; }
                    .danger { background: #c0392b; }
                    "#
                }
            }
            body {
                (nav_bar())
                main {
                    (content)
                }
                (footer())
            }
        }
    }
}

fn nav_bar() -> Markup {
    html! {
        nav {
            a href="/" class="brand" { "Bandstand" }
            a href="/venues" { "Venues" }
            a href="/artists" { "Artists" }
            a href="/shows" { "Shows" }
            a href="/venues/create" { "List a venue" }
            a href="/artists/create" { "List an artist" }
            a href="/shows/create" { "List a show" }
        }
    }
}

fn footer() -> Markup {
    html! {
        footer {
            div class="muted" style="text-align: center; padding: 2rem 0;" {
                "Bandstand - Find the venues and artists in your city"
            }
        }
    }
}
