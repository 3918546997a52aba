//! Rendered markup parsed back with an HTML parser.

use moviestream::config::Settings;
use moviestream::state::{Genre, MoviePage, MovieSummary, QueryState, Video};
use moviestream::ui::render::{pagination, render_card, render_page, render_pagination};
use moviestream::ui::{CardView, TrailerModal};
use scraper::{Html, Selector};

fn sel(s: &str) -> Selector {
    Selector::parse(s).expect("selector")
}

fn hostile_page() -> MoviePage {
    MoviePage {
        results: vec![
            MovieSummary {
                id: 42,
                title: r#"Tom & Jerry <script>alert("x")</script>"#.to_string(),
                poster_path: Some(r#"/a"onerror="x.jpg"#.to_string()),
                release_date: Some("2021-02-26".to_string()),
                vote_average: Some(7.34),
                genre_ids: vec![16, 35],
            },
            MovieSummary {
                id: 43,
                title: "Quiet".to_string(),
                ..MovieSummary::default()
            },
        ],
        total_results: 2,
        total_pages: 1,
    }
}

#[test]
/// What: Backend text survives escaping and round-trips through a parser.
///
/// Inputs:
/// - Title containing `&`, quotes and a script tag; poster path with a quote
///
/// Output:
/// - No `<script>` element; heading text equals the raw title; attributes intact
fn hostile_title_parses_back_as_text() {
    let mut state = QueryState::new();
    state.genres = vec![Genre {
        id: 35,
        name: "Comedy".to_string(),
    }];
    let rendered = render_page(&hostile_page(), &state, &Settings::default());
    let doc = Html::parse_fragment(&rendered.grid_html);

    assert_eq!(doc.select(&sel("script")).count(), 0);
    assert_eq!(doc.select(&sel("article.card")).count(), 2);

    let title = doc.select(&sel("h4.title")).next().expect("title");
    assert_eq!(
        title.text().collect::<String>(),
        r#"Tom & Jerry <script>alert("x")</script>"#
    );
    let img = doc.select(&sel("img.poster")).next().expect("poster");
    assert_eq!(
        img.value().attr("src"),
        Some(r#"https://image.tmdb.org/t/p/w500/a"onerror="x.jpg"#)
    );
    assert_eq!(img.value().attr("onerror"), None);

    let button = doc.select(&sel("button.play")).next().expect("play button");
    assert_eq!(button.value().attr("data-id"), Some("42"));
    assert_eq!(
        button.value().attr("aria-label"),
        Some(r#"Watch trailer for Tom & Jerry <script>alert("x")</script>"#)
    );

    let badges: Vec<String> = doc
        .select(&sel("article.card:first-child span.genre"))
        .map(|e| e.text().collect())
        .collect();
    assert_eq!(badges, ["Comedy"]);
}

#[test]
/// What: A sparse movie shows placeholder poster and fallback meta.
fn sparse_movie_uses_fallbacks() {
    let settings = Settings::default();
    let card = CardView::from_movie(&hostile_page().results[1], &[], &settings);
    let html = render_card(&card);
    let doc = Html::parse_fragment(&html);

    let img = doc.select(&sel("img.poster")).next().expect("poster");
    assert_eq!(img.value().attr("src"), Some(settings.placeholder_image.as_str()));
    assert_eq!(img.value().attr("alt"), Some("Quiet poster"));
    let meta: Vec<String> = doc
        .select(&sel(".meta span"))
        .map(|e| e.text().collect())
        .collect();
    assert_eq!(meta[0], "N/A");
    assert_eq!(meta[2], "⭐ –");
}

#[test]
/// What: Twelve pages render five controls with the current one active.
fn pagination_renders_five_buttons() {
    let html = render_pagination(&pagination(12, 4));
    let doc = Html::parse_fragment(&html);

    let pages: Vec<&str> = doc
        .select(&sel("button.page"))
        .filter_map(|b| b.value().attr("data-page"))
        .collect();
    assert_eq!(pages, ["1", "2", "3", "4", "5"]);
    let active: Vec<String> = doc
        .select(&sel("button.page.active"))
        .map(|b| b.text().collect())
        .collect();
    assert_eq!(active, ["4"]);
}

#[test]
/// What: The trailer overlay is a labelled dialog with the player and close button.
fn trailer_overlay_structure() {
    let video = Video {
        site: "YouTube".to_string(),
        key: "dQw4w9WgXcQ".to_string(),
    };
    let modal = TrailerModal::open(9, &video, &Settings::default());
    let doc = Html::parse_fragment(&modal.markup);

    let backdrop = doc.select(&sel("#modal-backdrop")).next().expect("backdrop");
    assert_eq!(backdrop.value().attr("role"), Some("dialog"));
    assert_eq!(backdrop.value().attr("aria-modal"), Some("true"));
    assert!(doc.select(&sel("#modal-close")).next().is_some());
    let iframe = doc.select(&sel("#modal-iframe")).next().expect("player");
    assert_eq!(
        iframe.value().attr("src"),
        Some("https://www.youtube.com/embed/dQw4w9WgXcQ?rel=0")
    );
}
