//! Command-line argument definition for the headless driver.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Settings;
use crate::events::UiEvent;
use crate::state::{GenreFilter, SortOrder};

/// moviestream - browse a movie catalog backend from the command line
#[derive(Parser, Debug)]
#[command(name = "moviestream")]
#[command(version)]
#[command(about = "Render a page of a movie catalog backend without a browser", long_about = None)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Settings file to use instead of ~/.config/moviestream/settings.conf
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Page origin that a relative API base is resolved against
    #[arg(long)]
    pub origin: Option<String>,

    /// Backend API base path or URL
    #[arg(long)]
    pub api_base: Option<String>,

    /// Search text
    #[arg(short, long)]
    pub query: Option<String>,

    /// Genre id, or "all"
    #[arg(short, long, value_parser = parse_genre)]
    pub genre: Option<GenreFilter>,

    /// Sort order (popular, newest, rating)
    #[arg(short, long, value_parser = parse_sort)]
    pub sort: Option<SortOrder>,

    /// Page number to show
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    pub page: Option<u32>,

    /// Also look up and open the trailer for this movie id
    #[arg(long)]
    pub trailer: Option<u64>,

    /// Only check backend health and exit
    #[arg(long)]
    pub health: bool,

    /// Ignore movie responses older than the latest request
    #[arg(long)]
    pub discard_stale: bool,
}

/// Parse a `--genre` value.
fn parse_genre(s: &str) -> Result<GenreFilter, String> {
    GenreFilter::from_value(s).ok_or_else(|| format!("expected \"all\" or a genre id, got {s:?}"))
}

/// Parse a `--sort` value.
fn parse_sort(s: &str) -> Result<SortOrder, String> {
    SortOrder::from_param(s).ok_or_else(|| format!("expected popular, newest or rating, got {s:?}"))
}

impl Args {
    /// What: Determine the log level from the flags.
    ///
    /// Details:
    /// - Verbose flag overrides `--log-level`.
    #[must_use]
    pub fn log_level(&self) -> String {
        if self.verbose {
            "debug".to_string()
        } else {
            self.log_level.clone()
        }
    }

    /// What: Load settings and apply command-line overrides.
    ///
    /// Output:
    /// - Settings from `--config` (or the default location) with flags applied on top.
    #[must_use]
    pub fn settings(&self) -> Settings {
        let mut settings = self
            .config
            .as_deref()
            .map_or_else(Settings::load, Settings::load_from);
        if let Some(origin) = &self.origin {
            settings.page_origin.clone_from(origin);
        }
        if let Some(base) = &self.api_base {
            settings.api_base.clone_from(base);
        }
        if self.discard_stale {
            settings.discard_stale_responses = true;
        }
        settings
    }

    /// What: Translate filter flags into the UI events a user would produce.
    ///
    /// Output:
    /// - Events in the order search, genre, sort, page, trailer.
    ///
    /// Details:
    /// - The page click comes last among the filters because every filter change resets to page 1.
    #[must_use]
    pub fn startup_events(&self) -> Vec<UiEvent> {
        let mut events = Vec::new();
        if let Some(q) = &self.query {
            events.push(UiEvent::SearchInput(q.clone()));
        }
        if let Some(genre) = self.genre {
            events.push(UiEvent::GenreChanged(genre));
        }
        if let Some(sort) = self.sort {
            events.push(UiEvent::SortChanged(sort));
        }
        if let Some(page) = self.page {
            events.push(UiEvent::PageClicked(page));
        }
        if let Some(id) = self.trailer {
            events.push(UiEvent::TrailerRequested(id));
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Filter flags become UI events in a fixed order.
    ///
    /// - Input: `-q dune -g 878 -s rating -p 2 --trailer 438631`
    /// - Output: search, genre, sort, page, trailer events
    fn startup_events_follow_flag_order() {
        let args = Args::try_parse_from([
            "moviestream", "-q", "dune", "-g", "878", "-s", "rating", "-p", "2", "--trailer",
            "438631",
        ])
        .expect("valid args");
        assert_eq!(
            args.startup_events(),
            vec![
                UiEvent::SearchInput("dune".to_string()),
                UiEvent::GenreChanged(GenreFilter::Id(878)),
                UiEvent::SortChanged(SortOrder::Rating),
                UiEvent::PageClicked(2),
                UiEvent::TrailerRequested(438_631),
            ]
        );
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(Args::try_parse_from(["moviestream", "-g", "drama"]).is_err());
        assert!(Args::try_parse_from(["moviestream", "-s", "random"]).is_err());
        assert!(Args::try_parse_from(["moviestream", "-p", "0"]).is_err());
    }

    #[test]
    fn overrides_apply_on_top_of_settings_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("settings.conf");
        std::fs::write(&path, "api_base = /from-file\nrequest_timeout_secs = 3\n").expect("write");
        let args = Args::try_parse_from([
            "moviestream",
            "--config",
            path.to_str().expect("utf-8 path"),
            "--api-base",
            "/from-flag",
            "--discard-stale",
            "-v",
        ])
        .expect("valid args");
        let settings = args.settings();
        assert_eq!(settings.api_base, "/from-flag");
        assert_eq!(settings.request_timeout_secs, 3);
        assert!(settings.discard_stale_responses);
        assert_eq!(args.log_level(), "debug");
    }
}
