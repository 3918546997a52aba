//! moviestream binary entrypoint: a headless session that renders one page of
//! the catalog to stdout.

use std::fmt;
use std::rc::Rc;
use std::sync::OnceLock;

use clap::Parser;
use moviestream::args::Args;
use moviestream::config;
use moviestream::events::Controller;
use moviestream::sources::HttpCatalog;
use moviestream::ui::render::render_options;

/// Local-time timestamps for log lines.
struct CatalogTimer;

impl tracing_subscriber::fmt::time::FormatTime for CatalogTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let ts = chrono::Local::now()
            .format("%Y-%m-%d-T %H:%M:%S")
            .to_string();
        w.write_str(&ts)
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// Initialize tracing to `<config_dir>/logs/moviestream.log`, falling back to stderr.
fn init_logging(level: &str) {
    let mut log_path = config::logs_dir();
    log_path.push("moviestream.log");
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
    };
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(CatalogTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            // Fallback: log to stderr so stdout stays clean for the rendered page
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(CatalogTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> std::process::ExitCode {
    let args = Args::parse();
    init_logging(&args.log_level());
    let settings = args.settings();
    tracing::info!(api_base = %settings.api_base, "moviestream starting");

    let catalog = match HttpCatalog::new(&settings) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(error = %e, "failed to build HTTP client");
            eprintln!("error: {e}");
            return std::process::ExitCode::FAILURE;
        }
    };

    if args.health {
        return match catalog.check_health().await {
            Ok(true) => {
                println!("ok");
                std::process::ExitCode::SUCCESS
            }
            Ok(false) => {
                println!("unhealthy");
                std::process::ExitCode::FAILURE
            }
            Err(e) => {
                tracing::error!(error = %e, "health check failed");
                eprintln!("error: {e}");
                std::process::ExitCode::FAILURE
            }
        };
    }

    let mut controller = Controller::new(Rc::new(catalog), settings);
    if let Err(e) = controller.init().await {
        tracing::error!(error = %e, "initialization failed");
        eprintln!("error: {e}");
        return std::process::ExitCode::FAILURE;
    }
    for event in args.startup_events() {
        controller.handle_event(event);
    }
    controller.settle().await;

    print_document(&controller);
    tracing::info!("moviestream exited");
    std::process::ExitCode::SUCCESS
}

/// Write the rendered document sections to stdout.
fn print_document<A: moviestream::sources::CatalogApi + 'static>(controller: &Controller<A>) {
    let doc = controller.document();
    let state = controller.state();
    println!(
        "<select id=\"genre\">{}</select>",
        render_options(&doc.genre_options, &state.genre.as_value())
    );
    println!("<span id=\"total\">{}</span>", doc.total_results);
    if doc.empty_visible {
        println!("<div id=\"empty\">No results</div>");
    }
    println!("<section id=\"grid\">\n{}\n</section>", doc.grid_html);
    println!("<nav id=\"pagination\">{}</nav>", doc.pagination_html);
    for notice in &doc.notices {
        println!("<!-- notice: {notice} -->");
    }
    if let Some(modal) = &doc.modal {
        println!("{}", modal.markup);
    }
}

#[cfg(test)]
mod tests {
    /// What: FormatTime impl writes a non-empty timestamp without panicking
    ///
    /// - Input: Tracing writer buffer
    /// - Output: Buffer receives some content
    #[test]
    fn catalog_timer_formats_time_without_panic() {
        use tracing_subscriber::fmt::time::FormatTime;
        let mut buf = String::new();
        let mut writer = tracing_subscriber::fmt::format::Writer::new(&mut buf);
        let t = super::CatalogTimer;
        let _ = t.format_time(&mut writer);
        assert!(!buf.is_empty());
    }
}
