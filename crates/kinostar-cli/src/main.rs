//! Kinostar command-line front end
//!
//! Prints today's movies and showtimes, as text or JSON. Logs go to stderr
//! so JSON output on stdout stays machine-readable.

mod output;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::atomic::{AtomicBool, Ordering};

use clap::{Parser, ValueEnum};
use kinostar_core::{
    ErrorReporter, KinostarError, KinostarScraper, ScraperConfig, SessionPolicy, TracingReporter,
};
use tracing_subscriber::EnvFilter;

/// Output format for the movie list
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// Today's movies and showtimes from kinostar86.ru
#[derive(Debug, Parser)]
#[command(name = "kinostar", version, about)]
struct Cli {
    /// Site root to scrape instead of kinostar86.ru
    #[arg(long)]
    base_url: Option<String>,

    /// JSON file overriding markers, labels, poster rule or client settings
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Drop shows with unreadable time or price instead of failing
    #[arg(long)]
    skip_malformed_sessions: bool,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

impl Cli {
    /// Configuration file (if any) with command-line flags applied on top.
    fn scraper_config(&self) -> Result<ScraperConfig, Box<dyn std::error::Error>> {
        let mut config = match &self.config {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .map_err(|e| format!("cannot read {}: {}", path.display(), e))?;
                ScraperConfig::from_json(&json)
                    .map_err(|e| format!("invalid config {}: {}", path.display(), e))?
            }
            None => ScraperConfig::default(),
        };

        if let Some(base_url) = &self.base_url {
            config.client.base_url = base_url.clone();
        }
        if let Some(timeout) = self.timeout {
            config.client.timeout_secs = timeout;
        }
        if self.skip_malformed_sessions {
            config.session_policy = SessionPolicy::Skip;
        }

        Ok(config)
    }

    /// Scraper for the resolved configuration.
    fn scraper(&self) -> Result<KinostarScraper, Box<dyn std::error::Error>> {
        self.scraper_config()
            .and_then(|config| KinostarScraper::with_config(&config).map_err(Into::into))
    }
}

/// Hands the failure to `inner` and remembers that the run failed.
///
/// Failures reach stderr through the tracing subscriber.
#[derive(Default)]
struct CliReporter<R = TracingReporter> {
    inner: R,
    failed: AtomicBool,
}

impl<R: ErrorReporter> ErrorReporter for CliReporter<R> {
    fn report(&self, message: &str, error: &KinostarError) {
        self.inner.report(message, error);
        self.failed.store(true, Ordering::Relaxed);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();

    let scraper = match cli.scraper() {
        Ok(scraper) => scraper,
        Err(e) => {
            eprintln!("❌ Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let reporter = CliReporter::<TracingReporter>::default();
    let movies = scraper.get_movies_or_report(&reporter).await;

    if reporter.failed.load(Ordering::Relaxed) {
        return ExitCode::FAILURE;
    }

    let rendered = match cli.format {
        Format::Text => output::render_text(&movies),
        Format::Json => match output::render_json(&movies) {
            Ok(json) => json,
            Err(e) => {
                eprintln!("❌ Error: {}", e);
                return ExitCode::FAILURE;
            }
        },
    };
    println!("{}", rendered);

    ExitCode::SUCCESS
}
