//! Main Kinostar scraper API
//!
//! This module sequences one extraction run: fetch the listing page, then
//! fetch and parse each listed movie's detail page, one request at a time.
//! A run either yields the complete list or a single error; partial results
//! are never returned.

use tracing::{debug, info, instrument};

use crate::client::{KinostarClient, PageSource};
use crate::config::ScraperConfig;
use crate::error::{KinostarError, Result};
use crate::parser::PageParser;
use crate::report::ErrorReporter;
use crate::types::Movie;

/// Message attached to a failed extraction run
pub const EXTRACTION_FAILED: &str = "Failed to read movie information";

/// Main scraper API for kinostar86.ru
///
/// Every call to [`get_movies`](Self::get_movies) starts from scratch; no
/// state is shared between runs.
///
/// # Example
/// ```no_run
/// use kinostar_core::KinostarScraper;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let scraper = KinostarScraper::new()?;
///
///     let movies = scraper.get_movies().await?;
///     println!("{} movies today", movies.len());
///
///     Ok(())
/// }
/// ```
pub struct KinostarScraper<S = KinostarClient> {
    source: S,
    parser: PageParser,
}

impl KinostarScraper<KinostarClient> {
    /// Create a new scraper with default configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new() -> Result<Self> {
        Self::with_config(&ScraperConfig::default())
    }

    /// Create a scraper with an HTTP client built from `config`.
    ///
    /// # Errors
    /// Invalid client settings or markers.
    pub fn with_config(config: &ScraperConfig) -> Result<Self> {
        let client = KinostarClient::with_config(&config.client)?;
        Self::with_source(client, config)
    }
}

impl<S: PageSource> KinostarScraper<S> {
    /// Create a scraper reading pages from a custom source.
    ///
    /// `config.client` is ignored; the source decides how pages are fetched.
    ///
    /// # Errors
    /// `KinostarError::InvalidSelector` if a marker does not compile.
    pub fn with_source(source: S, config: &ScraperConfig) -> Result<Self> {
        Ok(Self {
            source,
            parser: PageParser::new(config)?,
        })
    }

    /// Get today's movies with their sessions.
    ///
    /// # Returns
    /// * `Ok(Vec<Movie>)` in listing order; empty when nothing is listed
    /// * `Err(KinostarError::Extraction)` wrapping the first failure
    ///
    /// # Example
    /// ```no_run
    /// use kinostar_core::KinostarScraper;
    ///
    /// # async fn example() -> Result<(), kinostar_core::KinostarError> {
    /// let scraper = KinostarScraper::new()?;
    /// for movie in scraper.get_movies().await? {
    ///     println!("{} ({} sessions)", movie.name, movie.sessions.len());
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_movies(&self) -> Result<Vec<Movie>> {
        self.collect_movies()
            .await
            .map_err(|e| KinostarError::extraction(EXTRACTION_FAILED, e))
    }

    /// Like [`get_movies`](Self::get_movies), but hands a failure to
    /// `reporter` and returns an empty list instead.
    pub async fn get_movies_or_report<R>(&self, reporter: &R) -> Vec<Movie>
    where
        R: ErrorReporter + ?Sized,
    {
        match self.collect_movies().await {
            Ok(movies) => movies,
            Err(e) => {
                reporter.report(EXTRACTION_FAILED, &e);
                Vec::new()
            }
        }
    }

    #[instrument(skip(self), fields(base_url = %self.source.base_url()))]
    async fn collect_movies(&self) -> Result<Vec<Movie>> {
        let listing_html = self.source.fetch(self.source.base_url()).await?;
        let entries = self.parser.listing(&listing_html);

        if entries.is_empty() {
            info!("no movies listed for today");
            return Ok(Vec::new());
        }

        let mut movies = Vec::with_capacity(entries.len());

        for entry in entries {
            let url = self.source.resolve(&entry.href)?;
            let html = self.source.fetch(&url).await?;
            let movie = self.parser.movie(&entry.name, &html)?;

            debug!(
                name = %movie.name,
                sessions = movie.sessions.len(),
                "movie parsed"
            );
            movies.push(movie);
        }

        info!(count = movies.len(), "movies extracted");
        Ok(movies)
    }
}
