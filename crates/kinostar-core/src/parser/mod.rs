//! HTML parsers for Kinostar pages
//!
//! This module contains parsers for extracting data from Kinostar pages:
//! - `listing`: Parse today's movie entries from the site root
//! - `detail`: Parse descriptive fields of a movie page
//! - `sessions`: Parse show blocks into sessions

pub mod detail;
pub mod listing;
pub mod sessions;

use scraper::Html;

use crate::config::{InfoLabels, PosterRule, ScraperConfig, SessionPolicy};
use crate::error::Result;
use crate::selectors::{Region, SelectorTable};
use crate::types::{Availability, ListingEntry, Movie};

// Re-export main parsing functions
pub use detail::{apply_info_pairs, apply_label, extract_description, extract_poster_url};
pub use listing::parse_listing;
pub use sessions::{parse_price, parse_show_time, parse_shows};

/// Page parser bound to one marker table and rule set.
///
/// Works on raw HTML strings so that no document tree is kept alive
/// across fetches.
#[derive(Debug)]
pub struct PageParser {
    table: SelectorTable,
    labels: InfoLabels,
    poster: PosterRule,
    policy: SessionPolicy,
}

impl PageParser {
    /// Build a parser from the scraper configuration.
    ///
    /// # Errors
    /// `KinostarError::InvalidSelector` if a marker does not compile.
    pub fn new(config: &ScraperConfig) -> Result<Self> {
        Ok(Self {
            table: SelectorTable::compile(&config.markers)?,
            labels: config.labels.clone(),
            poster: config.poster.clone(),
            policy: config.session_policy,
        })
    }

    /// Today's movie entries of a listing page.
    pub fn listing(&self, html: &str) -> Vec<ListingEntry> {
        parse_listing(html, &self.table)
    }

    /// Build a movie named `name` from its detail page.
    ///
    /// # Errors
    /// Show time or price failures, see [`parse_shows`].
    pub fn movie(&self, name: &str, html: &str) -> Result<Movie> {
        let document = Html::parse_document(html);
        let root = document.root_element();
        let mut movie = Movie::new(name);

        apply_info_pairs(root, &self.table, &self.labels, &mut movie);

        for (region, availability) in [
            (Region::ActiveShow, Availability::Active),
            (Region::DisabledShow, Availability::Disabled),
        ] {
            parse_shows(
                root,
                &self.table,
                region,
                availability,
                self.policy,
                &mut movie.sessions,
            )?;
        }

        movie.description = extract_description(root, &self.table);
        movie.poster_url = extract_poster_url(root, &self.table, &self.poster);

        Ok(movie)
    }
}
