//! Kinostar Scraper Core Library
//!
//! This crate extracts today's movies, with showtimes and prices, from the
//! Kinostar cinema site (kinostar86.ru).
//!
//! # Features
//! - Discover today's movies on the listing page
//! - Read release dates, runtime, director, cast, synopsis and poster
//! - Parse active and disabled shows into typed sessions
//! - Markup markers kept in a swappable configuration table

pub mod client;
pub mod config;
pub mod error;
pub mod parser;
pub mod report;
pub mod scraper;
pub mod selectors;
pub mod types;

// Re-export main types for convenience
pub use client::{KinostarClient, PageSource};
pub use config::{ClientConfig, InfoLabels, Markers, PosterRule, ScraperConfig, SessionPolicy};
pub use error::{ErrorKind, KinostarError, Result};
pub use report::{ErrorReporter, TracingReporter};
pub use crate::scraper::KinostarScraper;
pub use types::{Availability, ListingEntry, Movie, Session};
