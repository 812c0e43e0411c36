//! Data types for the Kinostar scraper
//!
//! This module contains the data structures produced by one extraction run.
//! All types implement Serialize and Deserialize for JSON output.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Presentation state of a show block on the detail page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Availability {
    /// Show can still be booked
    Active,
    /// Show is in the past or sold out
    Disabled,
}

/// One showtime of a movie
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Time of day the show starts
    pub start_time: NaiveTime,
    /// Ticket price in whole currency units
    pub price: u32,
    /// Whether the show block was active or disabled
    pub availability: Availability,
}

/// A movie from today's listing together with its detail-page fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    /// Identifier generated fresh for every extraction run
    pub id: Uuid,
    /// Display title, never empty
    pub name: String,
    /// "In release from" date as published
    pub start_date: Option<String>,
    /// "In release until" date as published
    pub end_date: Option<String>,
    /// Runtime as published (e.g. "1 ч. 52 мин.")
    pub timing: Option<String>,
    pub director: Option<String>,
    pub actors: Option<String>,
    pub description: Option<String>,
    /// Full-size poster URL
    pub poster_url: Option<String>,
    /// Active shows first, then disabled ones, each in document order
    pub sessions: Vec<Session>,
}

impl Movie {
    /// Create a movie with a fresh id and no detail fields set.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            start_date: None,
            end_date: None,
            timing: None,
            director: None,
            actors: None,
            description: None,
            poster_url: None,
            sessions: Vec::new(),
        }
    }
}

/// Entry discovered on the listing page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingEntry {
    /// Display name taken from the event link text
    pub name: String,
    /// Detail page link exactly as found in the `href` attribute
    pub href: String,
}
