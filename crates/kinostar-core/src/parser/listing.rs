//! Listing page parser
//!
//! Finds today's movie entries on the site root and extracts the display
//! name and detail link of each.

use scraper::{ElementRef, Html};
use tracing::debug;

use crate::selectors::{text_of, Region, SelectorTable};
use crate::types::ListingEntry;

/// Parse today's movie entries from the listing page HTML.
///
/// A page without any entry yields an empty list; entries lacking a name
/// or link are skipped without affecting their siblings.
///
/// # Arguments
/// * `html` - Raw HTML content of the listing page
/// * `table` - Compiled region selectors
pub fn parse_listing(html: &str, table: &SelectorTable) -> Vec<ListingEntry> {
    let document = Html::parse_document(html);

    let entries: Vec<ListingEntry> = table
        .find(document.root_element(), Region::RentalMovie)
        .into_iter()
        .enumerate()
        .filter_map(|(position, element)| {
            let entry = parse_entry(element, table);
            if entry.is_none() {
                debug!(position, "skipping listing entry without name or link");
            }
            entry
        })
        .collect();

    debug!(count = entries.len(), "listing parsed");
    entries
}

/// Parse a single listing entry.
fn parse_entry(element: ElementRef, table: &SelectorTable) -> Option<ListingEntry> {
    let link = table.find_first(element, Region::EventLink)?;

    let name = text_of(&link);
    if name.is_empty() {
        return None;
    }

    let href = link.value().attr("href")?.trim();
    if href.is_empty() {
        return None;
    }

    Some(ListingEntry {
        name,
        href: href.to_string(),
    })
}
