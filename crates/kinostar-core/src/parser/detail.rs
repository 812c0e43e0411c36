//! Movie detail page parser
//!
//! Fills the descriptive fields of a [`Movie`]: the label/value info pairs,
//! the synopsis and the poster.

use scraper::ElementRef;
use tracing::debug;

use crate::config::{InfoLabels, PosterRule};
use crate::selectors::{Region, SelectorTable};
use crate::types::Movie;

/// Copy recognised info pairs into `movie`.
///
/// Pairs with an empty label or value are skipped, as are labels outside
/// the vocabulary.
pub fn apply_info_pairs(
    root: ElementRef,
    table: &SelectorTable,
    labels: &InfoLabels,
    movie: &mut Movie,
) {
    for pair in table.find(root, Region::InfoPair) {
        let label = table.text_in(pair, Region::InfoLabel).unwrap_or_default();
        let value = table.text_in(pair, Region::InfoValue).unwrap_or_default();

        if label.is_empty() || value.is_empty() {
            continue;
        }

        if !apply_label(labels, &label, value, movie) {
            debug!(%label, "ignoring unknown info label");
        }
    }
}

/// Assign `value` to the field named by `label`.
///
/// Returns false when the label is not part of the vocabulary; the movie is
/// left untouched in that case.
pub fn apply_label(labels: &InfoLabels, label: &str, value: String, movie: &mut Movie) -> bool {
    let field = if label == labels.start_date {
        &mut movie.start_date
    } else if label == labels.end_date {
        &mut movie.end_date
    } else if label == labels.timing {
        &mut movie.timing
    } else if label == labels.director {
        &mut movie.director
    } else if label == labels.actors {
        &mut movie.actors
    } else {
        return false;
    };

    *field = Some(value);
    true
}

/// Synopsis text, if the page has one.
pub fn extract_description(root: ElementRef, table: &SelectorTable) -> Option<String> {
    table
        .text_in(root, Region::Description)
        .filter(|text| !text.is_empty())
}

/// Full-size poster URL built from the thumbnail `src`.
pub fn extract_poster_url(
    root: ElementRef,
    table: &SelectorTable,
    rule: &PosterRule,
) -> Option<String> {
    let container = table.find_first(root, Region::PosterContainer)?;
    let image = table.find_first(container, Region::PosterImage)?;

    let src = image.value().attr("src")?.trim();
    if src.is_empty() {
        return None;
    }

    Some(rule.apply(src))
}
