//! Region lookup
//!
//! Parsers never hold selector strings themselves. They ask a
//! [`SelectorTable`] for a semantic [`Region`], and the table maps it to the
//! compiled selector built from [`Markers`].

use std::collections::HashMap;
use std::fmt;

use scraper::{ElementRef, Selector};

use crate::config::Markers;
use crate::error::{KinostarError, Result};

/// Semantic content region of a Kinostar page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    RentalMovie,
    EventLink,
    InfoPair,
    InfoLabel,
    InfoValue,
    Description,
    PosterContainer,
    PosterImage,
    ActiveShow,
    DisabledShow,
    ShowTime,
    ShowPrice,
}

impl Region {
    /// Every region, in table order.
    pub const ALL: [Region; 12] = [
        Region::RentalMovie,
        Region::EventLink,
        Region::InfoPair,
        Region::InfoLabel,
        Region::InfoValue,
        Region::Description,
        Region::PosterContainer,
        Region::PosterImage,
        Region::ActiveShow,
        Region::DisabledShow,
        Region::ShowTime,
        Region::ShowPrice,
    ];

    /// Human-readable region name used in errors and logs.
    pub fn name(&self) -> &'static str {
        match self {
            Region::RentalMovie => "rental movie",
            Region::EventLink => "event link",
            Region::InfoPair => "info pair",
            Region::InfoLabel => "info label",
            Region::InfoValue => "info value",
            Region::Description => "description",
            Region::PosterContainer => "poster container",
            Region::PosterImage => "poster image",
            Region::ActiveShow => "active show",
            Region::DisabledShow => "disabled show",
            Region::ShowTime => "show time",
            Region::ShowPrice => "show price",
        }
    }

    fn marker<'a>(&self, markers: &'a Markers) -> &'a str {
        match self {
            Region::RentalMovie => &markers.rental_movie,
            Region::EventLink => &markers.event_link,
            Region::InfoPair => &markers.info_pair,
            Region::InfoLabel => &markers.info_label,
            Region::InfoValue => &markers.info_value,
            Region::Description => &markers.description,
            Region::PosterContainer => &markers.poster_container,
            Region::PosterImage => &markers.poster_image,
            Region::ActiveShow => &markers.active_show,
            Region::DisabledShow => &markers.disabled_show,
            Region::ShowTime => &markers.show_time,
            Region::ShowPrice => &markers.show_price,
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Compiled selectors for every [`Region`]
#[derive(Debug)]
pub struct SelectorTable {
    selectors: HashMap<Region, Selector>,
}

impl SelectorTable {
    /// Compile all markers.
    ///
    /// # Errors
    /// `KinostarError::InvalidSelector` naming the first region whose marker
    /// is not a valid CSS selector.
    pub fn compile(markers: &Markers) -> Result<Self> {
        let mut selectors = HashMap::with_capacity(Region::ALL.len());

        for region in Region::ALL {
            let selector = Selector::parse(region.marker(markers)).map_err(|e| {
                KinostarError::InvalidSelector {
                    region: region.name().to_string(),
                    reason: format!("{:?}", e),
                }
            })?;
            selectors.insert(region, selector);
        }

        Ok(Self { selectors })
    }

    fn selector(&self, region: Region) -> &Selector {
        // compile() fills every region
        &self.selectors[&region]
    }

    /// All elements matching `region` under `scope`, in document order.
    pub fn find<'a>(&self, scope: ElementRef<'a>, region: Region) -> Vec<ElementRef<'a>> {
        scope.select(self.selector(region)).collect()
    }

    /// First element matching `region` under `scope`.
    pub fn find_first<'a>(&self, scope: ElementRef<'a>, region: Region) -> Option<ElementRef<'a>> {
        scope.select(self.selector(region)).next()
    }

    /// Trimmed text of the first element matching `region`, if any.
    pub fn text_in(&self, scope: ElementRef<'_>, region: Region) -> Option<String> {
        self.find_first(scope, region).map(|el| text_of(&el))
    }
}

/// Concatenated, trimmed text content of an element.
pub fn text_of(element: &ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}
