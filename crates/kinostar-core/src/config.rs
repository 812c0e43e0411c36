//! Scraper configuration
//!
//! Everything coupled to the current markup of kinostar86.ru lives here:
//! region markers, the info-label vocabulary and the poster URL rule. A site
//! redesign is handled by changing these tables, not the parsers. All types
//! deserialize from JSON with per-field defaults, so an override file only
//! needs the keys that changed.

use serde::{Deserialize, Serialize};

/// Base URL of the Kinostar site
pub const KINOSTAR_BASE_URL: &str = "https://kinostar86.ru";

/// Default User-Agent mimicking a modern browser
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Default Accept-Language header for Russian content
const DEFAULT_ACCEPT_LANGUAGE: &str = "ru-RU,ru;q=0.9,en;q=0.8";

/// CSS selectors locating each content region.
///
/// The site uses generated class names, so the defaults match the whole
/// `class` attribute exactly. This also keeps `show` and `show disabled`
/// blocks apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Markers {
    /// Today's movie entry on the listing page
    pub rental_movie: String,
    /// Link to the detail page inside a listing entry
    pub event_link: String,
    /// Label/value pair on the detail page
    pub info_pair: String,
    pub info_label: String,
    pub info_value: String,
    pub description: String,
    pub poster_container: String,
    /// Image inside the poster container
    pub poster_image: String,
    pub active_show: String,
    pub disabled_show: String,
    /// Time text inside a show block
    pub show_time: String,
    /// Price text inside a show block
    pub show_price: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            rental_movie: "div[class='sc-yf63q6-3 kNdiSE event rental large']".to_string(),
            event_link: "a[class='event-name']".to_string(),
            info_pair: "div[class='sc-jp24ki-1 qqVem']".to_string(),
            info_label: "div[class='sc-jp24ki-2 hGZZBS']".to_string(),
            info_value: "div[class='sc-jp24ki-3 daPpud']".to_string(),
            description: "div[class='sc-rnk5eh-4 jXZuVv']".to_string(),
            poster_container: "div[class='sc-hq414j-1 dswmJi event-poster']".to_string(),
            poster_image: "img".to_string(),
            active_show: "div[class='sc-sw9zb-2 iknTqF show']".to_string(),
            disabled_show: "div[class='sc-sw9zb-2 iknTqF show disabled']".to_string(),
            show_time: "div[class='show-time']".to_string(),
            show_price: "div[class='sc-sw9zb-0 jENqIc price']".to_string(),
        }
    }
}

/// Label texts of the info pairs, matched exactly against trimmed label text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InfoLabels {
    pub start_date: String,
    pub end_date: String,
    pub timing: String,
    pub director: String,
    pub actors: String,
}

impl Default for InfoLabels {
    fn default() -> Self {
        Self {
            start_date: "В прокате с".to_string(),
            end_date: "В прокате до".to_string(),
            timing: "Хронометраж".to_string(),
            director: "Режиссер".to_string(),
            actors: "В ролях".to_string(),
        }
    }
}

/// Rewrites a poster thumbnail URL into the full-size image URL.
///
/// The site serves posters through an image proxy whose path carries the
/// target size and filters, e.g. `/22x32/filters:blur(2)/poster.jpg`.
/// Both tokens are literal substrings of that scheme; if the proxy format
/// changes, only these values need updating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PosterRule {
    /// Size token of the thumbnail
    pub low_res_token: String,
    /// Size token that replaces it
    pub high_res_token: String,
    /// Filter token removed from the URL
    pub blur_token: String,
}

impl Default for PosterRule {
    fn default() -> Self {
        Self {
            low_res_token: "22x32".to_string(),
            high_res_token: "540x800".to_string(),
            blur_token: ":blur(2)".to_string(),
        }
    }
}

impl PosterRule {
    /// Apply both substitutions to a thumbnail URL.
    ///
    /// # Examples
    /// ```
    /// use kinostar_core::config::PosterRule;
    ///
    /// let rule = PosterRule::default();
    /// assert_eq!(
    ///     rule.apply("https://img.example/22x32/filters:blur(2)/a.jpg"),
    ///     "https://img.example/540x800/filters/a.jpg"
    /// );
    /// ```
    pub fn apply(&self, src: &str) -> String {
        let resized = if self.low_res_token.is_empty() {
            src.to_string()
        } else {
            src.replace(&self.low_res_token, &self.high_res_token)
        };

        if self.blur_token.is_empty() {
            resized
        } else {
            resized.replace(&self.blur_token, "")
        }
    }
}

/// What to do with a show block whose time or price cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SessionPolicy {
    /// Fail the whole extraction run
    #[default]
    Abort,
    /// Drop the single session and keep going
    Skip,
}

/// Configuration for the HTTP client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Site root; listing page and base for relative links
    pub base_url: String,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
    pub user_agent: String,
    pub accept_language: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: KINOSTAR_BASE_URL.to_string(),
            timeout_secs: 30,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            accept_language: DEFAULT_ACCEPT_LANGUAGE.to_string(),
        }
    }
}

/// Complete scraper configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScraperConfig {
    pub client: ClientConfig,
    pub markers: Markers,
    pub labels: InfoLabels,
    pub poster: PosterRule,
    pub session_policy: SessionPolicy,
}

impl ScraperConfig {
    /// Parse a JSON override; absent keys keep their defaults.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
