//! Show block parser
//!
//! Turns the show blocks of a detail page into [`Session`] values. Time and
//! price texts are assumed to follow a stable grammar; what happens when
//! they don't is decided by [`SessionPolicy`].

use chrono::NaiveTime;
use scraper::ElementRef;
use tracing::warn;

use crate::config::SessionPolicy;
use crate::error::{KinostarError, Result};
use crate::selectors::{Region, SelectorTable};
use crate::types::{Availability, Session};

/// Append one session per parseable show block of `region` to `sessions`.
///
/// Blocks without time or price text are skipped. A block whose text does
/// not parse either fails the call or is skipped, depending on `policy`.
///
/// # Errors
/// `InvalidTime` / `InvalidPrice` under `SessionPolicy::Abort`.
pub fn parse_shows(
    root: ElementRef,
    table: &SelectorTable,
    region: Region,
    availability: Availability,
    policy: SessionPolicy,
    sessions: &mut Vec<Session>,
) -> Result<()> {
    for block in table.find(root, region) {
        let Some(time_text) = non_empty(table.text_in(block, Region::ShowTime)) else {
            continue;
        };
        let Some(price_text) = non_empty(table.text_in(block, Region::ShowPrice)) else {
            continue;
        };

        let parsed = parse_show_time(&time_text)
            .and_then(|start_time| Ok((start_time, parse_price(&price_text)?)));

        match parsed {
            Ok((start_time, price)) => sessions.push(Session {
                start_time,
                price,
                availability,
            }),
            Err(e) if policy == SessionPolicy::Skip => {
                warn!(error = %e, %region, "skipping malformed show");
            }
            Err(e) => return Err(e),
        }
    }

    Ok(())
}

fn non_empty(text: Option<String>) -> Option<String> {
    text.filter(|t| !t.is_empty())
}

/// Parse a show time in `H:MM` or `H:MM:SS` form.
///
/// # Examples
/// ```
/// use chrono::NaiveTime;
/// use kinostar_core::parser::parse_show_time;
///
/// assert_eq!(parse_show_time("18:30").unwrap(), NaiveTime::from_hms_opt(18, 30, 0).unwrap());
/// assert!(parse_show_time("вечер").is_err());
/// ```
pub fn parse_show_time(text: &str) -> Result<NaiveTime> {
    match_time(text.trim())
        .and_then(|(h, m, s)| NaiveTime::from_hms_opt(h, m, s))
        .ok_or_else(|| KinostarError::InvalidTime(text.to_string()))
}

fn match_time(text: &str) -> Option<(u32, u32, u32)> {
    let re = regex_lite::Regex::new(r"^(\d{1,2}):(\d{2})(?::(\d{2}))?$").ok()?;
    let caps = re.captures(text)?;

    let hours = caps.get(1)?.as_str().parse().ok()?;
    let minutes = caps.get(2)?.as_str().parse().ok()?;
    let seconds = match caps.get(3) {
        Some(s) => s.as_str().parse().ok()?,
        None => 0,
    };

    Some((hours, minutes, seconds))
}

/// Parse a price by dropping every non-digit character.
///
/// # Examples
/// ```
/// use kinostar_core::parser::parse_price;
///
/// assert_eq!(parse_price("540 ₽").unwrap(), 540);
/// assert_eq!(parse_price("1 200 руб.").unwrap(), 1200);
/// assert!(parse_price("бесплатно").is_err());
/// ```
pub fn parse_price(text: &str) -> Result<u32> {
    let digits = strip_non_digits(text).unwrap_or_default();

    digits
        .parse()
        .map_err(|_| KinostarError::InvalidPrice(text.to_string()))
}

fn strip_non_digits(text: &str) -> Option<String> {
    let re = regex_lite::Regex::new(r"[^\d]").ok()?;
    Some(re.replace_all(text, "").into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Markers;
    use proptest::prelude::*;
    use scraper::Html;

    fn table() -> SelectorTable {
        SelectorTable::compile(&Markers::default()).unwrap()
    }

    fn show(class: &str, time: &str, price: &str) -> String {
        format!(
            r#"<div class="{}">
                <div class="show-time">{}</div>
                <div class="sc-sw9zb-0 jENqIc price">{}</div>
            </div>"#,
            class, time, price
        )
    }

    fn active(time: &str, price: &str) -> String {
        show("sc-sw9zb-2 iknTqF show", time, price)
    }

    fn disabled(time: &str, price: &str) -> String {
        show("sc-sw9zb-2 iknTqF show disabled", time, price)
    }

    fn run(html: &str, region: Region, policy: SessionPolicy) -> Result<Vec<Session>> {
        let document = Html::parse_document(html);
        let availability = match region {
            Region::DisabledShow => Availability::Disabled,
            _ => Availability::Active,
        };
        let mut sessions = Vec::new();
        parse_shows(
            document.root_element(),
            &table(),
            region,
            availability,
            policy,
            &mut sessions,
        )?;
        Ok(sessions)
    }

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_parse_show_time_formats() {
        assert_eq!(parse_show_time("18:30").unwrap(), hm(18, 30));
        assert_eq!(parse_show_time("9:05").unwrap(), hm(9, 5));
        assert_eq!(
            parse_show_time(" 23:59:30 ").unwrap(),
            NaiveTime::from_hms_opt(23, 59, 30).unwrap()
        );
    }

    #[test]
    fn test_parse_show_time_invalid() {
        assert!(parse_show_time("25:00").is_err());
        assert!(parse_show_time("18:75").is_err());
        assert!(parse_show_time("18.30").is_err());
        assert!(parse_show_time("").is_err());
        match parse_show_time("скоро") {
            Err(KinostarError::InvalidTime(text)) => assert_eq!(text, "скоро"),
            _ => panic!("Expected InvalidTime error"),
        }
    }

    #[test]
    fn test_parse_price_normalizes() {
        assert_eq!(parse_price("540 ₽").unwrap(), 540);
        assert_eq!(parse_price("1 200 руб.").unwrap(), 1200);
        assert_eq!(parse_price("350").unwrap(), 350);
        assert_eq!(parse_price("от 0 ₽").unwrap(), 0);
    }

    #[test]
    fn test_parse_price_without_digits() {
        match parse_price("₽") {
            Err(KinostarError::InvalidPrice(text)) => assert_eq!(text, "₽"),
            _ => panic!("Expected InvalidPrice error"),
        }
    }

    #[test]
    fn test_parse_price_overflow() {
        assert!(parse_price("99999999999 ₽").is_err());
    }

    #[test]
    fn test_parse_shows_active_then_disabled() {
        let html = format!("{}{}", active("18:30", "350 ₽"), disabled("14:00", "300 ₽"));
        let document = Html::parse_document(&html);
        let root = document.root_element();
        let table = table();
        let mut sessions = Vec::new();

        for (region, availability) in [
            (Region::ActiveShow, Availability::Active),
            (Region::DisabledShow, Availability::Disabled),
        ] {
            parse_shows(root, &table, region, availability, SessionPolicy::Abort, &mut sessions)
                .unwrap();
        }

        assert_eq!(
            sessions,
            vec![
                Session {
                    start_time: hm(18, 30),
                    price: 350,
                    availability: Availability::Active,
                },
                Session {
                    start_time: hm(14, 0),
                    price: 300,
                    availability: Availability::Disabled,
                },
            ]
        );
    }

    #[test]
    fn test_parse_shows_skips_blocks_missing_text() {
        let html = format!(
            "{}{}{}",
            r#"<div class="sc-sw9zb-2 iknTqF show"><div class="show-time">10:00</div></div>"#,
            active("", "200 ₽"),
            active("12:00", "250 ₽"),
        );
        let sessions = run(&html, Region::ActiveShow, SessionPolicy::Abort).unwrap();

        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].start_time, hm(12, 0));
        assert_eq!(sessions[0].price, 250);
    }

    #[test]
    fn test_parse_shows_abort_on_bad_price() {
        let html = format!("{}{}", active("12:00", "250 ₽"), active("15:00", "нет мест"));
        let result = run(&html, Region::ActiveShow, SessionPolicy::Abort);

        assert!(matches!(result, Err(KinostarError::InvalidPrice(_))));
    }

    #[test]
    fn test_parse_shows_skip_policy_drops_only_bad_block() {
        let html = format!(
            "{}{}{}",
            active("12:00", "250 ₽"),
            active("полдень", "300 ₽"),
            active("15:00", "350 ₽"),
        );
        let sessions = run(&html, Region::ActiveShow, SessionPolicy::Skip).unwrap();

        let times: Vec<NaiveTime> = sessions.iter().map(|s| s.start_time).collect();
        assert_eq!(times, vec![hm(12, 0), hm(15, 0)]);
    }

    #[test]
    fn test_parse_shows_no_blocks() {
        let sessions = run(
            "<html><body></body></html>",
            Region::DisabledShow,
            SessionPolicy::Abort,
        )
        .unwrap();
        assert!(sessions.is_empty());
    }

    proptest! {
        #[test]
        fn prop_price_ignores_decoration(
            n in 0u32..1_000_000,
            prefix in "[a-zа-я ]{0,5}",
            suffix in "[ ₽руб.]{0,6}",
        ) {
            let text = format!("{}{}{}", prefix, n, suffix);
            prop_assert_eq!(parse_price(&text).unwrap(), n);
        }

        #[test]
        fn prop_price_is_idempotent(n in 0u32..1_000_000) {
            let first = parse_price(&format!("{} ₽", n)).unwrap();
            prop_assert_eq!(parse_price(&first.to_string()).unwrap(), first);
        }
    }
}
