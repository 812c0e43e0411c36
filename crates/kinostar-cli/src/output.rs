//! Rendering of the movie list

use std::fmt::Write;

use kinostar_core::{Availability, Movie};

/// Human-readable listing, one block per movie.
pub fn render_text(movies: &[Movie]) -> String {
    if movies.is_empty() {
        return "No movies today.".to_string();
    }

    let mut out = String::new();

    for movie in movies {
        let _ = writeln!(out, "{}", movie.name);

        let fields = [
            ("From", &movie.start_date),
            ("Until", &movie.end_date),
            ("Runtime", &movie.timing),
            ("Director", &movie.director),
            ("Cast", &movie.actors),
            ("Poster", &movie.poster_url),
        ];
        for (label, value) in fields {
            if let Some(value) = value {
                let _ = writeln!(out, "  {:<10}{}", format!("{}:", label), value);
            }
        }
        if let Some(description) = &movie.description {
            let _ = writeln!(out, "  {}", description);
        }

        for session in &movie.sessions {
            let state = match session.availability {
                Availability::Active => "",
                Availability::Disabled => " (unavailable)",
            };
            let _ = writeln!(
                out,
                "  {}  {} ₽{}",
                session.start_time.format("%H:%M"),
                session.price,
                state
            );
        }

        out.push('\n');
    }

    out.trim_end().to_string()
}

/// Pretty-printed JSON array of movies.
pub fn render_json(movies: &[Movie]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(movies)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use kinostar_core::Session;
    use proptest::prelude::*;

    fn session(h: u32, m: u32, price: u32, availability: Availability) -> Session {
        Session {
            start_time: NaiveTime::from_hms_opt(h, m, 0).unwrap(),
            price,
            availability,
        }
    }

    fn movie() -> Movie {
        let mut movie = Movie::new("Дюна");
        movie.director = Some("Дени Вильнёв".to_string());
        movie.sessions = vec![
            session(18, 30, 350, Availability::Active),
            session(14, 0, 300, Availability::Disabled),
        ];
        movie
    }

    #[test]
    fn test_render_text_empty() {
        assert_eq!(render_text(&[]), "No movies today.");
    }

    #[test]
    fn test_render_text_movie() {
        let text = render_text(&[movie()]);
        assert_eq!(
            text,
            "Дюна\n  Director: Дени Вильнёв\n  18:30  350 ₽\n  14:00  300 ₽ (unavailable)"
        );
    }

    #[test]
    fn test_render_text_includes_description() {
        let mut movie = movie();
        movie.description = Some("Пустыня.".to_string());
        let text = render_text(&[movie]);
        assert_eq!(
            text,
            "Дюна\n  Director: Дени Вильнёв\n  Пустыня.\n  18:30  350 ₽\n  14:00  300 ₽ (unavailable)"
        );
    }

    #[test]
    fn test_render_json_round_trips_names() {
        let json = render_json(&[movie()]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["name"], "Дюна");
        assert_eq!(value[0]["sessions"][1]["availability"], "Disabled");
    }

    proptest! {
        #[test]
        fn prop_render_text_starts_with_name(name in "[A-Za-zА-Яа-я][A-Za-zА-Яа-я ]{0,20}") {
            let text = render_text(&[Movie::new(name.trim())]);
            prop_assert!(text.starts_with(name.trim()));
        }
    }
}
