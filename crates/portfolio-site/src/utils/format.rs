use chrono::{DateTime, Datelike, NaiveDate};

const MONTHS_EN: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

const MONTHS_PT: [&str; 12] = [
    "janeiro", "fevereiro", "março", "abril", "maio", "junho", "julho", "agosto", "setembro",
    "outubro", "novembro", "dezembro",
];

pub const DEFAULT_DATE_LANGUAGE: &str = "pt";

/// Cuts `text` to `max_chars` characters and appends `...`.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        None => text.to_string(),
        Some((end, _)) => format!("{}...", &text[..end]),
    }
}

/// Long-form date for post listings, e.g. `15 de março de 2024` or
/// `March 15, 2024`. Accepts `YYYY-MM-DD` or RFC 3339 timestamps.
pub fn format_date(date: &str, lang: &str) -> Option<String> {
    let date = parse_date(date.trim())?;
    let month = date.month0() as usize;
    let primary = lang.split(['-', '_']).next().unwrap_or(DEFAULT_DATE_LANGUAGE);

    let formatted = match primary.to_ascii_lowercase().as_str() {
        "pt" => format!("{} de {} de {}", date.day(), MONTHS_PT[month], date.year()),
        _ => format!("{} {}, {}", MONTHS_EN[month], date.day(), date.year()),
    };
    Some(formatted)
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("exactly", 7), "exactly");
        assert_eq!(truncate_text("Kubernetes na prática", 10), "Kubernetes...");
    }

    #[test]
    fn test_truncate_text_multibyte() {
        assert_eq!(truncate_text("ação rápida", 3), "açã...");
    }

    #[test]
    fn test_format_date_languages() {
        assert_eq!(format_date("2024-03-15", "pt").as_deref(), Some("15 de março de 2024"));
        assert_eq!(format_date("2024-03-15", "pt-BR").as_deref(), Some("15 de março de 2024"));
        assert_eq!(format_date("2024-03-15", "en").as_deref(), Some("March 15, 2024"));
        assert_eq!(format_date("2024-03-15", "de").as_deref(), Some("March 15, 2024"));
    }

    #[test]
    fn test_format_date_rfc3339_and_invalid() {
        assert_eq!(
            format_date("2023-12-01T08:30:00Z", DEFAULT_DATE_LANGUAGE).as_deref(),
            Some("1 de dezembro de 2023")
        );
        assert_eq!(format_date("not a date", "en"), None);
    }
}
