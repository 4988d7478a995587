//! Quality badges for generated READMEs.
use crate::row::Row;

/// shields.io badge markup.
pub fn badge(title: &str, name: &str, value: &str, color: &str) -> String {
    format!("![{title}](https://img.shields.io/badge/{name}-{value}-{color}.svg \"{title}\")")
}

/// Color tier for a quality ratio. Thresholds are checked top-down, first
/// match wins.
pub fn tier(ratio: f64) -> &'static str {
    if ratio >= 0.99 {
        "brightgreen"
    } else if ratio >= 0.9 {
        "green"
    } else if ratio >= 0.8 {
        "yellowgreen"
    } else if ratio >= 0.7 {
        "yellow"
    } else if ratio >= 0.6 {
        "orange"
    } else {
        "red"
    }
}

/// Badge for the fraction of `rows` where `column` is non-empty.
/// An empty row set counts as fully covered.
pub fn get_badge(rows: &[Row], name: &str, column: &str) -> String {
    let ratio = if rows.is_empty() {
        1.0
    } else {
        let hits = rows
            .iter()
            .filter(|r| r.column(column).map(|v| !v.is_empty()).unwrap_or(false))
            .count();
        hits as f64 / rows.len() as f64
    };
    let percent = (ratio * 100.0).round() as u64;
    badge(
        &format!("{name}: {percent}%"),
        name,
        &format!("{percent}%25"),
        tier(ratio),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_first_match_wins() {
        assert_eq!(tier(0.995), "brightgreen");
        assert_eq!(tier(0.99), "brightgreen");
        assert_eq!(tier(0.95), "green");
        assert_eq!(tier(0.85), "yellowgreen");
        assert_eq!(tier(0.75), "yellow");
        assert_eq!(tier(0.65), "orange");
        assert_eq!(tier(0.0), "red");
    }

    #[test]
    fn badge_markup() {
        assert_eq!(
            badge("Source: 100%", "Source", "100%25", "brightgreen"),
            "![Source: 100%](https://img.shields.io/badge/Source-100%25-brightgreen.svg \"Source: 100%\")"
        );
    }

    #[test]
    fn empty_rows_are_fully_covered() {
        let b = get_badge(&[], "Glottolog", "Language_ID");
        assert!(b.contains("100%25"));
        assert!(b.contains("brightgreen"));
    }

    #[test]
    fn ratio_counts_non_empty_cells() {
        let rows = vec![
            Row::new("1", "abcd1234", "5", "kasa"),
            Row::new("2", "", "5", "tapu"),
        ];
        let b = get_badge(&rows, "Glottolog", "Language_ID");
        assert!(b.contains("50%25"), "{b}");
        assert!(b.contains("-red."), "{b}");
    }
}
