use anyhow::{Context, Result};
use regex::Regex;

/// Canonical month abbreviations, index 0 = January.
pub const MONTH_ABBREVS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

// Day, month name (abbreviated or full, case-insensitive), 4-digit year.
// September abbreviates as "Sep", not "Sept".
const DATE_PATTERN: &str = r"(?i)(\d{1,2})\s+(Jan(?:uary)?|Feb(?:ruary)?|Mar(?:ch)?|Apr(?:il)?|May|Jun(?:e)?|Jul(?:y)?|Aug(?:ust)?|Sep(?:tember)?|Oct(?:ober)?|Nov(?:ember)?|Dec(?:ember)?)\s+(\d{4})";

/// Compile the date-mention pattern. Compiled once per run and passed by
/// reference down the call chain.
pub fn date_pattern() -> Result<Regex> {
    Regex::new(DATE_PATTERN).context("Failed to compile date pattern")
}

/// Normalize a matched month spelling to its canonical capitalized 3-letter
/// abbreviation. Spellings outside the explicit table fall back to matching
/// their first three letters against the canonical set; anything that still
/// resolves to no month yields None.
pub fn normalize_month(raw: &str) -> Option<&'static str> {
    let lower = raw.to_lowercase();
    let abbrev = match lower.as_str() {
        "jan" | "january" => "Jan",
        "feb" | "february" => "Feb",
        "mar" | "march" => "Mar",
        "apr" | "april" => "Apr",
        "may" => "May",
        "jun" | "june" => "Jun",
        "jul" | "july" => "Jul",
        "aug" | "august" => "Aug",
        "sep" | "september" => "Sep",
        "oct" | "october" => "Oct",
        "nov" | "november" => "Nov",
        "dec" | "december" => "Dec",
        _ => {
            let prefix: String = lower.chars().take(3).collect();
            return MONTH_ABBREVS
                .iter()
                .find(|abbrev| abbrev.to_lowercase() == prefix)
                .copied();
        }
    };
    Some(abbrev)
}

/// Month number (1-12) for a canonical abbreviation.
pub fn month_number(abbrev: &str) -> Option<u32> {
    MONTH_ABBREVS
        .iter()
        .position(|&m| m == abbrev)
        .map(|idx| idx as u32 + 1)
}
