use chrono::{Datelike, Duration, NaiveDate};
use regex::Regex;
use tracing::warn;

use crate::patterns;
use crate::stats::{DateCounts, MonthCounts, YearCounts};

/// Count date mentions in one document's text.
///
/// Each match is normalized and parsed into a typed date immediately, so the
/// rest of the pipeline never re-parses strings. A match whose parts do not
/// form a real calendar day (e.g. "35 Jan 2024") is dropped with a warning.
pub fn count_dates(text: &str, pattern: &Regex) -> DateCounts {
    let mut counts = DateCounts::new();

    for caps in pattern.captures_iter(text) {
        let day = caps[1].parse::<u32>().ok();
        let month = patterns::normalize_month(&caps[2]).and_then(patterns::month_number);
        let year = caps[3].parse::<i32>().ok();

        let date = match (day, month, year) {
            (Some(day), Some(month), Some(year)) => NaiveDate::from_ymd_opt(year, month, day),
            _ => None,
        };

        match date {
            Some(date) => *counts.entry(date).or_insert(0) += 1,
            None => {
                warn!(
                    action = "skip",
                    component = "date_counting",
                    matched_text = &caps[0],
                    "Matched text is not a valid calendar date"
                );
            }
        }
    }

    counts
}

/// Merge per-document counts into one mapping, summing counts per day.
pub fn combine_counts<I>(per_document: I) -> DateCounts
where
    I: IntoIterator<Item = DateCounts>,
{
    let mut combined = DateCounts::new();
    for counts in per_document {
        for (date, count) in counts {
            *combined.entry(date).or_insert(0) += count;
        }
    }
    combined
}

/// Fill missing days between the earliest and latest observed date with zero
/// counts. An empty mapping is returned unchanged.
pub fn fill_missing_dates(mut counts: DateCounts) -> DateCounts {
    let start = counts.keys().next().copied();
    let end = counts.keys().next_back().copied();

    if let (Some(start), Some(end)) = (start, end) {
        let mut day = start;
        while day <= end {
            counts.entry(day).or_insert(0);
            day = day + Duration::days(1);
        }
    }

    counts
}

/// Derive month-year and year counts from the daily series by truncating each
/// date to the coarser key. Totals across all three levels are equal.
pub fn rollup_counts(daily: &DateCounts) -> (MonthCounts, YearCounts) {
    let mut month_year_counts = MonthCounts::new();
    let mut year_counts = YearCounts::new();

    for (date, count) in daily {
        *month_year_counts
            .entry((date.year(), date.month()))
            .or_insert(0) += count;
        *year_counts.entry(date.year()).or_insert(0) += count;
    }

    (month_year_counts, year_counts)
}
