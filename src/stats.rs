use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Occurrence count per calendar day. Ordered keys keep every consumer
/// chronological without an explicit sort.
pub type DateCounts = BTreeMap<NaiveDate, u32>;

/// Occurrence count per (year, month).
pub type MonthCounts = BTreeMap<(i32, u32), u32>;

/// Occurrence count per year.
pub type YearCounts = BTreeMap<i32, u32>;

#[derive(Debug)]
pub struct AnalysisResult {
    /// Gap-filled daily series: one entry per day between the earliest and
    /// latest observed date.
    pub daily_counts: DateCounts,
    pub documents_scanned: usize,
    pub documents_failed: usize,
}
