use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use std::time::Instant;
use tracing::info;

use crate::dates;
use crate::patterns::MONTH_ABBREVS;
use crate::stats::DateCounts;

/// Render the report text: daily, month-year, and year sections in
/// chronological order, blank-line separated, followed by a dashed separator
/// and summary totals. Lines are newline-joined with no trailing newline.
pub fn render_report(daily: &DateCounts) -> String {
    let (month_year_counts, year_counts) = dates::rollup_counts(daily);

    let mut lines: Vec<String> = Vec::new();

    for (date, count) in daily {
        lines.push(format!("{}\t{}", date.format("%d-%b-%Y"), count));
    }
    lines.push(String::new());

    for (&(year, month), count) in &month_year_counts {
        lines.push(format!(
            "{}-{}\t{}",
            MONTH_ABBREVS[(month - 1) as usize],
            year,
            count
        ));
    }
    lines.push(String::new());

    for (year, count) in &year_counts {
        lines.push(format!("{}\t{}", year, count));
    }

    lines.push("-".repeat(40));
    lines.push(format!("Total unique dates: {}", daily.len()));
    lines.push(format!(
        "Total date mentions: {}",
        daily.values().sum::<u32>()
    ));

    lines.join("\n")
}

/// Write the report, overwriting any existing file at `path`. Write failures
/// propagate; the computation itself cannot fail.
pub fn write_report(daily: &DateCounts, path: &Path) -> Result<()> {
    let start_time = Instant::now();
    info!(action = "start", component = "report_writer", path = ?path, "Writing date report");

    let report = render_report(daily);
    fs::write(path, &report).with_context(|| format!("Failed to write report to {:?}", path))?;

    let write_time = start_time.elapsed();
    info!(
        action = "complete",
        component = "report_writer",
        path = ?path,
        report_bytes = report.len(),
        duration_ms = write_time.as_millis(),
        "Report written"
    );
    Ok(())
}
