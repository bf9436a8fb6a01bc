use anyhow::Result;
use std::time::Instant;
use tracing::{error, info};

use crate::stats::AnalysisResult;
use crate::{dates, extract, patterns, report, utils, Args};

/// Process the document list in order, combine the per-document counts,
/// gap-fill, and write the report.
///
/// A document that fails extraction contributes nothing and never aborts the
/// batch; only a report-write failure propagates.
pub fn analyze_documents(args: &Args) -> Result<AnalysisResult> {
    let total_start_time = Instant::now();
    info!(
        action = "start",
        component = "document_analysis",
        document_count = args.documents.len(),
        "Starting date analysis"
    );

    let pattern = patterns::date_pattern()?;

    let mut per_document = Vec::new();
    let mut documents_failed = 0;

    for path in &args.documents {
        println!("Analyzing dates in: {}", path.display());
        match extract::extract_text(path) {
            Ok(text) => per_document.push(dates::count_dates(&text, &pattern)),
            Err(e) => {
                error!(action = "skip", component = "document_analysis", path = ?path, error = %e, "Error processing document");
                eprintln!("Error processing PDF {}: {:#}", path.display(), e);
                documents_failed += 1;
            }
        }
    }

    let combined = dates::combine_counts(per_document);
    let daily_counts = dates::fill_missing_dates(combined);

    report::write_report(&daily_counts, &args.output)?;

    let total_time = total_start_time.elapsed();
    info!(
        action = "complete",
        component = "document_analysis",
        documents_failed,
        unique_dates = daily_counts.len(),
        duration_ms = total_time.as_millis(),
        "Analysis completed successfully"
    );

    Ok(AnalysisResult {
        daily_counts,
        documents_scanned: args.documents.len() - documents_failed,
        documents_failed,
    })
}

pub fn print_analysis_results(result: &AnalysisResult, args: &Args) {
    println!("\n--- Date Mention Analysis ---");

    let start = result.daily_counts.keys().next();
    let end = result.daily_counts.keys().next_back();
    if let (Some(start), Some(end)) = (start, end) {
        let days = (*end - *start).num_days() + 1;
        println!(
            "Date range: {} to {} ({} days)",
            start.format("%B %-d, %Y"),
            end.format("%B %-d, %Y"),
            utils::format_number(days as u32)
        );
    } else {
        println!("Date range: No data available");
    }

    println!(
        "Documents scanned: {}",
        utils::format_number(result.documents_scanned as u32)
    );
    if result.documents_failed > 0 {
        println!(
            "Documents failed: {}",
            utils::format_number(result.documents_failed as u32)
        );
    }
    println!(
        "Total unique dates: {}",
        utils::format_number(result.daily_counts.len() as u32)
    );
    println!(
        "Total date mentions: {}",
        utils::format_number(result.daily_counts.values().sum())
    );
    println!("Report written to: {}", args.output.display());
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::path::PathBuf;

    #[test]
    fn failing_documents_do_not_abort_the_batch() {
        let output = env::temp_dir().join("datescan_analyze_test.txt");
        let args = Args {
            documents: vec![
                PathBuf::from("/nonexistent/first.pdf"),
                PathBuf::from("/nonexistent/second.pdf"),
            ],
            output: output.clone(),
            verbose: false,
        };

        let result = analyze_documents(&args).unwrap();
        assert_eq!(result.documents_failed, 2);
        assert_eq!(result.documents_scanned, 0);
        assert!(result.daily_counts.is_empty());

        let report = std::fs::read_to_string(&output).unwrap();
        assert!(report.contains("Total unique dates: 0"));
        assert!(report.contains("Total date mentions: 0"));

        std::fs::remove_file(&output).unwrap();
    }

    #[test]
    fn empty_document_list_writes_empty_report() {
        let output = env::temp_dir().join("datescan_empty_batch_test.txt");
        let args = Args {
            documents: Vec::new(),
            output: output.clone(),
            verbose: false,
        };

        let result = analyze_documents(&args).unwrap();
        assert!(result.daily_counts.is_empty());
        assert_eq!(result.documents_scanned, 0);

        let report = std::fs::read_to_string(&output).unwrap();
        let expected = format!(
            "\n\n{}\nTotal unique dates: 0\nTotal date mentions: 0",
            "-".repeat(40)
        );
        assert_eq!(report, expected);

        std::fs::remove_file(&output).unwrap();
    }
}
