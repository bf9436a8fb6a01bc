use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "datescan",
    about = "Scan PDF documents for calendar-date mentions and report daily, monthly and yearly counts",
    version,
    long_about = None
)]
pub struct Args {
    /// PDF documents to scan, processed in order
    pub documents: Vec<PathBuf>,

    /// Path for the generated report
    #[arg(short, long, default_value = "date_report.txt")]
    pub output: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
