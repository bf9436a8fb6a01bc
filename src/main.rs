use clap::Parser;
use tracing::error;

use datescan::{analyze, utils, Args};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    utils::setup_logging(args.verbose);

    match analyze::analyze_documents(&args) {
        Ok(result) => {
            analyze::print_analysis_results(&result, &args);
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Analysis failed");
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}
