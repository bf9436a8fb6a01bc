pub mod analyze;
pub mod args;
pub mod dates;
pub mod extract;
pub mod patterns;
pub mod report;
pub mod stats;
pub mod utils;

pub use analyze::analyze_documents;
pub use args::Args;
pub use stats::AnalysisResult;
