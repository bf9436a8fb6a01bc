use anyhow::{Context, Result};
use std::path::Path;
use std::time::Instant;
use tracing::info;

/// Extract the full text of one PDF document, concatenated across pages.
///
/// Pages that yield no text contribute nothing; an unreadable or corrupt file
/// returns an error that the orchestrator absorbs per document.
pub fn extract_text(path: &Path) -> Result<String> {
    let start_time = Instant::now();
    info!(action = "start", component = "text_extraction", path = ?path, "Extracting text from document");

    if !path.exists() {
        anyhow::bail!("Document not found at {:?}", path);
    }

    let text = pdf_extract::extract_text(path)
        .with_context(|| format!("Failed to extract text from {:?}", path))?;

    let extract_time = start_time.elapsed();
    info!(
        action = "complete",
        component = "text_extraction",
        path = ?path,
        text_length = text.len(),
        duration_ms = extract_time.as_millis(),
        "Text extraction completed"
    );
    Ok(text)
}
