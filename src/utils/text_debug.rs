// src/utils/text_debug.rs
use std::fs;
use std::path::{Path, PathBuf};

use crate::utils::error::AppError;

/// Saves the bounded document text and the surviving candidate lines under
/// `<output_dir>/<source_name>/debug/` so filter misses can be diagnosed.
///
/// Returns the debug directory path.
pub fn save_debug_text(
    output_dir: &str,
    source_name: &str,
    document_text: &str,
    candidate_lines: &[String],
) -> Result<PathBuf, AppError> {
    let debug_dir = Path::new(output_dir).join(source_name).join("debug");
    fs::create_dir_all(&debug_dir)?;

    let text_path = debug_dir.join("extracted_text.txt");
    fs::write(&text_path, document_text)?;
    tracing::debug!("Saved extracted document text to {}", text_path.display());

    let lines_path = debug_dir.join("candidate_lines.txt");
    fs::write(&lines_path, candidate_lines.join("\n"))?;
    tracing::debug!(
        "Saved {} candidate lines to {}",
        candidate_lines.len(),
        lines_path.display()
    );

    Ok(debug_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_both_debug_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let output_dir = dir.path().to_string_lossy().into_owned();

        let lines = vec!["Net sales 1,200".to_string()];
        let debug_dir =
            save_debug_text(&output_dir, "report", "Net sales 1,200\nfooter\n", &lines).unwrap();

        let text = fs::read_to_string(debug_dir.join("extracted_text.txt")).unwrap();
        assert!(text.contains("Net sales 1,200"));

        let dumped = fs::read_to_string(debug_dir.join("candidate_lines.txt")).unwrap();
        assert_eq!(dumped, "Net sales 1,200");
    }
}
