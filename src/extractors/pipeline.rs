// src/extractors/pipeline.rs
use crate::extractors::labels::{normalize_label, StandardLabel};
use crate::extractors::lines::candidate_lines;
use crate::extractors::numbers::extract_numbers;
use crate::pdf;
use crate::utils::error::PdfError;

/// Number of leading pages consulted per document. Bounds memory and CPU
/// regardless of document length.
pub const DEFAULT_PAGE_LIMIT: usize = 40;

/// One recognized income statement row. Immutable after creation.
#[derive(Debug, Clone)]
pub struct ExtractedRow {
    pub raw_line: String,
    pub label: StandardLabel,
    pub values: Vec<String>,
}

/// Result of one extraction run, carrying the metadata storage needs.
#[derive(Debug, Clone)]
pub struct ExtractionReport {
    pub source_name: String,
    pub page_limit: usize,
    pub rows: Vec<ExtractedRow>,
}

impl ExtractionReport {
    /// True when the report holds only the "no data detected" placeholder.
    pub fn is_placeholder(&self) -> bool {
        self.rows.len() == 1 && self.rows[0].label == StandardLabel::Info
    }
}

/// Composes candidate filtering, numeric token parsing and label
/// normalization over a document's bounded text.
pub struct IncomeStatementExtractor {
    page_limit: usize,
}

impl IncomeStatementExtractor {
    pub fn new() -> Self {
        Self {
            page_limit: DEFAULT_PAGE_LIMIT,
        }
    }

    pub fn with_page_limit(page_limit: usize) -> Self {
        Self { page_limit }
    }

    /// Runs the full pipeline over raw document bytes. Fails only when the
    /// bytes are not a valid PDF.
    pub fn extract_from_pdf(
        &self,
        bytes: &[u8],
        source_name: &str,
    ) -> Result<ExtractionReport, PdfError> {
        let text = pdf::extract_document_text(bytes, self.page_limit)?;
        Ok(self.extract_from_text(&text, source_name))
    }

    /// Runs the line-oriented pipeline over already-extracted text. Total:
    /// lines without a recognized label or without numeric values are
    /// skipped, and a document with no qualifying lines yields exactly one
    /// INFO placeholder row.
    pub fn extract_from_text(&self, text: &str, source_name: &str) -> ExtractionReport {
        let mut rows = Vec::new();

        for line in candidate_lines(text) {
            let label = normalize_label(&line);
            let values = extract_numbers(&line);

            // Only keep meaningful financial lines
            match label {
                Some(label) if !values.is_empty() => {
                    tracing::debug!("Recognized '{}' row: {}", label, line);
                    rows.push(ExtractedRow {
                        raw_line: line,
                        label,
                        values,
                    });
                }
                _ => {
                    tracing::trace!("Skipping candidate line without label or values: {}", line);
                }
            }
        }

        if rows.is_empty() {
            tracing::info!(
                "No income statement rows recognized in '{}', emitting placeholder",
                source_name
            );
            rows.push(self.placeholder_row());
        }

        ExtractionReport {
            source_name: source_name.to_string(),
            page_limit: self.page_limit,
            rows,
        }
    }

    fn placeholder_row(&self) -> ExtractedRow {
        ExtractedRow {
            raw_line: format!(
                "No income statement data detected in first {} pages.",
                self.page_limit
            ),
            label: StandardLabel::Info,
            values: Vec::new(),
        }
    }
}

impl Default for IncomeStatementExtractor {
    fn default() -> Self {
        Self::new()
    }
}
