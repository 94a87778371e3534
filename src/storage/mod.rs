// src/storage/mod.rs
use std::fs;
use std::path::{Path, PathBuf};

use csv::WriterBuilder;

use crate::extractors::labels::StandardLabel;
use crate::extractors::pipeline::ExtractionReport;
use crate::utils::error::StorageError;

/// CSV column headers, in output order.
const CSV_HEADERS: [&str; 3] = ["Raw Line", "Standard Label", "Values Found"];

/// Renders a report as CSV text: header row first, one record per extracted
/// row, values joined with `", "`. Deterministic for a given report.
pub fn render_csv(report: &ExtractionReport) -> Result<String, StorageError> {
    let mut writer = WriterBuilder::new()
        .has_headers(true)
        .from_writer(Vec::new());

    writer.write_record(&CSV_HEADERS)?;
    for row in &report.rows {
        let values = row.values.join(", ");
        writer.write_record([row.raw_line.as_str(), row.label.as_str(), values.as_str()])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| StorageError::Serialization(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| StorageError::Serialization(e.to_string()))
}

pub struct StorageManager {
    base_dir: PathBuf,
}

impl StorageManager {
    /// Creates a new StorageManager with the specified base directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self, StorageError> {
        let base_path = base_dir.as_ref().to_path_buf();

        // Create the base directory if it doesn't exist
        if !base_path.exists() {
            fs::create_dir_all(&base_path).map_err(StorageError::Io)?;
        }

        Ok(Self {
            base_dir: base_path,
        })
    }

    /// Writes the report's CSV export to `<source_name>_financial_extraction.csv`
    pub fn save_report_csv(&self, report: &ExtractionReport) -> Result<PathBuf, StorageError> {
        let filename = format!("{}_financial_extraction.csv", report.source_name);
        let file_path = self.base_dir.join(filename);

        let csv_text = render_csv(report)?;
        fs::write(&file_path, csv_text)?;

        tracing::info!("Saved extraction CSV to {}", file_path.display());
        Ok(file_path)
    }

    /// Saves metadata about the extraction run in JSON format
    pub fn save_report_metadata(&self, report: &ExtractionReport) -> Result<PathBuf, StorageError> {
        let filename = format!("{}_financial_extraction_meta.json", report.source_name);
        let file_path = self.base_dir.join(filename);

        // Distinct labels in first-seen order
        let mut labels: Vec<StandardLabel> = Vec::new();
        for row in &report.rows {
            if !labels.contains(&row.label) {
                labels.push(row.label);
            }
        }

        let metadata = serde_json::json!({
            "source_name": report.source_name,
            "page_limit": report.page_limit,
            "row_count": report.rows.len(),
            "placeholder_only": report.is_placeholder(),
            "labels": labels,
            "extraction_timestamp": chrono::Utc::now().to_rfc3339(),
        });

        let metadata_str = serde_json::to_string_pretty(&metadata)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;

        fs::write(&file_path, metadata_str)?;

        tracing::info!("Saved extraction metadata to {}", file_path.display());
        Ok(file_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::pipeline::{ExtractedRow, IncomeStatementExtractor};

    fn sample_report() -> ExtractionReport {
        ExtractionReport {
            source_name: "sample".to_string(),
            page_limit: 40,
            rows: vec![
                ExtractedRow {
                    raw_line: "Total net sales 1,200 900".to_string(),
                    label: StandardLabel::Revenue,
                    values: vec!["1200".to_string(), "900".to_string()],
                },
                ExtractedRow {
                    raw_line: "Cost of sales (400)".to_string(),
                    label: StandardLabel::CostOfRevenue,
                    values: vec!["-400".to_string()],
                },
            ],
        }
    }

    #[test]
    fn renders_expected_csv() {
        let csv_text = render_csv(&sample_report()).unwrap();
        assert_eq!(
            csv_text,
            "Raw Line,Standard Label,Values Found\n\
             \"Total net sales 1,200 900\",Revenue,\"1200, 900\"\n\
             Cost of sales (400),Cost of Revenue,-400\n"
        );
    }

    #[test]
    fn rendering_is_deterministic() {
        let report = sample_report();
        assert_eq!(render_csv(&report).unwrap(), render_csv(&report).unwrap());
    }

    #[test]
    fn info_report_renders_exactly_one_data_row() {
        let extractor = IncomeStatementExtractor::new();
        let report = extractor.extract_from_text("", "empty");

        let csv_text = render_csv(&report).unwrap();
        let lines: Vec<&str> = csv_text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Raw Line,Standard Label,Values Found");
        assert!(lines[1].contains("INFO"));
        assert!(lines[1].contains("No income statement data detected in first 40 pages."));
    }

    #[test]
    fn saves_csv_and_metadata_files() {
        let dir = tempfile::tempdir().unwrap();
        let storage = StorageManager::new(dir.path()).unwrap();
        let report = sample_report();

        let csv_path = storage.save_report_csv(&report).unwrap();
        assert_eq!(
            csv_path.file_name().unwrap(),
            "sample_financial_extraction.csv"
        );
        let written = fs::read_to_string(&csv_path).unwrap();
        assert_eq!(written, render_csv(&report).unwrap());

        let meta_path = storage.save_report_metadata(&report).unwrap();
        let meta: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&meta_path).unwrap()).unwrap();
        assert_eq!(meta["row_count"], 2);
        assert_eq!(meta["page_limit"], 40);
        assert_eq!(meta["placeholder_only"], false);
        assert_eq!(meta["labels"][0], "Revenue");
        assert_eq!(meta["labels"][1], "Cost of Revenue");
    }
}
