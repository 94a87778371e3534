// src/main.rs
mod extractors;
mod pdf;
mod storage;
mod utils;

use std::fs;
use std::path::PathBuf;

use clap::Parser;

use extractors::pipeline::{IncomeStatementExtractor, DEFAULT_PAGE_LIMIT};
use storage::StorageManager;
use utils::AppError;

/// Command Line Interface for the income statement extractor
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the financial PDF document to process
    #[arg(short, long)]
    input: PathBuf,

    /// Output directory for the extracted CSV and metadata
    #[arg(short, long, default_value = "./output")]
    output_dir: String,

    /// Maximum number of leading pages to read from the document
    #[arg(long, default_value_t = DEFAULT_PAGE_LIMIT)]
    page_limit: usize,

    /// Debug mode - save extracted text and candidate lines for inspection
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::info!("Starting processing for args: {:?}", args);

    if args.page_limit == 0 {
        return Err(AppError::Config(
            "Page limit must be at least 1".to_string(),
        ));
    }

    // 3. Initialize storage
    let storage = StorageManager::new(&args.output_dir)?;

    // 4. Read the document bytes
    let bytes = fs::read(&args.input)?;
    tracing::info!("Read {} bytes from {}", bytes.len(), args.input.display());

    let source_name = args
        .input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_string());

    // 5. Save debug artifacts if requested
    if args.debug {
        let text = pdf::extract_document_text(&bytes, args.page_limit)?;
        let lines = extractors::lines::candidate_lines(&text);
        match utils::text_debug::save_debug_text(&args.output_dir, &source_name, &text, &lines) {
            Ok(dir) => tracing::info!("Saved debug artifacts to {}", dir.display()),
            Err(e) => tracing::warn!("Failed to save debug artifacts: {}", e),
        }
    }

    // 6. Run the extraction pipeline
    let extractor = IncomeStatementExtractor::with_page_limit(args.page_limit);
    let report = extractor.extract_from_pdf(&bytes, &source_name)?;

    if report.is_placeholder() {
        tracing::warn!(
            "No income statement rows recognized in {}",
            args.input.display()
        );
    } else {
        tracing::info!("Recognized {} income statement rows", report.rows.len());
    }

    // 7. Persist the CSV export and run metadata
    let csv_path = storage.save_report_csv(&report)?;
    tracing::info!("Saved extraction results to: {}", csv_path.display());

    match storage.save_report_metadata(&report) {
        Ok(path) => tracing::info!("Saved extraction metadata to: {}", path.display()),
        Err(e) => tracing::error!("Failed to save extraction metadata: {}", e),
    }

    Ok(())
}
