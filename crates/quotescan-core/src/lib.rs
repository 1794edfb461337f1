pub mod batch;
pub mod config;
pub mod detect;
pub mod enrich;
pub mod error;
pub mod extraction;
pub mod model;
pub mod pipeline;

use error::QuoteError;
use extraction::PdfExtractor;
use model::Quote;

pub use pipeline::{process_text, validate_text, ProcessOptions, ProcessingResult};

/// Main API entry point: extract quotations from free text.
///
/// Runs every detection strategy over the input, drops duplicate detections
/// and returns the quotes ordered by start position. Pure and deterministic.
pub fn extract_quotes(text: &str) -> Vec<Quote> {
    let detected = detect::run_all(text);
    let detected_count = detected.len();
    let quotes = detect::merge::merge(detected);
    tracing::debug!(
        detected = detected_count,
        kept = quotes.len(),
        "merged quote detections"
    );
    quotes
}

/// Extract quotations from a PDF document.
pub fn extract_quotes_from_pdf(
    pdf_bytes: &[u8],
    extractor: &dyn PdfExtractor,
) -> Result<Vec<Quote>, QuoteError> {
    let pages = extractor.extract_pages(pdf_bytes)?;
    let text = extraction::document_text(&pages)?;
    Ok(extract_quotes(&text))
}

/// Convert a PDF to text and process it into a result envelope.
///
/// Conversion errors are returned; everything after conversion is reported
/// through the envelope.
pub fn process_pdf(
    pdf_bytes: &[u8],
    extractor: &dyn PdfExtractor,
    options: &ProcessOptions,
    config: &config::ExtractorConfig,
) -> Result<ProcessingResult, QuoteError> {
    let pages = extractor.extract_pages(pdf_bytes)?;
    let text = extraction::document_text(&pages)?;
    tracing::info!(
        "Processing PDF text from {}: {} page(s), {} chars",
        extractor.backend_name(),
        pages.len(),
        text.chars().count()
    );
    Ok(process_text(&text, options, config))
}
