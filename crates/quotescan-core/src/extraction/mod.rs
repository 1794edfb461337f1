pub mod pdftotext;

use crate::error::QuoteError;

/// Content extracted from a single page of a PDF.
#[derive(Debug, Clone)]
pub struct PageContent {
    pub page_number: usize,
    pub lines: Vec<String>,
}

/// Trait for PDF text extraction backends.
pub trait PdfExtractor: Send + Sync {
    /// Extract text content from PDF bytes, returning one PageContent per page.
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, QuoteError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Join extracted pages into one text, one line per row.
///
/// Fails when the document yields no non-whitespace text (e.g. a scanned
/// PDF without a text layer).
pub fn document_text(pages: &[PageContent]) -> Result<String, QuoteError> {
    let text = pages
        .iter()
        .flat_map(|p| p.lines.iter().map(|s| s.as_str()))
        .collect::<Vec<_>>()
        .join("\n");

    if text.trim().is_empty() {
        return Err(QuoteError::NoTextExtracted);
    }
    Ok(text)
}
