//! Batch processing of a folder of documents.

use crate::config::ExtractorConfig;
use crate::error::QuoteError;
use crate::extraction::{self, PdfExtractor};
use crate::pipeline::{self, ProcessOptions, ProcessingResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Pdf,
    Text,
}

impl DocumentKind {
    /// Detect the document kind from the file extension.
    pub fn from_path(path: &Path) -> Option<DocumentKind> {
        let ext = path.extension()?.to_str()?;
        if ext.eq_ignore_ascii_case("pdf") {
            Some(DocumentKind::Pdf)
        } else if ext.eq_ignore_ascii_case("txt") {
            Some(DocumentKind::Text)
        } else {
            None
        }
    }
}

/// Read a PDF or text file into plain text.
pub fn load_document_text(path: &Path, extractor: &dyn PdfExtractor) -> Result<String, QuoteError> {
    match DocumentKind::from_path(path) {
        Some(DocumentKind::Pdf) => {
            let pdf_bytes = std::fs::read(path)?;
            let pages = extractor.extract_pages(&pdf_bytes)?;
            extraction::document_text(&pages)
        }
        Some(DocumentKind::Text) => Ok(std::fs::read_to_string(path)?),
        None => Err(QuoteError::UnsupportedInput(path.to_path_buf())),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentReport {
    pub file_name: String,
    pub kind: DocumentKind,
    /// Characters of text loaded from the file; 0 when it could not be read.
    pub text_length: usize,
    pub result: ProcessingResult,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchReport {
    pub documents: Vec<DocumentReport>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub documents: usize,
    pub failed: usize,
    pub quotes: usize,
}

impl BatchReport {
    pub fn summary(&self) -> BatchSummary {
        BatchSummary {
            documents: self.documents.len(),
            failed: self
                .documents
                .iter()
                .filter(|d| !d.result.success)
                .count(),
            quotes: self.documents.iter().map(|d| d.result.total_quotes).sum(),
        }
    }
}

/// List the `.pdf` and `.txt` files directly inside `dir`, sorted by name.
pub fn collect_documents(dir: &Path) -> Result<Vec<(PathBuf, DocumentKind)>, QuoteError> {
    let mut documents = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        if let Some(kind) = DocumentKind::from_path(&path) {
            documents.push((path, kind));
        }
    }
    documents.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(documents)
}

/// Process every supported document in a directory.
///
/// A document that cannot be read or converted gets a failed result; the
/// rest of the batch continues.
pub fn process_directory(
    dir: &Path,
    extractor: &dyn PdfExtractor,
    options: &ProcessOptions,
    config: &ExtractorConfig,
) -> Result<BatchReport, QuoteError> {
    let documents = collect_documents(dir)?;
    tracing::info!("Processing {} document(s) from {}", documents.len(), dir.display());

    let mut report = BatchReport::default();
    for (path, kind) in documents {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());

        let (text_length, result) = match load_document_text(&path, extractor) {
            Ok(text) => {
                let text_length = text.chars().count();
                tracing::info!("Processing {}: {} chars", file_name, text_length);
                (text_length, pipeline::process_text(&text, options, config))
            }
            Err(e) => {
                tracing::warn!("Skipping {}: {}", file_name, e);
                (0, ProcessingResult::failure(&e, 0, options))
            }
        };

        report.documents.push(DocumentReport {
            file_name,
            kind,
            text_length,
            result,
        });
    }

    Ok(report)
}
