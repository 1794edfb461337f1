//! Integration tests for the extraction pipeline end-to-end.
//!
//! Uses a MockExtractor that returns pre-built PageContent without
//! invoking pdftotext, so these tests run without poppler-utils.

use quotescan_core::batch::{process_directory, DocumentKind};
use quotescan_core::config::ExtractorConfig;
use quotescan_core::detect::{attributed, Strategy};
use quotescan_core::error::QuoteError;
use quotescan_core::extraction::{PageContent, PdfExtractor};
use quotescan_core::model::{Quote, Sentiment};
use quotescan_core::{extract_quotes, extract_quotes_from_pdf, process_pdf, ProcessOptions};
use std::collections::HashSet;

struct MockExtractor {
    pages: Vec<PageContent>,
}

impl PdfExtractor for MockExtractor {
    fn extract_pages(&self, _pdf_bytes: &[u8]) -> Result<Vec<PageContent>, QuoteError> {
        Ok(self.pages.clone())
    }

    fn backend_name(&self) -> &str {
        "mock"
    }
}

struct MissingBinaryExtractor;

impl PdfExtractor for MissingBinaryExtractor {
    fn extract_pages(&self, _pdf_bytes: &[u8]) -> Result<Vec<PageContent>, QuoteError> {
        Err(QuoteError::PdftotextNotFound)
    }

    fn backend_name(&self) -> &str {
        "missing"
    }
}

fn page(number: usize, lines: &[&str]) -> PageContent {
    PageContent {
        page_number: number,
        lines: lines.iter().map(|s| s.to_string()).collect(),
    }
}

const MIXED_TEXT: &str = r#"
"Be the change you wish to see in the world." - Mahatma Gandhi
Albert Einstein once said, "Imagination is more important than knowledge."
> This is a block quote that should be extracted from the text
"Hello," said John. "How are you today?"
"#;

const QUOTE_SHEET: &[&str] = &[
    "Quotation No. 2024-117",
    "1. Machine: PF1 1510",
    "2. Forming area 1500 x 1000 mm",
    "The customer noted \"the heater zones heat up evenly\" during the trial",
    "3. Price: EUR 145,000",
    "\"Delivery within twelve weeks\" - Sales Team",
];

fn min_len_for(quote: &Quote) -> usize {
    Strategy::ALL
        .iter()
        .find(|s| s.confidence() == quote.confidence)
        .map(|s| s.min_text_len())
        .unwrap()
}

// ---------------------------------------------------------------------------
// Output invariants
// ---------------------------------------------------------------------------
#[test]
fn output_sorted_by_start_position() {
    let quotes = extract_quotes(MIXED_TEXT);
    assert!(!quotes.is_empty());
    assert!(quotes
        .windows(2)
        .all(|w| w[0].start_position <= w[1].start_position));
}

#[test]
fn output_has_unique_dedup_keys() {
    let quotes = extract_quotes(MIXED_TEXT);
    let keys: HashSet<_> = quotes.iter().map(|q| q.dedup_key()).collect();
    assert_eq!(keys.len(), quotes.len());
}

#[test]
fn every_quote_meets_its_strategy_minimum() {
    let sheet = QUOTE_SHEET.join("\n");
    for text in [MIXED_TEXT, sheet.as_str()] {
        for quote in extract_quotes(text) {
            assert!(
                quote.text.chars().count() > min_len_for(&quote),
                "{:?}",
                quote
            );
            assert!(quote.start_position < quote.end_position);
            assert!(quote.source.is_none());
            assert!(quote.context.is_none());
        }
    }
}

#[test]
fn extraction_is_deterministic() {
    assert_eq!(extract_quotes(MIXED_TEXT), extract_quotes(MIXED_TEXT));
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------
#[test]
fn attributed_quote_detected_with_author() {
    let text = r#""Be the change you wish to see in the world." - Mahatma Gandhi"#;
    let detected = attributed::detect(text);
    assert_eq!(detected.len(), 1);
    assert_eq!(detected[0].text, "Be the change you wish to see in the world.");
    assert_eq!(detected[0].author.as_deref(), Some("Mahatma Gandhi"));
    assert_eq!(detected[0].confidence, 0.95);
}

#[test]
fn attributed_duplicate_is_shadowed_by_bare_quote() {
    // The bare quoted span is detected first at the same offset with the same
    // text, so it wins deduplication over the attributed detection.
    let text = r#""Be the change you wish to see in the world." - Mahatma Gandhi"#;
    let quotes = extract_quotes(text);
    assert_eq!(quotes.len(), 2);
    assert_eq!(quotes[0].text, "Be the change you wish to see in the world.");
    assert_eq!(quotes[0].confidence, 0.9);
    assert!(quotes[0].author.is_none());
    // The whole line also reads as a block quote.
    assert_eq!(quotes[1].text, text);
    assert_eq!(quotes[1].confidence, 0.7);
}

#[test]
fn speaker_before_quote_is_not_attributed() {
    let text = r#"Albert Einstein once said, "Imagination is more important than knowledge.""#;
    let quotes = extract_quotes(text);
    let quote = quotes
        .iter()
        .find(|q| q.text == "Imagination is more important than knowledge.")
        .unwrap();
    assert_eq!(quote.start_position, 27);
    assert!(quote.author.is_none());
    assert!(quotes.iter().all(|q| q.author.is_none()));
}

#[test]
fn dialogue_quote_attributed_to_speaker() {
    let quotes = extract_quotes(r#""Hello," said John. "How are you today?""#);
    let hello = quotes.iter().find(|q| q.text == "Hello,").unwrap();
    assert_eq!(hello.author.as_deref(), Some("John"));
    assert_eq!(hello.confidence, 0.85);
    assert!(quotes.iter().any(|q| q.text == "How are you today?"));
}

#[test]
fn plain_numbered_text_yields_nothing() {
    assert!(extract_quotes("1. 20 units\n2. 30 units\nTotal 5").is_empty());
    assert!(extract_quotes("").is_empty());
}

#[test]
fn identical_quotes_at_different_offsets_both_kept() {
    let text = r#"1 "repeat this phrase" and 2 "repeat this phrase""#;
    let quotes = extract_quotes(text);
    let repeated: Vec<_> = quotes
        .iter()
        .filter(|q| q.text == "repeat this phrase")
        .collect();
    assert_eq!(repeated.len(), 2);
    assert_ne!(repeated[0].start_position, repeated[1].start_position);
}

// ---------------------------------------------------------------------------
// PDF path
// ---------------------------------------------------------------------------
#[test]
fn pdf_quotes_extracted_across_pages() {
    let extractor = MockExtractor {
        pages: vec![page(1, &QUOTE_SHEET[..4]), page(2, &QUOTE_SHEET[4..])],
    };
    let quotes = extract_quotes_from_pdf(&[], &extractor).unwrap();
    assert!(quotes
        .iter()
        .any(|q| q.text == "the heater zones heat up evenly"));
    assert!(quotes
        .iter()
        .any(|q| q.text == "Delivery within twelve weeks"));
}

#[test]
fn pdf_without_text_is_an_error() {
    let extractor = MockExtractor {
        pages: vec![page(1, &["", "   "])],
    };
    let result = process_pdf(
        &[],
        &extractor,
        &ProcessOptions::default(),
        &ExtractorConfig::default(),
    );
    assert!(matches!(result, Err(QuoteError::NoTextExtracted)));
}

#[test]
fn pdf_processing_with_sentiment() {
    let extractor = MockExtractor {
        pages: vec![page(
            1,
            &["1. Feedback", "\"The trial parts looked amazing\" - Plant Manager"],
        )],
    };
    let options = ProcessOptions {
        include_sentiment: true,
        ..Default::default()
    };
    let result = process_pdf(&[], &extractor, &options, &ExtractorConfig::default()).unwrap();
    assert!(result.success);
    let record = result
        .quotes
        .iter()
        .find(|r| r.quote.text == "The trial parts looked amazing")
        .unwrap();
    assert_eq!(record.sentiment, Some(Sentiment::Positive));
}

// ---------------------------------------------------------------------------
// Batch
// ---------------------------------------------------------------------------
#[test]
fn batch_processes_supported_files_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let a_text = "1. Note\n\"The cooling fans are quiet enough\"\n";
    std::fs::write(dir.path().join("a.txt"), a_text).unwrap();
    std::fs::write(dir.path().join("b.txt"), "   \n").unwrap();
    std::fs::write(dir.path().join("c.pdf"), b"%PDF-1.4").unwrap();
    std::fs::write(dir.path().join("d.xlsx"), b"ignored").unwrap();

    let extractor = MockExtractor {
        pages: vec![page(1, QUOTE_SHEET)],
    };
    let report = process_directory(
        dir.path(),
        &extractor,
        &ProcessOptions::default(),
        &ExtractorConfig::default(),
    )
    .unwrap();

    let names: Vec<_> = report.documents.iter().map(|d| d.file_name.as_str()).collect();
    assert_eq!(names, vec!["a.txt", "b.txt", "c.pdf"]);
    assert_eq!(report.documents[0].kind, DocumentKind::Text);
    assert!(report.documents[0].result.success);
    assert_eq!(report.documents[0].text_length, a_text.chars().count());
    assert!(!report.documents[1].result.success);
    assert_eq!(report.documents[1].text_length, 4);
    assert_eq!(report.documents[2].kind, DocumentKind::Pdf);
    assert!(report.documents[2].result.total_quotes > 0);

    let summary = report.summary();
    assert_eq!(summary.documents, 3);
    assert_eq!(summary.failed, 1);
}

#[test]
fn batch_records_conversion_failures() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("quote.pdf"), b"%PDF-1.4").unwrap();

    let report = process_directory(
        dir.path(),
        &MissingBinaryExtractor,
        &ProcessOptions::default(),
        &ExtractorConfig::default(),
    )
    .unwrap();

    assert_eq!(report.documents.len(), 1);
    assert_eq!(report.documents[0].text_length, 0);
    let result = &report.documents[0].result;
    assert!(!result.success);
    assert!(result.quotes.is_empty());
    assert!(result.error.as_deref().unwrap().contains("pdftotext not found"));
}

#[test]
fn batch_missing_directory_is_an_error() {
    let result = process_directory(
        std::path::Path::new("/nonexistent/quotes"),
        &MissingBinaryExtractor,
        &ProcessOptions::default(),
        &ExtractorConfig::default(),
    );
    assert!(matches!(result, Err(QuoteError::Io(_))));
}
