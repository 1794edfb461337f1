use quotescan_core::batch::BatchReport;
use quotescan_core::model::QuoteRecord;
use quotescan_core::ProcessingResult;

const PREVIEW_CHARS: usize = 72;

pub fn print_result(result: &ProcessingResult) {
    if !result.success {
        println!(
            "  Failed: {}\n",
            result.error.as_deref().unwrap_or("unknown error")
        );
        return;
    }

    println!(
        "  {} quote(s) in {} characters\n",
        result.total_quotes, result.text_length
    );

    for (i, record) in result.quotes.iter().enumerate() {
        print_quote(i + 1, record);
    }
}

fn print_quote(number: usize, record: &QuoteRecord) {
    let quote = &record.quote;
    println!(
        "  {:>3}. [{}..{}] ({:.2}) {}",
        number,
        quote.start_position,
        quote.end_position,
        quote.confidence,
        preview(&quote.text)
    );
    if let Some(ref author) = quote.author {
        println!("       author: {}", author);
    }
    if let Some(sentiment) = record.sentiment {
        println!("       sentiment: {}", sentiment);
    }
    if let Some(ref topics) = record.topics {
        println!("       topics: {}", topics.join(", "));
    }
    if let Some(ref context) = quote.context {
        println!("       context: {}", preview(context));
    }
}

pub fn print_batch(report: &BatchReport) {
    for doc in &report.documents {
        println!("=== {} ===\n", doc.file_name);
        print_result(&doc.result);
        println!();
    }

    let summary = report.summary();
    println!(
        "{} document(s), {} failed, {} quote(s)",
        summary.documents, summary.failed, summary.quotes
    );
}

/// Single-line preview, truncated on a char boundary.
fn preview(text: &str) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= PREVIEW_CHARS {
        flat
    } else {
        let cut: String = flat.chars().take(PREVIEW_CHARS).collect();
        format!("{cut}...")
    }
}
