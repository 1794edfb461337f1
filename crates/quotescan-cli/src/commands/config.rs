use quotescan_core::config::{load_config, ExtractorConfig};
use quotescan_core::error::QuoteError;
use std::path::Path;

pub fn show() -> Result<(), QuoteError> {
    let json = serde_json::to_string_pretty(&ExtractorConfig::default())?;
    println!("{json}");
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), QuoteError> {
    let config = load_config(file)?;
    println!("Valid: {}", file.display());
    println!("  context_length: {}", config.context_length);
    println!(
        "  sentiment: {} positive, {} negative word(s)",
        config.sentiment.positive.len(),
        config.sentiment.negative.len()
    );
    Ok(())
}
