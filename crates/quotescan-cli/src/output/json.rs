use quotescan_core::error::QuoteError;
use quotescan_core::ProcessingResult;

pub fn print(result: &ProcessingResult) -> Result<(), QuoteError> {
    let json = serde_json::to_string_pretty(result)?;
    println!("{json}");
    Ok(())
}
