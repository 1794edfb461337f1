use quotescan_core::batch::load_document_text;
use quotescan_core::error::QuoteError;
use quotescan_core::pipeline::validate_options;
use quotescan_core::ProcessOptions;
use std::path::PathBuf;

use crate::output;

pub fn run(
    input_file: PathBuf,
    output_format: &str,
    output_file: Option<PathBuf>,
    options: ProcessOptions,
    config_file: Option<PathBuf>,
    layout: bool,
) -> Result<(), QuoteError> {
    let config = super::resolve_config(config_file)?;
    let extractor = super::extractor(layout);

    tracing::info!("Reading {}", input_file.display());
    let text = load_document_text(&input_file, &extractor)?;
    quotescan_core::validate_text(&text)?;
    validate_options(&options)?;

    let result = quotescan_core::process_text(&text, &options, &config);

    match output_file {
        Some(path) => {
            // Always write JSON when saving to file
            let json = serde_json::to_string_pretty(&result)?;
            std::fs::write(&path, json)?;
            eprintln!(
                "Extracted {} quote(s), written to {}",
                result.total_quotes,
                path.display()
            );
        }
        None => match output_format {
            "json" => output::json::print(&result)?,
            _ => output::table::print_result(&result),
        },
    }

    Ok(())
}
