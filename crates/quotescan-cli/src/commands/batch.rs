use quotescan_core::batch::process_directory;
use quotescan_core::error::QuoteError;
use quotescan_core::ProcessOptions;
use std::path::PathBuf;

use crate::output;

pub fn run(
    input_dir: PathBuf,
    output_file: Option<PathBuf>,
    options: ProcessOptions,
    config_file: Option<PathBuf>,
    layout: bool,
) -> Result<(), QuoteError> {
    let config = super::resolve_config(config_file)?;
    let extractor = super::extractor(layout);

    let report = process_directory(&input_dir, &extractor, &options, &config)?;
    let summary = report.summary();

    match output_file {
        Some(path) => {
            let json = serde_json::to_string_pretty(&report)?;
            std::fs::write(&path, json)?;
            eprintln!(
                "Processed {} document(s), {} quote(s), written to {}",
                summary.documents,
                summary.quotes,
                path.display()
            );
            if summary.failed > 0 {
                eprintln!("  {} document(s) failed", summary.failed);
            }
        }
        None => output::table::print_batch(&report),
    }

    Ok(())
}
