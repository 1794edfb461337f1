mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "quotescan",
    version,
    about = "Extract quotations from sales quotes (PDF) and free text"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract quotes from a single PDF or text file
    Extract {
        /// Path to a .pdf or .txt file
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write the result envelope to a JSON file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,

        /// Attach surrounding text to each quote
        #[arg(long)]
        context: bool,

        /// Tag each quote as positive, negative or neutral
        #[arg(long)]
        sentiment: bool,

        /// Keep only quotes mentioning this keyword (repeatable)
        #[arg(short, long = "topic", value_name = "KEYWORD")]
        topic: Vec<String>,

        /// Custom JSON config file
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Run pdftotext with -layout
        #[arg(long)]
        layout: bool,
    },
    /// Extract quotes from every PDF and text file in a folder
    Batch {
        /// Folder containing .pdf and .txt files
        input_dir: PathBuf,

        /// Write the batch report to a JSON file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,

        /// Tag each quote as positive, negative or neutral
        #[arg(long)]
        sentiment: bool,

        /// Keep only quotes mentioning this keyword (repeatable)
        #[arg(short, long = "topic", value_name = "KEYWORD")]
        topic: Vec<String>,

        /// Custom JSON config file
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Run pdftotext with -layout
        #[arg(long)]
        layout: bool,
    },
    /// Inspect and validate extractor configs
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the built-in config as JSON
    Show,
    /// Validate a custom config file
    Validate {
        /// Path to JSON config file
        file: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quotescan=info,quotescan_core=info".into()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Extract {
            input_file,
            output,
            out,
            context,
            sentiment,
            topic,
            config,
            layout,
        } => commands::extract::run(
            input_file,
            &output,
            out,
            commands::options(context, sentiment, topic),
            config,
            layout,
        ),
        Commands::Batch {
            input_dir,
            out,
            sentiment,
            topic,
            config,
            layout,
        } => commands::batch::run(
            input_dir,
            out,
            commands::options(false, sentiment, topic),
            config,
            layout,
        ),
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show(),
            ConfigAction::Validate { file } => commands::config::validate(&file),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
