//! Triage - categorize complaint text by keyword.
//!
//! Classifies `--text` against the built-in rule table and writes the result
//! to stdout as one JSON object. Diagnostics go to stderr.

use std::io::Write;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use triage_core::classifier::KeywordClassifier;

/// Triage - categorize complaint text by keyword
#[derive(Parser, Debug)]
#[command(name = "triage", version, about)]
struct Args {
    /// Text to classify
    #[arg(long, default_value = "")]
    text: String,
}

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "triage=warn,warn";

/// Initialize stderr logging. `RUST_LOG` overrides the default level.
fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging();

    tracing::debug!("triage v{}", env!("CARGO_PKG_VERSION"));

    let classifier = KeywordClassifier::new()?;
    let result = classifier.classify(&args.text);
    tracing::info!(
        category = result.category.name(),
        score = result.score,
        "Classified {} bytes of text",
        args.text.len()
    );

    let json = result.to_json()?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(json.as_bytes())?;
    stdout.flush()?;

    Ok(())
}
