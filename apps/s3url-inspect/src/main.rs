//! s3url-inspect - classify and decompose S3 URLs.
//!
//! Every command-line argument is run through S3 URL detection and parsing,
//! and one result line per URL is written to stdout. Logs go to stderr.
//!
//! # Usage
//!
//! ```text
//! s3url-inspect https://bucket.s3.eu-west-1.amazonaws.com/key http://minio.local:9000/bucket
//! S3URL_OUTPUT=json s3url-inspect s3://bucket/object
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `S3URL_OUTPUT` | `text` | `text` or `json` |
//! | `S3URL_STRICT` | `false` | Exit with status 1 if any URL is rejected |
//! | `LOG_LEVEL` | `warn` | Log level filter |
//! | `RUST_LOG` | *(unset)* | Fine-grained tracing filter (overrides `LOG_LEVEL`) |

mod config;
mod report;

use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::{InspectConfig, OutputFormat};
use crate::report::Report;

/// Initialize the tracing subscriber.
///
/// Uses `RUST_LOG` if set, otherwise falls back to the `LOG_LEVEL` config value.
fn init_tracing(log_level: &str) -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(log_level)
            .with_context(|| format!("invalid log level filter: {log_level}"))?
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    Ok(())
}

/// Inspect every URL, writing one line each. Returns the number rejected.
fn run(urls: &[String], output: OutputFormat, out: &mut impl Write) -> Result<usize> {
    let mut rejected = 0;

    for url in urls {
        let report = Report::inspect(url);
        if !report.is_ok() {
            warn!(url = %url, "URL is not a valid S3 URL");
            rejected += 1;
        }

        let line = match output {
            OutputFormat::Text => report.to_text(),
            OutputFormat::Json => report.to_json().context("failed to serialize report")?,
        };
        writeln!(out, "{line}").context("failed to write result")?;
    }

    Ok(rejected)
}

fn main() -> Result<()> {
    let config = InspectConfig::from_env()?;

    init_tracing(&config.log_level)?;

    let urls: Vec<String> = std::env::args().skip(1).collect();
    if urls.is_empty() {
        anyhow::bail!("usage: s3url-inspect <url>...");
    }

    info!(count = urls.len(), output = ?config.output, strict = config.strict, "inspecting URLs");

    let stdout = io::stdout();
    let rejected = run(&urls, config.output, &mut stdout.lock())?;

    if config.strict && rejected > 0 {
        std::process::exit(1);
    }

    Ok(())
}
