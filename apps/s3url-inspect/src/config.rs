//! Configuration for the inspect tool.
//!
//! Values are loaded from environment variables; command-line arguments are
//! reserved for the URLs to inspect.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One human-readable line per URL.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("text") {
            Ok(Self::Text)
        } else if s.eq_ignore_ascii_case("json") {
            Ok(Self::Json)
        } else {
            anyhow::bail!("unknown output format: {s} (expected `text` or `json`)")
        }
    }
}

/// Inspect tool configuration.
///
/// | Variable | Default |
/// |----------|---------|
/// | `LOG_LEVEL` | `warn` |
/// | `S3URL_OUTPUT` | `text` |
/// | `S3URL_STRICT` | `false` |
#[derive(Debug, Clone, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct InspectConfig {
    /// Log level filter used when `RUST_LOG` is unset.
    #[builder(default = String::from("warn"))]
    pub log_level: String,

    /// Output format for results.
    #[builder(default)]
    pub output: OutputFormat,

    /// Exit with a failure status if any URL fails to parse.
    #[builder(default = false)]
    pub strict: bool,
}

impl Default for InspectConfig {
    fn default() -> Self {
        Self {
            log_level: String::from("warn"),
            output: OutputFormat::Text,
            strict: false,
        }
    }
}

impl InspectConfig {
    /// Load configuration from environment variables, falling back to defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if `S3URL_OUTPUT` names an unknown format.
    pub fn from_env() -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Ok(v) = std::env::var("LOG_LEVEL") {
            config.log_level = v;
        }
        if let Ok(v) = std::env::var("S3URL_OUTPUT") {
            config.output = v.parse()?;
        }
        if let Ok(v) = std::env::var("S3URL_STRICT") {
            config.strict = parse_bool(&v);
        }

        Ok(config)
    }
}

/// Parse a string as a boolean, accepting `"1"` and `"true"` (case-insensitive).
fn parse_bool(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}
