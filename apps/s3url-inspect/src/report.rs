//! Per-URL inspection results and their text/JSON rendering.

use s3url_core::{AddressKind, S3UrlParts, is_s3_url_str};
use serde::Serialize;

/// A parsed address plus the fields derived from it.
#[derive(Debug, Serialize)]
pub struct PartsReport {
    #[serde(flatten)]
    parts: S3UrlParts,
    kind: AddressKind,
    canonical: String,
}

/// The outcome of inspecting one URL.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    url: String,
    is_s3: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    parts: Option<PartsReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl Report {
    /// Run detection and parsing on `url`.
    #[must_use]
    pub fn inspect(url: &str) -> Self {
        let is_s3 = is_s3_url_str(url);

        let (parts, error) = match url.parse::<S3UrlParts>() {
            Ok(parts) => {
                let report = PartsReport {
                    kind: parts.kind(),
                    canonical: parts.to_string(),
                    parts,
                };
                (Some(report), None)
            }
            Err(e) => (None, Some(e.to_string())),
        };

        Self {
            url: url.to_owned(),
            is_s3,
            parts,
            error,
        }
    }

    /// Whether the URL parsed.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.parts.is_some()
    }

    /// Render as a single `key=value` line, omitting empty fields.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut fields = vec![self.url.clone(), format!("s3={}", self.is_s3)];

        if let Some(report) = &self.parts {
            let p = &report.parts;
            fields.push(format!("kind={}", report.kind));
            fields.extend(
                [
                    ("endpoint", p.endpoint()),
                    ("bucket", p.bucket_name()),
                    ("key", p.object_key()),
                    ("region", p.region()),
                    ("version", p.version()),
                    ("params", p.unparsed_params()),
                ]
                .into_iter()
                .filter(|(_, value)| !value.is_empty())
                .map(|(name, value)| format!("{name}={value}")),
            );
            if p.is_path_style() {
                fields.push("path-style".to_owned());
            }
            if p.is_dual_stack() {
                fields.push("dual-stack".to_owned());
            }
            fields.push(format!("canonical={}", report.canonical));
        }

        if let Some(error) = &self.error {
            fields.push(format!("error={error:?}"));
        }

        fields.join(" ")
    }

    /// Render as a single-line JSON object.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
