//! End-to-end tests for the public `s3url-core` API.
//!
//! Run them with:
//! ```text
//! cargo test -p s3url-integration
//! ```

use std::sync::Once;

use http::Uri;

static INIT: Once = Once::new();

/// Initialize tracing (once).
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// Parse a URL string into a [`Uri`], panicking on malformed test input.
#[must_use]
pub fn uri(url: &str) -> Uri {
    init_tracing();
    url.parse()
        .unwrap_or_else(|e| panic!("invalid test URI {url}: {e}"))
}

mod test_detection;
mod test_roundtrip;
