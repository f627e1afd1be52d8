//! Scheme and address classification types.

use std::fmt;

/// URL schemes accepted for S3 addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UrlScheme {
    /// Plain HTTP endpoint.
    Http,
    /// TLS endpoint.
    Https,
    /// `s3://bucket/key` shorthand.
    S3,
}

impl UrlScheme {
    /// Classify a scheme string, ignoring ASCII case.
    ///
    /// Returns `None` for every scheme other than `http`, `https` and `s3`.
    ///
    /// # Examples
    ///
    /// ```
    /// use s3url_core::UrlScheme;
    ///
    /// assert_eq!(UrlScheme::from_scheme_str("HTTPS"), Some(UrlScheme::Https));
    /// assert_eq!(UrlScheme::from_scheme_str("ftp"), None);
    /// ```
    #[must_use]
    pub fn from_scheme_str(scheme: &str) -> Option<Self> {
        if scheme.eq_ignore_ascii_case("http") {
            Some(Self::Http)
        } else if scheme.eq_ignore_ascii_case("https") {
            Some(Self::Https)
        } else if scheme.eq_ignore_ascii_case("s3") {
            Some(Self::S3)
        } else {
            None
        }
    }

    /// The lower-case scheme name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Https => "https",
            Self::S3 => "s3",
        }
    }
}

impl fmt::Display for UrlScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How much of the bucket/object hierarchy an address names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressKind {
    /// The storage service itself; no bucket.
    Service,
    /// A bucket, without an object key.
    Bucket,
    /// An object (or a directory-like key prefix) inside a bucket.
    Object,
}

impl fmt::Display for AddressKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Service => "service",
            Self::Bucket => "bucket",
            Self::Object => "object",
        })
    }
}
