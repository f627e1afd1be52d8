//! Error types for S3 URL parsing.

/// User-facing explanation attached to every rejected URL.
pub const INVALID_S3_URL_MESSAGE: &str = "Invalid S3 URL. Supported forms are standard \
     virtual-hosted-style or path-style URLs defined by AWS, e.g. \
     https://bucket.s3.amazonaws.com or https://s3.amazonaws.com/bucket, S3-compatible \
     endpoints such as http://minio.local:9000/bucket, or s3://bucket/key";

/// Error type for S3 URL handling.
#[derive(Debug, thiserror::Error)]
pub enum S3UrlError {
    /// The URL is not an S3 or S3-compatible address.
    ///
    /// Raised when the scheme is unsupported, the host is empty, or no
    /// detection rule recognizes the URL as storage-shaped.
    #[error("{}", INVALID_S3_URL_MESSAGE)]
    InvalidS3Url,

    /// The canonical form of an address could not be rebuilt as a URI.
    #[error("invalid URI: {0}")]
    InvalidUri(#[from] http::uri::InvalidUri),
}

/// Convenience result type for S3 URL operations.
pub type S3UrlResult<T> = Result<T, S3UrlError>;
