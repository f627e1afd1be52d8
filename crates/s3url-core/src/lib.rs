//! Detection and decomposition of S3 and S3-compatible object URLs.
//!
//! Given an [`http::Uri`], this crate answers two questions:
//!
//! - Does the URI address an S3-compatible object store? ([`is_s3_url`])
//! - If so, which endpoint, bucket, object key, region and version does it
//!   name? ([`S3UrlParts::parse`])
//!
//! Both AWS shapes are understood (virtual-hosted-style
//! `bucket.s3.region.amazonaws.com/key`, path-style
//! `s3.region.amazonaws.com/bucket/key`, and their dual-stack variants) as
//! well as generic S3-compatible endpoints such as MinIO, IP-addressed
//! appliances and `s3://bucket/key` URLs.
//!
//! # Architecture
//!
//! ```text
//! Uri
//!  |
//!  +-> host::strip_port ----------+
//!  +-> label::is_bucket_label ----+--> detect::is_s3_url --> bool
//!  +-> aws::find_aws_s3_host -----+          |
//!                                 |          v
//!                                 +--> parse (S3UrlParts::parse)
//!                                            |
//!                                            v
//!                                      S3UrlParts --> Display / to_uri
//! ```
//!
//! # Usage
//!
//! ```
//! use s3url_core::{AddressKind, S3UrlParts};
//!
//! let parts: S3UrlParts = "http://minio.local:9000/bucket/object".parse().unwrap();
//! assert_eq!(parts.endpoint(), "minio.local:9000");
//! assert_eq!(parts.bucket_name(), "bucket");
//! assert_eq!(parts.object_key(), "object");
//! assert_eq!(parts.kind(), AddressKind::Object);
//! ```

pub mod aws;
pub mod detect;
mod error;
pub mod host;
pub mod label;
mod parse;
mod parts;
mod query;
mod types;

pub use aws::{AwsHostMatch, find_aws_s3_host};
pub use detect::{is_s3_url, is_s3_url_str};
pub use error::{INVALID_S3_URL_MESSAGE, S3UrlError, S3UrlResult};
pub use host::strip_port;
pub use label::is_bucket_label;
pub use parts::S3UrlParts;
pub use types::{AddressKind, UrlScheme};
