//! Bucket label heuristic.
//!
//! [`is_bucket_label`] is deliberately looser than the AWS bucket naming
//! rules (<https://docs.aws.amazon.com/AmazonS3/latest/userguide/bucketnamingrules.html>):
//! consecutive dots, trailing hyphens, very short names and AWS-reserved
//! prefixes such as `xn--` or `sthree-` are all accepted. S3-compatible
//! services (MinIO, Ceph, storage appliances) use container names AWS would
//! refuse, and those must still be recognized.

use std::sync::LazyLock;

use regex::Regex;

/// Maximum bucket label length.
const MAX_BUCKET_LABEL_LEN: usize = 63;

/// A dotted-quad of digit runs. Octet ranges are not checked.
static IPV4_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]+\.[0-9]+\.[0-9]+\.[0-9]+$").expect("valid IPv4 literal pattern")
});

/// Whether `s` plausibly names a bucket.
///
/// Rules, applied to the trimmed, lower-cased input:
/// - 1-63 bytes long
/// - not an IPv4 dotted-quad
/// - only `a-z`, `0-9`, `.` and `-`
/// - starts with a letter or digit
///
/// # Examples
///
/// ```
/// use s3url_core::is_bucket_label;
///
/// assert!(is_bucket_label("My-Bucket"));
/// assert!(is_bucket_label("a..b"));
/// assert!(!is_bucket_label("192.168.1.100"));
/// assert!(!is_bucket_label("-bucket"));
/// ```
#[must_use]
pub fn is_bucket_label(s: &str) -> bool {
    let label = s.trim().to_ascii_lowercase();

    if label.is_empty() || label.len() > MAX_BUCKET_LABEL_LEN {
        return false;
    }

    if IPV4_LITERAL.is_match(&label) {
        return false;
    }

    if !label
        .bytes()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'.' || b == b'-')
    {
        return false;
    }

    label
        .bytes()
        .next()
        .is_some_and(|first| first.is_ascii_lowercase() || first.is_ascii_digit())
}
