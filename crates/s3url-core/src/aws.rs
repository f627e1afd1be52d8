//! AWS S3 host grammar.
//!
//! Matches the three host shapes AWS documents for S3:
//!
//! - virtual-hosted-style: `bucket.s3.amazonaws.com`, `bucket.s3-eu-west-1.amazonaws.com`
//! - path-style: `s3.amazonaws.com`, `s3-eu-west-1.amazonaws.com`
//! - dual-stack: `bucket.s3.dualstack.eu-west-1.amazonaws.com`,
//!   `s3.dualstack.eu-west-1.amazonaws.com`
//!
//! Only the literal `amazonaws.com` domain family is recognized here;
//! everything else goes through the generic heuristics in [`crate::detect`].

use std::sync::LazyLock;

use regex::Regex;

use crate::host::strip_port;

/// `[bucket.]s3(.|-)<token>.<token>`, captured as bucket, second and third token.
const AWS_S3_HOST_PATTERN: &str = r"^(?P<bucket>.+\.)?s3[.-](?P<second>[a-z0-9-]+)\.(?P<third>[a-z0-9-]+)";

/// Substring every AWS S3 host must contain.
const AWS_DOMAIN: &str = "amazonaws.com";

/// Token standing for the AWS domain itself rather than a region.
pub(crate) const AWS_DOMAIN_KEYWORD: &str = "amazonaws";

/// Token marking a dual-stack endpoint.
pub(crate) const DUAL_STACK_KEYWORD: &str = "dualstack";

static AWS_S3_HOST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(AWS_S3_HOST_PATTERN).expect("valid AWS S3 host pattern")
});

/// The captured groups of an AWS S3 host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AwsHostMatch {
    /// Bucket label including its trailing `.`, or empty for path-style hosts.
    pub bucket: String,
    /// Token after `s3.`/`s3-`: `dualstack`, a region, or `amazonaws`.
    pub second: String,
    /// Token after the second one: a region, `amazonaws`, or `com`.
    pub third: String,
}

impl AwsHostMatch {
    /// Whether the host carried a bucket label (virtual-hosted-style).
    #[must_use]
    pub fn is_virtual_host(&self) -> bool {
        !self.bucket.is_empty()
    }

    /// The bucket label without its trailing dot.
    #[must_use]
    pub fn bucket_name(&self) -> &str {
        self.bucket.strip_suffix('.').unwrap_or(&self.bucket)
    }

    /// Whether the host is a dual-stack endpoint.
    #[must_use]
    pub fn is_dual_stack(&self) -> bool {
        self.second == DUAL_STACK_KEYWORD
    }

    /// The region named by the host, if any.
    ///
    /// For dual-stack hosts the region is the third token, otherwise the
    /// second. The `amazonaws` domain keyword never counts as a region.
    #[must_use]
    pub fn region(&self) -> Option<&str> {
        let candidate = if self.is_dual_stack() {
            &self.third
        } else {
            &self.second
        };
        (candidate != AWS_DOMAIN_KEYWORD).then_some(candidate.as_str())
    }
}

/// Match a lower-cased host against the AWS S3 grammar.
///
/// Any explicit port is removed first. Hosts that fit the shape but do not
/// contain `amazonaws.com` are rejected.
///
/// # Examples
///
/// ```
/// use s3url_core::find_aws_s3_host;
///
/// let m = find_aws_s3_host("bucket.s3-eu-west-1.amazonaws.com").unwrap();
/// assert_eq!(m.bucket_name(), "bucket");
/// assert_eq!(m.region(), Some("eu-west-1"));
///
/// assert!(find_aws_s3_host("bucket.s3.example.com").is_none());
/// ```
#[must_use]
pub fn find_aws_s3_host(host: &str) -> Option<AwsHostMatch> {
    let host = strip_port(host);
    if !host.contains(AWS_DOMAIN) {
        return None;
    }

    let caps = AWS_S3_HOST.captures(host)?;
    let group = |name: &str| {
        caps.name(name)
            .map(|m| m.as_str().to_owned())
            .unwrap_or_default()
    };

    Some(AwsHostMatch {
        bucket: group("bucket"),
        second: group("second"),
        third: group("third"),
    })
}
