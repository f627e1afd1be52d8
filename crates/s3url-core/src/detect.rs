//! S3 URL detection.
//!
//! [`is_s3_url`] runs an ordered list of rules over a normalized view of the
//! URI. Each rule either settles the question or passes; the first decisive
//! rule wins. A URI whose path does not percent-decode to UTF-8 is rejected
//! before any rule runs.
//!
//! 1. `s3` scheme: accept
//! 2. scheme other than `http`/`https`: reject
//! 3. empty host: reject
//! 4. AWS S3 host grammar: accept
//! 5. first path segment is a bucket label (path-style): accept
//! 6. first host label is a bucket label and the host is not an Azure
//!    storage domain (virtual-hosted-style): accept
//! 7. otherwise: reject

use http::Uri;
use percent_encoding::percent_decode_str;
use tracing::debug;

use crate::aws::find_aws_s3_host;
use crate::error::{S3UrlError, S3UrlResult};
use crate::host::{strip_port, uri_host};
use crate::label::is_bucket_label;
use crate::types::UrlScheme;

/// Azure storage domains that share the `label.service.domain` shape.
const AZURE_STORAGE_SUFFIXES: &[&str] = &[
    ".blob.core.windows.net",
    ".file.core.windows.net",
    ".dfs.core.windows.net",
];

/// The parts of a URI the detection rules and the parser work on.
#[derive(Debug)]
pub(crate) struct UrlView<'a> {
    /// Scheme as written.
    pub scheme: &'a str,
    /// Lower-cased `host[:port]`.
    pub host: String,
    /// Percent-decoded path without its leading `/`.
    pub path: String,
}

impl<'a> UrlView<'a> {
    /// Fails when the decoded path is not UTF-8, since it cannot name an
    /// S3 key.
    pub(crate) fn new(uri: &'a Uri) -> S3UrlResult<Self> {
        let decoded = percent_decode_str(uri.path()).decode_utf8().map_err(|e| {
            debug!(path = uri.path(), error = %e, "rejected URL with non UTF-8 path");
            S3UrlError::InvalidS3Url
        })?;
        let path = decoded.strip_prefix('/').unwrap_or(&*decoded).to_owned();

        Ok(Self {
            scheme: uri.scheme_str().unwrap_or_default(),
            host: uri_host(uri).to_ascii_lowercase(),
            path,
        })
    }

    pub(crate) fn url_scheme(&self) -> Option<UrlScheme> {
        UrlScheme::from_scheme_str(self.scheme)
    }

    pub(crate) fn host_without_port(&self) -> &str {
        strip_port(&self.host)
    }

    /// The path up to the first `/`, or the whole path.
    pub(crate) fn first_path_segment(&self) -> &str {
        self.path.split('/').next().unwrap_or_default()
    }
}

type Rule = fn(&UrlView<'_>) -> Option<bool>;

/// Detection rules in evaluation order.
const RULES: &[(&str, Rule)] = &[
    ("s3_scheme", s3_scheme),
    ("http_scheme", http_scheme),
    ("empty_host", empty_host),
    ("aws_host", aws_host),
    ("path_style_bucket", path_style_bucket),
    ("virtual_host_bucket", virtual_host_bucket),
];

fn s3_scheme(url: &UrlView<'_>) -> Option<bool> {
    (url.url_scheme() == Some(UrlScheme::S3)).then_some(true)
}

fn http_scheme(url: &UrlView<'_>) -> Option<bool> {
    match url.url_scheme() {
        Some(UrlScheme::Http | UrlScheme::Https) => None,
        _ => Some(false),
    }
}

fn empty_host(url: &UrlView<'_>) -> Option<bool> {
    url.host.is_empty().then_some(false)
}

fn aws_host(url: &UrlView<'_>) -> Option<bool> {
    find_aws_s3_host(&url.host).map(|_| true)
}

fn path_style_bucket(url: &UrlView<'_>) -> Option<bool> {
    let segment = url.first_path_segment();
    (!segment.is_empty() && is_bucket_label(segment)).then_some(true)
}

fn virtual_host_bucket(url: &UrlView<'_>) -> Option<bool> {
    let host = url.host_without_port();
    let (first_label, _) = host.split_once('.')?;

    if is_azure_storage_host(host) {
        return Some(false);
    }

    is_bucket_label(first_label).then_some(true)
}

/// Whether `host` belongs to one of the Azure storage domains, written
/// with or without the trailing root dot.
fn is_azure_storage_host(host: &str) -> bool {
    let host = host.strip_suffix('.').unwrap_or(host);
    AZURE_STORAGE_SUFFIXES
        .iter()
        .any(|suffix| host.ends_with(suffix))
}

pub(crate) fn detect(url: &UrlView<'_>) -> bool {
    for (name, rule) in RULES {
        if let Some(verdict) = rule(url) {
            debug!(rule = name, verdict, host = %url.host, "S3 URL detection settled");
            return verdict;
        }
    }

    debug!(host = %url.host, "no detection rule recognized the URL");
    false
}

/// Whether `uri` addresses an S3 or S3-compatible object store.
///
/// Never fails; anything unrecognized is simply `false`.
///
/// # Examples
///
/// ```
/// use http::Uri;
/// use s3url_core::is_s3_url;
///
/// let uri: Uri = "https://bucket.s3.amazonaws.com/key".parse().unwrap();
/// assert!(is_s3_url(&uri));
///
/// let uri: Uri = "http://s3-test.blob.core.windows.net".parse().unwrap();
/// assert!(!is_s3_url(&uri));
/// ```
#[must_use]
pub fn is_s3_url(uri: &Uri) -> bool {
    UrlView::new(uri).is_ok_and(|url| detect(&url))
}

/// [`is_s3_url`] for a URL string. Strings that are not valid URIs are not
/// S3 URLs.
#[must_use]
pub fn is_s3_url_str(url: &str) -> bool {
    url.parse::<Uri>().is_ok_and(|uri| is_s3_url(&uri))
}
