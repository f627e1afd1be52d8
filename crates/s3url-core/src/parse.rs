//! Decomposition of a URI into an [`S3UrlParts`].
//!
//! AWS hosts are decomposed from the captures of the AWS host grammar. Any
//! other host must first pass detection, then falls back to the generic
//! layouts: `s3://bucket/key`, path-style `endpoint/bucket/key`, and
//! virtual-hosted-style `bucket.endpoint` for bare hosts.

use std::str::FromStr;

use http::Uri;
use tracing::debug;

use crate::aws::{AwsHostMatch, find_aws_s3_host};
use crate::detect::{UrlView, detect};
use crate::error::{S3UrlError, S3UrlResult};
use crate::label::is_bucket_label;
use crate::parts::S3UrlParts;
use crate::query::split_version;
use crate::types::UrlScheme;

impl S3UrlParts {
    /// Parse a URI into its S3 address components.
    ///
    /// # Errors
    ///
    /// Returns [`S3UrlError::InvalidS3Url`] if the scheme is not `http`,
    /// `https` or `s3`, the host is empty, or the URI is neither an AWS S3
    /// URL nor recognized as an S3-compatible one.
    ///
    /// # Examples
    ///
    /// ```
    /// use http::Uri;
    /// use s3url_core::S3UrlParts;
    ///
    /// let uri: Uri = "http://bucket.s3-aws-region.amazonaws.com/keydir/keyname?versionId=abc"
    ///     .parse()
    ///     .unwrap();
    /// let parts = S3UrlParts::parse(&uri).unwrap();
    /// assert_eq!(parts.bucket_name(), "bucket");
    /// assert_eq!(parts.object_key(), "keydir/keyname");
    /// assert_eq!(parts.region(), "aws-region");
    /// assert_eq!(parts.version(), "abc");
    /// ```
    pub fn parse(uri: &Uri) -> S3UrlResult<Self> {
        let url = UrlView::new(uri)?;

        let Some(scheme) = url.url_scheme() else {
            debug!(scheme = url.scheme, "rejected URL with unsupported scheme");
            return Err(S3UrlError::InvalidS3Url);
        };
        if url.host.is_empty() {
            debug!("rejected URL with empty host");
            return Err(S3UrlError::InvalidS3Url);
        }

        let mut parts = Self {
            scheme: url.scheme.to_owned(),
            host: url.host.clone(),
            ..Self::default()
        };

        if let Some(aws) = find_aws_s3_host(&url.host) {
            parts.fill_from_aws_host(&url, &aws)?;
        } else if detect(&url) {
            parts.fill_from_generic_host(&url, scheme)?;
        } else {
            return Err(S3UrlError::InvalidS3Url);
        }

        let (version, unparsed_params) = split_version(uri.query().unwrap_or_default());
        parts.version = version;
        parts.unparsed_params = unparsed_params;

        debug!(
            host = %parts.host,
            bucket = %parts.bucket_name,
            key = %parts.object_key,
            path_style = parts.is_path_style,
            "parsed S3 URL"
        );

        Ok(parts)
    }

    fn fill_from_aws_host(
        &mut self,
        url: &UrlView<'_>,
        aws: &AwsHostMatch,
    ) -> S3UrlResult<()> {
        if aws.is_virtual_host() {
            debug!(host = %url.host, "AWS virtual-hosted-style URL");
            aws.bucket_name().clone_into(&mut self.bucket_name);
            self.object_key.clone_from(&url.path);
            self.endpoint = url
                .host
                .strip_prefix(aws.bucket.as_str())
                .unwrap_or(&url.host)
                .to_owned();
        } else {
            debug!(host = %url.host, "AWS path-style URL");
            self.split_path_style(url)?;
        }

        self.is_dual_stack = aws.is_dual_stack();
        aws.region().unwrap_or_default().clone_into(&mut self.region);
        Ok(())
    }

    fn fill_from_generic_host(
        &mut self,
        url: &UrlView<'_>,
        scheme: UrlScheme,
    ) -> S3UrlResult<()> {
        if scheme == UrlScheme::S3 {
            debug!(host = %url.host, "s3 scheme URL");
            self.bucket_name.clone_from(&url.host);
            self.object_key.clone_from(&url.path);
            return Ok(());
        }

        if !url.path.is_empty() {
            debug!(host = %url.host, "S3-compatible path-style URL");
            return self.split_path_style(url);
        }

        // No path: `bucket.endpoint[:port]`, or a bare service endpoint.
        let bucket = url
            .host_without_port()
            .split_once('.')
            .map(|(label, _)| label)
            .filter(|label| is_bucket_label(label));

        match (bucket, url.host.split_once('.')) {
            (Some(bucket), Some((_, endpoint))) => {
                debug!(host = %url.host, "S3-compatible virtual-hosted-style URL");
                bucket.clone_into(&mut self.bucket_name);
                endpoint.clone_into(&mut self.endpoint);
            }
            _ => {
                debug!(host = %url.host, "S3-compatible service endpoint");
                self.endpoint.clone_from(&url.host);
            }
        }
        Ok(())
    }

    /// `bucket[/key]` from the path; the endpoint is the whole host.
    ///
    /// A key without a bucket (`//key`) is rejected.
    fn split_path_style(&mut self, url: &UrlView<'_>) -> S3UrlResult<()> {
        let (bucket, key) = url.path.split_once('/').unwrap_or((url.path.as_str(), ""));
        if bucket.is_empty() && !key.is_empty() {
            debug!(host = %url.host, key, "rejected path-style URL with empty bucket");
            return Err(S3UrlError::InvalidS3Url);
        }

        self.is_path_style = true;
        self.bucket_name = bucket.to_lowercase();
        key.clone_into(&mut self.object_key);
        self.endpoint.clone_from(&url.host);
        Ok(())
    }
}

impl FromStr for S3UrlParts {
    type Err = S3UrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uri: Uri = s.parse().map_err(|e| {
            debug!(url = s, error = %e, "rejected URL that is not a valid URI");
            S3UrlError::InvalidS3Url
        })?;
        Self::parse(&uri)
    }
}

impl TryFrom<&Uri> for S3UrlParts {
    type Error = S3UrlError;

    fn try_from(uri: &Uri) -> Result<Self, Self::Error> {
        Self::parse(uri)
    }
}
