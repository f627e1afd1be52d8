//! The structured S3 address and its canonical URL form.

use std::fmt;

use http::Uri;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use serde::Serialize;

use crate::error::S3UrlResult;
use crate::query::join_version;
use crate::types::AddressKind;

/// Characters escaped when writing bucket and key into a URL path. `/` is
/// kept so multi-segment keys stay readable.
const PATH_ESCAPE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// An S3 service, bucket or object address.
///
/// Supports virtual-hosted-style and path-style URLs as described in
/// <https://docs.aws.amazon.com/AmazonS3/latest/userguide/VirtualHosting.html>:
///
/// - virtual-hosted-style: `http://bucket.s3.amazonaws.com`,
///   `http://bucket.s3-aws-region.amazonaws.com`
/// - path-style: `http://s3.amazonaws.com/bucket`,
///   `http://s3-aws-region.amazonaws.com/bucket`
/// - dual-stack: `http://bucket.s3.dualstack.aws-region.amazonaws.com`,
///   `http://s3.dualstack.aws-region.amazonaws.com/bucket`
///
/// plus S3-compatible endpoints (`http://minio.local:9000/bucket/key`,
/// `http://bucket.storage.example.com/key`) and `s3://bucket/key`.
///
/// Values are produced by [`S3UrlParts::parse`] and never change afterwards.
/// Absent components are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct S3UrlParts {
    pub(crate) scheme: String,
    pub(crate) host: String,
    pub(crate) endpoint: String,
    pub(crate) bucket_name: String,
    pub(crate) object_key: String,
    pub(crate) version: String,
    pub(crate) region: String,
    pub(crate) unparsed_params: String,
    pub(crate) is_path_style: bool,
    pub(crate) is_dual_stack: bool,
}

impl S3UrlParts {
    /// Scheme as written in the source URL (`http`, `https` or `s3`).
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Lower-cased host including any explicit port,
    /// e.g. `bucket.s3-eu-west-1.amazonaws.com` or `minio.local:9000`.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// The service endpoint: the host without the bucket label for
    /// virtual-hosted-style addresses, the whole host for path-style ones,
    /// empty for `s3://` URLs.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Lower-cased bucket name; empty for service-level addresses.
    #[must_use]
    pub fn bucket_name(&self) -> &str {
        &self.bucket_name
    }

    /// Object key, e.g. `hello.txt` or `foo/bar`.
    #[must_use]
    pub fn object_key(&self) -> &str {
        &self.object_key
    }

    /// Object version from the `versionId` query parameter.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Region named by an AWS host, e.g. `eu-west-1`.
    #[must_use]
    pub fn region(&self) -> &str {
        &self.region
    }

    /// The encoded query string minus the version parameter.
    #[must_use]
    pub fn unparsed_params(&self) -> &str {
        &self.unparsed_params
    }

    /// Whether the bucket is the first path segment rather than a host label.
    #[must_use]
    pub fn is_path_style(&self) -> bool {
        self.is_path_style
    }

    /// Whether the host is an AWS dual-stack endpoint.
    #[must_use]
    pub fn is_dual_stack(&self) -> bool {
        self.is_dual_stack
    }

    /// How much of the hierarchy the address names.
    #[must_use]
    pub fn kind(&self) -> AddressKind {
        if self.bucket_name.is_empty() {
            AddressKind::Service
        } else if self.object_key.is_empty() {
            AddressKind::Bucket
        } else {
            AddressKind::Object
        }
    }

    /// Whether the address names the service itself.
    #[must_use]
    pub fn is_service_syntactically(&self) -> bool {
        !self.host.is_empty() && self.bucket_name.is_empty()
    }

    /// Whether the address names a bucket and no object.
    #[must_use]
    pub fn is_bucket_syntactically(&self) -> bool {
        !self.bucket_name.is_empty() && self.object_key.is_empty()
    }

    /// Whether the address names an object.
    #[must_use]
    pub fn is_object_syntactically(&self) -> bool {
        !self.object_key.is_empty()
    }

    /// Whether the address names a directory, i.e. an object key ending in `/`.
    ///
    /// Directories are a naming convention in S3, not a separate resource.
    #[must_use]
    pub fn is_directory_syntactically(&self) -> bool {
        self.is_object_syntactically() && self.object_key.ends_with('/')
    }

    /// The canonical URL as an [`Uri`].
    ///
    /// The path is rebuilt as `/bucket` (path-style only) followed by
    /// `/key`, and the version is re-appended after the unparsed
    /// parameters. The host is kept as parsed.
    ///
    /// # Errors
    ///
    /// Returns [`S3UrlError::InvalidUri`](crate::S3UrlError::InvalidUri) if the
    /// rebuilt string is not a valid URI.
    ///
    /// # Examples
    ///
    /// ```
    /// use s3url_core::S3UrlParts;
    ///
    /// let parts: S3UrlParts = "https://s3.amazonaws.com/bucket/a%20b?versionId=v1"
    ///     .parse()
    ///     .unwrap();
    /// let uri = parts.to_uri().unwrap();
    /// assert_eq!(uri.path(), "/bucket/a%20b");
    /// assert_eq!(uri.query(), Some("versionId=v1"));
    /// ```
    pub fn to_uri(&self) -> S3UrlResult<Uri> {
        Ok(self.to_string().parse::<Uri>()?)
    }

    fn path(&self) -> String {
        let mut path = String::new();

        if !self.bucket_name.is_empty() {
            if self.is_path_style {
                path.push('/');
                path.extend(utf8_percent_encode(&self.bucket_name, PATH_ESCAPE));
            }
            if !self.object_key.is_empty() {
                path.push('/');
                path.extend(utf8_percent_encode(&self.object_key, PATH_ESCAPE));
            }
        }

        path
    }
}

impl fmt::Display for S3UrlParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}{}", self.scheme, self.host, self.path())?;

        let query = join_version(&self.unparsed_params, &self.version);
        if !query.is_empty() {
            write!(f, "?{query}")?;
        }

        Ok(())
    }
}
