//! Canonical URL reconstruction.

#[cfg(test)]
mod tests {
    use s3url_core::S3UrlParts;

    use crate::uri;

    const URLS: &[&str] = &[
        "http://bucket.s3.amazonaws.com",
        "http://bucket.s3-aws-region.amazonaws.com/keydir/keysubdir/keyname",
        "http://bucket.s3.dualstack.aws-region.amazonaws.com/keyname/",
        "https://s3.amazonaws.com",
        "https://s3.eu-west-1.amazonaws.com/Bucket/dir/file.txt?versionId=v1&x=y",
        "http://minio.local:9000/bucket/object",
        "http://bucket.minio.local:9000",
        "http://[::1]:9000/bucket/a%20b%23c",
        "https://192.168.1.100:9443/bucket/object?partNumber=2",
        "s3://bucket/object",
        "s3://bucket/dir/",
    ];

    #[test]
    fn test_should_preserve_bucket_and_key_through_canonical_url() {
        for &url in URLS {
            let first = S3UrlParts::parse(&uri(url)).unwrap_or_else(|e| panic!("{url}: {e}"));
            let rebuilt = first.to_uri().unwrap_or_else(|e| panic!("{url}: {e}"));
            let second = S3UrlParts::parse(&rebuilt).unwrap_or_else(|e| panic!("{rebuilt}: {e}"));

            assert_eq!(first.bucket_name(), second.bucket_name(), "{url}");
            assert_eq!(first.object_key(), second.object_key(), "{url}");
            assert_eq!(first.version(), second.version(), "{url}");
            assert_eq!(first.unparsed_params(), second.unparsed_params(), "{url}");
        }
    }

    #[test]
    fn test_should_rebuild_path_style_url() {
        let p = S3UrlParts::parse(&uri("https://s3.amazonaws.com/Bucket/key?x=y&versionId=v1"))
            .expect("should parse");
        assert_eq!(p.to_string(), "https://s3.amazonaws.com/bucket/key?x=y&versionId=v1");
    }

    #[test]
    fn test_should_keep_host_for_virtual_host_url() {
        let p = S3UrlParts::parse(&uri("http://bucket.s3.amazonaws.com/key")).expect("should parse");
        assert_eq!(p.to_string(), "http://bucket.s3.amazonaws.com/key");
    }

    #[test]
    fn test_should_rebuild_s3_scheme_url() {
        let p = S3UrlParts::parse(&uri("s3://bucket/dir/file")).expect("should parse");
        assert_eq!(p.to_string(), "s3://bucket/dir/file");
    }
}
