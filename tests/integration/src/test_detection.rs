//! Detection and parse-acceptance table.

#[cfg(test)]
mod tests {
    use s3url_core::{S3UrlParts, is_s3_url, is_s3_url_str};

    use crate::uri;

    /// (name, url, detected as S3, parses)
    const CASES: &[(&str, &str, bool, bool)] = &[
        ("AWS vhost", "http://bucket.s3.amazonaws.com", true, true),
        (
            "AWS region vhost",
            "http://bucket.s3-aws-region.amazonaws.com/keydir/keysubdir/keyname",
            true,
            true,
        ),
        (
            "dualstack",
            "http://bucket.s3.dualstack.aws-region.amazonaws.com/keyname/",
            true,
            true,
        ),
        ("AWS service", "https://s3.amazonaws.com", true, true),
        // HTTP with various ports
        ("http default port 80", "http://bucket.example.com:80/object", true, true),
        ("http custom port", "http://bucket.example.com:8080/object", true, true),
        ("http high port", "http://bucket.example.com:9000/object", true, true),
        ("http path-style port", "http://s3.example.com:9000/bucket/object", true, true),
        ("http vhost-style port", "http://bucket.s3.example.com:8080/object", true, true),
        // HTTPS with various ports
        ("https default port 443", "https://bucket.example.com:443/object", true, true),
        ("https custom port", "https://bucket.example.com:8443/object", true, true),
        ("https high port", "https://bucket.example.com:9443/object", true, true),
        ("https path-style port", "https://s3.example.com:9443/bucket/object", true, true),
        ("https vhost-style port", "https://bucket.s3.example.com:8443/object", true, true),
        // IP addresses and localhost
        ("http IPv4 port", "http://192.168.1.100:9000/bucket/object", true, true),
        ("https IPv4 port", "https://192.168.1.100:9443/bucket/object", true, true),
        ("http localhost port", "http://localhost:9000/bucket/object", true, true),
        ("https localhost port", "https://localhost:9443/bucket/object", true, true),
        ("http IPv6 port", "http://[::1]:9000/bucket/object", true, true),
        ("https IPv6 port", "https://[::1]:9443/bucket/object", true, true),
        // MinIO
        ("MinIO host port vhost", "http://bucket.minio.local:9000/object", true, true),
        ("MinIO path-style", "http://minio.local:9000/bucket/object", true, true),
        ("MinIO https vhost", "https://bucket.minio.local:9443/object", true, true),
        ("MinIO https path", "https://minio.local:9443/bucket/object", true, true),
        // Custom FQDNs
        ("custom FQDN http vhost", "http://bucket.storage.company.com/object", true, true),
        ("custom FQDN https vhost", "https://bucket.storage.company.com/object", true, true),
        ("custom FQDN http path", "http://storage.company.com/bucket/object", true, true),
        ("custom FQDN https path", "https://storage.company.com/bucket/object", true, true),
        ("custom FQDN port vhost", "http://bucket.s3.internal.corp:8080/object", true, true),
        ("custom FQDN port path", "https://s3.internal.corp:8443/bucket/object", true, true),
        ("subdomain", "http://bucket.s3.region.example.org/object", true, true),
        (
            "deep subdomain",
            "https://bucket.storage.region.datacenter.company.net/object",
            true,
            true,
        ),
        ("custom TLD", "http://bucket.s3.local/object", true, true),
        // s3 scheme
        ("s3 scheme", "s3://bucket/object", true, true),
        // Negative cases
        ("ftp scheme", "ftp://bucket.s3.amazonaws.com", false, false),
        ("azure blob like", "http://s3-test.blob.core.windows.net", false, false),
        ("azure file", "https://account.file.core.windows.net", false, false),
        ("smtp scheme port", "smtp://invalid.com:587", false, false),
        ("ldap scheme port", "ldap://server.com:389/bucket", false, false),
        ("bare localhost", "http://localhost:9000", false, false),
        ("azure blob root dot", "http://s3-test.blob.core.windows.net./", false, false),
        ("non UTF-8 key", "http://minio.local:9000/bucket/a%FFb", false, false),
        // Detected by host shape, but a key with no bucket does not parse
        ("generic key without bucket", "http://minio.local:9000//key", true, false),
        ("AWS key without bucket", "https://s3.amazonaws.com//key", true, false),
    ];

    #[test]
    fn test_should_classify_detection_table() {
        for &(name, url, want_s3, want_parse) in CASES {
            let u = uri(url);
            assert_eq!(is_s3_url(&u), want_s3, "{name}: is_s3_url");
            assert_eq!(
                S3UrlParts::parse(&u).is_ok(),
                want_parse,
                "{name}: S3UrlParts::parse"
            );
        }
    }

    #[test]
    fn test_should_agree_between_uri_and_str_entry_points() {
        for &(name, url, want_s3, want_parse) in CASES {
            assert_eq!(is_s3_url_str(url), want_s3, "{name}: is_s3_url_str");
            assert_eq!(url.parse::<S3UrlParts>().is_ok(), want_parse, "{name}: from_str");
        }
    }

    #[test]
    fn test_should_reject_empty_host() {
        assert!(!is_s3_url_str("http:///bucket"));
        assert!("http:///bucket".parse::<S3UrlParts>().is_err());
    }

    #[test]
    fn test_should_always_accept_s3_scheme() {
        for url in ["s3://bucket", "s3://Bucket/key", "s3://192.168.1.1/key", "S3://b/k/"] {
            let u = uri(url);
            assert!(is_s3_url(&u), "{url}");
            let parts = S3UrlParts::parse(&u).unwrap_or_else(|e| panic!("{url}: {e}"));
            assert_eq!(parts.bucket_name(), u.host().unwrap_or_default().to_lowercase());
            assert_eq!(parts.endpoint(), "");
        }
    }
}
