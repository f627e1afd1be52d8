//! Host normalization.
//!
//! Every rule that compares host labels works on the host with its explicit
//! port removed. [`strip_port`] performs that normalization; [`uri_host`]
//! extracts the `host[:port]` string from a URI the way it was written.

use http::Uri;

/// Remove an explicit `:port` suffix from a host.
///
/// Bracketed IPv6 literals are understood: `[::1]:9000` becomes `::1`,
/// while `[::1]` is returned untouched. For everything else only a suffix
/// made entirely of ASCII digits is treated as a port, so a stray colon
/// followed by anything else is left in place.
///
/// # Examples
///
/// ```
/// use s3url_core::strip_port;
///
/// assert_eq!(strip_port("minio.local:9000"), "minio.local");
/// assert_eq!(strip_port("[::1]:9000"), "::1");
/// assert_eq!(strip_port("[::1]"), "[::1]");
/// assert_eq!(strip_port("host:abc"), "host:abc");
/// ```
#[must_use]
pub fn strip_port(host: &str) -> &str {
    if let Some(rest) = host.strip_prefix('[') {
        if let Some((inner, tail)) = rest.split_once(']') {
            if tail.is_empty() {
                return host;
            }
            if tail.strip_prefix(':').is_some_and(is_port) {
                return inner;
            }
        }
    }

    // Lenient fallback for anything the bracketed form did not settle.
    match host.rsplit_once(':') {
        Some((name, port)) if is_port(port) => name,
        _ => host,
    }
}

/// Whether `s` is an unsigned decimal integer.
fn is_port(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// The `host[:port]` part of a URI's authority, without user-info.
///
/// The port is kept verbatim when present, including default ports such as
/// `:80`. Returns an empty string when the URI has no authority.
#[must_use]
pub fn uri_host(uri: &Uri) -> String {
    let Some(authority) = uri.authority() else {
        return String::new();
    };

    match authority.port() {
        Some(port) => format!("{}:{}", authority.host(), port.as_str()),
        None => authority.host().to_owned(),
    }
}
