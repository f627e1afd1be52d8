//! Query-string handling for the object version parameter.

use form_urlencoded::Serializer;

/// Query parameter carrying an object version.
pub(crate) const VERSION_QUERY_KEY: &str = "versionId";

/// Split the version parameter out of a raw query string.
///
/// The key is matched ignoring ASCII case. The first matching pair supplies
/// the version and every matching pair is dropped; the remaining pairs are
/// re-encoded in their original order.
pub(crate) fn split_version(query: &str) -> (String, String) {
    let mut version = None;
    let mut rest = Serializer::new(String::new());

    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        if key.eq_ignore_ascii_case(VERSION_QUERY_KEY) {
            if version.is_none() {
                version = Some(value.into_owned());
            }
        } else {
            rest.append_pair(&key, &value);
        }
    }

    (version.unwrap_or_default(), rest.finish())
}

/// Append `versionId=<version>` to an encoded query string.
pub(crate) fn join_version(unparsed: &str, version: &str) -> String {
    if version.is_empty() {
        return unparsed.to_owned();
    }

    Serializer::new(unparsed.to_owned())
        .append_pair(VERSION_QUERY_KEY, version)
        .finish()
}
