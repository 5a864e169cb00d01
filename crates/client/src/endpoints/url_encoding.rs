//! Percent-encoding for user-supplied path segments.
//!
//! Device, profile and interval names are interpolated into route templates
//! such as `/device/name/{name}`. Without encoding, a name containing `/`
//! or `?` would change which route is hit.
//!
//! ```
//! use edgex_client::endpoints::url_encoding::encode_path_segment;
//!
//! assert_eq!(encode_path_segment("Random-Integer-Device"), "Random-Integer-Device");
//! assert_eq!(encode_path_segment("rack 1/sensor"), "rack%201%2Fsensor");
//! ```

use percent_encoding::{AsciiSet, CONTROLS, percent_encode};

/// Characters that must be percent-encoded in URL path segments (RFC 3986 section 3.3).
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'#')
    .add(b'[')
    .add(b']');

/// Percent-encode a string for use as a single URL path segment.
pub fn encode_path_segment(segment: &str) -> String {
    percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_names_unchanged() {
        assert_eq!(encode_path_segment("Random-Float-Device"), "Random-Float-Device");
        assert_eq!(encode_path_segment("device_001.v2"), "device_001.v2");
        assert_eq!(encode_path_segment("temp~raw"), "temp~raw");
    }

    #[test]
    fn test_slash_and_query_encoded() {
        assert_eq!(encode_path_segment("a/b"), "a%2Fb");
        assert_eq!(encode_path_segment("name?x=1"), "name%3Fx=1");
        assert_eq!(encode_path_segment("tag#1"), "tag%231");
    }

    #[test]
    fn test_percent_encoded_once() {
        assert_eq!(encode_path_segment("100%"), "100%25");
        assert_eq!(encode_path_segment("a%20b"), "a%2520b");
    }

    #[test]
    fn test_unicode_encoded_as_utf8() {
        assert_eq!(encode_path_segment("capteur-\u{00e9}"), "capteur-%C3%A9");
    }
}
