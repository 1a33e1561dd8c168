//! Percent-encoding for form parameter values.
//!
//! ASCII only, by design: bytes are encoded
//! one at a time with no attempt at UTF-8 awareness, matching the source
//! module's `urlencodeup`.

use percent_encoding::{percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Percent-encode `value`, preserving `[A-Za-z0-9]` and uppercasing the
/// two hex digits of every escaped byte (`%XX`).
///
/// Non-ASCII bytes are encoded byte-wise, same as any other byte outside
/// `[A-Za-z0-9]` - there is no multi-byte awareness here.
pub fn url_encode(value: &[u8]) -> String {
    percent_encode(value, PRESERVE_ALNUM).to_string()
}

/// Everything except ASCII letters and digits gets escaped.
const PRESERVE_ALNUM: &AsciiSet = &NON_ALPHANUMERIC;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_alnum() {
        assert_eq!(url_encode(b"abcXYZ019"), "abcXYZ019");
    }

    #[test]
    fn encodes_special_bytes_uppercase() {
        assert_eq!(url_encode(b"a b"), "a%20b");
        assert_eq!(url_encode(b"a&b=c"), "a%26b%3Dc");
    }

    #[test]
    fn output_is_restricted_charset() {
        let encoded = url_encode(b"p@ssw0rd!#$");
        assert!(encoded
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'%'));
    }

    #[test]
    fn empty_input_is_empty_output() {
        assert_eq!(url_encode(b""), "");
    }
}
