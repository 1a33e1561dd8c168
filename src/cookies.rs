//! Scans a response for `Set-Cookie` headers and folds them into the
//! persistent jar.
//!
//! No attribute parsing (expiry/domain/path are ignored, the raw value is
//! echoed) and no deduplication.

use crate::headers::find_header;

const NEEDLE: &str = "\r\nSet-Cookie:";

/// Append a `Cookie: <value>\r\n` line to `jar` for every `Set-Cookie`
/// occurrence found in `response`.
pub fn accumulate_set_cookies(response: &str, jar: &mut String) {
    let mut from = 0;
    while let Some((value, cursor)) = find_header(response, NEEDLE, from) {
        jar.push_str("Cookie: ");
        jar.push_str(&value);
        jar.push_str("\r\n");
        from = cursor;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulates_multiple_cookies_in_order() {
        let response =
            "HTTP/1.1 302 Found\r\nLocation: /x\r\nSet-Cookie: a=1\r\nSet-Cookie: b=2\r\n\r\n";
        let mut jar = String::new();
        accumulate_set_cookies(response, &mut jar);
        assert_eq!(jar, "Cookie: a=1\r\nCookie: b=2\r\n");
    }

    #[test]
    fn appends_to_existing_jar_without_dedup() {
        let response = "HTTP/1.1 302 Found\r\nSet-Cookie: a=1\r\n\r\n";
        let mut jar = "Cookie: a=1\r\n".to_owned();
        accumulate_set_cookies(response, &mut jar);
        assert_eq!(jar, "Cookie: a=1\r\nCookie: a=1\r\n");
    }

    #[test]
    fn no_set_cookie_leaves_jar_untouched() {
        let response = "HTTP/1.1 200 OK\r\n\r\nWelcome!";
        let mut jar = String::new();
        accumulate_set_cookies(response, &mut jar);
        assert_eq!(jar, "");
    }
}
