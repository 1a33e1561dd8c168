//! Locates header values in an accumulated response buffer.
//!
//! The needle is always of the form `"\r\n<Name>:"` so that scanning never
//! matches a header name that merely appears inside a body line.

/// Case-insensitively locate `needle` in `haystack` starting at byte offset
/// `from`, returning the absolute offset of the match.
pub(crate) fn find_ci(haystack: &str, needle: &str, from: usize) -> Option<usize> {
    if from > haystack.len() {
        return None;
    }
    let hay = haystack.as_bytes();
    let pat = needle.as_bytes();
    if pat.is_empty() || pat.len() > hay.len() - from {
        return None;
    }
    (from..=hay.len() - pat.len()).find(|&i| hay[i..i + pat.len()].eq_ignore_ascii_case(pat))
}

/// Find the value that follows `needle` in `buf`, scanning from byte offset
/// `from`. Returns the trimmed value and the offset just past it (so the
/// caller can pass that back in as `from` to find a subsequent occurrence,
/// as [`crate::cookies`] does for repeated `Set-Cookie` headers).
///
/// Leading linear whitespace (space/tab) after the colon is skipped; the
/// value runs up to (but not including) the next CR or LF.
pub fn find_header(buf: &str, needle: &str, from: usize) -> Option<(String, usize)> {
    let match_start = find_ci(buf, needle, from)?;
    let mut pos = match_start + needle.len();
    let bytes = buf.as_bytes();

    while pos < bytes.len() && (bytes[pos] == b' ' || bytes[pos] == b'\t') {
        pos += 1;
    }

    let value_start = pos;
    let mut end = pos;
    while end < bytes.len() && bytes[end] != b'\r' && bytes[end] != b'\n' {
        end += 1;
    }

    Some((buf[value_start..end].to_owned(), end))
}

/// Convenience wrapper for headers that only ever occur once, like
/// `Location`: find the first occurrence starting from the top of `buf`.
pub fn find_header_once(buf: &str, name: &str) -> Option<String> {
    let needle = format!("\r\n{}:", name);
    find_header(buf, &needle, 0).map(|(value, _)| value)
}
