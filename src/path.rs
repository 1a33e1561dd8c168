//! Resolves a `Location` header value against the path currently in effect
//! (RFC 2616 §5.1.2).

/// How a `Location` value classifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PathKind {
    /// Begins with `/`.
    Absolute,
    /// Begins with `http`, case-insensitively.
    Uri,
    /// Anything else non-empty.
    Relative,
    /// Empty (or, at the call site, the header was absent entirely).
    Unknown,
}

fn classify(target: &str) -> PathKind {
    if target.is_empty() {
        return PathKind::Unknown;
    }
    if target.starts_with('/') {
        return PathKind::Absolute;
    }
    if target.len() >= 4 && target[..4].eq_ignore_ascii_case("http") {
        return PathKind::Uri;
    }
    PathKind::Relative
}

/// How a URI-typed `Location` (`http://host/path`) should be split.
///
/// The source assigns the *entire* URL to both the host header and the
/// resource path, which is almost certainly a bug. The default
/// here repairs it by splitting scheme+authority from the path; `Raw`
/// reproduces source behavior exactly for hosts that need strict parity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UriSplitMode {
    /// Split `scheme://authority/path` into a host header and a path.
    Repaired,
    /// Assign the whole URL text to both the host header and the path,
    /// reproducing that literal (buggy) behavior for strict compatibility.
    Raw,
}

impl Default for UriSplitMode {
    fn default() -> Self {
        UriSplitMode::Repaired
    }
}

/// Outcome of resolving one `Location` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathResolution {
    /// New `resourcePath`; `hostHeader` unchanged.
    Path(String),
    /// New `hostHeader` and new `resourcePath`.
    PathAndHost { path: String, host: String },
    /// The value was empty; nothing should be mutated.
    Unknown,
}

/// Resolve `target` (a raw `Location` header value, query string and all)
/// against `base_path` (the `resourcePath` currently in effect).
pub fn resolve(base_path: &str, target: &str, uri_mode: UriSplitMode) -> PathResolution {
    let target = strip_query(target);

    match classify(target) {
        PathKind::Unknown => PathResolution::Unknown,
        PathKind::Absolute => PathResolution::Path(target.to_owned()),
        PathKind::Uri => match uri_mode {
            UriSplitMode::Raw => PathResolution::PathAndHost {
                path: target.to_owned(),
                host: target.to_owned(),
            },
            UriSplitMode::Repaired => {
                let (host, path) = split_uri(target);
                PathResolution::PathAndHost { host, path }
            }
        },
        PathKind::Relative => PathResolution::Path(merge(base_path, target)),
    }
}

/// Truncate at the first `?`, discarding any query string.
fn strip_query(target: &str) -> &str {
    match target.find('?') {
        Some(idx) => &target[..idx],
        None => target,
    }
}

/// Split `scheme://authority[/path]` into `(authority, path)`, defaulting
/// the path to `/` when the URL has no path component.
fn split_uri(target: &str) -> (String, String) {
    let after_scheme = target.find("://").map(|i| i + 3).unwrap_or(0);
    let rest = &target[after_scheme..];
    match rest.find('/') {
        Some(idx) => (rest[..idx].to_owned(), rest[idx..].to_owned()),
        None => (rest.to_owned(), "/".to_owned()),
    }
}

/// Merge a relative reference onto a base path's directory, collapsing
/// `.` and `..` segments the way a browser resolving a relative `Location`
/// would (RFC 2616 §5.1.2 / RFC 3986 §5.3).
fn merge(base_path: &str, relative: &str) -> String {
    let base_dir = match base_path.rfind('/') {
        Some(idx) => &base_path[..=idx],
        None => "/",
    };

    let mut combined = String::with_capacity(base_dir.len() + relative.len());
    combined.push_str(base_dir);
    combined.push_str(relative);

    let mut segments: Vec<&str> = Vec::new();
    for segment in combined.split('/') {
        match segment {
            "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }

    let mut resolved = segments.join("/");
    if !resolved.starts_with('/') {
        resolved.insert(0, '/');
    }
    resolved
}
