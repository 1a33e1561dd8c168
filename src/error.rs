//! Error taxonomy for the attempt state machine.

use std::fmt;
use std::io::Error as IoError;

/// Everything that can end an attempt or invocation before it produces the
/// verdict the caller asked for.
///
/// Every variant here corresponds to exactly one row of the error taxonomy:
/// the connect/send/receive/parse failures that the Host Adapter can surface,
/// plus the protocol-level conditions (missing `Location`, unsupported status,
/// too many redirects) the state machine itself detects.
#[derive(Debug)]
pub enum Error {
    /// A module option value was missing or malformed. Recovered locally by
    /// falling back to the default for that field; never reaches the caller
    /// as a hard failure, but is still surfaced so hosts can log it.
    BadOption(String),
    /// [`crate::transport::Transport::connect`] failed.
    ConnectFailed(String),
    /// [`crate::transport::Transport::send`] failed.
    SendFailed(String),
    /// [`crate::transport::Transport::receive_line`] returned nothing, or the
    /// connection was closed before a full line arrived.
    ReceiveFailed,
    /// The first line of a response was not a parseable HTTP status line.
    BadStatusLine,
    /// A 3xx response carried no `Location` header.
    MissingLocation,
    /// A `Location` value was empty after stripping its query string.
    UnresolvableLocation,
    /// A 4xx response was received; the module treats this as a hard
    /// non-credential error rather than a `FAIL` verdict.
    HttpClientError(u16),
    /// A status code outside the closed set this module understands.
    UnknownStatus(u16),
    /// The redirect chain for a single credential pair exceeded
    /// [`crate::config::MAX_REDIRECTS`].
    TooManyRedirects,
    /// Wraps an I/O error bubbled up from the Host Adapter.
    Io(IoError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BadOption(msg) => write!(f, "bad module option: {}", msg),
            Error::ConnectFailed(msg) => write!(f, "connect failed: {}", msg),
            Error::SendFailed(msg) => write!(f, "send failed: {}", msg),
            Error::ReceiveFailed => write!(f, "no data received"),
            Error::BadStatusLine => write!(f, "could not parse HTTP status line"),
            Error::MissingLocation => write!(f, "redirect response had no Location header"),
            Error::UnresolvableLocation => write!(f, "Location header value was empty"),
            Error::HttpClientError(code) => write!(f, "received HTTP status code {}", code),
            Error::UnknownStatus(code) => write!(f, "unsupported HTTP status code {}", code),
            Error::TooManyRedirects => write!(f, "too many redirects"),
            Error::Io(e) => write!(f, "i/o error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<IoError> for Error {
    fn from(err: IoError) -> Error {
        Error::Io(err)
    }
}
