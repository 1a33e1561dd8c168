//! The Host Adapter boundary: the socket/TLS/candidate-iteration capabilities
//! a brute-forcing host framework supplies to this crate.
//!
//! Only the contract is defined here, not a real implementation - actual
//! TCP/TLS I/O and credential storage are deliberately left to the host.
//! Modeling these as traits rather than concrete types is what makes
//! [`crate::attempt::run_invocation`] testable without a socket at all.

use std::fmt::Debug;

use crate::error::Error;

/// Connection parameters for the target, as resolved by the host framework
/// before this crate is invoked.
#[derive(Debug, Clone)]
pub struct HostInfo {
    /// The value placed in the `Host:` header and used for TLS SNI.
    pub host: String,
    /// The address actually dialed; may differ from `host` (e.g. a
    /// resolved IP, or a different host entirely when testing through a
    /// proxy).
    pub ip: String,
    /// An explicit port, when the host framework was given one (`-n`-style
    /// override). `None` means "use the form's scheme default".
    pub port_override: Option<u16>,
    /// Whether this attempt is over TLS, selecting the default port and
    /// the adapter method used to connect.
    pub tls: bool,
}

impl HostInfo {
    const HTTP_PORT: u16 = 80;
    const HTTPS_PORT: u16 = 443;

    /// The port actually used: `port_override` if given, otherwise the
    /// scheme default.
    pub fn effective_port(&self) -> u16 {
        self.port_override.unwrap_or(if self.tls {
            Self::HTTPS_PORT
        } else {
            Self::HTTP_PORT
        })
    }
}

/// The socket capability this crate needs from its host: open a connection,
/// write a request, read response lines, and tear the connection down again.
///
/// A fresh connection is required after every redirect hop and after every
/// credential verdict - this module never assumes the underlying transport
/// keeps a connection alive across attempts.
pub trait Transport: Debug {
    /// Open a plaintext connection to `host:port`.
    fn connect_plain(&mut self, host: &str, port: u16) -> Result<(), Error>;

    /// Open a TLS connection to `host:port`, using `host` for SNI and
    /// certificate verification.
    fn connect_tls(&mut self, host: &str, port: u16) -> Result<(), Error>;

    /// Write the full request buffer to the wire.
    fn send(&mut self, request: &[u8]) -> Result<(), Error>;

    /// Read one line (terminated by `\n`, `\r\n` stripped) from the
    /// response. Returns `Ok(None)` at end of stream.
    fn receive_line(&mut self) -> Result<Option<String>, Error>;

    /// Close the current connection. Called after every redirect hop and
    /// after every verdict, whether or not a new one follows.
    fn disconnect(&mut self);
}

/// What the credential source has left to offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialStatus {
    /// There are more password candidates for the current user.
    Continue,
    /// The current user's candidates are exhausted; a new user has begun.
    NewUser,
    /// No credential pairs remain at all.
    Done,
}

/// One credential pair to try, paired with how it relates to the previous
/// attempt.
#[derive(Debug, Clone)]
pub struct NextCredential {
    pub status: CredentialStatus,
    pub login: String,
    pub password: String,
}

/// The candidate-iteration capability this crate needs from its host:
/// produce the next credential pair and record what happened to the last
/// one. Candidate storage, ordering, and exhaustion are entirely the
/// host's concern - this crate only consumes the interface.
pub trait CredentialSource {
    /// Produce the next credential pair to try, or `None` once exhausted.
    fn next_credential(&mut self) -> Option<NextCredential>;

    /// Report the verdict for the credential pair most recently returned
    /// from [`CredentialSource::next_credential`], together with the
    /// password that was tested.
    fn record_verdict(&mut self, password: &str, verdict: crate::verdict::Verdict);
}
