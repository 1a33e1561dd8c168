//! Per-attempt protocol core for a web-form credential-guessing module.
//!
//! This crate implements the request/response state machine a host
//! brute-forcing framework drives once per candidate credential pair: build
//! the wire request, follow any redirects the target form issues, and
//! classify the final response as [`Verdict::Success`], [`Verdict::Fail`],
//! or [`Verdict::Unknown`]. Socket I/O and credential iteration are supplied
//! by the host through the [`Transport`] and [`CredentialSource`] traits -
//! this crate never opens a connection or stores a candidate list itself.
//!
//! ```no_run
//! use webform_login_core::{run_invocation, HostInfo};
//! # use webform_login_core::{Transport, CredentialSource, NextCredential, Verdict, Error};
//! # #[derive(Debug)] struct RealTransport;
//! # impl Transport for RealTransport {
//! #     fn connect_plain(&mut self, _: &str, _: u16) -> Result<(), Error> { unimplemented!() }
//! #     fn connect_tls(&mut self, _: &str, _: u16) -> Result<(), Error> { unimplemented!() }
//! #     fn send(&mut self, _: &[u8]) -> Result<(), Error> { unimplemented!() }
//! #     fn receive_line(&mut self) -> Result<Option<String>, Error> { unimplemented!() }
//! #     fn disconnect(&mut self) {}
//! # }
//! # struct WordlistSource;
//! # impl CredentialSource for WordlistSource {
//! #     fn next_credential(&mut self) -> Option<NextCredential> { None }
//! #     fn record_verdict(&mut self, _: &str, _: Verdict) {}
//! # }
//! let host = HostInfo { host: "target.example".into(), ip: "192.0.2.1".into(), port_override: None, tls: false };
//! let mut transport = RealTransport;
//! let mut credentials = WordlistSource;
//! let options = vec!["FORM:/login.php".to_owned()];
//!
//! run_invocation(&host, &mut transport, &mut credentials, &options)?;
//! # Ok::<(), Error>(())
//! ```

mod attempt;
mod config;
mod cookies;
mod encode;
mod error;
mod headers;
mod options;
mod path;
mod request;
mod status;
mod transport;
mod verdict;

#[cfg(test)]
mod test;

pub use attempt::{run_invocation, try_attempt, StepOutcome};
pub use config::{FormType, ModuleConfig, ModuleConfigBuilder, MAX_REDIRECTS, OPTION_USAGE};
pub use error::Error;
pub use options::parse_options;
pub use path::UriSplitMode;
pub use transport::{CredentialSource, CredentialStatus, HostInfo, NextCredential, Transport};
pub use verdict::Verdict;
