//! Fixtures shared by the end-to-end scenario tests: a scripted
//! [`Transport`] and a scripted [`CredentialSource`], so the state machine
//! in [`crate::attempt`] can be driven without a real socket.

use std::collections::VecDeque;

use crate::error::Error;
use crate::transport::{CredentialSource, CredentialStatus, NextCredential, Transport};
use crate::verdict::Verdict;


/// A `Transport` whose responses are scripted in advance, one queue of
/// lines per connection. `disconnect` retires the queue for the
/// connection that just closed; the next `connect_plain`/`connect_tls`
/// exposes whatever queue was pushed after it.
#[derive(Debug, Default)]
pub struct MockTransport {
    responses: VecDeque<VecDeque<String>>,
    pub sent_requests: Vec<Vec<u8>>,
    pub connect_calls: u32,
    pub fail_connect: bool,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue one full raw HTTP response (status line through body) to be
    /// served by the next connection that hasn't already been given one.
    pub fn push_response(&mut self, raw: &str) {
        let lines: VecDeque<String> = raw.split("\r\n").map(str::to_owned).collect();
        self.responses.push_back(lines);
    }

    pub fn last_request(&self) -> String {
        String::from_utf8(self.sent_requests.last().cloned().unwrap_or_default()).unwrap()
    }
}

impl Transport for MockTransport {
    fn connect_plain(&mut self, _host: &str, _port: u16) -> Result<(), Error> {
        self.connect_calls += 1;
        if self.fail_connect {
            return Err(Error::ConnectFailed("mock connection refused".to_owned()));
        }
        Ok(())
    }

    fn connect_tls(&mut self, host: &str, port: u16) -> Result<(), Error> {
        self.connect_plain(host, port)
    }

    fn send(&mut self, request: &[u8]) -> Result<(), Error> {
        self.sent_requests.push(request.to_vec());
        Ok(())
    }

    fn receive_line(&mut self) -> Result<Option<String>, Error> {
        match self.responses.front_mut() {
            Some(lines) => Ok(lines.pop_front()),
            None => Ok(None),
        }
    }

    fn disconnect(&mut self) {
        self.responses.pop_front();
    }
}

/// A `CredentialSource` that yields a fixed list of pairs and records the
/// `(password, verdict)` reported for each one, in order.
#[derive(Debug, Default)]
pub struct VecCredentialSource {
    pairs: VecDeque<(String, String)>,
    pub verdicts: Vec<(String, Verdict)>,
}

impl VecCredentialSource {
    pub fn new(pairs: Vec<(&str, &str)>) -> Self {
        Self {
            pairs: pairs
                .into_iter()
                .map(|(u, p)| (u.to_owned(), p.to_owned()))
                .collect(),
            verdicts: Vec::new(),
        }
    }
}

impl CredentialSource for VecCredentialSource {
    fn next_credential(&mut self) -> Option<NextCredential> {
        let (login, password) = self.pairs.pop_front()?;
        let status = if self.pairs.is_empty() {
            CredentialStatus::Done
        } else {
            CredentialStatus::Continue
        };
        Some(NextCredential {
            status,
            login,
            password,
        })
    }

    fn record_verdict(&mut self, password: &str, verdict: Verdict) {
        self.verdicts.push((password.to_owned(), verdict));
    }
}
