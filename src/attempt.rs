//! The per-credential attempt state machine.
//!
//! `try_attempt` is the inner sub-protocol: one request/response round trip,
//! ending either in a followed redirect (same credential, fresh connection)
//! or a recorded verdict. `run_invocation` is the outer
//! `INITIALIZE -> NEW -> RUNNING -> EXITING -> COMPLETE` loop a host
//! framework drives once per target.

use log::{debug, info, warn};

use crate::config::{FormType, ModuleConfig, PreRedirectSnapshot, MAX_REDIRECTS};
use crate::cookies;
use crate::error::Error;
use crate::headers;
use crate::options;
use crate::path::{self, PathResolution};
use crate::request;
use crate::status::{self, StatusOutcome};
use crate::transport::{CredentialSource, CredentialStatus, HostInfo, Transport};
use crate::verdict::Verdict;

/// What one round trip produced.
#[derive(Debug)]
pub enum StepOutcome {
    /// The response was a redirect this module is willing to follow; the
    /// caller should reconnect and call `try_attempt` again with the same
    /// credential pair.
    FollowRedirect,
    /// The round trip produced a final verdict for the credential pair.
    VerdictRecorded(Verdict),
}

/// Run one request/response round trip for `login`/`password` against the
/// connection `transport` currently holds open, mutating `config` as the
/// response dictates (redirect bookkeeping, accumulated cookies).
pub fn try_attempt<T: Transport>(
    config: &mut ModuleConfig,
    transport: &mut T,
    login: &str,
    password: &str,
) -> Result<StepOutcome, Error> {
    let wire_request = request::build_request(config, login, password);
    debug!("sending request for login {:?} path={}", login, config.resource_path);
    transport.send(&wire_request)?;

    let status_line_opt = transport.receive_line()?;
    let outcome = status::parse_status_line_opt(status_line_opt.as_deref());
    let status_line = status_line_opt.ok_or(Error::ReceiveFailed)?;

    let mut response = String::new();
    response.push_str(&status_line);
    response.push_str("\r\n");
    read_header_block(transport, &mut response)?;

    match outcome {
        StatusOutcome::ParseError => Err(Error::BadStatusLine),
        StatusOutcome::Ok => {
            let body = read_body(transport)?;

            if let Some(snapshot) = config.pre_redirect.take() {
                config.form_type = snapshot.form_type;
                config.resource_path = snapshot.resource_path;
                config.cookie_jar.clear();
            }

            let verdict = if headers::find_ci(&body, &config.deny_signal, 0).is_some() {
                Verdict::Fail
            } else {
                Verdict::Success
            };
            debug!("verdict for login {:?}: {:?}", login, verdict);
            Ok(StepOutcome::VerdictRecorded(verdict))
        }
        StatusOutcome::Redirect(code) => {
            cookies::accumulate_set_cookies(&response, &mut config.cookie_jar);

            let location =
                headers::find_header_once(&response, "Location").ok_or(Error::MissingLocation)?;

            config.redirect_count += 1;
            if config.redirect_count > MAX_REDIRECTS {
                return Err(Error::TooManyRedirects);
            }

            if (code == 301 || code == 302)
                && config.form_type == FormType::Post
                && config.pre_redirect.is_none()
            {
                config.pre_redirect = Some(PreRedirectSnapshot {
                    form_type: FormType::Post,
                    resource_path: config.resource_path.clone(),
                });
                config.form_type = FormType::Get;
            }

            match path::resolve(&config.resource_path, &location, config.uri_split_mode) {
                PathResolution::Unknown => Err(Error::UnresolvableLocation),
                PathResolution::Path(path) => {
                    config.resource_path = path;
                    info!("following {} redirect to {}", code, config.resource_path);
                    Ok(StepOutcome::FollowRedirect)
                }
                PathResolution::PathAndHost { path, host } => {
                    config.resource_path = path;
                    config.host_header = host;
                    info!(
                        "following {} redirect to {}{}",
                        code, config.host_header, config.resource_path
                    );
                    Ok(StepOutcome::FollowRedirect)
                }
            }
        }
        StatusOutcome::ClientError(code) => Err(Error::HttpClientError(code)),
        StatusOutcome::NotImplemented(code) => Err(Error::UnknownStatus(code)),
    }
}

fn read_header_block<T: Transport>(transport: &mut T, response: &mut String) -> Result<(), Error> {
    loop {
        let line = transport.receive_line()?.ok_or(Error::ReceiveFailed)?;
        let blank = line.is_empty();
        response.push_str(&line);
        response.push_str("\r\n");
        if blank {
            return Ok(());
        }
    }
}

fn read_body<T: Transport>(transport: &mut T) -> Result<String, Error> {
    let mut body = String::new();
    while let Some(line) = transport.receive_line()? {
        body.push_str(&line);
        body.push('\n');
    }
    Ok(body)
}

fn connect<T: Transport>(transport: &mut T, host: &HostInfo) -> Result<(), Error> {
    let port = host.effective_port();
    if host.tls {
        transport.connect_tls(&host.ip, port)
    } else {
        transport.connect_plain(&host.ip, port)
    }
}

/// Drive the whole invocation: pull credential pairs from `credentials`
/// until exhausted, running the `NEW -> RUNNING -> EXITING` cycle for each
/// one and reporting the resulting verdict back to `credentials`.
///
/// Only a connect failure ends the invocation early, as `Err`; every other
/// failure abandons the current credential pair with [`Verdict::Unknown`]
/// and moves on to the next one: the exiting state always leads back to a
/// fresh attempt rather than aborting the whole run.
pub fn run_invocation<T: Transport, C: CredentialSource>(
    host: &HostInfo,
    transport: &mut T,
    credentials: &mut C,
    raw_options: &[String],
) -> Result<(), Error> {
    let mut config = options::parse_options(raw_options).finish(&host.host, host.effective_port());
    let base_resource_path = config.resource_path.clone();
    let base_form_type = config.form_type;

    while let Some(next) = credentials.next_credential() {
        match next.status {
            CredentialStatus::NewUser => info!("starting new user: {:?}", next.login),
            CredentialStatus::Continue | CredentialStatus::Done => {
                debug!("trying login {:?}", next.login)
            }
        }

        config.resource_path = base_resource_path.clone();
        config.form_type = base_form_type;
        config.pre_redirect = None;
        config.redirect_count = 0;

        connect(transport, host)?;

        let verdict = loop {
            match try_attempt(&mut config, transport, &next.login, &next.password) {
                Ok(StepOutcome::FollowRedirect) => {
                    transport.disconnect();
                    connect(transport, host)?;
                }
                Ok(StepOutcome::VerdictRecorded(verdict)) => break verdict,
                Err(Error::ConnectFailed(msg)) => return Err(Error::ConnectFailed(msg)),
                Err(e) => {
                    warn!("attempt for login {:?} ended in error: {}", next.login, e);
                    break Verdict::Unknown;
                }
            }
        };

        transport.disconnect();
        credentials.record_verdict(&next.password, verdict);
    }

    Ok(())
}
