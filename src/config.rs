//! `ModuleConfig` - the state shared between the option parser, the request
//! builder, and the redirect handler.

use log::debug;

use crate::path::UriSplitMode;

/// A finalized form submission method. There is no `Unknown` variant here:
/// an invalid or absent `FORM-DATA` option is repaired to
/// [`FormType::Post`] before a [`ModuleConfig`] ever exists, so downstream
/// code can match exhaustively on just these two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormType {
    /// Credentials travel in the query string.
    Get,
    /// Credentials travel in an `application/x-www-form-urlencoded` body.
    Post,
}

/// Redirect chains longer than this end the attempt with
/// [`crate::error::Error::TooManyRedirects`].
pub const MAX_REDIRECTS: u32 = 10;

pub(crate) const DEFAULT_USER_AGENT: &str = "Mozilla/4.0 (compatible; WebFormLoginModule)";
pub(crate) const DEFAULT_DENY_SIGNAL: &str = "Login incorrect";
pub(crate) const DEFAULT_USER_KEY: &str = "username=";
pub(crate) const DEFAULT_PASS_KEY: &str = "password=";

/// Usage text a host framework can print for this module's options. Mirrors
/// roughly the same content a host framework would want printed for `-m` help text.
pub const OPTION_USAGE: &str = concat!(
    "Available module options:\n",
    "  USER-AGENT:?       User-agent value. Default: \"Mozilla/4.0 (compatible; WebFormLoginModule)\".\n",
    "  FORM:?             Target form to request. Default: \"/\"\n",
    "  DENY-SIGNAL:?      Authentication failure message. Attempt flagged as successful if text is not\n",
    "                     present in server response. Default: \"Login incorrect\"\n",
    "  CUSTOM-HEADER:?    Custom HTTP header. May be given multiple times.\n",
    "  FORM-DATA:<method>?<userKey>&<passKey>[&rest]\n",
    "                     Method is \"get\" or \"post\". Default: \"post?username=&password=\"\n",
);

/// The prior `(formType, resourcePath)` stashed while a 301/302 has
/// demoted a POST to GET, restored once the chain lands on a 200 OK.
///
/// This replaces a separate boolean flag and an old-path pointer that
/// would otherwise need to stay in lockstep by convention: bundling them
/// into one `Option` makes "the stashed path exists iff the form was
/// demoted" true by construction.
#[derive(Debug, Clone)]
pub struct PreRedirectSnapshot {
    pub form_type: FormType,
    pub resource_path: String,
}

/// Configuration for one module invocation, built once from the module
/// options and then mutated only by the redirect handler.
#[derive(Debug, Clone)]
pub struct ModuleConfig {
    pub resource_path: String,
    pub pre_redirect: Option<PreRedirectSnapshot>,
    pub host_header: String,
    pub user_agent: String,
    pub deny_signal: String,
    pub form_type: FormType,
    pub form_user_key: String,
    pub form_pass_key: String,
    pub form_rest: String,
    pub custom_headers: String,
    pub cookie_jar: String,
    pub uri_split_mode: UriSplitMode,
    pub(crate) redirect_count: u32,
}

/// What a `FORM-DATA` option resolved to, before defaults are applied.
#[derive(Debug, Default)]
pub(crate) struct FormDataSpec {
    pub form_type: Option<FormType>,
    pub user_key: Option<String>,
    pub pass_key: Option<String>,
    pub rest: String,
}

/// Accumulates module options and produces a finalized [`ModuleConfig`].
///
/// This plays the role `ureq::config::Config` plays for an `Agent`: the
/// single place defaults get resolved. There is only one scope here (no
/// per-request overrides), so unlike `Config` this builder has no
/// typestate machinery.
#[derive(Debug, Default)]
pub struct ModuleConfigBuilder {
    resource_path: Option<String>,
    deny_signal: Option<String>,
    user_agent: Option<String>,
    custom_headers: String,
    form_data: Option<FormDataSpec>,
    uri_split_mode: UriSplitMode,
}

impl ModuleConfigBuilder {
    /// Start with nothing set; every field falls back to its default in
    /// [`ModuleConfigBuilder::finish`].
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn set_form(&mut self, path: String) {
        self.resource_path = Some(path);
    }

    pub(crate) fn set_deny_signal(&mut self, signal: String) {
        self.deny_signal = Some(signal);
    }

    pub(crate) fn set_user_agent(&mut self, agent: String) {
        self.user_agent = Some(agent);
    }

    pub(crate) fn push_custom_header(&mut self, header: &str) {
        self.custom_headers.push_str(header);
        self.custom_headers.push_str("\r\n");
    }

    pub(crate) fn set_form_data(&mut self, spec: FormDataSpec) {
        self.form_data = Some(spec);
    }

    /// Select how a URI-typed `Location` is split; see [`UriSplitMode`].
    /// Defaults to [`UriSplitMode::Repaired`].
    pub fn uri_split_mode(mut self, mode: UriSplitMode) -> Self {
        self.uri_split_mode = mode;
        self
    }

    /// Resolve defaults and produce the config used for the whole
    /// invocation. `host` and `port` come from the Host Adapter's
    /// connection parameters and seed `Host:`.
    pub fn finish(self, host: &str, port: u16) -> ModuleConfig {
        let resource_path = self.resource_path.unwrap_or_else(|| "/".to_owned());
        let deny_signal = self
            .deny_signal
            .unwrap_or_else(|| DEFAULT_DENY_SIGNAL.to_owned());
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_owned());
        let host_header = format!("{}:{}", host, port);

        let (form_type, form_user_key, form_pass_key, form_rest) = match self.form_data {
            Some(spec) => match (spec.form_type, spec.user_key, spec.pass_key) {
                (Some(form_type), Some(user_key), Some(pass_key)) => {
                    (form_type, user_key, pass_key, spec.rest)
                }
                _ => {
                    log::warn!(
                        "invalid FORM-DATA option, falling back to default POST form"
                    );
                    (
                        FormType::Post,
                        DEFAULT_USER_KEY.to_owned(),
                        DEFAULT_PASS_KEY.to_owned(),
                        String::new(),
                    )
                }
            },
            None => (
                FormType::Post,
                DEFAULT_USER_KEY.to_owned(),
                DEFAULT_PASS_KEY.to_owned(),
                String::new(),
            ),
        };

        debug!(
            "resolved module config: form={:?} path={} user_key={} pass_key={} rest={:?}",
            form_type, resource_path, form_user_key, form_pass_key, form_rest
        );

        ModuleConfig {
            resource_path,
            pre_redirect: None,
            host_header,
            user_agent,
            deny_signal,
            form_type,
            form_user_key,
            form_pass_key,
            form_rest,
            custom_headers: self.custom_headers,
            cookie_jar: String::new(),
            uri_split_mode: self.uri_split_mode,
            redirect_count: 0,
        }
    }
}
