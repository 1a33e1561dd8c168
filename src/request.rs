//! Composes the wire bytes for one credential attempt.

use crate::config::{FormType, ModuleConfig};
use crate::encode::url_encode;

/// Build the `<userKey><login>&<passKey><encodedPassword><rest>` parameter
/// string used as the GET query string or the POST body.
fn build_param_string(config: &ModuleConfig, login: &str, password: &str) -> String {
    let encoded_password = url_encode(password.as_bytes());
    let rest = if config.form_rest.is_empty() {
        String::new()
    } else {
        format!("&{}", config.form_rest)
    };

    format!(
        "{}{}&{}{}{}",
        config.form_user_key, login, config.form_pass_key, encoded_password, rest
    )
}

/// Build the full wire request for one attempt. When a redirect has
/// demoted the request to a plain GET (`config.pre_redirect.is_some()`),
/// the parameter string is empty - this is a re-fetch of the redirect
/// target, not a fresh credential submission.
pub fn build_request(config: &ModuleConfig, login: &str, password: &str) -> Vec<u8> {
    let params = if config.pre_redirect.is_some() {
        String::new()
    } else {
        build_param_string(config, login, password)
    };

    let mut req = String::new();

    match config.form_type {
        FormType::Get => {
            req.push_str(&format!("GET {}?{} HTTP/1.1\r\n", config.resource_path, params));
            push_common_headers(&mut req, config);
            req.push_str("\r\n");
        }
        FormType::Post => {
            req.push_str(&format!("POST {} HTTP/1.1\r\n", config.resource_path));
            push_common_headers(&mut req, config);
            req.push_str("Content-Type: application/x-www-form-urlencoded\r\n");
            req.push_str(&format!("Content-Length: {}\r\n", params.len()));
            req.push_str("\r\n");
            req.push_str(&params);
        }
    }

    req.into_bytes()
}

fn push_common_headers(req: &mut String, config: &ModuleConfig) {
    req.push_str(&format!("Host: {}\r\n", config.host_header));
    req.push_str(&format!("User-Agent: {}\r\n", config.user_agent));
    req.push_str(&config.custom_headers);
    req.push_str(&config.cookie_jar);
}
