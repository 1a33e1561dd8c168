//! Parses `KEY:VALUE` module options into a [`ModuleConfigBuilder`].

use log::{debug, warn};

use crate::config::{FormDataSpec, FormType, ModuleConfigBuilder};

/// Parse every `KEY:VALUE` option string, warning about and skipping
/// anything malformed or unrecognized, and return a builder ready for
/// [`ModuleConfigBuilder::finish`].
pub fn parse_options<S: AsRef<str>>(raw_options: &[S]) -> ModuleConfigBuilder {
    let mut builder = ModuleConfigBuilder::new();

    for raw in raw_options {
        let raw = raw.as_ref();
        debug!("processing module option: {}", raw);

        match raw.split_once(':') {
            Some((key, value)) => apply_option(&mut builder, key, value),
            None => warn!("malformed module option {:?}, expected KEY:VALUE", raw),
        }
    }

    builder
}

fn apply_option(builder: &mut ModuleConfigBuilder, key: &str, value: &str) {
    if value.is_empty() {
        warn!("option {} requires a value, ignoring", key);
        return;
    }

    match key.to_ascii_uppercase().as_str() {
        "FORM" => builder.set_form(value.to_owned()),
        "DENY-SIGNAL" => builder.set_deny_signal(value.to_owned()),
        "USER-AGENT" => builder.set_user_agent(value.to_owned()),
        "CUSTOM-HEADER" => builder.push_custom_header(value),
        "FORM-DATA" => builder.set_form_data(parse_form_data(value)),
        other => warn!("unknown module option {:?}, ignoring", other),
    }
}

/// Parse a `FORM-DATA` value of the form `<method>?<userKey>&<passKey>[&rest]`.
fn parse_form_data(value: &str) -> FormDataSpec {
    let mut top = value.splitn(2, '?');
    let method = top.next().unwrap_or("");
    let fields = top.next();

    let form_type = match method.to_ascii_lowercase().as_str() {
        "get" => Some(FormType::Get),
        "post" => Some(FormType::Post),
        _ => None,
    };

    let (user_key, pass_key, rest) = match fields {
        Some(fields) => {
            let mut field_iter = fields.splitn(3, '&');
            let user_key = field_iter.next().filter(|s| !s.is_empty()).map(str::to_owned);
            let pass_key = field_iter.next().filter(|s| !s.is_empty()).map(str::to_owned);
            let rest = field_iter.next().unwrap_or("").to_owned();
            (user_key, pass_key, rest)
        }
        None => (None, None, String::new()),
    };

    FormDataSpec {
        form_type,
        user_key,
        pass_key,
        rest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(opts: &[&str]) -> crate::config::ModuleConfig {
        parse_options(opts).finish("target.example", 80)
    }

    #[test]
    fn defaults_when_no_options() {
        let config = build(&[]);
        assert_eq!(config.resource_path, "/");
        assert_eq!(config.deny_signal, "Login incorrect");
        assert_eq!(config.form_user_key, "username=");
        assert_eq!(config.form_pass_key, "password=");
        assert_eq!(config.form_rest, "");
        assert_eq!(config.form_type, FormType::Post);
        assert_eq!(config.host_header, "target.example:80");
    }

    #[test]
    fn form_option_sets_resource_path() {
        let config = build(&["FORM:/webmail/index.php"]);
        assert_eq!(config.resource_path, "/webmail/index.php");
    }

    #[test]
    fn custom_headers_accumulate_in_order() {
        let config = build(&["CUSTOM-HEADER:X-One: 1", "CUSTOM-HEADER:X-Two: 2"]);
        assert_eq!(config.custom_headers, "X-One: 1\r\nX-Two: 2\r\n");
    }

    #[test]
    fn form_data_get_with_rest() {
        let config = build(&["FORM-DATA:get?user=&pass=&submit=True"]);
        assert_eq!(config.form_type, FormType::Get);
        assert_eq!(config.form_user_key, "user=");
        assert_eq!(config.form_pass_key, "pass=");
        assert_eq!(config.form_rest, "submit=True");
    }

    #[test]
    fn form_data_unknown_method_falls_back_to_default() {
        let config = build(&["FORM-DATA:put?user=&pass="]);
        assert_eq!(config.form_type, FormType::Post);
        assert_eq!(config.form_user_key, "username=");
        assert_eq!(config.form_pass_key, "password=");
    }

    #[test]
    fn form_data_missing_pass_key_falls_back_to_default() {
        let config = build(&["FORM-DATA:post?user="]);
        assert_eq!(config.form_type, FormType::Post);
        assert_eq!(config.form_user_key, "username=");
        assert_eq!(config.form_pass_key, "password=");
    }

    #[test]
    fn malformed_option_is_ignored() {
        let config = build(&["NOVALUE"]);
        assert_eq!(config.resource_path, "/");
    }

    #[test]
    fn unknown_key_is_ignored() {
        let config = build(&["BOGUS:whatever"]);
        assert_eq!(config.resource_path, "/");
    }
}
