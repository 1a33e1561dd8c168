//! Parses the numeric status code out of a response's first line.

/// The closed set of status outcomes this module understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusOutcome {
    /// 200.
    Ok,
    /// 301, 302, 307, or 308 — the code is kept so the caller can decide
    /// whether this particular redirect is allowed to change the method.
    Redirect(u16),
    /// 400, 401, 403, or 404 — treated as a hard, non-credential error.
    ClientError(u16),
    /// Any other numeric status code.
    NotImplemented(u16),
    /// No space, empty input, non-numeric, or the line was absent.
    ParseError,
}

/// Parse the status code from a line like `"HTTP/1.1 200 OK"`.
pub fn parse_status_line(line: &str) -> StatusOutcome {
    let space = match line.find(' ') {
        Some(idx) => idx,
        None => return StatusOutcome::ParseError,
    };

    let rest = line[space + 1..].trim_start();
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return StatusOutcome::ParseError;
    }

    let code: u16 = match digits.parse() {
        Ok(v) => v,
        Err(_) => return StatusOutcome::ParseError,
    };

    classify(code)
}

fn classify(code: u16) -> StatusOutcome {
    match code {
        200 => StatusOutcome::Ok,
        301 | 302 | 307 | 308 => StatusOutcome::Redirect(code),
        400 | 401 | 403 | 404 => StatusOutcome::ClientError(code),
        other => StatusOutcome::NotImplemented(other),
    }
}

/// Parse the status code from an already-resolved `Option<&str>`, treating
/// an absent line the same as an unparseable one.
pub fn parse_status_line_opt(line: Option<&str>) -> StatusOutcome {
    match line {
        Some(line) => parse_status_line(line),
        None => StatusOutcome::ParseError,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ok() {
        assert_eq!(parse_status_line("HTTP/1.1 200 OK\r\n"), StatusOutcome::Ok);
    }

    #[test]
    fn parses_redirects() {
        for code in [301, 302, 307, 308] {
            let line = format!("HTTP/1.1 {} Moved\r\n", code);
            assert_eq!(parse_status_line(&line), StatusOutcome::Redirect(code));
        }
    }

    #[test]
    fn parses_client_errors() {
        for code in [400, 401, 403, 404] {
            let line = format!("HTTP/1.1 {} Error\r\n", code);
            assert_eq!(parse_status_line(&line), StatusOutcome::ClientError(code));
        }
    }

    #[test]
    fn unrecognized_code_is_not_implemented() {
        assert_eq!(
            parse_status_line("HTTP/1.1 999 Fictional\r\n"),
            StatusOutcome::NotImplemented(999)
        );
    }

    #[test]
    fn no_space_is_parse_error() {
        assert_eq!(parse_status_line("garbage"), StatusOutcome::ParseError);
    }

    #[test]
    fn empty_is_parse_error() {
        assert_eq!(parse_status_line(""), StatusOutcome::ParseError);
    }

    #[test]
    fn non_numeric_is_parse_error() {
        assert_eq!(parse_status_line("HTTP/1.1 OK\r\n"), StatusOutcome::ParseError);
    }

    #[test]
    fn absent_is_parse_error() {
        assert_eq!(parse_status_line_opt(None), StatusOutcome::ParseError);
    }
}
