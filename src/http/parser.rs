use crate::http::request::Request;
use std::collections::HashMap;

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    /// Nothing but the line terminator was received.
    Empty,
    /// The line did not split into exactly method, target and version.
    InvalidTokenCount(usize),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::Empty => write!(f, "empty request line"),
            ParseError::InvalidTokenCount(n) => {
                write!(f, "expected 3 request line tokens, got {}", n)
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Parses a request line (without its terminator) into a [`Request`].
///
/// Tokens are separated by single spaces, so doubled or trailing spaces
/// change the token count and make the line malformed.
pub fn parse_request_line(line: &str) -> Result<Request, ParseError> {
    if line.is_empty() {
        return Err(ParseError::Empty);
    }

    let parts: Vec<&str> = line.split(' ').collect();
    let &[method, target, version] = parts.as_slice() else {
        return Err(ParseError::InvalidTokenCount(parts.len()));
    };

    let (path, query) = match target.split_once('?') {
        Some((path, query_string)) => (path, parse_query(query_string)),
        None => (target, HashMap::new()),
    };

    Ok(Request {
        method: method.to_string(),
        path: path.to_string(),
        version: version.to_string(),
        query,
    })
}

/// Splits a raw query string into key/value pairs.
///
/// `k=v` maps k to v, a bare `k` maps k to "", and segments with more than
/// one `=` are dropped. Later duplicates overwrite earlier ones. Nothing is
/// percent-decoded.
pub fn parse_query(query_string: &str) -> HashMap<String, String> {
    let mut params = HashMap::new();

    if query_string.is_empty() {
        return params;
    }

    for segment in query_string.split('&') {
        let fields: Vec<&str> = segment.split('=').collect();
        match fields.as_slice() {
            [key] => {
                params.insert(key.to_string(), String::new());
            }
            [key, value] => {
                params.insert(key.to_string(), value.to_string());
            }
            _ => {}
        }
    }

    params
}
