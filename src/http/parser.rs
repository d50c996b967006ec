use crate::files::DocumentRoot;
use crate::http::request::{Method, ParsedRequest};
use std::collections::HashMap;
use std::fmt;

const LINE_TERMINATOR: &str = "\r\n";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Nothing to parse: the peer closed, or sent only a bare line break.
    Empty,
    /// The buffer is not valid UTF-8.
    InvalidEncoding,
    /// The request line is not `method target protocol`.
    MalformedRequestLine,
}

impl ParseError {
    /// `Empty` means "no request available", not a protocol violation.
    pub fn is_empty(&self) -> bool {
        matches!(self, ParseError::Empty)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Empty => write!(f, "empty request"),
            ParseError::InvalidEncoding => write!(f, "request is not valid UTF-8"),
            ParseError::MalformedRequestLine => write!(f, "malformed request line"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parses one request out of the bytes delivered by a single read.
///
/// Requests split across several reads are not reassembled: whatever arrived
/// in `buf` is the whole request. Header lines are split at their first
/// space, and lines without one are skipped. Parsing stops at the blank line
/// ending the header block.
pub fn parse_http_request(buf: &[u8], root: &DocumentRoot) -> Result<ParsedRequest, ParseError> {
    if buf.is_empty() {
        return Err(ParseError::Empty);
    }

    let text = std::str::from_utf8(buf).map_err(|_| ParseError::InvalidEncoding)?;
    let mut lines = text.split(LINE_TERMINATOR);

    // Request line
    let request_line = lines.next().unwrap_or_default();
    if request_line.is_empty() {
        return Err(ParseError::Empty);
    }

    let parts: Vec<&str> = request_line.split(' ').collect();
    let [method, target, protocol] = parts.as_slice() else {
        return Err(ParseError::MalformedRequestLine);
    };

    // Headers
    let mut headers = HashMap::new();

    for line in lines {
        if line.is_empty() {
            break;
        }

        if let Some((name, value)) = line.split_once(' ') {
            headers.insert(name.to_string(), value.to_string());
        }
    }

    Ok(ParsedRequest {
        method: Method::parse(method),
        target: target.to_string(),
        resolved_path: root.resolve(target),
        protocol: protocol.to_string(),
        headers,
    })
}
