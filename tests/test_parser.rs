use minihttpd::config::StaticFilesConfig;
use minihttpd::files::DocumentRoot;
use minihttpd::http::parser::{ParseError, parse_http_request};
use minihttpd::http::request::Method;
use std::path::Path;

fn root() -> DocumentRoot {
    DocumentRoot::default()
}

#[test]
fn test_parse_simple_get_request() {
    let req = b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n";
    let parsed = parse_http_request(req, &root()).unwrap();

    assert_eq!(parsed.method, Method::GET);
    assert_eq!(parsed.target, "/");
    assert_eq!(parsed.protocol, "HTTP/1.1");
    assert_eq!(parsed.resolved_path, Path::new("files/index.html"));
    assert_eq!(parsed.headers.get("Host:").unwrap(), "example.com");
}

#[test]
fn test_parse_connection_close_example() {
    let req = b"GET / HTTP/1.1\r\nConnection: close\r\n\r\n";
    let parsed = parse_http_request(req, &root()).unwrap();

    assert_eq!(parsed.resolved_path, Path::new("files/index.html"));
    assert_eq!(parsed.connection(), Some("close"));
    assert!(parsed.wants_close());
}

#[test]
fn test_parse_resolves_target_under_document_root() {
    let req = b"GET /foo.html HTTP/1.1\r\n\r\n";
    let parsed = parse_http_request(req, &root()).unwrap();

    assert_eq!(parsed.target, "/foo.html");
    assert_eq!(parsed.resolved_path, Path::new("files/foo.html"));
}

#[test]
fn test_parse_header_names_keep_their_colon() {
    let req = b"GET /path HTTP/1.1\r\nHost: example.com\r\nUser-Agent: test-client\r\nAccept: */*\r\n\r\n";
    let parsed = parse_http_request(req, &root()).unwrap();

    assert_eq!(parsed.header("Host:"), Some("example.com"));
    assert_eq!(parsed.header("User-Agent:"), Some("test-client"));
    assert_eq!(parsed.header("Accept:"), Some("*/*"));
    assert_eq!(parsed.header("Host"), None);
}

#[test]
fn test_parse_header_value_keeps_everything_after_first_space() {
    let req = b"GET / HTTP/1.1\r\nUser-Agent: Mozilla/5.0 (X11; Linux)\r\n\r\n";
    let parsed = parse_http_request(req, &root()).unwrap();

    assert_eq!(parsed.header("User-Agent:"), Some("Mozilla/5.0 (X11; Linux)"));
}

#[test]
fn test_parse_duplicate_header_last_wins() {
    let req = b"GET / HTTP/1.1\r\nConnection: close\r\nConnection: keep-alive\r\n\r\n";
    let parsed = parse_http_request(req, &root()).unwrap();

    assert_eq!(parsed.connection(), Some("keep-alive"));
    assert_eq!(parsed.headers.len(), 1);
}

#[test]
fn test_parse_skips_lines_without_a_space() {
    let req = b"GET / HTTP/1.1\r\nBrokenHeader\r\nHost:nospace\r\nHost: ok\r\n\r\n";
    let parsed = parse_http_request(req, &root()).unwrap();

    assert_eq!(parsed.headers.len(), 1);
    assert_eq!(parsed.header("Host:"), Some("ok"));
}

#[test]
fn test_parse_stops_at_blank_line() {
    let req = b"GET / HTTP/1.1\r\nHost: a\r\n\r\nX-Body: ignored\r\n";
    let parsed = parse_http_request(req, &root()).unwrap();

    assert_eq!(parsed.header("X-Body:"), None);
}

#[test]
fn test_parse_request_without_terminating_blank_line() {
    // A single read is the whole request; no waiting for more data.
    let req = b"GET /redirect HTTP/1.1\r\nHost: example.com";
    let parsed = parse_http_request(req, &root()).unwrap();

    assert_eq!(parsed.resolved_path, Path::new("files/redirect"));
    assert_eq!(parsed.header("Host:"), Some("example.com"));
}

#[test]
fn test_parse_empty_buffer() {
    let result = parse_http_request(b"", &root());

    assert_eq!(result, Err(ParseError::Empty));
}

#[test]
fn test_parse_bare_line_break_is_empty() {
    let result = parse_http_request(b"\r\n", &root());

    assert_eq!(result, Err(ParseError::Empty));
}

#[test]
fn test_parse_invalid_utf8() {
    let result = parse_http_request(b"GET /\xff HTTP/1.1\r\n\r\n", &root());

    assert_eq!(result, Err(ParseError::InvalidEncoding));
}

#[test]
fn test_parse_malformed_request_line() {
    for line in ["GET\r\n\r\n", "GET /\r\n\r\n", "GET / HTTP/1.1 extra\r\n\r\n"] {
        let result = parse_http_request(line.as_bytes(), &root());
        assert_eq!(result, Err(ParseError::MalformedRequestLine), "{line:?}");
    }
}

#[test]
fn test_parse_keeps_unknown_methods() {
    let req = b"BREW /pot HTTP/1.1\r\n\r\n";
    let parsed = parse_http_request(req, &root()).unwrap();

    assert_eq!(parsed.method, Method::Other("BREW".to_string()));
}

#[test]
fn test_parse_echoes_protocol_token_verbatim() {
    let req = b"GET / HTTP/1.0\r\n\r\n";
    let parsed = parse_http_request(req, &root()).unwrap();

    assert_eq!(parsed.protocol, "HTTP/1.0");
}

#[test]
fn test_parse_uses_configured_root() {
    let root = DocumentRoot::new(&StaticFilesConfig {
        root: "/srv/www".into(),
        index: "home.htm".to_string(),
        ..StaticFilesConfig::default()
    });

    let parsed = parse_http_request(b"GET / HTTP/1.1\r\n\r\n", &root).unwrap();
    assert_eq!(parsed.resolved_path, Path::new("/srv/www/home.htm"));
}
