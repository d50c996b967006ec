//! Turns a parsed request into a reply.
//!
//! Rules, checked in order:
//!
//! 1. the resolved path is an existing file inside the root: `200`, body is the file
//! 2. the resolved path is the redirect pseudo-path: `301` to the configured location
//! 3. anything else: `404`
//!
//! Only GET is served. Other methods get the `404` reply.

use std::io;

use bytes::Bytes;

use crate::files::{DocumentRoot, FileStore, ReadMode};
use crate::http::request::{Method, ParsedRequest};
use crate::http::response::{ConnectionDirective, Response};

/// Directive echoed on a `200` when the client sent no `Connection:` header.
const DEFAULT_CONNECTION: &str = "keep-alive";

/// Decides the reply for `req`.
///
/// Performs at most one file read, and only for a `200`. A file that exists
/// but cannot be read is returned as an error so the caller can drop the
/// connection.
pub fn decide(req: &ParsedRequest, root: &DocumentRoot, store: &dyn FileStore) -> io::Result<Response> {
    if req.method != Method::GET {
        tracing::warn!(method = req.method.as_str(), target = %req.target, "Unsupported method");
        return Ok(Response::not_found());
    }

    let path = req.resolved_path.as_path();

    if store.exists(path) && root.confines(path) {
        let body = match root.read_mode(path) {
            ReadMode::Binary => Bytes::from(store.read_bytes(path)?),
            ReadMode::Text => Bytes::from(normalize_newlines(store.read_text(path)?)),
        };

        let connection = req.connection().unwrap_or(DEFAULT_CONNECTION).to_string();
        return Ok(Response::ok(ConnectionDirective::Echo(connection), body));
    }

    if root.is_redirect(path) {
        return Ok(Response::moved_permanently(root.redirect_location()));
    }

    Ok(Response::not_found())
}

/// Text mode reads translate `\r\n` and lone `\r` line endings to `\n`.
fn normalize_newlines(text: String) -> String {
    if !text.contains('\r') {
        return text;
    }

    text.replace("\r\n", "\n").replace('\r', "\n")
}
