use std::collections::HashMap;
use std::path::PathBuf;

/// Header name, in wire form, that controls connection reuse.
pub const CONNECTION_HEADER: &str = "Connection:";

/// Directive value a client sends to end the connection after one reply.
pub const CONNECTION_CLOSE: &str = "close";

/// HTTP request methods.
///
/// Only GET is served. Every other token is still parsed so the handler can
/// answer it instead of dropping the connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
    /// HEAD - Like GET but without the response body
    HEAD,
    /// POST - Create or submit data
    POST,
    /// PUT - Replace a resource
    PUT,
    /// DELETE - Delete a resource
    DELETE,
    /// OPTIONS - Describe communication options
    OPTIONS,
    /// PATCH - Partial modification of a resource
    PATCH,
    /// Any token not listed above, kept verbatim
    Other(String),
}

impl Method {
    /// Parses an HTTP method token. Matching is case-sensitive.
    ///
    /// # Example
    ///
    /// ```
    /// # use minihttpd::http::request::Method;
    /// assert_eq!(Method::parse("GET"), Method::GET);
    /// assert_eq!(Method::parse("get"), Method::Other("get".to_string()));
    /// ```
    pub fn parse(s: &str) -> Self {
        match s {
            "GET" => Method::GET,
            "HEAD" => Method::HEAD,
            "POST" => Method::POST,
            "PUT" => Method::PUT,
            "DELETE" => Method::DELETE,
            "OPTIONS" => Method::OPTIONS,
            "PATCH" => Method::PATCH,
            other => Method::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Method::GET => "GET",
            Method::HEAD => "HEAD",
            Method::POST => "POST",
            Method::PUT => "PUT",
            Method::DELETE => "DELETE",
            Method::OPTIONS => "OPTIONS",
            Method::PATCH => "PATCH",
            Method::Other(token) => token,
        }
    }
}

/// A request as read off the wire, built fresh for every request on a
/// connection and dropped once its reply has been written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRequest {
    pub method: Method,
    /// Target exactly as the client sent it (e.g. `/`, `/foo.html`)
    pub target: String,
    /// Local path the target maps to under the document root
    pub resolved_path: PathBuf,
    /// Protocol token, echoed back in the status line
    pub protocol: String,
    /// Header names keep their trailing colon (`Connection:`); the last
    /// occurrence of a repeated name wins.
    pub headers: HashMap<String, String>,
}

impl ParsedRequest {
    /// Looks up a header by its wire-form name, colon included.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(|v| v.as_str())
    }

    /// The client's `Connection:` directive, if it sent one.
    pub fn connection(&self) -> Option<&str> {
        self.header(CONNECTION_HEADER)
    }

    /// Whether the client asked for the connection to end after this reply.
    ///
    /// The value is compared ASCII case-insensitively, so `Close` and `CLOSE`
    /// count too. A missing header keeps the connection open.
    pub fn wants_close(&self) -> bool {
        self.connection()
            .map(|v| v.eq_ignore_ascii_case(CONNECTION_CLOSE))
            .unwrap_or(false)
    }
}

/// Builder for constructing requests without going through the parser.
pub struct RequestBuilder {
    method: Option<Method>,
    target: Option<String>,
    resolved_path: Option<PathBuf>,
    protocol: Option<String>,
    headers: HashMap<String, String>,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self {
            method: None,
            target: None,
            resolved_path: None,
            protocol: None,
            headers: HashMap::new(),
        }
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn resolved_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.resolved_path = Some(path.into());
        self
    }

    pub fn protocol(mut self, protocol: impl Into<String>) -> Self {
        self.protocol = Some(protocol.into());
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn build(self) -> Result<ParsedRequest, &'static str> {
        Ok(ParsedRequest {
            method: self.method.ok_or("method missing")?,
            target: self.target.ok_or("target missing")?,
            resolved_path: self.resolved_path.ok_or("resolved path missing")?,
            protocol: self.protocol.unwrap_or_else(|| "HTTP/1.1".to_string()),
            headers: self.headers,
        })
    }
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
