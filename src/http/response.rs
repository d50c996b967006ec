use bytes::Bytes;

/// Status codes the server can answer with.
///
/// - `Ok` (200): the target named an existing file
/// - `MovedPermanently` (301): the target was the redirect pseudo-path
/// - `NotFound` (404): anything else
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 301 Moved Permanently
    MovedPermanently,
    /// 404 Not Found
    NotFound,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use minihttpd::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::MovedPermanently => 301,
            StatusCode::NotFound => 404,
        }
    }

    /// Code and reason as they appear after the protocol in the status line.
    ///
    /// ```
    /// # use minihttpd::http::response::StatusCode;
    /// assert_eq!(StatusCode::MovedPermanently.status_text(), "301 Moved Permanently");
    /// ```
    pub fn status_text(&self) -> &'static str {
        match self {
            StatusCode::Ok => "200 OK",
            StatusCode::MovedPermanently => "301 Moved Permanently",
            StatusCode::NotFound => "404 Not Found",
        }
    }
}

/// Value written in the reply's `Connection:` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionDirective {
    /// Repeats whatever the client sent.
    Echo(String),
    Close,
}

impl ConnectionDirective {
    pub fn as_str(&self) -> &str {
        match self {
            ConnectionDirective::Echo(value) => value,
            ConnectionDirective::Close => "close",
        }
    }
}

/// A decided reply, handed straight to the serializer.
///
/// The constructors keep status, location and body consistent: only `Ok`
/// carries a body and only `MovedPermanently` carries a location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    status: StatusCode,
    connection: ConnectionDirective,
    location: Option<String>,
    body: Option<Bytes>,
}

impl Response {
    /// 200 reply carrying the file contents.
    pub fn ok(connection: ConnectionDirective, body: impl Into<Bytes>) -> Self {
        Self {
            status: StatusCode::Ok,
            connection,
            location: None,
            body: Some(body.into()),
        }
    }

    /// 301 reply; always closes the connection.
    pub fn moved_permanently(location: impl Into<String>) -> Self {
        Self {
            status: StatusCode::MovedPermanently,
            connection: ConnectionDirective::Close,
            location: Some(location.into()),
            body: None,
        }
    }

    /// 404 reply; always closes the connection.
    pub fn not_found() -> Self {
        Self {
            status: StatusCode::NotFound,
            connection: ConnectionDirective::Close,
            location: None,
            body: None,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn connection(&self) -> &ConnectionDirective {
        &self.connection
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn body(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }
}
