use bytes::Bytes;
use tokio::fs::File;

/// Content type sent when the resource's type could not be determined.
pub const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// HTTP status codes produced by the server.
///
/// - `Ok` (200): path allowed and resource read
/// - `NotFound` (404): path not in the catalog
/// - `InternalServerError` (500): allowed path whose file could not be read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 404 Not Found
    NotFound,
    /// 500 Internal Server Error
    InternalServerError,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use gatehouse::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::NotFound => 404,
            StatusCode::InternalServerError => 500,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::NotFound => "Not Found",
            StatusCode::InternalServerError => "Internal Server Error",
        }
    }
}

/// Status line and headers of a response.
///
/// The header block is always `Content-Type`, `Content-Length`,
/// `Connection: close`, in that order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseHead {
    pub status: StatusCode,
    /// `None` when the type is unknown; serialized as [`FALLBACK_CONTENT_TYPE`].
    pub content_type: Option<String>,
    pub content_length: u64,
}

impl ResponseHead {
    pub fn new(status: StatusCode, content_type: Option<String>, content_length: u64) -> Self {
        Self {
            status,
            content_type,
            content_length,
        }
    }

    /// Serializes the status line, header block and terminating blank line.
    ///
    /// # Example
    ///
    /// ```
    /// # use gatehouse::http::response::{ResponseHead, StatusCode};
    /// let head = ResponseHead::new(StatusCode::NotFound, Some("text/plain".into()), 0);
    /// assert_eq!(
    ///     head.to_bytes(),
    ///     b"HTTP/1.1 404 Not Found\r\nContent-Type: text/plain\r\nContent-Length: 0\r\nConnection: close\r\n\r\n".to_vec()
    /// );
    /// ```
    pub fn to_bytes(&self) -> Vec<u8> {
        format!(
            "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            self.status.as_u16(),
            self.status.reason_phrase(),
            self.content_type.as_deref().unwrap_or(FALLBACK_CONTENT_TYPE),
            self.content_length,
        )
        .into_bytes()
    }
}

/// Where the response body comes from.
#[derive(Debug)]
pub enum Body {
    /// Fully materialized body (errors, rendered templates).
    Bytes(Bytes),
    /// An open file streamed as-is; only its first `ResponseHead::content_length` bytes are sent.
    File(File),
}

/// A complete response waiting to be written.
#[derive(Debug)]
pub struct ResponseFrame {
    pub head: ResponseHead,
    pub body: Body,
}

impl ResponseFrame {
    /// 200 with an in-memory body; Content-Length is the body's length.
    pub fn ok_bytes(content_type: Option<String>, body: impl Into<Bytes>) -> Self {
        let body = body.into();
        Self {
            head: ResponseHead::new(StatusCode::Ok, content_type, body.len() as u64),
            body: Body::Bytes(body),
        }
    }

    /// 200 streaming `len` bytes of `file`.
    pub fn ok_file(content_type: Option<String>, file: File, len: u64) -> Self {
        Self {
            head: ResponseHead::new(StatusCode::Ok, content_type, len),
            body: Body::File(file),
        }
    }

    pub fn not_found() -> Self {
        Self::empty(StatusCode::NotFound)
    }

    pub fn internal_error() -> Self {
        Self::empty(StatusCode::InternalServerError)
    }

    fn empty(status: StatusCode) -> Self {
        Self {
            head: ResponseHead::new(status, Some("text/plain".to_string()), 0),
            body: Body::Bytes(Bytes::new()),
        }
    }
}
