use std::collections::HashMap;

/// Represents a parsed HTTP request line.
///
/// Only the request line is ever read from the client; headers and body are
/// left unconsumed. The method and version are kept for logging and are not
/// validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The request method token as sent (e.g. "GET")
    pub method: String,
    /// The path part of the target, without the query string (e.g. "/index.html")
    pub path: String,
    /// The version token as sent (typically "HTTP/1.1")
    pub version: String,
    /// Query parameters, not percent-decoded
    pub query: HashMap<String, String>,
}

impl Request {
    /// Retrieves a single query parameter by exact name.
    ///
    /// # Example
    ///
    /// ```
    /// # use gatehouse::http::parser::parse_request_line;
    /// let req = parse_request_line("GET /index.html?lang=en HTTP/1.1").unwrap();
    /// assert_eq!(req.query_param("lang"), Some("en"));
    /// assert_eq!(req.query_param("missing"), None);
    /// ```
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query.get(name).map(|v| v.as_str())
    }

    /// All query parameters.
    pub fn query_params(&self) -> &HashMap<String, String> {
        &self.query
    }
}
