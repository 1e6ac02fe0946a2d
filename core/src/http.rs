//! HTTP transport types for the host-does-IO pattern.
//!
//! The core crate describes requests and responses as plain data and never
//! opens a socket. A host — the CLI, or a test harness — executes each
//! `HttpRequest` and hands the resulting `HttpResponse` back for parsing.
//! Keeping the I/O boundary at this seam makes every client operation
//! deterministic and testable without a server.

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// An outbound request described as plain data, produced by the
/// `ItemClient::build_*` methods.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// A bodyless request with no headers.
    pub(crate) fn bare(method: HttpMethod, path: String) -> Self {
        Self {
            method,
            path,
            headers: Vec::new(),
            body: None,
        }
    }

    /// A request carrying a JSON body and the matching content-type header.
    pub(crate) fn json(method: HttpMethod, path: String, body: String) -> Self {
        Self {
            method,
            path,
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        }
    }
}

/// The response to an executed `HttpRequest`, constructed by the host and
/// consumed by the `ItemClient::parse_*` methods.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}
