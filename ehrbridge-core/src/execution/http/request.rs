//! Declarative HTTP request/response descriptions.
//!
//! Provider operations build an [`HttpRequest`] and hand it to the
//! [`RequestPipeline`](super::RequestPipeline); nothing here performs I/O.

use std::time::Duration;

use reqwest::Method;
use reqwest::header::HeaderMap;
use serde_json::Value;

use crate::encoding::WireValues;

/// Declared body encoding of a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentType {
    Json,
    FormUrlEncoded,
    /// Any other MIME type. The pipeline cannot encode these and rejects them.
    Other(String),
}

impl ContentType {
    pub fn mime(&self) -> &str {
        match self {
            Self::Json => "application/json",
            Self::FormUrlEncoded => "application/x-www-form-urlencoded",
            Self::Other(mime) => mime,
        }
    }
}

/// Request payload before encoding.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Json(Value),
    Form(WireValues),
}

/// One call against the remote system, relative to the pipeline's base URL.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    /// Path appended to the base URL. Must not carry its own query string.
    pub path: String,
    pub query: WireValues,
    pub body: Option<RequestBody>,
    pub content_type: Option<ContentType>,
    pub headers: HeaderMap,
    /// Per-call deadline replacing the client-wide timeout.
    pub timeout: Option<Duration>,
}

impl HttpRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: WireValues::new(),
            body: None,
            content_type: None,
            headers: HeaderMap::new(),
            timeout: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Merge a set of query parameters; later keys replace earlier ones.
    pub fn with_query(mut self, query: WireValues) -> Self {
        self.query.extend(query);
        self
    }

    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.set(key, value);
        self
    }

    /// Attach a form body and declare it form-encoded.
    pub fn form(mut self, values: WireValues) -> Self {
        self.body = Some(RequestBody::Form(values));
        self.content_type = Some(ContentType::FormUrlEncoded);
        self
    }

    /// Attach a JSON body and declare it JSON-encoded.
    pub fn json(mut self, value: Value) -> Self {
        self.body = Some(RequestBody::Json(value));
        self.content_type = Some(ContentType::Json);
        self
    }

    /// Override the declared content type without touching the body.
    pub fn with_content_type(mut self, content_type: Option<ContentType>) -> Self {
        self.content_type = content_type;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers.extend(headers);
        self
    }
}

/// Successful (status < 400) response as the pipeline received it.
#[derive(Debug, Clone)]
pub struct WireResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl WireResponse {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}
