//! HTTP execution primitives.
//!
//! - `request`: declarative description of one call and its response
//! - `pipeline`: executes a request (auth, encoding, status mapping, telemetry)
//! - `status`: HTTP status to error-kind mapping
//! - `transport`: injectable transport seam with the `reqwest` default
//! - `headers`: header construction helpers
//! - `client`: `reqwest::Client` construction from `HttpConfig`

pub mod client;
pub mod headers;
pub mod pipeline;
pub mod request;
pub mod status;
pub mod transport;

pub use client::build_http_client;
pub use pipeline::{RateLimitGauge, RequestPipeline};
pub use request::{ContentType, HttpRequest, RequestBody, WireResponse};
pub use status::{classify_http_error, code_for_status};
pub use transport::{HttpTransport, HttpTransportRequest, HttpTransportResponse, ReqwestTransport};
