//! Declarative HTTP data requests.
//!
//! # Overview
//! Callers describe a request as a value — URL, method, headers, query
//! parameters, and a decode rule from body bytes to a typed result — and
//! [`NetworkClient::execute`] performs the call, folding transport failures,
//! bad status codes, missing bodies, and decode failures into one
//! [`RequestError`] channel.
//!
//! # Design
//! - Descriptors ([`DataRequest`] / [`JsonRequest`]) are immutable plain
//!   data, constructed per call and never retained by the library.
//! - [`JsonRequest`] covers the common case: declare the response type and
//!   JSON decoding comes for free via a blanket impl.
//! - One process-wide transport client is shared by every [`NetworkClient`];
//!   concurrent `execute` calls are fully independent.
//! - No retries, caching, or cancellation — those belong to the caller.

pub mod client;
pub mod error;
pub mod http;
pub mod request;

pub use client::NetworkClient;
pub use error::RequestError;
pub use http::HttpMethod;
pub use request::{DataRequest, JsonRequest};
