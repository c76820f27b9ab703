//! Error types for request execution.
//!
//! # Design
//! Each variant corresponds to one distinct failure point along the execution
//! path, in order: URL parsing, the network round-trip, the status check, the
//! body presence check, and decoding. `HttpStatus` carries the actual status
//! code and body text so callers can tell a 404 from a 503 without re-issuing
//! the request.

use thiserror::Error;

/// Errors delivered by [`NetworkClient::execute`](crate::NetworkClient::execute).
///
/// Exactly one outcome — a decoded value or one of these — is produced per
/// call. Underlying causes stay reachable through `source()`.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The descriptor's URL string could not be parsed.
    #[error("invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The network round-trip itself failed (DNS, connect, TLS, timeout).
    #[error("transport failure: {0}")]
    Transport(#[source] reqwest::Error),

    /// A response arrived but its status code was outside 200..300.
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        /// Status code as received.
        status: u16,
        /// Response body text, empty if it could not be read.
        body: String,
    },

    /// The response succeeded but carried no body bytes.
    #[error("response body is empty")]
    EmptyBody,

    /// The body could not be parsed into the expected response type.
    #[error("decode failure: {0}")]
    Decode(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl RequestError {
    /// Wrap an arbitrary parse failure as a decode error. Used by custom
    /// [`DataRequest::decode`](crate::DataRequest::decode) implementations.
    pub fn decode<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        RequestError::Decode(Box::new(err))
    }
}
