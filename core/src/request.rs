//! Request descriptor traits.
//!
//! # Design
//! A descriptor is plain data plus a decode rule: it says where a call goes,
//! what it carries, and how to turn the successful body bytes into a typed
//! value. Descriptors never perform I/O themselves — the executor in
//! [`client`](crate::client) does the round-trip.
//!
//! Two traits cover the two decoding situations:
//! - [`DataRequest`] is the full contract; implement it directly when the
//!   response body is not JSON (binary payloads, plain text, custom formats).
//! - [`JsonRequest`] is the common case; it omits `decode` and a blanket impl
//!   supplies serde_json parsing for any `Response: DeserializeOwned`.
//!
//! `headers` and `query_items` have default bodies returning empty vectors,
//! so a minimal descriptor only states its URL, method, and response type.
//! Pairs are kept in a `Vec` rather than a map: the order returned here is
//! the order query parameters appear in the final URL.

use serde::de::DeserializeOwned;

use crate::error::RequestError;
use crate::http::HttpMethod;

/// Describes one HTTP call and how to interpret its response body.
pub trait DataRequest {
    /// The typed value produced from a successful response body.
    type Response;

    /// Absolute URL for the call. May already contain a query string;
    /// [`query_items`](Self::query_items) are appended after it.
    fn url(&self) -> &str;

    /// HTTP method for the call.
    fn method(&self) -> HttpMethod;

    /// Header fields attached to the request. Defaults to none.
    fn headers(&self) -> Vec<(String, String)> {
        Vec::new()
    }

    /// Query parameters appended to the URL, in the order returned here.
    /// Defaults to none.
    fn query_items(&self) -> Vec<(String, String)> {
        Vec::new()
    }

    /// Parse the raw successful response body into [`Self::Response`].
    fn decode(&self, body: &[u8]) -> Result<Self::Response, RequestError>;
}

/// A request whose response body is JSON.
///
/// Implementing this instead of [`DataRequest`] gets `decode` for free: the
/// body is parsed with serde_json into `Response`.
pub trait JsonRequest {
    /// The typed value produced from a successful response body.
    type Response: DeserializeOwned;

    /// Absolute URL for the call.
    fn url(&self) -> &str;

    /// HTTP method for the call.
    fn method(&self) -> HttpMethod;

    /// Header fields attached to the request. Defaults to none.
    fn headers(&self) -> Vec<(String, String)> {
        Vec::new()
    }

    /// Query parameters appended to the URL. Defaults to none.
    fn query_items(&self) -> Vec<(String, String)> {
        Vec::new()
    }
}

impl<T: JsonRequest> DataRequest for T {
    type Response = T::Response;

    fn url(&self) -> &str {
        JsonRequest::url(self)
    }

    fn method(&self) -> HttpMethod {
        JsonRequest::method(self)
    }

    fn headers(&self) -> Vec<(String, String)> {
        JsonRequest::headers(self)
    }

    fn query_items(&self) -> Vec<(String, String)> {
        JsonRequest::query_items(self)
    }

    fn decode(&self, body: &[u8]) -> Result<Self::Response, RequestError> {
        serde_json::from_slice(body).map_err(RequestError::decode)
    }
}
