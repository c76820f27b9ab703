//! Request executor: turns one descriptor into one network call and one
//! resolved outcome.
//!
//! # Design
//! `NetworkClient` holds no per-request state. All instances share a single
//! process-wide `reqwest::Client`, created lazily on first use — a
//! `reqwest::Client` is a handle to a connection pool, so cloning it is cheap
//! and constructing one per call would defeat connection reuse. The transport
//! manages its own worker threads; `execute` simply awaits the round-trip.
//!
//! Every failure is mapped into [`RequestError`] and returned through the
//! same `Result` channel as success. One call, one outcome.

use std::sync::OnceLock;

use tracing::debug;
use url::Url;

use crate::error::RequestError;
use crate::request::DataRequest;

static SHARED_CLIENT: OnceLock<reqwest::Client> = OnceLock::new();

/// Process-wide transport client, initialized on first use and reused by
/// every `NetworkClient` for the lifetime of the process.
fn shared_client() -> &'static reqwest::Client {
    SHARED_CLIENT.get_or_init(reqwest::Client::new)
}

/// Executes [`DataRequest`] values over HTTP.
#[derive(Debug, Clone, Default)]
pub struct NetworkClient;

impl NetworkClient {
    pub fn new() -> Self {
        Self
    }

    /// Perform the call described by `request` and decode its response.
    ///
    /// Exactly one network call is made per invocation, except when the URL
    /// fails to parse, in which case none is. Concurrent calls are
    /// independent; no ordering between them is guaranteed.
    pub async fn execute<R: DataRequest>(
        &self,
        request: &R,
    ) -> Result<R::Response, RequestError> {
        let url = build_url(request.url(), &request.query_items())?;
        debug!(%url, method = request.method().as_str(), "dispatching request");

        let mut builder = shared_client().request(request.method().into(), url);
        let headers = request.headers();
        if !headers.is_empty() {
            for (name, value) in &headers {
                builder = builder.header(name.as_str(), value.as_str());
            }
        }

        let response = builder.send().await.map_err(RequestError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RequestError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.bytes().await.map_err(RequestError::Transport)?;
        if body.is_empty() {
            return Err(RequestError::EmptyBody);
        }

        request.decode(&body)
    }
}

/// Parse the descriptor URL and append query items in their given order.
/// Parameters already embedded in the URL string are kept, with appended
/// items following them.
fn build_url(raw: &str, query_items: &[(String, String)]) -> Result<Url, RequestError> {
    let mut url = Url::parse(raw)?;
    if !query_items.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (name, value) in query_items {
            pairs.append_pair(name, value);
        }
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn appends_query_items_in_insertion_order() {
        let url = build_url("https://x.test/p", &items(&[("a", "1"), ("b", "2")])).unwrap();
        assert_eq!(url.as_str(), "https://x.test/p?a=1&b=2");
    }

    #[test]
    fn keeps_query_already_embedded_in_url() {
        let url = build_url("https://x.test/p?k=v", &items(&[("a", "1")])).unwrap();
        assert_eq!(url.as_str(), "https://x.test/p?k=v&a=1");
    }

    #[test]
    fn empty_query_items_leave_url_untouched() {
        let url = build_url("https://x.test/p", &[]).unwrap();
        assert_eq!(url.as_str(), "https://x.test/p");
    }

    #[test]
    fn rejects_unparseable_url() {
        let err = build_url("::::", &[]).unwrap_err();
        assert!(matches!(err, RequestError::InvalidUrl(_)));
    }

    #[test]
    fn rejects_relative_url() {
        let err = build_url("/user", &[]).unwrap_err();
        assert!(matches!(err, RequestError::InvalidUrl(_)));
    }

    #[test]
    fn percent_encodes_query_values() {
        let url = build_url("https://x.test/p", &items(&[("q", "a b")])).unwrap();
        assert_eq!(url.as_str(), "https://x.test/p?q=a+b");
    }
}
