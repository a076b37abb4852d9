//! Transport-level failures of the booklet API

/// Any failure talking to the remote service.
///
/// Fatal to the book attempt that hit it; recoverable by re-running.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Connection, TLS or timeout failure
    #[error("Request to {endpoint} failed: {source}")]
    Request {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// Non-2xx status
    #[error("{endpoint} returned HTTP {status}")]
    Status {
        endpoint: &'static str,
        status: reqwest::StatusCode,
    },

    /// Body was not the JSON shape the endpoint promises
    #[error("Malformed response from {endpoint}: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Payload parsed but an expected field was absent or null
    #[error("Response from {endpoint} is missing `{field}`")]
    MissingField {
        endpoint: &'static str,
        field: &'static str,
    },

    /// Client construction failed
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}
