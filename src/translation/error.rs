use thiserror::Error;

/// Failure of a single translate call.
///
/// Every variant is contained within the call that produced it; the
/// interactive loop renders it and keeps going.
#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("Failed to reach API endpoint {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("API request failed with status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Failed to decode API response: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("API response contained no message content")]
    EmptyResponse,

    #[error("{0}")]
    Payload(#[from] serde_json::Error),
}
