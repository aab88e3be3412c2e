//! Error types for the API client.

/// Errors that can occur when building or sending profile requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A `limit` outside the accepted range was supplied. No request was sent.
    #[error("{message}")]
    InvalidLimit { limit: i64, message: String },
    /// A `sort` other than `asc` or `desc` was supplied. No request was sent.
    #[error("{message}")]
    InvalidSort { sort: String, message: String },
    /// A profile identity could not be parsed from `type:value` form.
    #[error("Invalid profile id: {0}")]
    InvalidProfileId(String),
    /// The base URL cannot be extended with path segments.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    /// The HTTP request failed before a response was received.
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),
    /// The API returned a non-success status. `body` is the full response body.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The response body was not valid JSON.
    #[error("Failed to decode response: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: String,
    },
}

impl Error {
    /// True for errors raised locally from caller input, before any network call.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::InvalidLimit { .. } | Error::InvalidSort { .. } | Error::InvalidProfileId(_)
        )
    }
}
