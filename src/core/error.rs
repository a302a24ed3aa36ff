use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum TrackerError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The response body was not valid JSON.
    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The response was missing an expected object or field.
    ///
    /// An invalid or placeholder API key also lands here: Alpha Vantage
    /// answers 200 with a body that lacks the quote object, so it cannot be
    /// told apart from a malformed response.
    #[error("Data missing from response: {0}")]
    MissingData(String),

    /// A field was present but its content could not be coerced to the
    /// expected type.
    #[error("Data format unexpected: {0}")]
    Data(String),

    /// Client configuration was invalid (e.g. an empty API key).
    #[error("Configuration error: {0}")]
    Config(String),

    /// An I/O error while writing or reading a persisted snapshot.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
