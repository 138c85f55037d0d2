use thiserror::Error;

/// Reasons a region's payload could not be retrieved. None of these abort a
/// run: the fetcher reports them and the region yields zero rows.
#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Invalid search URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("Unexpected HTTP status {0}")]
    Http(reqwest::StatusCode),
    #[error("Response body shorter than the {0}-byte prefix")]
    TruncatedBody(usize),
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl From<reqwest::Error> for ScraperError {
    fn from(e: reqwest::Error) -> Self {
        ScraperError::Network(e.to_string())
    }
}
