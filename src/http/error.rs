use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Search endpoint answered with status {0}")]
    Status(u16),

    #[error("Decoding error: {0}")]
    Decode(String),

    #[error("Invalid search endpoint: {0}")]
    Endpoint(String),
}

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        SearchError::Transport(err.to_string())
    }
}
