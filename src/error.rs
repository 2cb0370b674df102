use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("question {id} not found in catalog")]
    NotFound { id: u32 },

    #[error("request to {url} failed with status code {status}")]
    Status { url: String, status: StatusCode },

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("unexpected response from {url}: {reason}")]
    Parse { url: String, reason: String },

    #[error("failed to render output: {0}")]
    Render(#[from] askama::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ScrapeError {
    pub fn parse(url: impl Into<String>, reason: impl ToString) -> Self {
        Self::Parse {
            url: url.into(),
            reason: reason.to_string(),
        }
    }
}
