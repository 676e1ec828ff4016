use reqwest::{StatusCode, Url};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GitHubClientError {
    #[error("GET {url} failed with status {status}")]
    Status { url: Url, status: StatusCode },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type GitHubClientResult<T> = std::result::Result<T, GitHubClientError>;
