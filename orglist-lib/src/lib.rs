mod error;
mod github_client;
mod link_header;
mod logging_middleware;
mod object_model;
mod page;
mod repo_lister;

pub use self::error::{GitHubClientError, GitHubClientResult};
pub use self::github_client::{GitHubClient, DEFAULT_API_URL};
pub use self::object_model::{Rate, RateLimits, Repo};
pub use reqwest::StatusCode;
