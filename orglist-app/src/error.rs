use orglist_lib::GitHubClientError;
use std::io::Error as IoError;
use std::path::PathBuf;
use thiserror::Error;

/// Every way a run can end other than success. Each maps to its own exit code.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unable to create GitHub client: {0}")]
    Client(#[source] GitHubClientError),

    #[error("Unable to write output: {0}")]
    Output(#[from] IoError),

    #[error("ERR This command takes exactly one argument")]
    Usage,

    #[error("Token file not found at {}.", path.display())]
    Auth { path: PathBuf },

    #[error("Problem in getting rate limit information: {0}")]
    RateLimit(#[source] GitHubClientError),

    #[error("{0}")]
    PageFetch(#[source] GitHubClientError),
}

impl AppError {
    // 5 is reserved.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Client(_) | Self::Output(_) => 1,
            Self::Usage => 2,
            Self::Auth { .. } => 3,
            Self::RateLimit(_) => 4,
            Self::PageFetch(_) => 6,
        }
    }
}
