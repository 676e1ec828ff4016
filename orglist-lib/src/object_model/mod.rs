mod rate_limits;
mod repo;

pub use self::rate_limits::{Rate, RateLimits};
pub use self::repo::Repo;
