use http::Extensions;
use log::{log, Level};
use reqwest::{Request, Response};
use reqwest_middleware::{Middleware, Next, Result};
use std::time::Instant;

const RATE_LIMIT_REMAINING: &str = "x-ratelimit-remaining";

/// Logs every request sent through the client and the outcome of each.
pub struct LoggingMiddleware {
    level: Level,
}

impl LoggingMiddleware {
    pub fn new(level: Level) -> Self {
        Self { level }
    }
}

#[async_trait::async_trait]
impl Middleware for LoggingMiddleware {
    async fn handle(
        &self,
        request: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> Result<Response> {
        let method = request.method().clone();
        let url = request.url().clone();
        log!(self.level, "begin request {} {}", method, url);

        let start = Instant::now();
        let result = next.run(request, extensions).await;
        let elapsed = start.elapsed();

        match result.as_ref() {
            Ok(response) => {
                let remaining = response
                    .headers()
                    .get(RATE_LIMIT_REMAINING)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("?");
                log!(
                    self.level,
                    "received response {} for {} {} in {:?} (rate limit remaining {})",
                    response.status(),
                    method,
                    url,
                    elapsed,
                    remaining
                );
            }
            Err(e) => {
                log!(
                    self.level,
                    "request {} {} failed after {:?}: {:?}",
                    method,
                    url,
                    elapsed,
                    e
                );
            }
        }
        result
    }
}
