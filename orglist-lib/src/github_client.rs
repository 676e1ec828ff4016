use crate::error::{GitHubClientError, GitHubClientResult};
use crate::link_header;
use crate::logging_middleware::LoggingMiddleware;
use crate::object_model::{RateLimits, Repo};
use crate::page::{Page, PageCursor};
use crate::repo_lister::{self, OrgRepoSource};
use anyhow::anyhow;
use async_trait::async_trait;
use log::Level;
use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::{Client, IntoUrl, Url};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use serde::de::DeserializeOwned;

pub const DEFAULT_API_URL: &str = "https://api.github.com/";

const CLIENT_USER_AGENT: &str = "orglist";
const GITHUB_API_VERSION: &str = "2022-11-28";

pub struct GitHubClient {
    url: Url,
    token: String,
    client: ClientWithMiddleware,
}

impl GitHubClient {
    /// Creates a client for the REST API rooted at `url`, authenticating every request with
    /// `token`. Requests and responses are logged at `log_level`.
    pub fn new<U>(url: U, token: &str, log_level: Level) -> GitHubClientResult<Self>
    where
        U: IntoUrl,
    {
        let url = url
            .into_url()
            .map_err(|e| GitHubClientError::Other(anyhow!(e)))?;
        if url.cannot_be_a_base() {
            return Err(GitHubClientError::Other(anyhow!(
                "{url} cannot be used as an API base URL"
            )));
        }

        let client = ClientBuilder::new(Client::new())
            .with(LoggingMiddleware::new(log_level))
            .build();

        Ok(Self {
            url,
            token: String::from(token),
            client,
        })
    }

    /// Queries the caller's current API quota. Fails when the token is rejected.
    pub async fn rate_limits(&self) -> GitHubClientResult<RateLimits> {
        let (rate_limits, _) = self
            .get_json::<RateLimits>(self.endpoint(&["rate_limit"])?, None)
            .await?;
        Ok(rate_limits)
    }

    /// Lists every repository of `org` visible to the token's owner, across all pages.
    pub async fn list_org_repos(&self, org: &str) -> GitHubClientResult<Vec<Repo>> {
        repo_lister::list_org_repos(self, org).await
    }

    fn endpoint(&self, segments: &[&str]) -> GitHubClientResult<Url> {
        let mut url = self.url.clone();
        url.path_segments_mut()
            .map_err(|()| anyhow!("{} cannot be used as an API base URL", self.url))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T>(
        &self,
        url: Url,
        page: Option<PageCursor>,
    ) -> GitHubClientResult<(T, Option<PageCursor>)>
    where
        T: DeserializeOwned,
    {
        let mut request_builder = self.client.get(url.clone());
        if let Some(x) = page {
            request_builder = request_builder.query(&[("page", x.get())]);
        }

        let response = request_builder
            .header(USER_AGENT, CLIENT_USER_AGENT)
            .header(ACCEPT, "application/vnd.github+json")
            .header("X-GitHub-Api-Version", GITHUB_API_VERSION)
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|e| GitHubClientError::Other(anyhow!(e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GitHubClientError::Status {
                url: response.url().clone(),
                status,
            });
        }

        let next = link_header::next_page(response.headers())?;

        Ok((
            response
                .json::<T>()
                .await
                .map_err(|e| GitHubClientError::Other(anyhow!(e)))?,
            next,
        ))
    }
}

#[async_trait]
impl OrgRepoSource for GitHubClient {
    async fn org_repos_page(
        &self,
        org: &str,
        page: Option<PageCursor>,
    ) -> GitHubClientResult<Page<Repo>> {
        let (items, next) = self
            .get_json::<Vec<Repo>>(self.endpoint(&["orgs", org, "repos"])?, page)
            .await?;
        Ok(Page { items, next })
    }
}
