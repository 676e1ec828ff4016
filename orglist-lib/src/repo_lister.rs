use crate::error::GitHubClientResult;
use crate::object_model::Repo;
use crate::page::{Page, PageCursor};
use async_trait::async_trait;
use log::debug;

/// Anything that can serve one page of an organization's repository listing.
#[async_trait]
pub trait OrgRepoSource: Sync {
    /// Fetches page `page` of `org`'s repositories, or the first page when `page` is `None`.
    async fn org_repos_page(
        &self,
        org: &str,
        page: Option<PageCursor>,
    ) -> GitHubClientResult<Page<Repo>>;
}

/// Follows next-page cursors from the first page until the source reports none, keeping
/// repositories in the order the pages arrived.
///
/// The first failing page aborts the listing and everything fetched so far is dropped.
/// There is no upper bound on the number of pages.
pub async fn list_org_repos<S>(source: &S, org: &str) -> GitHubClientResult<Vec<Repo>>
where
    S: OrgRepoSource + ?Sized,
{
    let mut all_repos = Vec::new();
    let mut cursor = None;

    loop {
        let Page { items, next } = source.org_repos_page(org, cursor).await?;
        debug!(
            "page {} of {} returned {} repos, next page {}",
            cursor.map_or(1, PageCursor::get),
            org,
            items.len(),
            next.map_or_else(|| String::from("none"), |n| n.to_string())
        );
        all_repos.extend(items);

        let Some(next) = next else {
            return Ok(all_repos);
        };
        cursor = Some(next);
    }
}
