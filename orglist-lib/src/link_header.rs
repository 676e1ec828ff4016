use crate::error::{GitHubClientError, GitHubClientResult};
use crate::page::PageCursor;
use anyhow::anyhow;
use reqwest::header::{HeaderMap, LINK};
use reqwest::Url;

/// Extracts the `rel="next"` page number from the `Link` header of a response.
///
/// A missing header or a header without a `next` relation means the listing is complete.
pub(crate) fn next_page(headers: &HeaderMap) -> GitHubClientResult<Option<PageCursor>> {
    let Some(link_header) = headers.get(LINK) else {
        return Ok(None);
    };

    let link_header = link_header
        .to_str()
        .map_err(|e| GitHubClientError::Other(anyhow!(e)))?;

    let Some(next_url) = link_header.split(',').find_map(next_target) else {
        return Ok(None);
    };

    let next_url = next_url
        .parse::<Url>()
        .map_err(|e| GitHubClientError::Other(anyhow!(e)))?;

    page_number(&next_url).map(Some)
}

/// `<target>; rel="next"` yields `target`; any other link value yields nothing.
fn next_target(link_value: &str) -> Option<&str> {
    let (target, params) = link_value.trim().split_once(';')?;
    let target = target.trim_end().strip_prefix('<')?.strip_suffix('>')?;
    params
        .split(';')
        .any(|param| param.trim() == r#"rel="next""#)
        .then_some(target)
}

fn page_number(url: &Url) -> GitHubClientResult<PageCursor> {
    let (_, value) = url
        .query_pairs()
        .find(|(n, _)| n == "page")
        .ok_or_else(|| anyhow!("page missing from query string of {url}"))?;

    let page = value
        .parse::<u32>()
        .map_err(|e| GitHubClientError::Other(anyhow!(e)))?;

    PageCursor::new(page)
        .ok_or_else(|| GitHubClientError::Other(anyhow!("page 0 in query string of {url}")))
}
