//! Page walker
//!
//! Repeatedly requests pages and feeds each response to the endpoint's
//! paginator. This is the caller side of pagination; the paginators never
//! see the network.

use crate::error::Result;
use crate::http::HttpClient;
use crate::loader::EndpointDefinition;
use crate::pagination::{PaginationResult, Paginator, ResponseContext};
use serde_json::Value;
use tracing::{debug, info, warn};

/// Walk an endpoint from `start_url`, calling `on_page` for every page
///
/// Stops when a page has no `next` link, when `next` points back at the page
/// just fetched, or after `max_pages` pages. Returns the number of pages
/// fetched.
pub async fn walk<F>(
    client: &HttpClient,
    endpoint: &EndpointDefinition,
    start_url: &str,
    max_pages: Option<usize>,
    mut on_page: F,
) -> Result<usize>
where
    F: FnMut(&PaginationResult) -> Result<()>,
{
    let api = endpoint.api_context();
    let mut url = start_url.to_string();
    let mut pages = 0;

    loop {
        debug!("Fetching page {} of '{}': {}", pages + 1, endpoint.name, url);
        let response = client.get(&url).await?;
        let context = ResponseContext::from_response(&response);
        let body: Value = response.json().await?;

        let result = endpoint.pagination.paginate(&api, &context, &body)?;
        pages += 1;
        on_page(&result)?;

        if max_pages.is_some_and(|max| pages >= max) {
            info!("Stopping '{}' after {} pages", endpoint.name, pages);
            break;
        }
        let Some(next) = result.next() else {
            break;
        };
        let next_url = api.resolve(&context.url, next)?;
        if next_url == url {
            warn!(
                "Stopping '{}': next link points back at {}",
                endpoint.name, url
            );
            break;
        }
        url = next_url;
    }

    Ok(pages)
}
