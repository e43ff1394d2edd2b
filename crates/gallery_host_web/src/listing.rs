//! Directory fetcher backed by the browser Fetch API.

use gallery_host::{
    decode_listing, listing_url, DirectoryFetchFuture, DirectoryFetcher, ListingError,
    ListingResult,
};

use crate::bridge;

#[derive(Debug, Clone)]
/// Browser directory fetcher issuing `GET {path}?{listing_query}`.
pub struct WebDirectoryFetcher {
    listing_query: String,
}

impl WebDirectoryFetcher {
    /// Creates a fetcher appending `listing_query` to every directory path.
    pub fn new(listing_query: impl Into<String>) -> Self {
        Self {
            listing_query: listing_query.into(),
        }
    }

    /// Returns the listing request URL for `path`.
    pub fn request_url(&self, path: &str) -> String {
        listing_url(path, &self.listing_query)
    }
}

impl Default for WebDirectoryFetcher {
    fn default() -> Self {
        Self::new(gallery_host::DEFAULT_LISTING_QUERY)
    }
}

impl DirectoryFetcher for WebDirectoryFetcher {
    fn fetch_listing<'a>(&'a self, path: &'a str) -> DirectoryFetchFuture<'a, ListingResult> {
        let url = self.request_url(path);
        Box::pin(async move {
            let response = match bridge::fetch_text(&url).await {
                Ok(response) => response,
                Err(message) => return Err(ListingError::Fetch { url, message }),
            };
            if !response.ok {
                return Err(ListingError::Response {
                    url,
                    status: response.status,
                });
            }
            decode_listing(&url, &response.body)
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn request_url_uses_configured_query() {
        assert_eq!(
            WebDirectoryFetcher::default().request_url("/photos"),
            "/photos?json=true"
        );
        assert_eq!(
            WebDirectoryFetcher::new("format=json").request_url("/"),
            "/?format=json"
        );
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn off_browser_fetch_is_a_fetch_error() {
        let fetcher = WebDirectoryFetcher::default();
        let err = block_on(fetcher.fetch_listing("/photos")).expect_err("no fetch off-browser");
        assert!(
            matches!(err, ListingError::Fetch { ref url, .. } if url == "/photos?json=true"),
            "err={err:?}"
        );
    }
}
