//! HTTP client for CoinAfrique listing and detail pages.

use std::time::Duration;

use reqwest::Client;

use crate::error::ScraperError;

/// Thin wrapper around `reqwest::Client` with the configured timeout and
/// `User-Agent`. Every fetch is attempted exactly once: no retries, no
/// backoff, one outstanding request at a time.
///
/// The site origin is a per-call argument rather than client state so tests
/// can point the same client at a local mock server.
pub struct CategoryClient {
    client: Client,
}

impl CategoryClient {
    /// Creates a `CategoryClient` with the given timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Fetches one listing page of a category and returns its HTML body.
    ///
    /// Page 1 is `<base>/categorie/<category>` with no query parameter;
    /// pages 2 and up carry `?page=<n>`.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::InvalidBaseUrl`] — `base_url` does not form a valid URL.
    /// - [`ScraperError::UnexpectedStatus`] — any non-2xx response.
    /// - [`ScraperError::Http`] — network or TLS failure.
    pub async fn fetch_listing_page(
        &self,
        base_url: &str,
        category: &str,
        page: u32,
    ) -> Result<String, ScraperError> {
        let url = Self::listing_url(base_url, category, page)?;
        self.fetch_page(&url).await
    }

    /// Fetches one detail page and returns its HTML body.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`Self::fetch_listing_page`], minus URL construction.
    pub(crate) async fn fetch_detail_page(&self, url: &str) -> Result<String, ScraperError> {
        self.fetch_page(url).await
    }

    async fn fetch_page(&self, url: &str) -> Result<String, ScraperError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }
        Ok(response.text().await?)
    }

    /// Builds the listing-page URL for a category. The `page` query parameter
    /// is omitted for page 1.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::InvalidBaseUrl`] if the base URL plus category
    /// segment cannot be parsed as a URL.
    fn listing_url(base_url: &str, category: &str, page: u32) -> Result<String, ScraperError> {
        let base = base_url.trim_end_matches('/');
        let raw = format!("{base}/categorie/{category}");
        let mut url =
            reqwest::Url::parse(&raw).map_err(|e| ScraperError::InvalidBaseUrl {
                base_url: base_url.to_owned(),
                reason: e.to_string(),
            })?;

        if page >= 2 {
            url.query_pairs_mut()
                .append_pair("page", &page.to_string());
        }

        Ok(url.to_string())
    }
}

/// Resolves a detail-page link found in a listing card to an absolute URL by
/// prefixing the site origin. Links that are already absolute pass through.
pub(crate) fn resolve_detail_url(base_url: &str, link: &str) -> String {
    if link.starts_with("http://") || link.starts_with("https://") {
        return link.to_owned();
    }
    let base = base_url.trim_end_matches('/');
    format!("{base}{link}")
}
