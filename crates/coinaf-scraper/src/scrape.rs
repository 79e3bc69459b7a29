//! The category scrape routine: paginated listing fetch, per-card detail
//! fetch, field extraction, and continue-on-error collection.

use scraper::Html;

use coinaf_core::{Category, ProductRecord, ResultSet};

use crate::client::{resolve_detail_url, CategoryClient};
use crate::error::{ItemSkip, ScraperError};
use crate::extract::FieldExtractors;

impl CategoryClient {
    /// Scrapes `page_count` listing pages of a category into a [`ResultSet`].
    ///
    /// Listing pages are fetched in order, cards within a page in document
    /// order, and every record lands in discovery order. A listing-page fetch
    /// failure (network error or non-2xx status) is fatal: the scrape aborts
    /// with no partial result. Per-item failures — missing detail anchor,
    /// unreachable detail page, missing title or price element — drop only
    /// that item; the reason is logged and the scrape continues.
    ///
    /// All fetches are strictly sequential, one attempt each.
    ///
    /// # Errors
    ///
    /// Propagates [`ScraperError`] from any listing-page fetch.
    pub async fn scrape_category(
        &self,
        base_url: &str,
        category: Category,
        page_count: u32,
    ) -> Result<ResultSet, ScraperError> {
        let extractors = FieldExtractors::new();
        let mut results = ResultSet::new();
        let mut skipped = 0usize;

        for page in 1..=page_count {
            let body = self
                .fetch_listing_page(base_url, category.as_path(), page)
                .await?;

            // `Html` is not Send; collect the links and drop the document
            // before the detail fetches so the future stays Send.
            let links: Vec<Option<String>> = {
                let document = Html::parse_document(&body);
                extractors
                    .listing_cards(&document)
                    .into_iter()
                    .map(|card| extractors.detail_link(card))
                    .collect()
            };

            tracing::debug!(%category, page, cards = links.len(), "parsed listing page");

            for (card, link) in links.into_iter().enumerate() {
                match self.scrape_item(base_url, link, &extractors).await {
                    Ok(record) => results.push(record),
                    Err(skip) => {
                        skipped += 1;
                        tracing::warn!(%category, page, card, reason = %skip, "skipping listing card");
                    }
                }
            }
        }

        tracing::info!(
            %category,
            pages = page_count,
            records = results.len(),
            skipped,
            "scrape finished"
        );
        Ok(results)
    }

    /// Scrapes one listing card into a record, or a skip reason.
    async fn scrape_item(
        &self,
        base_url: &str,
        link: Option<String>,
        extractors: &FieldExtractors,
    ) -> Result<ProductRecord, ItemSkip> {
        let relative = link.ok_or(ItemSkip::MissingDetailLink)?;
        let url = resolve_detail_url(base_url, &relative);

        let body = self
            .fetch_detail_page(&url)
            .await
            .map_err(|e| ItemSkip::DetailFetch {
                url: url.clone(),
                reason: e.to_string(),
            })?;

        let document = Html::parse_document(&body);
        let title = extractors.title(&document).ok_or_else(|| ItemSkip::MissingField {
            url: url.clone(),
            field: "title",
        })?;
        let price = extractors.price(&document).ok_or_else(|| ItemSkip::MissingField {
            url: url.clone(),
            field: "price",
        })?;
        let location = extractors.location(&document);
        let image_urls = extractors.image_urls(&document);

        Ok(ProductRecord {
            title,
            price,
            location,
            image_urls,
        })
    }
}
