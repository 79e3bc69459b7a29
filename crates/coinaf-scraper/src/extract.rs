//! Per-field HTML extraction for listing and detail pages.
//!
//! All structural coupling to the site's markup lives here: one pre-compiled
//! selector and one function per field, so a markup change is a localized
//! edit rather than a rewrite of the scrape routine.

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use coinaf_core::LOCATION_UNKNOWN;

/// Compiled selectors for every field the scraper reads.
pub(crate) struct FieldExtractors {
    card: Selector,
    detail_link: Selector,
    title: Selector,
    price: Selector,
    extras_span: Selector,
    carousel_cell: Selector,
    background_url: Regex,
}

impl FieldExtractors {
    pub(crate) fn new() -> Self {
        // Static selectors and patterns; a parse failure here is a programming
        // error, not a runtime condition.
        Self {
            card: Selector::parse("div.col.s6.m4.l3").expect("valid selector"),
            detail_link: Selector::parse(
                "a.card-image.ad__card-image.waves-block.waves-light",
            )
            .expect("valid selector"),
            title: Selector::parse("h1.title.title-ad.hide-on-large-and-down")
                .expect("valid selector"),
            price: Selector::parse("p.price").expect("valid selector"),
            extras_span: Selector::parse("p.extras span.valign-wrapper").expect("valid selector"),
            carousel_cell: Selector::parse("div.swiper-wrapper div[style]")
                .expect("valid selector"),
            background_url: Regex::new(r"url\((.+?)\)").expect("valid regex"),
        }
    }

    /// All listing-card containers on a listing page, in document order.
    pub(crate) fn listing_cards<'a>(&self, document: &'a Html) -> Vec<ElementRef<'a>> {
        document.select(&self.card).collect()
    }

    /// The relative detail-page link of one card, if its anchor is present.
    pub(crate) fn detail_link(&self, card: ElementRef<'_>) -> Option<String> {
        card.select(&self.detail_link)
            .next()
            .and_then(|a| a.value().attr("href"))
            .map(str::to_owned)
    }

    /// Detail-page title heading text, trimmed. `None` when the heading is
    /// absent — the item has no fallback and is dropped by the caller.
    pub(crate) fn title(&self, document: &Html) -> Option<String> {
        document.select(&self.title).next().map(element_text)
    }

    /// Detail-page price text with the `CFA` marker and spaces removed.
    /// `None` when the price element is absent — no fallback, item dropped.
    pub(crate) fn price(&self, document: &Html) -> Option<String> {
        document
            .select(&self.price)
            .next()
            .map(|el| clean_price(&element_text(el)))
    }

    /// Location from the second `valign-wrapper` span of the extras block.
    /// Falls back to the `"N/A"` sentinel when the block is missing or has
    /// fewer than two spans.
    pub(crate) fn location(&self, document: &Html) -> String {
        document
            .select(&self.extras_span)
            .nth(1)
            .map_or_else(|| LOCATION_UNKNOWN.to_owned(), element_text)
    }

    /// Image URLs from carousel cells whose inline style declares a
    /// `background-image`. Cells without a matching `url(...)` are skipped
    /// silently; a missing carousel yields an empty list.
    pub(crate) fn image_urls(&self, document: &Html) -> Vec<String> {
        document
            .select(&self.carousel_cell)
            .filter_map(|el| {
                let style = el.value().attr("style")?;
                if !style.contains("background-image") {
                    return None;
                }
                let url = self.background_url.captures(style)?.get(1)?.as_str();
                Some(url.trim_matches(|c| c == '"' || c == '\'').to_owned())
            })
            .collect()
    }
}

/// Concatenated, trimmed text content of an element.
fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_owned()
}

/// Strips every literal `CFA` marker and all whitespace from a raw price
/// string: `"12 000 CFA"` becomes `"12000"`.
pub(crate) fn clean_price(raw: &str) -> String {
    raw.replace("CFA", "")
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;
