use thiserror::Error;

/// Fatal scrape errors. Any of these aborts the whole operation with no
/// partial result.
#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("invalid base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}

/// Per-item skip reasons. These are swallowed at the item boundary: the card
/// contributes no record, the reason is logged, and the scrape continues.
///
/// Kept as a separate type from [`ScraperError`] so callers and tests can
/// distinguish abort from continue deterministically.
#[derive(Debug, Error)]
pub enum ItemSkip {
    #[error("listing card has no detail-page link")]
    MissingDetailLink,

    #[error("detail page {url} unreachable: {reason}")]
    DetailFetch { url: String, reason: String },

    #[error("detail page {url} is missing its {field} element")]
    MissingField { url: String, field: &'static str },
}
