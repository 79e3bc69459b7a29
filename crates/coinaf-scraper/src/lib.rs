pub mod client;
pub mod error;
mod extract;
mod scrape;

pub use client::CategoryClient;
pub use error::{ItemSkip, ScraperError};
