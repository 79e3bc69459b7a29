//! Domain types shared by the scraper and the CLI.
//!
//! The CSV column names are inherited from the legacy exports
//! (`type habits;prix;adresse;image_lien`) and are part of the external
//! contract: readers and writers of the data files both key on them, so the
//! serde renames below must not change.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fixed column order of the tabular schema. Every `ResultSet`, including an
/// empty one, carries exactly these four columns.
pub const CSV_COLUMNS: [&str; 4] = ["type habits", "prix", "adresse", "image_lien"];

/// Sentinel used when a detail page has no usable location block.
pub const LOCATION_UNKNOWN: &str = "N/A";

/// The categories the site exposes under `/categorie/<segment>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    VetementsHomme,
    ChaussuresHomme,
    VetementsEnfants,
    ChaussuresEnfants,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::VetementsHomme,
        Category::ChaussuresHomme,
        Category::VetementsEnfants,
        Category::ChaussuresEnfants,
    ];

    /// URL path segment for this category.
    #[must_use]
    pub fn as_path(self) -> &'static str {
        match self {
            Category::VetementsHomme => "vetements-homme",
            Category::ChaussuresHomme => "chaussures-homme",
            Category::VetementsEnfants => "vetements-enfants",
            Category::ChaussuresEnfants => "chaussures-enfants",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_path())
    }
}

#[derive(Debug, Error)]
#[error("unknown category \"{0}\"; expected one of: vetements-homme, chaussures-homme, vetements-enfants, chaussures-enfants")]
pub struct UnknownCategory(String);

impl std::str::FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_path() == s)
            .ok_or_else(|| UnknownCategory(s.to_owned()))
    }
}

/// One scraped item. Exactly four fields, in the fixed schema order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Item title/type from the detail-page heading, trimmed.
    #[serde(rename = "type habits")]
    pub title: String,

    /// Raw price text with the `CFA` marker and all spaces removed. Kept as
    /// text; analytics coerce it to a number and drop non-numeric values.
    #[serde(rename = "prix")]
    pub price: String,

    /// Location string, or [`LOCATION_UNKNOWN`] when the detail page had no
    /// usable extras block.
    #[serde(rename = "adresse")]
    pub location: String,

    /// Image URLs from the detail-page carousel, in document order. May be
    /// empty.
    #[serde(rename = "image_lien", with = "image_urls_field")]
    pub image_urls: Vec<String>,
}

/// Ordered collection of [`ProductRecord`]s, in scrape order: card order
/// within a listing page, then page number order. Duplicates are allowed and
/// never deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    records: Vec<ProductRecord>,
}

impl ResultSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record, preserving discovery order.
    pub fn push(&mut self, record: ProductRecord) {
        self.records.push(record);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn records(&self) -> &[ProductRecord] {
        &self.records
    }

    #[must_use]
    pub fn into_records(self) -> Vec<ProductRecord> {
        self.records
    }
}

impl FromIterator<ProductRecord> for ResultSet {
    fn from_iter<I: IntoIterator<Item = ProductRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a ProductRecord;
    type IntoIter = std::slice::Iter<'a, ProductRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// CSV cells are flat text, so the URL list is stored joined with `", "`.
/// Legacy files written by the previous tooling carry the bracketed
/// `['url1', 'url2']` form instead; the deserializer accepts both.
mod image_urls_field {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(urls: &[String], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&urls.join(", "))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<String>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(parse_url_list(&raw))
    }

    pub(super) fn parse_url_list(raw: &str) -> Vec<String> {
        raw.trim()
            .trim_start_matches('[')
            .trim_end_matches(']')
            .split(',')
            .map(|part| part.trim().trim_matches(|c| c == '"' || c == '\'').to_owned())
            .filter(|part| !part.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn category_round_trips_through_path_segment() {
        for category in Category::ALL {
            assert_eq!(Category::from_str(category.as_path()).unwrap(), category);
        }
    }

    #[test]
    fn category_rejects_unknown_segment() {
        let err = Category::from_str("meubles").unwrap_err();
        assert!(err.to_string().contains("meubles"));
    }

    #[test]
    fn url_list_parses_joined_form() {
        assert_eq!(
            image_urls_field::parse_url_list("https://a/1.jpg, https://a/2.jpg"),
            vec!["https://a/1.jpg", "https://a/2.jpg"]
        );
    }

    #[test]
    fn url_list_parses_legacy_bracketed_form() {
        assert_eq!(
            image_urls_field::parse_url_list("['https://a/1.jpg', 'https://a/2.jpg']"),
            vec!["https://a/1.jpg", "https://a/2.jpg"]
        );
    }

    #[test]
    fn url_list_empty_cell_yields_no_urls() {
        assert!(image_urls_field::parse_url_list("").is_empty());
        assert!(image_urls_field::parse_url_list("[]").is_empty());
    }

    #[test]
    fn result_set_preserves_insertion_order_and_duplicates() {
        let record = ProductRecord {
            title: "Chemise".to_owned(),
            price: "5000".to_owned(),
            location: "Dakar".to_owned(),
            image_urls: vec![],
        };
        let set: ResultSet = vec![record.clone(), record.clone()].into_iter().collect();
        assert_eq!(set.len(), 2);
        assert_eq!(set.records()[0], set.records()[1]);
    }
}
