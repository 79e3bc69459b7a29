//! Price analytics over a scraped or loaded result set.
//!
//! These are the data-level counterparts of the dashboard views: summary
//! statistics, an equal-width price histogram, a top-N ranking, a price-range
//! filter, and a per-location breakdown. Rendering is the caller's concern.

use std::collections::HashMap;

use crate::types::{ProductRecord, ResultSet};

/// Summary statistics over the numeric prices of a result set.
///
/// `std` is the sample standard deviation (n − 1 denominator) and is absent
/// for fewer than two values. Quartiles use linear interpolation.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSummary {
    pub count: usize,
    pub mean: f64,
    pub std: Option<f64>,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

/// One bin of an equal-width histogram: `[lower, upper)` except the last bin,
/// which is closed on both ends.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Parses each record's price as a number, in record order, dropping values
/// that do not parse (the coerce-to-absent behavior).
#[must_use]
pub fn numeric_prices(set: &ResultSet) -> Vec<f64> {
    set.records()
        .iter()
        .filter_map(|r| r.price.parse::<f64>().ok())
        .collect()
}

/// Computes [`PriceSummary`] statistics, or `None` when `prices` is empty.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn describe(prices: &[f64]) -> Option<PriceSummary> {
    if prices.is_empty() {
        return None;
    }

    let mut sorted = prices.to_vec();
    sorted.sort_by(f64::total_cmp);

    let count = sorted.len();
    let mean = sorted.iter().sum::<f64>() / count as f64;
    let std = (count >= 2).then(|| {
        let variance =
            sorted.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (count - 1) as f64;
        variance.sqrt()
    });

    Some(PriceSummary {
        count,
        mean,
        std,
        min: sorted[0],
        q1: quantile(&sorted, 0.25),
        median: quantile(&sorted, 0.5),
        q3: quantile(&sorted, 0.75),
        max: sorted[count - 1],
    })
}

/// Buckets `prices` into `bins` equal-width bins spanning the observed range.
///
/// Returns an empty vector when `prices` is empty or `bins` is zero. When all
/// prices are equal, a single degenerate bin holds everything.
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn histogram(prices: &[f64], bins: usize) -> Vec<HistogramBin> {
    if prices.is_empty() || bins == 0 {
        return Vec::new();
    }

    let min = prices.iter().copied().fold(f64::INFINITY, f64::min);
    let max = prices.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if min == max {
        return vec![HistogramBin {
            lower: min,
            upper: max,
            count: prices.len(),
        }];
    }

    let width = (max - min) / bins as f64;
    let mut counts = vec![0usize; bins];
    for &price in prices {
        let index = (((price - min) / width) as usize).min(bins - 1);
        counts[index] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            lower: min + width * i as f64,
            upper: min + width * (i + 1) as f64,
            count,
        })
        .collect()
}

/// The `n` records with the highest numeric prices, descending. Records with
/// non-numeric prices are excluded; ties keep discovery order.
#[must_use]
pub fn top_n(set: &ResultSet, n: usize) -> Vec<(&ProductRecord, f64)> {
    let mut priced: Vec<(&ProductRecord, f64)> = set
        .records()
        .iter()
        .filter_map(|r| r.price.parse::<f64>().ok().map(|p| (r, p)))
        .collect();
    priced.sort_by(|a, b| b.1.total_cmp(&a.1));
    priced.truncate(n);
    priced
}

/// Records whose numeric price lies in the inclusive `[min, max]` range.
/// Records with non-numeric prices are excluded.
#[must_use]
pub fn filter_by_price(set: &ResultSet, min: f64, max: f64) -> ResultSet {
    set.records()
        .iter()
        .filter(|r| {
            r.price
                .parse::<f64>()
                .is_ok_and(|p| p >= min && p <= max)
        })
        .cloned()
        .collect()
}

/// Per-location record counts, most frequent first; ties break by location
/// name so the output is deterministic.
#[must_use]
pub fn location_breakdown(set: &ResultSet) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for record in set {
        *counts.entry(record.location.as_str()).or_insert(0) += 1;
    }

    let mut breakdown: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(location, count)| (location.to_owned(), count))
        .collect();
    breakdown.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    breakdown
}

/// Linear-interpolation quantile over an ascending-sorted slice.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let position = q * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let fraction = position - lower as f64;
    sorted[lower] + fraction * (sorted[upper] - sorted[lower])
}

#[cfg(test)]
#[path = "analytics_test.rs"]
mod tests;
