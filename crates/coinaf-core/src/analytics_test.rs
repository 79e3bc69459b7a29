use super::*;
use crate::types::ProductRecord;

fn record(title: &str, price: &str, location: &str) -> ProductRecord {
    ProductRecord {
        title: title.to_owned(),
        price: price.to_owned(),
        location: location.to_owned(),
        image_urls: vec![],
    }
}

fn sample_set() -> ResultSet {
    vec![
        record("Chemise", "12000", "Dakar"),
        record("Boubou", "8000", "Thiès"),
        record("Sandales", "3500", "Dakar"),
        record("Montre", "sur demande", "Dakar"),
        record("Costume", "25000", "Saint-Louis"),
    ]
    .into_iter()
    .collect()
}

// -----------------------------------------------------------------------
// numeric_prices
// -----------------------------------------------------------------------

#[test]
fn numeric_prices_drops_non_numeric_values() {
    let prices = numeric_prices(&sample_set());
    assert_eq!(prices, vec![12000.0, 8000.0, 3500.0, 25000.0]);
}

#[test]
fn numeric_prices_of_empty_set_is_empty() {
    assert!(numeric_prices(&ResultSet::new()).is_empty());
}

// -----------------------------------------------------------------------
// describe
// -----------------------------------------------------------------------

#[test]
fn describe_returns_none_for_no_prices() {
    assert!(describe(&[]).is_none());
}

#[test]
fn describe_single_value_has_no_std() {
    let summary = describe(&[100.0]).unwrap();
    assert_eq!(summary.count, 1);
    assert!(summary.std.is_none());
    assert_eq!(summary.min, 100.0);
    assert_eq!(summary.max, 100.0);
    assert_eq!(summary.median, 100.0);
}

#[test]
fn describe_matches_hand_computed_statistics() {
    let summary = describe(&[1.0, 2.0, 3.0, 4.0]).unwrap();
    assert_eq!(summary.count, 4);
    assert!((summary.mean - 2.5).abs() < 1e-9);
    // Sample std of 1..4 is sqrt(5/3).
    let expected_std = (5.0f64 / 3.0).sqrt();
    assert!((summary.std.unwrap() - expected_std).abs() < 1e-9);
    assert_eq!(summary.min, 1.0);
    assert!((summary.q1 - 1.75).abs() < 1e-9);
    assert!((summary.median - 2.5).abs() < 1e-9);
    assert!((summary.q3 - 3.25).abs() < 1e-9);
    assert_eq!(summary.max, 4.0);
}

// -----------------------------------------------------------------------
// histogram
// -----------------------------------------------------------------------

#[test]
fn histogram_of_empty_prices_is_empty() {
    assert!(histogram(&[], 20).is_empty());
    assert!(histogram(&[1.0], 0).is_empty());
}

#[test]
fn histogram_counts_sum_to_input_length() {
    let prices = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
    let bins = histogram(&prices, 4);
    assert_eq!(bins.len(), 4);
    assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), prices.len());
}

#[test]
fn histogram_places_max_value_in_last_bin() {
    let bins = histogram(&[0.0, 10.0], 2);
    assert_eq!(bins[0].count, 1);
    assert_eq!(bins[1].count, 1);
    assert_eq!(bins[1].upper, 10.0);
}

#[test]
fn histogram_of_identical_prices_is_one_degenerate_bin() {
    let bins = histogram(&[5.0, 5.0, 5.0], 20);
    assert_eq!(bins.len(), 1);
    assert_eq!(bins[0].lower, 5.0);
    assert_eq!(bins[0].upper, 5.0);
    assert_eq!(bins[0].count, 3);
}

// -----------------------------------------------------------------------
// top_n
// -----------------------------------------------------------------------

#[test]
fn top_n_ranks_by_price_descending() {
    let set = sample_set();
    let top = top_n(&set, 2);
    assert_eq!(top.len(), 2);
    assert_eq!(top[0].0.title, "Costume");
    assert_eq!(top[0].1, 25000.0);
    assert_eq!(top[1].0.title, "Chemise");
}

#[test]
fn top_n_excludes_non_numeric_prices() {
    let set = sample_set();
    let top = top_n(&set, 10);
    assert_eq!(top.len(), 4);
    assert!(top.iter().all(|(r, _)| r.title != "Montre"));
}

// -----------------------------------------------------------------------
// filter_by_price
// -----------------------------------------------------------------------

#[test]
fn filter_by_price_is_inclusive_on_both_ends() {
    let filtered = filter_by_price(&sample_set(), 3500.0, 12000.0);
    let titles: Vec<&str> = filtered.records().iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["Chemise", "Boubou", "Sandales"]);
}

// -----------------------------------------------------------------------
// location_breakdown
// -----------------------------------------------------------------------

#[test]
fn location_breakdown_counts_descending_with_name_tiebreak() {
    let breakdown = location_breakdown(&sample_set());
    assert_eq!(
        breakdown,
        vec![
            ("Dakar".to_owned(), 3),
            ("Saint-Louis".to_owned(), 1),
            ("Thiès".to_owned(), 1),
        ]
    );
}
