//! Plain-text rendering of result sets and analytics reports.

use coinaf_core::analytics::{self, HistogramBin, PriceSummary};
use coinaf_core::ResultSet;

const HISTOGRAM_BINS: usize = 20;
const TOP_N: usize = 5;
const BAR_WIDTH: usize = 40;

pub fn print_table(set: &ResultSet) {
    println!(
        "{:<40} | {:>12} | {:<24} | {}",
        "type habits", "prix", "adresse", "image_lien"
    );
    println!("{}", "-".repeat(100));
    for record in set {
        println!(
            "{:<40} | {:>12} | {:<24} | {}",
            truncate(&record.title, 40),
            truncate(&record.price, 12),
            truncate(&record.location, 24),
            record.image_urls.len()
        );
    }
}

pub fn print_report(set: &ResultSet) {
    let prices = analytics::numeric_prices(set);

    println!("== Price summary ==");
    match analytics::describe(&prices) {
        Some(summary) => print_summary(&summary),
        None => println!("no numeric prices in {} records", set.len()),
    }

    let bins = analytics::histogram(&prices, HISTOGRAM_BINS);
    if !bins.is_empty() {
        println!("\n== Price distribution ==");
        print_histogram(&bins);
    }

    let top = analytics::top_n(set, TOP_N);
    if !top.is_empty() {
        println!("\n== Top {} by price ==", top.len());
        for (record, price) in top {
            println!("{:>12.0}  {}", price, truncate(&record.title, 60));
        }
    }

    println!("\n== Records per location ==");
    for (location, count) in analytics::location_breakdown(set) {
        println!("{count:>6}  {location}");
    }
}

fn print_summary(summary: &PriceSummary) {
    println!("count  {}", summary.count);
    println!("mean   {:.2}", summary.mean);
    match summary.std {
        Some(std) => println!("std    {std:.2}"),
        None => println!("std    -"),
    }
    println!("min    {:.2}", summary.min);
    println!("25%    {:.2}", summary.q1);
    println!("50%    {:.2}", summary.median);
    println!("75%    {:.2}", summary.q3);
    println!("max    {:.2}", summary.max);
}

fn print_histogram(bins: &[HistogramBin]) {
    let max_count = bins.iter().map(|b| b.count).max().unwrap_or(0);
    for bin in bins {
        println!(
            "{:>10.0} .. {:>10.0} | {:>5} | {}",
            bin.lower,
            bin.upper,
            bin.count,
            bar(bin.count, max_count)
        );
    }
}

fn bar(count: usize, max_count: usize) -> String {
    if max_count == 0 {
        return String::new();
    }
    "#".repeat(count * BAR_WIDTH / max_count)
}

/// Truncates to at most `max` characters, marking the cut with an ellipsis.
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_owned();
    }
    let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}
