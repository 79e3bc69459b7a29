use std::path::PathBuf;

use clap::Args;

use coinaf_core::analytics;
use coinaf_core::{AppConfig, Category, ResultSet};
use coinaf_scraper::CategoryClient;

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// CSV file to analyze. A bare file name resolves against the data dir.
    #[arg(long, conflicts_with = "category")]
    pub input: Option<PathBuf>,

    /// Category to scrape and analyze instead of reading a file
    #[arg(long)]
    pub category: Option<String>,

    /// Number of listing pages to visit when scraping
    #[arg(long, default_value_t = 5)]
    pub pages: u32,

    /// Keep only records with a numeric price at or above this value
    #[arg(long)]
    pub min_price: Option<f64>,

    /// Keep only records with a numeric price at or below this value
    #[arg(long)]
    pub max_price: Option<f64>,
}

pub async fn run(config: &AppConfig, args: ReportArgs) -> anyhow::Result<()> {
    let set = match (&args.input, &args.category) {
        (Some(input), None) => {
            let path = crate::show::resolve_data_path(config, input);
            coinaf_core::read_csv(&path)?
        }
        (None, Some(category)) => {
            anyhow::ensure!(args.pages >= 1, "--pages must be at least 1");
            let category: Category = category.parse()?;
            let client = CategoryClient::new(config.request_timeout_secs, &config.user_agent)?;
            client
                .scrape_category(&config.base_url, category, args.pages)
                .await?
        }
        _ => anyhow::bail!("pass exactly one of --input or --category"),
    };

    let set = apply_price_bounds(&set, args.min_price, args.max_price);
    if set.is_empty() {
        println!("no data to report on");
        return Ok(());
    }

    crate::render::print_report(&set);
    Ok(())
}

fn apply_price_bounds(set: &ResultSet, min: Option<f64>, max: Option<f64>) -> ResultSet {
    if min.is_none() && max.is_none() {
        return set.clone();
    }
    analytics::filter_by_price(
        set,
        min.unwrap_or(f64::NEG_INFINITY),
        max.unwrap_or(f64::INFINITY),
    )
}
