use std::path::PathBuf;

use clap::Args;

use coinaf_core::{AppConfig, Category};
use coinaf_scraper::CategoryClient;

#[derive(Debug, Args)]
pub struct ScrapeArgs {
    /// Category to scrape (vetements-homme, chaussures-homme,
    /// vetements-enfants, chaussures-enfants)
    #[arg(long)]
    pub category: String,

    /// Number of listing pages to visit
    #[arg(long, default_value_t = 5)]
    pub pages: u32,

    /// Write the scraped records to this CSV file
    #[arg(long)]
    pub output: Option<PathBuf>,
}

pub async fn run(config: &AppConfig, args: ScrapeArgs) -> anyhow::Result<()> {
    anyhow::ensure!(args.pages >= 1, "--pages must be at least 1");
    let category: Category = args.category.parse()?;

    let client = CategoryClient::new(config.request_timeout_secs, &config.user_agent)?;
    let set = client
        .scrape_category(&config.base_url, category, args.pages)
        .await?;

    println!("scraped {} records from {category} ({} pages)", set.len(), args.pages);
    crate::render::print_table(&set);

    if let Some(path) = args.output {
        coinaf_core::write_csv(&path, &set)?;
        println!("saved to {}", path.display());
    }

    Ok(())
}
