use std::path::{Path, PathBuf};

use clap::Args;

use coinaf_core::{AppConfig, CSV_COLUMNS};

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// CSV file to display. A bare file name resolves against the data dir.
    #[arg(long)]
    pub input: PathBuf,
}

pub fn run(config: &AppConfig, args: &ShowArgs) -> anyhow::Result<()> {
    let path = resolve_data_path(config, &args.input);
    let set = coinaf_core::read_csv(&path)?;
    println!("{} rows and {} columns", set.len(), CSV_COLUMNS.len());
    crate::render::print_table(&set);
    Ok(())
}

/// Bare file names (no directory component) resolve against the configured
/// data dir; anything with a path component is used as given.
pub(crate) fn resolve_data_path(config: &AppConfig, input: &Path) -> PathBuf {
    let is_bare = input
        .parent()
        .is_none_or(|parent| parent.as_os_str().is_empty());
    if is_bare && !input.is_absolute() {
        config.data_dir.join(input)
    } else {
        input.to_path_buf()
    }
}
