use anyhow::Result;
use plover_browser::ChromeLauncher;
use plover_core::{ScrapeOptions, Scraper};
use std::path::PathBuf;

/// Run one scrape and return the path of the written result file
pub fn execute(options: &ScrapeOptions) -> Result<PathBuf> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let scraper = Scraper::new(ChromeLauncher::new());
    let result = runtime.block_on(scraper.fetch(options));

    // Don't hang on a browser child that is slow to exit
    runtime.shutdown_timeout(std::time::Duration::from_millis(100));

    Ok(result?)
}
