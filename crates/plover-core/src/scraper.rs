use crate::capability::{BrowserLauncher, BrowserSession, HEADING_SELECTOR, LINK_SELECTOR, PageProbe};
use crate::options::ScrapeOptions;
use crate::result::ScrapeResult;
use crate::writer::ResultWriter;
use crate::Result;
use std::path::PathBuf;
use std::time::Duration;

/// Visits one URL and records its title, first heading and link count
pub struct Scraper<L> {
    launcher: L,
}

impl<L: BrowserLauncher> Scraper<L> {
    pub fn new(launcher: L) -> Self {
        Self { launcher }
    }

    /// Scrape `options.url` and write the result to `<out_dir>/scrape.json`.
    ///
    /// Returns the path of the written file. On any fatal error nothing is
    /// written and an existing file is left untouched.
    pub async fn fetch(&self, options: &ScrapeOptions) -> Result<PathBuf> {
        ResultWriter::ensure_dir(&options.out_dir)?;

        let result = self.scrape(options).await?;

        ResultWriter::to_dir(&result, &options.out_dir)
    }

    /// Scrape `options.url` without writing anything.
    ///
    /// The browser is closed on every path once it has been launched. A
    /// failure to close is logged and dropped so it never hides the
    /// outcome of the scrape itself.
    pub async fn scrape(&self, options: &ScrapeOptions) -> Result<ScrapeResult> {
        tracing::debug!(
            "Launching browser (headless: {}, timeout: {:?})",
            options.headless,
            options.timeout
        );

        let mut session = self
            .launcher
            .launch(&options.launch_options())
            .await
            .inspect_err(|e| tracing::error!("Failed to scrape {}: {}", options.url, e))?;

        let extracted = extract(&mut session, &options.url, options.timeout).await;

        if let Err(e) = session.close().await {
            tracing::debug!("Ignoring error while closing browser: {}", e);
        }

        extracted.inspect_err(|e| tracing::error!("Failed to scrape {}: {}", options.url, e))
    }
}

async fn extract<S: BrowserSession>(
    session: &mut S,
    url: &str,
    timeout: Duration,
) -> Result<ScrapeResult> {
    let page = session.new_page().await?;

    tracing::info!("Navigating to {}", url);
    page.navigate(url, timeout).await?;

    let title = page.title().await?;

    let heading = match page.first_match_text(HEADING_SELECTOR).await {
        Ok(text) => text,
        Err(e) => {
            tracing::debug!("Could not read h1 text: {}", e);
            None
        }
    };

    let link_count = page.count_matches(LINK_SELECTOR).await?;

    tracing::debug!(
        "Extracted title={:?} h1={:?} links={}",
        title,
        heading,
        link_count
    );

    Ok(ScrapeResult::new(url, title, heading, link_count))
}
