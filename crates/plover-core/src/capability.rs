//! Narrow interfaces over the browser-automation engine.
//!
//! The scraper only needs to launch a browser, open a page, navigate and
//! run a few selector queries. Keeping that surface small lets the
//! orchestration in [`crate::Scraper`] run against any backend.

use crate::options::LaunchOptions;
use crate::{FieldError, Result};
use async_trait::async_trait;
use std::time::Duration;

/// Selector for the first-heading field
pub const HEADING_SELECTOR: &str = "h1";

/// Selector counted for the link-count field
pub const LINK_SELECTOR: &str = "a";

/// Starts browser instances
#[async_trait]
pub trait BrowserLauncher: Send + Sync {
    type Session: BrowserSession;

    async fn launch(&self, options: &LaunchOptions) -> Result<Self::Session>;
}

/// A running browser owned by one scrape
#[async_trait]
pub trait BrowserSession: Send {
    type Page: PageProbe;

    async fn new_page(&mut self) -> Result<Self::Page>;

    /// Shut the browser down. Consumes the session so it can only happen once.
    async fn close(self) -> Result<()>;
}

/// DOM access on an open page
#[async_trait]
pub trait PageProbe: Send + Sync {
    /// Navigate and wait until the DOM content has loaded, failing after `timeout`
    async fn navigate(&self, url: &str, timeout: Duration) -> Result<()>;

    async fn title(&self) -> Result<String>;

    async fn count_matches(&self, selector: &str) -> Result<usize>;

    /// Visible text of the first element matching `selector`, or `None` when nothing matches
    async fn first_match_text(
        &self,
        selector: &str,
    ) -> std::result::Result<Option<String>, FieldError>;
}
