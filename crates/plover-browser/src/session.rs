use crate::ChromePage;
use async_trait::async_trait;
use chromiumoxide::browser::Browser;
use plover_core::{BrowserSession, Error, Result};
use tokio::task::JoinHandle;

/// A launched Chrome process together with its CDP handler task
#[derive(Debug)]
pub struct ChromeSession {
    browser: Browser,
    handler_task: JoinHandle<()>,
}

impl ChromeSession {
    pub(crate) fn new(browser: Browser, handler_task: JoinHandle<()>) -> Self {
        Self {
            browser,
            handler_task,
        }
    }
}

#[async_trait]
impl BrowserSession for ChromeSession {
    type Page = ChromePage;

    async fn new_page(&mut self) -> Result<ChromePage> {
        let page = self
            .browser
            .new_page("about:blank")
            .await
            .map_err(|e| Error::Page(e.to_string()))?;

        Ok(ChromePage::new(page))
    }

    async fn close(mut self) -> Result<()> {
        tracing::debug!("Closing browser");

        let closed = self
            .browser
            .close()
            .await
            .map(|_| ())
            .map_err(|e| Error::Launch(format!("Failed to close browser: {}", e)));

        // Reap the child even if the close command failed
        if let Err(e) = self.browser.wait().await {
            tracing::debug!("Failed to wait for browser exit: {}", e);
        }

        closed
    }
}

impl Drop for ChromeSession {
    fn drop(&mut self) {
        self.handler_task.abort();
    }
}
