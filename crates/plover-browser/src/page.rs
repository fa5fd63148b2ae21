use async_trait::async_trait;
use chromiumoxide::Page;
use chromiumoxide::cdp::browser_protocol::page::{EventDomContentEventFired, NavigateParams};
use futures::StreamExt;
use plover_core::{Error, FieldError, PageProbe, Result};
use std::time::Duration;

/// One browser tab
pub struct ChromePage {
    page: Page,
}

impl ChromePage {
    pub(crate) fn new(page: Page) -> Self {
        Self { page }
    }

    async fn navigate_until_dom_ready(&self, url: &str) -> Result<()> {
        // Subscribe before navigating so the event cannot be missed
        let mut dom_ready = self
            .page
            .event_listener::<EventDomContentEventFired>()
            .await
            .map_err(|e| Error::navigation(url, e))?;

        // chromiumoxide holds the Page.navigate reply until the load event,
        // so race it against DOMContentLoaded instead of awaiting it first
        let navigation = self.page.execute(NavigateParams::new(url));
        tokio::pin!(navigation);

        let dom_event = tokio::select! {
            response = &mut navigation => {
                let response = response.map_err(|e| Error::navigation(url, e))?;
                return navigate_reply(url, response.result.error_text.as_deref());
            }
            event = dom_ready.next() => event,
        };

        if dom_event.is_none() {
            return Err(Error::navigation(url, "page closed before DOM content loaded"));
        }

        let document_url = self.document_url().await;
        if !is_error_document(document_url.as_deref()) {
            return Ok(());
        }

        // Chrome swapped in its own error page; the navigate reply carries the reason
        let reason = match navigation.await {
            Ok(response) => response
                .result
                .error_text
                .clone()
                .unwrap_or_else(|| "navigation failed".to_string()),
            Err(e) => e.to_string(),
        };
        Err(Error::navigation(url, reason))
    }

    async fn document_url(&self) -> Option<String> {
        self.page
            .evaluate("document.URL")
            .await
            .ok()
            .and_then(|v| v.into_value::<String>().ok())
    }
}

/// Outcome of a `Page.navigate` reply
fn navigate_reply(url: &str, error_text: Option<&str>) -> Result<()> {
    match error_text {
        Some(reason) => Err(Error::navigation(url, reason)),
        None => Ok(()),
    }
}

/// Chrome serves network failures from an internal error document
fn is_error_document(document_url: Option<&str>) -> bool {
    document_url.is_some_and(|u| u.starts_with("chrome-error://"))
}

#[async_trait]
impl PageProbe for ChromePage {
    async fn navigate(&self, url: &str, timeout: Duration) -> Result<()> {
        tracing::debug!("Waiting up to {} ms for DOM content", timeout.as_millis());

        tokio::time::timeout(timeout, self.navigate_until_dom_ready(url))
            .await
            .map_err(|_| {
                Error::navigation(url, format!("timed out after {} ms", timeout.as_millis()))
            })?
    }

    async fn title(&self) -> Result<String> {
        let title = self
            .page
            .get_title()
            .await
            .map_err(|e| Error::Extract(format!("title: {}", e)))?;

        Ok(title.unwrap_or_default())
    }

    async fn count_matches(&self, selector: &str) -> Result<usize> {
        let elements = self
            .page
            .find_elements(selector)
            .await
            .map_err(|e| Error::Extract(format!("'{}': {}", selector, e)))?;

        Ok(elements.len())
    }

    async fn first_match_text(
        &self,
        selector: &str,
    ) -> std::result::Result<Option<String>, FieldError> {
        let elements = self
            .page
            .find_elements(selector)
            .await
            .map_err(|e| FieldError::Lookup {
                selector: selector.to_string(),
                reason: e.to_string(),
            })?;

        let Some(first) = elements.first() else {
            return Ok(None);
        };

        let text = first.inner_text().await.map_err(|e| FieldError::Text {
            selector: selector.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Some(text.unwrap_or_default()))
    }
}
