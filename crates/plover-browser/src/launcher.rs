use crate::ChromeFinder;
use crate::session::ChromeSession;
use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use futures::StreamExt;
use plover_core::{BrowserLauncher, Error, LaunchOptions, Result};
use std::path::Path;
use std::time::Duration;

/// chromiumoxide's own per-command default
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Launches a local Chrome process and connects to it over CDP
#[derive(Debug, Default, Clone, Copy)]
pub struct ChromeLauncher;

impl ChromeLauncher {
    pub fn new() -> Self {
        Self
    }

    fn build_config(options: &LaunchOptions, executable: Option<&Path>) -> Result<BrowserConfig> {
        let mut builder = BrowserConfig::builder()
            .no_sandbox()
            .request_timeout(request_timeout(options))
            .args(launch_args());

        if !options.headless {
            builder = builder.with_head();
        }

        if let Some(path) = executable {
            builder = builder.chrome_executable(path);
        }

        builder
            .build()
            .map_err(|e| Error::Launch(format!("Invalid browser config: {}", e)))
    }
}

/// Per-command CDP timeout: the default, raised to cover the navigation deadline
fn request_timeout(options: &LaunchOptions) -> Duration {
    options.timeout.max(DEFAULT_REQUEST_TIMEOUT)
}

/// Extra Chrome flags on top of chromiumoxide's defaults
fn launch_args() -> Vec<String> {
    vec![
        "--no-first-run".to_string(),
        "--no-default-browser-check".to_string(),
        "--disable-dev-shm-usage".to_string(),
    ]
}

#[async_trait]
impl BrowserLauncher for ChromeLauncher {
    type Session = ChromeSession;

    async fn launch(&self, options: &LaunchOptions) -> Result<ChromeSession> {
        let executable = ChromeFinder::new(options.chrome_path.clone()).find()?;
        let config = Self::build_config(options, executable.as_deref())?;

        let (browser, mut handler) = Browser::launch(config)
            .await
            .map_err(|e| Error::Launch(e.to_string()))?;

        // The handler must be polled for any command on the browser to complete
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    tracing::debug!("CDP handler event error (continuing): {}", e);
                }
            }
        });

        tracing::debug!(
            "Browser launched ({})",
            if options.headless { "headless" } else { "headed" }
        );

        Ok(ChromeSession::new(browser, handler_task))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(headless: bool, timeout_ms: u64) -> LaunchOptions {
        LaunchOptions {
            headless,
            timeout: Duration::from_millis(timeout_ms),
            chrome_path: None,
        }
    }

    #[test]
    fn test_small_navigation_timeout_keeps_default_request_timeout() {
        assert_eq!(request_timeout(&options(true, 500)), DEFAULT_REQUEST_TIMEOUT);
    }

    #[test]
    fn test_large_navigation_timeout_extends_request_timeout() {
        assert_eq!(
            request_timeout(&options(true, 90_000)),
            Duration::from_secs(90)
        );
    }

    #[test]
    fn test_build_config_accepts_headed_and_headless() {
        let temp = tempfile::NamedTempFile::new().unwrap();

        for headless in [true, false] {
            let config = ChromeLauncher::build_config(&options(headless, 1000), Some(temp.path()));
            assert!(config.is_ok());
        }
    }

    #[tokio::test]
    async fn test_launch_fails_for_missing_binary() {
        let options = LaunchOptions {
            headless: true,
            timeout: std::time::Duration::from_secs(1),
            chrome_path: Some("/nonexistent/chrome".into()),
        };

        let err = ChromeLauncher::new().launch(&options).await.unwrap_err();

        assert!(matches!(err, Error::Launch(_)));
        assert!(err.to_string().contains("Chrome not found"));
    }
}
