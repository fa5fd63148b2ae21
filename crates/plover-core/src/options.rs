use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_URL: &str = "https://example.com";
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Settings for a single scrape run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub url: String,
    pub out_dir: PathBuf,
    pub headless: bool,
    pub timeout: Duration,
    pub chrome_path: Option<PathBuf>,
}

impl ScrapeOptions {
    pub fn new(url: impl Into<String>, out_dir: impl Into<PathBuf>) -> Self {
        Self {
            url: url.into(),
            out_dir: out_dir.into(),
            ..Self::default()
        }
    }

    pub fn with_headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout = Duration::from_millis(timeout_ms);
        self
    }

    pub fn with_chrome_path(mut self, chrome_path: Option<PathBuf>) -> Self {
        self.chrome_path = chrome_path;
        self
    }

    /// The subset of settings the browser launcher needs
    pub fn launch_options(&self) -> LaunchOptions {
        LaunchOptions {
            headless: self.headless,
            timeout: self.timeout,
            chrome_path: self.chrome_path.clone(),
        }
    }
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            headless: true,
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            chrome_path: None,
        }
    }
}

/// Browser launch settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchOptions {
    pub headless: bool,
    pub timeout: Duration,
    pub chrome_path: Option<PathBuf>,
}
