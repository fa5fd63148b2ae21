use thiserror::Error;

/// Fatal errors. Any of these aborts the scrape and no output is written.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to launch browser: {0}")]
    Launch(String),

    #[error("Failed to open page: {0}")]
    Page(String),

    #[error("Failed to navigate to {url}: {reason}")]
    Navigation { url: String, reason: String },

    #[error("Failed to read page: {0}")]
    Extract(String),

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize result: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl Error {
    pub fn navigation(url: impl Into<String>, reason: impl ToString) -> Self {
        Error::Navigation {
            url: url.into(),
            reason: reason.to_string(),
        }
    }
}

/// Errors while reading an optional field. The scraper records the field
/// as absent instead of failing.
#[derive(Error, Debug)]
pub enum FieldError {
    #[error("Element lookup failed for '{selector}': {reason}")]
    Lookup { selector: String, reason: String },

    #[error("Could not read text of '{selector}': {reason}")]
    Text { selector: String, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
