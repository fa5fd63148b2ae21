use serde::{Deserialize, Serialize};

/// Attributes extracted from a single page visit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapeResult {
    pub url: String,
    pub title: String,
    /// Text of the first `h1`, if one exists and could be read
    #[serde(rename = "h1")]
    pub heading: Option<String>,
    pub link_count: usize,
}

impl ScrapeResult {
    pub fn new(
        url: impl Into<String>,
        title: impl Into<String>,
        heading: Option<String>,
        link_count: usize,
    ) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            heading,
            link_count,
        }
    }
}
