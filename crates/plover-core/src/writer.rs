use crate::Result;
use crate::result::ScrapeResult;
use std::path::{Path, PathBuf};

/// File name written inside the output directory
pub const OUTPUT_FILE_NAME: &str = "scrape.json";

pub struct ResultWriter;

impl ResultWriter {
    /// Create the output directory (and parents) if missing
    pub fn ensure_dir(dir: &Path) -> Result<()> {
        tracing::debug!("Ensuring output directory: {}", dir.display());
        std::fs::create_dir_all(dir)?;
        Ok(())
    }

    /// Path of the result file for a given output directory
    pub fn output_path(dir: &Path) -> PathBuf {
        dir.join(OUTPUT_FILE_NAME)
    }

    /// Write a result as pretty JSON to `<dir>/scrape.json`, replacing any previous file
    pub fn to_dir(result: &ScrapeResult, dir: &Path) -> Result<PathBuf> {
        let path = Self::output_path(dir);

        // Serialize fully before touching the file so a failure leaves the old one intact
        let json = Self::to_string(result)?;
        std::fs::write(&path, json)?;

        tracing::info!("Wrote scrape result for {} to {}", result.url, path.display());

        Ok(path)
    }

    /// Convert a result to a pretty JSON string
    pub fn to_string(result: &ScrapeResult) -> Result<String> {
        Ok(serde_json::to_string_pretty(result)?)
    }
}
