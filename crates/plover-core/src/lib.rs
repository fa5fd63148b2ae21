pub mod capability;
pub mod error;
pub mod options;
pub mod result;
pub mod scraper;
pub mod writer;

pub use capability::{BrowserLauncher, BrowserSession, PageProbe};
pub use error::{Error, FieldError, Result};
pub use options::{LaunchOptions, ScrapeOptions};
pub use result::ScrapeResult;
pub use scraper::Scraper;
pub use writer::ResultWriter;
