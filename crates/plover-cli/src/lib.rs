use clap::Parser;
use plover_core::ScrapeOptions;
use plover_core::options::{DEFAULT_OUT_DIR, DEFAULT_TIMEOUT_MS, DEFAULT_URL};
use std::path::PathBuf;

pub mod commands;

#[derive(Parser, Debug)]
#[command(name = "plover")]
#[command(author, version, long_about = None)]
#[command(
    about = "Scrape a page's title, first heading and link count into JSON",
    long_about = "Plover opens a URL in headless Chrome, reads the page title, the text of the \
                  first <h1> and the number of links, and writes them to <out>/scrape.json."
)]
pub struct Cli {
    /// URL to scrape
    #[arg(long, default_value = DEFAULT_URL)]
    pub url: String,

    /// Output directory
    #[arg(long, value_name = "DIR", default_value = DEFAULT_OUT_DIR)]
    pub out: PathBuf,

    /// Run the browser with a visible window
    #[arg(long)]
    pub no_headless: bool,

    /// Navigation timeout in milliseconds
    #[arg(
        long,
        value_name = "MS",
        default_value_t = DEFAULT_TIMEOUT_MS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to a Chrome or Chromium binary (auto-detected if omitted)
    #[arg(long, value_name = "PATH")]
    pub chrome_path: Option<PathBuf>,
}

impl Cli {
    pub fn to_options(&self) -> ScrapeOptions {
        ScrapeOptions::new(self.url.clone(), self.out.clone())
            .with_headless(!self.no_headless)
            .with_timeout_ms(self.timeout)
            .with_chrome_path(self.chrome_path.clone())
    }
}
