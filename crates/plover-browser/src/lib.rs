//! chromiumoxide implementation of the Plover browser capabilities

mod chrome_finder;
mod error;
mod launcher;
mod page;
mod session;

pub use chrome_finder::ChromeFinder;
pub use error::{Error, Result};
pub use launcher::ChromeLauncher;
pub use page::ChromePage;
pub use session::ChromeSession;
