use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Browser error: {0}")]
    Browser(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<Error> for plover_core::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Browser(msg) => plover_core::Error::Launch(msg),
            Error::Io(e) => plover_core::Error::Launch(e.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
