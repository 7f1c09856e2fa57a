use std::path::PathBuf;

use thiserror::Error as ThisError;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(ThisError, Debug)]
pub enum Error {
    #[error("failed to fetch {url}")]
    Network {
        url: String,
        #[source]
        source: BoxError,
    },

    #[error("failed to write {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn network<E: Into<BoxError>>(url: impl Into<String>, source: E) -> Self {
        Error::Network {
            url: url.into(),
            source: source.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
