use std::fmt;
use std::io;
use std::path::PathBuf;

/// Failure of a file checksum.
#[derive(Debug)]
pub enum Error {
    /// The file could not be opened for reading (missing or inaccessible).
    NotFound { path: PathBuf, source: io::Error },
    /// Reading an already opened file failed.
    Io(io::Error),
}

impl Error {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotFound { path, .. } => write!(f, "File '{}' not found.", path.display()),
            Error::Io(e) => write!(f, "I/O error while reading: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::NotFound { source, .. } => Some(source),
            Error::Io(e) => Some(e),
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}
