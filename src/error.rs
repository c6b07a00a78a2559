//! Error enum
use std::fmt;

use zip::result::ZipError;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Zip(ZipError),
    Csv(csv::Error),
    Serde(serde_json::Error),
    /// A CSS selector that could not be compiled.
    Selector(String),
    /// Invalid feature configuration (duplicate family, colliding keys, unknown names).
    Config(String),
    Custom(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {}", e),
            Error::Zip(e) => write!(f, "archive error: {}", e),
            Error::Csv(e) => write!(f, "csv error: {}", e),
            Error::Serde(e) => write!(f, "json error: {}", e),
            Error::Selector(s) => write!(f, "invalid selector: {}", s),
            Error::Config(s) => write!(f, "invalid feature configuration: {}", s),
            Error::Custom(s) => f.write_str(s),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<ZipError> for Error {
    fn from(e: ZipError) -> Error {
        Error::Zip(e)
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Error {
        Error::Csv(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}
