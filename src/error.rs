use std::fmt;
use std::io;

/// An error that occurred while reading a result file, collecting metrics
/// or writing the report.
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    Io(io::Error),
    Parse(String),
    EmptyTraversal,
    Json(serde_json::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "i/o failure: {}", err),
            Error::Parse(err) => write!(f, "cannot read execution result: {}", err),
            Error::EmptyTraversal => {
                write!(f, "no suite was ever visited, there is nothing to report")
            }
            Error::Json(err) => write!(f, "cannot serialize metrics: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}
