use std::convert::From;
use std::error;
use std::fmt;
use std::io;

#[derive(Debug)]
pub struct Error {
    pub kind: ErrorKind,
    pub message: Option<String>,
}

#[derive(Debug)]
pub enum ErrorKind {
    MissingApiKey,
    Transport,
    Status(u16),
    Schema,
    IOError(io::Error),
}

impl Error {
    pub fn new(kind: ErrorKind, msg: &str) -> Self {
        Error {
            kind,
            message: Some(msg.to_owned()),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            kind,
            message: None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(io_error: io::Error) -> Error {
        Error::from(ErrorKind::IOError(io_error))
    }
}

impl From<ureq::Error> for Error {
    fn from(error: ureq::Error) -> Error {
        match error {
            ureq::Error::Status(code, _) => Error::new(
                ErrorKind::Status(code),
                "insight service answered with an error status",
            ),
            other => Error::new(ErrorKind::Transport, &other.to_string()),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Error {
        Error::new(
            ErrorKind::Schema,
            &format!("could not parse insight response: {}", error),
        )
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(msg) => write!(f, "{}: {}", self.kind.as_str(), msg),
            None => write!(f, "{}", self.kind.as_str()),
        }
    }
}

impl error::Error for Error {}

impl ErrorKind {
    pub fn as_str(&self) -> String {
        match self {
            ErrorKind::MissingApiKey => "no API key configured".to_owned(),
            ErrorKind::Transport => "could not reach insight service".to_owned(),
            ErrorKind::Status(code) => format!("insight service error (HTTP {})", code),
            ErrorKind::Schema => "invalid insight response".to_owned(),
            ErrorKind::IOError(err) => err.to_string(),
        }
    }
}
