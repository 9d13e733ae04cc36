use std::error::Error as StdError;
use std::fmt;
use std::num::ParseFloatError;
use std::string::FromUtf8Error;

// type alias for Result for use across the library
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    /// A character which is neither a separator, a number nor a path command
    /// appeared where a command was expected.
    UnrecognizedCommand { offset: usize, found: char },
    /// A number was required but the data at `offset` is not a valid number.
    MalformedNumber { offset: usize },
    /// Data ended (or a new command began) before `command` had all of its
    /// parameters.
    TruncatedCommand { offset: usize, command: char },
    Io(std::io::Error),
    Parse(String),
    InvalidValue(String, String),
    Document(String),
    Cli(String),
    Other(Box<dyn StdError>),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnrecognizedCommand { offset, found } => {
                write!(f, "Unrecognized path command '{found}' at offset {offset}")
            }
            Error::MalformedNumber { offset } => write!(f, "Malformed number at offset {offset}"),
            Error::TruncatedCommand { offset, command } => {
                write!(f, "Path command '{command}' truncated at offset {offset}")
            }
            Error::Io(source) => write!(f, "IO error: {source}"),
            Error::Parse(reason) => write!(f, "Parse error: {reason}"),
            Error::InvalidValue(what, value) => write!(f, "Invalid {what}: '{value}'"),
            Error::Document(reason) => write!(f, "Document error: {reason}"),
            Error::Cli(reason) => write!(f, "{reason}"),
            Error::Other(source) => write!(f, "{source}"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::Io(source) => Some(source),
            Error::Other(e) => Some(&**e),
            _ => None,
        }
    }
}

impl Error {
    pub fn from_err<T>(err: T) -> Error
    where
        T: StdError + 'static,
    {
        Error::Other(Box::new(err))
    }

    /// Byte offset into the path data of a parse failure, if this is one.
    pub fn offset(&self) -> Option<usize> {
        match self {
            Error::UnrecognizedCommand { offset, .. }
            | Error::MalformedNumber { offset }
            | Error::TruncatedCommand { offset, .. } => Some(*offset),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::Io(err)
    }
}

impl From<ParseFloatError> for Error {
    fn from(err: ParseFloatError) -> Error {
        Error::Parse(format!("float: {err}"))
    }
}

impl From<FromUtf8Error> for Error {
    fn from(err: FromUtf8Error) -> Error {
        Error::Parse(format!("utf8: {err}"))
    }
}
