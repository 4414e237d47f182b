use std::fmt;
use std::io;
use std::result;

use diesel::result::DatabaseErrorKind;

#[derive(Debug)]
pub enum Error {
    Argument(String),
    Io(String),
    State(String),
    Db(String),
    Constraint(String),
    NotFound(String),
    Eof,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Argument(msg)    => write!(f, "{}", msg),
            Error::Io(msg)          => write!(f, "{}", msg),
            Error::State(msg)       => write!(f, "{}", msg),
            Error::Db(msg)          => write!(f, "{}", msg),
            Error::Constraint(msg)  => write!(f, "{}", msg),
            Error::NotFound(msg)    => write!(f, "{}", msg),
            Error::Eof              => write!(f, "End of input"),
        }
    }
}

impl std::error::Error for Error {}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(format!("IO error: {}", err))
    }
}

impl From<diesel::result::Error> for Error {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
                Error::Constraint(format!("Unique constraint violated: {}", info.message()))
            },
            diesel::result::Error::NotFound => {
                Error::NotFound(format!("SQLite record not found"))
            },
            e => Error::Db(format!("SQLite execution error: {}", e)),
        }
    }
}

impl From<diesel::ConnectionError> for Error {
    fn from(err: diesel::ConnectionError) -> Self {
        Error::Db(format!("SQLite connection error: {}", err))
    }
}

pub type Result<T> = result::Result<T, Error>;
