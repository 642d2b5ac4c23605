use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A dataset or instance does not fit the network it is used with.
    InvalidData(String),
    /// A network or training configuration value is out of range.
    InvalidConfig(String),
    /// Weight matrices whose dimensions do not chain into a network.
    InvalidShape(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidData(msg) => write!(f, "invalid data: {msg}"),
            Error::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Error::InvalidShape(msg) => write!(f, "invalid shape: {msg}"),
        }
    }
}

impl std::error::Error for Error {}
