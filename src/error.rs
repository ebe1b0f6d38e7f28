// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Storage(String),
    Http(String),
    InvalidInput(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Storage(e) => write!(f, "Storage Error: {}", e),
            Error::Http(e) => write!(f, "HTTP Error: {}", e),
            Error::InvalidInput(e) => write!(f, "Invalid Input: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl<T: fmt::Debug> From<ciborium::de::Error<T>> for Error {
    fn from(err: ciborium::de::Error<T>) -> Self {
        Error::Storage(format!("{err:?}"))
    }
}

impl<T: fmt::Debug> From<ciborium::ser::Error<T>> for Error {
    fn from(err: ciborium::ser::Error<T>) -> Self {
        Error::Storage(format!("{err:?}"))
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn invalid_input_formats_properly() {
        let err = Error::InvalidInput("unsupported link".into());
        assert_eq!(format!("{}", err), "Invalid Input: unsupported link");
    }

    #[test]
    fn storage_error_from_invalid_cbor() {
        let garbage: &[u8] = &[0xff, 0x00, 0x13];
        let parsed: std::result::Result<std::collections::BTreeMap<String, String>, _> =
            ciborium::from_reader(garbage);
        let err: Error = parsed.expect_err("garbage must not decode").into();
        assert!(matches!(err, Error::Storage(_)));
    }
}
