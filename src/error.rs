// SPDX-License-Identifier: MPL-2.0
use thiserror::Error;

/// Application-level failures.
///
/// Payloads are plain strings so the error can be cloned into messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    #[error("State Error: {0}")]
    State(String),

    #[error("Export Error: {0}")]
    Export(String),
}

impl Error {
    /// Returns the i18n key of the toast shown for this error.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-io",
            Error::Config(_) => "error-config",
            Error::State(_) => "error-state",
            Error::Export(_) => "error-export",
        }
    }
}

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
    fn toml_parse_error_becomes_config_error() {
        let parse = toml::from_str::<toml::Table>("not = [valid").unwrap_err();
        let err: Error = parse.into();
        assert!(matches!(err, Error::Config(_)));
        assert_eq!(err.i18n_key(), "error-config");
    }

    #[test]
    fn export_error_formats_properly() {
        let err = Error::Export("read-only".into());
        assert_eq!(err.to_string(), "Export Error: read-only");
        assert_eq!(err.i18n_key(), "error-export");
    }
}
