// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type.
//!
//! Upload validation outcomes are not errors: they are reported through
//! [`ValidationResult`](crate::domain::upload::ValidationResult). This type
//! only covers infrastructure failures (filesystem, settings).

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Settings could not be serialized: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid arguments: {0}")]
    Args(#[from] pico_args::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_convert_and_display_their_source() {
        let err: Error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing").into();
        assert!(matches!(err, Error::Io(_)));
        assert_eq!(err.to_string(), "I/O error: missing");
    }

    #[test]
    fn config_error_displays_message() {
        let err = Error::Config("bad value".to_string());
        assert_eq!(err.to_string(), "Config error: bad value");
    }
}
