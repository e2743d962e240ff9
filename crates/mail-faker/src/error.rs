//! Error types for the mail-faker crate.
//!
//! Generation itself cannot fail; the only fallible surface is loading
//! [`MailFakerSettings`](crate::MailFakerSettings).

use thiserror::Error;

/// Errors that can occur when loading settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The settings could not be read from the environment or config files.
    #[error("failed to load mail-faker settings: {message}")]
    Load {
        /// Description of the underlying failure.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_load_formats_correctly() {
        let err = ConfigError::Load {
            message: "invalid digit found in string".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "failed to load mail-faker settings: invalid digit found in string"
        );
    }
}
