//! Error type for configuration loading

use std::io;
use std::path::PathBuf;

/// Result alias used by the configuration modules
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors raised while reading or validating formatter configuration.
///
/// Every variant names the file it came from so the user can fix it.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading the file
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Malformed TOML document
    #[error("invalid TOML syntax in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Key outside the formatter's option set
    #[error("invalid key '{key}' in {}", .path.display())]
    InvalidKey { key: String, path: PathBuf },

    /// Value rejected by the option rules
    #[error("invalid '{key}' value in {}", .path.display())]
    InvalidValue { key: String, path: PathBuf },
}

impl ConfigError {
    /// Path of the file the error refers to
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Io { path, .. }
            | ConfigError::Parse { path, .. }
            | ConfigError::InvalidKey { path, .. }
            | ConfigError::InvalidValue { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_key_message_names_file() {
        let err = ConfigError::InvalidKey {
            key: "colour".to_string(),
            path: PathBuf::from("/repo/pyproject.toml"),
        };
        assert_eq!(
            err.to_string(),
            "invalid key 'colour' in /repo/pyproject.toml"
        );
        assert_eq!(err.path(), &PathBuf::from("/repo/pyproject.toml"));
    }

    #[test]
    fn test_parse_error_includes_parser_message() {
        let source = toml::from_str::<toml::Table>("not valid toml").unwrap_err();
        let err = ConfigError::Parse {
            path: PathBuf::from("pyproject.toml"),
            source,
        };
        let message = err.to_string();
        assert!(message.starts_with("invalid TOML syntax in pyproject.toml: "));
    }
}
