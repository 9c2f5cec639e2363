//! Configuration errors.

use std::path::PathBuf;

/// Problems loading or validating [`DeskConfig`](crate::config::DeskConfig).
///
/// These signal an integration bug, not a transient condition.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required configuration key '{key}'")]
    MissingKey { key: String },

    #[error("invalid value '{value}' for '{key}': {reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },

    #[error("malformed line {line}: '{content}'")]
    MalformedLine { line: usize, content: String },

    #[error("could not read configuration file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no configuration directory available on this platform")]
    NoConfigDir,
}
