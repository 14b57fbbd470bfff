/*!
# Error types

Completion itself cannot fail; these cover configuration loading.
*/

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown duplicate policy '{0}' (expected 'suppress' or 'offer_all')")]
    UnknownPolicy(String),

    #[error("invalid log level '{0}'")]
    InvalidLogLevel(String),

    #[error("unsupported config format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to serialize config to TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("failed to parse YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid initialization options: {0}")]
    InitializationOptions(#[from] serde_json::Error),
}
