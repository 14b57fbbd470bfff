/*!
# Server Configuration

Configuration structures and loading for the completion server.
Supports TOML and YAML files plus LSP `initializationOptions`.

```toml
[completion]
duplicate_policy = "suppress"
snippets = true

[logging]
level = "info"
```
*/

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::level_filters::LevelFilter;

use crate::completion::{CompletionResolver, DuplicatePolicy};
use crate::core::errors::ConfigError;

/// Completion behaviour
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionSettings {
    /// Whether attributes already in the document are offered again
    #[serde(default)]
    pub duplicate_policy: DuplicatePolicy,

    /// Send snippet templates; `false` falls back to plain inserts
    #[serde(default = "default_true")]
    pub snippets: bool,
}

fn default_true() -> bool {
    true
}

impl Default for CompletionSettings {
    fn default() -> Self {
        Self {
            duplicate_policy: DuplicatePolicy::Suppress,
            snippets: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Default level when `RUST_LOG` is not set
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub completion: CompletionSettings,

    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Overrides a client may send in `initializationOptions`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InitializationOptions {
    duplicate_policy: Option<DuplicatePolicy>,
    snippets: Option<bool>,
}

impl ServerConfig {
    /// Load from `.toml`, `.yaml` or `.yml`
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::load_from_toml(path),
            Some("yaml") | Some("yml") => Self::load_from_yaml(path),
            _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    /// Load configuration from TOML file
    pub fn load_from_toml<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = read(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from YAML file
    pub fn load_from_yaml<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = read(path.as_ref())?;
        let config: Self = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = self.to_toml()?;
        std::fs::write(path.as_ref(), content).map_err(|source| ConfigError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        })
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.log_level()?;
        Ok(())
    }

    pub fn log_level(&self) -> Result<LevelFilter, ConfigError> {
        self.logging
            .level
            .parse::<LevelFilter>()
            .map_err(|_| ConfigError::InvalidLogLevel(self.logging.level.clone()))
    }

    /// Apply overrides from LSP `initializationOptions`
    pub fn merge_initialization_options(
        &mut self,
        options: serde_json::Value,
    ) -> Result<(), ConfigError> {
        if options.is_null() {
            return Ok(());
        }

        let options: InitializationOptions = serde_json::from_value(options)?;
        if let Some(policy) = options.duplicate_policy {
            self.completion.duplicate_policy = policy;
        }
        if let Some(snippets) = options.snippets {
            self.completion.snippets = snippets;
        }
        Ok(())
    }

    pub fn resolver(&self) -> CompletionResolver {
        CompletionResolver::new(self.completion.duplicate_policy)
            .with_snippets(self.completion.snippets)
    }

    /// `--config` when given, else the per-user file if it exists, else defaults
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_from_file(path);
        }

        match default_config_path() {
            Some(path) if path.exists() => Self::load_from_file(path),
            _ => Ok(Self::default()),
        }
    }
}

/// `<config dir>/waypoint-docker-lsp/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("waypoint-docker-lsp").join("config.toml"))
}

fn read(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}
