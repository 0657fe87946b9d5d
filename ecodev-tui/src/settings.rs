//! Runtime settings: defaults, then an optional TOML file, then `ECODEV__*` variables.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

const CONFIG_ENV: &str = "ECODEV_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "config/ecodev.toml";

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct EcoDevConfig {
    /// Default tracing filter when `RUST_LOG` is unset.
    pub log_level: String,
    /// File the log is appended to. The terminal belongs to the UI.
    pub log_file: PathBuf,
    /// Wait shown as "processing" before a classification result appears.
    pub processing_delay_ms: u64,
    /// Wait shown while signing in.
    pub login_delay_ms: u64,
    /// JSON knowledge base replacing the embedded one.
    #[serde(default)]
    pub knowledge_base: Option<PathBuf>,
}

impl EcoDevConfig {
    /// Load from `ECODEV_CONFIG` (or `config/ecodev.toml`) and the environment.
    pub(crate) fn load() -> Result<Self, config::ConfigError> {
        let path = std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_owned());
        Self::load_from(Path::new(&path))
    }

    /// Load using `path` as the optional file source. A missing file is not an error.
    pub(crate) fn load_from(path: &Path) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .set_default("log_level", "info")?
            .set_default("log_file", "ecodev.log")?
            .set_default("processing_delay_ms", 2000_i64)?
            .set_default("login_delay_ms", 1000_i64)?;

        let builder = if path.exists() {
            builder.add_source(config::File::from(path))
        } else {
            builder
        };

        builder
            .add_source(config::Environment::with_prefix("ECODEV").separator("__"))
            .build()?
            .try_deserialize()
    }

    pub(crate) fn processing_delay(&self) -> Duration {
        Duration::from_millis(self.processing_delay_ms)
    }

    pub(crate) fn login_delay(&self) -> Duration {
        Duration::from_millis(self.login_delay_ms)
    }
}
