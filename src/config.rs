//! Converter configuration
//!
//! Read from `<config dir>/canonsql/config.toml`:
//!
//! ```toml
//! debug = true
//! output = "pretty"
//! ```
//!
//! `CANONSQL_DEBUG=1` turns on debug diagnostics regardless of the file.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{ConvertError, ConvertResult};

/// Environment variable that forces debug diagnostics on or off.
pub const DEBUG_ENV: &str = "CANONSQL_DEBUG";

/// How converted trees are printed by callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Pretty,
}

impl std::str::FromStr for OutputFormat {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "pretty" => Ok(OutputFormat::Pretty),
            other => Err(ConvertError::Config(format!(
                "unknown output format '{}'",
                other
            ))),
        }
    }
}

/// Main converter configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Report unsupported constructs through `tracing`
    pub debug: bool,

    pub output: OutputFormat,
}

impl Config {
    /// Create a new configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    pub fn from_toml(text: &str) -> ConvertResult<Self> {
        toml::from_str(text).map_err(|e| ConvertError::Config(e.to_string()))
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> ConvertResult<Self> {
        match std::fs::read_to_string(path) {
            Ok(text) => Self::from_toml(&text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Load from the default location, then apply the environment.
    pub fn load_default() -> ConvertResult<Self> {
        let mut config = match Self::default_path() {
            Some(path) => Self::load(&path)?,
            None => Self::default(),
        };
        config.apply_env(std::env::var(DEBUG_ENV).ok().as_deref());
        Ok(config)
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("canonsql").join("config.toml"))
    }

    /// Apply the value of [`DEBUG_ENV`], if set.
    pub fn apply_env(&mut self, debug: Option<&str>) {
        if let Some(value) = debug {
            self.debug = parse_flag(value);
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Builder for Config
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Enable or disable debug diagnostics
    pub fn debug(mut self, debug: bool) -> Self {
        self.config.debug = debug;
        self
    }

    pub fn output(mut self, output: OutputFormat) -> Self {
        self.config.output = output;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Config {
        self.config
    }
}
