//! Bootstrap configuration
//!
//! Settings are resolved once at startup in this priority order:
//! 1. Command-line arguments (the binary maps `PORT` onto `--port`)
//! 2. TOML config file (explicit `--config` path, else the per-user default)
//! 3. Compiled defaults
//!
//! A missing config file is not an error. An explicitly named file that is
//! missing or invalid is.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::sources::SourceKind;
use crate::{Error, Result};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND: &str = "0.0.0.0";
pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Config file contents
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    /// HTTP listen port
    #[serde(default)]
    pub port: Option<u16>,

    /// Listen address
    #[serde(default)]
    pub bind: Option<String>,

    /// Directory holding the source exports
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// Serve the browser UI from this directory instead of the embedded copy
    #[serde(default)]
    pub static_dir: Option<PathBuf>,

    #[serde(default)]
    pub sources: SourceFiles,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Per-source file overrides, relative to `data_dir` unless absolute
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SourceFiles {
    #[serde(default)]
    pub system_a: Option<PathBuf>,
    #[serde(default)]
    pub system_b: Option<PathBuf>,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl TomlConfig {
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(e.to_string()))
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Cannot read config file {}: {}", path.display(), e))
        })?;
        Self::parse(&content)
            .map_err(|e| Error::Config(format!("Invalid config file {}: {}", path.display(), e)))
    }
}

/// Per-user config file location (`~/.config/unified-orders/config.toml` on Linux)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("unified-orders").join("config.toml"))
}

/// Load the config file, if any
///
/// An explicit path must exist and parse. The per-user default is optional and
/// an invalid one is skipped with a warning.
pub fn load_toml_config(explicit: Option<&Path>) -> Result<Option<TomlConfig>> {
    if let Some(path) = explicit {
        let config = TomlConfig::from_file(path)?;
        info!("Loaded config file {}", path.display());
        return Ok(Some(config));
    }

    let Some(path) = default_config_path() else {
        return Ok(None);
    };
    if !path.exists() {
        return Ok(None);
    }

    match TomlConfig::from_file(&path) {
        Ok(config) => {
            info!("Loaded config file {}", path.display());
            Ok(Some(config))
        }
        Err(e) => {
            warn!("{} (using defaults)", e);
            Ok(None)
        }
    }
}

/// Settings supplied on the command line
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub port: Option<u16>,
    pub bind: Option<String>,
    pub data_dir: Option<PathBuf>,
    pub static_dir: Option<PathBuf>,
    pub log_level: Option<String>,
}

/// Resolved location of each source export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcesConfig {
    pub system_a: PathBuf,
    pub system_b: PathBuf,
}

impl SourcesConfig {
    /// Default file names inside `data_dir`
    pub fn in_dir(data_dir: &Path) -> Self {
        Self {
            system_a: data_dir.join(SourceKind::SystemA.default_file_name()),
            system_b: data_dir.join(SourceKind::SystemB.default_file_name()),
        }
    }

    pub fn path(&self, kind: SourceKind) -> &Path {
        match kind {
            SourceKind::SystemA => &self.system_a,
            SourceKind::SystemB => &self.system_b,
        }
    }
}

/// Fully resolved service configuration
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub port: u16,
    pub bind: String,
    pub data_dir: PathBuf,
    pub sources: SourcesConfig,
    pub static_dir: Option<PathBuf>,
    pub log_level: String,
}

impl ServiceConfig {
    /// Merge command-line overrides, config file, and compiled defaults
    pub fn resolve(overrides: Overrides, file: Option<TomlConfig>) -> Self {
        let file = file.unwrap_or_default();

        let data_dir = overrides
            .data_dir
            .or(file.data_dir)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));

        let mut sources = SourcesConfig::in_dir(&data_dir);
        if let Some(a) = file.sources.system_a {
            sources.system_a = data_dir.join(a);
        }
        if let Some(b) = file.sources.system_b {
            sources.system_b = data_dir.join(b);
        }

        Self {
            port: overrides.port.or(file.port).unwrap_or(DEFAULT_PORT),
            bind: overrides
                .bind
                .or(file.bind)
                .unwrap_or_else(|| DEFAULT_BIND.to_string()),
            data_dir,
            sources,
            static_dir: overrides.static_dir.or(file.static_dir),
            log_level: overrides.log_level.unwrap_or(file.logging.level),
        }
    }

    /// `host:port` string for binding the listener
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}
