//! Layered settings: config file, then `PSSTORE_*` environment variables,
//! then command-line flags.

use crate::store::regions::Region;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const ENV_REGION: &str = "PSSTORE_REGION";
pub const ENV_PROXY: &str = "PSSTORE_PROXY";
pub const ENV_TIMEOUT: &str = "PSSTORE_TIMEOUT";

const CONFIG_DIR: &str = "psstore-scraper";
const CONFIG_FILE: &str = "config.toml";

/// Settings shared by every command.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Region used when a command does not name one
    pub region: Region,

    /// Proxy URL (e.g., socks5://host:port)
    pub proxy: Option<String>,

    /// Whole-request timeout in seconds
    pub timeout_secs: u64,

    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self { region: Region::default(), proxy: None, timeout_secs: 30, format: OutputFormat::default() }
    }
}

/// Command-line values. `None` leaves the lower layer in place.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub region: Option<Region>,
    pub proxy: Option<String>,
    pub timeout_secs: Option<u64>,
    pub format: Option<OutputFormat>,
}

impl Config {
    /// Config files tried when no path is given, most specific first.
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(CONFIG_FILE)];
        paths.extend(dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE)));
        paths
    }

    /// Reads one TOML file. Keys it leaves out keep their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading config from: {}", path.display());

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot read config file {}", path.display()))?;

        toml::from_str(&content).with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Loads `explicit_path`, or else the first existing file from
    /// [`Config::search_paths`], or else the defaults.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let path = match explicit_path {
            Some(path) => Some(path.to_path_buf()),
            None => Self::search_paths().into_iter().find(|candidate| candidate.is_file()),
        };

        match path {
            Some(path) => Self::from_file(path),
            None => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Applies the `PSSTORE_*` variables of the process environment.
    pub fn with_env(self) -> Result<Self> {
        self.with_vars(|key| std::env::var(key).ok())
    }

    /// Applies `PSSTORE_*` values read through `lookup`.
    ///
    /// A variable that is set but unusable is an error, not a silent fallback:
    /// an unknown region fails with the same [`RegionParseError`] the store
    /// operations report.
    ///
    /// [`RegionParseError`]: crate::store::regions::RegionParseError
    pub fn with_vars(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(region) = lookup(ENV_REGION) {
            self.region = region.parse::<Region>().with_context(|| format!("{} is invalid", ENV_REGION))?;
        }

        if let Some(proxy) = lookup(ENV_PROXY).filter(|proxy| !proxy.trim().is_empty()) {
            self.proxy = Some(proxy);
        }

        if let Some(timeout) = lookup(ENV_TIMEOUT) {
            self.timeout_secs = timeout
                .trim()
                .parse::<u64>()
                .with_context(|| format!("{} must be whole seconds, got '{}'", ENV_TIMEOUT, timeout))?;
        }

        Ok(self)
    }

    /// Applies command-line values on top of everything else.
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        self.region = overrides.region.unwrap_or(self.region);
        self.proxy = overrides.proxy.or(self.proxy);
        self.timeout_secs = overrides.timeout_secs.unwrap_or(self.timeout_secs);
        self.format = overrides.format.unwrap_or(self.format);
        self
    }
}

/// Output format for results. The same names work in config files and on the
/// command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    #[value(alias = "md")]
    #[serde(alias = "md")]
    Markdown,
    Csv,
}
