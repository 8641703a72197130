use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use crate::transform::DEFAULT_PRECISION;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "SEQTAB_CONFIG";

pub const DEFAULT_LINE_WIDTH: usize = 60;

/// User defaults, read from `config.toml` in the platform config directory.
/// Command-line flags always take precedence.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Decimal places for GC / base content columns
    #[serde(default = "default_precision")]
    pub precision: usize,
    /// Residues per line when writing FASTA (0 = no wrapping)
    #[serde(default = "default_line_width")]
    pub line_width: usize,
}

fn default_precision() -> usize {
    DEFAULT_PRECISION
}

fn default_line_width() -> usize {
    DEFAULT_LINE_WIDTH
}

impl Default for Config {
    fn default() -> Self {
        Self {
            precision: default_precision(),
            line_width: default_line_width(),
        }
    }
}

impl Config {
    pub fn path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        ProjectDirs::from("org", "seqtab", "seqtab")
            .map(|proj_dirs| proj_dirs.config_dir().join("config.toml"))
    }

    /// Load the user config, falling back to defaults when the file is
    /// missing or unusable.
    pub fn load() -> Self {
        let Some(config_path) = Self::path() else {
            return Config::default();
        };
        if !config_path.exists() {
            return Config::default();
        }

        match fs::read_to_string(&config_path) {
            Ok(content) => match Self::parse(&content) {
                Ok(config) => {
                    log::debug!("Loaded config from {}", config_path.display());
                    config
                }
                Err(e) => {
                    log::warn!(
                        "Ignoring invalid config {}: {}",
                        config_path.display(),
                        e
                    );
                    Config::default()
                }
            },
            Err(e) => {
                log::warn!("Cannot read config {}: {}", config_path.display(), e);
                Config::default()
            }
        }
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
