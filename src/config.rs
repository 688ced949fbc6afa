// ABOUTME: Runtime configuration from command line flags and an optional TOML config file

use clap::Parser;
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

use crate::app::state::DEFAULT_SIDEBAR_KEY;

/// Letters already bound to other actions.
const RESERVED_KEYS: [char; 3] = ['a', 'd', 'q'];

#[derive(Debug, Parser, Default)]
#[command(name = "flashcards", version, about = "Study flashcards in the terminal")]
pub struct Cli {
    /// Directory the deck is saved in
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Config file to read instead of the default location
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Do not capture the mouse
    #[arg(long)]
    pub no_mouse: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid sidebar key {0:?}: expected a single letter other than a, d or q")]
    InvalidSidebarKey(String),
}

/// Contents of `config.toml`. Every field is optional.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub data_dir: Option<PathBuf>,
    pub mouse: Option<bool>,
    pub sidebar_key: Option<String>,
}

impl FileConfig {
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}

/// Locations used when neither the CLI nor the config file say otherwise.
#[derive(Debug, Clone)]
pub struct DefaultPaths {
    pub config_file: PathBuf,
    pub data_dir: PathBuf,
    pub log_dir: PathBuf,
}

impl DefaultPaths {
    pub fn discover() -> Self {
        match ProjectDirs::from("", "", "flashcards") {
            Some(dirs) => Self {
                config_file: dirs.config_dir().join("config.toml"),
                data_dir: dirs.data_dir().to_path_buf(),
                log_dir: dirs.data_local_dir().join("logs"),
            },
            None => {
                let base = PathBuf::from(".flashcards");
                Self {
                    config_file: base.join("config.toml"),
                    data_dir: base.join("data"),
                    log_dir: base.join("logs"),
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub log_dir: PathBuf,
    pub mouse: bool,
    pub sidebar_key: char,
}

impl AppConfig {
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        Self::load_with(cli, &DefaultPaths::discover())
    }

    pub fn load_with(cli: &Cli, defaults: &DefaultPaths) -> Result<Self, ConfigError> {
        let file = match &cli.config {
            Some(path) => Some(read_config(path)?),
            None if defaults.config_file.exists() => Some(read_config(&defaults.config_file)?),
            None => None,
        };
        Self::resolve(cli, file.unwrap_or_default(), defaults)
    }

    /// Merge CLI flags over the config file over built-in defaults.
    pub fn resolve(cli: &Cli, file: FileConfig, defaults: &DefaultPaths) -> Result<Self, ConfigError> {
        let sidebar_key = match file.sidebar_key {
            Some(raw) => parse_sidebar_key(&raw)?,
            None => DEFAULT_SIDEBAR_KEY,
        };

        Ok(Self {
            data_dir: cli
                .data_dir
                .clone()
                .or(file.data_dir)
                .unwrap_or_else(|| defaults.data_dir.clone()),
            log_dir: defaults.log_dir.clone(),
            mouse: !cli.no_mouse && file.mouse.unwrap_or(true),
            sidebar_key,
        })
    }
}

fn read_config(path: &Path) -> Result<FileConfig, ConfigError> {
    info!("Reading config from {:?}", path);
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    FileConfig::parse(&content)
}

fn parse_sidebar_key(raw: &str) -> Result<char, ConfigError> {
    let mut chars = raw.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) if ch.is_ascii_alphabetic() => {
            let ch = ch.to_ascii_lowercase();
            if RESERVED_KEYS.contains(&ch) {
                Err(ConfigError::InvalidSidebarKey(raw.to_string()))
            } else {
                Ok(ch)
            }
        }
        _ => Err(ConfigError::InvalidSidebarKey(raw.to_string())),
    }
}
