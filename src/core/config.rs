//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.toukan/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::board::DEFAULT_LANE_TITLES;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ToukanConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub editor: EditorConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub board_path: Option<String>,
    pub default_lanes: Option<Vec<String>>,
    pub save_on_quit: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct EditorConfig {
    pub command: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_BOARD_FILE: &str = ".toukan.json";
pub const DEFAULT_EDITOR: &str = "vi";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub board_path: PathBuf,
    pub default_lanes: Vec<String>,
    pub save_on_quit: bool,
    pub editor: String,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns `~/.toukan/`, where the config and log file live.
pub fn data_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".toukan"))
}

/// Returns the path to `~/.toukan/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    data_dir().map(|d| d.join("config.toml"))
}

/// Load config from `path`, or `~/.toukan/config.toml` when `None`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `ToukanConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config(path: Option<&Path>) -> Result<ToukanConfig, ConfigError> {
    let path = match path.map(Path::to_path_buf).or_else(config_path) {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(ToukanConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(ToukanConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: ToukanConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# TouKan Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# board_path = "~/.toukan.json"      # Or set TOUKAN_BOARD, or pass --board
# default_lanes = ["To Do", "Doing", "Done"]   # Used when no board file exists
# save_on_quit = true

# [editor]
# command = "vim"                    # Defaults to $VISUAL, then $EDITOR, then vi
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_board` is the `--board` flag (None = not specified).
pub fn resolve(config: &ToukanConfig, cli_board: Option<&Path>) -> ResolvedConfig {
    // Board path: CLI → env → config → default
    let board_path = cli_board
        .map(Path::to_path_buf)
        .or_else(|| std::env::var("TOUKAN_BOARD").ok().map(PathBuf::from))
        .or_else(|| config.general.board_path.as_deref().map(expand_home))
        .unwrap_or_else(default_board_path);

    // Editor: config → $VISUAL → $EDITOR → default
    let editor = config
        .editor
        .command
        .clone()
        .or_else(|| non_empty_env("VISUAL"))
        .or_else(|| non_empty_env("EDITOR"))
        .unwrap_or_else(|| DEFAULT_EDITOR.to_string());

    let default_lanes = match config.general.default_lanes {
        Some(ref lanes) if !lanes.is_empty() => lanes.clone(),
        Some(_) => {
            warn!("default_lanes is empty, using built-in lanes");
            builtin_lanes()
        }
        None => builtin_lanes(),
    };

    ResolvedConfig {
        board_path,
        default_lanes,
        save_on_quit: config.general.save_on_quit.unwrap_or(true),
        editor,
    }
}

fn builtin_lanes() -> Vec<String> {
    DEFAULT_LANE_TITLES.iter().map(|s| s.to_string()).collect()
}

fn default_board_path() -> PathBuf {
    match dirs::home_dir() {
        Some(home) => home.join(DEFAULT_BOARD_FILE),
        None => {
            warn!("Could not determine home directory, keeping board in working directory");
            PathBuf::from(DEFAULT_BOARD_FILE)
        }
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Expand a leading `~/` to the home directory.
fn expand_home(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}
