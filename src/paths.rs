//! Config file resolution for greetbox
//!
//! # Environment Variables
//!
//! - `GREETBOX_CONFIG` - Explicit config file (same as `--config`)
//! - `GREETBOX_CONFIG_DIR` - Override config directory
//!
//! # Path Resolution Priority
//!
//! For config_dir():
//! 1. `GREETBOX_CONFIG_DIR` environment variable
//! 2. `XDG_CONFIG_HOME/greetbox` (if set)
//! 3. Platform default (`dirs::config_dir()/greetbox`)
//!
//! An explicit file (`--config` or `GREETBOX_CONFIG`) must exist. The default
//! `config.toml` inside config_dir() is optional; without it the built-in
//! defaults are used.

use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file
pub const ENV_CONFIG_FILE: &str = "GREETBOX_CONFIG";

/// Environment variable for config directory override
pub const ENV_CONFIG_DIR: &str = "GREETBOX_CONFIG_DIR";

/// File name looked up inside the config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Where the box options come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Passed with `--config` or `GREETBOX_CONFIG`
    Explicit(PathBuf),
    /// Found at the default location
    Discovered(PathBuf),
    /// No file, built-in defaults
    Defaults,
}

/// Get the greetbox config directory path
///
/// Priority:
/// 1. `GREETBOX_CONFIG_DIR` env var
/// 2. `XDG_CONFIG_HOME/greetbox`
/// 3. Platform default
pub fn config_dir() -> Option<PathBuf> {
    resolve_config_dir(
        std::env::var(ENV_CONFIG_DIR).ok(),
        std::env::var("XDG_CONFIG_HOME").ok(),
        dirs::config_dir(),
    )
}

fn resolve_config_dir(
    env_override: Option<String>,
    xdg_config_home: Option<String>,
    platform_default: Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(dir) = env_override.filter(|d| !d.is_empty()) {
        let path = expand(&dir);
        log::debug!("Using config dir from {}: {}", ENV_CONFIG_DIR, path.display());
        return Some(path);
    }

    if let Some(xdg) = xdg_config_home.filter(|d| !d.is_empty()) {
        let path = PathBuf::from(xdg).join("greetbox");
        log::debug!("Using XDG_CONFIG_HOME: {}", path.display());
        return Some(path);
    }

    let path = platform_default?.join("greetbox");
    log::debug!("Using default config dir: {}", path.display());
    Some(path)
}

/// Decide which config file, if any, to load.
pub fn config_source(explicit: Option<&Path>) -> ConfigSource {
    locate(explicit, config_dir().as_deref())
}

fn locate(explicit: Option<&Path>, config_dir: Option<&Path>) -> ConfigSource {
    if let Some(path) = explicit {
        return ConfigSource::Explicit(expand(&path.to_string_lossy()));
    }

    match config_dir.map(|dir| dir.join(CONFIG_FILE_NAME)) {
        Some(path) if path.is_file() => ConfigSource::Discovered(path),
        _ => ConfigSource::Defaults,
    }
}

/// Expand ~ and environment variables in a path string.
pub fn expand(path: &str) -> PathBuf {
    let expanded = shellexpand::full(path).unwrap_or(std::borrow::Cow::Borrowed(path));
    PathBuf::from(expanded.as_ref())
}

// ============================================================================
// Tests
// ============================================================================
