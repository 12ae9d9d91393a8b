//! Runtime configuration
//!
//! Read from `config.toml` in the user's config directory:
//! - Linux: ~/.config/kart-randomizer/config.toml
//! - macOS: ~/Library/Application Support/kart-randomizer/config.toml
//! - Windows: %APPDATA%\kart-randomizer\config.toml
//!
//! The file is optional. `KART_RANDOMIZER_ROOT` overrides the asset root.
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::assets::category::{CHARACTERS_DIR, CUPS_DIR, VEHICLES_DIR};
use crate::error::ConfigError;

pub const ROOT_ENV_VAR: &str = "KART_RANDOMIZER_ROOT";

/// Accepted range for `scale`
pub const MIN_SCALE: f32 = 0.25;
pub const MAX_SCALE: f32 = 4.0;

/// Contents of `config.toml`; every field is optional
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub asset_root: Option<PathBuf>,
    pub scale: Option<f32>,
}

impl ConfigFile {
    pub fn from_toml(text: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read `path`; a missing file yields the defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(text) => Self::from_toml(&text, path),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

/// Resolved settings used by both binaries
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Folder holding `Characters/`, `Vehicles/` and `Cups/`
    pub asset_root: PathBuf,
    /// UI scale factor applied to every slot size
    pub scale: f32,
}

impl Config {
    /// Load the config file, apply the environment override and fill defaults
    pub fn load() -> Result<Self, ConfigError> {
        let file = match Self::config_path() {
            Some(path) => {
                tracing::debug!("Reading config from {}", path.display());
                ConfigFile::load(&path)?
            }
            None => ConfigFile::default(),
        };
        let env_root = std::env::var_os(ROOT_ENV_VAR).map(PathBuf::from);
        Self::resolve(file, env_root)
    }

    /// Combine file values with an optional override root
    pub fn resolve(file: ConfigFile, env_root: Option<PathBuf>) -> Result<Self, ConfigError> {
        let scale = file.scale.unwrap_or(1.0);
        if !(MIN_SCALE..=MAX_SCALE).contains(&scale) {
            return Err(ConfigError::InvalidScale(scale));
        }

        let asset_root = env_root
            .or(file.asset_root)
            .unwrap_or_else(default_asset_root);

        Ok(Config { asset_root, scale })
    }

    /// Where `config.toml` lives, if the platform has a config directory
    pub fn config_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir()?;
        path.push("kart-randomizer");
        path.push("config.toml");
        Some(path)
    }
}

/// The executable's folder when assets sit next to it, else the working directory
fn default_asset_root() -> PathBuf {
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));

    match exe_dir {
        Some(dir) if looks_like_asset_root(&dir) => dir,
        _ => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}

/// Check whether any of the top-level asset folders exist under `dir`
pub fn looks_like_asset_root(dir: &Path) -> bool {
    [CHARACTERS_DIR, VEHICLES_DIR, CUPS_DIR]
        .iter()
        .any(|name| dir.join(name).is_dir())
}
