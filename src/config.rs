//! config
//!
//! Configuration schema and loading.
//!
//! # Locations
//!
//! Searched in order (first hit wins):
//! 1. Explicit path from `--config`
//! 2. `$SHELF_CONFIG` if set
//! 3. `<user config dir>/shelfling/config.toml`
//!
//! A missing file is not an error; defaults apply. CLI flags always take
//! precedence over file values.
//!
//! # Example
//!
//! ```toml
//! quiet = false
//!
//! [library]
//! json = false
//!
//! [vehicles]
//! region = "us"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::vehicles::RegionSpec;

/// Environment variable overriding the config search path.
pub const CONFIG_ENV: &str = "SHELF_CONFIG";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    Parse { path: PathBuf, message: String },
}

/// User-scope configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Default for the `--quiet` flag.
    pub quiet: Option<bool>,

    /// Library command defaults.
    pub library: Option<LibraryConfig>,

    /// Vehicles command defaults.
    pub vehicles: Option<VehiclesConfig>,
}

/// Defaults for `shelf library`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct LibraryConfig {
    /// Render `show` output as JSON objects.
    pub json: Option<bool>,
}

/// Defaults for `shelf vehicles`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct VehiclesConfig {
    /// Default region; when absent the demo runs both regions.
    pub region: Option<RegionSpec>,
}

impl Config {
    /// Load configuration, trying the explicit path first, then the
    /// environment override, then the default location.
    ///
    /// A missing file at any location yields the default configuration.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path = explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from))
            .or_else(default_config_path);

        match path {
            Some(ref path) if path.exists() => Self::load_from(path),
            _ => Ok(Self::default()),
        }
    }

    /// Load and parse a config file at a known path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Default quiet flag, `false` when unset.
    pub fn quiet(&self) -> bool {
        self.quiet.unwrap_or(false)
    }

    /// Default JSON rendering for `library show`, `false` when unset.
    pub fn library_json(&self) -> bool {
        self.library.as_ref().and_then(|l| l.json).unwrap_or(false)
    }

    /// Default vehicle region, `None` meaning both regions.
    pub fn vehicle_region(&self) -> Option<RegionSpec> {
        self.vehicles.as_ref().and_then(|v| v.region)
    }
}

/// Canonical user-scope config path.
fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("shelfling").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert!(!config.quiet());
        assert!(!config.library_json());
        assert_eq!(config.vehicle_region(), None);
    }

    #[test]
    fn full_config_parses() {
        let config: Config = toml::from_str(
            r#"
            quiet = true

            [library]
            json = true

            [vehicles]
            region = "eu"
            "#,
        )
        .unwrap();

        assert!(config.quiet());
        assert!(config.library_json());
        assert_eq!(config.vehicle_region(), Some(RegionSpec::Eu));
    }

    #[test]
    fn unknown_keys_rejected() {
        let result: Result<Config, _> = toml::from_str("unknown_key = true");
        assert!(result.is_err());
    }

    #[test]
    fn invalid_region_rejected() {
        let result: Result<Config, _> = toml::from_str("[vehicles]\nregion = \"mars\"");
        assert!(result.is_err());
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_from_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[vehicles]\nregion = \"us\"").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.vehicle_region(), Some(RegionSpec::Us));
    }

    #[test]
    fn parse_error_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "not valid toml [").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("config.toml"));
    }
}
