//! Configuration loading and management.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

/// File name of the pointer in the home directory.
const POINTER_FILE_NAME: &str = ".sand-config";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Path to the pointer file naming the active tracking file.
    pub pointer_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        Self {
            pointer_path: home.join(POINTER_FILE_NAME),
        }
    }
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // SAND_POINTER_PATH etc.
        figment = figment.merge(Env::prefixed("SAND_"));

        figment.extract()
    }
}

/// Returns the platform-specific config directory for sand.
///
/// On Linux: `~/.config/sand`
fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("sand"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pointer_lives_in_home() {
        let config = Config::default();
        assert_eq!(config.pointer_path.file_name().unwrap(), POINTER_FILE_NAME);
        assert_eq!(
            config.pointer_path.parent(),
            dirs::home_dir().as_deref()
        );
    }

    #[test]
    fn test_dirs_config_path_ends_with_sand() {
        let path = dirs_config_path().unwrap();
        assert_eq!(path.file_name().unwrap(), "sand");
    }

    #[test]
    fn test_explicit_config_file_overrides_default() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("sand.toml");
        std::fs::write(&file, "pointer_path = \"/tmp/elsewhere/.sand-config\"\n").unwrap();

        let config = Config::load_from(Some(&file)).unwrap();
        assert_eq!(
            config.pointer_path,
            PathBuf::from("/tmp/elsewhere/.sand-config")
        );
    }
}
