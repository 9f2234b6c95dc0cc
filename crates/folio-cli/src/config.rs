//! Configuration - config file, environment, and CLI flag precedence
//!
//! Lowest to highest: built-in defaults, ~/.config/folio/config.toml,
//! the FOLIO_REDUCED_MOTION environment variable, CLI flags.

use std::path::PathBuf;

use serde::Deserialize;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct Config {
    pub theme: String,
    pub reduced_motion: bool,
    pub skip_intro: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "blossom".to_string(),
            reduced_motion: false,
            skip_intro: false,
        }
    }
}

/// On-disk shape; every field optional so a partial file works
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    theme: Option<String>,
    reduced_motion: Option<bool>,
    skip_intro: Option<bool>,
}

impl Config {
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("folio").join("config.toml"))
    }

    /// Defaults merged with the config file (when present) and environment
    pub fn load() -> Self {
        let mut config = Self::default();

        if let Some(path) = Self::config_path() {
            match std::fs::read_to_string(&path) {
                Ok(raw) => match toml::from_str::<ConfigFile>(&raw) {
                    Ok(file) => config.merge_file(file),
                    Err(err) => warn!(%err, ?path, "ignoring malformed config file"),
                },
                // a missing file is the normal case
                Err(_) => {}
            }
        }

        if env_flag("FOLIO_REDUCED_MOTION") {
            config.reduced_motion = true;
        }

        config
    }

    fn merge_file(&mut self, file: ConfigFile) {
        if let Some(theme) = file.theme {
            self.theme = theme;
        }
        if let Some(reduced_motion) = file.reduced_motion {
            self.reduced_motion = reduced_motion;
        }
        if let Some(skip_intro) = file.skip_intro {
            self.skip_intro = skip_intro;
        }
    }

    #[cfg(test)]
    fn from_toml(raw: &str) -> Result<Self, toml::de::Error> {
        let mut config = Self::default();
        config.merge_file(toml::from_str(raw)?);
        Ok(config)
    }
}

fn env_flag(name: &str) -> bool {
    std::env::var(name)
        .map(|v| matches!(v.as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.theme, "blossom");
        assert!(!config.reduced_motion);
        assert!(!config.skip_intro);
    }

    #[test]
    fn test_partial_file_overrides() {
        let config = Config::from_toml("reduced_motion = true\n").unwrap();
        assert!(config.reduced_motion);
        assert_eq!(config.theme, "blossom", "unset fields keep defaults");
    }

    #[test]
    fn test_full_file() {
        let config =
            Config::from_toml("theme = \"midnight\"\nreduced_motion = false\nskip_intro = true\n")
                .unwrap();
        assert_eq!(config.theme, "midnight");
        assert!(config.skip_intro);
    }

    #[test]
    fn test_malformed_file_rejected() {
        assert!(Config::from_toml("theme = [nonsense").is_err());
    }
}
