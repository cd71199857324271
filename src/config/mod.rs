//! Configuration management module.
//!
//! This module handles loading, saving, and managing application
//! configuration, including the theme preference and the daily step goal.

mod error;

pub use error::ConfigError;

use crate::error::AppResult;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/vitals-tui";

/// Oversees management of configuration file.
///
#[derive(Clone)]
pub struct Config {
    pub theme_name: String,
    pub step_goal: u32,
    file_path: Option<PathBuf>,
}

/// Define specification for configuration file.
///
#[derive(Serialize, Deserialize)]
struct FileSpec {
    #[serde(default = "default_theme_name")]
    pub theme_name: String,
    #[serde(default = "default_step_goal")]
    pub step_goal: u32,
}

fn default_theme_name() -> String {
    "midnight".to_string()
}

fn default_step_goal() -> u32 {
    10_000
}

impl Config {
    /// Return a new instance with default preferences.
    ///
    pub fn new() -> Config {
        Config {
            file_path: None,
            theme_name: default_theme_name(),
            step_goal: default_step_goal(),
        }
    }

    /// Try to load an existing configuration from the disk using the custom
    /// path if provided. Missing files are not an error; defaults apply and
    /// the file is created on the first save.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> AppResult<()> {
        // Use default path unless custom path provided
        let dir_path = match custom_path {
            Some(path) => Path::new(&path).to_path_buf(),
            None => Config::default_path()?,
        };

        // Try to create dir path if it doesn't exist
        if !dir_path.exists() {
            fs::create_dir_all(&dir_path).map_err(|e| ConfigError::CreateDirectoryFailed {
                path: dir_path.clone(),
                source: e,
            })?;
        }

        // Specify config file path
        self.file_path = Some(dir_path.join(Path::new(FILE_NAME)));
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;

        if file_path.exists() {
            let contents = fs::read_to_string(file_path).map_err(|e| ConfigError::LoadFailed {
                path: file_path.clone(),
                message: format!("IO error: {}", e),
            })?;
            let data: FileSpec = serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?;
            self.theme_name = data.theme_name;
            self.step_goal = data.step_goal;
        }

        Ok(())
    }

    /// Save the current configuration to disk.
    ///
    pub fn save(&self) -> AppResult<()> {
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;
        let data = FileSpec {
            theme_name: self.theme_name.clone(),
            step_goal: self.step_goal,
        };
        let content = serde_yaml::to_string(&data)
            .map_err(|e| ConfigError::SerializationFailed(e.to_string()))?;

        // Create parent directory if it doesn't exist
        if let Some(parent) = file_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| ConfigError::CreateDirectoryFailed {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let mut file = fs::File::create(file_path).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        write!(file, "{}", content).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        file.flush().map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        Ok(())
    }

    /// Return the directory that holds the configuration file, if one has
    /// been resolved by `load`.
    ///
    pub fn directory(&self) -> Option<PathBuf> {
        self.file_path
            .as_ref()
            .and_then(|path| path.parent().map(Path::to_path_buf))
    }

    /// Returns the path buffer for the default path to the configuration file
    /// or an error if the home directory could not be found.
    ///
    fn default_path() -> AppResult<PathBuf> {
        match dirs::home_dir() {
            Some(home) => {
                let home_path = Path::new(&home);
                let default_config_path = Path::new(DEFAULT_DIRECTORY_PATH);
                Ok(home_path.join(default_config_path))
            }
            None => Err(ConfigError::HomeDirectoryNotFound.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_defaults() {
        let config = Config::new();
        assert_eq!(config.theme_name, "midnight");
        assert_eq!(config.step_goal, 10_000);
    }

    #[test]
    fn test_load_missing_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::new();
        config
            .load(Some(dir.path().to_str().unwrap()))
            .expect("load should tolerate a missing file");
        assert_eq!(config.theme_name, "midnight");
        assert_eq!(config.step_goal, 10_000);
    }

    #[test]
    fn test_save_and_reload_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::new();
        config.load(Some(dir.path().to_str().unwrap())).unwrap();
        config.theme_name = "daylight".to_string();
        config.step_goal = 8_000;
        config.save().unwrap();

        let mut reloaded = Config::new();
        reloaded.load(Some(dir.path().to_str().unwrap())).unwrap();
        assert_eq!(reloaded.theme_name, "daylight");
        assert_eq!(reloaded.step_goal, 8_000);
    }

    #[test]
    fn test_save_without_load_fails() {
        let config = Config::new();
        assert!(config.save().is_err());
    }

    #[test]
    fn test_partial_file_applies_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(FILE_NAME), "theme_name: daylight\n").unwrap();
        let mut config = Config::new();
        config.load(Some(dir.path().to_str().unwrap())).unwrap();
        assert_eq!(config.theme_name, "daylight");
        assert_eq!(config.step_goal, 10_000);
    }
}
