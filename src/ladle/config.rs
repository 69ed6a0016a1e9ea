use crate::error::{LadleError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_RECIPES_FILE: &str = "recipes.json";

/// Configuration for a catalog directory, stored in `<dir>/config.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LadleConfig {
    /// File name of the catalog within the directory.
    #[serde(default = "default_recipes_file")]
    pub recipes_file: String,
}

fn default_recipes_file() -> String {
    DEFAULT_RECIPES_FILE.to_string()
}

impl Default for LadleConfig {
    fn default() -> Self {
        Self {
            recipes_file: DEFAULT_RECIPES_FILE.to_string(),
        }
    }
}

impl LadleConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(LadleError::Io)?;
        let config: LadleConfig =
            serde_json::from_str(&content).map_err(LadleError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(LadleError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(LadleError::Serialization)?;
        fs::write(config_path, content).map_err(LadleError::Io)?;
        Ok(())
    }

    pub fn recipes_file(&self) -> &str {
        &self.recipes_file
    }

    /// Set the catalog file name, rejecting anything that would escape the
    /// catalog directory.
    pub fn set_recipes_file(&mut self, name: &str) -> Result<()> {
        let name = name.trim();
        if name.is_empty() || name.contains(['/', '\\']) {
            return Err(LadleError::Validation(format!(
                "'{}' is not a valid file name",
                name
            )));
        }
        self.recipes_file = name.to_string();
        Ok(())
    }

    /// String-keyed access for the `config` command.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "recipes-file" => Some(self.recipes_file.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "recipes-file" => self
                .set_recipes_file(value)
                .map_err(|e| e.to_string()),
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = LadleConfig::default();
        assert_eq!(config.recipes_file, "recipes.json");
    }

    #[test]
    fn test_set_recipes_file() {
        let mut config = LadleConfig::default();
        config.set_recipes_file("cookbook.json").unwrap();
        assert_eq!(config.recipes_file, "cookbook.json");
    }

    #[test]
    fn test_set_recipes_file_rejects_paths() {
        let mut config = LadleConfig::default();
        assert!(config.set_recipes_file("../outside.json").is_err());
        assert!(config.set_recipes_file("").is_err());
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = LadleConfig::load(dir.path()).unwrap();
        assert_eq!(config, LadleConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();

        let mut config = LadleConfig::default();
        config.set_recipes_file("cookbook.json").unwrap();
        config.save(dir.path()).unwrap();

        let loaded = LadleConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.recipes_file, "cookbook.json");
    }
}
