//! Configuration for mealplanner

use eyre::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the JSONL food catalog
    #[serde(default = "default_catalog_path")]
    pub catalog_path: PathBuf,

    /// Unit label applied when an item arrives without one
    #[serde(default = "default_unit")]
    pub default_unit: String,
}

fn default_catalog_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("mealplanner")
        .join("catalog.jsonl")
}

fn default_unit() -> String {
    foodcatalog::DEFAULT_UNIT.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: default_catalog_path(),
            default_unit: default_unit(),
        }
    }
}

impl Config {
    /// Load config from file, or use defaults
    pub fn load(path: Option<&PathBuf>) -> Result<Self> {
        if let Some(config_path) = path {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_yaml::from_str(&content)?;
            return Ok(config);
        }

        // Try default locations
        let default_paths = [
            dirs::config_dir().map(|p| p.join("mealplanner").join("config.yml")),
            Some(PathBuf::from("mealplanner.yml")),
        ];

        for path in default_paths.iter().flatten() {
            if path.exists() {
                let content = std::fs::read_to_string(path)?;
                let config: Config = serde_yaml::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Config::default())
    }

    /// Save config to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.default_unit, "serving");
        assert!(config.catalog_path.ends_with("catalog.jsonl"));
    }

    #[test]
    fn test_load_explicit_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yml");
        std::fs::write(&path, "catalog_path: /tmp/foods.jsonl\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.catalog_path, PathBuf::from("/tmp/foods.jsonl"));
        // Unspecified fields keep their defaults
        assert_eq!(config.default_unit, "serving");
    }

    #[test]
    fn test_save_round_trip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yml");

        let mut config = Config::default();
        config.default_unit = "portion".to_string();
        config.save(&path).unwrap();

        let loaded = Config::load(Some(&path)).unwrap();
        assert_eq!(loaded.default_unit, "portion");
    }
}
