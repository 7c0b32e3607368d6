use crate::error::{PrintdeskError, Result};
use crate::filter::FilterState;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Keys accepted by [`PrintdeskConfig::get`] and [`PrintdeskConfig::set`].
pub const CONFIG_KEYS: [&str; 5] = [
    "seed",
    "default-filter.brand",
    "default-filter.position",
    "default-filter.paper",
    "default-filter.status",
];

/// Configuration for printdesk, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PrintdeskConfig {
    /// Seed the inventory with the example printers when no snapshot exists
    #[serde(default = "default_seed")]
    pub seed: bool,

    /// Criteria applied by `list` when none are given on the command line
    #[serde(default)]
    pub default_filter: FilterState,
}

fn default_seed() -> bool {
    true
}

impl Default for PrintdeskConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            default_filter: FilterState::default(),
        }
    }
}

impl PrintdeskConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(PrintdeskError::Io)?;
        let config: PrintdeskConfig =
            serde_json::from_str(&content).map_err(PrintdeskError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(PrintdeskError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(PrintdeskError::Serialization)?;
        fs::write(config_path, content).map_err(PrintdeskError::Io)?;
        Ok(())
    }

    /// Current value of `key` as displayed to the user, `None` for unknown keys.
    pub fn get(&self, key: &str) -> Option<String> {
        let filter = &self.default_filter;
        let value = match key {
            "seed" => self.seed.to_string(),
            "default-filter.brand" => show(filter.brand),
            "default-filter.position" => show(filter.position),
            "default-filter.paper" => show(filter.paper_count),
            "default-filter.status" => show(filter.status),
            _ => return None,
        };
        Some(value)
    }

    /// Sets `key` from user input. `none` (or an empty string) clears a
    /// default-filter criterion.
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "default-filter.brand" => {
                self.default_filter.brand = parse_opt(value)?;
            }
            "default-filter.position" => {
                self.default_filter.position = parse_opt(value)?;
            }
            "default-filter.paper" => {
                self.default_filter.paper_count = parse_opt(value)?;
            }
            "default-filter.status" => {
                self.default_filter.status = parse_opt(value)?;
            }
            "seed" => {
                self.seed = value
                    .trim()
                    .parse()
                    .map_err(|_| format!("seed must be true or false, got '{}'", value))?;
            }
            _ => return Err(format!("Unknown config key: {}", key)),
        }
        Ok(())
    }
}

fn show<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "none".to_string())
}

fn parse_opt<T: std::str::FromStr<Err = String>>(
    value: &str,
) -> std::result::Result<Option<T>, String> {
    match value.trim() {
        "" | "none" => Ok(None),
        raw => raw.parse().map(Some),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::SortDirection;
    use crate::model::PrinterStatus;

    #[test]
    fn test_default_config() {
        let config = PrintdeskConfig::default();
        assert!(config.seed);
        assert!(config.default_filter.is_empty());
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = PrintdeskConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config, PrintdeskConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dir = temp_dir.path().join("nested");

        let mut config = PrintdeskConfig::default();
        config.set("default-filter.paper", "desc").unwrap();
        config.set("seed", "false").unwrap();
        config.save(&dir).unwrap();

        let loaded = PrintdeskConfig::load(&dir).unwrap();
        assert_eq!(loaded.default_filter.paper_count, Some(SortDirection::Desc));
        assert!(!loaded.seed);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILENAME),
            r#"{"default_filter": {"status": "maintenance"}}"#,
        )
        .unwrap();

        let config = PrintdeskConfig::load(temp_dir.path()).unwrap();
        assert!(config.seed);
        assert_eq!(
            config.default_filter.status,
            Some(PrinterStatus::Maintenance)
        );
        assert_eq!(config.default_filter.brand, None);
    }

    #[test]
    fn test_get_and_clear() {
        let mut config = PrintdeskConfig::default();
        config.set("default-filter.status", "active").unwrap();
        assert_eq!(config.get("default-filter.status").unwrap(), "active");

        config.set("default-filter.status", "none").unwrap();
        assert_eq!(config.get("default-filter.status").unwrap(), "none");
    }

    #[test]
    fn test_rejects_bad_values() {
        let mut config = PrintdeskConfig::default();
        assert!(config.set("default-filter.brand", "sideways").is_err());
        assert!(config.set("seed", "maybe").is_err());
        assert!(config.set("colour", "blue").is_err());
        assert_eq!(config.get("colour"), None);
    }

    #[test]
    fn test_every_key_is_readable() {
        let config = PrintdeskConfig::default();
        for key in CONFIG_KEYS {
            assert!(config.get(key).is_some(), "{key} should be readable");
        }
    }
}
