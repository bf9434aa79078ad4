use crate::error::{DeckError, Result};
use crate::store::Encoding;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// What the `config` command should do.
#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

/// Configuration for eventdeck, stored in `<data-dir>/config.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeckConfig {
    /// Write collections as indented JSON
    #[serde(default = "default_true")]
    pub pretty_json: bool,

    /// Seed empty collections with demo records (otherwise start empty)
    #[serde(default = "default_true")]
    pub seed_demo_data: bool,
}

fn default_true() -> bool {
    true
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            pretty_json: true,
            seed_demo_data: true,
        }
    }
}

impl DeckConfig {
    pub const KEYS: [&'static str; 2] = ["pretty-json", "seed-demo-data"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(DeckError::Io)?;
        let config: DeckConfig =
            serde_json::from_str(&content).map_err(DeckError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(DeckError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(DeckError::Serialization)?;
        fs::write(config_path, content).map_err(DeckError::Io)?;
        Ok(())
    }

    pub fn encoding(&self) -> Encoding {
        if self.pretty_json {
            Encoding::Pretty
        } else {
            Encoding::Compact
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "pretty-json" => Some(self.pretty_json.to_string()),
            "seed-demo-data" => Some(self.seed_demo_data.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let slot = match key {
            "pretty-json" => &mut self.pretty_json,
            "seed-demo-data" => &mut self.seed_demo_data,
            _ => return Err(DeckError::Config(format!("Unknown config key: {}", key))),
        };
        *slot = parse_bool(value).ok_or_else(|| {
            DeckError::Config(format!(
                "Invalid value for {}: {} (expected true/false)",
                key, value
            ))
        })?;
        Ok(())
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = DeckConfig::default();
        assert!(config.pretty_json);
        assert!(config.seed_demo_data);
        assert_eq!(config.encoding(), Encoding::Pretty);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = DeckConfig::load(dir.path()).unwrap();
        assert_eq!(config, DeckConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("nested");

        let mut config = DeckConfig::default();
        config.set("pretty-json", "false").unwrap();
        config.save(&nested).unwrap();

        let loaded = DeckConfig::load(&nested).unwrap();
        assert!(!loaded.pretty_json);
        assert_eq!(loaded.encoding(), Encoding::Compact);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"seed_demo_data": false}"#).unwrap();

        let loaded = DeckConfig::load(dir.path()).unwrap();
        assert!(loaded.pretty_json);
        assert!(!loaded.seed_demo_data);
    }

    #[test]
    fn test_set_rejects_unknown_key_and_bad_value() {
        let mut config = DeckConfig::default();
        assert!(matches!(
            config.set("file-ext", "true"),
            Err(DeckError::Config(_))
        ));
        assert!(matches!(
            config.set("pretty-json", "maybe"),
            Err(DeckError::Config(_))
        ));
        assert_eq!(config, DeckConfig::default());
    }

    #[test]
    fn test_get_known_keys() {
        let config = DeckConfig::default();
        for key in DeckConfig::KEYS {
            assert_eq!(config.get(key).as_deref(), Some("true"));
        }
        assert_eq!(config.get("nope"), None);
    }
}
