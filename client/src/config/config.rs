use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tictactoe_common::config::{
    ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer,
};

use super::DisplayConfig;

const CONFIG_FILE_NAME: &str = "tictactoe_client_config.yaml";

fn default_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(
    path: Option<&Path>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    match path {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => ConfigManager::from_yaml_file(default_config_path()),
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub display: DisplayConfig,
    #[serde(default)]
    pub show_bot_score: bool,
    #[serde(default)]
    pub log_prefix: Option<String>,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.display.validate()?;
        if let Some(prefix) = &self.log_prefix
            && prefix.trim().is_empty()
        {
            return Err("log_prefix must not be blank if provided".to_string());
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            display: DisplayConfig::default(),
            show_bot_score: false,
            log_prefix: Some("tictactoe".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_common::ConfigError;
    use tictactoe_common::config::{ConfigContentProvider, ConfigSerializer};

    fn get_temp_file_path() -> PathBuf {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_tictactoe_client_config_{}.yaml", random_number));
        path
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();

        let serialized = serializer.serialize(&default_config).unwrap();
        let deserialized: Config = serializer.deserialize(&serialized).unwrap();

        assert_eq!(default_config, deserialized);
    }

    #[test]
    fn test_default_config_can_be_saved_and_loaded_file() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();
        let file_path = get_temp_file_path();
        let content_provider = FileContentConfigProvider::new(file_path.clone());

        let serialized = serializer.serialize(&default_config).unwrap();
        content_provider.set_config_content(&serialized).unwrap();
        let read_back = content_provider.get_config_content().unwrap().unwrap();
        let deserialized: Config = serializer.deserialize(&read_back).unwrap();

        assert_eq!(default_config, deserialized);
        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_config_manager_round_trip() {
        let config = Config {
            display: DisplayConfig {
                human_symbol: 'H',
                bot_symbol: 'A',
                empty_symbol: '_',
            },
            show_bot_score: true,
            log_prefix: None,
        };
        let file_path = get_temp_file_path();
        let manager = get_config_manager(Some(file_path.as_path()));

        manager.set_config(&config).unwrap();
        let loaded = manager.get_config().unwrap();

        assert_eq!(config, loaded);
        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_config_file_does_not_exist_returns_default_config() {
        let manager = get_config_manager(Some(Path::new("this_file_does_not_exist.yaml")));

        let config = manager.get_config().unwrap();

        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_optional_fields_fall_back_to_defaults() {
        let serializer = YamlConfigSerializer::new();
        let content = "display:\n  human_symbol: X\n  bot_symbol: O\n  empty_symbol: '-'\n";

        let config: Config = serializer.deserialize(content).unwrap();

        assert!(!config.show_bot_score);
        assert_eq!(config.log_prefix, None);
        assert_eq!(config.display.empty_symbol, '-');
    }

    #[test]
    fn test_invalid_config_is_not_saved() {
        let config = Config {
            display: DisplayConfig {
                human_symbol: 'X',
                bot_symbol: 'X',
                empty_symbol: '.',
            },
            ..Config::default()
        };
        let file_path = get_temp_file_path();
        let manager = get_config_manager(Some(file_path.as_path()));

        let result = manager.set_config(&config);

        assert!(matches!(result, Err(ConfigError::Validation(_))));
        assert!(!file_path.exists());
    }

    #[test]
    fn test_blank_log_prefix_is_rejected() {
        let config = Config {
            log_prefix: Some("   ".to_string()),
            ..Config::default()
        };

        assert!(config.validate().is_err());
    }
}
