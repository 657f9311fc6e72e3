use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::TicTacToeLobbyConfig;

const CONFIG_FILE_NAME: &str = "tic_tac_toe_client_config.yaml";

pub fn default_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(
    path: &Path,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    pub tictactoe: TicTacToeLobbyConfig,
    /// Fixed bot seed; a fresh one is drawn per run when absent.
    pub seed: Option<u64>,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.tictactoe.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::{ConfigContentProvider, ConfigSerializer};
    use common::games::tictactoe::{Difficulty, GameMode};

    fn get_temp_file_path() -> PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("temp_tic_tac_toe_client_config_{}.yaml", random_number))
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer;
        let serialized_string = serializer.serialize(&default_config).unwrap();
        assert!(serialized_string.contains("difficulty: hard"));
        let deserialized_config: Config = serializer.deserialize(&serialized_string).unwrap();
        assert_eq!(default_config, deserialized_config);
    }

    #[test]
    fn test_config_can_be_saved_and_loaded_with_manager() {
        let mut config = Config {
            seed: Some(17),
            ..Config::default()
        };
        config
            .tictactoe
            .set_game_mode(GameMode::PlayerVsComputer(Difficulty::Medium));

        let file_path = get_temp_file_path();
        let manager = get_config_manager(&file_path);
        assert!(manager.set_config(&config).is_ok());
        assert_eq!(manager.get_config(), Ok(config.clone()));

        let content = FileContentConfigProvider::new(&file_path)
            .get_config_content()
            .unwrap()
            .unwrap();
        assert!(content.contains("difficulty: medium"));

        let fresh_manager = get_config_manager(&file_path);
        assert_eq!(fresh_manager.get_config(), Ok(config));
        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_config_file_does_not_exist_returns_default_config() {
        let manager = get_config_manager(&get_temp_file_path());
        assert_eq!(manager.get_config(), Ok(Config::default()));
    }

    #[test]
    fn test_unknown_difficulty_is_rejected() {
        let serializer = YamlConfigSerializer;
        let content = "tictactoe:\n  vs_computer: true\n  difficulty: impossible\n  bot_delay_ms: 500\nseed: null\n";
        let result: Result<Config, String> = serializer.deserialize(content);
        assert!(result.is_err());
    }
}
