use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use super::{
    ConfigContentProvider, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};

/// Loads a config once, validates it, and caches it until the next `set_config`.
pub struct ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer = YamlConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    config_serializer: TConfigSerializer,
    config_content_provider: TConfigContentProvider,
    config: Arc<Mutex<Option<TConfig>>>,
}

impl<TConfig> ConfigManager<FileContentConfigProvider, TConfig, YamlConfigSerializer>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(file_path: impl Into<PathBuf>) -> Self {
        Self::new(
            FileContentConfigProvider::new(file_path),
            YamlConfigSerializer,
        )
    }
}

impl<TConfigContentProvider, TConfig, TConfigSerializer>
    ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    pub fn new(
        config_content_provider: TConfigContentProvider,
        config_serializer: TConfigSerializer,
    ) -> Self {
        Self {
            config: Arc::new(Mutex::new(None)),
            config_content_provider,
            config_serializer,
        }
    }

    /// Returns the stored config, or `TConfig::default()` when nothing is stored.
    pub fn get_config(&self) -> Result<TConfig, String> {
        let mut current = self
            .config
            .lock()
            .map_err(|e| format!("Config cache poisoned: {}", e))?;

        if let Some(config) = current.as_ref() {
            return Ok(config.clone());
        }

        let Some(config_data) = self.config_content_provider.get_config_content()? else {
            return Ok(TConfig::default());
        };

        let config = self.config_serializer.deserialize(&config_data)?;
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        *current = Some(config.clone());
        Ok(config)
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), String> {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        let serialized_config = self.config_serializer.serialize(config)?;

        self.config_content_provider
            .set_config_content(&serialized_config)?;

        let mut current = self
            .config
            .lock()
            .map_err(|e| format!("Config cache poisoned: {}", e))?;
        *current = Some(config.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct PacingConfig {
        delay_ms: u32,
    }

    impl Default for PacingConfig {
        fn default() -> Self {
            Self { delay_ms: 500 }
        }
    }

    impl Validate for PacingConfig {
        fn validate(&self) -> Result<(), String> {
            if self.delay_ms > 5000 {
                return Err("delay_ms must not exceed 5000".to_string());
            }
            Ok(())
        }
    }

    fn get_temp_file_path() -> PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("temp_tic_tac_toe_config_{}.yaml", random_number))
    }

    #[test]
    fn test_missing_file_returns_default() {
        let manager: ConfigManager<_, PacingConfig> =
            ConfigManager::from_yaml_file(get_temp_file_path());
        assert_eq!(manager.get_config(), Ok(PacingConfig::default()));
    }

    #[test]
    fn test_set_then_get_from_fresh_manager() {
        let file_path = get_temp_file_path();
        let manager: ConfigManager<_, PacingConfig> = ConfigManager::from_yaml_file(&file_path);
        let config = PacingConfig { delay_ms: 250 };
        assert!(manager.set_config(&config).is_ok());
        assert_eq!(manager.get_config(), Ok(config.clone()));

        let reloaded: ConfigManager<_, PacingConfig> = ConfigManager::from_yaml_file(&file_path);
        assert_eq!(reloaded.get_config(), Ok(config));
        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_invalid_config_is_not_saved() {
        let file_path = get_temp_file_path();
        let manager: ConfigManager<_, PacingConfig> = ConfigManager::from_yaml_file(&file_path);
        let result = manager.set_config(&PacingConfig { delay_ms: 10_000 });
        assert!(result.is_err());
        assert!(!file_path.exists());
    }

    #[test]
    fn test_invalid_file_content_is_rejected() {
        let file_path = get_temp_file_path();
        std::fs::write(&file_path, "delay_ms: 9999\n").unwrap();
        let manager: ConfigManager<_, PacingConfig> = ConfigManager::from_yaml_file(&file_path);
        let error = manager.get_config().unwrap_err();
        assert!(error.starts_with("Config validation error"), "{}", error);
        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_malformed_yaml_is_reported() {
        let file_path = get_temp_file_path();
        std::fs::write(&file_path, "delay_ms: [not a number\n").unwrap();
        let manager = ConfigManager::<_, PacingConfig, _>::new(
            FileContentConfigProvider::new(&file_path),
            YamlConfigSerializer,
        );
        let error = manager.get_config().unwrap_err();
        assert!(error.starts_with("Failed to deserialize config"), "{}", error);
        let _ = std::fs::remove_file(file_path);
    }
}
