use std::path::Path;

use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::games::tictactoe::{FirstPlayerMode, Mark};
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "tictactoe_client_config.yaml";
pub const MAX_BOT_MOVE_DELAY_MS: u64 = 5000;

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub type ClientConfigManager =
    ConfigManager<FileContentConfigProvider, ClientConfig, YamlConfigSerializer>;

pub fn get_config_manager(path: Option<&Path>) -> ClientConfigManager {
    match path {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => ConfigManager::from_yaml_file(get_config_path()),
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct ClientConfig {
    pub player_mark: Mark,
    pub first_player: FirstPlayerMode,
    /// Pause before the computer's reply is applied, so the turn change is visible.
    pub bot_move_delay_ms: u64,
    #[serde(default)]
    pub log_file: Option<String>,
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<(), String> {
        if self.player_mark == Mark::Empty {
            return Err("player_mark must be X or O".to_string());
        }
        if self.bot_move_delay_ms > MAX_BOT_MOVE_DELAY_MS {
            return Err(format!(
                "bot_move_delay_ms must not exceed {}",
                MAX_BOT_MOVE_DELAY_MS
            ));
        }
        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            player_mark: Mark::X,
            first_player: FirstPlayerMode::Ask,
            bot_move_delay_ms: 400,
            log_file: None,
        }
    }
}
