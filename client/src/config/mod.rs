mod config;
mod tictactoe_lobby_config;

pub use config::{Config, default_config_path, get_config_manager};
pub use tictactoe_lobby_config::TicTacToeLobbyConfig;
