use common::config::Validate;
use common::games::tictactoe::{Difficulty, GameMode};
use serde::{Deserialize, Serialize};

pub const MAX_BOT_DELAY_MS: u32 = 5000;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct TicTacToeLobbyConfig {
    pub vs_computer: bool,
    pub difficulty: Difficulty,
    /// Pause before the computer answers, so its move does not land on top of
    /// the human's.
    pub bot_delay_ms: u32,
}

impl TicTacToeLobbyConfig {
    pub fn game_mode(&self) -> GameMode {
        if self.vs_computer {
            GameMode::PlayerVsComputer(self.difficulty)
        } else {
            GameMode::PlayerVsPlayer
        }
    }

    pub fn set_game_mode(&mut self, mode: GameMode) {
        match mode {
            GameMode::PlayerVsPlayer => self.vs_computer = false,
            GameMode::PlayerVsComputer(difficulty) => {
                self.vs_computer = true;
                self.difficulty = difficulty;
            }
        }
    }
}

impl Validate for TicTacToeLobbyConfig {
    fn validate(&self) -> Result<(), String> {
        if self.bot_delay_ms > MAX_BOT_DELAY_MS {
            return Err(format!(
                "bot_delay_ms must not exceed {}",
                MAX_BOT_DELAY_MS
            ));
        }
        Ok(())
    }
}

impl Default for TicTacToeLobbyConfig {
    fn default() -> Self {
        Self {
            vs_computer: false,
            difficulty: Difficulty::Hard,
            bot_delay_ms: 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_mode_follows_flags() {
        let mut config = TicTacToeLobbyConfig::default();
        assert_eq!(config.game_mode(), GameMode::PlayerVsPlayer);

        config.set_game_mode(GameMode::PlayerVsComputer(Difficulty::Easy));
        assert!(config.vs_computer);
        assert_eq!(config.game_mode(), GameMode::PlayerVsComputer(Difficulty::Easy));

        config.set_game_mode(GameMode::PlayerVsPlayer);
        assert_eq!(config.game_mode(), GameMode::PlayerVsPlayer);
        assert_eq!(config.difficulty, Difficulty::Easy);
    }

    #[test]
    fn test_delay_limit() {
        let config = TicTacToeLobbyConfig {
            bot_delay_ms: MAX_BOT_DELAY_MS + 1,
            ..TicTacToeLobbyConfig::default()
        };
        assert!(config.validate().is_err());
        assert!(TicTacToeLobbyConfig::default().validate().is_ok());
    }
}
