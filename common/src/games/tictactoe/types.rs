use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mark {
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Mark::Empty
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Mark::Empty => ".",
            Mark::X => "X",
            Mark::O => "O",
        };
        write!(f, "{}", symbol)
    }
}

/// Three cell indices that win when they all hold the same mark.
pub type Line = [usize; 3];

/// Rows top-to-bottom, columns left-to-right, then both diagonals.
/// The evaluator reports the first match in this order.
pub const LINES: [Line; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    NoResult,
    Win { mark: Mark, line: Line },
    Draw,
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::NoResult)
    }

    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Win { mark, .. } => Some(*mark),
            _ => None,
        }
    }

    pub fn winning_line(&self) -> Option<Line> {
        match self {
            Outcome::Win { line, .. } => Some(*line),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("Unknown difficulty: {}", other)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameMode {
    PlayerVsPlayer,
    PlayerVsComputer(Difficulty),
}

impl GameMode {
    pub fn difficulty(&self) -> Option<Difficulty> {
        match self {
            GameMode::PlayerVsPlayer => None,
            GameMode::PlayerVsComputer(difficulty) => Some(*difficulty),
        }
    }

    pub fn label(&self) -> String {
        match self {
            GameMode::PlayerVsPlayer => "Player vs Player".to_string(),
            GameMode::PlayerVsComputer(difficulty) => format!(
                "Player vs Computer ({})",
                difficulty.to_string().to_uppercase()
            ),
        }
    }
}

impl FromStr for GameMode {
    type Err = String;

    /// Accepts `pvp` or a difficulty name, which selects a computer opponent.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim().to_ascii_lowercase();
        if value == "pvp" {
            return Ok(GameMode::PlayerVsPlayer);
        }
        value
            .parse::<Difficulty>()
            .map(GameMode::PlayerVsComputer)
            .map_err(|_| format!("Unknown game mode: {} (expected pvp, easy, medium or hard)", s))
    }
}
