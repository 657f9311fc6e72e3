use std::str::FromStr;

use common::games::tictactoe::{CELL_COUNT, GameMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Place(usize),
    Restart,
    SetMode(GameMode),
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let Some(head) = parts.next() else {
            return Err("Empty command".to_string());
        };
        let argument = parts.next();
        if parts.next().is_some() {
            return Err(format!("Too many arguments: {}", s.trim()));
        }

        match (head.to_ascii_lowercase().as_str(), argument) {
            ("q" | "quit", None) => Ok(Command::Quit),
            ("r" | "restart" | "reset", None) => Ok(Command::Restart),
            ("h" | "help", None) => Ok(Command::Help),
            ("m" | "mode", Some(mode)) => mode.parse().map(Command::SetMode),
            ("m" | "mode", None) => Err("Missing mode: pvp, easy, medium or hard".to_string()),
            (cell, None) => match cell.parse::<usize>() {
                Ok(index) if index < CELL_COUNT => Ok(Command::Place(index)),
                Ok(index) => Err(format!("Cell {} is off the board (0-8)", index)),
                Err(_) => Err(format!("Unknown command: {}", s.trim())),
            },
            _ => Err(format!("Unknown command: {}", s.trim())),
        }
    }
}
