use thiserror::Error;

use super::types::{Mark, Outcome};

/// Caller errors raised by the move selector, or a selected move the table
/// refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("No empty cell left to play")]
    BoardFull,
    #[error("Game is already over: {0:?}")]
    GameOver(Outcome),
    #[error("Bot cannot play mark {0:?}")]
    InvalidMark(Mark),
    #[error("Move rejected: {0}")]
    Rejected(#[from] PlaceError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlaceError {
    #[error("Game is already over")]
    GameOver,
    #[error("Position {0} out of bounds")]
    OutOfBounds(usize),
    #[error("Cell {0} is already marked")]
    CellOccupied(usize),
    #[error("Not your turn")]
    NotYourTurn,
}
