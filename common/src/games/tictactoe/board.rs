use std::fmt;

use super::types::Mark;

pub const BOARD_SIZE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// A 3x3 grid stored row-major: index `y * 3 + x`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; CELL_COUNT],
        }
    }

    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub fn is_empty_at(&self, index: usize) -> bool {
        self.get(index) == Some(Mark::Empty)
    }

    /// Returns a copy of the board with `mark` written at `index`.
    /// The caller checks the index; out-of-range writes panic.
    pub fn place(&self, index: usize, mark: Mark) -> Self {
        let mut next = *self;
        next.cells[index] = mark;
        next
    }

    pub(crate) fn set(&mut self, index: usize, mark: Mark) {
        self.cells[index] = mark;
    }

    pub fn empty_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Relabels every X as O and every O as X.
    pub fn swap_marks(&self) -> Self {
        let mut cells = self.cells;
        for cell in cells.iter_mut() {
            *cell = cell.opponent().unwrap_or(Mark::Empty);
        }
        Self { cells }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Mark]> {
        self.cells.chunks(BOARD_SIZE)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            let symbols: Vec<String> = row.iter().map(|mark| mark.to_string()).collect();
            write!(f, "{}", symbols.join(" "))?;
        }
        Ok(())
    }
}

pub fn is_valid_move(board: &Board, index: usize) -> bool {
    index < CELL_COUNT && board.is_empty_at(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_place_leaves_original_untouched() {
        let board = Board::new();
        let next = board.place(4, Mark::X);
        assert_eq!(board.get(4), Some(Mark::Empty));
        assert_eq!(next.get(4), Some(Mark::X));
        assert_eq!(next.empty_cells(), vec![0, 1, 2, 3, 5, 6, 7, 8]);
    }

    #[test]
    fn test_board_get_out_of_range() {
        let board = Board::new();
        assert_eq!(board.get(9), None);
        assert!(!board.is_empty_at(9));
    }

    #[test]
    fn test_swap_marks_keeps_empty_cells() {
        use crate::games::tictactoe::Mark::{Empty as E, O, X};
        let board = Board::from_cells([X, O, E, E, X, E, O, E, E]);
        let swapped = board.swap_marks();
        assert_eq!(swapped, Board::from_cells([O, X, E, E, O, E, X, E, E]));
        assert_eq!(swapped.swap_marks(), board);
    }

    #[test]
    fn test_board_display() {
        use crate::games::tictactoe::Mark::{Empty as E, O, X};
        let board = Board::from_cells([X, O, E, E, X, E, O, E, E]);
        assert_eq!(board.to_string(), "X O .\n. X .\nO . .");
    }

    #[test]
    fn test_is_valid_move() {
        let board = Board::new().place(0, Mark::O);
        assert!(!is_valid_move(&board, 0));
        assert!(is_valid_move(&board, 8));
        assert!(!is_valid_move(&board, 9));
    }
}
