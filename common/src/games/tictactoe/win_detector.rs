use super::board::Board;
use super::types::{LINES, Line, Mark, Outcome};

/// Classifies a board as won, drawn or still in play.
///
/// Lines are scanned in `LINES` order and the first complete one is reported,
/// so the result is deterministic even for boards that legal play cannot reach.
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((mark, line)) = check_win_with_line(board) {
        return Outcome::Win { mark, line };
    }

    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::NoResult
    }
}

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|(mark, _)| mark)
}

pub fn check_win_with_line(board: &Board) -> Option<(Mark, Line)> {
    let cells = board.cells();
    LINES.iter().find_map(|&line| {
        let [a, b, c] = line;
        let mark = cells[a];
        if mark != Mark::Empty && cells[b] == mark && cells[c] == mark {
            Some((mark, line))
        } else {
            None
        }
    })
}
