use common::games::tictactoe::{BOARD_SIZE, Board, Mark, Outcome, Scoreboard, TicTacToeGameState};

/// Draws the grid. Empty cells show their index so the player knows what to
/// type. Cells of a winning line are bracketed, otherwise the latest move is
/// shown in parentheses.
pub fn render_board(board: &Board, outcome: &Outcome, last_move: Option<usize>) -> String {
    let winning_line = outcome.winning_line();
    let mut rows = Vec::with_capacity(BOARD_SIZE);

    for (y, row) in board.rows().enumerate() {
        let cells: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(x, mark)| {
                let index = y * BOARD_SIZE + x;
                let symbol = match mark {
                    Mark::Empty => index.to_string(),
                    _ => mark.to_string(),
                };
                if winning_line.is_some_and(|line| line.contains(&index)) {
                    format!("[{}]", symbol)
                } else if winning_line.is_none() && last_move == Some(index) {
                    format!("({})", symbol)
                } else {
                    format!(" {} ", symbol)
                }
            })
            .collect();
        rows.push(cells.join("|"));
    }

    rows.join("\n---+---+---\n")
}

pub fn render_status(state: &TicTacToeGameState) -> String {
    match state.outcome() {
        Outcome::Win { mark, .. } => format!("Winner: {}", mark),
        Outcome::Draw => "Draw!".to_string(),
        Outcome::NoResult => format!("Turn: {}", state.current_mark()),
    }
}

pub fn render_score(score: &Scoreboard) -> String {
    format!("X : {}   O : {}   Draw : {}", score.x, score.o, score.draws)
}

pub fn render_screen(state: &TicTacToeGameState) -> String {
    format!(
        "{}\n{}\n\n{}\n\n{}",
        render_score(&state.score()),
        state.mode().label(),
        render_board(state.board(), &state.outcome(), state.last_move()),
        render_status(state),
    )
}

pub const HELP: &str = "Commands: 0-8 place a mark, r restart, m <pvp|easy|medium|hard> change mode, h help, q quit";
