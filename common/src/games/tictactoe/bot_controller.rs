use crate::games::SessionRng;
use super::board::Board;
use super::error::MoveError;
use super::game_state::TicTacToeGameState;
use super::types::{Difficulty, Mark, Outcome};
use super::win_detector::evaluate;

pub const WIN_SCORE: i32 = 10;
pub const LOSS_SCORE: i32 = -WIN_SCORE;
pub const DRAW_SCORE: i32 = 0;

pub struct BotInput {
    pub board: Board,
    pub bot_mark: Mark,
}

impl BotInput {
    pub fn from_game_state(state: &TicTacToeGameState) -> Self {
        Self {
            board: *state.board(),
            bot_mark: state.current_mark(),
        }
    }
}

pub fn calculate_move(
    difficulty: Difficulty,
    input: BotInput,
    rng: &mut SessionRng,
) -> Result<usize, MoveError> {
    select_move(&input.board, input.bot_mark, difficulty, rng)
}

/// Picks the cell the bot should mark next.
///
/// Fails when the board is already decided or `bot_mark` is `Empty`; the
/// selector never answers with an occupied cell.
pub fn select_move(
    board: &Board,
    bot_mark: Mark,
    difficulty: Difficulty,
    rng: &mut SessionRng,
) -> Result<usize, MoveError> {
    if bot_mark == Mark::Empty {
        return Err(MoveError::InvalidMark(bot_mark));
    }

    let outcome = evaluate(board);
    if outcome.is_terminal() {
        return Err(MoveError::GameOver(outcome));
    }

    match difficulty {
        Difficulty::Easy => pick_random(board, rng),
        Difficulty::Medium => {
            if rng.random_bool() {
                pick_random(board, rng)
            } else {
                calculate_minimax_move(board, bot_mark)
            }
        }
        Difficulty::Hard => calculate_minimax_move(board, bot_mark),
    }
}

pub fn pick_random(board: &Board, rng: &mut SessionRng) -> Result<usize, MoveError> {
    let available_moves = board.empty_cells();
    if available_moves.is_empty() {
        return Err(MoveError::BoardFull);
    }
    let idx = rng.random_range(0..available_moves.len());
    Ok(available_moves[idx])
}

/// Exhaustive minimax for `bot_mark`.
///
/// Terminal boards score +10, -10 or 0 with no depth adjustment, so a slow
/// forced win ties with an immediate one and the lower index is kept.
pub fn calculate_minimax_move(board: &Board, bot_mark: Mark) -> Result<usize, MoveError> {
    let opponent_mark = bot_mark.opponent().ok_or(MoveError::InvalidMark(bot_mark))?;
    let available_moves = board.empty_cells();

    if available_moves.is_empty() {
        return Err(MoveError::BoardFull);
    }

    let mut scratch = *board;
    let mut best_move = None;
    let mut best_score = i32::MIN;

    for index in available_moves {
        scratch.set(index, bot_mark);
        let score = minimax(&mut scratch, opponent_mark, bot_mark);
        scratch.set(index, Mark::Empty);

        if score > best_score {
            best_score = score;
            best_move = Some(index);
        }
    }

    best_move.ok_or(MoveError::BoardFull)
}

pub(crate) fn minimax(board: &mut Board, to_move: Mark, bot_mark: Mark) -> i32 {
    match evaluate(board) {
        Outcome::Win { mark, .. } if mark == bot_mark => return WIN_SCORE,
        Outcome::Win { .. } => return LOSS_SCORE,
        Outcome::Draw => return DRAW_SCORE,
        Outcome::NoResult => {}
    }

    let Some(next_to_move) = to_move.opponent() else {
        return DRAW_SCORE;
    };
    let is_maximizing = to_move == bot_mark;
    let mut best_score = if is_maximizing { i32::MIN } else { i32::MAX };

    for index in board.empty_cells() {
        board.set(index, to_move);
        let score = minimax(board, next_to_move, bot_mark);
        board.set(index, Mark::Empty);

        if is_maximizing {
            if score > best_score {
                best_score = score;
            }
        } else if score < best_score {
            best_score = score;
        }
    }

    best_score
}
