mod board;
mod bot_controller;
mod error;
mod game_state;
mod types;
mod win_detector;

pub use board::{BOARD_SIZE, Board, CELL_COUNT, is_valid_move};
pub use bot_controller::{
    BotInput, DRAW_SCORE, LOSS_SCORE, WIN_SCORE, calculate_minimax_move, calculate_move,
    pick_random, select_move,
};
pub use error::{MoveError, PlaceError};
pub use game_state::{COMPUTER_MARK, FIRST_MARK, HUMAN_MARK, Scoreboard, TicTacToeGameState};
pub use types::{Difficulty, GameMode, LINES, Line, Mark, Outcome};
pub use win_detector::{check_win, check_win_with_line, evaluate};
