use crate::games::SessionRng;
use super::board::{Board, CELL_COUNT, is_valid_move};
use super::bot_controller::{BotInput, calculate_move};
use super::error::{MoveError, PlaceError};
use super::types::{GameMode, Mark, Outcome};
use super::win_detector::evaluate;

/// X always opens. Against the computer the human holds X.
pub const FIRST_MARK: Mark = Mark::X;
pub const HUMAN_MARK: Mark = Mark::X;
pub const COMPUTER_MARK: Mark = Mark::O;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    pub x: u32,
    pub o: u32,
    pub draws: u32,
}

impl Scoreboard {
    pub fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Win { mark: Mark::X, .. } => self.x += 1,
            Outcome::Win { mark: Mark::O, .. } => self.o += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::Win { .. } | Outcome::NoResult => {}
        }
    }

    pub fn games_played(&self) -> u32 {
        self.x + self.o + self.draws
    }
}

/// One table: the board in play, whose turn it is, and the running tally.
/// Scores survive `reset` and `set_mode`; the board does not.
#[derive(Debug)]
pub struct TicTacToeGameState {
    board: Board,
    current_mark: Mark,
    outcome: Outcome,
    mode: GameMode,
    score: Scoreboard,
    last_move: Option<usize>,
}

impl TicTacToeGameState {
    pub fn new(mode: GameMode) -> Self {
        Self {
            board: Board::new(),
            current_mark: FIRST_MARK,
            outcome: Outcome::NoResult,
            mode,
            score: Scoreboard::default(),
            last_move: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn score(&self) -> Scoreboard {
        self.score
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    pub fn is_computer_turn(&self) -> bool {
        matches!(self.mode, GameMode::PlayerVsComputer(_))
            && !self.is_over()
            && self.current_mark == COMPUTER_MARK
    }

    /// Human move. In player-vs-computer mode it is refused while the
    /// computer is to move.
    pub fn place_mark(&mut self, index: usize) -> Result<Outcome, PlaceError> {
        if self.is_computer_turn() {
            return Err(PlaceError::NotYourTurn);
        }
        self.apply_mark(index)
    }

    /// Lets the computer answer once. Returns `Ok(None)` when it is not the
    /// computer's turn, including after the game has ended.
    pub fn computer_move(&mut self, rng: &mut SessionRng) -> Result<Option<usize>, MoveError> {
        let Some(difficulty) = self.mode.difficulty() else {
            return Ok(None);
        };
        if !self.is_computer_turn() {
            return Ok(None);
        }

        let index = calculate_move(difficulty, BotInput::from_game_state(self), rng)?;
        self.apply_mark(index)?;
        Ok(Some(index))
    }

    pub fn reset(&mut self) {
        self.board = Board::new();
        self.current_mark = FIRST_MARK;
        self.outcome = Outcome::NoResult;
        self.last_move = None;
    }

    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
        self.reset();
    }

    fn apply_mark(&mut self, index: usize) -> Result<Outcome, PlaceError> {
        if self.is_over() {
            return Err(PlaceError::GameOver);
        }

        if !is_valid_move(&self.board, index) {
            return Err(if index >= CELL_COUNT {
                PlaceError::OutOfBounds(index)
            } else {
                PlaceError::CellOccupied(index)
            });
        }

        self.board.set(index, self.current_mark);
        self.last_move = Some(index);

        self.check_game_over();

        if !self.is_over() {
            self.switch_turn();
        }

        Ok(self.outcome)
    }

    fn switch_turn(&mut self) {
        if let Some(next) = self.current_mark.opponent() {
            self.current_mark = next;
        }
    }

    fn check_game_over(&mut self) {
        self.outcome = evaluate(&self.board);
        if self.outcome.is_terminal() {
            self.score.record(&self.outcome);
        }
    }
}
