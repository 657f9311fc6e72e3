use std::io::Write;
use std::time::Duration;

use common::games::SessionRng;
use common::games::tictactoe::{GameMode, MoveError, Outcome, TicTacToeGameState};
use common::log;
use tokio::io::{AsyncBufReadExt, BufReader};

use super::Command;
use crate::ui::{HELP, render_screen};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    Redraw,
    Message(String),
    Quit,
}

/// Owns the table for one terminal session and applies player commands to it.
pub struct TicTacToeRunner {
    state: TicTacToeGameState,
    rng: SessionRng,
    bot_delay: Duration,
}

impl TicTacToeRunner {
    pub fn new(mode: GameMode, rng: SessionRng, bot_delay: Duration) -> Self {
        Self {
            state: TicTacToeGameState::new(mode),
            rng,
            bot_delay,
        }
    }

    pub fn state(&self) -> &TicTacToeGameState {
        &self.state
    }

    pub fn apply(&mut self, command: Command) -> Flow {
        match command {
            Command::Place(index) => {
                let mark = self.state.current_mark();
                match self.state.place_mark(index) {
                    Ok(outcome) => {
                        log!("{} played {}", mark, index);
                        self.log_outcome(&outcome);
                        Flow::Redraw
                    }
                    Err(e) => Flow::Message(e.to_string()),
                }
            }
            Command::Restart => {
                self.state.reset();
                log!("Game restarted");
                Flow::Redraw
            }
            Command::SetMode(mode) => {
                self.state.set_mode(mode);
                log!("Mode changed to {}", mode.label());
                Flow::Redraw
            }
            Command::Help => Flow::Message(HELP.to_string()),
            Command::Quit => Flow::Quit,
        }
    }

    /// Waits out the pacing delay and lets the computer answer. Does nothing
    /// when the computer is not to move.
    pub async fn computer_turn(&mut self) -> Result<Option<usize>, MoveError> {
        if !self.state.is_computer_turn() {
            return Ok(None);
        }

        if !self.bot_delay.is_zero() {
            tokio::time::sleep(self.bot_delay).await;
        }

        let mark = self.state.current_mark();
        let played = self.state.computer_move(&mut self.rng)?;
        if let Some(index) = played {
            log!("Computer ({}) played {}", mark, index);
            self.log_outcome(&self.state.outcome());
        }
        Ok(played)
    }

    fn log_outcome(&self, outcome: &Outcome) {
        match outcome {
            Outcome::Win { mark, line } => log!("{} wins along {:?}", mark, line),
            Outcome::Draw => log!("Game drawn"),
            Outcome::NoResult => {}
        }
    }
}

/// Plays on stdin/stdout until the player quits or input ends. Returns the
/// mode that was active at exit.
pub async fn run_tictactoe_game(
    mode: GameMode,
    rng: SessionRng,
    bot_delay: Duration,
) -> Result<GameMode, Box<dyn std::error::Error>> {
    log!("Starting {} with seed {}", mode.label(), rng.seed());
    let mut runner = TicTacToeRunner::new(mode, rng, bot_delay);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{}\n", render_screen(runner.state()));
    println!("{}", HELP);

    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        match runner.apply(command) {
            Flow::Quit => break,
            Flow::Message(message) => {
                println!("{}", message);
                continue;
            }
            Flow::Redraw => println!("\n{}\n", render_screen(runner.state())),
        }

        if runner.state().is_computer_turn() {
            println!("Computer is thinking...");
            runner.computer_turn().await?;
            println!("\n{}\n", render_screen(runner.state()));
        }
    }

    let score = runner.state().score();
    log!(
        "Session over after {} games: X {} / O {} / draws {}",
        score.games_played(),
        score.x,
        score.o,
        score.draws
    );
    Ok(runner.state().mode())
}
