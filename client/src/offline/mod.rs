mod command;
mod tictactoe_runner;

pub use command::Command;
pub use tictactoe_runner::run_tictactoe_game;
