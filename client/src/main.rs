mod config;
mod offline;
mod ui;

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use common::config::Validate;
use common::games::SessionRng;
use common::games::tictactoe::GameMode;
use common::{log, logger};

use config::{Config, default_config_path, get_config_manager};
use offline::run_tictactoe_game;

#[derive(Parser)]
#[command(name = "tic_tac_toe_client", about = "Tic-tac-toe in the terminal, against a friend or the computer")]
struct Args {
    /// pvp, easy, medium or hard
    #[arg(long)]
    mode: Option<GameMode>,
    /// Pause before the computer answers, in milliseconds
    #[arg(long)]
    delay_ms: Option<u32>,
    /// Seed for the computer's random choices
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    config: Option<PathBuf>,
    /// Store the mode and delay used in this session as the new defaults
    #[arg(long)]
    save_config: bool,
    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_path = args.config.clone().unwrap_or_else(default_config_path);
    let config_manager = get_config_manager(&config_path);
    let mut config = match config_manager.get_config() {
        Ok(config) => config,
        Err(e) => {
            log!("Failed to load {}: {}; using defaults", config_path.display(), e);
            Config::default()
        }
    };

    if let Some(mode) = args.mode {
        config.tictactoe.set_game_mode(mode);
    }
    if let Some(delay_ms) = args.delay_ms {
        config.tictactoe.bot_delay_ms = delay_ms;
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    config.validate()?;

    let rng = match config.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    let bot_delay = Duration::from_millis(u64::from(config.tictactoe.bot_delay_ms));

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .enable_io()
        .build()?;
    let final_mode = runtime.block_on(run_tictactoe_game(
        config.tictactoe.game_mode(),
        rng,
        bot_delay,
    ))?;

    if args.save_config {
        config.tictactoe.set_game_mode(final_mode);
        match config_manager.set_config(&config) {
            Ok(()) => log!("Saved preferences to {}", config_path.display()),
            Err(e) => log!("Failed to save preferences: {}", e),
        }
    }

    Ok(())
}
