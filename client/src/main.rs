mod cli;
mod input_parser;
mod play;

use anyhow::{ensure, Result};
use clap::Parser;
use cli::{Cli, Commands, ReplayCommand};
use common::{ConfigLoader, FsExt};
use dotenv::dotenv;
use env_logger::Env;
use log::info;
use play::{print_game, run_play};
use quoridor::{GameOptions, GameState};

fn main() -> Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Replay(replay_args) => replay(replay_args)?,
        Commands::Play(play_args) => {
            let options = load_options(&play_args.config)?;
            let notation = play_args.moves.as_deref().unwrap_or_default();
            let game_state = GameState::from_notation_with_options(options, notation, None)?;

            run_play(game_state)?
        }
    }

    Ok(())
}

fn replay(args: &ReplayCommand) -> Result<()> {
    let options = load_options(&args.config)?;
    let notation = args.moves.join(" ");
    let mut game_state = GameState::from_notation_with_options(options, &notation, None)?;

    if let Some(cursor) = args.cursor {
        let len = game_state.history().len();
        ensure!(
            cursor <= len,
            "Cursor {} is past the end of a game of {} moves",
            cursor,
            len
        );
        game_state.go_back(cursor);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&game_state.snapshot())?);
    } else {
        print_game(&game_state);
    }

    Ok(())
}

/// Game options come from the `game` scope of the config file. A missing file means the standard rules.
fn load_options(config: &str) -> Result<GameOptions> {
    let config_path = config.relative_to_cwd()?;

    if !config_path.is_file() {
        info!(
            "No config found at {:?}, using the standard rules",
            config_path
        );
        return Ok(GameOptions::default());
    }

    let config = ConfigLoader::new(config_path, "game".to_string())?;

    config.load()
}
