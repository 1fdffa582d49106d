use anyhow::Result;
use log::{info, warn};
use std::io::stdin;

use crate::input_parser::{parse_line, PlayCommand};
use quoridor::{shortest_path_len, GameState};

const HELP: &str = "\
Commands:
  <moves>            moves in notation, e.g. `e2` or `e2 e8 e5h`
  pawn <cell>        move the pawn, e.g. `pawn e2`
  wall <cell> <h|v|x> place a wall near a cell; `x` aims at the crossing point
  back [n]           step n moves back through the history
  forward [n]        step n moves forward through the history
  restart            start a new game
  show | json | moves
  quit";

/// Reads commands from stdin until it closes or `quit` is given.
pub fn run_play(mut game_state: GameState) -> Result<()> {
    print_game(&game_state);

    loop {
        let mut buffer = String::new();
        if stdin().read_line(&mut buffer)? == 0 {
            break;
        }

        let command = match parse_line(&buffer) {
            Ok(command) => command,
            Err(e) => {
                warn!("{:#}", e);
                continue;
            }
        };

        match command {
            PlayCommand::Play(moves) => {
                for mv in moves {
                    if let Err(rejection) = game_state.take_move(&mv) {
                        warn!("{} was rejected: {}", mv, rejection);
                        break;
                    }
                }
                print_game(&game_state);
            }
            PlayCommand::Intent(intent) => match game_state.apply(intent) {
                Ok(_) => print_game(&game_state),
                Err(rejection) => warn!("Rejected: {}", rejection),
            },
            PlayCommand::Back(count) => {
                let target = game_state.history().cursor().saturating_sub(count);
                if game_state.go_back(target) {
                    print_game(&game_state);
                } else {
                    warn!("Already at the start of the game");
                }
            }
            PlayCommand::Forward(count) => {
                let history = game_state.history();
                let target = (history.cursor() + count).min(history.len());
                if game_state.go_forward(target) {
                    print_game(&game_state);
                } else {
                    warn!("Already at the last move");
                }
            }
            PlayCommand::Restart => {
                game_state.restart();
                info!("Started a new game");
                print_game(&game_state);
            }
            PlayCommand::Show => print_game(&game_state),
            PlayCommand::Json => println!("{}", serde_json::to_string(&game_state.snapshot())?),
            PlayCommand::History => println!("{}", game_state.history().notation()),
            PlayCommand::Help => println!("{}", HELP),
            PlayCommand::Quit => break,
            PlayCommand::Noop => {}
        }
    }

    Ok(())
}

pub fn print_game(game_state: &GameState) {
    println!("{}", game_state);

    for pawn in game_state.pawns() {
        match shortest_path_len(pawn.position, pawn.goal_rank(), game_state.board()) {
            Some(steps) => println!("  {} is {} steps from its goal", pawn.player, steps),
            None => println!("  {} has no path to its goal", pawn.player),
        }
    }

    let history = game_state.history();
    match game_state.winner() {
        Some(winner) => println!("  {} wins", winner),
        None if history.is_at_end() => println!("  {} to move", game_state.player_to_move()),
        None => println!(
            "  Viewing move {} of {}",
            history.cursor(),
            history.len()
        ),
    }
}
