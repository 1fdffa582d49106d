use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;

use quoridor::{Intent, Move, Position, WallIntent};

pub enum PlayCommand {
    /// Exact moves in notation, applied in order.
    Play(Vec<Move>),
    /// A single move request that goes through wall resolution.
    Intent(Intent),
    Back(usize),
    Forward(usize),
    Restart,
    Show,
    Json,
    /// Prints the game's moves in notation.
    History,
    Help,
    Quit,
    Noop,
}

static BACK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^back(?:\s+(\d+))?$").unwrap());
static FORWARD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^forward(?:\s+(\d+))?$").unwrap());
static PAWN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^pawn\s+(\S+)$").unwrap());
static WALL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^wall\s+(\S+)\s+([hvx])$").unwrap());

pub fn parse_line(line: &str) -> Result<PlayCommand> {
    let line = line.trim();

    match line {
        "" => Ok(PlayCommand::Noop),
        "restart" | "newgame" => Ok(PlayCommand::Restart),
        "show" => Ok(PlayCommand::Show),
        "json" => Ok(PlayCommand::Json),
        "moves" => Ok(PlayCommand::History),
        "help" => Ok(PlayCommand::Help),
        "quit" | "exit" => Ok(PlayCommand::Quit),
        _ => {
            if let Some(cap) = BACK_RE.captures(line) {
                return Ok(PlayCommand::Back(parse_count(cap.get(1).map(|m| m.as_str()))?));
            }

            if let Some(cap) = FORWARD_RE.captures(line) {
                return Ok(PlayCommand::Forward(parse_count(cap.get(1).map(|m| m.as_str()))?));
            }

            if let Some(cap) = PAWN_RE.captures(line) {
                let destination = cap[1].parse::<Position>()?;
                return Ok(PlayCommand::Intent(Intent::MovePawn { destination }));
            }

            if let Some(cap) = WALL_RE.captures(line) {
                let target = cap[1].parse::<Position>()?;
                let intent = match &cap[2] {
                    "h" => WallIntent::Horizontal,
                    "v" => WallIntent::Vertical,
                    _ => WallIntent::Intersection,
                };
                return Ok(PlayCommand::Intent(Intent::PlaceWall { target, intent }));
            }

            let moves = line
                .split_whitespace()
                .map(|token| token.parse::<Move>())
                .collect::<Result<Vec<_>>>()
                .with_context(|| format!("Unknown command '{}'", line))?;

            Ok(PlayCommand::Play(moves))
        }
    }
}

fn parse_count(count: Option<&str>) -> Result<usize> {
    count.map_or(Ok(1), |count| {
        count
            .parse::<usize>()
            .map_err(|_| anyhow!("'{}' is not a number of moves", count))
    })
}
