use super::constants::BOARD_HEIGHT;
use super::Position;
use serde::{Deserialize, Serialize};
use std::fmt::{self};

#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    White,
    Black,
}

impl Player {
    /// The player who owns the move at the given index of a game's history. White always moves first.
    pub fn from_parity(move_index: usize) -> Self {
        if move_index % 2 == 0 {
            Player::White
        } else {
            Player::Black
        }
    }

    pub fn opponent(&self) -> Self {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Player::White => 0,
            Player::Black => 1,
        }
    }

    pub fn start(&self) -> Position {
        match self {
            Player::White => Position::new(4, 0),
            Player::Black => Position::new(4, BOARD_HEIGHT - 1),
        }
    }

    pub fn goal_rank(&self) -> usize {
        match self {
            Player::White => BOARD_HEIGHT - 1,
            Player::Black => 0,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Player::White => write!(f, "white"),
            Player::Black => write!(f, "black"),
        }
    }
}

#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize)]
pub struct Pawn {
    pub player: Player,
    pub position: Position,
    pub walls_left: u8,
}

impl Pawn {
    pub fn new(player: Player, walls_left: u8) -> Self {
        Self {
            player,
            position: player.start(),
            walls_left,
        }
    }

    pub fn goal_rank(&self) -> usize {
        self.player.goal_rank()
    }

    pub fn has_reached_goal(&self) -> bool {
        self.position.rank == self.goal_rank()
    }
}
