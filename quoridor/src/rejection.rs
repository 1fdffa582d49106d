use std::fmt::{self};

/// Why a move was not applied. A rejected move leaves the game untouched.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum MoveRejection {
    /// The history cursor is behind the last move, the game is being replayed.
    NotAtEndOfHistory,
    GameOver,
    /// The move was submitted by the player who is not on turn.
    NotYourTurn,
    NoWallsLeft,
    /// The wall target could not be resolved to a free anchor, or it overlaps or crosses another wall.
    IllegalWallTarget,
    /// The wall would cut a pawn off from its goal.
    PathBlocked,
    IllegalPawnDestination,
}

impl fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let reason = match self {
            MoveRejection::NotAtEndOfHistory => "moves can only be made at the end of the game's history",
            MoveRejection::GameOver => "the game is over",
            MoveRejection::NotYourTurn => "it is not your turn to move",
            MoveRejection::NoWallsLeft => "no walls left to place",
            MoveRejection::IllegalWallTarget => "a wall cannot be placed there",
            MoveRejection::PathBlocked => "the wall would block a pawn from reaching its goal",
            MoveRejection::IllegalPawnDestination => "the pawn cannot move there",
        };

        write!(f, "{}", reason)
    }
}

impl std::error::Error for MoveRejection {}
