use serde::Serialize;

use super::constants::{BOARD_HEIGHT, BOARD_WIDTH};
use super::{GameState, Move, Pawn, Player, Position, Wall, WallCell};

/// The state a user interface renders, serializable to JSON.
///
/// `cells` is indexed `[file][rank]`. Each cell carries its `row` slot (the edge above it) and `col` slot (the edge to
/// its right) as 0 open, 1 origin or 2 continuation.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Snapshot {
    pub cells: [[WallCell; BOARD_HEIGHT]; BOARD_WIDTH],
    pub walls: Vec<PlacedWall>,
    pub pawns: [Pawn; 2],
    pub turn: Option<Player>,
    pub winner: Option<Player>,
    pub moves: Vec<Move>,
    pub cursor: usize,
    pub last_pawn_step: Option<(Position, Position)>,
}

/// A wall on the board and the player who placed it, so that walls can be drawn in their owner's colour.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PlacedWall {
    pub player: Player,
    pub wall: Wall,
}

impl Snapshot {
    pub fn new(game_state: &GameState) -> Self {
        let winner = game_state.winner();
        let history = game_state.history();

        Self {
            cells: *game_state.board().cells(),
            walls: history
                .placed_walls()
                .map(|(player, wall)| PlacedWall { player, wall })
                .collect(),
            pawns: *game_state.pawns(),
            turn: winner.is_none().then(|| game_state.player_to_move()),
            winner,
            moves: history.moves().to_vec(),
            cursor: history.cursor(),
            last_pawn_step: history.last_pawn_step(),
        }
    }
}
