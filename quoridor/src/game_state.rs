use anyhow::{bail, Context, Result};
use engine::game_state;
use log::debug;

use super::adjacency::possible_moves;
use super::pathing::players_have_path;
use super::resolver::{resolve_wall, ResolvedWall};
use super::{
    Board, GameOptions, History, Intent, Move, MoveRejection, Pawn, Player, Position, Snapshot,
    Wall,
};

/// A game of Quoridor: wall layout, both pawns and the move history.
///
/// The board and pawns always reflect the first `history.cursor()` moves. Stepping backwards or forwards through the
/// history rebuilds them; new moves may only be made at the end of the history.
#[derive(Hash, Clone, Debug, Eq, PartialEq)]
pub struct GameState {
    board: Board,
    pawns: [Pawn; 2],
    history: History,
    options: GameOptions,
}

impl GameState {
    pub fn with_options(options: GameOptions) -> Self {
        Self {
            board: Board::new(),
            pawns: [
                Pawn::new(Player::White, options.walls_per_player),
                Pawn::new(Player::Black, options.walls_per_player),
            ],
            history: History::new(),
            options,
        }
    }

    /// Replays a game from its moves. `turn` is the player expected to move next and is checked against the replayed
    /// game when given. A finished game has no player to move and skips the check.
    pub fn reconstruct<I>(moves: I, turn: Option<Player>) -> Result<Self>
    where
        I: IntoIterator<Item = Move>,
    {
        Self::reconstruct_with_options(GameOptions::default(), moves, turn)
    }

    pub fn reconstruct_with_options<I>(
        options: GameOptions,
        moves: I,
        turn: Option<Player>,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = Move>,
    {
        let mut game_state = Self::with_options(options);
        game_state.play_moves(moves)?;

        if let Some(turn) = turn {
            if game_state.winner().is_none() && game_state.player_to_move() != turn {
                bail!(
                    "Expected {} to move after {} moves but it is {}'s turn",
                    turn,
                    game_state.history.len(),
                    game_state.player_to_move()
                );
            }
        }

        Ok(game_state)
    }

    /// Replays a game from space separated notation such as `e2 e8 e5h`.
    pub fn from_notation(notation: &str, turn: Option<Player>) -> Result<Self> {
        Self::from_notation_with_options(GameOptions::default(), notation, turn)
    }

    pub fn from_notation_with_options(
        options: GameOptions,
        notation: &str,
        turn: Option<Player>,
    ) -> Result<Self> {
        let moves = notation
            .split_whitespace()
            .map(|token| token.parse::<Move>())
            .collect::<Result<Vec<_>>>()?;

        Self::reconstruct_with_options(options, moves, turn)
    }

    /// Applies each move in order, stopping at the first one that is not legal.
    pub fn play_moves<I>(&mut self, moves: I) -> Result<()>
    where
        I: IntoIterator<Item = Move>,
    {
        for mv in moves {
            let move_number = self.history.cursor() + 1;
            self.take_move(&mv)
                .with_context(|| format!("Move {} '{}' is not legal", move_number, mv))?;
        }

        Ok(())
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn pawns(&self) -> &[Pawn; 2] {
        &self.pawns
    }

    pub fn pawn(&self, player: Player) -> &Pawn {
        &self.pawns[player.index()]
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn options(&self) -> &GameOptions {
        &self.options
    }

    pub fn walls(&self) -> impl Iterator<Item = Wall> + '_ {
        self.board.walls()
    }

    /// Derived from the history cursor so that stepping through the history always lands on the right player.
    pub fn player_to_move(&self) -> Player {
        Player::from_parity(self.history.cursor())
    }

    pub fn move_number(&self) -> usize {
        self.history.cursor() / 2 + 1
    }

    /// The player whose pawn stands on its goal rank. Both pawns can never be on their goal at once since play stops
    /// at the first.
    pub fn winner(&self) -> Option<Player> {
        self.pawns
            .iter()
            .find(|pawn| pawn.has_reached_goal())
            .map(|pawn| pawn.player)
    }

    pub fn is_terminal(&self) -> Option<Player> {
        self.winner()
    }

    /// Validates and applies a move request from a user interface for the player to move. Wall targets are snapped
    /// to their canonical anchor first. Returns the player to move next.
    pub fn apply(&mut self, intent: Intent) -> Result<Player, MoveRejection> {
        self.apply_as(self.player_to_move(), intent)
    }

    /// Applies a move request submitted by `player`, rejecting it with `NotYourTurn` when it is the other player's
    /// move.
    pub fn apply_as(&mut self, player: Player, intent: Intent) -> Result<Player, MoveRejection> {
        let result = match intent {
            Intent::MovePawn { destination } => self.move_pawn(player, destination),
            Intent::PlaceWall { target, intent } => {
                self.place_wall(player, |board| resolve_wall(board, target, intent))
            }
        };

        if let Err(rejection) = &result {
            debug!("Rejected {:?} from {}: {}", intent, player, rejection);
        }

        result
    }

    /// Validates and applies an exact move, as read from notation. Walls are not snapped.
    pub fn take_move(&mut self, mv: &Move) -> Result<Player, MoveRejection> {
        self.take_move_as(self.player_to_move(), mv)
    }

    pub fn take_move_as(&mut self, player: Player, mv: &Move) -> Result<Player, MoveRejection> {
        let result = match *mv {
            Move::MovePawn(destination) => self.move_pawn(player, destination),
            Move::PlaceWall(wall) => self.place_wall(player, |board| {
                board.can_place(wall).then(|| ResolvedWall {
                    wall,
                    board: board.with_wall(wall),
                })
            }),
        };

        if let Err(rejection) = &result {
            debug!("Rejected {} from {}: {}", mv, player, rejection);
        }

        result
    }

    /// Cells the player to move may step or jump to.
    pub fn valid_pawn_moves(&self) -> Vec<Position> {
        let player = self.player_to_move();

        possible_moves(
            self.pawn(player).position,
            self.pawn(player.opponent()).position,
            &self.board,
        )
    }

    /// Every wall the player to move could legally place. Empty once their walls run out.
    pub fn valid_wall_moves(&self) -> Vec<Wall> {
        if self.pawn(self.player_to_move()).walls_left == 0 {
            return vec![];
        }

        Wall::all()
            .filter(|wall| self.board.can_place(*wall))
            .filter(|wall| players_have_path(&self.pawns, &self.board.with_wall(*wall)))
            .collect()
    }

    /// All legal moves for the player to move. Empty when the game is over or being replayed.
    pub fn valid_moves(&self) -> Vec<Move> {
        if self.ensure_can_move(self.player_to_move()).is_err() {
            return vec![];
        }

        self.valid_pawn_moves()
            .into_iter()
            .map(Move::MovePawn)
            .chain(self.valid_wall_moves().into_iter().map(Move::PlaceWall))
            .collect()
    }

    /// Rewinds to the position after the first `target` moves. Returns false and leaves the game untouched unless
    /// `target` is before the cursor.
    pub fn go_back(&mut self, target: usize) -> bool {
        let cursor = self.history.cursor();

        if target >= cursor {
            return false;
        }

        for (index, player, mv) in self.history.entries_in(target..cursor).rev() {
            let pawn = &mut self.pawns[player.index()];

            match mv {
                Move::PlaceWall(wall) => {
                    self.board.undo(wall);
                    pawn.walls_left += 1;
                }
                Move::MovePawn(_) => {
                    pawn.position = self.history.previous_pawn_position(index, player);
                }
            }
        }

        self.history.set_cursor(target);

        debug!("Went back from move {} to {}", cursor, target);

        true
    }

    /// Replays recorded moves up to `target`. Returns false and leaves the game untouched unless `target` is after
    /// the cursor and within the history.
    pub fn go_forward(&mut self, target: usize) -> bool {
        let cursor = self.history.cursor();

        if target <= cursor || target > self.history.len() {
            return false;
        }

        for (_, player, mv) in self.history.entries_in(cursor..target) {
            let pawn = &mut self.pawns[player.index()];

            match mv {
                Move::PlaceWall(wall) => {
                    self.board.place(wall);
                    pawn.walls_left -= 1;
                }
                Move::MovePawn(destination) => pawn.position = destination,
            }
        }

        self.history.set_cursor(target);

        debug!("Went forward from move {} to {}", cursor, target);

        true
    }

    pub fn restart(&mut self) {
        *self = Self::with_options(self.options);
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self)
    }

    fn ensure_can_move(&self, player: Player) -> Result<(), MoveRejection> {
        if !self.history.is_at_end() {
            return Err(MoveRejection::NotAtEndOfHistory);
        }

        if self.winner().is_some() {
            return Err(MoveRejection::GameOver);
        }

        if player != self.player_to_move() {
            return Err(MoveRejection::NotYourTurn);
        }

        Ok(())
    }

    fn move_pawn(&mut self, player: Player, destination: Position) -> Result<Player, MoveRejection> {
        self.ensure_can_move(player)?;

        if !self.valid_pawn_moves().contains(&destination) {
            return Err(MoveRejection::IllegalPawnDestination);
        }

        self.history.append(Move::MovePawn(destination))?;
        self.pawns[player.index()].position = destination;

        debug!("{} moved to {}", player, destination);

        if self.winner().is_some() {
            debug!("{} reached its goal", player);
        }

        Ok(self.player_to_move())
    }

    fn place_wall<F>(&mut self, player: Player, resolve: F) -> Result<Player, MoveRejection>
    where
        F: FnOnce(&Board) -> Option<ResolvedWall>,
    {
        self.ensure_can_move(player)?;

        if self.pawn(player).walls_left == 0 {
            return Err(MoveRejection::NoWallsLeft);
        }

        let ResolvedWall { wall, board } =
            resolve(&self.board).ok_or(MoveRejection::IllegalWallTarget)?;

        if !players_have_path(&self.pawns, &board) {
            return Err(MoveRejection::PathBlocked);
        }

        self.history.append(Move::PlaceWall(wall))?;
        self.board = board;
        self.pawns[player.index()].walls_left -= 1;

        debug!("{} placed {}", player, wall);

        Ok(self.player_to_move())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::with_options(GameOptions::default())
    }
}

impl game_state::GameState for GameState {
    fn initial() -> Self {
        Self::default()
    }
}
