use itertools::Itertools;
use std::ops::Range;

use super::{Move, MoveRejection, Player, Position, Wall};

/// The moves of a game in the order they were played, and a cursor marking how many of them are currently applied
/// to the board.
///
/// Moves are not tagged with the player that made them. White owns the even indices and Black the odd ones.
#[derive(Clone, Debug, Default, Hash, Eq, PartialEq)]
pub struct History {
    moves: Vec<Move>,
    cursor: usize,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_at_end(&self) -> bool {
        self.cursor == self.moves.len()
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Appends a move and advances the cursor past it. Branching from the middle of the history is not supported.
    pub fn append(&mut self, mv: Move) -> Result<(), MoveRejection> {
        if !self.is_at_end() {
            return Err(MoveRejection::NotAtEndOfHistory);
        }

        self.moves.push(mv);
        self.cursor += 1;

        Ok(())
    }

    pub fn entry(&self, index: usize) -> Option<(Player, Move)> {
        self.moves
            .get(index)
            .map(|mv| (Player::from_parity(index), *mv))
    }

    /// The moves within `range` along with their index and the player who made them. The range is clamped to the
    /// recorded moves.
    pub fn entries_in(
        &self,
        range: Range<usize>,
    ) -> impl DoubleEndedIterator<Item = (usize, Player, Move)> + '_ {
        let end = range.end.min(self.moves.len());
        let start = range.start.min(end);

        self.moves[start..end].iter().enumerate().map(move |(i, mv)| {
            let index = start + i;
            (index, Player::from_parity(index), *mv)
        })
    }

    pub fn entries(&self) -> impl DoubleEndedIterator<Item = (usize, Player, Move)> + '_ {
        self.entries_in(0..self.moves.len())
    }

    /// Where the player's pawn stood before the move at `index` was made: its latest pawn move before that index, or
    /// its starting square.
    pub fn previous_pawn_position(&self, index: usize, player: Player) -> Position {
        self.entries_in(0..index)
            .rev()
            .filter(|(_, owner, _)| *owner == player)
            .find_map(|(_, _, mv)| match mv {
                Move::MovePawn(position) => Some(position),
                Move::PlaceWall(_) => None,
            })
            .unwrap_or_else(|| player.start())
    }

    /// The walls on the board at the cursor, each with the player who placed it.
    pub fn placed_walls(&self) -> impl Iterator<Item = (Player, Wall)> + '_ {
        self.entries_in(0..self.cursor)
            .filter_map(|(_, player, mv)| match mv {
                Move::PlaceWall(wall) => Some((player, wall)),
                Move::MovePawn(_) => None,
            })
    }

    /// The origin and destination of the move just before the cursor, when it was a pawn move.
    pub fn last_pawn_step(&self) -> Option<(Position, Position)> {
        let index = self.cursor.checked_sub(1)?;

        match self.entry(index)? {
            (player, Move::MovePawn(destination)) => {
                Some((self.previous_pawn_position(index, player), destination))
            }
            (_, Move::PlaceWall(_)) => None,
        }
    }

    pub fn tokens(&self) -> Vec<String> {
        self.moves.iter().map(|mv| mv.to_string()).collect()
    }

    /// The moves as space separated notation tokens, the format games are stored and sent in.
    pub fn notation(&self) -> String {
        self.moves.iter().join(" ")
    }

    pub fn clear(&mut self) {
        self.moves.clear();
        self.cursor = 0;
    }

    pub(crate) fn set_cursor(&mut self, cursor: usize) {
        assert!(
            cursor <= self.moves.len(),
            "Cursor {} is past the end of a history of {} moves",
            cursor,
            self.moves.len()
        );

        self.cursor = cursor;
    }
}
