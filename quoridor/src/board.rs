use super::constants::{BOARD_HEIGHT, BOARD_WIDTH};
use super::{Direction, Orientation, Position, Wall};
use serde::Serialize;

/// Occupancy of a single edge slot.
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub enum EdgeState {
    #[default]
    Open,
    /// The anchor half of a wall.
    Origin,
    /// The far half of a wall anchored on the previous cell.
    Continuation,
}

impl EdgeState {
    pub fn is_open(&self) -> bool {
        matches!(self, EdgeState::Open)
    }

    pub fn as_u8(&self) -> u8 {
        match self {
            EdgeState::Open => 0,
            EdgeState::Origin => 1,
            EdgeState::Continuation => 2,
        }
    }
}

/// Each cell only records its northern (`row`) and eastern (`col`) edges. The southern and western edges are read
/// from the neighbouring cells.
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize)]
pub struct WallCell {
    pub row: EdgeState,
    pub col: EdgeState,
}

impl WallCell {
    pub fn slot(&self, orientation: Orientation) -> EdgeState {
        match orientation {
            Orientation::Horizontal => self.row,
            Orientation::Vertical => self.col,
        }
    }

    fn slot_mut(&mut self, orientation: Orientation) -> &mut EdgeState {
        match orientation {
            Orientation::Horizontal => &mut self.row,
            Orientation::Vertical => &mut self.col,
        }
    }
}

#[derive(Clone, Debug, Default, Hash, Eq, PartialEq)]
pub struct Board {
    /// Indexed by `[file][rank]`.
    cells: [[WallCell; BOARD_HEIGHT]; BOARD_WIDTH],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cell(&self, position: Position) -> WallCell {
        self.cells[position.file][position.rank]
    }

    pub fn slot(&self, position: Position, orientation: Orientation) -> EdgeState {
        self.cell(position).slot(orientation)
    }

    /// Whether a pawn on `position` can step one cell in `direction`. Edges of the board are never open.
    pub fn is_open(&self, position: Position, direction: Direction) -> bool {
        let Position { file, rank } = position;

        match direction {
            Direction::North => rank + 1 < BOARD_HEIGHT && self.cells[file][rank].row.is_open(),
            Direction::East => file + 1 < BOARD_WIDTH && self.cells[file][rank].col.is_open(),
            Direction::South => rank >= 1 && self.cells[file][rank - 1].row.is_open(),
            Direction::West => file >= 1 && self.cells[file - 1][rank].col.is_open(),
        }
    }

    /// Marks both slots of the wall. No legality checks are made; see `can_place` and the resolver.
    pub fn place(&mut self, wall: Wall) {
        debug_assert!(wall.has_valid_anchor(), "Wall {} is off the board", wall);

        *self.slot_mut(wall.anchor, wall.orientation) = EdgeState::Origin;
        *self.slot_mut(wall.continuation(), wall.orientation) = EdgeState::Continuation;
    }

    pub fn undo(&mut self, wall: Wall) {
        debug_assert!(wall.has_valid_anchor(), "Wall {} is off the board", wall);

        *self.slot_mut(wall.anchor, wall.orientation) = EdgeState::Open;
        *self.slot_mut(wall.continuation(), wall.orientation) = EdgeState::Open;
    }

    /// Returns a copy of the board with the wall placed.
    pub fn with_wall(&self, wall: Wall) -> Self {
        let mut board = self.clone();
        board.place(wall);
        board
    }

    /// Whether the exact wall fits: both of its slots are open and no perpendicular wall crosses it at the anchor.
    pub fn can_place(&self, wall: Wall) -> bool {
        wall.has_valid_anchor()
            && self.slot(wall.anchor, wall.orientation).is_open()
            && self.slot(wall.continuation(), wall.orientation).is_open()
            && self.slot(wall.anchor, wall.orientation.perpendicular()) != EdgeState::Origin
    }

    pub fn walls(&self) -> impl Iterator<Item = Wall> + '_ {
        (0..BOARD_HEIGHT).flat_map(move |rank| {
            (0..BOARD_WIDTH).flat_map(move |file| {
                let anchor = Position::new(file, rank);
                let cell = self.cell(anchor);

                [Orientation::Horizontal, Orientation::Vertical]
                    .into_iter()
                    .filter(move |o| cell.slot(*o) == EdgeState::Origin)
                    .map(move |o| Wall::new(anchor, o))
            })
        })
    }

    pub fn is_empty(&self) -> bool {
        self.walls().next().is_none()
    }

    pub fn cells(&self) -> &[[WallCell; BOARD_HEIGHT]; BOARD_WIDTH] {
        &self.cells
    }

    fn slot_mut(&mut self, position: Position, orientation: Orientation) -> &mut EdgeState {
        self.cells[position.file][position.rank].slot_mut(orientation)
    }
}
