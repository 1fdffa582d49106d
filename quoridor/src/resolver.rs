use super::constants::MAX_WALL_ANCHOR;
use super::{Board, EdgeState, Orientation, Position, Wall, WallIntent};

/// A wall snapped to its canonical anchor together with a copy of the board that has it placed.
///
/// The board has not been checked for reachability yet.
#[derive(Clone, Debug)]
pub struct ResolvedWall {
    pub wall: Wall,
    pub board: Board,
}

/// Resolves a raw wall target to the canonical wall and a candidate board with it placed. Returns `None` when the
/// target cannot hold a wall without overlapping or crossing an existing one.
pub fn resolve_wall(board: &Board, target: Position, intent: WallIntent) -> Option<ResolvedWall> {
    let wall = canonical_wall(board, target, intent)?;

    Some(ResolvedWall {
        wall,
        board: board.with_wall(wall),
    })
}

/// Snaps a target near the middle or ends of a two cell span onto the anchor that fits.
///
/// Targets on the last file or rank are clamped. If a wall of the same orientation starts right after the target,
/// or a perpendicular wall crosses at the target, the anchor slides back one cell when that cell is free.
pub fn canonical_wall(board: &Board, target: Position, intent: WallIntent) -> Option<Wall> {
    let orientation = intent.orientation();
    let perpendicular = orientation.perpendicular();

    let mut anchor = Position::new(
        target.file.min(MAX_WALL_ANCHOR),
        target.rank.min(MAX_WALL_ANCHOR),
    );

    if board.slot(along(anchor, orientation, 1)?, orientation) == EdgeState::Origin {
        match along(anchor, orientation, -1) {
            Some(previous) if board.slot(previous, perpendicular) != EdgeState::Origin => {
                anchor = previous
            }
            _ => return None,
        }
    }

    if !board.slot(anchor, orientation).is_open() {
        return None;
    }

    if board.slot(anchor, perpendicular) == EdgeState::Origin {
        let previous = along(anchor, orientation, -1)?;

        if board.slot(previous, perpendicular) == EdgeState::Origin
            || !board.slot(previous, orientation).is_open()
        {
            return None;
        }

        anchor = previous;
    }

    let wall = Wall::new(anchor, orientation);

    board.can_place(wall).then_some(wall)
}

/// Moves along the axis a wall of the given orientation spans: files for horizontal walls, ranks for vertical ones.
fn along(position: Position, orientation: Orientation, delta: isize) -> Option<Position> {
    let Position { file, rank } = position;

    match orientation {
        Orientation::Horizontal => Position::try_new(file.checked_add_signed(delta)?, rank),
        Orientation::Vertical => Position::try_new(file, rank.checked_add_signed(delta)?),
    }
}
