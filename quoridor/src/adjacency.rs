use super::{Board, Direction, Position};

/// The orthogonal neighbours of `position` that are on the board and not separated from it by a wall.
pub fn adjacents(position: Position, board: &Board) -> impl Iterator<Item = Position> + '_ {
    Direction::ALL
        .into_iter()
        .filter(move |direction| board.is_open(position, *direction))
        .filter_map(move |direction| position.step(direction))
}

/// All cells the pawn on `position` may move to this turn given the opponent's pawn.
///
/// A pawn facing its opponent jumps straight over it when the edge behind the opponent is open. Otherwise it may
/// side-step to either cell beside the opponent, each gated by the wall between the opponent and that cell.
pub fn possible_moves(position: Position, opponent: Position, board: &Board) -> Vec<Position> {
    let mut moves = Vec::with_capacity(5);

    for direction in Direction::ALL {
        if !board.is_open(position, direction) {
            continue;
        }

        let Some(neighbour) = position.step(direction) else {
            continue;
        };

        if neighbour != opponent {
            moves.push(neighbour);
            continue;
        }

        if board.is_open(opponent, direction) {
            moves.extend(opponent.step(direction));
            continue;
        }

        for side in direction.perpendicular() {
            if board.is_open(opponent, side) {
                moves.extend(opponent.step(side));
            }
        }
    }

    moves
}
