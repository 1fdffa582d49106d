use super::adjacency::adjacents;
use super::constants::BOARD_SIZE;
use super::{Board, Pawn, Position};
use std::collections::VecDeque;

/// Whether both pawns can still reach their goal rank on the board. Wall placements are only legal when this holds.
pub fn players_have_path(pawns: &[Pawn], board: &Board) -> bool {
    pawns
        .iter()
        .all(|pawn| has_path(pawn.position, pawn.goal_rank(), board))
}

/// Depth first search over open edges. Pawn jumps are ignored since they never connect cells that walls separate.
pub fn has_path(start: Position, goal_rank: usize, board: &Board) -> bool {
    let mut visited = [false; BOARD_SIZE];
    let mut stack = Vec::with_capacity(BOARD_SIZE);

    visited[start.index()] = true;
    stack.push(start);

    while let Some(position) = stack.pop() {
        if position.rank == goal_rank {
            return true;
        }

        for neighbour in adjacents(position, board) {
            if !visited[neighbour.index()] {
                visited[neighbour.index()] = true;
                stack.push(neighbour);
            }
        }
    }

    false
}

/// Number of steps on the shortest walk to the goal rank, ignoring the opponent's pawn.
pub fn shortest_path_len(start: Position, goal_rank: usize, board: &Board) -> Option<usize> {
    let mut distances = [None; BOARD_SIZE];
    let mut queue = VecDeque::with_capacity(BOARD_SIZE);

    distances[start.index()] = Some(0);
    queue.push_back(start);

    while let Some(position) = queue.pop_front() {
        let distance = distances[position.index()]?;

        if position.rank == goal_rank {
            return Some(distance);
        }

        for neighbour in adjacents(position, board) {
            if distances[neighbour.index()].is_none() {
                distances[neighbour.index()] = Some(distance + 1);
                queue.push_back(neighbour);
            }
        }
    }

    None
}
