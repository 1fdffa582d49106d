use std::fmt::{self, Display, Formatter};

use super::constants::{ASCII_LETTER_A, BOARD_HEIGHT, BOARD_WIDTH};
use super::{EdgeState, GameState, Orientation, Player, Position};

impl Display for GameState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let board = self.board();
        let white = self.pawn(Player::White).position;
        let black = self.pawn(Player::Black).position;

        writeln!(f)?;
        write_border(f)?;

        for rank in (0..BOARD_HEIGHT).rev() {
            for file in 0..BOARD_WIDTH {
                let position = Position::new(file, rank);
                if file == 0 {
                    write!(f, "{} |", rank + 1)?;
                }
                let p = if position == white {
                    "W"
                } else if position == black {
                    "B"
                } else {
                    " "
                };
                let w = if file + 1 < BOARD_WIDTH && !board.cell(position).col.is_open() {
                    "█"
                } else {
                    "|"
                };
                write!(f, " {} {}", p, w)?;
            }

            writeln!(f)?;

            if rank == 0 {
                break;
            }

            // The edges between this rank and the one below are the `row` slots of the rank below.
            for file in 0..BOARD_WIDTH {
                if file == 0 {
                    write!(f, "  +")?;
                }
                let below = Position::new(file, rank - 1);
                let w = if board.cell(below).row.is_open() {
                    "---"
                } else {
                    "■■■"
                };
                let c = if board.slot(below, Orientation::Horizontal) == EdgeState::Origin {
                    "■"
                } else if board.slot(below, Orientation::Vertical) == EdgeState::Origin {
                    "█"
                } else {
                    "+"
                };
                write!(f, "{}{}", w, c)?;
            }

            writeln!(f)?;
        }

        write_border(f)?;

        for x in 0..BOARD_WIDTH {
            if x == 0 {
                write!(f, "   ")?;
            }
            let file_letter = (ASCII_LETTER_A + x as u8) as char;
            write!(f, " {}  ", file_letter)?;
        }

        writeln!(f)?;
        writeln!(f)?;
        writeln!(
            f,
            "  W: {}  B: {}",
            self.pawn(Player::White).walls_left,
            self.pawn(Player::Black).walls_left
        )?;

        Ok(())
    }
}

fn write_border(f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "  +")?;
    for _ in 0..BOARD_WIDTH {
        write!(f, "---+")?;
    }
    writeln!(f)
}
