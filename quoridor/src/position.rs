use super::constants::{ASCII_LETTER_A, BOARD_HEIGHT, BOARD_WIDTH};
use anyhow::{anyhow, Result};
use std::fmt::{self};
use std::str::FromStr;

#[derive(Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct Position {
    /// The letter axis, `a` through `i` mapped to 0 through 8.
    pub file: usize,
    /// The number axis, `1` through `9` mapped to 0 through 8. White advances towards higher ranks.
    pub rank: usize,
}

impl Position {
    pub fn new(file: usize, rank: usize) -> Self {
        assert!(
            file < BOARD_WIDTH && rank < BOARD_HEIGHT,
            "Position ({}, {}) must be within the {}x{} board",
            file,
            rank,
            BOARD_WIDTH,
            BOARD_HEIGHT
        );

        Self { file, rank }
    }

    pub fn try_new(file: usize, rank: usize) -> Option<Self> {
        (file < BOARD_WIDTH && rank < BOARD_HEIGHT).then_some(Self { file, rank })
    }

    pub fn from_index(value: usize) -> Self {
        Self::new(value % BOARD_WIDTH, value / BOARD_WIDTH)
    }

    pub fn index(&self) -> usize {
        self.rank * BOARD_WIDTH + self.file
    }

    /// Builds a position from a file letter and a rank digit as they appear in notation.
    pub fn from_chars(file: char, rank: char) -> Result<Self> {
        let file = (file as u32)
            .checked_sub(ASCII_LETTER_A as u32)
            .map(|f| f as usize)
            .filter(|f| *f < BOARD_WIDTH)
            .ok_or_else(|| anyhow!("Invalid file '{}', expected a letter from a to i", file))?;

        let rank = rank
            .to_digit(10)
            .map(|r| r as usize)
            .filter(|r| (1..=BOARD_HEIGHT).contains(r))
            .ok_or_else(|| anyhow!("Invalid rank '{}', expected a digit from 1 to 9", rank))?;

        Ok(Self::new(file, rank - 1))
    }

    pub fn file_letter(&self) -> char {
        (ASCII_LETTER_A + self.file as u8) as char
    }

    /// The neighbouring position in the given direction, or `None` when it would leave the board.
    pub fn step(&self, direction: Direction) -> Option<Self> {
        match direction {
            Direction::North => Self::try_new(self.file, self.rank + 1),
            Direction::East => Self::try_new(self.file + 1, self.rank),
            Direction::South => self
                .rank
                .checked_sub(1)
                .map(|rank| Self::new(self.file, rank)),
            Direction::West => self
                .file
                .checked_sub(1)
                .map(|file| Self::new(file, self.rank)),
        }
    }
}

impl FromStr for Position {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(file), Some(rank), None) => Position::from_chars(file, rank),
            _ => Err(anyhow!("Invalid position '{}'", s)),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.file_letter(), self.rank + 1)
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    pub fn opposite(&self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// The two directions at a right angle to this one.
    pub fn perpendicular(&self) -> [Direction; 2] {
        match self {
            Direction::North | Direction::South => [Direction::East, Direction::West],
            Direction::East | Direction::West => [Direction::North, Direction::South],
        }
    }
}
