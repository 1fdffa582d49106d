use super::constants::MAX_WALL_ANCHOR;
use super::Position;
use anyhow::{anyhow, bail};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt::{self};
use std::str::FromStr;

static NOTATION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([a-i])([1-9])([vh])?$").unwrap());

#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn perpendicular(&self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }

    fn notation_suffix(&self) -> char {
        match self {
            Orientation::Horizontal => 'h',
            Orientation::Vertical => 'v',
        }
    }
}

/// A wall identified by its anchor, the lower indexed of the two edge slots it covers.
///
/// A horizontal wall covers the edge above `anchor` and above the cell east of it. A vertical wall covers the edge
/// right of `anchor` and right of the cell north of it.
#[derive(Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct Wall {
    pub anchor: Position,
    pub orientation: Orientation,
}

impl Wall {
    pub fn new(anchor: Position, orientation: Orientation) -> Self {
        Self {
            anchor,
            orientation,
        }
    }

    pub fn horizontal(anchor: Position) -> Self {
        Self::new(anchor, Orientation::Horizontal)
    }

    pub fn vertical(anchor: Position) -> Self {
        Self::new(anchor, Orientation::Vertical)
    }

    pub fn has_valid_anchor(&self) -> bool {
        self.anchor.file <= MAX_WALL_ANCHOR && self.anchor.rank <= MAX_WALL_ANCHOR
    }

    /// The cell holding the continuation half of the wall.
    pub fn continuation(&self) -> Position {
        match self.orientation {
            Orientation::Horizontal => Position::new(self.anchor.file + 1, self.anchor.rank),
            Orientation::Vertical => Position::new(self.anchor.file, self.anchor.rank + 1),
        }
    }

    /// Every wall that can be anchored on the board, horizontal and vertical.
    pub fn all() -> impl Iterator<Item = Wall> {
        (0..=MAX_WALL_ANCHOR).flat_map(|rank| {
            (0..=MAX_WALL_ANCHOR).flat_map(move |file| {
                let anchor = Position::new(file, rank);
                [Wall::horizontal(anchor), Wall::vertical(anchor)]
            })
        })
    }
}

impl fmt::Display for Wall {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.anchor, self.orientation.notation_suffix())
    }
}

impl fmt::Debug for Wall {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[derive(Clone, Copy, Hash, Eq, PartialEq)]
pub enum Move {
    MovePawn(Position),
    PlaceWall(Wall),
}

impl Move {
    pub fn is_wall(&self) -> bool {
        matches!(self, Move::PlaceWall(_))
    }
}

impl From<Wall> for Move {
    fn from(wall: Wall) -> Self {
        Move::PlaceWall(wall)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Move::MovePawn(position) => write!(f, "{}", position),
            Move::PlaceWall(wall) => write!(f, "{}", wall),
        }
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl FromStr for Move {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cap = NOTATION_RE
            .captures(s)
            .ok_or_else(|| anyhow!("Invalid move '{}', expected [a-i][1-9] with an optional v or h", s))?;

        let mut chars = s.chars();
        let (file, rank) = match (chars.next(), chars.next()) {
            (Some(file), Some(rank)) => (file, rank),
            _ => bail!("Invalid move '{}'", s),
        };
        let position = Position::from_chars(file, rank)?;

        let orientation = match cap.get(3).map(|m| m.as_str()) {
            None => return Ok(Move::MovePawn(position)),
            Some("v") => Orientation::Vertical,
            Some(_) => Orientation::Horizontal,
        };

        let wall = Wall::new(position, orientation);
        if !wall.has_valid_anchor() {
            bail!(
                "Invalid wall '{}', walls cannot be anchored on file i or rank 9",
                s
            );
        }

        Ok(Move::PlaceWall(wall))
    }
}
