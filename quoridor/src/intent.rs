use super::{Orientation, Position};
use serde::{Deserialize, Serialize};

/// Which part of the board a wall placement was aimed at.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WallIntent {
    Horizontal,
    Vertical,
    /// The crossing point between four cells. Resolved as a horizontal wall.
    Intersection,
}

impl WallIntent {
    pub fn orientation(&self) -> Orientation {
        match self {
            WallIntent::Horizontal | WallIntent::Intersection => Orientation::Horizontal,
            WallIntent::Vertical => Orientation::Vertical,
        }
    }
}

impl From<Orientation> for WallIntent {
    fn from(orientation: Orientation) -> Self {
        match orientation {
            Orientation::Horizontal => WallIntent::Horizontal,
            Orientation::Vertical => WallIntent::Vertical,
        }
    }
}

/// A move request as produced by a user interface, before it has been canonicalized or validated.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Intent {
    MovePawn {
        destination: Position,
    },
    /// `target` is the cell the user aimed at. It may be off by one from the canonical anchor.
    PlaceWall {
        target: Position,
        intent: WallIntent,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersection_resolves_horizontal() {
        assert_eq!(
            WallIntent::Intersection.orientation(),
            Orientation::Horizontal
        );
    }

    #[test]
    fn test_intent_json() {
        let json = r#"{"kind":"place_wall","target":"e5","intent":"vertical"}"#;
        let intent = serde_json::from_str::<Intent>(json).unwrap();

        assert_eq!(
            intent,
            Intent::PlaceWall {
                target: Position::new(4, 4),
                intent: WallIntent::Vertical
            }
        );

        let json = r#"{"kind":"move_pawn","destination":"e2"}"#;
        let intent = serde_json::from_str::<Intent>(json).unwrap();

        assert_eq!(
            intent,
            Intent::MovePawn {
                destination: Position::new(4, 1)
            }
        );
    }
}
