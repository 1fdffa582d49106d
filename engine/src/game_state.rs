use std::fmt::Debug;
use std::hash::Hash;

/// A complete game position, including whatever history the rules need to decide legality.
pub trait GameState: Hash + Clone + Debug + Eq {
    /// The position before any move has been made, under the standard rules.
    fn initial() -> Self;
}
