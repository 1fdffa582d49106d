pub const BOARD_WIDTH: usize = 9;
pub const BOARD_HEIGHT: usize = 9;
pub const BOARD_SIZE: usize = BOARD_WIDTH * BOARD_HEIGHT;

/// Highest file or rank a wall can be anchored on. The last row and column of cells only ever hold the
/// continuation half of a wall.
pub const MAX_WALL_ANCHOR: usize = 7;

pub const NUM_WALLS_PER_PLAYER: u8 = 10;

pub const ASCII_LETTER_A: u8 = 97;
