use anyhow::{bail, Result};
use common::{Config, ConfigLoader};
use serde::{Deserialize, Serialize};

use super::constants::NUM_WALLS_PER_PLAYER;

#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameOptions {
    pub walls_per_player: u8,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            walls_per_player: NUM_WALLS_PER_PLAYER,
        }
    }
}

impl Config for GameOptions {
    fn load(config: &ConfigLoader) -> Result<Self> {
        let walls_per_player = config
            .get("walls_per_player")
            .and_then(|v| v.as_usize())
            .unwrap_or(NUM_WALLS_PER_PLAYER as usize);

        if walls_per_player > u8::MAX as usize {
            bail!("walls_per_player must be at most {}", u8::MAX);
        }

        Ok(Self {
            walls_per_player: walls_per_player as u8,
        })
    }
}
