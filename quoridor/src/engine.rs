use super::{GameState, Move, Player};
use engine::engine::{GameEngine, ValidActions};
use log::warn;

#[derive(Default)]
pub struct Engine {}

impl Engine {
    pub fn new() -> Self {
        Self {}
    }
}

impl GameEngine for Engine {
    type Action = Move;
    type State = GameState;
    type Terminal = Player;

    /// Illegal moves are logged and leave the returned state unchanged.
    fn take_action(&self, game_state: &Self::State, action: &Self::Action) -> Self::State {
        let mut game_state = game_state.clone();
        if let Err(rejection) = game_state.take_move(action) {
            warn!("Ignoring {}: {}", action, rejection);
        }
        game_state
    }

    fn terminal_state(&self, game_state: &Self::State) -> Option<Self::Terminal> {
        game_state.is_terminal()
    }

    /// 1 for White, 2 for Black.
    fn player_to_move(&self, game_state: &Self::State) -> usize {
        game_state.player_to_move().index() + 1
    }

    fn move_number(&self, game_state: &Self::State) -> usize {
        game_state.move_number()
    }
}

impl ValidActions for Engine {
    type Action = Move;
    type State = GameState;

    fn valid_actions(&self, game_state: &Self::State) -> impl Iterator<Item = Self::Action> {
        game_state.valid_moves().into_iter()
    }
}
