use log::info;

use crate::game_state::{GameState, Player};

/// everything a key press can ask the game to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    MoveUp(Player),
    MoveDown(Player),
    TogglePause,
    Quit,
}

impl GameState {
    /// applies an action to the state. returns whether anything changed.
    pub fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::MoveUp(player) => !self.paused && self.paddle_mut(player).move_up(),
            Action::MoveDown(player) => !self.paused && self.paddle_mut(player).move_down(),
            Action::TogglePause => {
                self.paused = !self.paused;
                info!("{}", if self.paused { "paused" } else { "resumed" });
                true
            }
            Action::Quit => {
                if !self.running {
                    return false;
                }
                info!("quitting");
                self.running = false;
                true
            }
        }
    }
}
