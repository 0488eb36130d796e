use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use game::{action::Action, game_state::Player};

/// maps keys to the game actions they trigger.
pub struct KeyBindings {
    bindings: HashMap<KeyCode, Action>,
}

impl KeyBindings {
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// binds `code` to `action`, returning the action it was previously bound to.
    pub fn bind(&mut self, code: KeyCode, action: Action) -> Option<Action> {
        self.bindings.insert(code, action)
    }

    /// the action for a key event. releases are ignored, as are keys held with control or alt,
    /// except for ctrl-c which always quits.
    pub fn action_for(&self, event: &KeyEvent) -> Option<Action> {
        if event.kind == KeyEventKind::Release {
            return None;
        }
        if event.modifiers.contains(KeyModifiers::CONTROL) {
            return match event.code {
                KeyCode::Char('c') => Some(Action::Quit),
                _ => None,
            };
        }
        if event.modifiers.contains(KeyModifiers::ALT) {
            return None;
        }
        self.bindings.get(&event.code).copied()
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = Self::empty();
        for (chars, action) in [
            (['w', 'W'], Action::MoveUp(Player::Left)),
            (['s', 'S'], Action::MoveDown(Player::Left)),
            (['p', 'P'], Action::TogglePause),
            (['q', 'Q'], Action::Quit),
        ] {
            for c in chars {
                bindings.bind(KeyCode::Char(c), action);
            }
        }
        bindings.bind(KeyCode::Up, Action::MoveUp(Player::Right));
        bindings.bind(KeyCode::Down, Action::MoveDown(Player::Right));
        bindings
    }
}
