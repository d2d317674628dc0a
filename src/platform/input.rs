//! Keyboard handling
//!
//! The simulation only ever asks which logical actions are held right
//! now. Hosts translate raw key names into those actions.

use std::collections::HashSet;

/// Logical game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveUpLeft,
    MoveDownLeft,
    MoveUpRight,
    MoveDownRight,
    Quit,
}

impl Action {
    /// Map a DOM `KeyboardEvent.key` value to an action
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "w" | "W" => Some(Action::MoveUpLeft),
            "s" | "S" => Some(Action::MoveDownLeft),
            "ArrowUp" => Some(Action::MoveUpRight),
            "ArrowDown" => Some(Action::MoveDownRight),
            "Escape" => Some(Action::Quit),
            _ => None,
        }
    }

    pub fn is_movement(self) -> bool {
        !matches!(self, Action::Quit)
    }
}

/// Which actions are held at poll time
pub trait InputSnapshot {
    fn is_held(&self, action: Action) -> bool;
}

/// Held-key set updated from key down/up events
#[derive(Debug, Clone, Default)]
pub struct KeyState {
    held: HashSet<Action>,
}

impl KeyState {
    pub fn press(&mut self, action: Action) {
        self.held.insert(action);
    }

    pub fn release(&mut self, action: Action) {
        self.held.remove(&action);
    }

    /// Handle key down event; returns whether the key was recognised
    pub fn key_down(&mut self, key: &str) -> bool {
        match Action::from_key(key) {
            Some(action) => {
                self.press(action);
                true
            }
            None => false,
        }
    }

    /// Handle key up event; returns whether the key was recognised
    pub fn key_up(&mut self, key: &str) -> bool {
        match Action::from_key(key) {
            Some(action) => {
                self.release(action);
                true
            }
            None => false,
        }
    }

    /// Drop everything held (e.g. on focus loss)
    pub fn clear(&mut self) {
        self.held.clear();
    }
}

impl InputSnapshot for KeyState {
    fn is_held(&self, action: Action) -> bool {
        self.held.contains(&action)
    }
}

/// Pre-recorded held keys, one entry per frame; used by the headless runner
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: Vec<KeyState>,
    cursor: usize,
    current: KeyState,
}

impl ScriptedInput {
    pub fn new(frames: Vec<KeyState>) -> Self {
        Self {
            frames,
            cursor: 0,
            current: KeyState::default(),
        }
    }

    /// Hold `actions` for `count` frames
    pub fn hold(mut self, actions: &[Action], count: usize) -> Self {
        let mut keys = KeyState::default();
        for &action in actions {
            keys.press(action);
        }
        self.frames.extend(std::iter::repeat_n(keys, count));
        self
    }

    /// Hold nothing for `count` frames
    pub fn idle(self, count: usize) -> Self {
        self.hold(&[], count)
    }

    /// Move to the next frame's keys; past the end nothing is held
    pub fn advance(&mut self) {
        self.current = self.frames.get(self.cursor).cloned().unwrap_or_default();
        self.cursor += 1;
    }

    pub fn is_finished(&self) -> bool {
        self.cursor >= self.frames.len()
    }
}

impl InputSnapshot for ScriptedInput {
    fn is_held(&self, action: Action) -> bool {
        self.current.is_held(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(Action::from_key("W"), Some(Action::MoveUpLeft));
        assert_eq!(Action::from_key("s"), Some(Action::MoveDownLeft));
        assert_eq!(Action::from_key("ArrowUp"), Some(Action::MoveUpRight));
        assert_eq!(Action::from_key("ArrowDown"), Some(Action::MoveDownRight));
        assert_eq!(Action::from_key("Escape"), Some(Action::Quit));
        assert_eq!(Action::from_key("x"), None);
        assert!(!Action::Quit.is_movement());
    }

    #[test]
    fn test_key_state_tracks_held() {
        let mut keys = KeyState::default();
        assert!(keys.key_down("w"));
        assert!(keys.key_down("ArrowDown"));
        assert!(!keys.key_down("q"));
        assert!(keys.is_held(Action::MoveUpLeft));
        assert!(keys.is_held(Action::MoveDownRight));

        keys.key_up("w");
        assert!(!keys.is_held(Action::MoveUpLeft));
        keys.clear();
        assert!(!keys.is_held(Action::MoveDownRight));
    }

    #[test]
    fn test_scripted_input_replays_frames() {
        let mut input = ScriptedInput::default()
            .hold(&[Action::MoveUpLeft], 2)
            .idle(1);

        input.advance();
        assert!(input.is_held(Action::MoveUpLeft));
        input.advance();
        assert!(input.is_held(Action::MoveUpLeft));
        input.advance();
        assert!(!input.is_held(Action::MoveUpLeft));
        assert!(input.is_finished());
        input.advance();
        assert!(!input.is_held(Action::MoveUpLeft));
    }
}
