//! Keyboard input snapshot
//!
//! Written by the platform key listeners between frames, read by entities
//! during their step. The fire flag is consumer-cleared: whoever acts on a
//! fire press calls [`InputState::take_fire`].

/// Game actions bound to keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Left,
    Right,
    Fire,
}

impl Action {
    /// Map a DOM `KeyboardEvent.key` value to an action
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" | "Left" => Some(Action::Left),
            "ArrowRight" | "Right" => Some(Action::Right),
            " " | "Spacebar" => Some(Action::Fire),
            _ => None,
        }
    }

    /// Map a legacy numeric key code to an action
    pub fn from_key_code(code: u32) -> Option<Self> {
        match code {
            37 => Some(Action::Left),
            39 => Some(Action::Right),
            32 => Some(Action::Fire),
            _ => None,
        }
    }
}

/// Current state of the bound keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub fire: bool,
}

impl InputState {
    /// Record a key going down or up
    pub fn set(&mut self, action: Action, pressed: bool) {
        match action {
            Action::Left => self.left = pressed,
            Action::Right => self.right = pressed,
            Action::Fire => self.fire = pressed,
        }
    }

    /// Consume a pending fire press, returning whether there was one
    pub fn take_fire(&mut self) -> bool {
        std::mem::take(&mut self.fire)
    }
}
