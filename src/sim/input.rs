//! Per-frame input snapshot
//!
//! The host samples its keyboard/mouse once per frame and hands the snapshot
//! to `Game::tick`. The simulation only ever reads it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// State of a key or mouse button during one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum KeyState {
    /// Not touched
    #[default]
    Up,
    /// Went down this frame
    Pressed,
    /// Down for more than one frame
    Held,
    /// Went up this frame
    Released,
}

impl KeyState {
    /// Down this frame, edge or not
    #[inline]
    pub fn is_down(self) -> bool {
        matches!(self, KeyState::Pressed | KeyState::Held)
    }

    /// Drop the one-shot edge so it is only observed once
    #[inline]
    pub fn settled(self) -> Self {
        match self {
            KeyState::Pressed => KeyState::Held,
            KeyState::Released => KeyState::Up,
            other => other,
        }
    }
}

/// Keys every game reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Space,
    Enter,
    P,
}

impl Key {
    pub const ALL: [Key; 7] = [
        Key::Left,
        Key::Right,
        Key::Up,
        Key::Down,
        Key::Space,
        Key::Enter,
        Key::P,
    ];

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

/// Mouse buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TickInput {
    keys: [KeyState; 7],
    buttons: [KeyState; 3],
    /// Mouse position in play-field coordinates
    pub mouse: Vec2,
}

impl TickInput {
    /// Snapshot with nothing pressed
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set one key
    pub fn with_key(mut self, key: Key, state: KeyState) -> Self {
        self.set_key(key, state);
        self
    }

    /// Builder: set one mouse button
    pub fn with_button(mut self, button: MouseButton, state: KeyState) -> Self {
        self.set_button(button, state);
        self
    }

    /// Builder: set the mouse position
    pub fn with_mouse(mut self, x: f32, y: f32) -> Self {
        self.mouse = Vec2::new(x, y);
        self
    }

    pub fn set_key(&mut self, key: Key, state: KeyState) {
        self.keys[key.index()] = state;
    }

    pub fn set_button(&mut self, button: MouseButton, state: KeyState) {
        self.buttons[button as usize] = state;
    }

    #[inline]
    pub fn key(&self, key: Key) -> KeyState {
        self.keys[key.index()]
    }

    #[inline]
    pub fn button(&self, button: MouseButton) -> KeyState {
        self.buttons[button as usize]
    }

    /// Key went down this frame
    #[inline]
    pub fn pressed(&self, key: Key) -> bool {
        self.key(key) == KeyState::Pressed
    }

    /// Key is held past its first frame
    #[inline]
    pub fn held(&self, key: Key) -> bool {
        self.key(key) == KeyState::Held
    }

    /// Key went up this frame
    #[inline]
    pub fn released(&self, key: Key) -> bool {
        self.key(key) == KeyState::Released
    }

    /// Mouse button went down this frame
    #[inline]
    pub fn clicked(&self, button: MouseButton) -> bool {
        self.button(button) == KeyState::Pressed
    }

    /// Copy with every one-shot edge removed.
    ///
    /// Used by the fixed-step runner for the second and later substeps of a
    /// host frame so an edge is delivered exactly once.
    pub fn settled(&self) -> Self {
        let mut out = self.clone();
        for state in out.keys.iter_mut().chain(out.buttons.iter_mut()) {
            *state = state.settled();
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        let input = TickInput::new();
        for key in Key::ALL {
            assert_eq!(input.key(key), KeyState::Up);
        }
        assert!(!input.clicked(MouseButton::Left));
    }

    #[test]
    fn test_builders() {
        let input = TickInput::new()
            .with_key(Key::Space, KeyState::Pressed)
            .with_key(Key::Left, KeyState::Held)
            .with_button(MouseButton::Right, KeyState::Pressed)
            .with_mouse(10.0, 20.0);

        assert!(input.pressed(Key::Space));
        assert!(input.held(Key::Left));
        assert!(!input.held(Key::Right));
        assert!(input.clicked(MouseButton::Right));
        assert_eq!(input.mouse, Vec2::new(10.0, 20.0));
    }

    #[test]
    fn test_settled_drops_edges() {
        let input = TickInput::new()
            .with_key(Key::P, KeyState::Pressed)
            .with_key(Key::Left, KeyState::Released)
            .with_key(Key::Down, KeyState::Held)
            .with_button(MouseButton::Left, KeyState::Pressed);

        let settled = input.settled();
        assert_eq!(settled.key(Key::P), KeyState::Held);
        assert_eq!(settled.key(Key::Left), KeyState::Up);
        assert_eq!(settled.key(Key::Down), KeyState::Held);
        assert_eq!(settled.button(MouseButton::Left), KeyState::Held);
    }
}
