//! Keyboard edge-state tracking.
//!
//! Raw key events are merged in as they arrive; `tick()` runs once per
//! simulation step, after the ship systems have read the state, promoting
//! pressed keys to held and dropping released markers. A press is therefore
//! visible to gameplay for one full step before it becomes held.

use std::collections::HashSet;

use log::warn;

use contrail_core::commands::InputEvent;
use contrail_core::types::Position;

/// The four recognized game keys. Anything else is logged and ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameKey {
    Thrust,
    TurnLeft,
    Brake,
    TurnRight,
}

impl GameKey {
    /// Map a platform key code to a game key.
    pub fn from_code(code: &str) -> Option<GameKey> {
        match code.to_ascii_uppercase().as_str() {
            "W" => Some(GameKey::Thrust),
            "A" => Some(GameKey::TurnLeft),
            "S" => Some(GameKey::Brake),
            "D" => Some(GameKey::TurnRight),
            _ => None,
        }
    }
}

/// Tracks held/pressed/released state for the recognized keys.
///
/// Per key, a consumer observes at most one of the three states at a time:
/// pressed and released last exactly one step, held persists between them.
#[derive(Debug, Default)]
pub struct InputState {
    held: HashSet<GameKey>,
    pressed: HashSet<GameKey>,
    released: HashSet<GameKey>,
    /// Keys whose edge state needs resolution at the next `tick()`.
    pending: Vec<GameKey>,
    /// Last reported pointer position. Captured, not consumed by gameplay.
    pointer: Option<Position>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one raw platform event. Unrecognized key codes are reported
    /// once via the log and otherwise ignored.
    pub fn handle_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::KeyDown { code } => match GameKey::from_code(code) {
                Some(key) => self.key_down(key),
                None => warn!("ignoring unrecognized key code: {code}"),
            },
            InputEvent::KeyUp { code } => match GameKey::from_code(code) {
                Some(key) => self.key_up(key),
                None => warn!("ignoring unrecognized key code: {code}"),
            },
            InputEvent::PointerMove { x, y } => {
                self.pointer = Some(Position::new(*x, *y));
            }
        }
    }

    /// Record a key-down. A repeat while the pressed edge is still set
    /// promotes straight to held; otherwise a fresh press sets the edge
    /// and queues it for resolution.
    pub fn key_down(&mut self, key: GameKey) {
        if self.pressed.contains(&key) {
            self.pressed.remove(&key);
            self.held.insert(key);
        } else if !self.held.contains(&key) {
            self.pressed.insert(key);
            self.pending.push(key);
        }
    }

    /// Record a key-up: sets the released edge and clears pressed/held.
    pub fn key_up(&mut self, key: GameKey) {
        self.released.insert(key);
        self.pending.push(key);
        self.pressed.remove(&key);
        self.held.remove(&key);
    }

    /// Resolve edge states for the step that just ran: pressed keys become
    /// held, released markers are dropped.
    pub fn tick(&mut self) {
        for key in self.pending.drain(..) {
            if self.pressed.remove(&key) {
                self.held.insert(key);
            } else {
                self.released.remove(&key);
            }
        }
    }

    pub fn is_held(&self, key: GameKey) -> bool {
        self.held.contains(&key)
    }

    pub fn is_pressed(&self, key: GameKey) -> bool {
        self.pressed.contains(&key)
    }

    pub fn is_released(&self, key: GameKey) -> bool {
        self.released.contains(&key)
    }

    pub fn pointer(&self) -> Option<Position> {
        self.pointer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_promotes_to_held_after_one_tick() {
        let mut input = InputState::new();
        input.key_down(GameKey::Thrust);
        assert!(input.is_pressed(GameKey::Thrust));
        assert!(!input.is_held(GameKey::Thrust));

        input.tick();
        assert!(input.is_held(GameKey::Thrust));
        assert!(!input.is_pressed(GameKey::Thrust));
    }

    #[test]
    fn test_release_clears_held_immediately() {
        let mut input = InputState::new();
        input.key_down(GameKey::Thrust);
        input.tick();

        input.key_up(GameKey::Thrust);
        assert!(input.is_released(GameKey::Thrust));
        assert!(!input.is_held(GameKey::Thrust));

        input.tick();
        assert!(!input.is_released(GameKey::Thrust));
    }

    #[test]
    fn test_repeat_down_promotes_without_tick() {
        let mut input = InputState::new();
        input.key_down(GameKey::Brake);
        // Platform auto-repeat fires a second down before the step ends.
        input.key_down(GameKey::Brake);
        assert!(input.is_held(GameKey::Brake));
        assert!(!input.is_pressed(GameKey::Brake));

        // The stale pending entry resolves to a no-op.
        input.tick();
        assert!(input.is_held(GameKey::Brake));
    }

    #[test]
    fn test_down_while_held_is_a_no_op() {
        let mut input = InputState::new();
        input.key_down(GameKey::TurnLeft);
        input.tick();
        input.key_down(GameKey::TurnLeft);
        assert!(input.is_held(GameKey::TurnLeft));
        assert!(!input.is_pressed(GameKey::TurnLeft));
    }

    #[test]
    fn test_at_most_one_state_per_key() {
        let mut input = InputState::new();
        input.key_down(GameKey::TurnRight);
        let states = |i: &InputState| {
            [
                i.is_held(GameKey::TurnRight),
                i.is_pressed(GameKey::TurnRight),
                i.is_released(GameKey::TurnRight),
            ]
            .iter()
            .filter(|s| **s)
            .count()
        };
        assert_eq!(states(&input), 1);
        input.tick();
        assert_eq!(states(&input), 1);
        input.key_up(GameKey::TurnRight);
        assert_eq!(states(&input), 1);
        input.tick();
        assert_eq!(states(&input), 0);
    }

    #[test]
    fn test_unknown_code_leaves_state_untouched() {
        let mut input = InputState::new();
        input.handle_event(&InputEvent::KeyDown { code: "Q".into() });
        for key in [
            GameKey::Thrust,
            GameKey::TurnLeft,
            GameKey::Brake,
            GameKey::TurnRight,
        ] {
            assert!(!input.is_held(key) && !input.is_pressed(key) && !input.is_released(key));
        }
    }

    #[test]
    fn test_pointer_captured() {
        let mut input = InputState::new();
        assert!(input.pointer().is_none());
        input.handle_event(&InputEvent::PointerMove { x: 12.0, y: 34.0 });
        assert_eq!(input.pointer(), Some(Position::new(12.0, 34.0)));
    }

    #[test]
    fn test_wasd_mapping() {
        assert_eq!(GameKey::from_code("W"), Some(GameKey::Thrust));
        assert_eq!(GameKey::from_code("a"), Some(GameKey::TurnLeft));
        assert_eq!(GameKey::from_code("S"), Some(GameKey::Brake));
        assert_eq!(GameKey::from_code("d"), Some(GameKey::TurnRight));
        assert_eq!(GameKey::from_code("Space"), None);
    }
}
