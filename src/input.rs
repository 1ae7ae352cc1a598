use std::collections::{HashMap, HashSet};

use glam::Vec2;
use winit::keyboard::KeyCode;

/// Logical actions the demo responds to.
///
/// Platform key codes are resolved to these once, at the window boundary, so
/// the camera and scene never see raw key constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveForward,
    MoveBack,
    StrafeLeft,
    StrafeRight,
    ToggleProjection,
}

/// Mapping from physical key codes to logical actions.
#[derive(Debug, Clone)]
pub struct Bindings {
    map: HashMap<KeyCode, Action>,
}

impl Default for Bindings {
    fn default() -> Self {
        let map = HashMap::from([
            (KeyCode::KeyW, Action::MoveForward),
            (KeyCode::KeyS, Action::MoveBack),
            (KeyCode::KeyA, Action::StrafeLeft),
            (KeyCode::KeyD, Action::StrafeRight),
            (KeyCode::KeyP, Action::ToggleProjection),
        ]);
        Self { map }
    }
}

impl Bindings {
    pub fn resolve(&self, key: KeyCode) -> Option<Action> {
        self.map.get(&key).copied()
    }
}

/// Per-frame input snapshot handed to the camera by value.
///
/// The window layer accumulates events into this; consumers read pressed
/// actions, one-shot press edges, and the mouse delta. The delta resets to
/// zero on every read so an idle mouse contributes nothing next frame.
#[derive(Debug, Default)]
pub struct InputState {
    pressed: HashSet<Action>,
    just_pressed: HashSet<Action>,
    mouse_delta: Vec2,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a key press. Held-key repeats do not retrigger the edge.
    pub fn press(&mut self, action: Action) {
        if self.pressed.insert(action) {
            self.just_pressed.insert(action);
        }
    }

    pub fn release(&mut self, action: Action) {
        self.pressed.remove(&action);
    }

    pub fn is_active(&self, action: Action) -> bool {
        self.pressed.contains(&action)
    }

    /// Consumes the press edge for `action`, if one happened since the last
    /// call. Used for toggles that must fire once per key press.
    pub fn take_just_pressed(&mut self, action: Action) -> bool {
        self.just_pressed.remove(&action)
    }

    pub fn add_mouse_delta(&mut self, delta: Vec2) {
        self.mouse_delta += delta;
    }

    /// Returns the accumulated mouse delta and resets it to zero.
    pub fn take_mouse_delta(&mut self) -> Vec2 {
        std::mem::take(&mut self.mouse_delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bindings_cover_movement_and_toggle() {
        let bindings = Bindings::default();
        assert_eq!(bindings.resolve(KeyCode::KeyW), Some(Action::MoveForward));
        assert_eq!(bindings.resolve(KeyCode::KeyS), Some(Action::MoveBack));
        assert_eq!(bindings.resolve(KeyCode::KeyA), Some(Action::StrafeLeft));
        assert_eq!(bindings.resolve(KeyCode::KeyD), Some(Action::StrafeRight));
        assert_eq!(
            bindings.resolve(KeyCode::KeyP),
            Some(Action::ToggleProjection)
        );
        assert_eq!(bindings.resolve(KeyCode::KeyQ), None);
    }

    #[test]
    fn press_and_release_track_active_state() {
        let mut input = InputState::new();
        assert!(!input.is_active(Action::MoveForward));
        input.press(Action::MoveForward);
        assert!(input.is_active(Action::MoveForward));
        input.release(Action::MoveForward);
        assert!(!input.is_active(Action::MoveForward));
    }

    #[test]
    fn press_edge_fires_once_per_press() {
        let mut input = InputState::new();
        input.press(Action::ToggleProjection);
        // Held-key repeat from the platform.
        input.press(Action::ToggleProjection);
        assert!(input.take_just_pressed(Action::ToggleProjection));
        assert!(!input.take_just_pressed(Action::ToggleProjection));

        input.release(Action::ToggleProjection);
        input.press(Action::ToggleProjection);
        assert!(input.take_just_pressed(Action::ToggleProjection));
    }

    #[test]
    fn mouse_delta_accumulates_and_zero_resets() {
        let mut input = InputState::new();
        input.add_mouse_delta(Vec2::new(3.0, -1.0));
        input.add_mouse_delta(Vec2::new(2.0, 4.0));
        assert_eq!(input.take_mouse_delta(), Vec2::new(5.0, 3.0));
        assert_eq!(input.take_mouse_delta(), Vec2::ZERO);
    }
}
