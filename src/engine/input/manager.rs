// Input manager - turns window keyboard events into action state

use super::action::{default_bindings, Action};
use super::state::InputState;
use std::collections::HashMap;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Maps physical keys to actions and tracks which actions are held
pub struct InputManager {
    bindings: HashMap<KeyCode, Action>,
    state: InputState,
}

impl InputManager {
    /// Create an input manager with the default bindings
    pub fn new() -> Self {
        Self::with_bindings(default_bindings())
    }

    pub fn with_bindings(bindings: Vec<(KeyCode, Action)>) -> Self {
        Self {
            bindings: bindings.into_iter().collect(),
            state: InputState::new(),
        }
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        self.process_key(event.physical_key, event.state);
    }

    /// Apply a key press or release. Unbound keys are ignored.
    pub fn process_key(&mut self, key: PhysicalKey, element_state: ElementState) {
        let PhysicalKey::Code(code) = key else {
            return;
        };
        let Some(&action) = self.bindings.get(&code) else {
            return;
        };

        match element_state {
            ElementState::Pressed => self.state.press(action),
            ElementState::Released => self.state.release(action),
        }
    }

    /// Current action state
    pub fn state(&self) -> &InputState {
        &self.state
    }

    /// Release all actions
    pub fn reset(&mut self) {
        self.state.reset();
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(manager: &mut InputManager, key: KeyCode) {
        manager.process_key(PhysicalKey::Code(key), ElementState::Pressed);
    }

    #[test]
    fn test_default_bindings() {
        let mut manager = InputManager::new();
        press(&mut manager, KeyCode::ArrowLeft);
        press(&mut manager, KeyCode::ArrowRight);
        press(&mut manager, KeyCode::Space);

        let state = manager.state();
        assert!(state.is_pressed(Action::MoveLeft));
        assert!(state.is_pressed(Action::MoveRight));
        assert!(state.is_pressed(Action::Jump));
    }

    #[test]
    fn test_press_and_release_key() {
        let mut manager = InputManager::new();

        press(&mut manager, KeyCode::ArrowRight);
        assert!(manager.state().is_pressed(Action::MoveRight));

        manager.process_key(PhysicalKey::Code(KeyCode::ArrowRight), ElementState::Released);
        assert!(!manager.state().is_pressed(Action::MoveRight));
    }

    #[test]
    fn test_unbound_key_ignored() {
        let mut manager = InputManager::new();
        press(&mut manager, KeyCode::KeyQ);
        assert!(!manager.state().is_pressed(Action::MoveLeft));
        assert!(!manager.state().is_pressed(Action::MoveRight));
        assert!(!manager.state().is_pressed(Action::Jump));
    }

    #[test]
    fn test_custom_bindings() {
        let mut manager = InputManager::with_bindings(vec![(KeyCode::KeyW, Action::Jump)]);

        press(&mut manager, KeyCode::Space);
        assert!(!manager.state().is_pressed(Action::Jump));

        press(&mut manager, KeyCode::KeyW);
        assert!(manager.state().is_pressed(Action::Jump));
    }

    #[test]
    fn test_reset_releases_everything() {
        let mut manager = InputManager::new();
        press(&mut manager, KeyCode::Space);
        manager.reset();
        assert!(!manager.state().is_pressed(Action::Jump));
    }
}
