// Current keyboard state, queried by action

use super::action::Action;
use std::collections::HashSet;

/// Which actions are held down right now
///
/// Entities sample this once per frame; there is no buffering or edge
/// detection, matching a plain "is key pressed" poll.
#[derive(Debug, Default, Clone)]
pub struct InputState {
    pressed: HashSet<Action>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if an action is currently pressed
    pub fn is_pressed(&self, action: Action) -> bool {
        self.pressed.contains(&action)
    }

    /// Register an action press
    pub fn press(&mut self, action: Action) {
        self.pressed.insert(action);
    }

    /// Register an action release
    pub fn release(&mut self, action: Action) {
        self.pressed.remove(&action);
    }

    /// Release everything (e.g. when the window loses focus)
    pub fn reset(&mut self) {
        self.pressed.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_and_release() {
        let mut input = InputState::new();
        assert!(!input.is_pressed(Action::Jump));

        input.press(Action::Jump);
        assert!(input.is_pressed(Action::Jump));

        input.release(Action::Jump);
        assert!(!input.is_pressed(Action::Jump));
    }

    #[test]
    fn test_multiple_presses_same_action() {
        let mut input = InputState::new();
        input.press(Action::MoveLeft);
        input.press(Action::MoveLeft);
        input.release(Action::MoveLeft);
        assert!(!input.is_pressed(Action::MoveLeft), "One release undoes repeated presses");
    }

    #[test]
    fn test_release_unpressed_action() {
        let mut input = InputState::new();
        input.release(Action::Jump);
        assert!(!input.is_pressed(Action::Jump));
    }

    #[test]
    fn test_reset() {
        let mut input = InputState::new();
        input.press(Action::MoveRight);
        input.press(Action::Jump);
        input.reset();
        assert!(!input.is_pressed(Action::MoveRight));
        assert!(!input.is_pressed(Action::Jump));
    }
}
