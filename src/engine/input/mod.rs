// Input handling system
//
// - `action`: game actions and default key bindings
// - `state`: which actions are currently held
// - `manager`: feeds winit keyboard events into the state

pub mod action;
pub mod manager;
pub mod state;

pub use action::Action;
pub use manager::InputManager;
pub use state::InputState;
