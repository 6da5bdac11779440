// Game layer
//
// - `animation`: frame animations and per-entity animation sets
// - `entity`: shared entity state and the closed set of entity kinds
// - `player`: the keyboard-controlled player
// - `world`: entity collection, camera and per-frame update

pub mod animation;
pub mod entity;
pub mod player;
pub mod world;

pub use player::Player;
pub use world::World;
