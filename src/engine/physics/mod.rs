// Physics: gravity and velocity integration
//
// There is no collision detection; the game loop calls an empty collision
// pass after integration.

pub mod body;

pub use body::PhysicsBody;
