// Core types shared by the engine and game layers

pub mod math;

pub use math::{FloatRect, IntRect};
