// Engine modules: assets, audio, frame timing, input, physics, renderer

pub mod assets;
pub mod audio;
pub mod game_loop;
pub mod input;
pub mod physics;
pub mod renderer;
