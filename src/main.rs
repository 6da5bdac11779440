use anyhow::Result;
use log::info;
use skyhop::app::App;
use skyhop::config::GameConfig;
use winit::event_loop::EventLoop;

fn main() -> Result<()> {
    // Info by default, RUST_LOG overrides
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("Starting Skyhop...");

    let event_loop = EventLoop::new()?;
    let app = App::new(&event_loop, GameConfig::default())?;
    app.run(event_loop)?;

    info!("Shut down cleanly");
    Ok(())
}
