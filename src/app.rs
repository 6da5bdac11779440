// Application: window, resources and the frame loop

use crate::config::GameConfig;
use crate::core::FloatRect;
use crate::engine::assets::{AssetKind, AssetLoader, ResourceCache};
use crate::engine::audio::AudioEngine;
use crate::engine::game_loop::FrameClock;
use crate::engine::input::InputManager;
use crate::engine::renderer::{Renderer, SpriteBatch};
use crate::game::player::{JUMP_SOUND, PLAYER_TEXTURE};
use crate::game::{Player, World};
use anyhow::Result;
use log::{debug, error, info, warn};
use std::sync::Arc;
use std::time::Instant;
use winit::{
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop, EventLoopWindowTarget},
    window::{Window, WindowBuilder},
};

/// Frames between FPS log lines
const FPS_LOG_INTERVAL: u64 = 300;

const MUSIC_PATH: &str = "music.ogg";

pub struct App {
    window: Arc<Window>,
    renderer: Renderer,
    audio: Option<AudioEngine>,
    resources: ResourceCache,
    input: InputManager,
    clock: FrameClock,
    world: World,
    batch: SpriteBatch,
    config: GameConfig,
}

impl App {
    /// Open the window and set up the GPU, audio and world
    pub fn new(event_loop: &EventLoop<()>, config: GameConfig) -> Result<Self> {
        let window = Arc::new(
            WindowBuilder::new()
                .with_title(config.window.title)
                .with_inner_size(winit::dpi::PhysicalSize::new(
                    config.window.width,
                    config.window.height,
                ))
                .with_resizable(true)
                .build(event_loop)?,
        );
        info!("Window created successfully");

        let renderer = pollster::block_on(Renderer::new(window.clone()))?;

        let audio = match AudioEngine::new() {
            Ok(audio) => Some(audio),
            Err(e) => {
                warn!("Running without sound: {}", e);
                None
            }
        };

        let view = FloatRect::new(
            0.0,
            0.0,
            config.window.width as f32,
            config.window.height as f32,
        );

        let mut app = Self {
            window,
            renderer,
            audio,
            resources: ResourceCache::new(AssetLoader::new(config.asset_root)),
            input: InputManager::new(),
            clock: FrameClock::new(config.window.frame_rate_limit),
            world: World::new(view),
            batch: SpriteBatch::new(),
            config,
        };

        app.load_resources();
        app.initialize();

        Ok(app)
    }

    fn load_resources(&mut self) {
        self.resources
            .load(AssetKind::Texture, PLAYER_TEXTURE, "player.png");
        self.resources.load(AssetKind::Sound, JUMP_SOUND, "jump.wav");

        if let Some(audio) = self.audio.as_mut() {
            let path = self.resources.loader().resolve_path(MUSIC_PATH);
            if let Err(e) = audio.play_music(&path, true) {
                warn!("Background music unavailable: {}", e);
            }
        }

        let stats = self.resources.stats();
        info!(
            "Resources loaded: {} textures, {} sounds, {} fonts",
            stats.texture_count, stats.sound_count, stats.font_count
        );
    }

    fn initialize(&mut self) {
        let player = Player::new(
            &self.resources,
            self.config.player,
            &self.config.physics,
        );
        self.world.spawn(player);
    }

    /// Run until the window closes
    pub fn run(mut self, event_loop: EventLoop<()>) -> Result<()> {
        event_loop
            .run(move |event, elwt| match event {
                Event::WindowEvent { event, window_id } if window_id == self.window.id() => {
                    self.handle_window_event(event, elwt)
                }
                Event::AboutToWait => self.schedule_frame(elwt),
                _ => {}
            })
            .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))
    }

    fn handle_window_event(&mut self, event: WindowEvent, elwt: &EventLoopWindowTarget<()>) {
        match event {
            WindowEvent::CloseRequested => {
                info!("Close requested, shutting down...");
                elwt.exit();
            }
            WindowEvent::Resized(physical_size) => {
                self.renderer.resize(physical_size);
            }
            WindowEvent::KeyboardInput { event, .. } => {
                self.input.process_keyboard_event(&event);
            }
            WindowEvent::Focused(false) => {
                // Key releases are lost while unfocused
                self.input.reset();
            }
            WindowEvent::RedrawRequested => self.frame(elwt),
            _ => {}
        }
    }

    /// Ask for a redraw once the frame cap allows it, and sleep until then
    fn schedule_frame(&self, elwt: &EventLoopWindowTarget<()>) {
        if self.clock.frame_due(Instant::now()) {
            self.window.request_redraw();
        }
        match self.clock.next_frame_deadline() {
            Some(deadline) => elwt.set_control_flow(ControlFlow::WaitUntil(deadline)),
            None => elwt.set_control_flow(ControlFlow::Poll),
        }
    }

    fn frame(&mut self, elwt: &EventLoopWindowTarget<()>) {
        let dt = self.clock.restart();

        let cues = self.world.update(dt, self.input.state());
        self.play_sounds(&cues);

        self.batch.clear();
        self.world.render(&mut self.batch);

        match self.renderer.render(
            self.world.camera(),
            self.config.clear_color,
            &self.batch,
            &self.resources,
        ) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.renderer.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                error!("GPU out of memory, exiting");
                elwt.exit();
            }
            Err(e) => warn!("Dropped frame: {:?}", e),
        }

        if self.clock.frame_count() % FPS_LOG_INTERVAL == 0 {
            debug!(
                "FPS: {:.1} ({} frames in {:.1}s)",
                self.clock.fps(),
                self.clock.frame_count(),
                self.clock.elapsed().as_secs_f32()
            );
        }
    }

    fn play_sounds(&mut self, cues: &[&'static str]) {
        let Some(audio) = self.audio.as_mut() else {
            return;
        };
        for &name in cues {
            if let Some(sound) = self.resources.sound(name) {
                if let Err(e) = audio.play_sound(sound) {
                    warn!("Could not play '{}': {}", name, e);
                }
            }
        }
    }
}
