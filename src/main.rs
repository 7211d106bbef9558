//! Planes: a single-screen arcade shooter
//!
//! Fly at the bottom of the screen, shoot down the enemies falling from the
//! top, and avoid ramming them. Arrow keys fly, Space fires, P or Escape
//! pauses.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod asset;
mod game;
mod input;
mod settings;

use macroquad::prelude::*;
use ::rand::rngs::StdRng;
use ::rand::SeedableRng;

use asset::{names, AssetManager, DEFAULT_FALLBACK_SIZE};
use game::{FrameClock, GameRuntime, Renderer, Session, SpriteSizes};
use input::InputState;
use settings::{Settings, SETTINGS_PATH};

fn window_conf() -> Conf {
    // Runs before logging is up; main() reloads and reports problems
    let settings = Settings::load(SETTINGS_PATH).unwrap_or_default();
    Conf {
        window_title: settings.screen.caption.clone(),
        window_width: settings.screen.width as i32,
        window_height: settings.screen.height as i32,
        window_resizable: false,
        high_dpi: false,
        ..Default::default()
    }
}

/// Milliseconds since start, the clock every cooldown runs on
fn now_ms() -> f64 {
    get_time() * 1000.0
}

fn load_assets(settings: &Settings) -> AssetManager {
    let paths = &settings.paths;
    let mut assets = AssetManager::new();
    for (name, relative) in [
        (names::PLAYER, &paths.player),
        (names::BULLET, &paths.bullet),
        (names::ENEMY, &paths.enemy),
    ] {
        assets.load(name, paths.resolve(relative), settings.scale_factor, DEFAULT_FALLBACK_SIZE);
    }
    assets
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Planes v{}", VERSION);

    let settings = Settings::load_or_default(SETTINGS_PATH);
    let assets = load_assets(&settings);
    let sizes = match SpriteSizes::from_assets(&assets) {
        Ok(sizes) => sizes,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    let input = InputState::new();
    let renderer = Renderer::new(&assets);
    let mut clock = FrameClock::new(settings.frame_time());
    let rng = StdRng::seed_from_u64(miniquad::date::now().to_bits());
    let session = Session::new(settings, sizes, now_ms(), rng);
    let mut runtime = GameRuntime::new(session);

    while runtime.is_running() {
        clock.begin(get_time());

        let frame = input.poll();
        let pending = runtime.simulate(&frame, get_frame_time(), now_ms());

        if let Err(e) = renderer.draw(&runtime, get_fps()) {
            log::error!("{}", e);
            std::process::exit(1);
        }

        clock.wait(get_time);
        next_frame().await;

        runtime.finish_tick(pending);
    }

    log::info!("Goodbye");
}
