//! Game Module
//!
//! A small ECS-inspired core for a single-screen shooter:
//! - Entity: Generational index for safe entity references
//! - Component: Plain data attached to bullets and enemies
//! - World: Container for all entities and their components
//! - Session: Player, world, timers for one run
//! - State: Playing / Paused / GameOver
//!
//! Simulation code never touches macroquad's graphics context; only
//! `renderer` draws. Everything else runs headless in tests.

pub mod rect;
pub mod entity;
pub mod component;
pub mod components;
pub mod world;
pub mod player;
pub mod spawner;
pub mod collision;
pub mod session;
pub mod state;
pub mod runtime;
pub mod hud;
pub mod theme;
pub mod renderer;

// Re-export main types
pub use session::{Session, SpriteSizes};
pub use runtime::{FrameClock, GameRuntime};
pub use renderer::Renderer;
