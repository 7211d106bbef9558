//! Sprite Asset System
//!
//! Name-keyed cache of decoded, pre-scaled sprite images.
//!
//! ```text
//! assets/
//! ├── settings.ron      # Optional tuning overrides
//! └── sprites/
//!     ├── player.png
//!     ├── tile_0001.png # Bullet
//!     └── ship_0022.png # Enemy
//! ```
//!
//! A sprite that fails to load is replaced by a magenta placeholder so the
//! game stays playable with missing art. Looking up a sprite that was never
//! registered is a wiring bug and surfaces as `AssetError::NotLoaded`.

mod sprite;
mod library;

pub use library::{AssetError, AssetManager, DEFAULT_FALLBACK_SIZE};

/// Registered sprite names
pub mod names {
    pub const PLAYER: &str = "player";
    pub const BULLET: &str = "bullet";
    pub const ENEMY: &str = "enemy";
}
