//! Input handling
//!
//! Keyboard state is polled once per tick into a plain `FrameInput`
//! snapshot, so game states never call into macroquad directly and can be
//! driven by hand-built snapshots in tests.

mod actions;
mod state;

pub use actions::*;
pub use state::*;
