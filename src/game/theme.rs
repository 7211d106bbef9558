//! Theme - colors and text sizes for the playfield, HUD and overlays

use macroquad::prelude::Color;

// =============================================================================
// Playfield
// =============================================================================

/// Playfield background
pub const BG_COLOR: Color = Color::new(1.0, 1.0, 1.0, 1.0);

/// HUD and hint text
pub const TEXT_COLOR: Color = Color::new(0.0, 0.0, 0.0, 1.0);

// =============================================================================
// Overlays
// =============================================================================

/// Full-screen dimming behind pause and game-over text (alpha 180/255)
pub const OVERLAY_COLOR: Color = Color::new(0.0, 0.0, 0.0, 180.0 / 255.0);

/// Overlay body text
pub const OVERLAY_TEXT: Color = Color::new(1.0, 1.0, 1.0, 1.0);

/// "PAUSED"
pub const PAUSED_TITLE: Color = Color::new(1.0, 1.0, 1.0, 1.0);

/// "Shot Down"
pub const GAME_OVER_TITLE: Color = Color::new(1.0, 0.0, 0.0, 1.0);

// =============================================================================
// Debug outlines
// =============================================================================

pub const DEBUG_PLAYER: Color = Color::new(0.0, 0.0, 1.0, 1.0);
pub const DEBUG_ENEMY: Color = Color::new(1.0, 0.0, 0.0, 1.0);
pub const DEBUG_BULLET: Color = Color::new(0.0, 1.0, 0.0, 1.0);

/// Outline thickness in pixels
pub const DEBUG_LINE: f32 = 1.0;

// =============================================================================
// Font Sizes
// =============================================================================

/// HUD and hint lines
pub const FONT_SIZE_CONTENT: u16 = 36;

/// Overlay titles
pub const FONT_SIZE_TITLE: u16 = 72;
