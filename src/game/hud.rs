//! HUD - health, score and frame rate over the playfield

use super::player::Player;

/// Distance of HUD text from the screen edges
pub const HUD_MARGIN: f32 = 10.0;
/// Top of the FPS line (below the score)
pub const FPS_LINE_Y: f32 = 40.0;

/// Which screen edge a line hangs from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    TopLeft,
    TopRight,
}

/// A line of HUD text. `x` is the anchored edge, `y` the top of the text.
#[derive(Debug, Clone, PartialEq)]
pub struct HudLine {
    pub text: String,
    pub anchor: Anchor,
    pub x: f32,
    pub y: f32,
}

/// Build the HUD for one frame
pub fn hud_lines(player: &Player, fps: i32, screen_width: f32) -> [HudLine; 3] {
    let right = screen_width - HUD_MARGIN;
    [
        HudLine {
            text: format!("Health: {}", player.health),
            anchor: Anchor::TopLeft,
            x: HUD_MARGIN,
            y: HUD_MARGIN,
        },
        HudLine {
            text: format!("Score: {}", player.score),
            anchor: Anchor::TopRight,
            x: right,
            y: HUD_MARGIN,
        },
        HudLine {
            text: format!("FPS: {}", fps.max(0)),
            anchor: Anchor::TopRight,
            x: right,
            y: FPS_LINE_Y,
        },
    ]
}
