//! Game Renderer
//!
//! Draws one frame with macroquad: white playfield, sprites, HUD, then the
//! current state's overlay. Textures are uploaded once from the decoded
//! images in the asset manager.

use std::collections::HashMap;

use macroquad::prelude::*;

use super::hud::{hud_lines, Anchor};
use super::rect::Rect as GameRect;
use super::runtime::GameRuntime;
use super::session::Session;
use super::state::Overlay;
use super::theme;
use crate::asset::{names, AssetError, AssetManager};

pub struct Renderer {
    textures: HashMap<String, Texture2D>,
}

impl Renderer {
    /// Upload every loaded sprite to the GPU. Needs the macroquad context.
    pub fn new(assets: &AssetManager) -> Self {
        let mut textures = HashMap::new();
        for (name, image) in assets.iter() {
            // Sides are capped to u16 at decode time
            let width = u16::try_from(image.width()).unwrap_or(u16::MAX);
            let height = u16::try_from(image.height()).unwrap_or(u16::MAX);
            let texture = Texture2D::from_rgba8(width, height, image.rgba());
            texture.set_filter(FilterMode::Nearest);
            textures.insert(name.to_string(), texture);
        }
        log::debug!("Uploaded {} sprite textures", textures.len());
        Self { textures }
    }

    fn texture(&self, name: &str) -> Result<&Texture2D, AssetError> {
        self.textures
            .get(name)
            .ok_or_else(|| AssetError::NotLoaded(name.to_string()))
    }

    /// Draw the full frame for the runtime's current state
    pub fn draw(&self, runtime: &GameRuntime, fps: i32) -> Result<(), AssetError> {
        let session = &runtime.session;
        self.draw_playfield(session, fps)?;
        if let Some(overlay) = runtime.state.overlay() {
            draw_overlay(&overlay, session.bounds());
        }
        Ok(())
    }

    /// The Playing frame, also shown under the pause and game-over overlays
    fn draw_playfield(&self, session: &Session, fps: i32) -> Result<(), AssetError> {
        clear_background(theme::BG_COLOR);

        // Player drawn from its unrotated texture, rotated about its centre
        let player = &session.player;
        let size = player.base_size();
        let top_left = player.position - size * 0.5;
        draw_texture_ex(
            self.texture(names::PLAYER)?,
            top_left.x.round(),
            top_left.y.round(),
            WHITE,
            DrawTextureParams {
                dest_size: Some(size),
                rotation: -player.rotation.to_radians(),
                ..Default::default()
            },
        );

        for sprite in session.world.sprites() {
            let r = sprite.rect;
            draw_texture_ex(
                self.texture(sprite.kind.image_name())?,
                r.x.round(),
                r.y.round(),
                WHITE,
                DrawTextureParams {
                    dest_size: Some(vec2(r.w, r.h)),
                    ..Default::default()
                },
            );
        }

        for line in hud_lines(player, fps, session.settings.screen.width) {
            let dims = measure_text(&line.text, None, theme::FONT_SIZE_CONTENT, 1.0);
            let x = match line.anchor {
                Anchor::TopLeft => line.x,
                Anchor::TopRight => line.x - dims.width,
            };
            draw_text(
                &line.text,
                x,
                line.y + dims.offset_y,
                theme::FONT_SIZE_CONTENT as f32,
                theme::TEXT_COLOR,
            );
        }

        if session.settings.debug {
            draw_outline(&player.rect(), theme::DEBUG_PLAYER);
            for (_, r) in session.world.enemy_rects() {
                draw_outline(&r, theme::DEBUG_ENEMY);
            }
            for (_, r) in session.world.bullet_rects() {
                draw_outline(&r, theme::DEBUG_BULLET);
            }
        }
        Ok(())
    }
}

fn draw_outline(r: &GameRect, color: Color) {
    draw_rectangle_lines(r.x, r.y, r.w, r.h, theme::DEBUG_LINE, color);
}

/// Dim the screen and draw the overlay text centred horizontally
fn draw_overlay(overlay: &Overlay, screen: GameRect) {
    draw_rectangle(screen.x, screen.y, screen.w, screen.h, theme::OVERLAY_COLOR);

    let center = screen.center();
    for line in &overlay.lines {
        let dims = measure_text(&line.text, None, line.font_size, 1.0);
        // Centre the text box on (centre x, centre y + offset)
        let x = center.x - dims.width * 0.5;
        let y = center.y + line.offset_y - dims.height * 0.5 + dims.offset_y;
        draw_text(&line.text, x, y, line.font_size as f32, line.color);
    }
}
