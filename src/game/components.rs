//! Game Components
//!
//! Plain data attached to bullet and enemy entities. Behaviour lives in
//! `World` update passes and the collision module.

use super::rect::Rect;
use crate::asset::names;

/// What a sprite looks like; maps to a registered image name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteKind {
    Bullet,
    Enemy,
}

impl SpriteKind {
    pub fn image_name(self) -> &'static str {
        match self {
            SpriteKind::Bullet => names::BULLET,
            SpriteKind::Enemy => names::ENEMY,
        }
    }
}

/// Membership in the render set: every drawable entity has one
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub kind: SpriteKind,
    pub rect: Rect,
}

/// Upward-moving projectile
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bullet {
    /// Pixels per tick
    pub speed: f32,
}

impl Bullet {
    /// Move one tick. Returns false once the bullet is fully above the screen.
    pub fn advance(&self, rect: &mut Rect) -> bool {
        rect.y -= self.speed;
        rect.bottom() >= 0.0
    }
}

/// Downward-moving enemy craft
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Enemy {
    /// Pixels per tick
    pub speed: f32,
}

impl Enemy {
    /// Move one tick. Returns false once the enemy's centre has passed the bottom edge.
    pub fn advance(&self, rect: &mut Rect, screen_height: f32) -> bool {
        rect.y += self.speed;
        rect.center_y() <= screen_height
    }
}
