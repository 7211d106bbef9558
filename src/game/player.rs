//! Player craft and its flight model
//!
//! Velocity eases toward a target set by the arrow keys instead of jumping
//! to it, and the sprite banks into sideways turns. Axes are independent:
//! holding two arrows flies both axes at full speed.

use macroquad::prelude::{vec2, Vec2};

use super::rect::Rect;
use crate::input::Directions;
use crate::settings::PlayerSettings;

/// Linear interpolation
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Axis-aligned bounds of a `size` box rotated by `degrees`
pub fn rotated_size(size: Vec2, degrees: f32) -> Vec2 {
    let (sin, cos) = degrees.to_radians().sin_cos();
    let (sin, cos) = (sin.abs(), cos.abs());
    vec2(size.x * cos + size.y * sin, size.x * sin + size.y * cos)
}

#[derive(Debug, Clone)]
pub struct Player {
    /// Centre of the craft, screen pixels
    pub position: Vec2,
    /// Pixels per second
    pub velocity: Vec2,
    /// Bank angle in degrees, counter-clockwise positive
    pub rotation: f32,
    pub health: i32,
    pub max_health: i32,
    pub score: u32,
    /// Unrotated sprite size
    base_size: Vec2,
    /// Bounds of the rotated sprite
    rect: Rect,
}

impl Player {
    pub fn new(position: Vec2, base_size: Vec2, max_health: i32) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            rotation: 0.0,
            health: max_health,
            max_health,
            score: 0,
            base_size,
            rect: Rect::from_center(position, base_size.x, base_size.y),
        }
    }

    /// Advance the flight model by `dt` seconds and keep the craft on screen.
    pub fn update(&mut self, dirs: Directions, dt: f32, tuning: &PlayerSettings, bounds: &Rect) {
        let input = dirs.axis();
        let dt = dt.max(0.0);

        let forward_or_back = if input.y < 0.0 {
            tuning.max_forward_speed
        } else {
            tuning.max_backward_speed
        };
        let target = vec2(input.x * tuning.max_strafe_speed, input.y * forward_or_back);

        let rate_x = if input.x != 0.0 { tuning.strafe_acceleration } else { tuning.friction };
        let rate_y = if input.y != 0.0 { tuning.forward_acceleration } else { tuning.friction };

        // Factors capped at 1 so a long frame lands on the target instead of past it
        self.velocity.x = lerp(self.velocity.x, target.x, (rate_x * dt).min(1.0));
        self.velocity.y = lerp(self.velocity.y, target.y, (rate_y * dt).min(1.0));

        // Bank on horizontal input only
        let target_rotation = -input.x * tuning.max_bank_angle;
        self.rotation = lerp(self.rotation, target_rotation, (tuning.bank_speed * dt).min(1.0));

        let size = rotated_size(self.base_size, self.rotation);
        let moved = self.position + self.velocity * dt;
        self.rect = Rect::from_center(moved, size.x, size.y).clamped_within(bounds);

        // Resync to the clamped rect; velocity is left alone
        self.position = self.rect.center();
    }

    /// Collision bounds (rotated sprite)
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Unrotated sprite size, for drawing
    pub fn base_size(&self) -> Vec2 {
        self.base_size
    }

    /// Where bullets leave the craft: top-centre of its bounds
    pub fn muzzle(&self) -> Vec2 {
        vec2(self.rect.center_x(), self.rect.y)
    }

    pub fn take_damage(&mut self, amount: i32) {
        self.health = (self.health - amount.max(0)).max(0);
    }

    pub fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    pub fn is_dead(&self) -> bool {
        self.health == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: Rect = Rect::new(0.0, 0.0, 800.0, 600.0);

    fn player() -> Player {
        Player::new(vec2(400.0, 550.0), vec2(32.0, 32.0), 100)
    }

    fn dirs(left: bool, right: bool, up: bool, down: bool) -> Directions {
        Directions { left, right, up, down }
    }

    fn between(value: f32, a: f32, b: f32) -> bool {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        value >= lo - 1e-4 && value <= hi + 1e-4
    }

    #[test]
    fn test_velocity_stays_between_prior_and_target() {
        let tuning = PlayerSettings::default();
        for &dt in &[0.0, 0.001, 1.0 / 60.0, 0.1, 0.5, 2.0, 30.0] {
            let mut p = player();
            p.velocity = vec2(-100.0, 50.0);
            let prior = p.velocity;
            p.update(dirs(false, true, true, false), dt, &tuning, &SCREEN);

            assert!(between(p.velocity.x, prior.x, tuning.max_strafe_speed), "dt={dt} vx={}", p.velocity.x);
            assert!(between(p.velocity.y, prior.y, -tuning.max_forward_speed), "dt={dt} vy={}", p.velocity.y);
        }
    }

    #[test]
    fn test_large_dt_lands_on_target() {
        let tuning = PlayerSettings::default();
        let mut p = player();
        p.update(dirs(true, false, false, true), 5.0, &tuning, &SCREEN);
        assert_eq!(p.velocity, vec2(-tuning.max_strafe_speed, tuning.max_backward_speed));
        assert_eq!(p.rotation, tuning.max_bank_angle);
    }

    #[test]
    fn test_forward_and_backward_speeds_differ() {
        let tuning = PlayerSettings::default();
        let mut up = player();
        up.update(dirs(false, false, true, false), 1.0, &tuning, &SCREEN);
        let mut down = player();
        down.position = vec2(400.0, 100.0);
        down.update(dirs(false, false, false, true), 1.0, &tuning, &SCREEN);

        assert_eq!(up.velocity.y, -tuning.max_forward_speed);
        assert_eq!(down.velocity.y, tuning.max_backward_speed);
    }

    #[test]
    fn test_diagonal_is_not_normalized() {
        let tuning = PlayerSettings::default();
        let mut p = player();
        p.position = vec2(400.0, 300.0);
        p.update(dirs(false, true, true, false), 1.0, &tuning, &SCREEN);
        assert_eq!(p.velocity.x, tuning.max_strafe_speed);
        assert_eq!(p.velocity.y, -tuning.max_forward_speed);
    }

    #[test]
    fn test_friction_slows_without_input() {
        let tuning = PlayerSettings::default();
        let mut p = player();
        p.position = vec2(400.0, 300.0);
        p.velocity = vec2(200.0, -200.0);
        p.update(Directions::default(), 0.1, &tuning, &SCREEN);
        assert!((p.velocity.x - 100.0).abs() < 1e-3);
        assert!((p.velocity.y + 100.0).abs() < 1e-3);
    }

    #[test]
    fn test_bank_follows_horizontal_input() {
        let tuning = PlayerSettings::default();
        let mut p = player();
        p.update(dirs(false, true, false, false), 1.0 / 60.0, &tuning, &SCREEN);
        assert!(p.rotation < 0.0 && p.rotation > -tuning.max_bank_angle);

        for _ in 0..300 {
            p.update(dirs(false, true, false, false), 1.0 / 60.0, &tuning, &SCREEN);
        }
        assert!((p.rotation + tuning.max_bank_angle).abs() < 1e-3);

        // Banked bounds are wider than the sprite
        assert!(p.rect().w > p.base_size().x);
    }

    #[test]
    fn test_clamped_to_screen_without_zeroing_velocity() {
        let tuning = PlayerSettings::default();
        let mut p = player();
        for _ in 0..200 {
            p.update(dirs(true, false, false, true), 1.0 / 60.0, &tuning, &SCREEN);
            assert!(p.position.x >= 0.0 && p.position.x <= SCREEN.w);
            assert!(p.position.y >= 0.0 && p.position.y <= SCREEN.h);
            assert!(p.rect().x >= 0.0 && p.rect().bottom() <= SCREEN.h + 1e-3);
        }
        // Pinned against the corner but still carrying speed
        assert!(p.velocity.x < -200.0);
        assert!(p.velocity.y > 150.0);
    }

    #[test]
    fn test_health_and_score() {
        let mut p = player();
        p.take_damage(30);
        assert_eq!(p.health, 70);
        p.take_damage(500);
        assert_eq!(p.health, 0);
        assert!(p.is_dead());
        p.take_damage(-50);
        assert_eq!(p.health, 0);

        p.add_score(3);
        p.add_score(0);
        assert_eq!(p.score, 3);
        p.score = u32::MAX - 1;
        p.add_score(10);
        assert_eq!(p.score, u32::MAX);
    }

    #[test]
    fn test_damage_with_negative_max_health() {
        let mut p = Player::new(vec2(400.0, 550.0), vec2(32.0, 32.0), -5);
        p.take_damage(10);
        assert_eq!(p.health, 0);
        assert!(p.is_dead());
    }

    #[test]
    fn test_muzzle_is_top_center() {
        let p = player();
        assert_eq!(p.muzzle(), vec2(400.0, 534.0));
    }

    #[test]
    fn test_rotated_size() {
        let s = rotated_size(vec2(10.0, 20.0), 90.0);
        assert!((s.x - 20.0).abs() < 1e-4 && (s.y - 10.0).abs() < 1e-4);
        assert_eq!(rotated_size(vec2(10.0, 20.0), 0.0), vec2(10.0, 20.0));
    }
}
