//! Timed spawning of enemies and player bullets
//!
//! Both are gated by a millisecond cooldown against the caller's clock, so
//! they are deterministic under a fake `now`.

use macroquad::prelude::{vec2, Vec2};
use rand::Rng;

use super::entity::Entity;
use super::world::World;
use crate::settings::Settings;

/// Horizontal margin kept clear at both screen edges when placing enemies
pub const ENEMY_SPAWN_MARGIN: i32 = 50;
/// Enemies appear this far above the top edge (centre y)
pub const ENEMY_SPAWN_Y: f32 = -50.0;

/// Fires at most once per `delay_ms`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cooldown {
    pub delay_ms: f64,
    last: Option<f64>,
}

impl Cooldown {
    /// Ready immediately
    pub fn new(delay_ms: f64) -> Self {
        Self { delay_ms, last: None }
    }

    /// First trigger waits a full delay from `now`
    pub fn primed(delay_ms: f64, now: f64) -> Self {
        Self { delay_ms, last: Some(now) }
    }

    pub fn ready(&self, now: f64) -> bool {
        match self.last {
            None => true,
            Some(last) => now - last > self.delay_ms,
        }
    }

    /// Trigger if ready; returns whether it fired
    pub fn try_trigger(&mut self, now: f64) -> bool {
        if self.ready(now) {
            self.last = Some(now);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
impl Cooldown {
    pub fn last(&self) -> Option<f64> {
        self.last
    }
}

#[derive(Debug, Clone)]
pub struct Spawner {
    shot: Cooldown,
    spawn: Cooldown,
    screen_width: f32,
    bullet_size: Vec2,
    bullet_speed: f32,
    enemy_size: Vec2,
    enemy_speed: f32,
}

impl Spawner {
    /// The shot timer starts ready; the spawn timer starts at `now`, so the
    /// first enemy arrives one spawn delay into the session.
    pub fn new(settings: &Settings, bullet_size: Vec2, enemy_size: Vec2, now: f64) -> Self {
        Self {
            shot: Cooldown::new(settings.timers.shoot_delay_ms),
            spawn: Cooldown::primed(settings.timers.enemy_spawn_delay_ms, now),
            screen_width: settings.screen.width,
            bullet_size,
            bullet_speed: settings.bullet.speed,
            enemy_size,
            enemy_speed: settings.enemy.speed,
        }
    }

    /// Spawn one enemy above the screen if the spawn delay has elapsed.
    pub fn maybe_spawn_enemy<R: Rng + ?Sized>(
        &mut self,
        now: f64,
        world: &mut World,
        rng: &mut R,
    ) -> Option<Entity> {
        if !self.spawn.try_trigger(now) {
            return None;
        }
        let max_x = (self.screen_width as i32 - ENEMY_SPAWN_MARGIN).max(ENEMY_SPAWN_MARGIN);
        let x = rng.gen_range(ENEMY_SPAWN_MARGIN..=max_x);
        let entity = world.spawn_enemy(vec2(x as f32, ENEMY_SPAWN_Y), self.enemy_size, self.enemy_speed);
        log::debug!("Enemy spawned at x={}", x);
        Some(entity)
    }

    /// Spawn a bullet at `muzzle` if fire is held and the shot delay has elapsed.
    pub fn maybe_shoot(
        &mut self,
        now: f64,
        fire_held: bool,
        muzzle: Vec2,
        world: &mut World,
    ) -> Option<Entity> {
        if !fire_held || !self.shot.try_trigger(now) {
            return None;
        }
        Some(world.spawn_bullet(muzzle, self.bullet_size, self.bullet_speed))
    }
}

#[cfg(test)]
impl Spawner {
    pub fn last_shot(&self) -> Option<f64> {
        self.shot.last()
    }

    pub fn last_spawn(&self) -> Option<f64> {
        self.spawn.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn spawner(now: f64) -> Spawner {
        Spawner::new(&Settings::default(), vec2(8.0, 8.0), vec2(32.0, 32.0), now)
    }

    #[test]
    fn test_cooldown_is_strictly_greater() {
        let mut cd = Cooldown::primed(500.0, 0.0);
        assert!(!cd.try_trigger(500.0));
        assert!(cd.try_trigger(500.5));
        assert_eq!(cd.last(), Some(500.5));
        assert!(!cd.ready(1000.0));
        assert!(Cooldown::new(500.0).ready(0.0));
    }

    #[test]
    fn test_first_enemy_waits_one_delay() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut world = World::new();
        let mut spawner = spawner(0.0);

        assert!(spawner.maybe_spawn_enemy(0.0, &mut world, &mut rng).is_none());
        assert!(spawner.maybe_spawn_enemy(1000.0, &mut world, &mut rng).is_none());
        assert!(spawner.maybe_spawn_enemy(1001.0, &mut world, &mut rng).is_some());
        assert_eq!(world.enemy_count(), 1);
        assert_eq!(spawner.last_spawn(), Some(1001.0));
    }

    #[test]
    fn test_repeated_calls_within_cooldown_are_idempotent() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut world = World::new();
        let mut spawner = spawner(0.0);

        spawner.maybe_spawn_enemy(2000.0, &mut world, &mut rng);
        for t in [2000.0, 2100.0, 2999.0, 3000.0] {
            spawner.maybe_spawn_enemy(t, &mut world, &mut rng);
            spawner.maybe_shoot(t, false, vec2(400.0, 500.0), &mut world);
        }
        assert_eq!(world.enemy_count(), 1);
        assert_eq!(world.bullet_count(), 0);
    }

    #[test]
    fn test_enemy_x_within_margins() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut world = World::new();
        let mut spawner = spawner(0.0);

        for i in 1..=200 {
            spawner.maybe_spawn_enemy(i as f64 * 1001.0, &mut world, &mut rng);
        }
        let rects = world.enemy_rects();
        assert_eq!(rects.len(), 200);
        for (_, rect) in rects {
            let c = rect.center();
            assert!(c.x >= 50.0 && c.x <= 750.0, "x = {}", c.x);
            assert_eq!(c.x.fract(), 0.0);
            assert_eq!(c.y, ENEMY_SPAWN_Y);
        }
    }

    #[test]
    fn test_first_shot_is_immediate() {
        let mut world = World::new();
        let mut spawner = spawner(0.0);

        let bullet = spawner.maybe_shoot(0.0, true, vec2(400.0, 534.0), &mut world);
        assert!(bullet.is_some());
        assert_eq!(world.rect(bullet.unwrap()).unwrap().center(), vec2(400.0, 534.0));

        assert!(spawner.maybe_shoot(100.0, true, vec2(400.0, 534.0), &mut world).is_none());
        assert!(spawner.maybe_shoot(500.0, true, vec2(400.0, 534.0), &mut world).is_none());
        assert!(spawner.maybe_shoot(501.0, true, vec2(400.0, 534.0), &mut world).is_some());
        assert_eq!(world.bullet_count(), 2);
    }

    #[test]
    fn test_shot_not_consumed_without_fire() {
        let mut world = World::new();
        let mut spawner = spawner(0.0);
        spawner.maybe_shoot(0.0, false, Vec2::ZERO, &mut world);
        assert_eq!(spawner.last_shot(), None);
    }
}
