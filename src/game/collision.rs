//! Collision resolution between bullets, enemies and the player
//!
//! Bullets against enemies first, so an enemy shot down this tick can no
//! longer ram the player. Every overlapping bullet/enemy pair scores a point:
//! two bullets into one enemy score two.

use super::player::Player;
use super::world::World;

/// What happened in one resolution pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionReport {
    /// Overlapping bullet/enemy pairs (points awarded)
    pub bullet_hits: u32,
    /// Enemies destroyed by flying into the player
    pub enemies_rammed: u32,
    /// Health removed from the player
    pub damage: i32,
}

/// Resolve all collisions for this tick, applying score and damage to `player`.
pub fn resolve(world: &mut World, player: &mut Player, collision_damage: i32) -> CollisionReport {
    let mut report = CollisionReport::default();

    let bullets = world.bullet_rects();
    let enemies = world.enemy_rects();
    for &(bullet, bullet_rect) in &bullets {
        for &(enemy, enemy_rect) in &enemies {
            if bullet_rect.overlaps(&enemy_rect) {
                report.bullet_hits += 1;
                world.despawn(bullet);
                world.despawn(enemy);
            }
        }
    }
    world.flush_despawns();
    player.add_score(report.bullet_hits);

    let player_rect = player.rect();
    for (enemy, enemy_rect) in world.enemy_rects() {
        if player_rect.overlaps(&enemy_rect) {
            report.enemies_rammed += 1;
            world.despawn(enemy);
        }
    }
    world.flush_despawns();

    if report.enemies_rammed > 0 {
        report.damage = collision_damage.saturating_mul(report.enemies_rammed as i32);
        player.take_damage(report.damage);
    }

    if report != CollisionReport::default() {
        log::debug!(
            "Collisions: {} hit(s), {} rammed, health {}",
            report.bullet_hits,
            report.enemies_rammed,
            player.health
        );
    }
    report
}
