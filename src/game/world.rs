//! Game World
//!
//! Container for every live bullet and enemy:
//! - Entity allocation and lifetime tracking
//! - The render set (`sprites`) plus the typed subsets (`bullets`, `enemies`)
//! - Deferred despawn so update passes can flag entities mid-iteration
//!
//! Every bullet or enemy has a `Sprite` and exactly one of `Bullet`/`Enemy`.
//! Despawning clears all of an entity's slots at once, so an entity can
//! never linger in the render set after leaving its typed subset.

use macroquad::prelude::Vec2;

use super::component::ComponentStorage;
use super::components::{Bullet, Enemy, Sprite, SpriteKind};
use super::entity::{Entity, EntityAllocator};
use super::rect::Rect;

#[derive(Default)]
pub struct World {
    entities: EntityAllocator,

    /// Entities queued for despawn at the end of an update pass
    despawn_queue: Vec<Entity>,

    /// Render set: everything drawn each frame (besides the player)
    pub sprites: ComponentStorage<Sprite>,

    /// Bullet subset
    pub bullets: ComponentStorage<Bullet>,

    /// Enemy subset
    pub enemies: ComponentStorage<Enemy>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Spawning
    // =========================================================================

    /// Spawn a bullet centred on `center`
    pub fn spawn_bullet(&mut self, center: Vec2, size: Vec2, speed: f32) -> Entity {
        let entity = self.spawn_sprite(SpriteKind::Bullet, center, size);
        self.bullets.insert(entity, Bullet { speed });
        entity
    }

    /// Spawn an enemy centred on `center`
    pub fn spawn_enemy(&mut self, center: Vec2, size: Vec2, speed: f32) -> Entity {
        let entity = self.spawn_sprite(SpriteKind::Enemy, center, size);
        self.enemies.insert(entity, Enemy { speed });
        entity
    }

    fn spawn_sprite(&mut self, kind: SpriteKind, center: Vec2, size: Vec2) -> Entity {
        let entity = self.entities.allocate();
        let rect = Rect::from_center(center, size.x, size.y);
        self.sprites.insert(entity, Sprite { kind, rect });
        entity
    }

    // =========================================================================
    // Despawning
    // =========================================================================

    /// Queue an entity for despawn at the end of the current pass.
    pub fn despawn(&mut self, entity: Entity) {
        if self.is_alive(entity) && !self.despawn_queue.contains(&entity) {
            self.despawn_queue.push(entity);
        }
    }

    /// Remove an entity from every storage right now.
    /// Returns false if it was already gone.
    pub fn despawn_immediate(&mut self, entity: Entity) -> bool {
        if !self.entities.free(entity) {
            return false;
        }
        let idx = entity.index();
        self.sprites.clear_slot(idx);
        self.bullets.clear_slot(idx);
        self.enemies.clear_slot(idx);
        true
    }

    /// Process all queued despawns.
    pub fn flush_despawns(&mut self) {
        let queue = std::mem::take(&mut self.despawn_queue);
        for entity in queue {
            self.despawn_immediate(entity);
        }
    }

    // =========================================================================
    // Per-tick movement
    // =========================================================================

    /// Move every enemy down one tick, removing those past the bottom edge.
    pub fn update_enemies(&mut self, screen_height: f32) {
        for (idx, enemy) in self.enemies.iter() {
            let entity = self.entities.entity_at(idx);
            let Some(sprite) = self.sprites.get_mut(entity) else { continue };
            if !enemy.advance(&mut sprite.rect, screen_height) {
                self.despawn_queue.push(entity);
            }
        }
        self.flush_despawns();
    }

    /// Move every bullet up one tick, removing those above the top edge.
    pub fn update_bullets(&mut self) {
        for (idx, bullet) in self.bullets.iter() {
            let entity = self.entities.entity_at(idx);
            let Some(sprite) = self.sprites.get_mut(entity) else { continue };
            if !bullet.advance(&mut sprite.rect) {
                self.despawn_queue.push(entity);
            }
        }
        self.flush_despawns();
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn is_alive(&self, entity: Entity) -> bool {
        self.entities.is_alive(entity)
    }

    /// Current bounds of an entity
    pub fn rect(&self, entity: Entity) -> Option<Rect> {
        self.sprites.get(entity).map(|s| s.rect)
    }

    /// Live bullets with their bounds, in slot order
    pub fn bullet_rects(&self) -> Vec<(Entity, Rect)> {
        self.collect_rects(&self.bullets)
    }

    /// Live enemies with their bounds, in slot order
    pub fn enemy_rects(&self) -> Vec<(Entity, Rect)> {
        self.collect_rects(&self.enemies)
    }

    fn collect_rects<T>(&self, subset: &ComponentStorage<T>) -> Vec<(Entity, Rect)> {
        subset
            .iter()
            .filter_map(|(idx, _)| {
                let entity = self.entities.entity_at(idx);
                self.rect(entity).map(|rect| (entity, rect))
            })
            .collect()
    }

    /// Render set in draw order
    pub fn sprites(&self) -> impl Iterator<Item = &Sprite> {
        self.sprites.iter().map(|(_, sprite)| sprite)
    }
}

#[cfg(test)]
impl World {
    /// Number of live bullets and enemies (each has exactly one sprite)
    pub fn entity_count(&self) -> usize {
        self.sprites.count()
    }

    pub fn bullet_count(&self) -> usize {
        self.bullets.count()
    }

    pub fn enemy_count(&self) -> usize {
        self.enemies.count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use macroquad::prelude::vec2;

    const SIZE: Vec2 = Vec2::new(32.0, 32.0);

    #[test]
    fn test_spawn_joins_render_set_and_subset() {
        let mut world = World::new();
        let bullet = world.spawn_bullet(vec2(100.0, 100.0), vec2(4.0, 8.0), 10.0);
        let enemy = world.spawn_enemy(vec2(200.0, -50.0), SIZE, 3.0);

        assert_eq!(world.entity_count(), 2);
        assert!(world.sprites.contains(bullet) && world.bullets.contains(bullet));
        assert!(world.sprites.contains(enemy) && world.enemies.contains(enemy));
        assert!(!world.enemies.contains(bullet));
        assert_eq!(world.rect(enemy).unwrap().center(), vec2(200.0, -50.0));
    }

    #[test]
    fn test_despawn_clears_every_slot() {
        let mut world = World::new();
        let enemy = world.spawn_enemy(vec2(200.0, 100.0), SIZE, 3.0);

        world.despawn(enemy);
        world.despawn(enemy);
        assert!(world.is_alive(enemy));
        world.flush_despawns();

        assert!(!world.is_alive(enemy));
        assert!(!world.sprites.contains(enemy));
        assert!(!world.enemies.contains(enemy));
        assert_eq!(world.sprites().count(), 0);
        assert!(!world.despawn_immediate(enemy));
    }

    #[test]
    fn test_enemy_falls_out_of_screen() {
        // Spawned at y = -50 falling 3px per tick: centre passes 600 on tick 217
        let mut world = World::new();
        let enemy = world.spawn_enemy(vec2(400.0, -50.0), SIZE, 3.0);

        for _ in 0..216 {
            world.update_enemies(600.0);
        }
        assert!(world.is_alive(enemy));
        assert_eq!(world.rect(enemy).unwrap().center_y(), 598.0);

        world.update_enemies(600.0);
        assert!(!world.is_alive(enemy));
        assert_eq!(world.sprites().count(), 0);
    }

    #[test]
    fn test_bullets_removed_above_top() {
        let mut world = World::new();
        let bullet = world.spawn_bullet(vec2(400.0, 20.0), vec2(4.0, 8.0), 10.0);

        world.update_bullets(); // centre 10, bottom 14
        world.update_bullets(); // centre 0, bottom 4
        assert!(world.is_alive(bullet));
        world.update_bullets(); // bottom -6
        assert!(!world.is_alive(bullet));
        assert_eq!(world.bullet_count(), 0);
    }

    #[test]
    fn test_slot_reuse_keeps_subsets_disjoint() {
        let mut world = World::new();
        let bullet = world.spawn_bullet(vec2(0.0, 0.0), SIZE, 1.0);
        world.despawn_immediate(bullet);
        let enemy = world.spawn_enemy(vec2(0.0, 0.0), SIZE, 1.0);

        assert_eq!(enemy.index(), bullet.index());
        assert_eq!(world.bullet_count(), 0);
        assert_eq!(world.enemy_count(), 1);
        assert_eq!(world.enemy_rects().len(), 1);
        assert!(world.bullet_rects().is_empty());
    }
}
