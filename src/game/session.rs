//! Session - everything that lives for one run of the game
//!
//! The player, the bullets and enemies, the cooldown timers and the RNG.
//! States borrow it mutably; restarting rebuilds all of it except the
//! settings, sprite sizes and RNG.

use macroquad::prelude::{vec2, Vec2};
use rand::rngs::StdRng;

use super::collision::{self, CollisionReport};
use super::player::Player;
use super::rect::Rect;
use super::spawner::Spawner;
use super::world::World;
use crate::asset::{names, AssetError, AssetManager};
use crate::input::{Action, FrameInput};
use crate::settings::Settings;

/// Player spawn point sits this far above the bottom edge
pub const PLAYER_SPAWN_OFFSET: f32 = 50.0;

/// Scaled sprite sizes, read once from the loaded images
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteSizes {
    pub player: Vec2,
    pub bullet: Vec2,
    pub enemy: Vec2,
}

impl SpriteSizes {
    pub fn from_assets(assets: &AssetManager) -> Result<Self, AssetError> {
        let size = |name: &str| -> Result<Vec2, AssetError> {
            let (w, h) = assets.get(name)?.size();
            Ok(vec2(w, h))
        };
        Ok(Self {
            player: size(names::PLAYER)?,
            bullet: size(names::BULLET)?,
            enemy: size(names::ENEMY)?,
        })
    }
}

pub struct Session {
    pub settings: Settings,
    pub sizes: SpriteSizes,
    pub player: Player,
    pub world: World,
    pub spawner: Spawner,
    /// Input snapshot taken by the Playing state for the next update
    pub input: FrameInput,
    pub rng: StdRng,
}

impl Session {
    pub fn new(settings: Settings, sizes: SpriteSizes, now: f64, rng: StdRng) -> Self {
        let player = Self::spawn_player(&settings, &sizes);
        let spawner = Spawner::new(&settings, sizes.bullet, sizes.enemy, now);
        Self {
            settings,
            sizes,
            player,
            world: World::new(),
            spawner,
            input: FrameInput::default(),
            rng,
        }
    }

    fn spawn_player(settings: &Settings, sizes: &SpriteSizes) -> Player {
        let position = vec2(
            settings.screen.width / 2.0,
            settings.screen.height - PLAYER_SPAWN_OFFSET,
        );
        Player::new(position, sizes.player, settings.player.max_health)
    }

    /// Fresh player, empty world, restarted timers
    pub fn reset(&mut self, now: f64) {
        self.player = Self::spawn_player(&self.settings, &self.sizes);
        self.world = World::new();
        self.spawner = Spawner::new(&self.settings, self.sizes.bullet, self.sizes.enemy, now);
        self.input = FrameInput::default();
        log::info!("Session reset");
    }

    /// Playfield bounds
    pub fn bounds(&self) -> Rect {
        Rect::screen(self.settings.screen.width, self.settings.screen.height)
    }

    /// One simulation tick: move, shoot, spawn, collide, then advance bullets and enemies.
    pub fn step(&mut self, dt: f32, now: f64) -> CollisionReport {
        let bounds = self.bounds();
        self.player
            .update(self.input.directions(), dt, &self.settings.player, &bounds);

        let fire = self.input.held(Action::Fire);
        self.spawner
            .maybe_shoot(now, fire, self.player.muzzle(), &mut self.world);
        self.spawner
            .maybe_spawn_enemy(now, &mut self.world, &mut self.rng);

        let report = collision::resolve(
            &mut self.world,
            &mut self.player,
            self.settings.player.collision_damage,
        );

        self.world.update_enemies(self.settings.screen.height);
        self.world.update_bullets();
        report
    }
}
