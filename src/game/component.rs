//! Component Storage
//!
//! `ComponentStorage<T>` is a sparse array mapping entity slot indices to
//! component data. A screenful of bullets and enemies is a few dozen
//! entities, so a flat `Vec<Option<T>>` is all the structure needed.

use super::entity::Entity;

/// Sparse storage for a single component type, indexed by `Entity::index()`.
///
/// Generations are not checked here; `World` only hands out handles for
/// live entities and clears every slot on despawn.
pub struct ComponentStorage<T> {
    data: Vec<Option<T>>,
}

impl<T> ComponentStorage<T> {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Insert a component for an entity, replacing any existing one.
    pub fn insert(&mut self, entity: Entity, component: T) {
        let idx = entity.index() as usize;
        if idx >= self.data.len() {
            self.data.resize_with(idx + 1, || None);
        }
        self.data[idx] = Some(component);
    }

    pub fn get(&self, entity: Entity) -> Option<&T> {
        self.data.get(entity.index() as usize).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, entity: Entity) -> Option<&mut T> {
        self.data.get_mut(entity.index() as usize).and_then(Option::as_mut)
    }

    /// Iterate over occupied (slot index, component) pairs in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &T)> {
        self.data
            .iter()
            .enumerate()
            .filter_map(|(idx, opt)| opt.as_ref().map(|c| (idx as u32, c)))
    }

    /// Empty a slot. Called when its entity is despawned.
    pub fn clear_slot(&mut self, index: u32) {
        if let Some(slot) = self.data.get_mut(index as usize) {
            *slot = None;
        }
    }
}

#[cfg(test)]
impl<T> ComponentStorage<T> {
    pub fn contains(&self, entity: Entity) -> bool {
        self.get(entity).is_some()
    }

    /// Number of occupied slots
    pub fn count(&self) -> usize {
        self.iter().count()
    }
}

impl<T> Default for ComponentStorage<T> {
    fn default() -> Self {
        Self::new()
    }
}
