//! Entity handles with generational indices
//!
//! Bullets and enemies come and go every second, so storage slots are
//! recycled constantly. Each slot carries a generation counter that bumps on
//! free, so a stale handle to a destroyed enemy can never alias the next
//! enemy that reuses its slot.

/// A handle to a live bullet or enemy.
///
/// Two handles with the same index but different generations refer to
/// different entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Entity {
    index: u32,
    generation: u32,
}

impl Entity {
    /// Should only be called by EntityAllocator.
    pub(crate) fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// Slot index (for component storage access)
    pub fn index(&self) -> u32 {
        self.index
    }
}

/// Allocates and tracks entity lifetimes.
///
/// Freed slots are reused LIFO with incremented generations.
#[derive(Debug, Default)]
pub struct EntityAllocator {
    /// Generation counter for each slot
    generations: Vec<u32>,
    /// Free slots available for reuse
    free_indices: Vec<u32>,
}

impl EntityAllocator {
    /// Allocate a new entity.
    pub fn allocate(&mut self) -> Entity {
        if let Some(index) = self.free_indices.pop() {
            // Generation was already bumped on free
            Entity::new(index, self.generations[index as usize])
        } else {
            let index = self.generations.len() as u32;
            self.generations.push(0);
            Entity::new(index, 0)
        }
    }

    /// Free an entity, making its slot available for reuse.
    /// Returns true if the entity was alive and is now freed.
    pub fn free(&mut self, entity: Entity) -> bool {
        if !self.is_alive(entity) {
            return false;
        }

        self.generations[entity.index as usize] += 1;
        self.free_indices.push(entity.index);
        true
    }

    pub fn is_alive(&self, entity: Entity) -> bool {
        let idx = entity.index as usize;
        idx < self.generations.len() && self.generations[idx] == entity.generation
    }

    /// Handle for the current occupant of a slot.
    /// Only meaningful for slots known to be occupied (e.g. from a component iterator).
    pub fn entity_at(&self, index: u32) -> Entity {
        let generation = self.generations.get(index as usize).copied().unwrap_or(0);
        Entity::new(index, generation)
    }
}
