use std::collections::BTreeMap;

use super::{Entity, EntityId};

/// Owning store for every entity in the level, keyed by id.
///
/// Ids are allocated sequentially and never reused. Id 0 is reserved for the player.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntitiesState {
    entities: BTreeMap<EntityId, Entity>,
    next_id: u32,
}

impl Default for EntitiesState {
    fn default() -> Self {
        Self::empty()
    }
}

impl EntitiesState {
    pub fn empty() -> Self {
        Self {
            entities: BTreeMap::new(),
            next_id: EntityId::PLAYER.0 + 1,
        }
    }

    /// Inserts an entity under a freshly allocated id.
    pub fn spawn(&mut self, mut entity: Entity) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id = self.next_id.saturating_add(1);
        entity.id = id;
        self.entities.insert(id, entity);
        id
    }

    /// Inserts an entity under the reserved player id, replacing any previous player.
    pub fn spawn_player(&mut self, mut entity: Entity) -> EntityId {
        entity.id = EntityId::PLAYER;
        self.entities.insert(EntityId::PLAYER, entity);
        EntityId::PLAYER
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(&id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(&id)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.entities.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Entities in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.values()
    }

    /// Ids of every actor, player first.
    pub fn actor_ids(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.entities
            .values()
            .filter(|entity| entity.is_actor())
            .map(|entity| entity.id)
    }
}
