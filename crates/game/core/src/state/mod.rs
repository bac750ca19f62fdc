//! Authoritative game state representation.
//!
//! [`GameState`] owns the grid, every entity and the narration stream. Its
//! placement methods keep the tile slots and each entity's [`Location`] in
//! step; they return structured errors when asked to break that invariant and
//! never narrate refusals themselves.
pub mod error;
pub mod narration;
pub mod types;

pub use error::StateError;
pub use narration::{Narration, NarrationLine};
pub use types::*;

/// Canonical snapshot of a level in play.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GameState {
    pub turn: Turn,
    pub grid: Grid,
    pub entities: EntitiesState,
    pub narration: Narration,
}

impl GameState {
    pub fn new(grid: Grid) -> Self {
        Self {
            turn: Turn::FIRST,
            grid,
            entities: EntitiesState::empty(),
            narration: Narration::new(),
        }
    }

    /// Advances the turn counter.
    pub fn advance_turn(&mut self) -> Turn {
        self.turn = self.turn.next();
        self.turn
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    pub fn entity(&self, id: EntityId) -> Result<&Entity, StateError> {
        self.entities.get(id).ok_or(StateError::UnknownEntity(id))
    }

    pub fn entity_mut(&mut self, id: EntityId) -> Result<&mut Entity, StateError> {
        self.entities.get_mut(id).ok_or(StateError::UnknownEntity(id))
    }

    pub fn actor(&self, id: EntityId) -> Result<&ActorState, StateError> {
        self.entity(id)?.as_actor().ok_or(StateError::NotAnActor(id))
    }

    pub fn actor_mut(&mut self, id: EntityId) -> Result<&mut ActorState, StateError> {
        self.entity_mut(id)?
            .as_actor_mut()
            .ok_or(StateError::NotAnActor(id))
    }

    pub fn player(&self) -> Option<&Entity> {
        self.entities.get(EntityId::PLAYER)
    }

    /// Tile an actor is standing on.
    pub fn standing_position(&self, actor: EntityId) -> Result<Position, StateError> {
        match self.entity(actor)?.location() {
            Location::Standing(position) => Ok(position),
            found => Err(StateError::Misplaced {
                entity: actor,
                expected: "standing on a tile",
                found,
            }),
        }
    }

    pub fn fixture_at(&self, position: Position) -> Option<EntityId> {
        self.grid.tile(position).and_then(Tile::fixture)
    }

    pub fn item_at(&self, position: Position) -> Option<EntityId> {
        self.grid.tile(position).and_then(Tile::item)
    }

    pub fn occupant_at(&self, position: Position) -> Option<EntityId> {
        self.grid.tile(position).and_then(Tile::occupant)
    }

    // ========================================================================
    // Blocking
    // ========================================================================

    /// Blocking at `position` resolved by precedence: fixture, then occupant,
    /// then the tile's intrinsic flags. Exactly one source is consulted.
    ///
    /// Positions off the grid block everything.
    pub fn effective_blocks(&self, position: Position) -> BlockFlags {
        let Some(tile) = self.grid.tile(position) else {
            return BlockFlags::all();
        };
        if let Some(fixture) = tile.fixture().and_then(|id| self.entities.get(id)) {
            return fixture.blocks();
        }
        if let Some(occupant) = tile.occupant().and_then(|id| self.entities.get(id)) {
            return occupant.blocks();
        }
        tile.blocks
    }

    pub fn effective_blocks_move(&self, position: Position) -> bool {
        self.effective_blocks(position).blocks_move()
    }

    pub fn effective_blocks_sight(&self, position: Position) -> bool {
        self.effective_blocks(position).blocks_sight()
    }

    // ========================================================================
    // Spawning and placement
    // ========================================================================

    pub fn spawn(&mut self, entity: Entity) -> EntityId {
        self.entities.spawn(entity)
    }

    pub fn spawn_player(&mut self, entity: Entity) -> EntityId {
        self.entities.spawn_player(entity)
    }

    fn expect_unplaced(&self, id: EntityId) -> Result<(), StateError> {
        match self.entity(id)?.location() {
            Location::Unplaced => Ok(()),
            found => Err(StateError::Misplaced {
                entity: id,
                expected: "unplaced",
                found,
            }),
        }
    }

    fn set_location(&mut self, id: EntityId, location: Location) -> Result<(), StateError> {
        self.entity_mut(id)?.location = location;
        Ok(())
    }

    /// Puts an unplaced item in the tile's item slot.
    pub fn place_item(&mut self, position: Position, item: EntityId) -> Result<(), StateError> {
        if !self.entity(item)?.is_item() {
            return Err(StateError::NotAnItem(item));
        }
        self.expect_unplaced(item)?;
        self.grid.fill_slot(position, SlotKind::Item, item)?;
        self.set_location(item, Location::Ground(position))
    }

    /// Empties the tile's item slot; the item becomes unplaced.
    pub fn remove_item(&mut self, position: Position) -> Result<EntityId, StateError> {
        let item = self.grid.clear_slot(position, SlotKind::Item)?;
        self.set_location(item, Location::Unplaced)?;
        Ok(item)
    }

    /// Stands an unplaced actor on the tile.
    pub fn place_occupant(&mut self, position: Position, actor: EntityId) -> Result<(), StateError> {
        if !self.entity(actor)?.is_actor() {
            return Err(StateError::NotAnActor(actor));
        }
        self.expect_unplaced(actor)?;
        self.grid.fill_slot(position, SlotKind::Occupant, actor)?;
        self.set_location(actor, Location::Standing(position))
    }

    pub fn remove_occupant(&mut self, position: Position) -> Result<EntityId, StateError> {
        let actor = self.grid.clear_slot(position, SlotKind::Occupant)?;
        self.set_location(actor, Location::Unplaced)?;
        Ok(actor)
    }

    /// Attaches an unplaced fixture to the tile.
    pub fn attach_fixture(&mut self, position: Position, fixture: EntityId) -> Result<(), StateError> {
        if self.entity(fixture)?.as_openable().is_none() {
            return Err(StateError::NotAFixture(fixture));
        }
        self.expect_unplaced(fixture)?;
        self.grid.fill_slot(position, SlotKind::Fixture, fixture)?;
        self.set_location(fixture, Location::Attached(position))
    }

    /// Relocates a standing actor, overwriting any occupant at `destination`.
    ///
    /// The caller must already have checked that the move is legal. A displaced
    /// occupant is returned and left unplaced. When the player steps onto an
    /// item, the item is announced.
    pub fn move_occupant(
        &mut self,
        actor: EntityId,
        destination: Position,
    ) -> Result<Option<EntityId>, StateError> {
        let origin = self.standing_position(actor)?;
        self.grid.try_tile(destination)?;
        if origin == destination {
            return Ok(None);
        }

        self.grid.replace_slot(origin, SlotKind::Occupant, None)?;
        let displaced = self
            .grid
            .replace_slot(destination, SlotKind::Occupant, Some(actor))?;
        self.set_location(actor, Location::Standing(destination))?;
        if let Some(previous) = displaced {
            self.set_location(previous, Location::Unplaced)?;
        }

        if actor.is_player()
            && let Some(item) = self.item_at(destination)
        {
            let text = format!("You see {} on the ground.", self.entity(item)?.indefinite_name());
            self.narrate(text);
        }
        Ok(displaced)
    }

    // ========================================================================
    // Containers
    // ========================================================================

    /// Puts an unplaced item into an actor's inventory.
    pub fn stow(&mut self, holder: EntityId, item: EntityId) -> Result<(), StateError> {
        let weight = {
            let entity = self.entity(item)?;
            if !entity.is_item() {
                return Err(StateError::NotAnItem(item));
            }
            entity.weight
        };
        self.expect_unplaced(item)?;
        self.actor_mut(holder)?.inventory.add(item, weight)?;
        self.set_location(item, Location::Contained { holder })
    }

    /// Takes an item out of an actor's inventory; it becomes unplaced.
    pub fn unstow(&mut self, holder: EntityId, item: EntityId) -> Result<(), StateError> {
        self.actor_mut(holder)?.inventory.remove(item)?;
        let entity = self.entity_mut(item)?;
        entity.location = Location::Unplaced;
        if let Some(droppable) = entity.as_droppable_mut() {
            droppable.on_release();
        }
        Ok(())
    }

    /// Moves the item lying at `position` into the actor's inventory.
    ///
    /// Capacity is checked before anything changes, so a refusal leaves the
    /// item on the ground.
    pub fn pick_up(&mut self, actor: EntityId, position: Position) -> Result<EntityId, StateError> {
        let item = self
            .item_at(position)
            .ok_or(GridError::EmptySlot {
                position,
                slot: SlotKind::Item,
            })?;
        let weight = self.entity(item)?.weight;
        let inventory = &self.actor(actor)?.inventory;
        if !inventory.can_hold(weight) {
            return Err(ContainerError::OverCapacity {
                entity: item,
                weight,
                spare: inventory.spare_capacity(),
            }
            .into());
        }
        self.remove_item(position)?;
        self.stow(actor, item)?;
        Ok(item)
    }

    /// Moves an item from the actor's inventory onto the tile it stands on.
    pub fn drop_item(&mut self, actor: EntityId, item: EntityId) -> Result<Position, StateError> {
        let position = self.standing_position(actor)?;
        if let Some(current) = self.item_at(position) {
            return Err(GridError::OccupiedSlot {
                position,
                slot: SlotKind::Item,
                current,
            }
            .into());
        }
        if !self.actor(actor)?.inventory.contains(item) {
            return Err(ContainerError::NotFound { entity: item }.into());
        }
        self.unstow(actor, item)?;
        self.place_item(position, item)?;
        Ok(position)
    }

    // ========================================================================
    // Narration
    // ========================================================================

    /// Appends an unconditional narration line for the current turn.
    pub fn narrate(&mut self, text: impl Into<String>) {
        self.narration.push(self.turn, text);
    }

    /// Narrates a line meant only for `actor`; dropped unless the actor reports to the player.
    pub fn tell(&mut self, actor: EntityId, text: impl Into<String>) {
        if self
            .entities
            .get(actor)
            .is_some_and(|entity| entity.report == ReportAudience::Player)
        {
            self.narrate(text);
        }
    }

    /// Narrates something `actor` did, honoring its report audience.
    ///
    /// `third_person` receives the actor's capitalized definite name.
    pub fn report<F>(&mut self, actor: EntityId, first_person: impl Into<String>, third_person: F)
    where
        F: FnOnce(&str) -> String,
    {
        let Some(entity) = self.entities.get(actor) else {
            return;
        };
        let audience = entity.report;
        let subject = entity.subject_name();
        self.narration
            .report(self.turn, audience, first_person, || Some(third_person(&subject)));
    }
}
