//! Inventory menu and the verbs applied to items chosen from it.
//!
//! The menu is never cached: [`menu_entries`] is rebuilt from the live
//! container every time it is shown or a key is pressed, so keys always match
//! the current contents.

use crate::action::{
    ActionError, ActionTransition, Continuation, InteractionMode, MenuVerb, Refusal, Resolution,
    perform,
};
use crate::config::GameConfig;
use crate::error::ErrorContext;
use crate::state::{
    Entity, EntityCategory, EntityId, GameState, ItemRejection, StateError,
};

// ============================================================================
// Menu
// ============================================================================

/// One selectable line of the inventory menu.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuEntry {
    pub key: char,
    pub item: EntityId,
    pub name: String,
    pub category: EntityCategory,
    /// Whether the menu's verb applies to this item.
    pub enabled: bool,
}

/// Whether `verb` can be applied to `entity` at all.
pub fn supports(entity: &Entity, verb: MenuVerb) -> bool {
    match verb {
        MenuVerb::Use => entity.as_usable().is_some(),
        MenuVerb::Drop | MenuVerb::Throw => entity.as_droppable().is_some(),
        MenuVerb::Consume => entity.as_consumable().is_some(),
        MenuVerb::Equip => entity.as_wieldable().is_some(),
        MenuVerb::Wear => entity.as_wearable().is_some(),
    }
}

/// Lists the actor's inventory grouped by category, with selector keys.
pub fn menu_entries(
    state: &GameState,
    actor: EntityId,
    filter: Option<MenuVerb>,
) -> Result<Vec<MenuEntry>, StateError> {
    let mut items = state
        .actor(actor)?
        .inventory
        .iter()
        .map(|id| state.entity(id))
        .collect::<Result<Vec<_>, _>>()?;
    items.sort_by_key(|entity| entity.category);

    Ok(items
        .into_iter()
        .zip(GameConfig::SELECTOR_KEYS.chars())
        .take(GameConfig::MAX_MENU_ENTRIES)
        .map(|(entity, key)| MenuEntry {
            key,
            item: entity.id,
            name: entity.indefinite_name(),
            category: entity.category,
            enabled: filter.is_none_or(|verb| supports(entity, verb)),
        })
        .collect())
}

/// Short inventory description of an item.
pub fn describe_item(entity: &Entity) -> String {
    let mut text = format!(
        "{}. It weighs {}.",
        crate::state::types::item::capitalize(&entity.indefinite_name()),
        entity.weight
    );
    if entity.as_wearable().is_some_and(|w| w.is_worn()) {
        text.push_str(" You are wearing it.");
    }
    if entity.as_wieldable().is_some_and(|w| w.is_wielded()) {
        text.push_str(" You are holding it ready.");
    }
    text
}

// ============================================================================
// Item actions
// ============================================================================

fn held_item<'a>(
    state: &'a GameState,
    actor: EntityId,
    item: EntityId,
) -> Result<&'a Entity, StateError> {
    let entity = state.entity(item)?;
    if entity.location().holder() != Some(actor) {
        return Err(StateError::Misplaced {
            entity: item,
            expected: "in the actor's inventory",
            found: entity.location(),
        });
    }
    Ok(entity)
}

/// Puts a held item on the tile the actor stands on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DropAction {
    pub actor: EntityId,
    pub item: EntityId,
}

impl ActionTransition for DropAction {
    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, state: &GameState) -> Result<(), Refusal> {
        let entity = held_item(state, self.actor, self.item)?;
        let position = state.standing_position(self.actor)?;
        if state.item_at(position).is_some() {
            return Err(Refusal::unmet(format!(
                "There is not enough space to drop {}.",
                entity.definite_name()
            )));
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState) -> Result<(), ActionError> {
        state.drop_item(self.actor, self.item)?;
        let name = state.entity(self.item)?.definite_name();
        state.report(
            self.actor,
            format!("You drop {name}."),
            |who| format!("{who} drops {name}."),
        );
        Ok(())
    }
}

/// Drinks from a held container, leaving it empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConsumeAction {
    pub actor: EntityId,
    pub item: EntityId,
}

impl ActionTransition for ConsumeAction {
    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, state: &GameState) -> Result<(), Refusal> {
        let entity = held_item(state, self.actor, self.item)?;
        let consumable = entity
            .as_consumable()
            .ok_or_else(|| Refusal::unmet(format!("You cannot consume {}.", entity.definite_name())))?;
        if consumable.is_depleted() {
            return Err(Refusal::unmet(
                ItemRejection::Empty.message(&entity.definite_name()),
            ));
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState) -> Result<(), ActionError> {
        let context = ErrorContext::new(state.turn, self.actor);
        let entity = state.entity_mut(self.item)?;
        let former = entity.definite_name();
        let liquid = entity
            .as_consumable_mut()
            .ok_or(ActionError::drift("consume", context))?
            .consume()
            .map_err(|_| ActionError::drift("consume", context))?;
        entity.name = format!("empty {}", entity.name);

        state.report(self.actor, liquid.effect(), |who| {
            format!("{who} drinks from {former}.")
        });
        Ok(())
    }
}

/// Puts on a held garment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WearAction {
    pub actor: EntityId,
    pub item: EntityId,
}

impl ActionTransition for WearAction {
    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, state: &GameState) -> Result<(), Refusal> {
        let entity = held_item(state, self.actor, self.item)?;
        match entity.as_wearable() {
            Some(wearable) if wearable.is_worn() => Err(Refusal::unmet(
                ItemRejection::AlreadyWorn.message(&entity.definite_name()),
            )),
            Some(_) => Ok(()),
            None => Err(Refusal::unmet(format!(
                "You cannot wear {}.",
                entity.definite_name()
            ))),
        }
    }

    fn apply(&self, state: &mut GameState) -> Result<(), ActionError> {
        let context = ErrorContext::new(state.turn, self.actor);
        let entity = state.entity_mut(self.item)?;
        entity
            .as_wearable_mut()
            .ok_or(ActionError::drift("wear", context))?
            .wear()
            .map_err(|_| ActionError::drift("wear", context))?;
        let name = entity.definite_name();
        state.report(
            self.actor,
            format!("You put on {name}."),
            |who| format!("{who} puts on {name}."),
        );
        Ok(())
    }
}

/// Readies a held weapon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WieldAction {
    pub actor: EntityId,
    pub item: EntityId,
}

impl ActionTransition for WieldAction {
    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, state: &GameState) -> Result<(), Refusal> {
        let entity = held_item(state, self.actor, self.item)?;
        match entity.as_wieldable() {
            Some(wieldable) if wieldable.is_wielded() => Err(Refusal::unmet(
                ItemRejection::AlreadyWielded.message(&entity.definite_name()),
            )),
            Some(_) => Ok(()),
            None => Err(Refusal::unmet(format!(
                "You cannot equip {}.",
                entity.definite_name()
            ))),
        }
    }

    fn apply(&self, state: &mut GameState) -> Result<(), ActionError> {
        let context = ErrorContext::new(state.turn, self.actor);
        let entity = state.entity_mut(self.item)?;
        entity
            .as_wieldable_mut()
            .ok_or(ActionError::drift("equip", context))?
            .wield()
            .map_err(|_| ActionError::drift("equip", context))?;
        let name = entity.definite_name();
        state.report(
            self.actor,
            format!("You ready {name}."),
            |who| format!("{who} readies {name}."),
        );
        Ok(())
    }
}

/// Operates a held gadget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UseAction {
    pub actor: EntityId,
    pub item: EntityId,
}

impl ActionTransition for UseAction {
    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, state: &GameState) -> Result<(), Refusal> {
        let entity = held_item(state, self.actor, self.item)?;
        let mut trial = entity.clone();
        let Some(usable) = trial.as_usable_mut() else {
            return Err(Refusal::unmet(format!(
                "You cannot use {}.",
                entity.definite_name()
            )));
        };
        usable
            .apply()
            .map(|_| ())
            .map_err(|rejection| Refusal::unmet(rejection.message(&entity.definite_name())))
    }

    fn apply(&self, state: &mut GameState) -> Result<(), ActionError> {
        let context = ErrorContext::new(state.turn, self.actor);
        let entity = state.entity_mut(self.item)?;
        let effect = entity
            .as_usable_mut()
            .ok_or(ActionError::drift("use", context))?
            .apply()
            .map_err(|_| ActionError::drift("use", context))?;
        let name = entity.definite_name();
        state.report(self.actor, effect, |who| format!("{who} uses {name}."));
        Ok(())
    }
}

// ============================================================================
// Selection
// ============================================================================

/// Handles a key pressed while the inventory menu is shown.
///
/// Unknown keys and verbs the item does not support leave the menu open.
/// Without a filter the item is described. Throwing asks for a target;
/// every other verb is performed and closes the menu.
pub fn select(
    state: &mut GameState,
    actor: EntityId,
    filter: Option<MenuVerb>,
    key: char,
) -> Result<Resolution, ActionError> {
    let menu = InteractionMode::Menu(filter);
    let entries = menu_entries(state, actor, filter)?;
    let Some(entry) = entries.into_iter().find(|entry| entry.key == key) else {
        return Ok(Resolution::stay(menu, None));
    };
    let item = entry.item;

    let Some(verb) = filter else {
        let description = describe_item(state.entity(item)?);
        state.tell(actor, description);
        return Ok(Resolution::stay(menu, None));
    };

    if !entry.enabled {
        let name = state.entity(item)?.definite_name();
        state.tell(actor, format!("You cannot {verb} {name}."));
        return Ok(Resolution::stay(menu, None));
    }

    let done = match verb {
        MenuVerb::Throw => {
            let name = state.entity(item)?.definite_name();
            state.tell(actor, format!("Where do you want to throw {name}?"));
            let origin = state.standing_position(actor)?;
            return Ok(Resolution::pending(Continuation::Throw {
                actor,
                item,
                origin,
            }));
        }
        MenuVerb::Drop => perform(state, &DropAction { actor, item })?,
        MenuVerb::Consume => perform(state, &ConsumeAction { actor, item })?,
        MenuVerb::Wear => perform(state, &WearAction { actor, item })?,
        MenuVerb::Equip => perform(state, &WieldAction { actor, item })?,
        MenuVerb::Use => perform(state, &UseAction { actor, item })?,
    };
    Ok(Resolution::immediate(done))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Drink, Garment, ItemKind, Liquid, Location, Position, Weapon};
    use crate::testing::*;

    fn soda(contents: Option<Liquid>) -> Entity {
        Entity::item(
            "soda can",
            EntityCategory::Comestible,
            ItemKind::Drink(Drink { contents }),
        )
        .with_weight(1)
    }

    #[test]
    fn keys_follow_category_order() {
        let mut state = floor_state(3, 3);
        let player = add_player(&mut state, Position::new(1, 1), 30);
        let can = give_item(&mut state, player, soda(Some(Liquid::Soda)));
        let pistol = give_item(
            &mut state,
            player,
            Entity::item("pistol", EntityCategory::Weapon, ItemKind::Weapon(Weapon::default())),
        );
        let armour = give_item(
            &mut state,
            player,
            Entity::item(
                "power armour",
                EntityCategory::Clothing,
                ItemKind::Garment(Garment::default()),
            ),
        );

        let entries = menu_entries(&state, player, Some(MenuVerb::Wear)).unwrap();
        let keyed: Vec<_> = entries.iter().map(|entry| (entry.key, entry.item)).collect();
        assert_eq!(keyed, vec![('a', pistol), ('b', armour), ('c', can)]);
        let enabled: Vec<_> = entries.iter().map(|entry| entry.enabled).collect();
        assert_eq!(enabled, vec![false, true, false]);
    }

    #[test]
    fn keys_are_reassigned_after_the_inventory_changes() {
        let mut state = floor_state(3, 3);
        let player = add_player(&mut state, Position::new(1, 1), 30);
        let first = give_item(&mut state, player, soda(None));
        let second = give_item(&mut state, player, soda(None));

        let resolution = select(&mut state, player, Some(MenuVerb::Drop), 'a').unwrap();
        assert_eq!(resolution, Resolution::immediate(true));
        assert_eq!(
            state.entity(first).unwrap().location(),
            Location::Ground(Position::new(1, 1))
        );

        let entries = menu_entries(&state, player, None).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!((entries[0].key, entries[0].item), ('a', second));
    }

    #[test]
    fn dropping_onto_an_occupied_tile_is_refused() {
        let mut state = floor_state(3, 3);
        let player = add_player(&mut state, Position::new(1, 1), 30);
        add_item(&mut state, "pistol", ItemKind::Plain, 1, Position::new(1, 1));
        let can = give_item(&mut state, player, soda(None));

        let resolution = select(&mut state, player, Some(MenuVerb::Drop), 'a').unwrap();
        assert_eq!(resolution, Resolution::immediate(false));
        assert_eq!(
            state.entity(can).unwrap().location(),
            Location::Contained { holder: player }
        );
        assert_eq!(
            state.narration.last(),
            Some("There is not enough space to drop the soda can.")
        );
    }

    #[test]
    fn drinking_empties_and_renames_the_container() {
        let mut state = floor_state(3, 3);
        let player = add_player(&mut state, Position::new(1, 1), 30);
        let can = give_item(&mut state, player, soda(Some(Liquid::Soda)));

        let resolution = select(&mut state, player, Some(MenuVerb::Consume), 'a').unwrap();
        assert_eq!(resolution, Resolution::immediate(true));
        assert_eq!(state.narration.last(), Some("The soda refreshes you."));
        assert_eq!(state.entity(can).unwrap().name, "empty soda can");

        let resolution = select(&mut state, player, Some(MenuVerb::Consume), 'a').unwrap();
        assert_eq!(resolution, Resolution::immediate(false));
        assert_eq!(
            state.narration.last(),
            Some("You cannot consume the empty soda can.")
        );
        assert_eq!(state.entity(can).unwrap().name, "empty soda can");
    }

    #[test]
    fn unsupported_verbs_keep_the_menu_open() {
        let mut state = floor_state(3, 3);
        let player = add_player(&mut state, Position::new(1, 1), 30);
        give_item(&mut state, player, soda(None));

        let resolution = select(&mut state, player, Some(MenuVerb::Wear), 'a').unwrap();
        assert_eq!(
            resolution,
            Resolution::stay(InteractionMode::Menu(Some(MenuVerb::Wear)), None)
        );
        assert_eq!(
            state.narration.last(),
            Some("You cannot wear the soda can.")
        );
    }

    #[test]
    fn wearing_marks_the_garment_worn() {
        let mut state = floor_state(3, 3);
        let player = add_player(&mut state, Position::new(1, 1), 30);
        let armour = give_item(
            &mut state,
            player,
            Entity::item(
                "power armour",
                EntityCategory::Clothing,
                ItemKind::Garment(Garment::default()),
            ),
        );

        let resolution = select(&mut state, player, Some(MenuVerb::Wear), 'a').unwrap();
        assert!(resolution.turn_elapsed);
        assert_eq!(state.narration.last(), Some("You put on the power armour."));
        assert!(state.entity(armour).unwrap().as_wearable().unwrap().is_worn());
    }

    #[test]
    fn throwing_waits_for_a_target() {
        let mut state = floor_state(3, 3);
        let player = add_player(&mut state, Position::new(1, 1), 30);
        let can = give_item(&mut state, player, soda(None));

        let resolution = select(&mut state, player, Some(MenuVerb::Throw), 'a').unwrap();
        assert_eq!(resolution.mode, InteractionMode::Targeted);
        assert_eq!(
            resolution.continuation,
            Some(Continuation::Throw {
                actor: player,
                item: can,
                origin: Position::new(1, 1),
            })
        );
    }

    #[test]
    fn unknown_keys_do_nothing() {
        let mut state = floor_state(3, 3);
        let player = add_player(&mut state, Position::new(1, 1), 30);

        let resolution = select(&mut state, player, None, 'q').unwrap();
        assert_eq!(resolution, Resolution::stay(InteractionMode::Menu(None), None));
        assert!(state.narration.is_empty());
    }
}
