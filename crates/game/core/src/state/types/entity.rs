//! Polymorphic game objects: actors, fixtures and items.
//!
//! Every entity shares identity, naming, display and location. What it can do
//! is decided by [`EntityKind`] and exposed through the `as_*` capability
//! queries, which return `None` for variants that do not implement the
//! capability.

use strum::{Display, EnumIter};

use super::fixture::{Fixture, Openable};
use super::item::{
    Consumable, Droppable, ItemKind, Usable, Wearable, Wieldable, capitalize,
};
use super::{ActorState, BlockFlags, EntityId, Position, Rgb};

/// Display and menu grouping. Menu keys are assigned in declaration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EntityCategory {
    Weapon,
    Clothing,
    Comestible,
    Medicine,
    Other,
    Fixture,
}

/// Who hears about what this entity does.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReportAudience {
    /// Narrated in the second person ("You open the door.").
    Player,
    /// Narrated in the third person to whoever can see it.
    Observer,
    /// Not narrated.
    #[default]
    Silent,
}

/// Where an entity currently is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Location {
    /// Freshly constructed, or displaced and awaiting placement.
    #[default]
    Unplaced,
    /// Lying in a tile's item slot.
    Ground(Position),
    /// Standing in a tile's occupant slot.
    Standing(Position),
    /// Attached to a tile's fixture slot.
    Attached(Position),
    /// Held in the inventory of the given actor.
    Contained { holder: EntityId },
}

impl Location {
    /// Grid position, if the entity is on a tile.
    pub fn position(self) -> Option<Position> {
        match self {
            Self::Ground(position) | Self::Standing(position) | Self::Attached(position) => {
                Some(position)
            }
            Self::Unplaced | Self::Contained { .. } => None,
        }
    }

    pub fn holder(self) -> Option<EntityId> {
        match self {
            Self::Contained { holder } => Some(holder),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EntityKind {
    Actor(ActorState),
    Fixture(Fixture),
    Item(ItemKind),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entity {
    pub id: EntityId,
    pub name: String,
    /// Proper nouns ("Bob Smith") take no article.
    pub proper_noun: bool,
    pub category: EntityCategory,
    pub glyph: char,
    pub color: Rgb,
    pub weight: u32,
    pub report: ReportAudience,
    pub(crate) location: Location,
    pub kind: EntityKind,
}

impl Entity {
    pub fn new(name: impl Into<String>, category: EntityCategory, kind: EntityKind) -> Self {
        Self {
            id: EntityId::default(),
            name: name.into(),
            proper_noun: false,
            category,
            glyph: '?',
            color: Rgb::WHITE,
            weight: 0,
            report: ReportAudience::Silent,
            location: Location::Unplaced,
            kind,
        }
    }

    pub fn actor(name: impl Into<String>, actor: ActorState) -> Self {
        Self::new(name, EntityCategory::Other, EntityKind::Actor(actor)).with_glyph('@')
    }

    pub fn fixture(fixture: Fixture) -> Self {
        let noun = fixture.as_openable().noun();
        Self::new(noun, EntityCategory::Fixture, EntityKind::Fixture(fixture))
    }

    pub fn item(name: impl Into<String>, category: EntityCategory, kind: ItemKind) -> Self {
        Self::new(name, category, EntityKind::Item(kind))
    }

    pub fn with_glyph(mut self, glyph: char) -> Self {
        self.glyph = glyph;
        self
    }

    pub fn with_color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }

    pub fn with_weight(mut self, weight: u32) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_report(mut self, report: ReportAudience) -> Self {
        self.report = report;
        self
    }

    pub fn proper(mut self) -> Self {
        self.proper_noun = true;
        self
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn position(&self) -> Option<Position> {
        self.location.position()
    }

    pub fn is_actor(&self) -> bool {
        matches!(self.kind, EntityKind::Actor(_))
    }

    pub fn is_item(&self) -> bool {
        matches!(self.kind, EntityKind::Item(_))
    }

    /// "a soda can", "an analyser", or the bare proper noun.
    pub fn indefinite_name(&self) -> String {
        if self.proper_noun {
            return self.name.clone();
        }
        let article = match self.name.chars().next() {
            Some(first) if "aeiouAEIOU".contains(first) => "an",
            _ => "a",
        };
        format!("{article} {}", self.name)
    }

    /// "the soda can", or the bare proper noun.
    pub fn definite_name(&self) -> String {
        if self.proper_noun {
            self.name.clone()
        } else {
            format!("the {}", self.name)
        }
    }

    /// Definite name with a leading capital, for starting sentences.
    pub fn subject_name(&self) -> String {
        capitalize(&self.definite_name())
    }

    /// Glyph currently drawn for this entity.
    pub fn display_glyph(&self) -> char {
        match &self.kind {
            EntityKind::Fixture(fixture) => fixture.as_openable().glyph(),
            _ => self.glyph,
        }
    }

    /// Blocking this entity imposes on the tile it sits in.
    pub fn blocks(&self) -> BlockFlags {
        match &self.kind {
            EntityKind::Fixture(fixture) => fixture.as_openable().blocks(),
            EntityKind::Actor(_) => BlockFlags::MOVE,
            EntityKind::Item(_) => BlockFlags::empty(),
        }
    }

    pub fn as_actor(&self) -> Option<&ActorState> {
        match &self.kind {
            EntityKind::Actor(actor) => Some(actor),
            _ => None,
        }
    }

    pub fn as_actor_mut(&mut self) -> Option<&mut ActorState> {
        match &mut self.kind {
            EntityKind::Actor(actor) => Some(actor),
            _ => None,
        }
    }

    pub fn as_openable(&self) -> Option<&dyn Openable> {
        match &self.kind {
            EntityKind::Fixture(fixture) => Some(fixture.as_openable()),
            _ => None,
        }
    }

    pub fn as_openable_mut(&mut self) -> Option<&mut dyn Openable> {
        match &mut self.kind {
            EntityKind::Fixture(fixture) => Some(fixture.as_openable_mut()),
            _ => None,
        }
    }

    pub fn as_droppable(&self) -> Option<&dyn Droppable> {
        match &self.kind {
            EntityKind::Item(item) => Some(item),
            _ => None,
        }
    }

    pub fn as_droppable_mut(&mut self) -> Option<&mut dyn Droppable> {
        match &mut self.kind {
            EntityKind::Item(item) => Some(item),
            _ => None,
        }
    }

    pub fn as_consumable(&self) -> Option<&dyn Consumable> {
        self.item_kind().and_then(ItemKind::as_consumable)
    }

    pub fn as_consumable_mut(&mut self) -> Option<&mut dyn Consumable> {
        self.item_kind_mut().and_then(ItemKind::as_consumable_mut)
    }

    pub fn as_wearable(&self) -> Option<&dyn Wearable> {
        self.item_kind().and_then(ItemKind::as_wearable)
    }

    pub fn as_wearable_mut(&mut self) -> Option<&mut dyn Wearable> {
        self.item_kind_mut().and_then(ItemKind::as_wearable_mut)
    }

    pub fn as_wieldable(&self) -> Option<&dyn Wieldable> {
        self.item_kind().and_then(ItemKind::as_wieldable)
    }

    pub fn as_wieldable_mut(&mut self) -> Option<&mut dyn Wieldable> {
        self.item_kind_mut().and_then(ItemKind::as_wieldable_mut)
    }

    pub fn as_usable(&self) -> Option<&dyn Usable> {
        self.item_kind().and_then(ItemKind::as_usable)
    }

    pub fn as_usable_mut(&mut self) -> Option<&mut dyn Usable> {
        self.item_kind_mut().and_then(ItemKind::as_usable_mut)
    }

    fn item_kind(&self) -> Option<&ItemKind> {
        match &self.kind {
            EntityKind::Item(item) => Some(item),
            _ => None,
        }
    }

    fn item_kind_mut(&mut self) -> Option<&mut ItemKind> {
        match &mut self.kind {
            EntityKind::Item(item) => Some(item),
            _ => None,
        }
    }
}
