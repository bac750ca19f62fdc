//! Carryable items and the capabilities they opt into.
use strum::{Display, EnumIter};

/// Contents of a drink container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Liquid {
    Unknown,
    Water,
    Soda,
    Petroleum,
    Alcohol,
    SulphuricAcid,
}

impl Liquid {
    /// First-person narration of drinking this liquid.
    pub const fn effect(self) -> &'static str {
        match self {
            Self::Unknown => "It tastes of nothing in particular.",
            Self::Water => "The water refreshes you.",
            Self::Soda => "The soda refreshes you.",
            Self::Petroleum => "That tasted terrible. Your stomach churns.",
            Self::Alcohol => "You feel slightly more intoxicated.",
            Self::SulphuricAcid => "It burns! That was a very bad idea.",
        }
    }
}

/// Why an item refused a verb that it nominally supports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
pub enum ItemRejection {
    Empty,
    AlreadyWorn,
    AlreadyWielded,
    NoCharges,
}

impl ItemRejection {
    pub fn message(self, definite_name: &str) -> String {
        match self {
            Self::Empty => format!("You cannot consume {definite_name}."),
            Self::AlreadyWorn => format!("You are already wearing {definite_name}."),
            Self::AlreadyWielded => format!("You are already holding {definite_name}."),
            Self::NoCharges => format!("{} is used up.", capitalize(definite_name)),
        }
    }
}

pub(crate) fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Anything that can be drunk or eaten.
pub trait Consumable {
    fn is_depleted(&self) -> bool;

    /// Empties the item and returns what was in it.
    fn consume(&mut self) -> Result<Liquid, ItemRejection>;
}

/// Clothing and armour.
pub trait Wearable {
    fn is_worn(&self) -> bool;

    fn wear(&mut self) -> Result<(), ItemRejection>;

    fn take_off(&mut self);
}

/// Anything that can be readied as a weapon.
pub trait Wieldable {
    fn is_wielded(&self) -> bool;

    fn wield(&mut self) -> Result<(), ItemRejection>;

    fn lower(&mut self);
}

/// Gadgets applied with the "use" verb.
pub trait Usable {
    /// Applies the gadget and returns its first-person narration.
    fn apply(&mut self) -> Result<&'static str, ItemRejection>;
}

/// Items that can be picked up and put down. Every item qualifies.
pub trait Droppable {
    /// Called when the item leaves its holder; clears worn/wielded state.
    fn on_release(&mut self) {}
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Drink {
    /// `None` once drunk.
    pub contents: Option<Liquid>,
}

impl Consumable for Drink {
    fn is_depleted(&self) -> bool {
        self.contents.is_none()
    }

    fn consume(&mut self) -> Result<Liquid, ItemRejection> {
        self.contents.take().ok_or(ItemRejection::Empty)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Garment {
    pub worn: bool,
}

impl Wearable for Garment {
    fn is_worn(&self) -> bool {
        self.worn
    }

    fn wear(&mut self) -> Result<(), ItemRejection> {
        if self.worn {
            return Err(ItemRejection::AlreadyWorn);
        }
        self.worn = true;
        Ok(())
    }

    fn take_off(&mut self) {
        self.worn = false;
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Weapon {
    pub wielded: bool,
}

impl Wieldable for Weapon {
    fn is_wielded(&self) -> bool {
        self.wielded
    }

    fn wield(&mut self) -> Result<(), ItemRejection> {
        if self.wielded {
            return Err(ItemRejection::AlreadyWielded);
        }
        self.wielded = true;
        Ok(())
    }

    fn lower(&mut self) {
        self.wielded = false;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GadgetKind {
    MedKit,
    Analyser,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gadget {
    pub kind: GadgetKind,
    /// Remaining uses; `None` for gadgets that never run out.
    pub charges: Option<u32>,
}

impl Usable for Gadget {
    fn apply(&mut self) -> Result<&'static str, ItemRejection> {
        if let Some(charges) = self.charges.as_mut() {
            if *charges == 0 {
                return Err(ItemRejection::NoCharges);
            }
            *charges -= 1;
        }
        Ok(match self.kind {
            GadgetKind::MedKit => "You patch yourself up. You feel better.",
            GadgetKind::Analyser => {
                "The analyser hums and flashes, but its readings mean nothing to you."
            }
        })
    }
}

/// Behavior carried by an item entity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKind {
    #[default]
    Plain,
    Drink(Drink),
    Garment(Garment),
    Weapon(Weapon),
    Gadget(Gadget),
}

impl ItemKind {
    pub fn as_consumable(&self) -> Option<&dyn Consumable> {
        match self {
            Self::Drink(drink) => Some(drink),
            _ => None,
        }
    }

    pub fn as_consumable_mut(&mut self) -> Option<&mut dyn Consumable> {
        match self {
            Self::Drink(drink) => Some(drink),
            _ => None,
        }
    }

    pub fn as_wearable(&self) -> Option<&dyn Wearable> {
        match self {
            Self::Garment(garment) => Some(garment),
            _ => None,
        }
    }

    pub fn as_wearable_mut(&mut self) -> Option<&mut dyn Wearable> {
        match self {
            Self::Garment(garment) => Some(garment),
            _ => None,
        }
    }

    pub fn as_wieldable(&self) -> Option<&dyn Wieldable> {
        match self {
            Self::Weapon(weapon) => Some(weapon),
            _ => None,
        }
    }

    pub fn as_wieldable_mut(&mut self) -> Option<&mut dyn Wieldable> {
        match self {
            Self::Weapon(weapon) => Some(weapon),
            _ => None,
        }
    }

    pub fn as_usable(&self) -> Option<&dyn Usable> {
        match self {
            Self::Gadget(gadget) => Some(gadget),
            _ => None,
        }
    }

    pub fn as_usable_mut(&mut self) -> Option<&mut dyn Usable> {
        match self {
            Self::Gadget(gadget) => Some(gadget),
            _ => None,
        }
    }
}

impl Droppable for ItemKind {
    fn on_release(&mut self) {
        if let Some(garment) = self.as_wearable_mut() {
            garment.take_off();
        }
        if let Some(weapon) = self.as_wieldable_mut() {
            weapon.lower();
        }
    }
}
