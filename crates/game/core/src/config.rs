/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Sight radius, in tiles, given to the player when the level is built.
    pub view_radius: u32,
    /// Weight capacity of the player's inventory.
    pub inventory_capacity: u32,
    /// Maximum distance, in tiles, an item can be thrown.
    pub throw_range: u32,
}

impl GameConfig {
    // ===== compile-time constants =====
    /// Keys handed out to inventory entries, in assignment order.
    pub const SELECTOR_KEYS: &'static str =
        "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
    /// Number of menu entries that can receive a selector key.
    pub const MAX_MENU_ENTRIES: usize = 52;
    /// Upper bound on grid dimensions accepted by [`crate::Grid::set_size`].
    pub const MAX_GRID_DIMENSION: u32 = 1024;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_VIEW_RADIUS: u32 = 15;
    pub const DEFAULT_INVENTORY_CAPACITY: u32 = 30;
    pub const DEFAULT_THROW_RANGE: u32 = 6;

    pub fn new() -> Self {
        Self {
            view_radius: Self::DEFAULT_VIEW_RADIUS,
            inventory_capacity: Self::DEFAULT_INVENTORY_CAPACITY,
            throw_range: Self::DEFAULT_THROW_RANGE,
        }
    }

    pub fn with_view_radius(mut self, view_radius: u32) -> Self {
        self.view_radius = view_radius;
        self
    }

    pub fn with_inventory_capacity(mut self, inventory_capacity: u32) -> Self {
        self.inventory_capacity = inventory_capacity;
        self
    }

    pub fn with_throw_range(mut self, throw_range: u32) -> Self {
        self.throw_range = throw_range;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
