//! Item catalog loader.

use std::path::Path;

use game_core::{Entity, EntityCategory, ItemKind, Rgb};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

fn default_color() -> Rgb {
    Rgb::WHITE
}

/// Blueprint for spawning an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemTemplate {
    /// Identifier used by levels to refer to this template.
    pub key: String,
    pub name: String,
    pub category: EntityCategory,
    pub glyph: char,
    #[serde(default = "default_color")]
    pub color: Rgb,
    #[serde(default)]
    pub weight: u32,
    #[serde(default)]
    pub kind: ItemKind,
}

impl ItemTemplate {
    /// A fresh, unplaced entity built from this template.
    pub fn instantiate(&self) -> Entity {
        Entity::item(self.name.clone(), self.category, self.kind)
            .with_glyph(self.glyph)
            .with_color(self.color)
            .with_weight(self.weight)
    }
}

/// Item catalog structure for RON files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemCatalog {
    pub items: Vec<ItemTemplate>,
}

impl ItemCatalog {
    pub fn get(&self, key: &str) -> Option<&ItemTemplate> {
        self.items.iter().find(|template| template.key == key)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Loader for item catalog from RON files.
pub struct ItemLoader;

impl ItemLoader {
    pub fn load(path: &Path) -> LoadResult<ItemCatalog> {
        let content = read_file(path)?;
        Self::parse(&content).map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))
    }

    /// Parses a catalog, rejecting duplicate template keys.
    pub fn parse(content: &str) -> LoadResult<ItemCatalog> {
        let catalog: ItemCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;

        for (index, template) in catalog.items.iter().enumerate() {
            if catalog.items[..index]
                .iter()
                .any(|earlier| earlier.key == template.key)
            {
                anyhow::bail!("Duplicate item template '{}'", template.key);
            }
        }
        Ok(catalog)
    }
}
