use anyhow::{Context, Result};
use bevy::prelude::*;
use serde_derive::{Deserialize, Serialize};
use std::path::Path;

use crate::inventory::components::ItemCategory;
use crate::inventory::store::DEFAULT_FOOD_CAPACITY;

/// 每个分类的格子数。`None` = 该分类不接存储。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Capacities {
    pub none:   Option<usize>,
    pub food:   Option<usize>,
    pub weapon: Option<usize>,
    pub armor:  Option<usize>,
}

impl Default for Capacities {
    fn default() -> Self {
        Self {
            none:   None,
            food:   Some(DEFAULT_FOOD_CAPACITY),
            weapon: None,
            armor:  None,
        }
    }
}

impl Capacities {
    pub fn get(&self, category: ItemCategory) -> Option<usize> {
        match category {
            ItemCategory::None => self.none,
            ItemCategory::Food => self.food,
            ItemCategory::Weapon => self.weapon,
            ItemCategory::Armor => self.armor,
        }
    }

    /// 已配置的 (分类, 容量)
    pub fn iter(&self) -> impl Iterator<Item = (ItemCategory, usize)> + '_ {
        ItemCategory::ALL
            .into_iter()
            .filter_map(|c| self.get(c).map(|size| (c, size)))
    }
}

/// 背包配置，来自 `assets/config/inventory.toml`
#[derive(Resource, Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct InventoryConfig {
    /// 物品表路径（相对 assets/）
    pub catalog_path: String,
    pub capacities:   Capacities,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            catalog_path: "data/food.items.ron".into(),
            capacities:   Capacities::default(),
        }
    }
}

impl InventoryConfig {
    pub const DEFAULT_PATH: &'static str = "assets/config/inventory.toml";

    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).context("invalid inventory config")
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("loading {}", path.display()))
    }

    /// 文件不存在就用默认值；文件存在但写错了仍然报错
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config = InventoryConfig::from_toml_str("").unwrap();
        assert_eq!(config, InventoryConfig::default());
        assert_eq!(
            config.capacities.iter().collect::<Vec<_>>(),
            vec![(ItemCategory::Food, 8)]
        );
    }

    #[test]
    fn listed_categories_replace_the_default_table() {
        let config = InventoryConfig::from_toml_str(
            r#"
            catalog_path = "data/all.items.ron"

            [capacities]
            weapon = 4
            armor = 2
            "#,
        )
        .unwrap();

        assert_eq!(config.catalog_path, "data/all.items.ron");
        assert_eq!(
            config.capacities.iter().collect::<Vec<_>>(),
            vec![(ItemCategory::Weapon, 4), (ItemCategory::Armor, 2)]
        );
    }

    #[test]
    fn bad_types_are_reported() {
        let err = InventoryConfig::from_toml_str("[capacities]\nfood = \"lots\"").unwrap_err();
        assert!(format!("{err:#}").contains("invalid inventory config"));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = InventoryConfig::load_or_default("does/not/exist.toml").unwrap();
        assert_eq!(config, InventoryConfig::default());
    }

    #[test]
    fn shipped_config_parses() {
        let config =
            InventoryConfig::from_toml_str(include_str!("../../assets/config/inventory.toml"))
                .unwrap();
        assert_eq!(config.capacities.get(ItemCategory::Food), Some(8));
        assert_eq!(config.capacities.get(ItemCategory::Weapon), None);
    }
}
