use bevy::asset::Asset;
use bevy::reflect::TypePath;
use serde_derive::Deserialize;

use crate::inventory::components::ItemCategory;

/// 物品表中的一行
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ItemEntry {
    pub id:   String,
    pub name: String,
    #[serde(default)] pub description: String,
    #[serde(default)] pub category:    ItemCategory,
    /// 单格最多叠多少；<= 0 视为未知
    #[serde(default)] pub stack_size:  i32,
}

#[derive(Asset, TypePath, Deserialize, Debug)]
pub struct ItemList {
    pub items: Vec<ItemEntry>,
}
