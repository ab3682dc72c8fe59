use bevy::prelude::*;
use std::collections::HashMap;

use super::components::{ItemCategory, Slot};
use super::error::{InventoryError, InventoryResult};
use crate::core::resources::InventoryConfig;

/// 默认只有食物背包接了存储，大小 8
pub const DEFAULT_FOOD_CAPACITY: usize = 8;

/// 某一分类的背包：定长格子序列 + 配置容量
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryStorage {
    slots: Vec<Slot>,
    capacity: usize,
}

/// 分类 → 背包 的表。没登记的分类就是"没有背包"，不是空背包。
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct InventoryStore {
    inventories: HashMap<ItemCategory, CategoryStorage>,
}

impl Default for InventoryStore {
    fn default() -> Self {
        let mut store = Self::unmapped();
        store.register(ItemCategory::Food, DEFAULT_FOOD_CAPACITY);
        store
    }
}

impl InventoryStore {
    /// 一个分类都没有的空表
    pub fn unmapped() -> Self {
        Self {
            inventories: HashMap::new(),
        }
    }

    /// 按配置登记分类并按容量分配格子
    pub fn from_config(config: &InventoryConfig) -> Self {
        let mut store = Self::unmapped();
        for (category, capacity) in config.capacities.iter() {
            store.register(category, capacity);
        }
        store
    }

    /// 登记一个分类；已登记的分类会改容量并立刻 resize
    pub fn register(&mut self, category: ItemCategory, capacity: usize) -> &mut Self {
        let storage = self
            .inventories
            .entry(category)
            .or_default();
        storage.capacity = capacity;
        storage.slots.resize(capacity, Slot::empty());
        self
    }

    pub fn is_mapped(&self, category: ItemCategory) -> bool {
        self.inventories.contains_key(&category)
    }

    /// 已登记的分类，顺序固定
    pub fn categories(&self) -> Vec<ItemCategory> {
        ItemCategory::ALL
            .into_iter()
            .filter(|c| self.is_mapped(*c))
            .collect()
    }

    pub fn sequence(&self, category: ItemCategory) -> Option<&[Slot]> {
        self.inventories.get(&category).map(|s| s.slots.as_slice())
    }

    pub fn sequence_mut(&mut self, category: ItemCategory) -> Option<&mut [Slot]> {
        self.inventories
            .get_mut(&category)
            .map(|s| s.slots.as_mut_slice())
    }

    /// 未登记的分类容量为 0
    pub fn capacity(&self, category: ItemCategory) -> usize {
        self.inventories.get(&category).map_or(0, |s| s.capacity)
    }

    /// 只改配置容量，格子数要等 `resize` 才变
    pub fn set_capacity(&mut self, category: ItemCategory, new_size: usize) -> InventoryResult<usize> {
        let storage = self
            .inventories
            .get_mut(&category)
            .ok_or(InventoryError::InvalidCategory(category))?;
        storage.capacity = new_size;
        Ok(new_size)
    }

    /// 把格子序列截断或补空到配置容量。截掉的格子连同物品一起丢弃。
    pub fn resize(&mut self, category: ItemCategory) -> InventoryResult<usize> {
        let storage = self
            .inventories
            .get_mut(&category)
            .ok_or(InventoryError::InvalidCategory(category))?;
        let old_len = storage.slots.len();
        storage.slots.resize(storage.capacity, Slot::empty());
        debug!("resized {category} inventory {old_len} -> {}", storage.capacity);
        Ok(storage.capacity)
    }
}
