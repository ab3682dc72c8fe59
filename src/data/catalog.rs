use bevy::prelude::*;
use std::collections::HashMap;

use super::schema::{ItemEntry, ItemList};
use crate::inventory::components::ItemId;

/// 查不到物品（或者根本没有物品表）时返回的堆叠上限
pub const UNKNOWN_STACK_SIZE: i32 = -1;

/// 背包唯一需要的物品表查询
pub trait ItemCatalog {
    fn entry(&self, id: &ItemId) -> Option<&ItemEntry>;

    /// 单格堆叠上限；未知物品返回 [`UNKNOWN_STACK_SIZE`]
    fn stack_size(&self, id: &ItemId) -> i32 {
        self.entry(id)
            .map(|e| e.stack_size)
            .filter(|size| *size > 0)
            .unwrap_or(UNKNOWN_STACK_SIZE)
    }
}

/// 物品表加载完后建立的索引（挂在 Resource）
#[derive(Resource, Debug, Default, Clone)]
pub struct ItemTable {
    entries: HashMap<ItemId, ItemEntry>,
}

impl ItemTable {
    pub fn from_list(list: &ItemList) -> Self {
        let mut table = Self::default();
        for entry in &list.items {
            table.insert(entry.clone());
        }
        table
    }

    /// 同 id 后出现的覆盖先出现的
    pub fn insert(&mut self, entry: ItemEntry) {
        if let Some(old) = self.entries.insert(ItemId::new(entry.id.clone()), entry) {
            warn!("物品 ID {} 重复，后者覆盖前者", old.id);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 按 id 排好序，方便打印
    pub fn entries(&self) -> Vec<&ItemEntry> {
        let mut all: Vec<_> = self.entries.values().collect();
        all.sort_by(|a, b| a.id.cmp(&b.id));
        all
    }

    /// 先精确匹配 id，再不区分大小写匹配 id / 名称
    pub fn find(&self, token: &str) -> Option<&ItemEntry> {
        self.entries.get(&ItemId::from(token)).or_else(|| {
            self.entries().into_iter().find(|e| {
                e.id.eq_ignore_ascii_case(token) || e.name.eq_ignore_ascii_case(token)
            })
        })
    }
}

impl ItemCatalog for ItemTable {
    fn entry(&self, id: &ItemId) -> Option<&ItemEntry> {
        self.entries.get(id)
    }
}
