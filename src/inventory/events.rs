use bevy::prelude::*;

use super::components::{ItemCategory, Slot};
use super::sort::SortMode;

/// 放到哪里
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// 从 start 往后找第一个能放的格子
    Anywhere { start: usize },
    /// 只放指定格子
    AtIndex(usize),
}

/// 往背包里塞物品。category 为空时取物品表里的分类。
#[derive(Event, Debug, Clone)]
pub struct AddItemEvent {
    pub id:        String,
    pub count:     u32,
    pub category:  Option<ItemCategory>,
    pub placement: Placement,
}

#[derive(Event, Debug, Clone)]
pub struct RemoveItemEvent {
    pub id:       String,
    pub category: Option<ItemCategory>,
    pub index:    usize,
    pub count:    u32,
}

#[derive(Event, Debug, Clone)]
pub struct SwapSlotsEvent {
    pub category: ItemCategory,
    pub a:        usize,
    pub b:        usize,
}

#[derive(Event, Debug, Clone)]
pub struct SortInventoryEvent {
    pub category: ItemCategory,
    pub mode:     SortMode,
}

/// capacity 有值时先改容量再 resize
#[derive(Event, Debug, Clone)]
pub struct ResizeInventoryEvent {
    pub category: ItemCategory,
    pub capacity: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListFormat {
    #[default]
    Text,
    Json,
}

/// 让 CLI 请求打印背包；category 为空打印全部
#[derive(Event, Debug, Clone, Default)]
pub struct ListInventoryEvent {
    pub category: Option<ItemCategory>,
    pub format:   ListFormat,
}

/// 取出成功后发出，带着"取走了什么"
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct ItemRemoved {
    pub index: usize,
    pub item:  Slot,
}
