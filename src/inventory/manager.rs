//! 放入 / 取出 / 交换 / 整理 / 改容量。
//!
//! 管理器本身不存状态：借用一个 [`InventoryStore`] 和（可选的）物品表，
//! 每次调用先按分类找到格子序列，检查下标，再执行操作。

use bevy::prelude::*;

use super::components::{ItemCategory, ItemId, Slot};
use super::error::{InventoryError, InventoryResult};
use super::sort::{compare_slots, SortMode};
use super::store::InventoryStore;
use crate::data::catalog::{ItemCatalog, UNKNOWN_STACK_SIZE};

pub struct InventoryManager<'a> {
    store: &'a mut InventoryStore,
    catalog: Option<&'a dyn ItemCatalog>,
}

impl<'a> InventoryManager<'a> {
    pub fn new(store: &'a mut InventoryStore, catalog: Option<&'a dyn ItemCatalog>) -> Self {
        Self { store, catalog }
    }

    fn stack_size(&self, id: &ItemId) -> i32 {
        self.catalog
            .map_or(UNKNOWN_STACK_SIZE, |catalog| catalog.stack_size(id))
    }

    fn slots_mut(&mut self, category: ItemCategory) -> InventoryResult<&mut [Slot]> {
        self.store.sequence_mut(category).ok_or_else(|| {
            warn!("分类 {category} 没有对应的背包");
            InventoryError::InvalidCategory(category)
        })
    }

    /// 从 `start` 往后找第一个能接收的格子，返回放入的位置
    pub fn add_anywhere(&mut self, item: &Slot, start: usize) -> InventoryResult<usize> {
        let stack_size = self.stack_size(&item.item_id);
        let end = self.store.capacity(item.category);
        let slots = self.slots_mut(item.category)?;
        let end = end.min(slots.len());

        for index in start..end {
            if merge_or_place(&mut slots[index], item, stack_size) {
                debug!("{} ×{} → [{index}]", item.item_id, item.quantity);
                return Ok(index);
            }
        }

        Err(InventoryError::NoSpace {
            category: item.category,
            item_id: item.item_id.clone(),
            quantity: item.quantity,
        })
    }

    /// 只尝试 `index` 这一格，不往后找
    pub fn add_at_index(&mut self, item: &Slot, index: usize) -> InventoryResult<()> {
        let stack_size = self.stack_size(&item.item_id);
        let slots = self.slots_mut(item.category)?;
        let len = slots.len();
        let slot = slots
            .get_mut(index)
            .ok_or(InventoryError::IndexOutOfBounds { index, len })?;

        if merge_or_place(slot, item, stack_size) {
            debug!("{} ×{} → [{index}]", item.item_id, item.quantity);
            Ok(())
        } else {
            Err(InventoryError::NoSpace {
                category: item.category,
                item_id: item.item_id.clone(),
                quantity: item.quantity,
            })
        }
    }

    /// 从 `index` 取走 `quantity` 个 `item`，返回"取走了什么"。
    ///
    /// 返回值的数量就是请求的数量，不会按格子里实际剩余的数量截断；
    /// 取多了格子直接清空。
    pub fn remove(&mut self, item: &Slot, index: usize, quantity: u32) -> InventoryResult<Slot> {
        let slots = self.slots_mut(item.category)?;
        let len = slots.len();
        let slot = slots
            .get_mut(index)
            .ok_or(InventoryError::IndexOutOfBounds { index, len })?;

        if !slot.same_item(item) {
            warn!("格子 [{index}] 里不是 {}，无法取出", item.item_id);
            return Err(InventoryError::ItemMismatch {
                index,
                expected: item.item_id.clone(),
                found: slot.item_id.clone(),
            });
        }

        let removed = Slot {
            quantity,
            ..slot.clone()
        };

        slot.quantity = slot.quantity.saturating_sub(quantity);
        if slot.quantity == 0 {
            *slot = Slot::empty();
        }

        info!("Removed {quantity} from index {index}");
        Ok(removed)
    }

    /// 纯位置交换，同种物品也不会合并
    pub fn swap(&mut self, category: ItemCategory, a: usize, b: usize) -> InventoryResult<()> {
        let capacity = self.store.capacity(category);
        let slots = self.slots_mut(category)?;
        let capacity = capacity.min(slots.len());

        for index in [a, b] {
            if index >= capacity {
                return Err(InventoryError::InvalidIndex { index, capacity });
            }
        }

        slots.swap(a, b);
        Ok(())
    }

    /// 稳定排序，空格子排最后。分类不存在时只记日志。
    pub fn sort(&mut self, category: ItemCategory, mode: SortMode) {
        let Ok(slots) = self.slots_mut(category) else {
            return;
        };
        slots.sort_by(|a, b| compare_slots(a, b, mode));
        debug!("sorted {category} inventory by {mode}");
    }

    pub fn capacity(&self, category: ItemCategory) -> usize {
        self.store.capacity(category)
    }

    pub fn set_capacity(&mut self, category: ItemCategory, new_size: usize) -> InventoryResult<usize> {
        self.store.set_capacity(category, new_size)
    }

    /// 按配置容量截断 / 补空，截掉的物品直接丢弃
    pub fn resize(&mut self, category: ItemCategory) -> InventoryResult<usize> {
        let size = self.store.resize(category)?;
        info!("Resizing {category} inventory to {size}");
        Ok(size)
    }

    pub fn sequence(&self, category: ItemCategory) -> Option<&[Slot]> {
        self.store.sequence(category)
    }
}

/// 空格子无条件接收全部数量；同种物品合并后不超过上限才接收。
/// 要么全放进去，要么一个都不放。
fn merge_or_place(slot: &mut Slot, item: &Slot, stack_size: i32) -> bool {
    let Some(new_quantity) = slot.quantity.checked_add(item.quantity) else {
        return false;
    };
    let fits = i64::from(new_quantity) <= i64::from(stack_size);

    if !(slot.is_empty() || (slot.same_item(item) && fits)) {
        return false;
    }

    *slot = if new_quantity == 0 {
        Slot::empty()
    } else {
        Slot {
            quantity: new_quantity,
            ..item.clone()
        }
    };
    true
}
