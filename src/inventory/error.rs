use thiserror::Error;

use super::components::{ItemCategory, ItemId};

pub type InventoryResult<T> = Result<T, InventoryError>;

/// 背包操作失败的原因。都不致命，失败时背包保持原样。
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    #[error("no inventory is registered for category `{0}`")]
    InvalidCategory(ItemCategory),

    #[error("no slot in the `{category}` inventory accepts {quantity} x {item_id}")]
    NoSpace {
        category: ItemCategory,
        item_id: ItemId,
        quantity: u32,
    },

    #[error("slot {index} holds `{found}`, not `{expected}`")]
    ItemMismatch {
        index: usize,
        expected: ItemId,
        found: ItemId,
    },

    #[error("swap index {index} is outside 0..{capacity}")]
    InvalidIndex { index: usize, capacity: usize },

    #[error("index {index} is out of bounds for an inventory of {len} slots")]
    IndexOutOfBounds { index: usize, len: usize },
}
