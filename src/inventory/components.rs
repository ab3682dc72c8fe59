use serde_derive::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 物品分类（决定落在哪一个背包序列里）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemCategory {
    #[default]
    None,
    Food,
    Weapon,
    Armor,
}

impl ItemCategory {
    pub const ALL: [ItemCategory; 4] = [
        ItemCategory::None,
        ItemCategory::Food,
        ItemCategory::Weapon,
        ItemCategory::Armor,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemCategory::None => "none",
            ItemCategory::Food => "food",
            ItemCategory::Weapon => "weapon",
            ItemCategory::Armor => "armor",
        }
    }
}

impl fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(ItemCategory::None),
            "food" => Ok(ItemCategory::Food),
            "weapon" | "weapons" => Ok(ItemCategory::Weapon),
            "armor" | "armour" => Ok(ItemCategory::Armor),
            other => Err(format!("unknown category `{other}`")),
        }
    }
}

/// 物品表里的 id，背包本身不解释它
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// 一个格子：要么空（quantity=0），要么放一叠同种物品。
///
/// 调用方传入的"物品"也是这个类型，quantity 表示这次要放/取多少。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Slot {
    pub item_id: ItemId,
    pub category: ItemCategory,
    pub quantity: u32,
}

impl Slot {
    pub fn new(item_id: impl Into<ItemId>, category: ItemCategory, quantity: u32) -> Self {
        Self {
            item_id: item_id.into(),
            category,
            quantity,
        }
    }

    /// 空格子，id 被清空
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.quantity == 0
    }

    /// 只比 id，分类不参与
    pub fn same_item(&self, other: &Slot) -> bool {
        self.item_id == other.item_id
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        Self(value)
    }
}
