use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::components::Slot;

/// 整理背包的方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    #[default]
    ByNameAscending,
    ByNameDescending,
    ByQuantityAscending,
    ByQuantityDescending,
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SortMode::ByNameAscending => "name",
            SortMode::ByNameDescending => "name-desc",
            SortMode::ByQuantityAscending => "qty",
            SortMode::ByQuantityDescending => "qty-desc",
        };
        f.write_str(s)
    }
}

impl FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "name" | "name-asc" => Ok(SortMode::ByNameAscending),
            "name-desc" => Ok(SortMode::ByNameDescending),
            "qty" | "qty-asc" | "quantity" => Ok(SortMode::ByQuantityAscending),
            "qty-desc" | "quantity-desc" => Ok(SortMode::ByQuantityDescending),
            other => Err(format!("unknown sort mode `{other}`")),
        }
    }
}

/// 空格子永远排在非空格子后面，其余按 mode 比较
pub fn compare_slots(a: &Slot, b: &Slot, mode: SortMode) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => match mode {
            SortMode::ByNameAscending => a.item_id.cmp(&b.item_id),
            SortMode::ByNameDescending => b.item_id.cmp(&a.item_id),
            SortMode::ByQuantityAscending => a.quantity.cmp(&b.quantity),
            SortMode::ByQuantityDescending => b.quantity.cmp(&a.quantity),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::components::ItemCategory;

    #[test]
    fn empty_sorts_last_in_every_mode() {
        let full = Slot::new("zucchini", ItemCategory::Food, 1);
        let empty = Slot::empty();
        for mode in [
            SortMode::ByNameAscending,
            SortMode::ByNameDescending,
            SortMode::ByQuantityAscending,
            SortMode::ByQuantityDescending,
        ] {
            assert_eq!(compare_slots(&empty, &full, mode), Ordering::Greater);
            assert_eq!(compare_slots(&full, &empty, mode), Ordering::Less);
        }
    }

    #[test]
    fn parses_cli_names() {
        assert_eq!("name".parse(), Ok(SortMode::ByNameAscending));
        assert_eq!("QTY-DESC".parse(), Ok(SortMode::ByQuantityDescending));
        assert!("weight".parse::<SortMode>().is_err());
    }
}
