//! Property-based tests for slot allocation and stacking
//!
//! - Merges never push a slot past its stack size
//! - Swap is an involution
//! - Sorting always moves empty slots to the back
//! - Removal either empties the slot or keeps its identity

use proptest::prelude::*;
use slot_inventory::data::catalog::ItemTable;
use slot_inventory::data::schema::ItemEntry;
use slot_inventory::inventory::components::{ItemCategory, Slot};
use slot_inventory::inventory::manager::InventoryManager;
use slot_inventory::inventory::sort::SortMode;
use slot_inventory::inventory::store::InventoryStore;

const STACK: i32 = 10;

fn table() -> ItemTable {
    let mut table = ItemTable::default();
    for id in ["apple", "bread", "cheese"] {
        table.insert(ItemEntry {
            id: id.into(),
            name: id.into(),
            description: String::new(),
            category: ItemCategory::Food,
            stack_size: STACK,
        });
    }
    table
}

fn food_store(capacity: usize) -> InventoryStore {
    let mut store = InventoryStore::unmapped();
    store.register(ItemCategory::Food, capacity);
    store
}

fn item_id() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("apple"), Just("bread"), Just("cheese")]
}

fn sort_mode() -> impl Strategy<Value = SortMode> {
    prop_oneof![
        Just(SortMode::ByNameAscending),
        Just(SortMode::ByNameDescending),
        Just(SortMode::ByQuantityAscending),
        Just(SortMode::ByQuantityDescending),
    ]
}

/// 随机填一个食物背包
fn filled_store(ops: &[(&'static str, u32)], capacity: usize) -> InventoryStore {
    let table = table();
    let mut store = food_store(capacity);
    let mut manager = InventoryManager::new(&mut store, Some(&table));
    for (id, quantity) in ops {
        let _ = manager.add_anywhere(&Slot::new(*id, ItemCategory::Food, *quantity), 0);
    }
    store
}

proptest! {
    /// Property: two adds into one slot succeed iff the total fits
    #[test]
    fn second_add_respects_stack_size(a in 1u32..=10, b in 1u32..=10) {
        let table = table();
        let mut store = food_store(1);
        let mut manager = InventoryManager::new(&mut store, Some(&table));

        manager.add_at_index(&Slot::new("apple", ItemCategory::Food, a), 0).unwrap();
        let second = manager.add_at_index(&Slot::new("apple", ItemCategory::Food, b), 0);

        let quantity = store.sequence(ItemCategory::Food).unwrap()[0].quantity;
        if a + b <= STACK as u32 {
            prop_assert!(second.is_ok());
            prop_assert_eq!(quantity, a + b);
        } else {
            prop_assert!(second.is_err());
            prop_assert_eq!(quantity, a);
        }
    }

    /// Property: merged stacks never exceed the stack size, only fresh placements may
    #[test]
    fn merged_slots_stay_within_limit(
        ops in prop::collection::vec((item_id(), 1u32..=10), 0..40),
    ) {
        let store = filled_store(&ops, 6);
        for slot in store.sequence(ItemCategory::Food).unwrap() {
            prop_assert!(slot.quantity <= STACK as u32);
        }
    }

    /// Property: swapping twice restores the sequence
    #[test]
    fn swap_is_an_involution(
        ops in prop::collection::vec((item_id(), 1u32..=10), 0..20),
        i in 0usize..6,
        j in 0usize..6,
    ) {
        let mut store = filled_store(&ops, 6);
        let before = store.clone();

        let mut manager = InventoryManager::new(&mut store, None);
        manager.swap(ItemCategory::Food, i, j).unwrap();
        manager.swap(ItemCategory::Food, i, j).unwrap();

        prop_assert_eq!(store, before);
    }

    /// Property: after sort no empty slot precedes a non-empty one
    #[test]
    fn sort_moves_empties_to_the_back(
        ops in prop::collection::vec((item_id(), 1u32..=10), 0..20),
        removals in prop::collection::vec((0usize..8, 1u32..=10), 0..8),
        mode in sort_mode(),
    ) {
        let table = table();
        let mut store = filled_store(&ops, 8);
        let mut manager = InventoryManager::new(&mut store, Some(&table));

        // 中间挖几个洞
        for (index, quantity) in removals {
            let current = manager.sequence(ItemCategory::Food).unwrap()[index].clone();
            let _ = manager.remove(&current, index, quantity);
        }
        manager.sort(ItemCategory::Food, mode);

        let slots = store.sequence(ItemCategory::Food).unwrap();
        let first_empty = slots.iter().position(Slot::is_empty).unwrap_or(slots.len());
        prop_assert!(slots[first_empty..].iter().all(Slot::is_empty));
    }

    /// Property: removal keeps identity until the slot runs out
    #[test]
    fn removal_keeps_identity_or_empties(have in 1u32..=10, take in 1u32..=12) {
        let table = table();
        let mut store = food_store(1);
        let mut manager = InventoryManager::new(&mut store, Some(&table));
        let bread = Slot::new("bread", ItemCategory::Food, have);

        manager.add_at_index(&bread, 0).unwrap();
        let removed = manager.remove(&bread, 0, take).unwrap();
        prop_assert_eq!(removed.quantity, take);

        let slot = &store.sequence(ItemCategory::Food).unwrap()[0];
        if take < have {
            prop_assert_eq!(slot, &Slot::new("bread", ItemCategory::Food, have - take));
        } else {
            prop_assert_eq!(slot, &Slot::empty());
        }
    }
}
