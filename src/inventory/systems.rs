use super::{components::*, events::*, manager::InventoryManager, store::InventoryStore};
use crate::core::{events::LogEvent, resources::InventoryConfig};
use crate::data::catalog::{ItemCatalog, ItemTable};
use bevy::prelude::*;

/// 按 id（或名称）在物品表里找到规范 id 和分类；查不到就原样使用
fn incoming(table: Option<&ItemTable>, id: &str, category: Option<ItemCategory>, count: u32) -> Slot {
    match table.and_then(|t| t.find(id)) {
        Some(entry) => Slot::new(entry.id.clone(), category.unwrap_or(entry.category), count),
        None => Slot::new(id, category.unwrap_or_default(), count),
    }
}

fn display_name(table: Option<&ItemTable>, slot: &Slot) -> String {
    table
        .and_then(|t| t.entry(&slot.item_id))
        .map_or_else(|| slot.item_id.to_string(), |e| e.name.clone())
}

fn catalog(table: Option<&ItemTable>) -> Option<&dyn ItemCatalog> {
    table.map(|t| t as &dyn ItemCatalog)
}

/// 进入游戏时按配置建好背包（已经有了就不动）
pub fn setup_store(
    mut commands: Commands,
    config: Res<InventoryConfig>,
    existing: Option<Res<InventoryStore>>,
) {
    if existing.is_some() {
        return;
    }
    let store = InventoryStore::from_config(&config);
    info!("inventories ready: {:?}", store.categories());
    commands.insert_resource(store);
}

/// 处理"give / put"——往背包里塞物品
pub fn add_item(
    mut ev_add: EventReader<AddItemEvent>,
    mut store: ResMut<InventoryStore>,
    table: Option<Res<ItemTable>>,
    mut log: EventWriter<LogEvent>,
) {
    let table = table.as_deref();
    for ev in ev_add.read() {
        let item = incoming(table, &ev.id, ev.category, ev.count);
        let mut manager = InventoryManager::new(&mut store, catalog(table));

        let result = match ev.placement {
            Placement::Anywhere { start } => manager.add_anywhere(&item, start),
            Placement::AtIndex(index) => manager.add_at_index(&item, index).map(|()| index),
        };

        let name = display_name(table, &item);
        match result {
            Ok(index) => {
                info!("added {} x{} to {}[{index}]", item.item_id, item.quantity, item.category);
                log.write(LogEvent(format!(
                    "获得 {name} ×{} → {}[{index}]",
                    item.quantity, item.category
                )));
            }
            Err(e) => {
                warn!("add failed: {e}");
                log.write(LogEvent(format!("无法放入 {name}: {e}")));
            }
        }
    }
}

/// 处理"take"——从指定格子取出
pub fn remove_item(
    mut ev_remove: EventReader<RemoveItemEvent>,
    mut store: ResMut<InventoryStore>,
    table: Option<Res<ItemTable>>,
    mut removed: EventWriter<ItemRemoved>,
    mut log: EventWriter<LogEvent>,
) {
    let table = table.as_deref();
    for ev in ev_remove.read() {
        let item = incoming(table, &ev.id, ev.category, ev.count);
        let mut manager = InventoryManager::new(&mut store, catalog(table));

        match manager.remove(&item, ev.index, ev.count) {
            Ok(taken) => {
                log.write(LogEvent(format!(
                    "取出 {} ×{} ← {}[{}]",
                    display_name(table, &taken),
                    taken.quantity,
                    item.category,
                    ev.index
                )));
                removed.write(ItemRemoved {
                    index: ev.index,
                    item: taken,
                });
            }
            Err(e) => {
                warn!("remove failed: {e}");
                log.write(LogEvent(format!("无法取出: {e}")));
            }
        }
    }
}

pub fn swap_slots(
    mut ev_swap: EventReader<SwapSlotsEvent>,
    mut store: ResMut<InventoryStore>,
    mut log: EventWriter<LogEvent>,
) {
    for ev in ev_swap.read() {
        let mut manager = InventoryManager::new(&mut store, None);
        match manager.swap(ev.category, ev.a, ev.b) {
            Ok(()) => {
                log.write(LogEvent(format!("交换 {}[{}] ⇄ [{}]", ev.category, ev.a, ev.b)));
            }
            Err(e) => {
                warn!("swap failed: {e}");
                log.write(LogEvent(format!("无法交换: {e}")));
            }
        }
    }
}

pub fn sort_inventory(
    mut ev_sort: EventReader<SortInventoryEvent>,
    mut store: ResMut<InventoryStore>,
    mut log: EventWriter<LogEvent>,
) {
    for ev in ev_sort.read() {
        if !store.is_mapped(ev.category) {
            log.write(LogEvent(format!("分类 {} 没有背包", ev.category)));
        }
        InventoryManager::new(&mut store, None).sort(ev.category, ev.mode);
        if store.is_mapped(ev.category) {
            log.write(LogEvent(format!("已整理 {} ({})", ev.category, ev.mode)));
        }
    }
}

pub fn resize_inventory(
    mut ev_resize: EventReader<ResizeInventoryEvent>,
    mut store: ResMut<InventoryStore>,
    mut log: EventWriter<LogEvent>,
) {
    for ev in ev_resize.read() {
        let mut manager = InventoryManager::new(&mut store, None);
        let result = match ev.capacity {
            Some(capacity) => manager
                .set_capacity(ev.category, capacity)
                .and_then(|_| manager.resize(ev.category)),
            None => manager.resize(ev.category),
        };

        match result {
            Ok(size) => {
                log.write(LogEvent(format!("{} 背包现在有 {size} 格", ev.category)));
            }
            Err(e) => {
                warn!("resize failed: {e}");
                log.write(LogEvent(format!("无法调整容量: {e}")));
            }
        }
    }
}

/// 打印背包内容
pub fn print_inventory(
    mut ev_list: EventReader<ListInventoryEvent>,
    store: Res<InventoryStore>,
    table: Option<Res<ItemTable>>,
    mut log: EventWriter<LogEvent>,
) {
    let table = table.as_deref();
    for ev in ev_list.read() {
        let categories = ev
            .category
            .map_or_else(|| store.categories(), |c| vec![c]);

        for category in categories {
            let Some(slots) = store.sequence(category) else {
                log.write(LogEvent(format!("分类 {category} 没有背包")));
                continue;
            };

            match ev.format {
                ListFormat::Json => match serde_json::to_string_pretty(slots) {
                    Ok(json) => {
                        log.write(LogEvent(json));
                    }
                    Err(e) => warn!("could not serialize {category} inventory: {e}"),
                },
                ListFormat::Text => {
                    let used = slots.iter().filter(|s| !s.is_empty()).count();
                    let mut lines = vec![format!(
                        "== {category} {used}/{} (容量 {}) ==",
                        slots.len(),
                        store.capacity(category)
                    )];
                    for (idx, slot) in slots.iter().enumerate().filter(|(_, s)| !s.is_empty()) {
                        lines.push(format!(
                            "[{idx}] {} ×{} (id={})",
                            display_name(table, slot),
                            slot.quantity,
                            slot.item_id
                        ));
                    }
                    if used == 0 {
                        lines.push("  (empty)".into());
                    }
                    log.write(LogEvent(lines.join("\n")));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::schema::ItemEntry;
    use crate::inventory::sort::SortMode;

    fn table() -> ItemTable {
        let mut table = ItemTable::default();
        table.insert(ItemEntry {
            id: "apple".into(),
            name: "Apple".into(),
            description: String::new(),
            category: ItemCategory::Food,
            stack_size: 10,
        });
        table
    }

    fn test_app(store: InventoryStore) -> App {
        let mut app = App::new();
        app.add_event::<LogEvent>()
            .add_event::<AddItemEvent>()
            .add_event::<RemoveItemEvent>()
            .add_event::<SwapSlotsEvent>()
            .add_event::<SortInventoryEvent>()
            .add_event::<ResizeInventoryEvent>()
            .add_event::<ListInventoryEvent>()
            .add_event::<ItemRemoved>()
            .insert_resource(store)
            .insert_resource(table())
            .add_systems(
                Update,
                (
                    add_item,
                    remove_item,
                    swap_slots,
                    sort_inventory,
                    resize_inventory,
                    print_inventory,
                )
                    .chain(),
            );
        app
    }

    fn food_slots(app: &App) -> Vec<Slot> {
        app.world()
            .resource::<InventoryStore>()
            .sequence(ItemCategory::Food)
            .unwrap()
            .to_vec()
    }

    fn logs(app: &App) -> Vec<String> {
        app.world()
            .resource::<Events<LogEvent>>()
            .iter_current_update_events()
            .map(|e| e.0.clone())
            .collect()
    }

    fn give(id: &str, count: u32) -> AddItemEvent {
        AddItemEvent {
            id: id.into(),
            count,
            category: None,
            placement: Placement::Anywhere { start: 0 },
        }
    }

    #[test]
    fn give_resolves_category_and_merges() {
        let mut app = test_app(InventoryStore::default());
        app.world_mut().send_event(give("APPLE", 4));
        app.world_mut().send_event(give("apple", 8));
        app.update();

        let slots = food_slots(&app);
        assert_eq!(slots[0], Slot::new("apple", ItemCategory::Food, 4));
        assert_eq!(slots[1], Slot::new("apple", ItemCategory::Food, 8));
        assert!(logs(&app)[0].contains("Apple"));
    }

    #[test]
    fn take_emits_removed_record() {
        let mut app = test_app(InventoryStore::default());
        app.world_mut().send_event(give("apple", 4));
        app.update();

        app.world_mut().send_event(RemoveItemEvent {
            id: "apple".into(),
            category: None,
            index: 0,
            count: 4,
        });
        app.update();

        let removed: Vec<_> = app
            .world()
            .resource::<Events<ItemRemoved>>()
            .iter_current_update_events()
            .cloned()
            .collect();
        assert_eq!(
            removed,
            vec![ItemRemoved {
                index: 0,
                item: Slot::new("apple", ItemCategory::Food, 4),
            }]
        );
        assert_eq!(food_slots(&app)[0], Slot::empty());
    }

    #[test]
    fn unmapped_category_is_logged_not_fatal() {
        let mut app = test_app(InventoryStore::default());
        app.world_mut().send_event(AddItemEvent {
            id: "short_sword".into(),
            count: 1,
            category: Some(ItemCategory::Weapon),
            placement: Placement::AtIndex(0),
        });
        app.world_mut().send_event(SortInventoryEvent {
            category: ItemCategory::Weapon,
            mode: SortMode::ByNameAscending,
        });
        app.update();

        let logs = logs(&app);
        assert_eq!(logs.len(), 2);
        assert!(logs[0].contains("weapon"));
        assert!(logs[1].contains("没有背包"));
    }

    #[test]
    fn resize_and_list() {
        let mut app = test_app(InventoryStore::default());
        app.world_mut().send_event(AddItemEvent {
            id: "apple".into(),
            count: 2,
            category: None,
            placement: Placement::AtIndex(5),
        });
        app.update();

        app.world_mut().send_event(ResizeInventoryEvent {
            category: ItemCategory::Food,
            capacity: Some(3),
        });
        app.world_mut().send_event(ListInventoryEvent::default());
        app.update();

        assert_eq!(food_slots(&app).len(), 3);
        let logs = logs(&app);
        assert!(logs[0].contains('3'));
        assert!(logs[1].contains("(empty)"));
    }

    #[test]
    fn json_listing_is_valid_json() {
        let mut app = test_app(InventoryStore::default());
        app.world_mut().send_event(give("apple", 1));
        app.update();

        app.world_mut().send_event(ListInventoryEvent {
            category: Some(ItemCategory::Food),
            format: ListFormat::Json,
        });
        app.update();

        let json = &logs(&app)[0];
        let slots: Vec<Slot> = serde_json::from_str(json).unwrap();
        assert_eq!(slots.len(), 8);
        assert_eq!(slots[0].quantity, 1);
    }
}
