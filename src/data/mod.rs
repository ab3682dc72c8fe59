pub mod catalog;
pub mod loader;
pub mod schema;

use bevy::asset::LoadState;
use bevy::prelude::*;
use catalog::ItemTable;
use schema::ItemList;
use crate::core::{events::LogEvent, resources::InventoryConfig, states::AppState};

// --------------------------- 资源 ---------------------------
#[derive(Resource, Default)]
pub struct ItemAssets {
    handle: Option<Handle<ItemList>>,
}

// --------------------------- 插件 ---------------------------
pub struct DataPlugin;
impl Plugin for DataPlugin {
    fn build(&self, app: &mut App) {
        app
            // 注册资产类型 & Loader
            .init_asset::<ItemList>()
            .register_asset_loader(loader::ItemListLoader)
            .init_resource::<ItemAssets>()
            // Loading 流程
            .add_systems(OnEnter(AppState::Loading), start_loading)
            .add_systems(
                Update,
                check_loaded.run_if(in_state(AppState::Loading)),
            );
    }
}

// --------------------------- 系统 ---------------------------
fn start_loading(
    mut item_assets: ResMut<ItemAssets>,
    asset_server: Res<AssetServer>,
    config: Res<InventoryConfig>,
) {
    info!("loading item catalog from {}", config.catalog_path);
    let handle: Handle<ItemList> = asset_server.load(config.catalog_path.clone());
    item_assets.handle = Some(handle);
}

/// 物品表加载完就建索引进入游戏；加载失败用空表继续（未知物品不能堆叠）
fn check_loaded(
    mut commands: Commands,
    mut next: ResMut<NextState<AppState>>,
    mut log: EventWriter<LogEvent>,
    item_assets: Res<ItemAssets>,
    lists: Res<Assets<ItemList>>,
    asset_server: Res<AssetServer>,
) {
    let Some(h) = &item_assets.handle else {
        return;
    };

    if let Some(list) = lists.get(h) {
        let table = ItemTable::from_list(list);
        log.write(LogEvent(format!("✔ Items loaded: {}", table.len())));
        commands.insert_resource(table);
        next.set(AppState::InGame);
    } else if let LoadState::Failed(err) = asset_server.load_state(h.id()) {
        warn!("item catalog failed to load: {err}");
        log.write(LogEvent("物品表加载失败，使用空物品表".into()));
        commands.insert_resource(ItemTable::default());
        next.set(AppState::InGame);
    }
}
