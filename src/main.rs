use anyhow::{anyhow, Result};
use bevy::prelude::*;

use slot_inventory::core::{events::LogEvent, resources::InventoryConfig, states, CorePlugin};
use slot_inventory::data::DataPlugin;
use slot_inventory::interface::debug_cli::DebugCliPlugin;
use slot_inventory::inventory::InventoryPlugin;

fn main() -> Result<()> {
    let config = InventoryConfig::load_or_default(InventoryConfig::DEFAULT_PATH)?;

    let exit = App::new()
        .insert_resource(config)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                visible: false,
                ..default()
            }),   // 不显示窗口，只用终端
            ..default()
        }))
        .add_plugins((CorePlugin, DataPlugin, InventoryPlugin, DebugCliPlugin))
        .add_systems(Update, forward_log_event)
        .add_systems(Startup, |mut next: ResMut<NextState<states::AppState>>| {
            next.set(states::AppState::Loading);
        })
        .run();

    match exit {
        AppExit::Success => Ok(()),
        AppExit::Error(code) => Err(anyhow!("exited with code {code}")),
    }
}

fn forward_log_event(mut reader: EventReader<LogEvent>) {
    for e in reader.read() {
        println!("> {}", e.0);
    }
}
