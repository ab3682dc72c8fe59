use bevy::prelude::*;

use super::resources::InventoryConfig;

/// 给终端看的一行输出
#[derive(Event, Debug, Clone)]
pub struct LogEvent(pub String);

/// 启动时报一下配置
pub fn announce_config(mut writer: EventWriter<LogEvent>, config: Res<InventoryConfig>) {
    let sizes: Vec<String> = config
        .capacities
        .iter()
        .map(|(category, size)| format!("{category}={size}"))
        .collect();
    info!("inventory config: catalog={} capacities=[{}]", config.catalog_path, sizes.join(", "));
    writer.write(LogEvent(format!("背包配置: {}", sizes.join(", "))));
}
