use bevy::prelude::*;

pub mod events;
pub mod resources;
pub mod states;

/// 核心插件：注册全局资源 / 事件 / 状态
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        use states::AppState;

        app
            .init_state::<AppState>()
            .add_event::<events::LogEvent>()
            // main 里读到的配置优先，这里只补默认值
            .init_resource::<resources::InventoryConfig>()
            .add_systems(Startup, events::announce_config);
    }
}
