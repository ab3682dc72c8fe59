use bevy::prelude::*;

/// 物品表加载完之前不处理任何背包命令
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum AppState {
    #[default]
    Startup,
    /// 正在读物品表
    Loading,
    /// 背包可用
    InGame,
}
