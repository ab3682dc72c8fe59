//! 分类背包：定长格子、同种物品堆叠、取出 / 交换 / 整理 / 调整容量。
//!
//! 核心逻辑在 [`inventory`]（不依赖 ECS 调度，可以直接拿来用）；
//! 其余模块是把它挂进 Bevy 应用的外壳。

pub mod core;
pub mod data;
pub mod interface;
pub mod inventory;
