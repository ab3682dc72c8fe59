pub mod components;
pub mod error;
pub mod events;
pub mod manager;
pub mod sort;
pub mod store;
mod systems;

use bevy::prelude::*;
use crate::core::states::AppState;
use events::*;
use systems::*;

pub use components::{ItemCategory, ItemId, Slot};
pub use error::{InventoryError, InventoryResult};
pub use manager::InventoryManager;
pub use sort::SortMode;
pub use store::InventoryStore;

pub struct InventoryPlugin;
impl Plugin for InventoryPlugin {
    fn build(&self, app: &mut App) {
        app
            .add_event::<AddItemEvent>()
            .add_event::<RemoveItemEvent>()
            .add_event::<SwapSlotsEvent>()
            .add_event::<SortInventoryEvent>()
            .add_event::<ResizeInventoryEvent>()
            .add_event::<ListInventoryEvent>()
            .add_event::<ItemRemoved>()
            .add_systems(OnEnter(AppState::InGame), setup_store)
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
                    .chain()
                    .run_if(in_state(AppState::InGame)),
            );
    }
}
