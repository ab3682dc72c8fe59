use bevy::asset::{io::Reader, ron, AssetLoader, LoadContext};
use std::future::Future;
use thiserror::Error;

use super::schema::ItemList;

/// 读 `*.items.ron` 物品表
#[derive(Default)]
pub struct ItemListLoader;

#[derive(Debug, Error)]
pub enum ItemListLoaderError {
    #[error("Could not load item list: {0}")]
    Io(#[from] std::io::Error),
    #[error("Could not parse item list RON: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("Item list is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

/// 解析物品表文本，加载器和测试共用
pub fn parse_item_list(text: &str) -> Result<ItemList, ItemListLoaderError> {
    Ok(ron::de::from_str(text)?)
}

impl AssetLoader for ItemListLoader {
    type Asset = ItemList;
    type Settings = ();
    type Error = ItemListLoaderError;

    fn load(
        &self,
        reader: &mut dyn Reader,
        _settings: &Self::Settings,
        _load_context: &mut LoadContext,
    ) -> impl Future<Output = Result<Self::Asset, Self::Error>> + Send {
        async move {
            let mut bytes = Vec::new();
            reader.read_to_end(&mut bytes).await?;

            let text = std::str::from_utf8(&bytes)?;
            parse_item_list(text)
        }
    }

    fn extensions(&self) -> &[&str] {
        &["items.ron"]
    }
}
