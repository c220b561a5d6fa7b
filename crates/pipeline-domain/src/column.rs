use serde::{Deserialize, Serialize};

use crate::item::ItemId;

pub type ColumnId = String;

/// One pipeline stage. `item_ids` is display order, top to bottom, and is
/// only mutated through the board so membership stays a partition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    #[serde(default)]
    item_ids: Vec<ItemId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Column {
    pub fn new(id: impl Into<ColumnId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            item_ids: Vec::new(),
            color: None,
        }
    }

    pub fn with_items<I, S>(mut self, item_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<ItemId>,
    {
        self.item_ids = item_ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn item_ids(&self) -> &[ItemId] {
        &self.item_ids
    }

    pub fn contains(&self, item_id: &str) -> bool {
        self.item_ids.iter().any(|id| id == item_id)
    }

    pub fn len(&self) -> usize {
        self.item_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.item_ids.is_empty()
    }

    pub(crate) fn remove_item(&mut self, item_id: &str) {
        self.item_ids.retain(|id| id != item_id);
    }

    pub(crate) fn push_item(&mut self, item_id: ItemId) {
        self.item_ids.push(item_id);
    }
}
