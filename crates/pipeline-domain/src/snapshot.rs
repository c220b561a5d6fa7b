//! Serializable form of a board.
//!
//! `BoardSnapshot` is the seed format a board is built from and the shape
//! it is exported in. Items carry an optional `status` for compatibility
//! with seeds that record the column on the item as well as in the column;
//! when present it must agree with membership.

use pipeline_core::{PipelineError, PipelineResult};
use serde::{Deserialize, Serialize};

use crate::{Column, ColumnId, Item};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemRecord {
    #[serde(flatten)]
    pub item: Item,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ColumnId>,
}

impl ItemRecord {
    pub fn new(item: Item, status: Option<ColumnId>) -> Self {
        Self { item, status }
    }
}

impl From<Item> for ItemRecord {
    fn from(item: Item) -> Self {
        Self { item, status: None }
    }
}

/// Point-in-time capture of a board: columns left to right, items in seed order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    #[serde(default)]
    pub columns: Vec<Column>,
    #[serde(default)]
    pub items: Vec<ItemRecord>,
}

impl BoardSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty() && self.items.is_empty()
    }

    pub fn from_json(json: &str) -> PipelineResult<Self> {
        serde_json::from_str(json).map_err(|e| PipelineError::Serialization(e.to_string()))
    }
}
