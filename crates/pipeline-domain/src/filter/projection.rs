//! Visible subset of the board under a filter.
//!
//! A projection borrows the board, so it cannot outlive a mutation: callers
//! re-project after every change instead of holding stale results.

use serde::Serialize;
use std::collections::HashSet;

use super::{FilterSpec, ItemFilter};
use crate::{Board, Item};

#[derive(Debug, Clone, Serialize)]
pub struct ColumnView<'a> {
    pub id: &'a str,
    pub title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<&'a str>,
    pub items: Vec<&'a Item>,
}

impl ColumnView<'_> {
    pub fn count(&self) -> usize {
        self.items.len()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Projection<'a> {
    pub filter: FilterSpec,
    /// Matching items in seed order.
    pub items: Vec<&'a Item>,
    /// Every column, showing only matching members in display order.
    pub columns: Vec<ColumnView<'a>>,
}

impl<'a> Projection<'a> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn column(&self, column_id: &str) -> Option<&ColumnView<'a>> {
        self.columns.iter().find(|c| c.id == column_id)
    }
}

pub fn project<'a>(board: &'a Board, spec: &FilterSpec) -> Projection<'a> {
    let filter = spec.to_filter();
    let items: Vec<&Item> = board.items().iter().filter(|item| filter.matches(item)).collect();
    let visible: HashSet<&str> = items.iter().map(|item| item.id.as_str()).collect();

    let columns = board
        .columns()
        .iter()
        .map(|column| ColumnView {
            id: &column.id,
            title: &column.title,
            color: column.color.as_deref(),
            items: board
                .items_in(&column.id)
                .into_iter()
                .filter(|item| visible.contains(item.id.as_str()))
                .collect(),
        })
        .collect();

    Projection {
        filter: spec.clone(),
        items,
        columns,
    }
}
