//! The pipeline board: columns left to right, deals by id.
//!
//! Column membership is the single source of truth for where a deal sits.
//! Every mutation checks all of its preconditions before touching state, so
//! a rejected call leaves the board exactly as it was.

use pipeline_core::{PipelineError, PipelineResult};
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

use crate::snapshot::{BoardSnapshot, ItemRecord};
use crate::{Column, ColumnId, Item, ItemDraft, ItemId};

#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    columns: Vec<Column>,
    items: Vec<Item>,
    index: HashMap<ItemId, usize>,
}

/// What a successful move did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveReceipt {
    pub item_id: ItemId,
    pub from_column: ColumnId,
    pub to_column: ColumnId,
    pub to_title: String,
}

impl MoveReceipt {
    /// Dropped back into the column it came from (re-appended at the end).
    pub fn is_reorder(&self) -> bool {
        self.from_column == self.to_column
    }

    pub fn confirmation(&self) -> String {
        format!("Deal moved to {}", capitalize(&self.to_column))
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl Board {
    /// Build a board, checking that the columns partition the items.
    pub fn new(columns: Vec<Column>, items: Vec<Item>) -> PipelineResult<Self> {
        let mut column_ids = HashSet::new();
        for column in &columns {
            if column.id.is_empty() {
                return Err(PipelineError::Validation("column id must not be empty".to_string()));
            }
            if !column_ids.insert(column.id.as_str()) {
                return Err(PipelineError::Validation(format!(
                    "duplicate column id '{}'",
                    column.id
                )));
            }
        }

        let mut index = HashMap::with_capacity(items.len());
        for (pos, item) in items.iter().enumerate() {
            if item.id.is_empty() {
                return Err(PipelineError::Validation("item id must not be empty".to_string()));
            }
            if index.insert(item.id.clone(), pos).is_some() {
                return Err(PipelineError::Validation(format!(
                    "duplicate item id '{}'",
                    item.id
                )));
            }
        }

        let board = Self {
            columns,
            items,
            index,
        };
        board.check_invariants()?;
        Ok(board)
    }

    /// Build a board from a seed, rejecting items whose recorded status
    /// disagrees with the column that lists them.
    pub fn from_snapshot(snapshot: BoardSnapshot) -> PipelineResult<Self> {
        let mut statuses = Vec::new();
        let items = snapshot
            .items
            .into_iter()
            .map(|record| {
                if let Some(status) = record.status {
                    statuses.push((record.item.id.clone(), status));
                }
                record.item
            })
            .collect();

        let board = Self::new(snapshot.columns, items)?;

        for (item_id, status) in statuses {
            let actual = board.status_of(&item_id).unwrap_or_default();
            if actual != status {
                return Err(PipelineError::Validation(format!(
                    "item '{}' has status '{}' but is listed in column '{}'",
                    item_id, status, actual
                )));
            }
        }

        Ok(board)
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            columns: self.columns.clone(),
            items: self
                .items
                .iter()
                .map(|item| {
                    ItemRecord::new(item.clone(), self.status_of(&item.id).map(str::to_string))
                })
                .collect(),
        }
    }

    /// Verify that every item sits in exactly one column and that columns
    /// only list known items.
    pub fn check_invariants(&self) -> PipelineResult<()> {
        let mut placed: HashMap<&str, &str> = HashMap::with_capacity(self.items.len());
        for column in &self.columns {
            for item_id in column.item_ids() {
                if !self.index.contains_key(item_id) {
                    return Err(PipelineError::Validation(format!(
                        "column '{}' lists unknown item '{}'",
                        column.id, item_id
                    )));
                }
                if let Some(previous) = placed.insert(item_id, &column.id) {
                    return Err(PipelineError::Validation(format!(
                        "item '{}' is listed in both '{}' and '{}'",
                        item_id, previous, column.id
                    )));
                }
            }
        }

        if let Some(unplaced) = self
            .items
            .iter()
            .find(|item| !placed.contains_key(item.id.as_str()))
        {
            return Err(PipelineError::Validation(format!(
                "item '{}' is not in any column",
                unplaced.id
            )));
        }

        Ok(())
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, column_id: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == column_id)
    }

    pub fn column_index(&self, column_id: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.id == column_id)
    }

    /// Items in seed order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item(&self, item_id: &str) -> Option<&Item> {
        self.index.get(item_id).map(|&pos| &self.items[pos])
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Items of a column in display order.
    pub fn items_in(&self, column_id: &str) -> Vec<&Item> {
        self.column(column_id)
            .map(|column| {
                column
                    .item_ids()
                    .iter()
                    .filter_map(|id| self.item(id))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// The id of the column currently holding the item.
    pub fn status_of(&self, item_id: &str) -> Option<&str> {
        self.columns
            .iter()
            .find(|c| c.contains(item_id))
            .map(|c| c.id.as_str())
    }

    /// Distinct assignee names in the order they first appear.
    pub fn assignees(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.items
            .iter()
            .filter_map(|item| item.assignee.as_deref())
            .filter(|name| seen.insert(*name))
            .collect()
    }

    /// Move an item to the end of a column.
    ///
    /// Moving into the column the item already occupies re-appends it at the
    /// end. Unknown ids are rejected without touching the board.
    pub fn move_item(&mut self, item_id: &str, target_column_id: &str) -> PipelineResult<MoveReceipt> {
        if !self.index.contains_key(item_id) {
            tracing::warn!(item_id, target_column_id, "rejected move of unknown item");
            return Err(PipelineError::item_not_found(item_id));
        }
        let Some(target) = self.column_index(target_column_id) else {
            tracing::warn!(item_id, target_column_id, "rejected move to unknown column");
            return Err(PipelineError::column_not_found(target_column_id));
        };
        let source = self
            .columns
            .iter()
            .position(|c| c.contains(item_id))
            .ok_or_else(|| {
                PipelineError::Validation(format!("item '{}' is not in any column", item_id))
            })?;

        let from_column = self.columns[source].id.clone();
        self.columns[source].remove_item(item_id);
        self.columns[target].push_item(item_id.to_string());

        let receipt = MoveReceipt {
            item_id: item_id.to_string(),
            from_column,
            to_column: self.columns[target].id.clone(),
            to_title: self.columns[target].title.clone(),
        };
        tracing::info!(
            item_id,
            from = %receipt.from_column,
            to = %receipt.to_column,
            reorder = receipt.is_reorder(),
            "moved item"
        );
        Ok(receipt)
    }

    /// Create a deal at the end of a column and return its new id.
    pub fn add_item(&mut self, column_id: &str, draft: ItemDraft) -> PipelineResult<ItemId> {
        if draft.title.trim().is_empty() {
            return Err(PipelineError::Validation("title must not be empty".to_string()));
        }
        let target = self
            .column_index(column_id)
            .ok_or_else(|| PipelineError::column_not_found(column_id))?;

        let id = format!("deal-{}", Uuid::new_v4());
        self.index.insert(id.clone(), self.items.len());
        self.items.push(draft.into_item(id.clone()));
        self.columns[target].push_item(id.clone());

        tracing::info!(item_id = %id, column_id, "added item");
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Priority;

    fn two_column_board() -> Board {
        Board::new(
            vec![
                Column::new("leads", "Leads").with_items(["deal-1", "deal-4", "deal-6"]),
                Column::new("discovery", "Discovery").with_items(["deal-2"]),
            ],
            vec![
                Item::new("deal-1", "Acme"),
                Item::new("deal-2", "TechStart"),
                Item::new("deal-4", "Global Solutions"),
                Item::new("deal-6", "Local Shop"),
            ],
        )
        .unwrap()
    }

    fn assert_partition(board: &Board) {
        board.check_invariants().unwrap();
        for item in board.items() {
            let holders: Vec<_> = board
                .columns()
                .iter()
                .filter(|c| c.contains(&item.id))
                .collect();
            assert_eq!(holders.len(), 1, "{} held by {} columns", item.id, holders.len());
            assert_eq!(board.status_of(&item.id), Some(holders[0].id.as_str()));
        }
    }

    #[test]
    fn test_move_between_columns() {
        let mut board = two_column_board();

        let receipt = board.move_item("deal-4", "discovery").unwrap();

        assert_eq!(board.column("leads").unwrap().item_ids(), ["deal-1", "deal-6"]);
        assert_eq!(board.column("discovery").unwrap().item_ids(), ["deal-2", "deal-4"]);
        assert_eq!(board.status_of("deal-4"), Some("discovery"));
        assert_eq!(receipt.from_column, "leads");
        assert_eq!(receipt.to_title, "Discovery");
        assert!(!receipt.is_reorder());
        assert_partition(&board);
    }

    #[test]
    fn test_move_within_same_column_reappends() {
        let mut board = two_column_board();

        let receipt = board.move_item("deal-1", "leads").unwrap();

        assert_eq!(board.column("leads").unwrap().item_ids(), ["deal-4", "deal-6", "deal-1"]);
        assert!(!board.column("discovery").unwrap().contains("deal-1"));
        assert!(receipt.is_reorder());
        assert_partition(&board);
    }

    #[test]
    fn test_move_unknown_item_leaves_board_untouched() {
        let mut board = two_column_board();
        let before = board.clone();

        let err = board.move_item("nonexistent-id", "discovery").unwrap_err();

        assert!(matches!(err, PipelineError::NotFound(_)));
        assert_eq!(board, before);
    }

    #[test]
    fn test_move_to_unknown_column_leaves_board_untouched() {
        let mut board = two_column_board();
        let before = board.clone();

        let err = board.move_item("deal-4", "won").unwrap_err();

        assert!(matches!(err, PipelineError::NotFound(_)));
        assert_eq!(board, before);
    }

    #[test]
    fn test_partition_holds_across_move_sequence() {
        let mut board = two_column_board();
        let moves = [
            ("deal-1", "discovery"),
            ("deal-2", "leads"),
            ("deal-1", "discovery"),
            ("ghost", "leads"),
            ("deal-6", "discovery"),
            ("deal-4", "nowhere"),
            ("deal-6", "leads"),
        ];
        for (item, column) in moves {
            let _ = board.move_item(item, column);
            assert_partition(&board);
        }
        assert_eq!(board.column("leads").unwrap().item_ids(), ["deal-4", "deal-2", "deal-6"]);
        assert_eq!(board.column("discovery").unwrap().item_ids(), ["deal-1"]);
    }

    #[test]
    fn test_confirmation_capitalizes_column_id() {
        let mut board = two_column_board();
        let receipt = board.move_item("deal-4", "discovery").unwrap();
        assert_eq!(receipt.confirmation(), "Deal moved to Discovery");
    }

    #[test]
    fn test_new_rejects_item_in_two_columns() {
        let err = Board::new(
            vec![
                Column::new("a", "A").with_items(["x"]),
                Column::new("b", "B").with_items(["x"]),
            ],
            vec![Item::new("x", "X")],
        )
        .unwrap_err();
        assert!(matches!(err, PipelineError::Validation(_)));
    }

    #[test]
    fn test_new_rejects_unplaced_item() {
        let result = Board::new(
            vec![Column::new("a", "A")],
            vec![Item::new("x", "X")],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_new_rejects_unknown_member() {
        let result = Board::new(vec![Column::new("a", "A").with_items(["ghost"])], vec![]);
        assert!(result.is_err());
    }

    #[test]
    fn test_new_rejects_duplicate_ids() {
        assert!(Board::new(vec![Column::new("a", "A"), Column::new("a", "B")], vec![]).is_err());
        assert!(Board::new(
            vec![Column::new("a", "A").with_items(["x"])],
            vec![Item::new("x", "X"), Item::new("x", "Y")],
        )
        .is_err());
    }

    #[test]
    fn test_from_snapshot_checks_status() {
        let mut snapshot = two_column_board().snapshot();
        assert!(Board::from_snapshot(snapshot.clone()).is_ok());

        snapshot.items[0].status = Some("discovery".to_string());
        let err = Board::from_snapshot(snapshot).unwrap_err();
        assert!(err.to_string().contains("deal-1"));
    }

    #[test]
    fn test_snapshot_exports_derived_status() {
        let mut board = two_column_board();
        board.move_item("deal-4", "discovery").unwrap();

        let snapshot = board.snapshot();
        let record = snapshot.items.iter().find(|r| r.item.id == "deal-4").unwrap();
        assert_eq!(record.status.as_deref(), Some("discovery"));
        assert_eq!(Board::from_snapshot(snapshot).unwrap(), board);
    }

    #[test]
    fn test_items_in_follows_column_order() {
        let board = two_column_board();
        let titles: Vec<_> = board.items_in("leads").iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, ["Acme", "Global Solutions", "Local Shop"]);
        assert!(board.items_in("missing").is_empty());
    }

    #[test]
    fn test_assignees_are_unique_in_first_seen_order() {
        let board = Board::new(
            vec![Column::new("a", "A").with_items(["1", "2", "3", "4"])],
            vec![
                Item::new("1", "One").with_assignee("John Doe"),
                Item::new("2", "Two").with_assignee("Jane Smith"),
                Item::new("3", "Three"),
                Item::new("4", "Four").with_assignee("John Doe"),
            ],
        )
        .unwrap();
        assert_eq!(board.assignees(), ["John Doe", "Jane Smith"]);
    }

    #[test]
    fn test_add_item_appends_to_column() {
        let mut board = two_column_board();
        let mut draft = ItemDraft::new("  New Co - Pilot  ");
        draft.priority = Some(Priority::High);

        let id = board.add_item("discovery", draft).unwrap();

        assert!(id.starts_with("deal-"));
        assert_eq!(board.column("discovery").unwrap().item_ids().last(), Some(&id));
        assert_eq!(board.item(&id).unwrap().title, "New Co - Pilot");
        assert_eq!(board.item_count(), 5);
        assert_partition(&board);
    }

    #[test]
    fn test_add_item_rejects_bad_input() {
        let mut board = two_column_board();
        let before = board.clone();

        assert!(board.add_item("discovery", ItemDraft::new("   ")).is_err());
        assert!(matches!(
            board.add_item("won", ItemDraft::new("Deal")),
            Err(PipelineError::NotFound(_))
        ));
        assert_eq!(board, before);
    }
}
