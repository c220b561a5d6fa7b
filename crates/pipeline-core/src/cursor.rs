//! Column cursor for keyboard-driven drags.
//!
//! Tracks which column (by left-to-right index) a keyboard drag currently
//! points at. Movement is clamped to the board edges rather than wrapping,
//! so holding an arrow key never jumps from the last stage back to the first.

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColumnCursor {
    index: Option<usize>,
    column_count: usize,
}

impl ColumnCursor {
    /// Cursor over `column_count` columns, starting at `start` (clamped).
    pub fn new(column_count: usize, start: usize) -> Self {
        let index = if column_count == 0 {
            None
        } else {
            Some(start.min(column_count - 1))
        };
        Self {
            index,
            column_count,
        }
    }

    pub fn get(&self) -> Option<usize> {
        self.index
    }

    /// Move one column to the right; stays on the last column.
    pub fn next(&mut self) {
        if let Some(idx) = self.index {
            self.index = Some((idx + 1).min(self.column_count - 1));
        }
    }

    /// Move one column to the left; stays on the first column.
    pub fn prev(&mut self) {
        if let Some(idx) = self.index {
            self.index = Some(idx.saturating_sub(1));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_has_no_position() {
        let mut cursor = ColumnCursor::new(0, 3);
        assert!(cursor.get().is_none());

        cursor.next();
        cursor.prev();
        assert!(cursor.get().is_none());
    }

    #[test]
    fn test_start_is_clamped() {
        let cursor = ColumnCursor::new(3, 10);
        assert_eq!(cursor.get(), Some(2));
    }

    #[test]
    fn test_next_stops_at_last_column() {
        let mut cursor = ColumnCursor::new(3, 1);
        cursor.next();
        assert_eq!(cursor.get(), Some(2));
        cursor.next();
        assert_eq!(cursor.get(), Some(2));
    }

    #[test]
    fn test_prev_stops_at_first_column() {
        let mut cursor = ColumnCursor::new(3, 1);
        cursor.prev();
        assert_eq!(cursor.get(), Some(0));
        cursor.prev();
        assert_eq!(cursor.get(), Some(0));
    }
}
