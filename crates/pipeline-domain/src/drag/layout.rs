//! Candidate drop rectangles.
//!
//! A renderer normally reports where columns and cards are on screen.
//! `DropLayout::grid` computes a plain grid instead so headless hosts and
//! tests get the same geometry every time.

use pipeline_core::AppConfig;
use serde::Serialize;

use super::collision::{DropCandidate, DropTargetId, Point, Rect};
use crate::filter::Projection;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GridMetrics {
    pub column_width: f64,
    pub card_height: f64,
    pub gap: f64,
    pub header_height: f64,
}

impl Default for GridMetrics {
    fn default() -> Self {
        Self::from(&AppConfig::default())
    }
}

impl From<&AppConfig> for GridMetrics {
    fn from(config: &AppConfig) -> Self {
        Self {
            column_width: config.column_width,
            card_height: config.card_height,
            gap: config.gap,
            header_height: 40.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DropLayout {
    candidates: Vec<DropCandidate>,
}

impl DropLayout {
    pub fn new(candidates: Vec<DropCandidate>) -> Self {
        Self { candidates }
    }

    /// Columns left to right, visible cards stacked under each header.
    ///
    /// Each column's rectangle covers its header, its cards and one empty
    /// card slot at the bottom to drop into.
    pub fn grid(projection: &Projection<'_>, metrics: GridMetrics) -> Self {
        let inset = metrics.gap / 2.0;
        let row = metrics.card_height + metrics.gap;
        let mut candidates = Vec::new();

        for (col_idx, column) in projection.columns.iter().enumerate() {
            let x = col_idx as f64 * (metrics.column_width + metrics.gap);
            let height = metrics.header_height + (column.items.len() + 1) as f64 * row;
            candidates.push(DropCandidate::new(
                DropTargetId::column(column.id),
                Rect::new(x, 0.0, metrics.column_width, height),
            ));

            for (row_idx, item) in column.items.iter().enumerate() {
                let y = metrics.header_height + row_idx as f64 * row;
                candidates.push(DropCandidate::new(
                    DropTargetId::item(item.id.as_str(), column.id),
                    Rect::new(
                        x + inset,
                        y,
                        metrics.column_width - metrics.gap,
                        metrics.card_height,
                    ),
                ));
            }
        }

        Self { candidates }
    }

    pub fn candidates(&self) -> &[DropCandidate] {
        &self.candidates
    }

    pub fn rect_of_item(&self, item_id: &str) -> Option<Rect> {
        self.candidates
            .iter()
            .find(|c| c.target.item_id() == Some(item_id))
            .map(|c| c.rect)
    }

    pub fn rect_of_column(&self, column_id: &str) -> Option<Rect> {
        self.candidates
            .iter()
            .find(|c| matches!(&c.target, DropTargetId::Column { column } if column == column_id))
            .map(|c| c.rect)
    }

    /// Pointer path that carries a card onto a column: press at the card's
    /// centre, release where the card lines up with the column's last card,
    /// or with the empty slot when the column shows nothing else.
    pub fn drag_path(&self, item_id: &str, column_id: &str) -> Option<(Point, Point)> {
        let card = self.rect_of_item(item_id)?;
        let column = self.rect_of_column(column_id)?;

        let last_other = self
            .candidates
            .iter()
            .rev()
            .find(|c| match &c.target {
                DropTargetId::Item { item, column } => column == column_id && item != item_id,
                DropTargetId::Column { .. } => false,
            })
            .map(|c| c.rect);

        let landing = match last_other {
            Some(rect) => rect.top_left(),
            None => {
                let inset = (column.width - card.width) / 2.0;
                Point::new(
                    column.x + inset,
                    column.y + column.height - card.height - 2.0 * inset,
                )
            }
        };

        let start = card.center();
        let (dx, dy) = landing.offset_from(card.top_left());
        Some((start, Point::new(start.x + dx, start.y + dy)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drag::collision::closest_corners;
    use crate::filter::{project, FilterSpec, PriorityChoice};
    use crate::sample::sample_board;
    use crate::Priority;

    fn metrics() -> GridMetrics {
        GridMetrics {
            column_width: 200.0,
            card_height: 80.0,
            gap: 20.0,
            header_height: 40.0,
        }
    }

    #[test]
    fn test_grid_positions() {
        let board = sample_board().unwrap();
        let layout = DropLayout::grid(&project(&board, &FilterSpec::default()), metrics());

        // 5 columns + 9 cards
        assert_eq!(layout.candidates().len(), 14);

        let discovery = layout.rect_of_column("discovery").unwrap();
        assert_eq!(discovery, Rect::new(220.0, 0.0, 200.0, 40.0 + 3.0 * 100.0));

        let deal_7 = layout.rect_of_item("deal-7").unwrap();
        assert_eq!(deal_7, Rect::new(230.0, 140.0, 180.0, 80.0));
    }

    #[test]
    fn test_filtered_cards_are_not_candidates() {
        let board = sample_board().unwrap();
        let spec = FilterSpec::new().with_priority(PriorityChoice::Only(Priority::High));
        let layout = DropLayout::grid(&project(&board, &spec), metrics());

        assert!(layout.rect_of_item("deal-4").is_none());
        assert!(layout.rect_of_item("deal-2").is_some());
        assert!(layout.rect_of_column("leads").is_some());
    }

    #[test]
    fn test_drag_path_lands_on_target_column() {
        let board = sample_board().unwrap();
        let layout = DropLayout::grid(&project(&board, &FilterSpec::default()), metrics());
        let card = layout.rect_of_item("deal-4").unwrap();

        for column in ["leads", "discovery", "proposal", "negotiation", "closed"] {
            let (start, end) = layout.drag_path("deal-4", column).unwrap();
            assert_eq!(start, card.center());

            let (dx, dy) = end.offset_from(start);
            let target = closest_corners(&card.translated(dx, dy), layout.candidates()).unwrap();
            assert_eq!(target.column_id(), column);
            assert_ne!(target.item_id(), Some("deal-4"));
        }
    }

    #[test]
    fn test_drag_path_into_empty_column() {
        let board = sample_board().unwrap();
        let spec = FilterSpec::new().with_priority(PriorityChoice::Only(Priority::Low));
        let layout = DropLayout::grid(&project(&board, &spec), metrics());
        let card = layout.rect_of_item("deal-4").unwrap();

        let (start, end) = layout.drag_path("deal-4", "closed").unwrap();
        let (dx, dy) = end.offset_from(start);
        let target = closest_corners(&card.translated(dx, dy), layout.candidates()).unwrap();

        assert_eq!(target, &DropTargetId::column("closed"));
    }

    #[test]
    fn test_drag_path_unknown_ids() {
        let board = sample_board().unwrap();
        let layout = DropLayout::grid(&project(&board, &FilterSpec::default()), metrics());
        assert!(layout.drag_path("ghost", "leads").is_none());
        assert!(layout.drag_path("deal-1", "won").is_none());
    }
}
