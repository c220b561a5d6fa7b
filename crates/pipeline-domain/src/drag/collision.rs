//! Drop target resolution.
//!
//! Pure geometry: given the rectangle of the card being dragged and the
//! rectangles of every droppable, pick the one whose corners sit closest to
//! the dragged card's corners.

use serde::Serialize;

use crate::{ColumnId, ItemId};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    pub fn offset_from(self, origin: Point) -> (f64, f64) {
        (self.x - origin.x, self.y - origin.y)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Zero-sized rectangle at a point.
    pub fn at(point: Point) -> Self {
        Self::new(point.x, point.y, 0.0, 0.0)
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Top-left, top-right, bottom-left, bottom-right.
    pub fn corners(&self) -> [Point; 4] {
        let right = self.x + self.width;
        let bottom = self.y + self.height;
        [
            Point::new(self.x, self.y),
            Point::new(right, self.y),
            Point::new(self.x, bottom),
            Point::new(right, bottom),
        ]
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }
}

/// Something a card can be dropped on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DropTargetId {
    Column { column: ColumnId },
    Item { item: ItemId, column: ColumnId },
}

impl DropTargetId {
    pub fn column(column: impl Into<ColumnId>) -> Self {
        Self::Column {
            column: column.into(),
        }
    }

    pub fn item(item: impl Into<ItemId>, column: impl Into<ColumnId>) -> Self {
        Self::Item {
            item: item.into(),
            column: column.into(),
        }
    }

    /// The column a drop on this target lands in.
    pub fn column_id(&self) -> &str {
        match self {
            Self::Column { column } | Self::Item { column, .. } => column,
        }
    }

    pub fn item_id(&self) -> Option<&str> {
        match self {
            Self::Column { .. } => None,
            Self::Item { item, .. } => Some(item),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DropCandidate {
    pub target: DropTargetId,
    pub rect: Rect,
}

impl DropCandidate {
    pub fn new(target: DropTargetId, rect: Rect) -> Self {
        Self { target, rect }
    }
}

/// Mean distance between matching corners of two rectangles.
pub fn corner_distance(a: &Rect, b: &Rect) -> f64 {
    a.corners()
        .iter()
        .zip(b.corners().iter())
        .map(|(p, q)| p.distance_to(*q))
        .sum::<f64>()
        / 4.0
}

/// Closest-corners collision: the candidate whose corners are nearest the
/// dragged rectangle's corners. Ties go to the earlier candidate.
pub fn closest_corners<'a>(active: &Rect, candidates: &'a [DropCandidate]) -> Option<&'a DropTargetId> {
    let mut best: Option<(&DropCandidate, f64)> = None;
    for candidate in candidates {
        let distance = corner_distance(active, &candidate.rect);
        if !distance.is_finite() {
            continue;
        }
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((candidate, distance)),
        }
    }
    best.map(|(candidate, _)| &candidate.target)
}
