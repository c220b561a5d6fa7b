//! Drag gesture state machine.
//!
//! Turns a stream of pointer and keyboard events into at most one
//! "item dropped on column" outcome per gesture. The controller never
//! touches the board; the host applies a `Dropped` outcome itself.
//!
//! ```text
//! Idle --PointerDown--> Pending --moved past threshold--> Dragging
//!  ^                       |                                 |
//!  +------ PointerUp (click) / Cancel                        |
//!  +------------------ PointerUp / KeyDrop / Cancel ---------+
//! Idle --KeyPickUp--> Dragging
//! ```

use pipeline_core::config::DEFAULT_ACTIVATION_DISTANCE;
use pipeline_core::{AppConfig, ColumnCursor};
use serde::Serialize;

use super::collision::{closest_corners, DropTargetId, Point, Rect};
use super::layout::DropLayout;
use crate::{Board, ColumnId, ItemId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
enum DragInput {
    Pointer,
    Keyboard,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DragEvent {
    PointerDown { item: ItemId, at: Point },
    PointerMove { at: Point },
    PointerUp { at: Point },
    KeyPickUp { item: ItemId },
    KeyNext,
    KeyPrev,
    KeyDrop,
    Cancel,
}

#[derive(Debug, Clone, PartialEq)]
struct ActiveDrag {
    pub item: ItemId,
    pub source_column: ColumnId,
    pub input: DragInput,
    pub origin: Point,
    pub pointer: Point,
    pub over: Option<DropTargetId>,
    cursor: ColumnCursor,
}

#[derive(Debug, Clone, Default, PartialEq)]
enum DragPhase {
    #[default]
    Idle,
    /// Pressed but not yet moved far enough to count as a drag.
    Pending { item: ItemId, origin: Point },
    Dragging(ActiveDrag),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DragOutcome {
    Ignored,
    Armed { item: ItemId },
    Started { item: ItemId },
    Over { target: Option<DropTargetId> },
    Click { item: ItemId },
    Dropped { item: ItemId, column: ColumnId },
    Cancelled { item: ItemId },
}

#[derive(Debug, Clone)]
pub struct DragController {
    phase: DragPhase,
    activation_distance: f64,
}

impl Default for DragController {
    fn default() -> Self {
        Self::new(DEFAULT_ACTIVATION_DISTANCE)
    }
}

impl DragController {
    pub fn new(activation_distance: f64) -> Self {
        Self {
            phase: DragPhase::Idle,
            activation_distance,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.activation_distance)
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.phase, DragPhase::Idle)
    }

    /// The card shown in the drag overlay.
    pub fn dragged_item(&self) -> Option<&str> {
        match &self.phase {
            DragPhase::Dragging(drag) => Some(&drag.item),
            _ => None,
        }
    }

    pub fn over(&self) -> Option<&DropTargetId> {
        match &self.phase {
            DragPhase::Dragging(drag) => drag.over.as_ref(),
            _ => None,
        }
    }

    pub fn handle(&mut self, event: DragEvent, board: &Board, layout: &DropLayout) -> DragOutcome {
        let phase = std::mem::take(&mut self.phase);
        let (next, outcome) = match (phase, event) {
            // Only rendered cards can be grabbed.
            (DragPhase::Idle, DragEvent::PointerDown { item, at }) => {
                if layout.rect_of_item(&item).is_some() {
                    let outcome = DragOutcome::Armed { item: item.clone() };
                    (DragPhase::Pending { item, origin: at }, outcome)
                } else {
                    (DragPhase::Idle, DragOutcome::Ignored)
                }
            }
            (DragPhase::Idle, DragEvent::KeyPickUp { item }) => Self::pick_up(item, board, layout),

            (DragPhase::Pending { item, origin }, DragEvent::PointerMove { at }) => {
                if at.distance_to(origin) > self.activation_distance {
                    Self::activate(item, origin, at, board, layout)
                } else {
                    (DragPhase::Pending { item, origin }, DragOutcome::Ignored)
                }
            }
            (DragPhase::Pending { item, .. }, DragEvent::PointerUp { .. }) => {
                (DragPhase::Idle, DragOutcome::Click { item })
            }
            (DragPhase::Pending { item, .. }, DragEvent::Cancel) => {
                (DragPhase::Idle, DragOutcome::Cancelled { item })
            }

            (DragPhase::Dragging(mut drag), DragEvent::PointerMove { at })
                if drag.input == DragInput::Pointer =>
            {
                drag.pointer = at;
                drag.over = Self::resolve(&drag, layout);
                let outcome = DragOutcome::Over {
                    target: drag.over.clone(),
                };
                (DragPhase::Dragging(drag), outcome)
            }
            (DragPhase::Dragging(mut drag), DragEvent::PointerUp { at })
                if drag.input == DragInput::Pointer =>
            {
                drag.pointer = at;
                drag.over = Self::resolve(&drag, layout);
                (DragPhase::Idle, Self::finish(drag, board))
            }
            (DragPhase::Dragging(mut drag), DragEvent::KeyNext)
                if drag.input == DragInput::Keyboard =>
            {
                drag.cursor.next();
                Self::retarget(drag, board)
            }
            (DragPhase::Dragging(mut drag), DragEvent::KeyPrev)
                if drag.input == DragInput::Keyboard =>
            {
                drag.cursor.prev();
                Self::retarget(drag, board)
            }
            (DragPhase::Dragging(drag), DragEvent::KeyDrop) if drag.input == DragInput::Keyboard => {
                (DragPhase::Idle, Self::finish(drag, board))
            }
            (DragPhase::Dragging(drag), DragEvent::Cancel) => {
                (DragPhase::Idle, DragOutcome::Cancelled { item: drag.item })
            }

            // A second gesture while one is in progress, or input that does
            // not apply to the current phase.
            (phase, _) => (phase, DragOutcome::Ignored),
        };

        if outcome != DragOutcome::Ignored {
            tracing::debug!(?outcome, "drag transition");
        }
        self.phase = next;
        outcome
    }

    fn activate(
        item: ItemId,
        origin: Point,
        at: Point,
        board: &Board,
        layout: &DropLayout,
    ) -> (DragPhase, DragOutcome) {
        let Some(source) = board.status_of(&item) else {
            return (DragPhase::Idle, DragOutcome::Cancelled { item });
        };
        let start = board.column_index(source).unwrap_or_default();
        let mut drag = ActiveDrag {
            item,
            source_column: source.to_string(),
            input: DragInput::Pointer,
            origin,
            pointer: at,
            over: None,
            cursor: ColumnCursor::new(board.columns().len(), start),
        };
        drag.over = Self::resolve(&drag, layout);
        let outcome = DragOutcome::Started {
            item: drag.item.clone(),
        };
        (DragPhase::Dragging(drag), outcome)
    }

    fn pick_up(item: ItemId, board: &Board, layout: &DropLayout) -> (DragPhase, DragOutcome) {
        let (Some(source), Some(rect)) = (board.status_of(&item), layout.rect_of_item(&item)) else {
            return (DragPhase::Idle, DragOutcome::Ignored);
        };
        let start = board.column_index(source).unwrap_or_default();
        let origin = rect.center();
        let drag = ActiveDrag {
            source_column: source.to_string(),
            input: DragInput::Keyboard,
            origin,
            pointer: origin,
            over: Some(DropTargetId::column(source)),
            cursor: ColumnCursor::new(board.columns().len(), start),
            item,
        };
        let outcome = DragOutcome::Started {
            item: drag.item.clone(),
        };
        (DragPhase::Dragging(drag), outcome)
    }

    fn retarget(mut drag: ActiveDrag, board: &Board) -> (DragPhase, DragOutcome) {
        drag.over = drag
            .cursor
            .get()
            .and_then(|idx| board.columns().get(idx))
            .map(|column| DropTargetId::column(column.id.as_str()));
        let outcome = DragOutcome::Over {
            target: drag.over.clone(),
        };
        (DragPhase::Dragging(drag), outcome)
    }

    /// Where the dragged card would land if released now.
    fn resolve(drag: &ActiveDrag, layout: &DropLayout) -> Option<DropTargetId> {
        let (dx, dy) = drag.pointer.offset_from(drag.origin);
        let active = layout
            .rect_of_item(&drag.item)
            .map(|rect| rect.translated(dx, dy))
            .unwrap_or_else(|| Rect::at(drag.pointer));
        closest_corners(&active, layout.candidates()).cloned()
    }

    fn finish(drag: ActiveDrag, board: &Board) -> DragOutcome {
        match drag.over {
            Some(target)
                if target.item_id() != Some(drag.item.as_str())
                    && board.column(target.column_id()).is_some() =>
            {
                DragOutcome::Dropped {
                    column: target.column_id().to_string(),
                    item: drag.item,
                }
            }
            _ => DragOutcome::Cancelled { item: drag.item },
        }
    }
}
