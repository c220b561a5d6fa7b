pub mod board;
pub mod column;
pub mod drag;
pub mod filter;
pub mod item;
pub mod page;
pub mod sample;
pub mod snapshot;

pub use board::{Board, MoveReceipt};
pub use column::{Column, ColumnId};
pub use drag::{DragController, DragEvent, DragOutcome, DropLayout, DropTargetId, GridMetrics, Point};
pub use filter::{project, AssigneeChoice, FilterSpec, PriorityChoice, Projection};
pub use item::{Item, ItemDraft, ItemId, Priority};
pub use page::{PipelinePage, Session};
pub use sample::{sample_board, sample_snapshot};
pub use snapshot::{BoardSnapshot, ItemRecord};
