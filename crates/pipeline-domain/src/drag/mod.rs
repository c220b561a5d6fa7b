//! Drag-and-drop between pipeline columns.
//!
//! `collision` resolves drop targets from geometry, `layout` supplies the
//! candidate rectangles and `controller` runs the gesture state machine.

pub mod collision;
pub mod controller;
pub mod layout;

pub use collision::{closest_corners, DropCandidate, DropTargetId, Point, Rect};
pub use controller::{DragController, DragEvent, DragOutcome};
pub use layout::{DropLayout, GridMetrics};
