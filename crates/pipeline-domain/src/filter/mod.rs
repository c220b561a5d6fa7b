//! Item filtering functionality.
//!
//! Provides the filter settings, the matchers behind them and the
//! projection that narrows a board to what should be shown.

pub mod filter_spec;
pub mod item_filter;
pub mod projection;

pub use filter_spec::{AssigneeChoice, FilterSpec, PriorityChoice};
pub use item_filter::{AssigneeFilter, CompositeFilter, ItemFilter, PriorityFilter};
pub use projection::{project, ColumnView, Projection};
