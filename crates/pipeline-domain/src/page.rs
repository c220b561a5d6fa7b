//! The pipeline page: sole owner of the board.
//!
//! Everything that changes the board goes through `PipelinePage`, which
//! applies the mutation, records a notice for the user and leaves the
//! filtered view to be re-derived on the next read.

use chrono::{DateTime, Utc};
use pipeline_core::{AppConfig, Notice, NoticeLog, PipelineError, PipelineResult};
use serde::Serialize;

use crate::board::MoveReceipt;
use crate::drag::{DragController, DragEvent, DragOutcome, DropLayout, GridMetrics};
use crate::filter::{project, FilterSpec, Projection};
use crate::{Board, Item, ItemDraft, ItemId};

/// The signed-in user, handed to the page when it is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    pub user: String,
    pub started_at: DateTime<Utc>,
}

impl Session {
    pub fn new(user: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            started_at: Utc::now(),
        }
    }
}

pub struct PipelinePage {
    board: Board,
    session: Session,
    filter: FilterSpec,
    drag: DragController,
    notices: Vec<Notice>,
}

impl PipelinePage {
    pub fn new(board: Board, session: Session) -> Self {
        Self::with_config(board, session, &AppConfig::default())
    }

    pub fn with_config(board: Board, session: Session, config: &AppConfig) -> Self {
        tracing::debug!(user = %session.user, items = board.item_count(), "opened pipeline");
        Self {
            board,
            session,
            filter: FilterSpec::default(),
            drag: DragController::from_config(config),
            notices: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn filter(&self) -> &FilterSpec {
        &self.filter
    }

    /// Replace the filter. The layout changes with it, so a gesture in
    /// progress is cancelled.
    pub fn set_filter(&mut self, filter: FilterSpec) {
        if !self.drag.is_idle() {
            self.drag
                .handle(DragEvent::Cancel, &self.board, &DropLayout::default());
        }
        tracing::debug!(active = filter.has_active_filters(), "filter changed");
        self.filter = filter;
    }

    /// The board as currently filtered.
    pub fn visible(&self) -> Projection<'_> {
        project(&self.board, &self.filter)
    }

    /// Candidate drop rectangles for the visible cards.
    pub fn layout(&self, metrics: GridMetrics) -> DropLayout {
        DropLayout::grid(&self.visible(), metrics)
    }

    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    /// The card being dragged, for the overlay.
    pub fn dragged_item(&self) -> Option<&Item> {
        self.drag.dragged_item().and_then(|id| self.board.item(id))
    }

    pub fn move_item(&mut self, item_id: &str, column_id: &str) -> PipelineResult<MoveReceipt> {
        let receipt = self.board.move_item(item_id, column_id)?;
        self.notify(Notice::success(receipt.confirmation()));
        Ok(receipt)
    }

    pub fn add_item(&mut self, column_id: &str, draft: ItemDraft) -> PipelineResult<ItemId> {
        let id = self.board.add_item(column_id, draft)?;
        self.notify(Notice::success(format!("Deal added to {}", column_id)));
        Ok(id)
    }

    /// A click on a card (a press released before the drag threshold).
    pub fn open_item(&mut self, item_id: &str) -> PipelineResult<&Item> {
        if self.board.item(item_id).is_none() {
            return Err(PipelineError::item_not_found(item_id));
        }
        self.notify(Notice::info(format!("Viewing deal {}", item_id)));
        self.board
            .item(item_id)
            .ok_or_else(|| PipelineError::item_not_found(item_id))
    }

    /// Feed one gesture event through the drag controller and apply the
    /// result. The controller is back in Idle whenever a drop or click is
    /// returned, even if applying it fails.
    pub fn handle_drag(&mut self, event: DragEvent, layout: &DropLayout) -> PipelineResult<DragOutcome> {
        let outcome = self.drag.handle(event, &self.board, layout);
        match &outcome {
            DragOutcome::Dropped { item, column } => {
                self.move_item(item, column)?;
            }
            DragOutcome::Click { item } => {
                self.open_item(item)?;
            }
            _ => {}
        }
        Ok(outcome)
    }

    fn notify(&mut self, notice: Notice) {
        let notice = notice.with_actor(self.session.user.clone());
        tracing::debug!(message = %notice.message, "notice");
        self.push_notice(notice);
    }

    /// End the session and hand back the final board.
    pub fn close(self) -> Board {
        let elapsed = Utc::now() - self.session.started_at;
        tracing::info!(
            user = %self.session.user,
            elapsed_ms = elapsed.num_milliseconds(),
            notices = self.notices.len(),
            "session ended"
        );
        self.board
    }
}

impl NoticeLog for PipelinePage {
    fn push_notice(&mut self, notice: Notice) {
        self.notices.push(notice);
    }

    fn notices(&self) -> &[Notice] {
        &self.notices
    }
}
