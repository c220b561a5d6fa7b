//! User-visible confirmations.
//!
//! Mutations in the pipeline never print anything themselves; they hand a
//! [`Notice`] to whoever hosts the board, which decides how to show it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Success,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notice {
    pub timestamp: DateTime<Utc>,
    pub level: NoticeLevel,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actor: Option<String>,
}

impl Notice {
    pub fn new(level: NoticeLevel, message: String) -> Self {
        Self {
            timestamp: Utc::now(),
            level,
            message,
            actor: None,
        }
    }

    pub fn success(message: String) -> Self {
        Self::new(NoticeLevel::Success, message)
    }

    pub fn info(message: String) -> Self {
        Self::new(NoticeLevel::Info, message)
    }

    pub fn with_actor(mut self, actor: impl Into<String>) -> Self {
        self.actor = Some(actor.into());
        self
    }
}

pub trait NoticeLog {
    fn push_notice(&mut self, notice: Notice);
    fn notices(&self) -> &[Notice];

    /// The most recent notice, if any.
    fn last_notice(&self) -> Option<&Notice> {
        self.notices().last()
    }
}
