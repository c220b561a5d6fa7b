pub mod config;
pub mod cursor;
pub mod error;
pub mod notice;
pub mod result;

pub use config::AppConfig;
pub use cursor::ColumnCursor;
pub use error::PipelineError;
pub use notice::{Notice, NoticeLevel, NoticeLog};
pub use result::PipelineResult;
