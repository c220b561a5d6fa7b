use pipeline_core::{AppConfig, PipelineResult};
use pipeline_domain::{sample_board, Board, BoardSnapshot, PipelinePage, Session};
use std::path::Path;

pub struct CliContext {
    pub page: PipelinePage,
    pub config: AppConfig,
}

impl CliContext {
    pub fn load(file: Option<&Path>, config: Option<&Path>, user: &str) -> PipelineResult<Self> {
        let config = match config {
            Some(path) => AppConfig::load_from(path)?,
            None => AppConfig::load(),
        };

        let board = match file {
            Some(path) => {
                let content = std::fs::read_to_string(path)?;
                let board = Board::from_snapshot(BoardSnapshot::from_json(&content)?)?;
                tracing::info!("Loaded board from {}", path.display());
                board
            }
            None => sample_board()?,
        };

        let page = PipelinePage::with_config(board, Session::new(user), &config);
        Ok(Self { page, config })
    }
}
