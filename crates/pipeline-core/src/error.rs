use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl PipelineError {
    pub fn item_not_found(id: &str) -> Self {
        Self::NotFound(format!("item '{}'", id))
    }

    pub fn column_not_found(id: &str) -> Self {
        Self::NotFound(format!("column '{}'", id))
    }
}
