use crate::error::PipelineError;

pub type PipelineResult<T> = Result<T, PipelineError>;
