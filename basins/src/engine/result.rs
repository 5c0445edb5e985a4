use super::error::EngineError;

pub type EngineResult<T> = Result<T, EngineError>;
