#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum IndexError {
    /// Unrecoverable fault in the current chapter, already location-prefixed.
    #[error("{0}")]
    Compile(String),
    #[error("heading level {level} is outside 1..={depth}")]
    LevelOutOfRange { level: usize, depth: usize },
    #[error("index builder is not bound to a chapter")]
    Unbound,
}

pub type Result<T, E = IndexError> = std::result::Result<T, E>;
