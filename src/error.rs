use thiserror::Error;

/// Errors raised while building lists or selecting a cycle start strategy.
///
/// The cycle algorithms themselves never fail: an empty or acyclic list is
/// reported as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("cycle entry {index} is out of bounds for a list of {len} nodes")]
    EntryOutOfBounds { index: usize, len: usize },

    #[error("unknown cycle start strategy `{0}`")]
    UnknownStrategy(String),
}

impl ListError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        ListError::InvalidInput(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, ListError>;
