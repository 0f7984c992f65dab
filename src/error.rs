//! Error Types
//!
//! Errors raised by form validation, id allocation and configuration loading.

/// Common result type for todo operations
pub type TodoResult<T> = Result<T, TodoError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoError {
    /// Form buffer was empty or whitespace-only
    EmptyText,
    /// No id left to hand out
    IdsExhausted,
    /// Page-embedded configuration could not be used
    InvalidConfig(String),
}

impl std::fmt::Display for TodoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TodoError::EmptyText => write!(f, "Todo text is empty"),
            TodoError::IdsExhausted => write!(f, "No todo ids left"),
            TodoError::InvalidConfig(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for TodoError {}
