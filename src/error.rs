//! Error handling for the orbit belt
//!
//! One error type for every fallible belt operation. Configuration problems
//! are caught before anything is spawned, collaborator failures are
//! propagated as-is, and the per-tick math itself never fails.

/// Main error type for the orbit belt
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BeltError {
    #[error("Invalid config: {field} = {value} ({reason})")]
    InvalidConfig {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Object creation failed for belt index {index}: {reason}")]
    ObjectCreation { index: usize, reason: String },

    #[error("Factory capacity exhausted: {capacity} objects already created")]
    FactoryExhausted { capacity: usize },

    #[error("Thread pool error: {0}")]
    ThreadPool(String),

    #[error("Belt batch already released")]
    BatchReleased,

    #[error("Index {index} out of bounds for belt of {len} objects")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// Type alias for Results in the orbit belt
pub type BeltResult<T> = Result<T, BeltError>;

impl BeltError {
    /// Shorthand for a rejected config field
    pub fn invalid_config(
        field: &str,
        value: impl std::fmt::Display,
        reason: impl Into<String>,
    ) -> Self {
        BeltError::InvalidConfig {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

/// Convert Option to Result with context
pub trait OptionExt<T> {
    fn ok_or_belt<F>(self, f: F) -> BeltResult<T>
    where
        F: FnOnce() -> BeltError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_belt<F>(self, f: F) -> BeltResult<T>
    where
        F: FnOnce() -> BeltError,
    {
        self.ok_or_else(f)
    }
}
