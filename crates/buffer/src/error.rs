//! Buffer error types.

/// Errors produced by buffer construction and peeks.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BufferError {
    #[error("invalid capacity {0}: must be at least 1")]
    InvalidCapacity(i64),

    #[error("buffer is empty")]
    EmptyBuffer,
}

pub type Result<T> = std::result::Result<T, BufferError>;

/// Rejects a zero capacity before any storage is allocated.
pub(crate) fn check_capacity(capacity: usize) -> Result<usize> {
    if capacity == 0 {
        return Err(BufferError::InvalidCapacity(0));
    }
    Ok(capacity)
}
