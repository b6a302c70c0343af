/// Convenience result type used across tguy.
pub type TrashResult<T> = Result<T, TrashError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum TrashError {
    /// Malformed caller input: empty item sequence, invalid UTF-8, empty sprite.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Frame index outside `[0, frames)`.
    #[error("frame index out of range: {index} is not in [0, {frames})")]
    IndexOutOfRange {
        /// Requested index, widened so negative host indices can be reported verbatim.
        index: i128,
        /// Number of frames the engine has.
        frames: u64,
    },

    /// The frame buffer could not be sized or reserved.
    #[error("out of memory: {0}")]
    OutOfMemory(String),

    /// Errors when deserializing configuration documents.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TrashError {
    /// Build a [`TrashError::InvalidInput`] value.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Build a [`TrashError::IndexOutOfRange`] value.
    pub fn index_out_of_range(index: impl Into<i128>, frames: u64) -> Self {
        Self::IndexOutOfRange {
            index: index.into(),
            frames,
        }
    }

    /// Build a [`TrashError::OutOfMemory`] value.
    pub fn out_of_memory(msg: impl Into<String>) -> Self {
        Self::OutOfMemory(msg.into())
    }

    /// Build a [`TrashError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<std::collections::TryReserveError> for TrashError {
    fn from(e: std::collections::TryReserveError) -> Self {
        Self::out_of_memory(format!("reserve frame buffer: {e}"))
    }
}

impl From<std::io::Error> for TrashError {
    fn from(e: std::io::Error) -> Self {
        Self::Other(anyhow::Error::new(e))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
