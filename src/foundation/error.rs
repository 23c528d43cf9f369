/// Convenience result type used across emberkit.
pub type EmberResult<T> = Result<T, EmberError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Algorithmic overflow in the bidi engine and missing shaping glyphs are not errors; they
/// are handled by silent truncation and fallback and never surface here.
#[derive(thiserror::Error, Debug)]
pub enum EmberError {
    /// A surface or context allocation could not be satisfied.
    #[error("out of memory: requested {requested} bytes (budget {budget:?})")]
    OutOfMemory {
        /// Bytes the failing allocation asked for.
        requested: usize,
        /// Configured byte budget, if any.
        budget: Option<usize>,
    },

    /// Caller-supplied arguments are inconsistent (pitch mismatch, bad dimensions, ...).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Write access was requested on a constant surface.
    #[error("write access denied: surface is constant")]
    WriteProtected,

    /// More characters were supplied than the bidi context was created for.
    #[error("capacity exceeded: {requested} characters, capacity {capacity}")]
    Capacity {
        /// Number of characters supplied.
        requested: usize,
        /// Fixed context capacity.
        capacity: usize,
    },

    /// Invalid runtime configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl EmberError {
    /// Build an [`EmberError::InvalidArgument`] value.
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Build an [`EmberError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build an [`EmberError::OutOfMemory`] value.
    pub fn out_of_memory(requested: usize, budget: Option<usize>) -> Self {
        Self::OutOfMemory { requested, budget }
    }

    /// Return `true` for allocation failures that a reclaim-and-retry loop may resolve.
    pub fn is_out_of_memory(&self) -> bool {
        matches!(self, Self::OutOfMemory { .. })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
