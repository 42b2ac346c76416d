use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures surfaced by the engine. All of these are local to the call that
/// produced them; nothing is retried and rejected calls leave state untouched.
#[derive(Debug, Error)]
pub enum Error {
    /// A vector or matrix has the wrong length for the layer or synapse it
    /// was handed to.
    #[error("{context}: expected length {expected}, got {actual}")]
    ShapeMismatch {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A weight or bias accessor was given an index outside the matrix.
    #[error("{context}: index {index} out of range (limit {limit})")]
    IndexOutOfRange {
        context: &'static str,
        index: usize,
        limit: usize,
    },

    /// A layer was asked for state (last output, error gradients) that no
    /// forward or backward pass has produced yet.
    #[error("layer has no stored {0}; run the corresponding pass first")]
    MissingLayerState(&'static str),

    /// A training rule declines to support the requested operation. Distinct
    /// from the shape/index errors so callers can tell "not supported" from
    /// "malformed input".
    #[error("operation `{0}` is not supported by this training rule")]
    Unsupported(&'static str),

    /// A network needs at least one synapse.
    #[error("a network needs at least one synapse")]
    EmptyNetwork,

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
