use thiserror::Error;

use crate::rendering::{ArrayHandle, BufferHandle};

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised at the boundary of the simulation core.
///
/// The rule itself is total and never fails. What can fail is the GPU sink
/// (treated as fatal, never retried) and configuration loading.
#[derive(Debug, Error)]
pub enum Error {
    /// A buffer handle the sink never issued, or one it has since dropped.
    #[error("unknown vertex buffer {0:?}")]
    UnknownBuffer(BufferHandle),

    #[error("unknown vertex array {0:?}")]
    UnknownVertexArray(ArrayHandle),

    /// Vertex data must hold whole 2-component vertices.
    #[error("vertex data of {len} floats is not a whole number of 2D vertices")]
    MalformedVertexData { len: usize },

    /// The graphics context rejected an upload or draw.
    #[error("graphics context lost: {0}")]
    ContextLost(String),

    #[error(transparent)]
    Config(#[from] figment::Error),
}
