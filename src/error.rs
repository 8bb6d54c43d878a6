//! Error types for graph construction and traversal.
//!
//! Malformed console input is never an error: it is handled by re-prompting in
//! [`crate::io::Console`]. The variants here only reach callers of the library API.

use thiserror::Error;

use crate::{edge::NumEdges, node::*};

/// Errors raised by graph constructors and traversal entry points.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// Fewer vertices than a graph may be configured with
    #[error("a graph needs at least {min} vertices, got {got}")]
    TooFewVertices { got: NumNodes, min: NumNodes },

    /// The complete graph on this many vertices has more edges than can be indexed
    #[error("{got} vertices exceed the supported graph size")]
    TooManyVertices { got: NumNodes },

    /// Requested edge count violates `[n - 1, n (n - 1) / 2]`
    #[error("edge count {got} must lie between {min} and {max}")]
    EdgeCountOutOfRange {
        got: NumEdges,
        min: NumEdges,
        max: NumEdges,
    },

    /// A vertex index is not in `[0, n)`
    #[error("vertex {vertex} is outside of [0, {vertices})")]
    VertexOutOfRange { vertex: Node, vertices: NumNodes },

    /// An edge (column) index is not in `[0, m)`
    #[error("edge {edge} is outside of [0, {edges})")]
    EdgeOutOfRange { edge: NumEdges, edges: NumEdges },
}

/// Shorthand for results carrying a [`GraphError`]
pub type GraphResult<T> = Result<T, GraphError>;

impl From<GraphError> for std::io::Error {
    fn from(value: GraphError) -> Self {
        std::io::Error::new(std::io::ErrorKind::InvalidInput, value)
    }
}
