/*!
# Errors

The single error type used across the crate, plus the crate-wide [`Result`] alias.

All errors are raised synchronously at the point of the violated precondition:
an analyzer constructor either completes with a fully computed result or fails
before any traversal begins. Nothing is retried internally and no partial
results escape a failed construction.
*/

use thiserror::Error;

use crate::node::{Node, NumNodes};

/// The generic error type covering every failure this library can report.
#[derive(Error, Debug)]
pub enum GraphError {
    /// A precondition on a non-vertex argument was violated, e.g. an empty
    /// source collection for a multi-source BFS or a disconnected graph
    /// handed to [`GraphMetrics`](crate::algo::GraphMetrics).
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// What was wrong with the argument
        reason: String,
    },

    /// A vertex index outside `[0, n)` was passed to a fallible operation.
    /// Raised eagerly, before any other work.
    #[error("vertex {vertex} is out of range for a graph with {bound} nodes")]
    InvalidVertex {
        /// The offending vertex index
        vertex: Node,
        /// The number of nodes in the graph
        bound: NumNodes,
    },

    /// Serialized input was malformed: a token failed to parse or the
    /// stream ended prematurely.
    #[error("format error: {reason}")]
    Format {
        /// What could not be parsed
        reason: String,
    },

    /// A label lookup in a [`SymbolGraph`](crate::symbol::SymbolGraph) missed.
    #[error("label {label:?} not found")]
    NotFound {
        /// The label that was looked up
        label: String,
    },

    /// The queried result does not exist for this graph, e.g. asking for a
    /// 2-coloring of a non-bipartite graph.
    #[error("unsupported operation: {reason}")]
    Unsupported {
        /// Why the operation is unsupported
        reason: String,
    },

    /// An I/O failure at the reader/writer boundary.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl GraphError {
    /// Shorthand for an [`GraphError::InvalidArgument`] with the given reason
    pub fn invalid_argument<S: Into<String>>(reason: S) -> Self {
        GraphError::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Shorthand for a [`GraphError::Format`] with the given reason
    pub fn format<S: Into<String>>(reason: S) -> Self {
        GraphError::Format {
            reason: reason.into(),
        }
    }
}

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, GraphError>;
