use thiserror::Error;

use crate::graph::NodeId;

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// A search that finds nothing is not an error; it yields `Ok(None)`. Errors only arise from
/// contradictory search criteria, logger misuse, template problems, sink I/O, or handles that do
/// not belong to the graph they are used with.
///
/// # Error Categories
///
/// ## Search Errors
/// - [`Error::InvalidArgument`] - Contradictory search criteria
/// - [`Error::NodeNotFound`] - A [`NodeId`] that is not part of the graph
///
/// ## Logger Errors
/// - [`Error::ModeError`] - Draining a logger that writes through to a stream or file
/// - [`Error::FormatError`] - Template references a field the node does not expose
/// - [`Error::TemplateSyntax`] - Template braces are unbalanced
/// - [`Error::SinkClosed`] - Owned file sink already released by its scope
/// - [`Error::LockError`] - Sink mutex poisoned by a panicking writer
///
/// ## I/O Errors
/// - [`Error::FileError`] - Opening or writing a sink failed
///
/// # Examples
///
/// ```rust
/// use visitgraph::{search_breadth_first, Error, NodeGraph, SearchQuery};
///
/// let mut graph: NodeGraph<i32> = NodeGraph::new();
/// let root = graph.add_node("root", 0);
///
/// let query = SearchQuery::by_id("root").with_content(0);
/// match search_breadth_first(&mut graph, root, &query) {
///     Err(Error::InvalidArgument(message)) => println!("rejected: {message}"),
///     other => panic!("unexpected: {other:?}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// Both an id and a content criterion were supplied to a search.
    ///
    /// Raised before any node is dequeued, so no visited flag changes.
    #[error("Invalid argument - {0}")]
    InvalidArgument(String),

    /// The logger is in write-through mode and keeps no retrievable copy.
    #[error("The logger is not in memory mode")]
    ModeError,

    /// The template references a field outside of `id`, `content` and `visited`.
    ///
    /// Unknown names are detected when a visit is rendered, not when the logger is built.
    #[error("Unknown template field '{field}'")]
    FormatError {
        /// The offending substitution name
        field: String,
    },

    /// The template could not be parsed.
    #[error("Malformed template - {0}")]
    TemplateSyntax(String),

    /// File I/O error.
    ///
    /// Wraps errors from opening, writing or flushing a sink. These are passed through as-is.
    #[error("{0}")]
    FileError(#[from] std::io::Error),

    /// The owned file sink was already closed when its scope ended.
    #[error("The log file has already been closed")]
    SinkClosed,

    /// A handle does not refer to a node of this graph.
    #[error("Node {0} does not exist in this graph")]
    NodeNotFound(NodeId),

    /// Failed to lock target.
    ///
    /// This error occurs when a thread panicked while holding a sink lock.
    #[error("Failed to lock target")]
    LockError,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::FormatError {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown template field 'name'");

        let err = Error::NodeNotFound(NodeId::new(7));
        assert_eq!(err.to_string(), "Node n7 does not exist in this graph");

        assert_eq!(Error::ModeError.to_string(), "The logger is not in memory mode");
    }

    #[test]
    fn test_io_error_passthrough() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: Error = io.into();
        assert!(matches!(err, Error::FileError(_)));
        assert_eq!(err.to_string(), "denied");
    }
}
