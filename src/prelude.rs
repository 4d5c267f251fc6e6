//! # visitgraph Prelude
//!
//! Import this module to get quick access to the types needed to build, search and log a graph.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all visitgraph operations
pub use crate::Error;

/// The result type used throughout visitgraph
pub use crate::Result;

// ================================================================================================
// Graph
// ================================================================================================

/// Arena, vertices and labels
pub use crate::graph::{Identifier, Node, NodeGraph, NodeId};

/// Search and reset
pub use crate::graph::algorithms::{reachable, reset_visited, search_breadth_first, SearchQuery};

// ================================================================================================
// Logging
// ================================================================================================

/// Visit logger, its configuration and scope guard
pub use crate::logger::{LoggerConfig, LoggerScope, SharedWriter, SinkConfig, VisitLogger};

// ================================================================================================
// Rendering
// ================================================================================================

/// Render export
pub use crate::render::GraphView;
