// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # visitgraph
//!
//! An arena-backed graph of labelled nodes with breadth-first search and transparent visit
//! logging.
//!
//! ## Features
//!
//! - **Shared children without ownership cycles** - nodes live in one arena and child lists
//!   hold [`NodeId`] handles
//! - **Early-exit breadth-first search** - match on identifier or content, shallowest and
//!   leftmost match wins
//! - **Scoped visit logging** - activate a [`VisitLogger`] and every identifier, content or
//!   child-list read on the thread is recorded, without threading the logger through calls
//! - **Pluggable sinks** - in-memory buffer, caller-owned stream, or a file owned by the logger
//! - **Render export** - node and edge lists plus Graphviz DOT output
//!
//! ## Quick Start
//!
//! ```rust
//! use visitgraph::prelude::*;
//!
//! let mut graph = NodeGraph::new();
//! let root = graph.add_node("root", 0);
//! let child1 = graph.add_node("child1", 1);
//! let child2 = graph.add_node("child2", 2);
//! let child3 = graph.add_node("child3", 3);
//! graph.add_child(root, child1)?;
//! graph.add_child(root, child2)?;
//! graph.add_child(child2, child3)?;
//!
//! let logger = VisitLogger::in_memory();
//! let found = logger.scope(|| graph.search(root, &SearchQuery::by_content(3)))?;
//!
//! assert_eq!(found, Some(child3));
//! assert_eq!(
//!     logger.drain()?,
//!     vec!["root", "root", "child1", "child1", "child2", "child2", "child3"]
//! );
//! # Ok::<(), visitgraph::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`graph`] - [`NodeGraph`] arena, [`Node`], [`NodeId`], [`Identifier`] and the
//!   [`graph::algorithms`]
//! - [`logger`] - [`VisitLogger`], templates, sinks and the per-thread scope stack
//! - [`render`] - [`render::GraphView`] export for external renderers
//! - [`Error`] and [`Result`] - error handling
//!
//! ## Visited Flags
//!
//! The search marks every node it processes and never clears the marks. Call
//! [`NodeGraph::reset_visited`] (or [`NodeGraph::clear_visited`] for graphs that may contain
//! cycles) before searching the same nodes again.
//!
//! ## Diagnostics
//!
//! The crate emits [`tracing`](https://docs.rs/tracing) events: `debug` for scope activation,
//! sink release and search outcomes, `trace` for each dequeued node. Install a subscriber in the
//! application to see them.
#[macro_use]
pub(crate) mod macros;

pub(crate) mod error;

/// Shared functionality which is used in unit tests
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types.
pub mod prelude;

/// Node arena, vertices, identifiers and graph algorithms.
pub mod graph;

/// Scoped visit logging.
pub mod logger;

/// Export of node and edge lists for external renderers.
pub mod render;

/// `visitgraph` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `visitgraph` Error type
pub use error::Error;

pub use graph::{
    algorithms::{reachable, reset_visited, search_breadth_first},
    Identifier, Node, NodeGraph, NodeId, SearchQuery,
};
pub use logger::{LoggerConfig, LoggerScope, SinkConfig, VisitLogger};
pub use render::GraphView;
