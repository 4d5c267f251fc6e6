//! Graph algorithms over [`NodeGraph`](crate::graph::NodeGraph).
//!
//! # Available Algorithms
//!
//! ## Search
//!
//! - [`search_breadth_first`] - Breadth-first search with an optional id or content match.
//!   Reads nodes through the observed accessors and marks every processed node visited.
//! - [`reset_visited`] - Recursively clears the visited flags left behind by a search
//!
//! ## Traversal
//!
//! - [`reachable`] - Breadth-first iterator over handles. Keeps its own visited set, so it
//!   neither reads nor writes node flags and is never reported to the visit logger.
//!
//! # Visited Flags
//!
//! [`search_breadth_first`] relies on the per-node visited flag and never resets it. Running it
//! twice on the same graph without a [`reset_visited`] (or
//! [`NodeGraph::clear_visited`](crate::graph::NodeGraph::clear_visited)) in between stops at the
//! start node the second time, because every child is already marked.
//!
//! | Algorithm | Time Complexity | Uses node flags | Logged |
//! |-----------|-----------------|-----------------|--------|
//! | `search_breadth_first` | O(V + E) | yes | yes |
//! | `reset_visited` | O(paths) | yes | no |
//! | `reachable` | O(V + E) | no | no |

mod search;
mod traversal;

pub use search::{reset_visited, search_breadth_first, SearchQuery};
pub use traversal::{reachable, ReachableIter};
