//! Arena-backed node graph.
//!
//! [`NodeGraph`] owns every [`Node`] in a single arena and hands out [`NodeId`] handles. Child
//! lists hold handles, so a node may be shared by several parents and a child list may even
//! point back at an ancestor without any ownership cycle: dropping the graph frees every node
//! exactly once, whatever its shape.
//!
//! The graph has no designated root. Callers keep the handles they care about and start
//! traversals from whichever node they like.
//!
//! # Examples
//!
//! ```rust
//! use visitgraph::{NodeGraph, SearchQuery};
//!
//! let mut graph = NodeGraph::new();
//! let root = graph.add_node("root", 0);
//! let child1 = graph.add_node("child1", 1);
//! let child2 = graph.add_node("child2", 2);
//! let child3 = graph.add_node("child3", 3);
//!
//! graph.add_child(root, child1)?;
//! graph.add_child(root, child2)?;
//! graph.add_child(child2, child3)?;
//!
//! let found = graph.search(root, &SearchQuery::by_content(3))?;
//! assert_eq!(found, Some(child3));
//! # Ok::<(), visitgraph::Error>(())
//! ```

pub mod algorithms;
mod identifier;
mod node;

pub use algorithms::SearchQuery;
pub use identifier::Identifier;
pub use node::{Node, NodeId};

use std::fmt;

use crate::{Error, Result};

/// An arena of [`Node`]s addressed by [`NodeId`].
///
/// Nodes are appended and never removed, so handles stay valid for the lifetime of the graph.
///
/// # Type Parameters
///
/// * `T` - The node payload. Searches by content need `T: PartialEq`; the observed accessors
///   need `T: Display`.
#[derive(Debug, Clone)]
pub struct NodeGraph<T> {
    nodes: Vec<Node<T>>,
}

impl<T> Default for NodeGraph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> NodeGraph<T> {
    /// Creates a new empty graph.
    #[must_use]
    pub const fn new() -> Self {
        NodeGraph { nodes: Vec::new() }
    }

    /// Creates a new empty graph with room for `capacity` nodes.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        NodeGraph {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Adds a node and returns its handle. The new node is unvisited and has no children.
    ///
    /// Identifiers are not checked for uniqueness.
    ///
    /// # Arguments
    ///
    /// * `id` - The node's label, a string or an integer
    /// * `content` - The node's payload
    ///
    /// # Returns
    ///
    /// The handle of the new node. Handles are assigned sequentially from 0.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use visitgraph::{NodeGraph, NodeId};
    ///
    /// let mut graph = NodeGraph::new();
    /// let root = graph.add_node("root", 0);
    /// let leaf = graph.add_node(7, 1);
    ///
    /// assert_eq!(root, NodeId::new(0));
    /// assert_eq!(leaf, NodeId::new(1));
    /// assert_eq!(graph.len(), 2);
    /// ```
    pub fn add_node(&mut self, id: impl Into<Identifier>, content: T) -> NodeId {
        let handle = NodeId::new(self.nodes.len());
        self.nodes.push(Node::new(id.into(), content));
        handle
    }

    /// Appends `child` to the end of `parent`'s child list.
    ///
    /// No cycle or duplicate check is made: the same child may be added several times, and a
    /// node may be made a child of its own descendant.
    ///
    /// # Arguments
    ///
    /// * `parent` - The node whose child list grows
    /// * `child` - The node to append
    ///
    /// # Examples
    ///
    /// ```rust
    /// use visitgraph::NodeGraph;
    ///
    /// let mut graph = NodeGraph::new();
    /// let a = graph.add_node("A", 0);
    /// let b = graph.add_node("B", 1);
    /// graph.add_child(a, b)?;
    /// graph.add_child(b, a)?;
    ///
    /// assert_eq!(graph.node(a).unwrap().children()?, &[b]);
    /// # Ok::<(), visitgraph::Error>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`] if either handle does not belong to this graph. The child
    /// list is left untouched in that case.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        if child.index() >= self.nodes.len() {
            return Err(Error::NodeNotFound(child));
        }

        self.node_mut(parent)
            .ok_or(Error::NodeNotFound(parent))?
            .add_child(child);
        Ok(())
    }

    /// Returns the node behind `id`, if it belongs to this graph.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&Node<T>> {
        self.nodes.get(id.index())
    }

    /// Returns mutable access to the node behind `id`, if it belongs to this graph.
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node<T>> {
        self.nodes.get_mut(id.index())
    }

    /// Returns the number of nodes in the graph.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the graph contains no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns an iterator over all handles, in insertion order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId::new)
    }

    /// Returns an iterator over all nodes with their handles, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node<T>)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (NodeId::new(index), node))
    }

    /// Returns the first node (in insertion order) carrying `id`.
    ///
    /// This is a lookup helper for callers, not a traversal: it scans the arena directly and
    /// is not reported to the visit logger.
    #[must_use]
    pub fn find_by_id(&self, id: &Identifier) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|node| node.id == *id)
            .map(NodeId::new)
    }

    /// Clears the visited flag on every node of the arena.
    ///
    /// Unlike [`NodeGraph::reset_visited`], this does not follow child lists and therefore
    /// terminates on cyclic graphs.
    pub fn clear_visited(&mut self) {
        for node in &mut self.nodes {
            node.visited = false;
        }
    }

    /// Recursively clears the visited flag of `start` and everything reachable from it.
    ///
    /// See [`algorithms::reset_visited`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`] if `start` or a child handle does not belong to this graph.
    pub fn reset_visited(&mut self, start: NodeId) -> Result<()> {
        algorithms::reset_visited(self, start)
    }
}

impl<T: fmt::Display + PartialEq> NodeGraph<T> {
    /// Runs a breadth-first search from `start`.
    ///
    /// See [`algorithms::search_breadth_first`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `query` carries both criteria, and propagates any
    /// error raised by the active visit logger.
    pub fn search(&mut self, start: NodeId, query: &SearchQuery<T>) -> Result<Option<NodeId>> {
        algorithms::search_breadth_first(self, start, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graph_add_nodes() {
        let mut graph: NodeGraph<&str> = NodeGraph::new();
        assert!(graph.is_empty());

        let a = graph.add_node("A", "first");
        let b = graph.add_node(2, "second");

        assert_eq!(graph.len(), 2);
        assert_eq!(a, NodeId::new(0));
        assert_eq!(b, NodeId::new(1));
        assert_eq!(graph.node(b).unwrap().content, "second");
        assert!(graph.node(NodeId::new(2)).is_none());
    }

    #[test]
    fn test_graph_add_child_validates_handles() {
        let mut graph: NodeGraph<i32> = NodeGraph::new();
        let a = graph.add_node("A", 0);

        assert!(matches!(
            graph.add_child(a, NodeId::new(9)),
            Err(Error::NodeNotFound(id)) if id == NodeId::new(9)
        ));
        assert!(matches!(
            graph.add_child(NodeId::new(9), a),
            Err(Error::NodeNotFound(_))
        ));
        assert!(graph.node(a).unwrap().children.is_empty());
    }

    #[test]
    fn test_graph_shared_child() {
        let mut graph: NodeGraph<i32> = NodeGraph::new();
        let a = graph.add_node("A", 0);
        let b = graph.add_node("B", 1);
        let shared = graph.add_node("S", 2);

        graph.add_child(a, shared).unwrap();
        graph.add_child(b, shared).unwrap();

        assert_eq!(graph.node(a).unwrap().children, vec![shared]);
        assert_eq!(graph.node(b).unwrap().children, vec![shared]);
    }

    #[test]
    fn test_graph_find_by_id() {
        let mut graph: NodeGraph<i32> = NodeGraph::new();
        graph.add_node("A", 0);
        let dup1 = graph.add_node("B", 1);
        graph.add_node("B", 2);

        assert_eq!(graph.find_by_id(&Identifier::from("B")), Some(dup1));
        assert_eq!(graph.find_by_id(&Identifier::from("Z")), None);
    }

    #[test]
    fn test_graph_clear_visited_handles_cycles() {
        let mut graph: NodeGraph<i32> = NodeGraph::new();
        let a = graph.add_node("A", 0);
        let b = graph.add_node("B", 1);
        graph.add_child(a, b).unwrap();
        graph.add_child(b, a).unwrap();

        graph.node_mut(a).unwrap().set_visited(true);
        graph.node_mut(b).unwrap().set_visited(true);
        graph.clear_visited();

        assert!(graph.iter().all(|(_, node)| !node.visited()));
    }

    #[test]
    fn test_graph_iter_order() {
        let mut graph: NodeGraph<i32> = NodeGraph::new();
        let a = graph.add_node("A", 0);
        let b = graph.add_node("B", 1);

        let ids: Vec<NodeId> = graph.node_ids().collect();
        assert_eq!(ids, vec![a, b]);
        let contents: Vec<i32> = graph.iter().map(|(_, node)| node.content).collect();
        assert_eq!(contents, vec![0, 1]);
    }
}
