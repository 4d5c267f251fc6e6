//! Node handles and vertices.
//!
//! This module provides [`NodeId`], the strongly-typed handle a
//! [`NodeGraph`](crate::graph::NodeGraph) hands out for each vertex, and [`Node`], the vertex
//! itself.
//!
//! # Observed Accessors
//!
//! [`Node::id`], [`Node::content`] and [`Node::children`] report the node to the visit logger
//! that is active on the calling thread (see [`crate::logger`]) before returning. The report
//! happens inside the accessor, so neither the caller nor the node has to coordinate with the
//! logger. Reading or writing the visited flag through [`Node::visited`] and
//! [`Node::set_visited`] is traversal bookkeeping and is never reported.
//!
//! The observed accessors require `T: Display`, since the logger may render the content into
//! its template.

use std::fmt;

use crate::{graph::Identifier, logger, Result};

/// A strongly-typed handle for a node within a [`NodeGraph`](crate::graph::NodeGraph).
///
/// `NodeId` wraps the node's position in the graph's arena. Handles are assigned sequentially
/// starting from 0 by [`NodeGraph::add_node`](crate::graph::NodeGraph::add_node) and stay valid
/// for the lifetime of the graph, since nodes are never removed.
///
/// A handle is only meaningful for the graph that created it. Using it with another graph
/// either addresses an unrelated node or yields
/// [`Error::NodeNotFound`](crate::Error::NodeNotFound).
///
/// # Thread Safety
///
/// `NodeId` is [`Copy`], [`Send`], and [`Sync`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Creates a new `NodeId` from a raw arena index.
    ///
    /// Normal usage should obtain handles from
    /// [`NodeGraph::add_node`](crate::graph::NodeGraph::add_node).
    ///
    /// # Arguments
    ///
    /// * `index` - The raw arena index (0-based)
    ///
    /// # Returns
    ///
    /// A new `NodeId` wrapping the provided index.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use visitgraph::NodeId;
    ///
    /// let node = NodeId::new(5);
    /// assert_eq!(node.index(), 5);
    /// assert_eq!(node.to_string(), "n5");
    /// ```
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        NodeId(index)
    }

    /// Returns the raw arena index of this handle.
    ///
    /// # Returns
    ///
    /// The 0-based position of the node in its graph's arena.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

impl From<usize> for NodeId {
    #[inline]
    fn from(index: usize) -> Self {
        NodeId(index)
    }
}

impl From<NodeId> for usize {
    #[inline]
    fn from(node: NodeId) -> Self {
        node.0
    }
}

/// A graph vertex: an identifier, a payload, an ordered child list and a visited flag.
///
/// Children are stored as [`NodeId`] handles into the owning graph's arena. Several parents may
/// list the same child, and the same child may appear more than once in one list. Nothing
/// prevents a child list from pointing back at an ancestor; such cycles are the caller's
/// responsibility.
///
/// # Thread Safety
///
/// Nodes are not internally synchronized. Mutating a node (adding children, flipping the
/// visited flag) while another thread reads it requires external locking, which the borrow
/// checker enforces for safe code through `&mut NodeGraph`.
#[derive(Debug, Clone)]
pub struct Node<T> {
    pub(crate) id: Identifier,
    pub(crate) content: T,
    pub(crate) children: Vec<NodeId>,
    pub(crate) visited: bool,
}

impl<T> Node<T> {
    pub(crate) fn new(id: Identifier, content: T) -> Self {
        Node {
            id,
            content,
            children: Vec::new(),
            visited: false,
        }
    }

    /// Appends `child` to the end of the child list. No cycle or duplicate check is made.
    pub(crate) fn add_child(&mut self, child: NodeId) {
        self.children.push(child);
    }

    /// Returns whether a traversal has processed this node. Not reported to the logger.
    #[must_use]
    #[inline]
    pub const fn visited(&self) -> bool {
        self.visited
    }

    /// Sets the visited flag. Not reported to the logger.
    #[inline]
    pub fn set_visited(&mut self, visited: bool) {
        self.visited = visited;
    }
}

impl<T: fmt::Display> Node<T> {
    /// Returns the node's identifier, reporting the access to the active logger first.
    ///
    /// # Errors
    ///
    /// Returns the active logger's error if rendering or writing the visit fails, see
    /// [`VisitLogger::record_visit`](crate::logger::VisitLogger::record_visit).
    pub fn id(&self) -> Result<&Identifier> {
        self.observe()?;
        Ok(&self.id)
    }

    /// Returns the node's payload, reporting the access to the active logger first.
    ///
    /// # Errors
    ///
    /// Returns the active logger's error if rendering or writing the visit fails.
    pub fn content(&self) -> Result<&T> {
        self.observe()?;
        Ok(&self.content)
    }

    /// Returns the live child list, reporting the access to the active logger first.
    ///
    /// # Errors
    ///
    /// Returns the active logger's error if rendering or writing the visit fails.
    pub fn children(&self) -> Result<&[NodeId]> {
        self.observe()?;
        Ok(&self.children)
    }

    fn observe(&self) -> Result<()> {
        match logger::current() {
            Some(active) => active.record_visit(self),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::VisitLogger;
    use std::collections::HashSet;

    #[test]
    fn test_node_id_roundtrip() {
        let node = NodeId::new(42);
        assert_eq!(node.index(), 42);

        let raw: usize = node.into();
        assert_eq!(raw, 42);
        assert_eq!(NodeId::from(42usize), node);
    }

    #[test]
    fn test_node_id_hash_and_order() {
        let mut set: HashSet<NodeId> = HashSet::new();
        set.insert(NodeId::new(1));
        set.insert(NodeId::new(2));
        set.insert(NodeId::new(1));
        assert_eq!(set.len(), 2);

        let mut nodes = vec![NodeId::new(3), NodeId::new(1), NodeId::new(2)];
        nodes.sort();
        assert_eq!(nodes, vec![NodeId::new(1), NodeId::new(2), NodeId::new(3)]);
    }

    #[test]
    fn test_node_id_formatting() {
        assert_eq!(format!("{:?}", NodeId::new(42)), "NodeId(42)");
        assert_eq!(format!("{}", NodeId::new(42)), "n42");
    }

    #[test]
    fn test_node_defaults() {
        let node = Node::new(Identifier::from("root"), 0);
        assert!(!node.visited());
        assert_eq!(node.id().unwrap(), "root");
        assert_eq!(*node.content().unwrap(), 0);
        assert!(node.children().unwrap().is_empty());
    }

    #[test]
    fn test_node_children_keep_order_and_duplicates() {
        let mut node = Node::new(Identifier::from(1), "payload");
        node.add_child(NodeId::new(3));
        node.add_child(NodeId::new(1));
        node.add_child(NodeId::new(3));

        assert_eq!(
            node.children().unwrap(),
            &[NodeId::new(3), NodeId::new(1), NodeId::new(3)]
        );
    }

    #[test]
    fn test_accessors_are_observed_but_visited_is_not() {
        let mut node = Node::new(Identifier::from("a"), 5);
        let logger = VisitLogger::in_memory();

        {
            let _scope = logger.activate();
            node.id().unwrap();
            node.content().unwrap();
            node.children().unwrap();
            node.set_visited(true);
            assert!(node.visited());
        }

        assert_eq!(logger.drain().unwrap(), vec!["a", "a", "a"]);
    }
}
