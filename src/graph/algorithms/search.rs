//! Breadth-first search with early exit.
//!
//! The search reads each node through the observed accessors, so an active
//! [`VisitLogger`](crate::logger::VisitLogger) sees every id or content comparison and every
//! child-list read. Marking a node visited and checking a child's flag are direct field accesses
//! and never appear in the log.

use std::{collections::VecDeque, fmt};

use tracing::{debug, trace};

use crate::{
    graph::{Identifier, NodeGraph, NodeId},
    Error, Result,
};

/// What a breadth-first search is looking for.
///
/// A query carries at most one criterion. A query without a criterion walks every reachable
/// node and returns no match, which is useful for its logging side effects alone. Setting both
/// criteria is accepted by the builder but rejected by the search with
/// [`Error::InvalidArgument`].
///
/// # Examples
///
/// ```rust
/// use visitgraph::SearchQuery;
///
/// let by_id: SearchQuery<i32> = SearchQuery::by_id("child3");
/// let by_content = SearchQuery::by_content(3);
/// let walk_all: SearchQuery<i32> = SearchQuery::new();
///
/// assert!(by_id.id().is_some());
/// assert_eq!(by_content.content(), Some(&3));
/// assert!(walk_all.id().is_none() && walk_all.content().is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery<T> {
    id: Option<Identifier>,
    content: Option<T>,
}

impl<T> Default for SearchQuery<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SearchQuery<T> {
    /// Creates a query without a criterion (full traversal).
    #[must_use]
    pub const fn new() -> Self {
        SearchQuery {
            id: None,
            content: None,
        }
    }

    /// Creates a query matching the node whose identifier equals `id`.
    #[must_use]
    pub fn by_id(id: impl Into<Identifier>) -> Self {
        Self::new().with_id(id)
    }

    /// Creates a query matching the node whose content equals `content`.
    #[must_use]
    pub fn by_content(content: T) -> Self {
        Self::new().with_content(content)
    }

    /// Sets the identifier criterion.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<Identifier>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the content criterion.
    #[must_use]
    pub fn with_content(mut self, content: T) -> Self {
        self.content = Some(content);
        self
    }

    /// Returns the identifier criterion, if any.
    #[must_use]
    pub const fn id(&self) -> Option<&Identifier> {
        self.id.as_ref()
    }

    /// Returns the content criterion, if any.
    #[must_use]
    pub const fn content(&self) -> Option<&T> {
        self.content.as_ref()
    }

    fn criterion(&self) -> Result<Option<Criterion<'_, T>>> {
        match (&self.id, &self.content) {
            (Some(_), Some(_)) => Err(Error::InvalidArgument(
                "a search may match on id or on content, not both".to_string(),
            )),
            (Some(id), None) => Ok(Some(Criterion::Id(id))),
            (None, Some(content)) => Ok(Some(Criterion::Content(content))),
            (None, None) => Ok(None),
        }
    }
}

enum Criterion<'q, T> {
    Id(&'q Identifier),
    Content(&'q T),
}

/// Searches the graph breadth-first from `start`, returning the first node matching `query`.
///
/// On dequeue, a node is marked visited and then tested against the criterion; a match ends
/// the search immediately. Its children are then read in list order and each one whose visited
/// flag is still clear is enqueued. Enqueuing does not set the flag, so a node reachable over
/// several paths can be queued more than once before it is first processed.
///
/// The first match in breadth-first order wins: the shallowest matching node, and among nodes
/// at the same depth the one discovered first following child-list order.
///
/// Visited flags are neither reset before nor after the search. A second search over the same
/// nodes without calling [`reset_visited`] first will not get past `start`.
///
/// # Arguments
///
/// * `graph` - The graph to search
/// * `start` - The node the search starts from
/// * `query` - The match criterion; an empty query walks the whole reachable set
///
/// # Returns
///
/// `Ok(Some(node))` for the first match, `Ok(None)` when nothing matched or the query has no
/// criterion.
///
/// # Errors
///
/// - [`Error::InvalidArgument`] if `query` carries both an id and a content criterion. No node
///   is touched in that case.
/// - [`Error::NodeNotFound`] if `start` or a child handle does not belong to `graph`.
/// - Any error of the active visit logger, propagated from the observed accessors.
///
/// # Examples
///
/// ```rust
/// use visitgraph::{search_breadth_first, NodeGraph, SearchQuery, VisitLogger};
///
/// let mut graph = NodeGraph::new();
/// let root = graph.add_node("root", 0);
/// let child = graph.add_node("child", 1);
/// graph.add_child(root, child)?;
///
/// let logger = VisitLogger::in_memory();
/// let query = SearchQuery::by_id("child");
/// let found = logger.scope(|| search_breadth_first(&mut graph, root, &query))?;
///
/// assert_eq!(found, Some(child));
/// assert_eq!(logger.drain()?, vec!["root", "root", "child"]);
/// # Ok::<(), visitgraph::Error>(())
/// ```
pub fn search_breadth_first<T>(
    graph: &mut NodeGraph<T>,
    start: NodeId,
    query: &SearchQuery<T>,
) -> Result<Option<NodeId>>
where
    T: fmt::Display + PartialEq,
{
    let criterion = query.criterion()?;
    if graph.node(start).is_none() {
        return Err(Error::NodeNotFound(start));
    }

    let mut queue = VecDeque::from([start]);
    let mut processed = 0usize;

    while let Some(current) = queue.pop_front() {
        graph
            .node_mut(current)
            .ok_or(Error::NodeNotFound(current))?
            .set_visited(true);
        processed += 1;
        trace!(node = %current, queued = queue.len(), "bfs dequeue");

        let node = graph.node(current).ok_or(Error::NodeNotFound(current))?;
        let matched = match &criterion {
            Some(Criterion::Id(id)) => node.id()? == *id,
            Some(Criterion::Content(content)) => node.content()? == *content,
            None => false,
        };
        if matched {
            debug!(node = %current, processed, "bfs match");
            return Ok(Some(current));
        }

        for &child in node.children()? {
            let child_node = graph.node(child).ok_or(Error::NodeNotFound(child))?;
            if !child_node.visited() {
                queue.push_back(child);
            }
        }
    }

    debug!(start = %start, processed, "bfs exhausted without match");
    Ok(None)
}

/// Clears the visited flag of `start` and of every node reachable from it.
///
/// Child lists are followed without any guard: on a cyclic graph this never terminates, and a
/// node reachable over several paths is cleared once per path. Callers with cyclic graphs should
/// use [`NodeGraph::clear_visited`](crate::graph::NodeGraph::clear_visited) instead.
///
/// Child lists are read directly, so the reset is not reported to the visit logger.
///
/// # Errors
///
/// Returns [`Error::NodeNotFound`] if `start` or a child handle does not belong to `graph`.
/// Flags cleared before the dangling handle was met stay cleared.
pub fn reset_visited<T>(graph: &mut NodeGraph<T>, start: NodeId) -> Result<()> {
    let mut stack = vec![start];
    let mut cleared = 0usize;

    while let Some(current) = stack.pop() {
        let node = graph.node_mut(current).ok_or(Error::NodeNotFound(current))?;
        node.set_visited(false);
        stack.extend(node.children.iter().rev().copied());
        cleared += 1;
    }

    debug!(start = %start, cleared, "visited flags reset");
    Ok(())
}
