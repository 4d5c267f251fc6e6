//! Flag-free breadth-first traversal.
//!
//! [`reachable`] walks the graph with a private visited set instead of the nodes' own flags, so
//! it can be used to inspect a graph between searches without disturbing search state or
//! producing log lines.

use std::collections::VecDeque;

use crate::graph::{NodeGraph, NodeId};

/// Breadth-first iterator over the handles reachable from a start node.
///
/// Each reachable node is yielded exactly once, in order of increasing distance from the start,
/// with same-distance nodes in child-list order. Cycles, shared children and duplicate child
/// entries are handled by the private visited set.
///
/// # Type Parameters
///
/// * `'g` - Lifetime of the graph reference
/// * `T` - The node payload type
pub struct ReachableIter<'g, T> {
    graph: &'g NodeGraph<T>,
    queue: VecDeque<NodeId>,
    visited: Vec<bool>,
}

impl<'g, T> ReachableIter<'g, T> {
    fn new(graph: &'g NodeGraph<T>, start: NodeId) -> Self {
        let node_count = graph.len();
        if start.index() >= node_count {
            return ReachableIter {
                graph,
                queue: VecDeque::new(),
                visited: Vec::new(),
            };
        }

        let mut visited = vec![false; node_count];
        visited[start.index()] = true;

        ReachableIter {
            graph,
            queue: VecDeque::from([start]),
            visited,
        }
    }
}

impl<T> Iterator for ReachableIter<'_, T> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.queue.pop_front()?;
        let node = self.graph.node(current)?;

        for &child in &node.children {
            if let Some(seen) = self.visited.get_mut(child.index()) {
                if !*seen {
                    *seen = true;
                    self.queue.push_back(child);
                }
            }
        }

        Some(current)
    }
}

/// Returns a breadth-first iterator over the handles reachable from `start`.
///
/// An out-of-range `start` yields an empty iterator. Dangling child handles are skipped.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V) for the visited set and queue
///
/// # Examples
///
/// ```rust
/// use visitgraph::{graph::algorithms::reachable, NodeGraph, NodeId};
///
/// let mut graph: NodeGraph<()> = NodeGraph::new();
/// let a = graph.add_node("A", ());
/// let b = graph.add_node("B", ());
/// let c = graph.add_node("C", ());
/// let _unreachable = graph.add_node("D", ());
/// graph.add_child(a, b)?;
/// graph.add_child(b, c)?;
/// graph.add_child(c, a)?;
///
/// let order: Vec<NodeId> = reachable(&graph, a).collect();
/// assert_eq!(order, vec![a, b, c]);
/// # Ok::<(), visitgraph::Error>(())
/// ```
pub fn reachable<T>(graph: &NodeGraph<T>, start: NodeId) -> ReachableIter<'_, T> {
    ReachableIter::new(graph, start)
}

#[cfg(test)]
mod tests {
    use crate::{
        graph::{algorithms::reachable, NodeGraph, NodeId},
        logger::VisitLogger,
        test::{diamond_graph, sample_tree},
    };

    #[test]
    fn test_reachable_tree() {
        let (graph, [root, child1, child2, child3]) = sample_tree();
        let order: Vec<NodeId> = reachable(&graph, root).collect();
        assert_eq!(order, vec![root, child1, child2, child3]);
    }

    #[test]
    fn test_reachable_diamond_visits_shared_node_once() {
        let (graph, [a, b, c, d]) = diamond_graph();
        let order: Vec<NodeId> = reachable(&graph, a).collect();
        assert_eq!(order, vec![a, b, c, d]);
    }

    #[test]
    fn test_reachable_self_loop_and_duplicates() {
        let mut graph: NodeGraph<()> = NodeGraph::new();
        let a = graph.add_node("A", ());
        let b = graph.add_node("B", ());
        graph.add_child(a, a).unwrap();
        graph.add_child(a, b).unwrap();
        graph.add_child(a, b).unwrap();

        let order: Vec<NodeId> = reachable(&graph, a).collect();
        assert_eq!(order, vec![a, b]);
    }

    #[test]
    fn test_reachable_invalid_start() {
        let graph: NodeGraph<()> = NodeGraph::new();
        assert_eq!(reachable(&graph, NodeId::new(3)).count(), 0);
    }

    #[test]
    fn test_reachable_leaves_flags_and_log_alone() {
        let (graph, [root, ..]) = sample_tree();
        let logger = VisitLogger::in_memory();

        let count = {
            let _scope = logger.activate();
            reachable(&graph, root).count()
        };

        assert_eq!(count, 4);
        assert!(graph.iter().all(|(_, node)| !node.visited()));
        assert!(logger.drain().unwrap().is_empty());
    }
}
