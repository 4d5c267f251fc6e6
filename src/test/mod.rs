//! Graph factories shared by the unit tests.

use crate::graph::{NodeGraph, NodeId};

/// The four-node tree used throughout the docs:
///
/// ```text
///   root(0)
///   ├── child1(1)
///   └── child2(2)
///       └── child3(3)
/// ```
pub fn sample_tree() -> (NodeGraph<i32>, [NodeId; 4]) {
    let mut graph = NodeGraph::new();
    let root = graph.add_node("root", 0);
    let child1 = graph.add_node("child1", 1);
    let child2 = graph.add_node("child2", 2);
    let child3 = graph.add_node("child3", 3);

    graph.add_child(root, child1).unwrap();
    graph.add_child(root, child2).unwrap();
    graph.add_child(child2, child3).unwrap();

    (graph, [root, child1, child2, child3])
}

/// A -> {B, C}, B -> D, C -> D
pub fn diamond_graph() -> (NodeGraph<i32>, [NodeId; 4]) {
    let mut graph = NodeGraph::new();
    let a = graph.add_node("A", 0);
    let b = graph.add_node("B", 1);
    let c = graph.add_node("C", 2);
    let d = graph.add_node("D", 3);

    graph.add_child(a, b).unwrap();
    graph.add_child(a, c).unwrap();
    graph.add_child(b, d).unwrap();
    graph.add_child(c, d).unwrap();

    (graph, [a, b, c, d])
}

pub struct TwoBranch {
    pub root: NodeId,
    pub a: NodeId,
    pub b: NodeId,
    pub c: NodeId,
    pub d: NodeId,
}

/// root -> {A, B}, A -> C, B -> D, where C and D both carry content 7.
pub fn two_branch_graph() -> (NodeGraph<i32>, TwoBranch) {
    let mut graph = NodeGraph::new();
    let root = graph.add_node("root", 0);
    let a = graph.add_node("A", 1);
    let b = graph.add_node("B", 2);
    let c = graph.add_node("C", 7);
    let d = graph.add_node("D", 7);

    graph.add_child(root, a).unwrap();
    graph.add_child(root, b).unwrap();
    graph.add_child(a, c).unwrap();
    graph.add_child(b, d).unwrap();

    (graph, TwoBranch { root, a, b, c, d })
}
