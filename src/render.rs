//! Graph export for external renderers.
//!
//! A renderer only gets node identifiers and `(parent, child)` identifier pairs; payloads and
//! visited flags are never exposed. [`NodeGraph::view`] collects both lists for a chosen set of
//! nodes, and [`GraphView::to_dot`] turns them into Graphviz DOT text.
//!
//! Building a view reads identifiers and child lists through the observed accessors, so an
//! active [`VisitLogger`](crate::logger::VisitLogger) sees the export like any other read.

use std::{collections::HashSet, fmt, fmt::Write as _};

use crate::{
    graph::{Identifier, NodeGraph, NodeId},
    Error, Result,
};

/// Node identifiers and edges of a selection of nodes, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphView {
    /// Whether edges point from parent to child (`true`) or are undirected.
    pub directed: bool,
    nodes: Vec<Identifier>,
    edges: Vec<(Identifier, Identifier)>,
}

impl GraphView {
    /// Returns the selected node identifiers, in selection order, without duplicates.
    #[must_use]
    pub fn nodes(&self) -> &[Identifier] {
        &self.nodes
    }

    /// Returns one `(parent, child)` pair per child-list entry of each selected node.
    ///
    /// Children outside the selection still produce an edge, and duplicate child entries
    /// produce duplicate edges.
    #[must_use]
    pub fn edges(&self) -> &[(Identifier, Identifier)] {
        &self.edges
    }

    /// Renders the view as a Graphviz DOT document.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use visitgraph::NodeGraph;
    ///
    /// let mut graph = NodeGraph::new();
    /// let root = graph.add_node("root", 0);
    /// let leaf = graph.add_node(7, 1);
    /// graph.add_child(root, leaf)?;
    ///
    /// let dot = graph.view(&[root, leaf], true)?.to_dot();
    /// assert_eq!(dot, "digraph {\n    \"root\";\n    \"7\";\n    \"root\" -> \"7\";\n}\n");
    /// # Ok::<(), visitgraph::Error>(())
    /// ```
    #[must_use]
    pub fn to_dot(&self) -> String {
        let (keyword, arrow) = if self.directed {
            ("digraph", "->")
        } else {
            ("graph", "--")
        };

        let mut dot = String::new();
        let _ = writeln!(dot, "{keyword} {{");
        for node in &self.nodes {
            let _ = writeln!(dot, "    \"{}\";", escape_dot(&node.to_string()));
        }
        for (parent, child) in &self.edges {
            let _ = writeln!(
                dot,
                "    \"{}\" {arrow} \"{}\";",
                escape_dot(&parent.to_string()),
                escape_dot(&child.to_string())
            );
        }
        dot.push_str("}\n");
        dot
    }
}

impl<T: fmt::Display> NodeGraph<T> {
    /// Builds a [`GraphView`] of the given nodes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`] for a handle outside this graph, and propagates errors of
    /// the active visit logger.
    pub fn view(&self, selection: &[NodeId], directed: bool) -> Result<GraphView> {
        let mut seen = HashSet::new();
        let mut nodes = Vec::with_capacity(selection.len());
        let mut edges = Vec::new();

        for &handle in selection {
            let node = self.node(handle).ok_or(Error::NodeNotFound(handle))?;
            let parent = node.id()?;
            if seen.insert(parent.clone()) {
                nodes.push(parent.clone());
            }

            for &child in node.children()? {
                let child_id = self.node(child).ok_or(Error::NodeNotFound(child))?.id()?;
                edges.push((parent.clone(), child_id.clone()));
            }
        }

        Ok(GraphView {
            directed,
            nodes,
            edges,
        })
    }
}

/// Escapes a string for safe use in DOT format labels and identifiers.
///
/// This function handles all characters that have special meaning in DOT format,
/// including quotes, backslashes, newlines, and angle brackets.
#[must_use]
pub fn escape_dot(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "")
        .replace('<', "\\<")
        .replace('>', "\\>")
}
