//! The core arena-backed `Graph` container.
//!
//! Directed, unordered, duplicate-free on nodes but deliberately not on
//! edges: inserting the same endpoint pair twice yields two distinct edges.
//! All iteration runs in arena (insertion) order, so every query is
//! deterministic without further sorting.

use core::fmt;

pub mod alg;
pub mod traverse;

/// Handle to a node. Two handles name the same node iff they are equal and
/// were issued by the same graph (or one of its snapshots).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }

    pub fn from_index(ix: usize) -> Self {
        NodeId(ix)
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// Handle to an edge.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub(crate) usize);

impl EdgeId {
    pub fn index(self) -> usize {
        self.0
    }

    pub fn from_index(ix: usize) -> Self {
        EdgeId(ix)
    }
}

impl fmt::Debug for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Edge<E> {
    pub from: NodeId,
    pub to: NodeId,
    pub label: E,
}

impl<E> Edge<E> {
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

#[derive(Debug, Clone)]
pub struct Graph<N, E> {
    nodes: Vec<N>,
    edges: Vec<Edge<E>>,
}

impl<N, E> Default for Graph<N, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N, E> Graph<N, E> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(nodes),
            edges: Vec::with_capacity(edges),
        }
    }

    pub fn add_node(&mut self, label: N) -> NodeId {
        self.nodes.push(label);
        NodeId(self.nodes.len() - 1)
    }

    /// Endpoints must already be members of this graph; in the arena model
    /// the "register endpoints on insert" guarantee holds by construction.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, label: E) -> EdgeId {
        assert!(
            self.has_node(from) && self.has_node(to),
            "edge endpoints must be members of the graph"
        );
        self.edges.push(Edge { from, to, label });
        EdgeId(self.edges.len() - 1)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn has_node(&self, v: NodeId) -> bool {
        v.0 < self.nodes.len()
    }

    pub fn has_edge(&self, e: EdgeId) -> bool {
        e.0 < self.edges.len()
    }

    pub fn node(&self, v: NodeId) -> &N {
        &self.nodes[v.0]
    }

    pub fn node_mut(&mut self, v: NodeId) -> &mut N {
        &mut self.nodes[v.0]
    }

    pub fn edge(&self, e: EdgeId) -> &Edge<E> {
        &self.edges[e.0]
    }

    pub fn edge_label_mut(&mut self, e: EdgeId) -> &mut E {
        &mut self.edges[e.0].label
    }

    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len()).map(NodeId)
    }

    pub fn edge_ids(&self) -> impl Iterator<Item = EdgeId> {
        (0..self.edges.len()).map(EdgeId)
    }

    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &Edge<E>)> + '_ {
        self.edges.iter().enumerate().map(|(i, e)| (EdgeId(i), e))
    }

    /// Edges leaving `v`, in insertion order.
    pub fn out_edges(&self, v: NodeId) -> Vec<EdgeId> {
        self.edges()
            .filter(|(_, e)| e.from == v)
            .map(|(id, _)| id)
            .collect()
    }

    /// Edges entering `v`, in insertion order.
    pub fn in_edges(&self, v: NodeId) -> Vec<EdgeId> {
        self.edges()
            .filter(|(_, e)| e.to == v)
            .map(|(id, _)| id)
            .collect()
    }

    /// All edges incident to `v`; a self-loop appears once.
    pub fn node_edges(&self, v: NodeId) -> Vec<EdgeId> {
        self.edges()
            .filter(|(_, e)| e.from == v || e.to == v)
            .map(|(id, _)| id)
            .collect()
    }

    pub fn successors(&self, v: NodeId) -> Vec<NodeId> {
        self.edges()
            .filter(|(_, e)| e.from == v)
            .map(|(_, e)| e.to)
            .collect()
    }

    pub fn predecessors(&self, v: NodeId) -> Vec<NodeId> {
        self.edges()
            .filter(|(_, e)| e.to == v)
            .map(|(_, e)| e.from)
            .collect()
    }

    /// Nodes with no incoming edge (self-loops do not count).
    pub fn sources(&self) -> Vec<NodeId> {
        let mut has_in = vec![false; self.nodes.len()];
        for (_, e) in self.edges() {
            if !e.is_self_loop() {
                has_in[e.to.0] = true;
            }
        }
        self.node_ids().filter(|v| !has_in[v.0]).collect()
    }

    /// Flips one edge's direction in place. The edge keeps its handle and
    /// its label; only `from`/`to` swap.
    pub fn reverse_edge(&mut self, e: EdgeId) {
        let edge = &mut self.edges[e.0];
        std::mem::swap(&mut edge.from, &mut edge.to);
    }

    /// Swap-removes an edge. The removed edge is returned; the handle of the
    /// last edge (and only that handle) is invalidated by the swap.
    pub fn remove_edge(&mut self, e: EdgeId) -> Edge<E> {
        self.edges.swap_remove(e.0)
    }
}

impl<N: Clone, E: Clone> Graph<N, E> {
    /// Independent snapshot with every edge's direction flipped. The
    /// receiver is left untouched; node handles are shared between the two.
    pub fn transpose(&self) -> Self {
        let mut g = self.clone();
        for edge in &mut g.edges {
            std::mem::swap(&mut edge.from, &mut edge.to);
        }
        g
    }
}
