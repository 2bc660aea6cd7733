//! Strongly connected components (Kosaraju) and acyclicity checks.

use std::cell::Cell;

use super::traverse::dfs;
use super::{Graph, NodeId};

/// Result of SCC detection: a representative per node, plus the list of
/// representatives whose component has more than one member. Single-node
/// components (including self-loop nodes) are trivial and not reported.
#[derive(Debug, Clone)]
pub struct Components {
    rep: Vec<Option<NodeId>>,
    nontrivial: Vec<NodeId>,
}

impl Components {
    pub fn representative(&self, v: NodeId) -> Option<NodeId> {
        self.rep.get(v.index()).copied().flatten()
    }

    /// Representatives of components with more than one member, in arena
    /// order.
    pub fn nontrivial(&self) -> &[NodeId] {
        &self.nontrivial
    }

    /// All nodes assigned to `rep`'s component, in arena order.
    pub fn members(&self, rep: NodeId) -> Vec<NodeId> {
        self.rep
            .iter()
            .enumerate()
            .filter(|(_, r)| **r == Some(rep))
            .map(|(i, _)| NodeId(i))
            .collect()
    }
}

/// Kosaraju's algorithm: a DFS sweep over the transpose pushing nodes on
/// close, then a sweep over the original graph in reverse finishing order,
/// assigning every node reached from a still-unassigned node to that node's
/// component.
pub fn components<N: Clone, E: Clone>(g: &Graph<N, E>) -> Components {
    let n = g.node_count();
    let gt = g.transpose();

    // The entry predicate and the open callback share the visited state, so
    // it lives in cells.
    let mut stack: Vec<NodeId> = Vec::with_capacity(n);
    let visited: Vec<Cell<bool>> = vec![Cell::new(false); n];
    for v in gt.node_ids() {
        dfs(
            &gt,
            v,
            |w| !visited[w.index()].get(),
            |w| visited[w.index()].set(true),
            |w| stack.push(w),
        );
    }

    let assigned: Vec<Cell<Option<NodeId>>> = vec![Cell::new(None); n];
    for &v in stack.iter().rev() {
        dfs(
            g,
            v,
            |w| assigned[w.index()].get().is_none(),
            |w| assigned[w.index()].set(Some(v)),
            |_| {},
        );
    }
    let rep: Vec<Option<NodeId>> = assigned.into_iter().map(Cell::into_inner).collect();

    let mut sizes = vec![0usize; n];
    for r in rep.iter().flatten() {
        sizes[r.index()] += 1;
    }
    let nontrivial = (0..n)
        .filter(|&i| sizes[i] > 1)
        .map(NodeId)
        .collect();

    Components { rep, nontrivial }
}

/// Whether the graph is free of directed cycles. Self-loops are ignored;
/// they are structural noise for layout purposes, not cycles to break.
pub fn is_acyclic<N, E>(g: &Graph<N, E>) -> bool {
    let n = g.node_count();
    let mut visited = vec![false; n];
    let mut on_stack = vec![false; n];

    fn walk<N, E>(
        g: &Graph<N, E>,
        v: NodeId,
        visited: &mut [bool],
        on_stack: &mut [bool],
    ) -> bool {
        visited[v.index()] = true;
        on_stack[v.index()] = true;
        for (_, e) in g.edges() {
            if e.from != v || e.is_self_loop() {
                continue;
            }
            if on_stack[e.to.index()] {
                return false;
            }
            if !visited[e.to.index()] && !walk(g, e.to, visited, on_stack) {
                return false;
            }
        }
        on_stack[v.index()] = false;
        true
    }

    for v in g.node_ids() {
        if !visited[v.index()] && !walk(g, v, &mut visited, &mut on_stack) {
            return false;
        }
    }
    true
}
