//! Cycle elimination by reversing back-edges inside non-trivial SCCs.
//!
//! Kosaraju's algorithm finds the components that actually contain cycles;
//! a depth-first walk inside each one reverses every edge that points back
//! into the current recursion stack. No edge is deleted and no endpoint
//! pair changes, only direction, so node identity survives into the later
//! passes. The input graph is left untouched.

use crate::model::LayoutGraph;
use stratal_graphlib::{alg, NodeId};

/// Returns an acyclic copy of `g`. Self-loops are structural noise and are
/// neither reversed nor counted as cycles.
pub fn run(g: &LayoutGraph) -> LayoutGraph {
    let mut out = g.clone();
    let comps = alg::components(&out);

    let mut visited = vec![false; out.node_count()];
    let mut stack = vec![false; out.node_count()];
    let mut reversed: usize = 0;
    for &rep in comps.nontrivial() {
        walk(&mut out, rep, &mut visited, &mut stack, &mut reversed);
    }

    if reversed > 0 {
        tracing::debug!(reversed, "broke cycles by reversing back-edges");
    }
    out
}

fn walk(
    g: &mut LayoutGraph,
    v: NodeId,
    visited: &mut [bool],
    stack: &mut [bool],
    reversed: &mut usize,
) {
    if visited[v.index()] {
        return;
    }
    visited[v.index()] = true;
    stack[v.index()] = true;

    for e in g.edge_ids() {
        let edge = g.edge(e);
        if edge.from != v || edge.is_self_loop() {
            continue;
        }
        let w = edge.to;
        if stack[w.index()] {
            g.reverse_edge(e);
            let label = g.edge_label_mut(e);
            label.reversed = !label.reversed;
            *reversed += 1;
        } else if !visited[w.index()] {
            walk(g, w, visited, stack, reversed);
        }
    }

    stack[v.index()] = false;
}
