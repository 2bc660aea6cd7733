//! Parameterised depth-first traversal with open/close timestamps.
//!
//! The traversal only enters a node for which `cond` holds, calls `on_open`
//! when a node is first entered and `on_close` once its subtree is
//! exhausted, and records discovery/finishing counters for every node it
//! opened. Callers pass the transpose to search against edge direction.

use super::{Graph, NodeId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    NotFound,
    Open,
    Closed,
}

/// Discovery (`open`) and finishing (`close`) counters per node, drawn from
/// one monotonically increasing step counter. `0` means never visited.
///
/// The counters carry the classic interval-containment property: `v` is an
/// ancestor of `w` in the traversal forest iff
/// `open[v] < open[w] && close[w] < close[v]`.
#[derive(Debug, Clone, Default)]
pub struct DfsTimes {
    pub open: Vec<usize>,
    pub close: Vec<usize>,
}

impl DfsTimes {
    pub fn visited(&self, v: NodeId) -> bool {
        self.open.get(v.index()).is_some_and(|&t| t != 0)
    }
}

/// Depth-first search from `v0` along out-edges.
///
/// Safe against cycles and self-loops: a node is recursed into at most once
/// per invocation. Cross-invocation memory (e.g. a shared visited set for
/// whole-graph sweeps) belongs in the caller's `cond`.
pub fn dfs<N, E>(
    g: &Graph<N, E>,
    v0: NodeId,
    mut cond: impl FnMut(NodeId) -> bool,
    mut on_open: impl FnMut(NodeId),
    mut on_close: impl FnMut(NodeId),
) -> DfsTimes {
    let n = g.node_count();
    let mut state = vec![State::NotFound; n];
    let mut times = DfsTimes {
        open: vec![0; n],
        close: vec![0; n],
    };
    let mut step: usize = 0;

    visit(
        g,
        v0,
        &mut state,
        &mut times,
        &mut step,
        &mut cond,
        &mut on_open,
        &mut on_close,
    );
    times
}

#[allow(clippy::too_many_arguments)]
fn visit<N, E>(
    g: &Graph<N, E>,
    v: NodeId,
    state: &mut [State],
    times: &mut DfsTimes,
    step: &mut usize,
    cond: &mut impl FnMut(NodeId) -> bool,
    on_open: &mut impl FnMut(NodeId),
    on_close: &mut impl FnMut(NodeId),
) {
    if !cond(v) {
        return;
    }
    on_open(v);
    state[v.index()] = State::Open;
    *step += 1;
    times.open[v.index()] = *step;

    for (_, edge) in g.edges() {
        if edge.from == v && state[edge.to.index()] == State::NotFound {
            visit(g, edge.to, state, times, step, cond, on_open, on_close);
        }
    }

    state[v.index()] = State::Closed;
    *step += 1;
    times.close[v.index()] = *step;
    on_close(v);
}
