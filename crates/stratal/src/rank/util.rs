//! Shared ranking helpers.

use crate::model::LayoutGraph;
use stratal_graphlib::{EdgeId, NodeId};

/// Initial feasible ranking: longest path from the sources. Every edge ends
/// up with non-negative slack, which is all the tight tree needs to start.
pub fn longest_path(g: &mut LayoutGraph) {
    fn dfs(g: &mut LayoutGraph, v: NodeId, memo: &mut [Option<i32>]) -> i32 {
        if let Some(rank) = memo[v.index()] {
            return rank;
        }
        // Break self-loop recursion before descending.
        memo[v.index()] = Some(0);

        let outs = g.out_edges(v);
        let mut rank: Option<i32> = None;
        for e in outs {
            let edge = g.edge(e);
            if edge.is_self_loop() {
                continue;
            }
            let (to, minlen) = (edge.to, edge.label.minlen);
            let candidate = dfs(g, to, memo) - minlen;
            rank = Some(match rank {
                Some(current) => current.min(candidate),
                None => candidate,
            });
        }

        let rank = rank.unwrap_or(0);
        g.node_mut(v).rank = Some(rank);
        memo[v.index()] = Some(rank);
        rank
    }

    let mut memo: Vec<Option<i32>> = vec![None; g.node_count()];
    for v in g.sources() {
        dfs(g, v, &mut memo);
    }
    // A node inside a cycle can be unreachable from any source; rank it too.
    for v in g.node_ids() {
        if memo[v.index()].is_none() {
            dfs(g, v, &mut memo);
        }
    }
}

/// How much the edge's span exceeds its required minimum length.
pub fn slack(g: &LayoutGraph, e: EdgeId) -> i32 {
    let edge = g.edge(e);
    let from_rank = g.node(edge.from).rank.expect("edge tail rank missing");
    let to_rank = g.node(edge.to).rank.expect("edge head rank missing");
    to_rank - from_rank - edge.label.minlen
}

/// Shifts all ranks so the minimum is 0; no-op when it already is.
pub fn normalize_ranks(g: &mut LayoutGraph) {
    let mut min_rank = i32::MAX;
    for v in g.node_ids() {
        if let Some(rank) = g.node(v).rank {
            min_rank = min_rank.min(rank);
        }
    }
    if min_rank == i32::MAX || min_rank == 0 {
        return;
    }
    for v in g.node_ids() {
        if let Some(rank) = g.node(v).rank {
            g.node_mut(v).rank = Some(rank - min_rank);
        }
    }
}
