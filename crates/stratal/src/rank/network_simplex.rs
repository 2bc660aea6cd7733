//! Cut value maintenance and the edge-exchange loop.
//!
//! Once `feasible_tree` has produced a tight spanning tree, every tree edge
//! gets a cut value: the net weight flowing from its tail component to its
//! head component when the edge is removed. A negative cut value means the
//! total edge length shrinks if that tree edge is swapped for the
//! minimum-slack graph edge crossing the same cut in the opposite
//! direction. The loop in [`crate::rank::rank`] repeats the swap until no
//! negative cut value remains.

use super::tree::Tree;
use super::util;
use crate::model::LayoutGraph;
use stratal_graphlib::{EdgeId, NodeId};

/// Assigns `low`/`lim` post-order bounds and parent pointers over the whole
/// forest. `lim` numbering is global and starts at 1; within a component
/// the root holds the largest `lim`, and a node's subtree is exactly the
/// nodes whose `lim` falls in `[low, lim]`.
pub fn init_low_lim_values(t: &mut Tree) {
    fn dfs(
        t: &mut Tree,
        v: NodeId,
        parent: Option<NodeId>,
        next_lim: &mut i32,
        visited: &mut [bool],
    ) {
        visited[v.index()] = true;
        let low = *next_lim;
        for w in t.neighbors(v) {
            if !visited[w.index()] {
                dfs(t, w, Some(v), next_lim, visited);
            }
        }
        let label = t.node_mut(v);
        label.low = low;
        label.lim = *next_lim;
        label.parent = parent;
        *next_lim += 1;
    }

    let mut visited = vec![false; t.arena_len()];
    let mut next_lim = 1;
    for v in t.node_ids() {
        if !visited[v.index()] {
            dfs(t, v, None, &mut next_lim, &mut visited);
        }
    }
}

/// Computes every tree edge's cut value, leaves first so that each node's
/// children are settled before the edge to its parent is evaluated.
pub fn init_cut_values(t: &mut Tree, g: &LayoutGraph) {
    let mut order = t.node_ids();
    order.sort_by_key(|v| t.node(*v).lim);
    for child in order {
        if let Some(parent) = t.node(child).parent {
            let cut = calc_cut_value(t, g, child, parent);
            t.edge_mut(child, parent).cutvalue = cut;
        }
    }
}

/// Cut value of the tree edge between `child` and its parent, computed
/// from the graph edges incident to `child` plus the already-known cut
/// values of the tree edges below it.
fn calc_cut_value(t: &Tree, g: &LayoutGraph, child: NodeId, parent: NodeId) -> f64 {
    // Orientation of the cut: is the child on the tail side?
    let child_is_tail = g
        .edges()
        .any(|(_, e)| e.from == child && e.to == parent);

    let mut cut = 0.0;
    for e in g.node_edges(child) {
        let edge = g.edge(e);
        if edge.is_self_loop() {
            continue;
        }
        let is_out = edge.from == child;
        let other = if is_out { edge.to } else { edge.from };
        let points_to_head = is_out == child_is_tail;
        let weight = edge.label.weight;
        cut += if points_to_head { weight } else { -weight };

        if other != parent && t.has_edge(child, other) {
            // Edges beyond a child subtree are already summed up in that
            // subtree's cut value; fold it in instead of re-walking.
            let other_cut = t.edge(child, other).cutvalue;
            cut += if points_to_head { -other_cut } else { other_cut };
        }
    }
    cut
}

/// The first tree edge with a negative cut value, if any.
pub fn leave_edge(t: &Tree) -> Option<(NodeId, NodeId)> {
    t.edges()
        .iter()
        .find(|e| e.cutvalue < 0.0)
        .map(|e| (e.v, e.w))
}

/// The minimum-slack graph edge crossing the cut of tree edge `(v, w)` in
/// the opposite direction. Breaking the tree at `(v, w)` and rejoining it
/// through the result keeps the tree spanning and feasible.
pub fn enter_edge(t: &Tree, g: &LayoutGraph, v: NodeId, w: NodeId) -> (NodeId, NodeId) {
    // Orient so that v -> w is a graph edge.
    let (v, w) = if graph_edge_between(g, v, w).is_some() {
        (v, w)
    } else {
        (w, v)
    };

    // The subtree hanging off the child end of the broken edge; `flip` is
    // true when w is that end.
    let flip = t.node(v).lim > t.node(w).lim;
    let subtree = if flip { t.node(w) } else { t.node(v) };
    let in_subtree = |x: NodeId| {
        let lim = t.node(x).lim;
        subtree.low <= lim && lim <= subtree.lim
    };

    let mut best: Option<(NodeId, NodeId, i32)> = None;
    for (id, edge) in g.edges() {
        if edge.is_self_loop() {
            continue;
        }
        if in_subtree(edge.from) == flip && in_subtree(edge.to) != flip {
            let slack = util::slack(g, id);
            if best.map_or(true, |(_, _, s)| slack < s) {
                best = Some((edge.from, edge.to, slack));
            }
        }
    }

    let (from, to, _) = best.expect("no graph edge crosses the broken cut");
    (from, to)
}

/// Swaps tree edge `e` for graph edge `f`, then rebuilds the tree
/// bookkeeping and reranks every node from its tree parent.
pub fn exchange_edges(
    t: &mut Tree,
    g: &mut LayoutGraph,
    e: (NodeId, NodeId),
    f: (NodeId, NodeId),
) {
    t.remove_edge(e.0, e.1);
    t.add_edge(f.0, f.1);
    init_low_lim_values(t);
    init_cut_values(t, g);
    update_ranks(t, g);
}

/// Re-derives every rank from the tree: each node sits exactly `minlen`
/// away from its parent, on the side the connecting graph edge dictates.
/// Roots keep their current rank.
fn update_ranks(t: &Tree, g: &mut LayoutGraph) {
    let mut order = t.node_ids();
    order.sort_by_key(|v| std::cmp::Reverse(t.node(*v).lim));
    for v in order {
        let Some(parent) = t.node(v).parent else {
            continue;
        };
        let (minlen, points_up) = match graph_edge_between(g, v, parent) {
            Some(e) => (g.edge(e).label.minlen, true),
            None => {
                let e = graph_edge_between(g, parent, v)
                    .expect("tree edge with no graph counterpart");
                (g.edge(e).label.minlen, false)
            }
        };
        let parent_rank = g.node(parent).rank.expect("parent rank missing");
        g.node_mut(v).rank = Some(if points_up {
            parent_rank - minlen
        } else {
            parent_rank + minlen
        });
    }
}

fn graph_edge_between(g: &LayoutGraph, from: NodeId, to: NodeId) -> Option<EdgeId> {
    g.edges()
        .find(|(_, e)| e.from == from && e.to == to)
        .map(|(id, _)| id)
}
