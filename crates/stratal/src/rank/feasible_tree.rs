//! Growing a maximal tight spanning tree over the ranked graph.

use super::tree::Tree;
use super::util;
use crate::model::LayoutGraph;
use stratal_graphlib::{EdgeId, NodeId};

/// Builds a spanning tree of tight edges (slack 0), shifting ranks as
/// needed to tighten one more edge whenever the tree stalls. On a
/// disconnected graph the result is a spanning forest: each component gets
/// its own root, ranked independently.
///
/// Requires an initial feasible ranking (see [`util::longest_path`]).
pub fn feasible_tree(g: &mut LayoutGraph) -> Tree {
    let mut t = Tree::with_arena(g.node_count());
    t.add_node(NodeId::from_index(0));

    while tight_tree(g, &mut t) < g.node_count() {
        match min_slack_edge(g, &t) {
            Some(e) => {
                let slack = util::slack(g, e);
                let delta = if t.has_node(g.edge(e).from) {
                    slack
                } else {
                    -slack
                };
                // Tree edges stay tight under a uniform shift; the chosen
                // edge becomes tight.
                for v in t.node_ids() {
                    let rank = g.node(v).rank.expect("tree node rank missing");
                    g.node_mut(v).rank = Some(rank + delta);
                }
            }
            None => {
                // No edge touches the tree at all: the graph is
                // disconnected. Adopt the first unreached node as the root
                // of a new forest component.
                let v = g
                    .node_ids()
                    .find(|v| !t.has_node(*v))
                    .expect("tree incomplete yet every node reached");
                t.add_node(v);
            }
        }
    }
    t
}

/// Extends the tree along tight edges in both directions and returns the
/// resulting member count.
fn tight_tree(g: &LayoutGraph, t: &mut Tree) -> usize {
    fn dfs(g: &LayoutGraph, t: &mut Tree, v: NodeId) {
        for e in g.node_edges(v) {
            let edge = g.edge(e);
            if edge.is_self_loop() {
                continue;
            }
            let w = if edge.from == v { edge.to } else { edge.from };
            if !t.has_node(w) && util::slack(g, e) == 0 {
                t.add_node(w);
                t.add_edge(v, w);
                dfs(g, t, w);
            }
        }
    }

    for v in t.node_ids() {
        dfs(g, t, v);
    }
    t.node_count()
}

/// The minimum-slack graph edge with exactly one endpoint in the tree.
fn min_slack_edge(g: &LayoutGraph, t: &Tree) -> Option<EdgeId> {
    let mut best: Option<(EdgeId, i32)> = None;
    for (id, edge) in g.edges() {
        if edge.is_self_loop() || t.has_node(edge.from) == t.has_node(edge.to) {
            continue;
        }
        let slack = util::slack(g, id);
        if best.map_or(true, |(_, s)| slack < s) {
            best = Some((id, slack));
        }
    }
    best.map(|(id, _)| id)
}
