//! Within-rank ordering by iterative median sweeps.
//!
//! Starting from a depth-first initial order, sweeps alternate downward and
//! upward: each node takes the median order of its neighbors in the fixed
//! adjacent rank as its weight, ranks are re-sorted, and the layering with
//! the fewest crossings seen so far is kept. Crossings between two ranks
//! are counted with the accumulator-tree method, so a sweep costs
//! O(E log V) rather than the quadratic pairwise check.

use crate::model::LayoutGraph;
use stratal_graphlib::NodeId;

/// Orders every rank. After return each node's `order` is set, and within
/// any rank the orders are distinct and contiguous from 0.
pub fn order(g: &mut LayoutGraph, sweeps: usize) {
    if g.is_empty() {
        return;
    }

    let mut layers = init_order(g);
    apply(g, &layers);

    let mut best = layers.clone();
    let mut best_cc = cross_count(g, &layers);

    for sweep in 0..sweeps {
        let downward = sweep % 2 == 0;
        let before = layers.clone();

        let indices: Vec<usize> = if downward {
            (1..layers.len()).collect()
        } else {
            (0..layers.len().saturating_sub(1)).rev().collect()
        };
        for r in indices {
            median_sort(g, &mut layers, r, downward);
            apply_rank(g, &layers[r]);
        }

        let cc = cross_count(g, &layers);
        if cc < best_cc {
            best_cc = cc;
            best = layers.clone();
        }
        if layers == before {
            break;
        }
    }

    apply(g, &best);
    tracing::debug!(crossings = best_cc, "ordered ranks");
}

/// Layer matrix in depth-first discovery order, seeded rank by rank. Seeds
/// are taken in (rank, arena id) order so the result is deterministic.
fn init_order(g: &LayoutGraph) -> Vec<Vec<NodeId>> {
    let max_rank = g
        .node_ids()
        .map(|v| g.node(v).rank.expect("node rank missing"))
        .max()
        .unwrap_or(0) as usize;
    let mut layers: Vec<Vec<NodeId>> = vec![Vec::new(); max_rank + 1];

    let mut seeds: Vec<NodeId> = g.node_ids().collect();
    seeds.sort_by_key(|v| (g.node(*v).rank, v.index()));

    fn fill(g: &LayoutGraph, v: NodeId, layers: &mut [Vec<NodeId>], visited: &mut [bool]) {
        if visited[v.index()] {
            return;
        }
        visited[v.index()] = true;
        let rank = g.node(v).rank.expect("node rank missing") as usize;
        layers[rank].push(v);
        for w in g.successors(v) {
            fill(g, w, layers, visited);
        }
    }

    let mut visited = vec![false; g.node_count()];
    for v in seeds {
        fill(g, v, &mut layers, &mut visited);
    }
    layers
}

/// Re-sorts one rank by the median order of its neighbors in the fixed
/// adjacent rank. Ties go to the node with more constraining neighbors,
/// then to the incumbent order.
fn median_sort(g: &mut LayoutGraph, layers: &mut [Vec<NodeId>], r: usize, downward: bool) {
    for i in 0..layers[r].len() {
        let v = layers[r][i];
        let neighbors = if downward {
            g.predecessors(v)
        } else {
            g.successors(v)
        };
        let mut orders: Vec<usize> = neighbors
            .into_iter()
            .filter(|w| *w != v)
            .map(|w| g.node(w).order.expect("neighbor order missing"))
            .collect();
        orders.sort_unstable();

        let label = g.node_mut(v);
        label.priority = orders.len();
        label.weight = match orders.len() {
            0 => label.order.expect("node order missing") as f64,
            n if n % 2 == 1 => orders[n / 2] as f64,
            n => (orders[n / 2 - 1] + orders[n / 2]) as f64 / 2.0,
        };
    }

    layers[r].sort_by(|a, b| {
        let la = g.node(*a);
        let lb = g.node(*b);
        la.weight
            .total_cmp(&lb.weight)
            .then(lb.priority.cmp(&la.priority))
            .then(la.order.cmp(&lb.order))
    });
}

fn apply(g: &mut LayoutGraph, layers: &[Vec<NodeId>]) {
    for layer in layers {
        apply_rank(g, layer);
    }
}

fn apply_rank(g: &mut LayoutGraph, layer: &[NodeId]) {
    for (i, v) in layer.iter().enumerate() {
        g.node_mut(*v).order = Some(i);
    }
}

/// Total crossings over all consecutive rank pairs.
pub fn cross_count(g: &LayoutGraph, layers: &[Vec<NodeId>]) -> usize {
    let mut cc = 0;
    for r in 1..layers.len() {
        cc += two_layer_cross_count(g, &layers[r - 1], &layers[r]);
    }
    cc
}

/// Crossings between one rank pair via the accumulator tree: walk the
/// south endpoints in (north order, south order) sequence, and for each,
/// sum how many previously inserted endpoints lie strictly to its right.
fn two_layer_cross_count(g: &LayoutGraph, north: &[NodeId], south: &[NodeId]) -> usize {
    let mut pos = vec![0usize; g.node_count()];
    for (i, v) in south.iter().enumerate() {
        pos[v.index()] = i;
    }

    let mut south_seq = Vec::new();
    for &v in north {
        let mut targets: Vec<usize> = g
            .out_edges(v)
            .into_iter()
            .map(|e| g.edge(e))
            .filter(|edge| !edge.is_self_loop())
            .map(|edge| pos[edge.to.index()])
            .collect();
        targets.sort_unstable();
        south_seq.extend(targets);
    }

    let mut first_index = 1;
    while first_index < south.len() {
        first_index <<= 1;
    }
    let tree_size = 2 * first_index - 1;
    first_index -= 1;
    let mut tree = vec![0usize; tree_size];

    let mut cc = 0;
    for p in south_seq {
        let mut index = p + first_index;
        tree[index] += 1;
        let mut right_sum = 0;
        while index > 0 {
            if index % 2 == 1 {
                right_sum += tree[index + 1];
            }
            index = (index - 1) >> 1;
            tree[index] += 1;
        }
        cc += right_sum;
    }
    cc
}
