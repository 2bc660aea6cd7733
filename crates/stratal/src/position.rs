//! Final coordinate assignment.
//!
//! Ranks map to x, orders to y, both on a fixed grid step. Sparse ranks are
//! centered against the widest one, so a lone node in a deep layer sits in
//! the middle of the drawing instead of hugging the top edge. The finished
//! composition is aligned and centered on the configured origin.

use crate::compose::Composition;
use crate::model::{Element, LayoutConfig, LayoutGraph, PathId, Point};
use crate::normalize::PathInfo;
use stratal_graphlib::NodeId;

pub fn positions(g: &LayoutGraph, paths: &[PathInfo], config: &LayoutConfig) -> Composition {
    let mut comp = Composition::new();
    if g.is_empty() {
        return comp;
    }

    let max_rank = g
        .node_ids()
        .map(|v| g.node(v).rank.expect("node rank missing"))
        .max()
        .unwrap_or(0) as usize;
    let mut rank_sizes = vec![0usize; max_rank + 1];
    for v in g.node_ids() {
        rank_sizes[g.node(v).rank.expect("node rank missing") as usize] += 1;
    }
    let max_rank_size = rank_sizes.iter().copied().max().unwrap_or(0);

    for (i, info) in paths.iter().enumerate() {
        comp.insert_path(PathId(i), info.from, info.to);
    }

    // Highest rank first, so prepending waypoints leaves each path's
    // polyline running from its low-rank end to its high-rank end.
    let mut order: Vec<NodeId> = g.node_ids().collect();
    order.sort_by_key(|v| {
        (
            std::cmp::Reverse(g.node(*v).rank.expect("node rank missing")),
            v.index(),
        )
    });

    for v in order {
        let label = g.node(v);
        let rank = label.rank.expect("node rank missing") as usize;
        let node_order = label.order.expect("node order missing");

        let x = rank as f64 * config.unit;
        let y = (node_order as f64 + (max_rank_size - rank_sizes[rank]) as f64 / 2.0)
            * config.unit;
        let pos = Point { x, y };

        match label.element {
            Element::Place(id) => comp.set_place(id, pos),
            Element::Transition(id) => comp.set_transition(id, pos),
            Element::PathPoint(id) => comp.prepend_waypoint(id, pos),
        }
    }

    // Reversed chains were laid out against the arc; flip them back.
    for (i, info) in paths.iter().enumerate() {
        if info.reversed {
            comp.reverse_path(PathId(i));
        }
    }

    comp.align_y();
    comp.center_to(config.origin.x, config.origin.y);
    comp
}
