//! Long-edge normalization.
//!
//! After ranking, an edge may span several layers. Ordering and positioning
//! only reason about adjacent ranks, so every edge with a span greater than
//! one is replaced here by a chain of waypoint nodes, one per intermediate
//! rank, joined by unit-length edges. Each chain is registered as a path so
//! the composition can emit its waypoints as a polyline later.

use crate::model::{EdgeLabel, Element, LayoutGraph, NodeLabel, PathId};
use stratal_graphlib::EdgeId;

/// Endpoints of a normalized path, in the source net's arc direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathInfo {
    pub from: Element,
    pub to: Element,
    /// The underlying edge was flipped by cycle elimination; the waypoint
    /// chain runs against the arc direction and must be read backwards.
    pub reversed: bool,
}

/// Splits every edge spanning more than one rank. Returns one [`PathInfo`]
/// per created chain; `PathId(i)` names the `i`-th entry.
pub fn run(g: &mut LayoutGraph) -> Vec<PathInfo> {
    let mut long: Vec<EdgeId> = g
        .edge_ids()
        .filter(|&e| {
            let edge = g.edge(e);
            !edge.is_self_loop() && span(g, e) > 1
        })
        .collect();
    // Removal swaps the last edge into the vacated slot; walking the ids
    // back to front keeps the remaining ones valid.
    long.reverse();

    let mut paths = Vec::with_capacity(long.len());
    for e in long {
        let edge = g.remove_edge(e);
        let from_rank = g.node(edge.from).rank.expect("edge tail rank missing");
        let to_rank = g.node(edge.to).rank.expect("edge head rank missing");

        // A reversed edge runs against the arc: swap the endpoints back so
        // the path reads in the source net's direction.
        let (arc_from, arc_to) = if edge.label.reversed {
            (edge.to, edge.from)
        } else {
            (edge.from, edge.to)
        };
        let id = PathId(paths.len());
        paths.push(PathInfo {
            from: g.node(arc_from).element,
            to: g.node(arc_to).element,
            reversed: edge.label.reversed,
        });

        let mut tail = edge.from;
        for rank in from_rank + 1..to_rank {
            let mut label = NodeLabel::new(Element::PathPoint(id));
            label.rank = Some(rank);
            let waypoint = g.add_node(label);
            g.add_edge(tail, waypoint, unit_label(&edge.label));
            tail = waypoint;
        }
        g.add_edge(tail, edge.to, unit_label(&edge.label));
    }

    if !paths.is_empty() {
        tracing::debug!(paths = paths.len(), "split long edges into waypoint chains");
    }
    paths
}

fn span(g: &LayoutGraph, e: EdgeId) -> i32 {
    let edge = g.edge(e);
    let from_rank = g.node(edge.from).rank.expect("edge tail rank missing");
    let to_rank = g.node(edge.to).rank.expect("edge head rank missing");
    to_rank - from_rank
}

fn unit_label(original: &EdgeLabel) -> EdgeLabel {
    EdgeLabel {
        weight: original.weight,
        minlen: 1,
        reversed: original.reversed,
    }
}
