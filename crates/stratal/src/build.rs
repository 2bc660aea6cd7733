//! Builds the layout graph from a net.
//!
//! One node per place and per transition, one edge per non-dumb arc:
//! place -> transition for origins, transition -> place for targets. The
//! arena index tables make node creation idempotent per source element no
//! matter how many arcs reference it.

use crate::model::{EdgeLabel, Element, LayoutGraph, NodeLabel};
use crate::net::Net;
use stratal_graphlib::NodeId;

pub fn load_graph(net: &Net) -> LayoutGraph {
    let mut g = LayoutGraph::with_capacity(net.place_count() + net.transition_count(), 16);

    let place_nodes: Vec<NodeId> = net
        .places()
        .map(|(id, _)| g.add_node(NodeLabel::new(Element::Place(id))))
        .collect();
    let transition_nodes: Vec<NodeId> = net
        .transitions()
        .map(|(id, _)| g.add_node(NodeLabel::new(Element::Transition(id))))
        .collect();

    for (id, tran) in net.transitions() {
        let t = transition_nodes[id.index()];
        for arc in tran.origins() {
            if arc.kind.is_dumb() {
                continue;
            }
            g.add_edge(place_nodes[arc.place.index()], t, EdgeLabel::default());
        }
        for arc in tran.targets() {
            if arc.kind.is_dumb() {
                continue;
            }
            g.add_edge(t, place_nodes[arc.place.index()], EdgeLabel::default());
        }
    }

    g
}
