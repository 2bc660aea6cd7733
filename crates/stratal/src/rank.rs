//! Rank assignment: every edge must span at least one layer downstream.
//!
//! An initial longest-path ranking is tightened by growing a maximal tight
//! tree and then iteratively swapping tree edges with negative cut values
//! for minimum-slack replacements. This is the classic tight-tree / cut
//! value technique; it reaches a local optimum of total weighted edge
//! length, which is all the layout needs.

pub mod feasible_tree;
pub mod network_simplex;
pub mod tree;
pub mod util;

use crate::model::LayoutGraph;

pub fn rank(g: &mut LayoutGraph) {
    if g.is_empty() {
        return;
    }

    util::longest_path(g);
    let mut t = feasible_tree::feasible_tree(g);
    network_simplex::init_low_lim_values(&mut t);
    network_simplex::init_cut_values(&mut t, g);

    while let Some((v, w)) = network_simplex::leave_edge(&t) {
        let f = network_simplex::enter_edge(&t, g, v, w);
        network_simplex::exchange_edges(&mut t, g, (v, w), f);
    }

    util::normalize_ranks(g);
}
