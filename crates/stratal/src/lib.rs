//! Layered layout for Petri-net diagrams.
//!
//! `stratal` turns a [`Net`] of places, transitions and arcs into a
//! [`Composition`]: a grid point per element plus a waypoint polyline per
//! multi-rank arc. The pipeline is the classic layered (Sugiyama/dot)
//! sequence:
//!
//! 1. [`build`] — one graph node per place/transition, one edge per arc;
//! 2. [`acyclic`] — reverse back-edges inside strongly connected components;
//! 3. [`rank`] — layer assignment by tight tree plus cut value exchange;
//! 4. [`normalize`] — split multi-layer edges into waypoint chains;
//! 5. [`order`] — within-layer ordering by iterative median sweeps;
//! 6. [`position`] — grid coordinates, aligned and centered.
//!
//! Everything is synchronous and single-threaded; a layout call shares no
//! state with any other. The library emits `tracing` debug events per stage
//! and never installs a subscriber.
//!
//! ```
//! use stratal::{ArcKind, Net};
//!
//! let mut net = Net::new();
//! let p1 = net.add_place("p1");
//! let t1 = net.add_transition("t1");
//! let p2 = net.add_place("p2");
//! net.add_origin(t1, p1, ArcKind::Normal).unwrap();
//! net.add_target(t1, p2, ArcKind::Normal).unwrap();
//!
//! let comp = stratal::layout(&net);
//! assert!(comp.place(p1).unwrap().x < comp.transition(t1).unwrap().x);
//! ```

pub mod acyclic;
pub mod build;
pub mod compose;
pub mod model;
pub mod net;
pub mod normalize;
pub mod order;
pub mod position;
pub mod rank;

pub use compose::{Composition, PathRoute};
pub use model::{Element, LayoutConfig, PathId, Point};
pub use net::{Arc, ArcKind, Net, NetError, Place, PlaceId, Transition, TransitionId};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Lays out a net with the default configuration.
pub fn layout(net: &Net) -> Composition {
    layout_with(net, &LayoutConfig::default())
}

/// Lays out a net. An empty net yields an empty composition without
/// touching the pipeline.
pub fn layout_with(net: &Net, config: &LayoutConfig) -> Composition {
    if net.is_empty() {
        return Composition::new();
    }

    let g = build::load_graph(net);
    tracing::debug!(
        nodes = g.node_count(),
        edges = g.edge_count(),
        "built layout graph"
    );

    let mut g = acyclic::run(&g);
    rank::rank(&mut g);
    let paths = normalize::run(&mut g);
    order::order(&mut g, config.order_sweeps);
    position::positions(&g, &paths, config)
}
