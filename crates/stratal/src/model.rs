//! Label and geometry types shared across the layout pipeline.
//!
//! Node and edge labels are annotated in place by the successive passes;
//! the same label records travel from cycle elimination through positioning.

use serde::{Deserialize, Serialize};

use crate::net::{PlaceId, TransitionId};
use stratal_graphlib::Graph;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };
}

/// Handle to a multi-segment path created by long-edge normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PathId(pub(crate) usize);

impl PathId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// What a layout node stands for in the source net.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    Place(PlaceId),
    Transition(TransitionId),
    /// Intermediate waypoint of a path spanning more than one rank.
    PathPoint(PathId),
}

#[derive(Debug, Clone, PartialEq)]
pub struct NodeLabel {
    pub element: Element,
    /// Layer index, assigned by ranking.
    pub rank: Option<i32>,
    /// Position within the rank, assigned by ordering.
    pub order: Option<usize>,
    /// Ordering tie-break: count of constrained adjacent-rank neighbors.
    pub priority: usize,
    /// Median of adjacent-rank neighbor orders during ordering sweeps.
    pub weight: f64,
}

impl NodeLabel {
    pub fn new(element: Element) -> Self {
        Self {
            element,
            rank: None,
            order: None,
            priority: 0,
            weight: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EdgeLabel {
    pub weight: f64,
    /// Minimum rank span; a real edge may never connect equal ranks.
    pub minlen: i32,
    /// Set when cycle elimination flipped this edge's direction.
    pub reversed: bool,
}

impl Default for EdgeLabel {
    fn default() -> Self {
        Self {
            weight: 1.0,
            minlen: 1,
            reversed: false,
        }
    }
}

pub type LayoutGraph = Graph<NodeLabel, EdgeLabel>;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Grid step between ranks and between orders, in output units.
    pub unit: f64,
    /// Budget of ordering sweeps; sweeps stop early once stable.
    pub order_sweeps: usize,
    /// Point the finished composition is centered on.
    pub origin: Point,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            unit: 90.0,
            order_sweeps: 8,
            origin: Point::ORIGIN,
        }
    }
}
