//! The layout's output artifact.
//!
//! A [`Composition`] maps every place and transition of the input net to a
//! grid point and every normalized path to its waypoint polyline. The maps
//! are keyed lookups only; any order-sensitive output (like
//! [`Composition::to_json`]) sorts ids first.

use rustc_hash::FxHashMap;
use serde_json::{json, Value};

use crate::model::{Element, PathId, Point};
use crate::net::{PlaceId, TransitionId};

/// Waypoints of one normalized path, running in the source arc's direction.
#[derive(Debug, Clone, PartialEq)]
pub struct PathRoute {
    pub from: Element,
    pub to: Element,
    pub points: Vec<Point>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Composition {
    places: FxHashMap<PlaceId, Point>,
    transitions: FxHashMap<TransitionId, Point>,
    paths: FxHashMap<PathId, PathRoute>,
}

impl Composition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty() && self.transitions.is_empty() && self.paths.is_empty()
    }

    pub fn place(&self, id: PlaceId) -> Option<Point> {
        self.places.get(&id).copied()
    }

    pub fn transition(&self, id: TransitionId) -> Option<Point> {
        self.transitions.get(&id).copied()
    }

    pub fn path(&self, id: PathId) -> Option<&PathRoute> {
        self.paths.get(&id)
    }

    pub fn place_count(&self) -> usize {
        self.places.len()
    }

    pub fn transition_count(&self) -> usize {
        self.transitions.len()
    }

    pub fn path_count(&self) -> usize {
        self.paths.len()
    }

    /// Place entries sorted by id.
    pub fn places(&self) -> Vec<(PlaceId, Point)> {
        let mut out: Vec<_> = self.places.iter().map(|(k, v)| (*k, *v)).collect();
        out.sort_by_key(|(k, _)| *k);
        out
    }

    /// Transition entries sorted by id.
    pub fn transitions(&self) -> Vec<(TransitionId, Point)> {
        let mut out: Vec<_> = self.transitions.iter().map(|(k, v)| (*k, *v)).collect();
        out.sort_by_key(|(k, _)| *k);
        out
    }

    /// Path entries sorted by id.
    pub fn paths(&self) -> Vec<(PathId, &PathRoute)> {
        let mut out: Vec<_> = self.paths.iter().map(|(k, v)| (*k, v)).collect();
        out.sort_by_key(|(k, _)| *k);
        out
    }

    pub(crate) fn set_place(&mut self, id: PlaceId, pos: Point) {
        self.places.insert(id, pos);
    }

    pub(crate) fn set_transition(&mut self, id: TransitionId, pos: Point) {
        self.transitions.insert(id, pos);
    }

    pub(crate) fn insert_path(&mut self, id: PathId, from: Element, to: Element) {
        self.paths.insert(
            id,
            PathRoute {
                from,
                to,
                points: Vec::new(),
            },
        );
    }

    /// Pushes a waypoint to the front of a path's polyline; callers visit
    /// ranks from the highest down, so the finished vector runs low to high.
    pub(crate) fn prepend_waypoint(&mut self, id: PathId, pos: Point) {
        if let Some(route) = self.paths.get_mut(&id) {
            route.points.insert(0, pos);
        }
    }

    pub(crate) fn reverse_path(&mut self, id: PathId) {
        if let Some(route) = self.paths.get_mut(&id) {
            route.points.reverse();
        }
    }

    /// Shifts everything so the minimum y becomes 0.
    pub fn align_y(&mut self) {
        let min_y = self
            .points()
            .map(|p| p.y)
            .fold(f64::INFINITY, f64::min);
        if min_y.is_finite() && min_y != 0.0 {
            self.translate(0.0, -min_y);
        }
    }

    /// Recenters the bounding box on `(x, y)`.
    pub fn center_to(&mut self, x: f64, y: f64) {
        let Some((min, max)) = self.bounds() else {
            return;
        };
        let cx = (min.x + max.x) / 2.0;
        let cy = (min.y + max.y) / 2.0;
        self.translate(x - cx, y - cy);
    }

    /// Deterministic JSON rendering: ids sorted, object order stable.
    pub fn to_json(&self) -> Value {
        let places: serde_json::Map<String, Value> = self
            .places()
            .into_iter()
            .map(|(id, p)| (id.index().to_string(), point_json(p)))
            .collect();
        let transitions: serde_json::Map<String, Value> = self
            .transitions()
            .into_iter()
            .map(|(id, p)| (id.index().to_string(), point_json(p)))
            .collect();
        let paths: serde_json::Map<String, Value> = self
            .paths()
            .into_iter()
            .map(|(id, route)| {
                (
                    id.index().to_string(),
                    json!({
                        "from": element_json(route.from),
                        "to": element_json(route.to),
                        "points": route.points.iter().map(|p| point_json(*p)).collect::<Vec<_>>(),
                    }),
                )
            })
            .collect();

        json!({
            "places": places,
            "transitions": transitions,
            "paths": paths,
        })
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        for pos in self.places.values_mut() {
            pos.x += dx;
            pos.y += dy;
        }
        for pos in self.transitions.values_mut() {
            pos.x += dx;
            pos.y += dy;
        }
        for route in self.paths.values_mut() {
            for pos in &mut route.points {
                pos.x += dx;
                pos.y += dy;
            }
        }
    }

    fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.places
            .values()
            .copied()
            .chain(self.transitions.values().copied())
            .chain(self.paths.values().flat_map(|r| r.points.iter().copied()))
    }

    fn bounds(&self) -> Option<(Point, Point)> {
        let mut points = self.points();
        let first = points.next()?;
        let mut min = first;
        let mut max = first;
        for p in points {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Some((min, max))
    }
}

fn point_json(p: Point) -> Value {
    json!({ "x": p.x, "y": p.y })
}

fn element_json(e: Element) -> Value {
    match e {
        Element::Place(id) => json!({ "place": id.index() }),
        Element::Transition(id) => json!({ "transition": id.index() }),
        Element::PathPoint(id) => json!({ "path": id.index() }),
    }
}
