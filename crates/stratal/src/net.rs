//! The Petri-net input model.
//!
//! This is the read-only source the layout consumes: places, transitions,
//! and per-transition origin/target arcs. Arcs flagged [`ArcKind::Dumb`] are
//! purely visual annotations and never become layout edges. Id validation at
//! the construction boundary is the only recoverable error surface in the
//! crate; the layout pipeline itself does not fail on a well-formed net.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlaceId(pub(crate) usize);

impl PlaceId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TransitionId(pub(crate) usize);

impl TransitionId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArcKind {
    #[default]
    Normal,
    /// A non-structural arc kept for drawing only; skipped by the builder.
    Dumb,
}

impl ArcKind {
    pub fn is_dumb(self) -> bool {
        self == ArcKind::Dumb
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arc {
    pub place: PlaceId,
    pub kind: ArcKind,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub name: String,
    origins: Vec<Arc>,
    targets: Vec<Arc>,
}

impl Transition {
    /// Arcs feeding this transition (place -> transition).
    pub fn origins(&self) -> &[Arc] {
        &self.origins
    }

    /// Arcs fed by this transition (transition -> place).
    pub fn targets(&self) -> &[Arc] {
        &self.targets
    }
}

#[derive(Debug, thiserror::Error)]
pub enum NetError {
    #[error("place #{0} is not part of this net")]
    UnknownPlace(usize),

    #[error("transition #{0} is not part of this net")]
    UnknownTransition(usize),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Net {
    places: Vec<Place>,
    transitions: Vec<Transition>,
}

impl Net {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_place(&mut self, name: impl Into<String>) -> PlaceId {
        self.places.push(Place { name: name.into() });
        PlaceId(self.places.len() - 1)
    }

    pub fn add_transition(&mut self, name: impl Into<String>) -> TransitionId {
        self.transitions.push(Transition {
            name: name.into(),
            origins: Vec::new(),
            targets: Vec::new(),
        });
        TransitionId(self.transitions.len() - 1)
    }

    /// Adds a place -> transition arc.
    pub fn add_origin(
        &mut self,
        transition: TransitionId,
        place: PlaceId,
        kind: ArcKind,
    ) -> Result<(), NetError> {
        self.check_place(place)?;
        self.transition_entry(transition)?
            .origins
            .push(Arc { place, kind });
        Ok(())
    }

    /// Adds a transition -> place arc.
    pub fn add_target(
        &mut self,
        transition: TransitionId,
        place: PlaceId,
        kind: ArcKind,
    ) -> Result<(), NetError> {
        self.check_place(place)?;
        self.transition_entry(transition)?
            .targets
            .push(Arc { place, kind });
        Ok(())
    }

    pub fn places(&self) -> impl Iterator<Item = (PlaceId, &Place)> + '_ {
        self.places.iter().enumerate().map(|(i, p)| (PlaceId(i), p))
    }

    pub fn transitions(&self) -> impl Iterator<Item = (TransitionId, &Transition)> + '_ {
        self.transitions
            .iter()
            .enumerate()
            .map(|(i, t)| (TransitionId(i), t))
    }

    pub fn place_count(&self) -> usize {
        self.places.len()
    }

    pub fn transition_count(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty() && self.transitions.is_empty()
    }

    fn check_place(&self, place: PlaceId) -> Result<(), NetError> {
        if place.0 < self.places.len() {
            Ok(())
        } else {
            Err(NetError::UnknownPlace(place.0))
        }
    }

    fn transition_entry(&mut self, transition: TransitionId) -> Result<&mut Transition, NetError> {
        self.transitions
            .get_mut(transition.0)
            .ok_or(NetError::UnknownTransition(transition.0))
    }
}
