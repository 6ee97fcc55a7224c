use std::fmt;

use crate::graph::EdgeId;

/// Index of a vertex in its graph's arena
pub type VertexId = usize;

/// Best known distance from the start vertex
///
/// `Infinite` sorts after every finite value, so a min-heap keyed on
/// `Distance` naturally pushes unreached vertices to the bottom.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance {
    Finite(u64),
    #[default]
    Infinite,
}

impl Distance {
    pub fn is_finite(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    /// Returns the finite value, or `None` for an unreached vertex
    pub fn finite(&self) -> Option<u64> {
        match self {
            Distance::Finite(d) => Some(*d),
            Distance::Infinite => None,
        }
    }

    /// Adds an edge weight, saturating to `Infinite` on overflow
    pub fn extend(&self, weight: u64) -> Distance {
        match self {
            Distance::Finite(d) => d
                .checked_add(weight)
                .map(Distance::Finite)
                .unwrap_or(Distance::Infinite),
            Distance::Infinite => Distance::Infinite,
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(d) => write!(f, "{}", d),
            Distance::Infinite => write!(f, "inf"),
        }
    }
}

/// A named vertex together with its shortest-path state
#[derive(Debug, Clone)]
pub struct Vertex {
    id: VertexId,
    name: String,
    distance: Distance,
    predecessor: Option<VertexId>,
    /// Ids of the edges leaving this vertex
    outgoing: Vec<EdgeId>,
}

impl Vertex {
    pub(crate) fn new(id: VertexId, name: String) -> Self {
        Vertex {
            id,
            name,
            distance: Distance::Infinite,
            predecessor: None,
            outgoing: Vec::new(),
        }
    }

    pub fn id(&self) -> VertexId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn distance(&self) -> Distance {
        self.distance
    }

    pub fn predecessor(&self) -> Option<VertexId> {
        self.predecessor
    }

    pub fn outgoing(&self) -> &[EdgeId] {
        &self.outgoing
    }

    pub(crate) fn set_distance(&mut self, distance: Distance) {
        self.distance = distance;
    }

    pub(crate) fn set_predecessor(&mut self, predecessor: Option<VertexId>) {
        self.predecessor = predecessor;
    }

    pub(crate) fn attach(&mut self, edge: EdgeId) {
        self.outgoing.push(edge);
    }

    /// Forgets the state of a previous run
    pub(crate) fn clear_state(&mut self) {
        self.distance = Distance::Infinite;
        self.predecessor = None;
    }
}
