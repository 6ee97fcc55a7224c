use crate::graph::VertexId;

/// Index of an edge in its graph's arena
pub type EdgeId = usize;

/// Edge weights are non-negative integers
pub type Weight = u64;

/// A directed arc between two vertices of the same graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    id: EdgeId,
    from: VertexId,
    to: VertexId,
    weight: Weight,
    /// Set while this edge is the best known link into `to`
    discovered: bool,
    /// Set on exactly one half of a mirrored undirected pair
    undirected: bool,
    /// The opposite arc of an undirected pair
    twin: Option<EdgeId>,
}

impl Edge {
    pub(crate) fn new(id: EdgeId, from: VertexId, to: VertexId, weight: Weight) -> Self {
        Edge {
            id,
            from,
            to,
            weight,
            discovered: false,
            undirected: false,
            twin: None,
        }
    }

    pub fn id(&self) -> EdgeId {
        self.id
    }

    pub fn from(&self) -> VertexId {
        self.from
    }

    pub fn to(&self) -> VertexId {
        self.to
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    pub fn is_discovered(&self) -> bool {
        self.discovered
    }

    /// True for the marked half of an undirected pair
    pub fn is_undirected(&self) -> bool {
        self.undirected
    }

    pub fn twin(&self) -> Option<EdgeId> {
        self.twin
    }

    pub(crate) fn set_discovered(&mut self, discovered: bool) {
        self.discovered = discovered;
    }

    pub(crate) fn mark_undirected(&mut self) {
        self.undirected = true;
    }

    pub(crate) fn set_twin(&mut self, twin: EdgeId) {
        self.twin = Some(twin);
    }
}
