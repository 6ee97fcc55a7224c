pub mod traits;
pub mod vertex;
pub mod edge;
pub mod named;
pub mod generators;

pub use traits::{Graph, MutableGraph};
pub use vertex::{Distance, Vertex, VertexId};
pub use edge::{Edge, EdgeId, Weight};
pub use named::{GraphKind, NamedGraph};
