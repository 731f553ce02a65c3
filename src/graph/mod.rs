//! Graph core module
//!
//! Vertex identities, edge keys and payloads, adjacency bookkeeping, and the
//! graph that ties them together.

mod edge;
mod graph;
mod index;
mod vertex;

pub use edge::{Edge, EdgeKey};
pub use graph::Graph;
pub use index::AdjacencyIndex;
pub use vertex::VertexId;
