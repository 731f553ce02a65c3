//! undigraph - generic in-memory undirected graph container
//!
//! Stores caller-supplied vertex and edge payloads and keeps adjacency sets
//! in agreement with the edge store:
//! - stable integer vertex identities assigned by the graph
//! - order-independent edge addressing through [`EdgeKey`]
//! - upsert edge insertion and cascading vertex removal
//!
//! ```
//! use undigraph::{Edge, Graph};
//!
//! let mut graph: Graph<&str> = Graph::new();
//! let a = graph.add_vertex("a");
//! let b = graph.add_vertex("b");
//! graph.add_edge(a, b, Edge::new(3)).unwrap();
//!
//! assert!(graph.has_edge(b, a));
//! assert_eq!(graph.get_edge(b, a).map(Edge::weight), Some(&3));
//! ```

pub mod config;
pub mod error;
pub mod graph;

pub use config::GraphConfig;
pub use error::{Error, Result};
pub use graph::{AdjacencyIndex, Edge, EdgeKey, Graph, VertexId};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
