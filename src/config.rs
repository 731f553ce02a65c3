//! Graph construction settings

use serde::{Deserialize, Serialize};

/// Sizing hints and allocator start for a new [`Graph`](crate::Graph).
///
/// Missing fields fall back to their defaults, so a partial document such as
/// `{"vertex_capacity": 1024}` is enough.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Vertices to reserve room for
    pub vertex_capacity: usize,
    /// Edges to reserve room for
    pub edge_capacity: usize,
    /// Where the default id allocator starts scanning
    pub first_vertex_id: u64,
}
