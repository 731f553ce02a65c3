//! Adjacency index
//!
//! Per-vertex neighbour sets. The index only records links; keeping it in
//! step with the edge store is the graph's job.

use crate::graph::vertex::VertexId;
use std::collections::{HashMap, HashSet};

/// Vertex ID -> set of directly connected vertex IDs
#[derive(Debug, Clone, Default)]
pub struct AdjacencyIndex {
    neighbors: HashMap<VertexId, HashSet<VertexId>>,
}

impl AdjacencyIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty index sized for `capacity` vertices
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            neighbors: HashMap::with_capacity(capacity),
        }
    }

    /// Register a vertex with an empty neighbour set
    pub fn insert_vertex(&mut self, id: VertexId) {
        self.neighbors.entry(id).or_default();
    }

    /// Drop a vertex's neighbour set, returning it
    pub fn remove_vertex(&mut self, id: VertexId) -> Option<HashSet<VertexId>> {
        self.neighbors.remove(&id)
    }

    /// Record `a -- b` on both sides. Returns false and records nothing
    /// unless both vertices are registered.
    pub fn link(&mut self, a: VertexId, b: VertexId) -> bool {
        if !self.neighbors.contains_key(&a) || !self.neighbors.contains_key(&b) {
            return false;
        }
        for (from, to) in [(a, b), (b, a)] {
            if let Some(set) = self.neighbors.get_mut(&from) {
                set.insert(to);
            }
        }
        true
    }

    /// Forget `a -- b` on both sides
    pub fn unlink(&mut self, a: VertexId, b: VertexId) {
        if let Some(set) = self.neighbors.get_mut(&a) {
            set.remove(&b);
        }
        if let Some(set) = self.neighbors.get_mut(&b) {
            set.remove(&a);
        }
    }

    /// Neighbour set of a registered vertex
    pub fn neighbors(&self, id: VertexId) -> Option<&HashSet<VertexId>> {
        self.neighbors.get(&id)
    }

    /// Neighbour count of a registered vertex
    pub fn degree(&self, id: VertexId) -> Option<usize> {
        self.neighbors.get(&id).map(HashSet::len)
    }
}
