//! Graph data structure
//!
//! In-memory undirected graph: vertex payloads keyed by [`VertexId`], edge
//! payloads keyed by [`EdgeKey`], and an [`AdjacencyIndex`] that mirrors the
//! edge store.

use super::edge::{Edge, EdgeKey};
use super::index::AdjacencyIndex;
use super::vertex::VertexId;
use crate::config::GraphConfig;
use crate::error::{Error, Result};
use std::collections::{HashMap, HashSet};
use tracing::{debug, trace};

/// Undirected graph over vertex payloads `V` and edge payloads `E`.
///
/// Invariant: `b` is in the neighbour set of `a` exactly when an edge is
/// stored under `EdgeKey::new(a, b)`, and then `a` is in the neighbour set of
/// `b` as well. Every mutation below validates before it writes, so failed
/// calls leave the graph untouched.
#[derive(Debug, Clone)]
pub struct Graph<V, E = Edge> {
    vertices: HashMap<VertexId, V>,
    edges: HashMap<EdgeKey, E>,
    adjacency: AdjacencyIndex,
    /// Where the default allocator resumes scanning
    next_vertex_id: VertexId,
}

impl<V, E> Default for Graph<V, E> {
    fn default() -> Self {
        Self::with_config(GraphConfig::default())
    }
}

impl<V, E> Graph<V, E> {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty graph, pre-sized and with the allocator start taken from `config`
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            vertices: HashMap::with_capacity(config.vertex_capacity),
            edges: HashMap::with_capacity(config.edge_capacity),
            adjacency: AdjacencyIndex::with_capacity(config.vertex_capacity),
            next_vertex_id: VertexId::new(config.first_vertex_id),
        }
    }

    // ==================== Vertex operations ====================

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Whether a vertex with this id exists
    pub fn has_vertex(&self, id: VertexId) -> bool {
        self.vertices.contains_key(&id)
    }

    /// Vertex payload by id
    pub fn get_vertex(&self, id: VertexId) -> Option<&V> {
        self.vertices.get(&id)
    }

    /// Mutable access to a vertex payload. Identity and adjacency are unaffected.
    pub fn get_vertex_mut(&mut self, id: VertexId) -> Option<&mut V> {
        self.vertices.get_mut(&id)
    }

    /// All vertices, keyed by id
    pub fn get_vertices(&self) -> &HashMap<VertexId, V> {
        &self.vertices
    }

    /// Add a vertex under the first free id at or after the allocator position.
    ///
    /// The allocator only moves forward; ids freed behind it are not revisited.
    pub fn add_vertex(&mut self, vertex: V) -> VertexId {
        let start = self.next_vertex_id;
        while self.vertices.contains_key(&self.next_vertex_id) {
            self.next_vertex_id = self.next_vertex_id.successor();
        }
        let id = self.next_vertex_id;
        if id != start {
            trace!(from = %start, to = %id, "skipped occupied vertex ids");
        }

        self.insert_vertex(id, vertex);
        debug!(vertex = %id, "added vertex");
        id
    }

    /// Add a vertex under a caller-chosen id. The allocator position is not changed.
    pub fn add_vertex_with_id(&mut self, vertex: V, id: VertexId) -> Result<VertexId> {
        if self.has_vertex(id) {
            debug!(vertex = %id, "rejected vertex: id already in use");
            return Err(Error::IndexAlreadyInUse(id));
        }

        self.insert_vertex(id, vertex);
        debug!(vertex = %id, "added vertex with explicit id");
        Ok(id)
    }

    fn insert_vertex(&mut self, id: VertexId, vertex: V) {
        self.vertices.insert(id, vertex);
        self.adjacency.insert_vertex(id);
    }

    /// Remove a vertex and every edge touching it, returning its payload.
    /// Removing an absent vertex does nothing.
    pub fn remove_vertex(&mut self, id: VertexId) -> Option<V> {
        let neighbors = self.adjacency.remove_vertex(id).unwrap_or_default();
        let degree = neighbors.len();
        for neighbor in neighbors {
            self.edges.remove(&EdgeKey::new(id, neighbor));
            self.adjacency.unlink(id, neighbor);
        }

        let vertex = self.vertices.remove(&id);
        if vertex.is_some() {
            debug!(vertex = %id, degree, "removed vertex");
        }
        vertex
    }

    // ==================== Edge operations ====================

    /// Number of edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether `a` and `b` are connected, in either order
    pub fn has_edge(&self, a: VertexId, b: VertexId) -> bool {
        self.edges.contains_key(&EdgeKey::new(a, b))
    }

    /// Edge payload between two vertices
    pub fn get_edge(&self, a: VertexId, b: VertexId) -> Option<&E> {
        self.edges.get(&EdgeKey::new(a, b))
    }

    /// Edge payload by precomputed key
    pub fn get_edge_by_key(&self, key: &EdgeKey) -> Option<&E> {
        self.edges.get(key)
    }

    /// All edges, keyed by canonical pair
    pub fn get_edges(&self) -> &HashMap<EdgeKey, E> {
        &self.edges
    }

    /// Neighbour set of a vertex, `None` if the vertex does not exist
    pub fn get_neighbors(&self, id: VertexId) -> Option<&HashSet<VertexId>> {
        self.adjacency.neighbors(id)
    }

    /// Number of neighbours, `None` if the vertex does not exist
    pub fn degree(&self, id: VertexId) -> Option<usize> {
        self.adjacency.degree(id)
    }

    /// Edges touching `id`, in no particular order
    pub fn incident_edges(&self, id: VertexId) -> impl Iterator<Item = (EdgeKey, &E)> + '_ {
        self.adjacency
            .neighbors(id)
            .into_iter()
            .flatten()
            .filter_map(move |&neighbor| {
                let key = EdgeKey::new(id, neighbor);
                self.edges.get(&key).map(|edge| (key, edge))
            })
    }

    /// Insert or replace the edge between `a` and `b`.
    ///
    /// Both endpoints must exist; `a` is checked first. Returns the payload
    /// that was replaced, if any.
    pub fn add_edge(&mut self, a: VertexId, b: VertexId, edge: E) -> Result<Option<E>> {
        for id in [a, b] {
            if !self.has_vertex(id) {
                debug!(vertex = %id, left = %a, right = %b, "rejected edge: missing endpoint");
                return Err(Error::VertexDoesNotExist(id));
            }
        }

        let previous = self.edges.insert(EdgeKey::new(a, b), edge);
        self.adjacency.link(a, b);
        debug!(left = %a, right = %b, replaced = previous.is_some(), "added edge");
        Ok(previous)
    }

    /// Remove the edge between `a` and `b`, returning its payload.
    /// Removing an absent edge does nothing.
    pub fn remove_edge(&mut self, a: VertexId, b: VertexId) -> Option<E> {
        let edge = self.edges.remove(&EdgeKey::new(a, b))?;
        self.adjacency.unlink(a, b);
        debug!(left = %a, right = %b, "removed edge");
        Some(edge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(id: u64) -> VertexId {
        VertexId::new(id)
    }

    #[test]
    fn test_graph_basic() {
        let mut graph: Graph<&str> = Graph::new();

        let alice = graph.add_vertex("alice");
        let bob = graph.add_vertex("bob");
        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.get_vertex(alice), Some(&"alice"));

        let replaced = graph.add_edge(alice, bob, Edge::new(5)).unwrap();
        assert!(replaced.is_none());
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.get_edge(bob, alice), Some(&Edge::new(5)));
        assert_eq!(
            graph.get_edge_by_key(&EdgeKey::new(alice, bob)),
            Some(&Edge::new(5))
        );

        assert_eq!(graph.degree(alice), Some(1));
        assert_eq!(graph.degree(bob), Some(1));
        assert_eq!(graph.degree(v(99)), None);
    }

    #[test]
    fn test_allocator_skips_explicit_ids() {
        let mut graph: Graph<u32> = Graph::new();

        graph.add_vertex_with_id(1, v(1)).unwrap();
        graph.add_vertex_with_id(2, v(2)).unwrap();

        assert_eq!(graph.add_vertex(0), v(0));
        // 1 and 2 are taken by explicit inserts
        assert_eq!(graph.add_vertex(3), v(3));
    }

    #[test]
    fn test_allocator_resumes_from_last_position() {
        let mut graph: Graph<u32> = Graph::new();

        let a = graph.add_vertex(10);
        let b = graph.add_vertex(20);
        assert_eq!((a, b), (v(0), v(1)));

        // the freed id behind the allocator is not revisited
        graph.remove_vertex(a);
        assert_eq!(graph.add_vertex(30), v(2));

        // the allocator's own position is reused once free
        graph.remove_vertex(v(2));
        assert_eq!(graph.add_vertex(40), v(2));
    }

    #[test]
    fn test_with_config() {
        let config = GraphConfig {
            vertex_capacity: 16,
            edge_capacity: 32,
            first_vertex_id: 100,
        };
        let mut graph: Graph<()> = Graph::with_config(config);
        assert_eq!(graph.add_vertex(()), v(100));
        assert_eq!(graph.add_vertex(()), v(101));
    }

    #[test]
    fn test_allocator_wraps_at_max_id() {
        let mut graph: Graph<u32> = Graph::with_config(GraphConfig {
            first_vertex_id: u64::MAX,
            ..GraphConfig::default()
        });
        graph.add_vertex_with_id(0, v(0)).unwrap();

        assert_eq!(graph.add_vertex(1), v(u64::MAX));
        // u64::MAX and 0 are taken, so the scan wraps past both
        assert_eq!(graph.add_vertex(2), v(1));
        assert_eq!(graph.add_vertex(3), v(2));
        assert_eq!(graph.vertex_count(), 4);
    }

    #[test]
    fn test_add_edge_reports_first_missing_endpoint() {
        let mut graph: Graph<u32> = Graph::new();
        let a = graph.add_vertex(1);

        let err = graph.add_edge(v(7), v(8), Edge::default()).unwrap_err();
        assert_eq!(err, Error::VertexDoesNotExist(v(7)));

        let err = graph.add_edge(a, v(8), Edge::default()).unwrap_err();
        assert_eq!(err, Error::VertexDoesNotExist(v(8)));

        let err = graph.add_edge(v(8), a, Edge::default()).unwrap_err();
        assert_eq!(err, Error::VertexDoesNotExist(v(8)));

        assert_eq!(graph.edge_count(), 0);
        assert!(graph.get_neighbors(a).unwrap().is_empty());
    }

    #[test]
    fn test_add_edge_returns_replaced_payload() {
        let mut graph: Graph<u32> = Graph::new();
        let a = graph.add_vertex(1);
        let b = graph.add_vertex(2);

        assert_eq!(graph.add_edge(a, b, Edge::new(10)).unwrap(), None);
        assert_eq!(
            graph.add_edge(b, a, Edge::new(20)).unwrap(),
            Some(Edge::new(10))
        );
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.get_edge(a, b), Some(&Edge::new(20)));
    }

    #[test]
    fn test_remove_returns_payloads() {
        let mut graph: Graph<&str> = Graph::new();
        let a = graph.add_vertex("a");
        let b = graph.add_vertex("b");
        graph.add_edge(a, b, Edge::new(3)).unwrap();

        assert_eq!(graph.remove_edge(b, a), Some(Edge::new(3)));
        assert_eq!(graph.remove_edge(b, a), None);

        assert_eq!(graph.remove_vertex(a), Some("a"));
        assert_eq!(graph.remove_vertex(a), None);
        assert_eq!(graph.vertex_count(), 1);
    }

    #[test]
    fn test_self_loop() {
        let mut graph: Graph<u32> = Graph::new();
        let a = graph.add_vertex(1);
        let b = graph.add_vertex(2);

        graph.add_edge(a, a, Edge::new(4)).unwrap();
        graph.add_edge(a, b, Edge::new(5)).unwrap();
        assert!(graph.has_edge(a, a));
        assert_eq!(graph.degree(a), Some(2));
        assert!(graph.get_neighbors(a).unwrap().contains(&a));

        graph.remove_vertex(a);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.get_neighbors(b).unwrap().is_empty());
    }

    #[test]
    fn test_incident_edges() {
        let mut graph: Graph<u32> = Graph::new();
        let a = graph.add_vertex(1);
        let b = graph.add_vertex(2);
        let c = graph.add_vertex(3);
        graph.add_edge(a, b, Edge::new(1)).unwrap();
        graph.add_edge(c, a, Edge::new(2)).unwrap();

        let mut incident: Vec<_> = graph
            .incident_edges(a)
            .map(|(key, edge)| (key, *edge.weight()))
            .collect();
        incident.sort();
        assert_eq!(
            incident,
            vec![(EdgeKey::new(a, b), 1), (EdgeKey::new(a, c), 2)]
        );

        assert_eq!(graph.incident_edges(v(42)).count(), 0);
    }

    #[test]
    fn test_get_vertex_mut() {
        let mut graph: Graph<String> = Graph::new();
        let a = graph.add_vertex("before".to_string());

        if let Some(payload) = graph.get_vertex_mut(a) {
            payload.push_str("-after");
        }
        assert_eq!(graph.get_vertex(a).map(String::as_str), Some("before-after"));
        assert!(graph.get_vertex_mut(v(5)).is_none());
    }
}
