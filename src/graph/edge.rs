//! Edge definitions
//!
//! `EdgeKey` addresses an undirected edge by its unordered endpoint pair;
//! `Edge` is the default weighted payload stored under that key.

use crate::graph::vertex::VertexId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical key of an unordered vertex pair.
///
/// The endpoints are stored smaller-first, so `EdgeKey::new(a, b)` and
/// `EdgeKey::new(b, a)` are the same value and hash identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "(VertexId, VertexId)", into = "(VertexId, VertexId)")]
pub struct EdgeKey {
    left: VertexId,
    right: VertexId,
}

impl EdgeKey {
    /// Build the key for `a -- b`, smaller id first
    pub fn new(a: VertexId, b: VertexId) -> Self {
        if a <= b {
            Self { left: a, right: b }
        } else {
            Self { left: b, right: a }
        }
    }

    /// The smaller endpoint
    pub fn left(&self) -> VertexId {
        self.left
    }

    /// The larger endpoint
    pub fn right(&self) -> VertexId {
        self.right
    }

    /// Whether `id` is one of the endpoints
    pub fn contains(&self, id: VertexId) -> bool {
        self.left == id || self.right == id
    }

    /// Endpoint opposite to `id`, or `None` if `id` is not on this edge.
    /// A self-loop returns `id` itself.
    pub fn other(&self, id: VertexId) -> Option<VertexId> {
        if self.left == id {
            Some(self.right)
        } else if self.right == id {
            Some(self.left)
        } else {
            None
        }
    }

    /// Whether both endpoints are the same vertex
    pub fn is_loop(&self) -> bool {
        self.left == self.right
    }
}

impl From<(VertexId, VertexId)> for EdgeKey {
    fn from((a, b): (VertexId, VertexId)) -> Self {
        Self::new(a, b)
    }
}

impl From<EdgeKey> for (VertexId, VertexId) {
    fn from(key: EdgeKey) -> Self {
        (key.left, key.right)
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.left, self.right)
    }
}

/// Weighted edge payload.
///
/// Comparison looks only at the weight. The value is fixed once built;
/// re-weighting an edge means storing a new `Edge`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Edge<W = i64> {
    weight: W,
}

impl<W> Edge<W> {
    /// Wrap a weight
    pub fn new(weight: W) -> Self {
        Self { weight }
    }

    /// The edge weight
    pub fn weight(&self) -> &W {
        &self.weight
    }

    /// Unwrap the weight
    pub fn into_weight(self) -> W {
        self.weight
    }
}

impl Edge<i64> {
    /// An unweighted edge, encoded as weight 1
    pub fn unweighted() -> Self {
        Self::new(1)
    }
}

impl Default for Edge<i64> {
    fn default() -> Self {
        Self::unweighted()
    }
}
