//! Directed, weighted graph
//!
//! Vertices are labeled by an opaque key and carry an opaque payload; each
//! vertex owns an adjacency map from neighbor key to its outgoing edge.
//! Both levels of storage are probing maps. Edges are strictly directed:
//! no reverse edge is ever created implicitly.

use std::fmt;

use crate::collections::{ArrayList, LinearProbingMap};
use crate::error::{GrusError, Result};
use crate::graph::VertexKey;

/// Expected out-degree used to size a fresh vertex's adjacency map.
const ADJACENCY_EXPECTED: usize = 10;

/// A directed weighted edge.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge<K> {
    pub from: K,
    pub to: K,
    pub weight: f64,
}

/// A vertex record: key, payload, and outgoing adjacency.
#[derive(Debug, Clone)]
pub struct Vertex<K, V> {
    key: K,
    payload: V,
    adjacents: LinearProbingMap<K, Edge<K>>,
}

impl<K: VertexKey, V> Vertex<K, V> {
    fn new(key: K, payload: V) -> Result<Self> {
        Ok(Self {
            key,
            payload,
            adjacents: LinearProbingMap::with_expected(ADJACENCY_EXPECTED)?,
        })
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn payload(&self) -> &V {
        &self.payload
    }

    pub fn payload_mut(&mut self) -> &mut V {
        &mut self.payload
    }

    /// Out-degree of this vertex.
    pub fn degree(&self) -> usize {
        self.adjacents.size()
    }

    /// The outgoing edge toward `to`, if present.
    pub fn edge_to(&self, to: &K) -> Option<&Edge<K>> {
        self.adjacents.get(to)
    }

    /// Neighbor keys reachable by one outgoing edge, in scan order.
    pub fn adjacent_keys(&self) -> ArrayList<K> {
        self.adjacents.key_set()
    }

    /// All outgoing edges, in scan order.
    pub fn edges(&self) -> ArrayList<Edge<K>> {
        self.adjacents.value_set()
    }
}

/// Directed weighted graph keyed by `K` with per-vertex payload `V`.
#[derive(Debug, Clone)]
pub struct DiGraph<K, V> {
    vertices: LinearProbingMap<K, Vertex<K, V>>,
    num_edges: usize,
}

impl<K: VertexKey, V> DiGraph<K, V> {
    /// Creates a graph sized for `expected_vertices`.
    pub fn new(expected_vertices: usize) -> Result<Self> {
        Ok(Self {
            vertices: LinearProbingMap::with_expected(expected_vertices.max(1))?,
            num_edges: 0,
        })
    }

    /// Creates or updates the vertex for `key`.
    ///
    /// Re-inserting an existing key replaces the payload only; the
    /// vertex's edges are untouched.
    pub fn insert_vertex(&mut self, key: K, payload: V) -> Result<()> {
        if let Some(vertex) = self.vertices.get_mut(&key) {
            vertex.payload = payload;
            return Ok(());
        }
        let vertex = Vertex::new(key.clone(), payload)?;
        self.vertices.put(key, vertex)
    }

    /// Records or overwrites the directed edge `from → to`.
    ///
    /// Fails when either endpoint is absent. The edge counter only
    /// increments the first time this ordered pair is added; re-adding
    /// with a new weight overwrites the weight.
    pub fn add_edge(&mut self, from: &K, to: &K, weight: f64) -> Result<()> {
        if !self.vertices.contains(to) {
            return Err(missing_vertex(to));
        }
        let Some(vertex) = self.vertices.get_mut(from) else {
            return Err(missing_vertex(from));
        };
        let existed = vertex.adjacents.contains(to);
        vertex.adjacents.put(
            to.clone(),
            Edge {
                from: from.clone(),
                to: to.clone(),
                weight,
            },
        )?;
        if !existed {
            self.num_edges += 1;
        }
        Ok(())
    }

    pub fn contains_vertex(&self, key: &K) -> bool {
        self.vertices.contains(key)
    }

    /// Number of vertices.
    pub fn order(&self) -> usize {
        self.vertices.size()
    }

    /// Number of distinct directed edges.
    pub fn size(&self) -> usize {
        self.num_edges
    }

    /// Out-degree of `key`; 0 when the vertex is absent.
    pub fn degree(&self, key: &K) -> usize {
        self.vertices.get(key).map_or(0, Vertex::degree)
    }

    /// Neighbor keys reachable by one outgoing edge from `key`.
    pub fn adjacents(&self, key: &K) -> Result<ArrayList<K>> {
        self.vertices
            .get(key)
            .map(Vertex::adjacent_keys)
            .ok_or_else(|| missing_vertex(key))
    }

    /// All outgoing edges of `key`.
    pub fn edges_from(&self, key: &K) -> Result<ArrayList<Edge<K>>> {
        self.vertices
            .get(key)
            .map(Vertex::edges)
            .ok_or_else(|| missing_vertex(key))
    }

    /// The edge `from → to`, if present.
    pub fn get_edge(&self, from: &K, to: &K) -> Option<&Edge<K>> {
        self.vertices.get(from)?.edge_to(to)
    }

    /// All vertex keys, in scan order.
    pub fn vertices(&self) -> ArrayList<K> {
        self.vertices.key_set()
    }

    pub fn get_vertex(&self, key: &K) -> Option<&Vertex<K, V>> {
        self.vertices.get(key)
    }

    pub fn get_payload(&self, key: &K) -> Result<&V> {
        self.vertices
            .get(key)
            .map(Vertex::payload)
            .ok_or_else(|| missing_vertex(key))
    }

    pub fn update_payload(&mut self, key: &K, payload: V) -> Result<()> {
        let vertex = self
            .vertices
            .get_mut(key)
            .ok_or_else(|| missing_vertex(key))?;
        vertex.payload = payload;
        Ok(())
    }
}

fn missing_vertex<K: fmt::Display>(key: &K) -> GrusError {
    GrusError::VertexNotFound {
        key: key.to_string(),
    }
}
