//! Prim-style cheapest-connection tree
//!
//! Grows a tree from a source with the same min-heap relax pattern as
//! Dijkstra, but keyed by the weight of the connecting edge rather than
//! cumulative distance. Because the underlying graph is directed, this
//! explores only the out-edge reachable set from the source: the result is
//! a tree of cheapest connecting edges over that reachable subgraph, not
//! an undirected minimum spanning tree. Domain queries depend on exactly
//! this directed-reachability behavior.

use crate::collections::{ArrayList, LinearProbingMap, PriorityQueue};
use crate::error::{GrusError, Result};
use crate::graph::{DiGraph, Edge, VertexKey};

/// The tree grown by [`corridor_tree`].
#[derive(Debug)]
pub struct CorridorTree<K> {
    source: K,
    marked: LinearProbingMap<K, bool>,
    edge_to: LinearProbingMap<K, Edge<K>>,
}

/// Grows the cheapest-connection tree from `source`.
pub fn corridor_tree<K: VertexKey, V>(
    graph: &DiGraph<K, V>,
    source: &K,
) -> Result<CorridorTree<K>> {
    if !graph.contains_vertex(source) {
        return Err(GrusError::VertexNotFound {
            key: source.to_string(),
        });
    }

    let expected = graph.order().max(1);
    let mut marked: LinearProbingMap<K, bool> = LinearProbingMap::with_expected(expected)?;
    let mut edge_to: LinearProbingMap<K, Edge<K>> = LinearProbingMap::with_expected(expected)?;
    let mut weight_to: LinearProbingMap<K, f64> = LinearProbingMap::with_expected(expected)?;
    let mut heap: PriorityQueue<f64, K> = PriorityQueue::min();

    weight_to.put(source.clone(), 0.0)?;
    heap.insert(0.0, source.clone());

    while let Some(u) = heap.remove() {
        if marked.contains(&u) {
            continue;
        }
        marked.put(u.clone(), true)?;

        for edge in &graph.edges_from(&u)? {
            if marked.contains(&edge.to) {
                continue;
            }
            let best = weight_to.get(&edge.to).copied().unwrap_or(f64::INFINITY);
            if edge.weight < best {
                weight_to.put(edge.to.clone(), edge.weight)?;
                edge_to.put(edge.to.clone(), edge.clone())?;
                if heap.contains(&edge.to) {
                    heap.improve_priority(edge.weight, &edge.to);
                } else {
                    heap.insert(edge.weight, edge.to.clone());
                }
            }
        }
    }

    Ok(CorridorTree {
        source: source.clone(),
        marked,
        edge_to,
    })
}

impl<K: VertexKey> CorridorTree<K> {
    pub fn source(&self) -> &K {
        &self.source
    }

    /// True when `vertex` was connected into the tree (the source counts).
    pub fn reaches(&self, vertex: &K) -> bool {
        self.marked.contains(vertex)
    }

    /// Number of vertices in the tree, the source included.
    pub fn vertex_count(&self) -> usize {
        self.marked.size()
    }

    /// The chosen connecting edges, one per non-source tree vertex,
    /// in scan order.
    pub fn tree_edges(&self) -> ArrayList<Edge<K>> {
        self.edge_to.value_set()
    }

    /// Sum of the chosen edge weights. The source has no incoming tree
    /// edge and contributes nothing.
    pub fn total_weight(&self) -> f64 {
        self.edge_to.iter().map(|(_, e)| e.weight).sum()
    }

    /// The edge that connected `vertex` into the tree.
    pub fn connecting_edge(&self, vertex: &K) -> Option<&Edge<K>> {
        self.edge_to.get(vertex)
    }
}
