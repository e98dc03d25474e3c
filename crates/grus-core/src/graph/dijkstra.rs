//! Dijkstra single-source shortest paths
//!
//! Classic non-negative-weight shortest paths over a min-oriented priority
//! queue keyed by tentative distance. A vertex is finalized once popped;
//! relaxation updates a neighbor only when a strictly shorter distance is
//! found, using `improve_priority` (or an insert when the neighbor is not
//! yet queued).
//!
//! Precondition: all edge weights ≥ 0. Negative weights are not guarded
//! against and produce meaningless distances.

use crate::collections::{ArrayList, LinearProbingMap, PriorityQueue, Stack};
use crate::error::{GrusError, Result};
use crate::graph::{DiGraph, Edge, VertexKey};

/// Per-vertex working record, kept per run and discarded afterwards.
#[derive(Debug, Clone)]
struct VertexState<K> {
    marked: bool,
    dist_to: f64,
    edge_from: Option<Edge<K>>,
}

/// Result of a Dijkstra run.
#[derive(Debug)]
pub struct DijkstraSearch<K> {
    source: K,
    states: LinearProbingMap<K, VertexState<K>>,
}

/// Runs Dijkstra from `source` over the graph's directed edges.
pub fn dijkstra<K: VertexKey, V>(graph: &DiGraph<K, V>, source: &K) -> Result<DijkstraSearch<K>> {
    if !graph.contains_vertex(source) {
        return Err(GrusError::VertexNotFound {
            key: source.to_string(),
        });
    }

    let mut states = LinearProbingMap::with_expected(graph.order().max(1))?;
    for key in &graph.vertices() {
        states.put(
            key.clone(),
            VertexState {
                marked: false,
                dist_to: f64::INFINITY,
                edge_from: None,
            },
        )?;
    }
    if let Some(state) = states.get_mut(source) {
        state.dist_to = 0.0;
    }

    let mut heap: PriorityQueue<f64, K> = PriorityQueue::min();
    heap.insert(0.0, source.clone());

    while let Some(u) = heap.remove() {
        let u_dist = {
            let Some(state) = states.get_mut(&u) else {
                continue;
            };
            if state.marked {
                continue;
            }
            state.marked = true;
            state.dist_to
        };

        for edge in &graph.edges_from(&u)? {
            let Some(state) = states.get_mut(&edge.to) else {
                continue;
            };
            if state.marked {
                continue;
            }
            let new_dist = u_dist + edge.weight;
            if new_dist < state.dist_to {
                state.dist_to = new_dist;
                state.edge_from = Some(edge.clone());
                if heap.contains(&edge.to) {
                    heap.improve_priority(new_dist, &edge.to);
                } else {
                    heap.insert(new_dist, edge.to.clone());
                }
            }
        }
    }

    Ok(DijkstraSearch {
        source: source.clone(),
        states,
    })
}

impl<K: VertexKey> DijkstraSearch<K> {
    pub fn source(&self) -> &K {
        &self.source
    }

    /// True when a finite-distance path to `vertex` exists.
    pub fn has_path_to(&self, vertex: &K) -> bool {
        self.states
            .get(vertex)
            .is_some_and(|s| s.dist_to < f64::INFINITY)
    }

    /// Shortest distance source → `vertex`; `None` when unreachable.
    pub fn dist_to(&self, vertex: &K) -> Option<f64> {
        let state = self.states.get(vertex)?;
        if state.dist_to < f64::INFINITY {
            Some(state.dist_to)
        } else {
            None
        }
    }

    /// The shortest path source → `vertex`, or `None` when unreachable.
    pub fn path_to(&self, vertex: &K) -> Option<ArrayList<K>> {
        if !self.has_path_to(vertex) {
            return None;
        }
        let mut path = Stack::new();
        let mut current = vertex.clone();
        while current != self.source {
            path.push(current.clone());
            current = self.states.get(&current)?.edge_from.as_ref()?.from.clone();
        }
        path.push(self.source.clone());
        Some(path.drain())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::testing::diamond;

    #[test]
    fn test_diamond_distances() {
        let graph = diamond().unwrap();
        let search = dijkstra(&graph, &"a").unwrap();

        assert_eq!(search.dist_to(&"a"), Some(0.0));
        assert_eq!(search.dist_to(&"b"), Some(2.0));
        // a→b→c (5) beats a→c (10)
        assert_eq!(search.dist_to(&"c"), Some(5.0));
        assert_eq!(search.dist_to(&"d"), Some(6.0));

        let path: Vec<_> = search.path_to(&"d").unwrap().into_iter().collect();
        assert_eq!(path, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_matches_brute_force_on_small_graph() {
        // all simple paths a→e enumerated by hand
        let mut graph = DiGraph::new(8).unwrap();
        for key in ["a", "b", "c", "d", "e"] {
            graph.insert_vertex(key, ()).unwrap();
        }
        let edges = [
            ("a", "b", 4.0),
            ("a", "c", 1.0),
            ("c", "b", 2.0),
            ("b", "d", 5.0),
            ("c", "d", 8.0),
            ("d", "e", 3.0),
            ("b", "e", 10.0),
        ];
        for (from, to, w) in edges {
            graph.add_edge(&from, &to, w).unwrap();
        }
        let search = dijkstra(&graph, &"a").unwrap();
        // a→c→b = 3, a→c→b→d = 8, a→c→b→d→e = 11
        assert_eq!(search.dist_to(&"b"), Some(3.0));
        assert_eq!(search.dist_to(&"d"), Some(8.0));
        assert_eq!(search.dist_to(&"e"), Some(11.0));
    }

    #[test]
    fn test_weight_update_reflected() {
        let mut graph = diamond().unwrap();
        // cheapen the direct edge below the two-hop alternative
        graph.add_edge(&"a", &"c", 1.0).unwrap();
        let search = dijkstra(&graph, &"a").unwrap();
        assert_eq!(search.dist_to(&"c"), Some(1.0));
        let path: Vec<_> = search.path_to(&"c").unwrap().into_iter().collect();
        assert_eq!(path, vec!["a", "c"]);
    }

    #[test]
    fn test_unreachable() {
        let graph = diamond().unwrap();
        let search = dijkstra(&graph, &"b").unwrap();
        assert!(!search.has_path_to(&"a"));
        assert_eq!(search.dist_to(&"a"), None);
        assert!(search.path_to(&"a").is_none());
    }

    #[test]
    fn test_missing_source() {
        let graph = diamond().unwrap();
        assert!(dijkstra(&graph, &"zz").is_err());
    }
}
