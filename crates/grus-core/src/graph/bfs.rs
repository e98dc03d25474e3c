//! Breadth-first search
//!
//! Level-order traversal from a source vertex. Paths reconstructed from
//! the came-from map have minimum edge count, not minimum weight.

use crate::collections::{ArrayList, LinearProbingMap, Queue, Stack};
use crate::error::{GrusError, Result};
use crate::graph::{DiGraph, VertexKey};

/// Result of a BFS run: the marked set and the came-from map.
#[derive(Debug)]
pub struct BfsSearch<K> {
    source: K,
    marked: LinearProbingMap<K, bool>,
    edge_to: LinearProbingMap<K, K>,
}

/// Runs BFS over the out-edges reachable from `source`.
pub fn bfs<K: VertexKey, V>(graph: &DiGraph<K, V>, source: &K) -> Result<BfsSearch<K>> {
    if !graph.contains_vertex(source) {
        return Err(GrusError::VertexNotFound {
            key: source.to_string(),
        });
    }
    let expected = graph.order().max(1);
    let mut marked = LinearProbingMap::with_expected(expected)?;
    let mut edge_to = LinearProbingMap::with_expected(expected)?;
    let mut queue = Queue::new();

    marked.put(source.clone(), true)?;
    queue.enqueue(source.clone());

    while let Some(vertex) = queue.dequeue() {
        for neighbor in &graph.adjacents(&vertex)? {
            if !marked.contains(neighbor) {
                marked.put(neighbor.clone(), true)?;
                edge_to.put(neighbor.clone(), vertex.clone())?;
                queue.enqueue(neighbor.clone());
            }
        }
    }

    Ok(BfsSearch {
        source: source.clone(),
        marked,
        edge_to,
    })
}

impl<K: VertexKey> BfsSearch<K> {
    pub fn source(&self) -> &K {
        &self.source
    }

    /// True when `vertex` was reached from the source.
    pub fn has_path_to(&self, vertex: &K) -> bool {
        self.marked.contains(vertex)
    }

    /// Number of vertices reached, the source included.
    pub fn reached(&self) -> usize {
        self.marked.size()
    }

    /// The path source → `vertex`, or `None` when unreachable.
    pub fn path_to(&self, vertex: &K) -> Option<ArrayList<K>> {
        if !self.has_path_to(vertex) {
            return None;
        }
        let mut path = Stack::new();
        let mut current = vertex.clone();
        while current != self.source {
            path.push(current.clone());
            current = self.edge_to.get(&current)?.clone();
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
    fn test_reaches_all_and_paths_are_edges() {
        let graph = diamond().unwrap();
        let search = bfs(&graph, &"a").unwrap();

        for key in ["a", "b", "c", "d"] {
            assert!(search.has_path_to(&key));
            let path = search.path_to(&key).unwrap();
            assert_eq!(path.first(), Some(&"a"));
            assert_eq!(path.last(), Some(&key));
            for i in 1..path.size() {
                let from = path.get(i - 1).unwrap();
                let to = path.get(i).unwrap();
                assert!(graph.get_edge(from, to).is_some(), "{from}->{to} missing");
            }
        }
    }

    #[test]
    fn test_minimum_hop_path() {
        let graph = diamond().unwrap();
        let search = bfs(&graph, &"a").unwrap();
        // a→c directly beats a→b→c on hops, regardless of weight
        let path: Vec<_> = search.path_to(&"c").unwrap().into_iter().collect();
        assert_eq!(path, vec!["a", "c"]);
    }

    #[test]
    fn test_unreachable_vertex() {
        let graph = diamond().unwrap();
        // edges are directed: nothing reaches back to "a" from "d"
        let search = bfs(&graph, &"d").unwrap();
        assert!(!search.has_path_to(&"a"));
        assert!(search.path_to(&"a").is_none());
        assert_eq!(search.reached(), 1);
    }

    #[test]
    fn test_missing_source_is_an_error() {
        let graph = diamond().unwrap();
        assert!(bfs(&graph, &"zz").is_err());
    }
}
