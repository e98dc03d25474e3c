//! Depth-first search
//!
//! Iterative DFS over an explicit work stack, so traversal depth is bounded
//! by heap memory rather than the call stack even on long chain graphs.
//! Pre-order, post-order and came-from semantics match the recursive
//! formulation: a vertex enters pre-order when discovered and post-order
//! once all of its out-neighbors have been explored.

use crate::collections::{ArrayList, LinearProbingMap, Stack};
use crate::error::{GrusError, Result};
use crate::graph::{DiGraph, VertexKey};

/// Result of a DFS run: marked set, came-from map, and visit orders.
#[derive(Debug)]
pub struct DfsSearch<K> {
    source: K,
    marked: LinearProbingMap<K, bool>,
    edge_to: LinearProbingMap<K, K>,
    pre: ArrayList<K>,
    post: ArrayList<K>,
}

/// One in-progress vertex on the explicit traversal stack.
struct Frame<K> {
    key: K,
    neighbors: ArrayList<K>,
    next: usize,
}

enum Step<K> {
    Descend(K),
    Retreat(K),
    Done,
}

/// Runs DFS over the out-edges reachable from `source`.
pub fn dfs<K: VertexKey, V>(graph: &DiGraph<K, V>, source: &K) -> Result<DfsSearch<K>> {
    if !graph.contains_vertex(source) {
        return Err(GrusError::VertexNotFound {
            key: source.to_string(),
        });
    }
    let expected = graph.order().max(1);
    let mut search = DfsSearch {
        source: source.clone(),
        marked: LinearProbingMap::with_expected(expected)?,
        edge_to: LinearProbingMap::with_expected(expected)?,
        pre: ArrayList::new(),
        post: ArrayList::new(),
    };

    let mut stack: Stack<Frame<K>> = Stack::new();
    search.marked.put(source.clone(), true)?;
    search.pre.add_last(source.clone());
    stack.push(Frame {
        key: source.clone(),
        neighbors: graph.adjacents(source)?,
        next: 0,
    });

    loop {
        let step = match stack.top_mut() {
            None => Step::Done,
            Some(frame) => match frame.neighbors.get(frame.next) {
                Some(neighbor) => {
                    frame.next += 1;
                    Step::Descend(neighbor.clone())
                }
                None => Step::Retreat(frame.key.clone()),
            },
        };

        match step {
            Step::Done => break,
            Step::Retreat(key) => {
                search.post.add_last(key);
                stack.pop();
            }
            Step::Descend(neighbor) => {
                if search.marked.contains(&neighbor) {
                    continue;
                }
                // the parent is whatever frame sits on top of the stack
                if let Some(frame) = stack.top() {
                    search.edge_to.put(neighbor.clone(), frame.key.clone())?;
                }
                search.marked.put(neighbor.clone(), true)?;
                search.pre.add_last(neighbor.clone());
                stack.push(Frame {
                    key: neighbor.clone(),
                    neighbors: graph.adjacents(&neighbor)?,
                    next: 0,
                });
            }
        }
    }

    Ok(search)
}

impl<K: VertexKey> DfsSearch<K> {
    pub fn source(&self) -> &K {
        &self.source
    }

    pub fn has_path_to(&self, vertex: &K) -> bool {
        self.marked.contains(vertex)
    }

    /// Number of vertices reached, the source included.
    pub fn reached(&self) -> usize {
        self.marked.size()
    }

    /// Vertices in discovery order.
    pub fn pre_order(&self) -> &ArrayList<K> {
        &self.pre
    }

    /// Vertices in finish order.
    pub fn post_order(&self) -> &ArrayList<K> {
        &self.post
    }

    /// Finish order reversed.
    pub fn reverse_post_order(&self) -> ArrayList<K> {
        let mut stack = Stack::new();
        for key in &self.post {
            stack.push(key.clone());
        }
        stack.drain()
    }

    /// The path source → `vertex` along tree edges, or `None` when
    /// unreachable.
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
    fn test_reaches_all_reachable() {
        let graph = diamond().unwrap();
        let search = dfs(&graph, &"a").unwrap();
        for key in ["a", "b", "c", "d"] {
            assert!(search.has_path_to(&key));
        }
        assert_eq!(search.reached(), 4);
    }

    #[test]
    fn test_paths_follow_real_edges() {
        let graph = diamond().unwrap();
        let search = dfs(&graph, &"a").unwrap();
        for key in ["b", "c", "d"] {
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
    fn test_pre_and_post_order_shape() {
        let graph = diamond().unwrap();
        let search = dfs(&graph, &"a").unwrap();

        assert_eq!(search.pre_order().size(), 4);
        assert_eq!(search.post_order().size(), 4);
        assert_eq!(search.pre_order().first(), Some(&"a"));
        // the source finishes last
        assert_eq!(search.post_order().last(), Some(&"a"));
        // reverse post-order starts at the source
        assert_eq!(search.reverse_post_order().first(), Some(&"a"));
    }

    #[test]
    fn test_deep_chain_does_not_overflow() {
        // a 20k-vertex chain would blow a recursive traversal's call stack
        let n = 20_000usize;
        let mut graph = DiGraph::new(n).unwrap();
        for i in 0..n {
            graph.insert_vertex(i, ()).unwrap();
        }
        for i in 1..n {
            graph.add_edge(&(i - 1), &i, 1.0).unwrap();
        }
        let search = dfs(&graph, &0).unwrap();
        assert!(search.has_path_to(&(n - 1)));
        let path = search.path_to(&(n - 1)).unwrap();
        assert_eq!(path.size(), n);
    }

    #[test]
    fn test_unreachable_and_missing() {
        let graph = diamond().unwrap();
        let search = dfs(&graph, &"c").unwrap();
        assert!(!search.has_path_to(&"a"));
        assert!(search.path_to(&"b").is_none());
        assert!(dfs(&graph, &"zz").is_err());
    }
}
