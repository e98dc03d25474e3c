//! Kahn topological sort and longest path in a DAG
//!
//! Both return a defined "no result" (`None`) on a cyclic graph rather
//! than a partial order; callers must check before using derived output.

use crate::collections::{ArrayList, LinearProbingMap, Queue, Stack};
use crate::error::Result;
use crate::graph::{DiGraph, VertexKey};

/// Kahn's algorithm: a topological order of all vertices, or `None` when
/// the graph contains a cycle.
pub fn topological_sort<K: VertexKey, V>(graph: &DiGraph<K, V>) -> Result<Option<ArrayList<K>>> {
    let vertices = graph.vertices();
    let mut in_degree: LinearProbingMap<K, usize> =
        LinearProbingMap::with_expected(graph.order().max(1))?;

    for key in &vertices {
        in_degree.put(key.clone(), 0)?;
    }
    for key in &vertices {
        for neighbor in &graph.adjacents(key)? {
            if let Some(degree) = in_degree.get_mut(neighbor) {
                *degree += 1;
            }
        }
    }

    let mut worklist = Queue::new();
    for key in &vertices {
        if in_degree.get(key) == Some(&0) {
            worklist.enqueue(key.clone());
        }
    }

    let mut order = ArrayList::with_capacity(graph.order());
    while let Some(key) = worklist.dequeue() {
        order.add_last(key.clone());
        for neighbor in &graph.adjacents(&key)? {
            if let Some(degree) = in_degree.get_mut(neighbor) {
                *degree -= 1;
                if *degree == 0 {
                    worklist.enqueue(neighbor.clone());
                }
            }
        }
    }

    if order.size() < graph.order() {
        tracing::debug!(
            ordered = order.size(),
            vertices = graph.order(),
            "cycle_detected"
        );
        Ok(None)
    } else {
        Ok(Some(order))
    }
}

/// Longest path in the graph measured in vertex count, or `None` when the
/// graph is not a DAG.
///
/// Every vertex starts at distance 1; each edge u→v relaxes
/// `dist[v] = max(dist[v], dist[u] + 1)` in topological order. The global
/// maximum marks the path's end; predecessors reconstruct the path.
pub fn longest_path<K: VertexKey, V>(graph: &DiGraph<K, V>) -> Result<Option<ArrayList<K>>> {
    let Some(order) = topological_sort(graph)? else {
        return Ok(None);
    };
    if order.is_empty() {
        return Ok(Some(ArrayList::new()));
    }

    let expected = graph.order().max(1);
    let mut dist: LinearProbingMap<K, usize> = LinearProbingMap::with_expected(expected)?;
    let mut pred: LinearProbingMap<K, K> = LinearProbingMap::with_expected(expected)?;
    for key in &order {
        dist.put(key.clone(), 1)?;
    }

    for key in &order {
        let reach = dist.get(key).copied().unwrap_or(1);
        for neighbor in &graph.adjacents(key)? {
            if let Some(neighbor_dist) = dist.get_mut(neighbor) {
                if reach + 1 > *neighbor_dist {
                    *neighbor_dist = reach + 1;
                    pred.put(neighbor.clone(), key.clone())?;
                }
            }
        }
    }

    // the end of the longest chain: first maximum in topological order
    let mut end: Option<(&K, usize)> = None;
    for key in &order {
        let d = dist.get(key).copied().unwrap_or(1);
        if end.map_or(true, |(_, best)| d > best) {
            end = Some((key, d));
        }
    }
    let Some((end_key, _)) = end else {
        return Ok(Some(ArrayList::new()));
    };

    let mut path = Stack::new();
    let mut current = end_key.clone();
    loop {
        path.push(current.clone());
        match pred.get(&current) {
            Some(previous) => current = previous.clone(),
            None => break,
        }
    }
    Ok(Some(path.drain()))
}
