//! Connected-component enumeration
//!
//! Repeatedly picks an unvisited vertex and collects its DFS-reachable
//! set under the directed adjacency as one component, until every vertex
//! is visited. Components are reachability sets, not strongly-connected
//! components; their membership is independent of visitation order, their
//! numbering is not.

use crate::collections::{ArrayList, LinearProbingMap, Stack};
use crate::error::Result;
use crate::graph::{DiGraph, VertexKey};

/// All components of the graph, each a list of vertex keys.
pub fn connected_components<K: VertexKey, V>(
    graph: &DiGraph<K, V>,
) -> Result<ArrayList<ArrayList<K>>> {
    let mut marked: LinearProbingMap<K, bool> =
        LinearProbingMap::with_expected(graph.order().max(1))?;
    let mut components = ArrayList::new();

    for key in &graph.vertices() {
        if marked.contains(key) {
            continue;
        }
        let mut component = ArrayList::new();
        let mut stack = Stack::new();
        marked.put(key.clone(), true)?;
        stack.push(key.clone());

        while let Some(vertex) = stack.pop() {
            component.add_last(vertex.clone());
            for neighbor in &graph.adjacents(&vertex)? {
                if !marked.contains(neighbor) {
                    marked.put(neighbor.clone(), true)?;
                    stack.push(neighbor.clone());
                }
            }
        }
        components.add_last(component);
    }

    Ok(components)
}
