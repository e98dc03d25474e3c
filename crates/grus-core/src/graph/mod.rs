//! Graph ADT and traversal/path algorithms
//!
//! A directed weighted graph built on the probing map, and the algorithm
//! family the query layer consumes:
//! - BFS / DFS with came-from path reconstruction
//! - Dijkstra single-source shortest paths (non-negative weights)
//! - Prim-style cheapest-connection tree over the directed reachable set
//! - Kahn topological sort and longest path in a DAG
//! - connected-component enumeration via repeated DFS
//!
//! Algorithms never mutate the graph; each run allocates fresh working
//! state and returns a result object with key-level accessors.

pub mod bfs;
pub mod components;
pub mod dfs;
pub mod digraph;
pub mod dijkstra;
pub mod prim;
pub mod topo;

pub use bfs::{bfs, BfsSearch};
pub use components::connected_components;
pub use dfs::{dfs, DfsSearch};
pub use digraph::{DiGraph, Edge, Vertex};
pub use dijkstra::{dijkstra, DijkstraSearch};
pub use prim::{corridor_tree, CorridorTree};
pub use topo::{longest_path, topological_sort};

use std::fmt::Display;
use std::hash::Hash;

/// Bounds every graph key must satisfy: hashable for the probing map,
/// cloneable into working state, and displayable for error reporting.
pub trait VertexKey: Hash + Eq + Clone + Display {}

impl<T: Hash + Eq + Clone + Display> VertexKey for T {}
