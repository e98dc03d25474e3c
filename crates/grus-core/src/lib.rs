//! Core library for grus, a migratory-corridor analysis tool for GPS
//! crane-tracking exports.
//!
//! The crate is layered:
//!
//! - [`collections`] — the container substrate: array list, linear-probing
//!   hash map, binary-heap priority queue, stack and queue;
//! - [`graph`] — the directed weighted graph and its algorithms (BFS, DFS,
//!   Dijkstra, cheapest-connection tree, topological sort, longest chain,
//!   components);
//! - [`records`], [`ingest`], [`cluster`], [`catalog`] — the domain layer:
//!   CSV events, spatio-temporal clustering into migratory nodes, and the
//!   two weighted migration graphs;
//! - [`query`] — the analysis operations the CLI exposes.

pub mod catalog;
pub mod cluster;
pub mod collections;
pub mod error;
pub mod graph;
pub mod ingest;
pub mod logging;
pub mod query;
pub mod records;

pub use catalog::{Catalog, LoadSummary, Metric};
pub use error::{ExitCode, GrusError, Result};
pub use records::TrackEvent;
