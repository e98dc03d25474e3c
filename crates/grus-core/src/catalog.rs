//! The catalog: events, nodes, and the two migration graphs
//!
//! Both graphs share the same topology (one vertex per migratory node, one
//! edge per observed node transition) and differ only in edge weight:
//!
//! - distance graph: mean haversine distance between the consecutive event
//!   positions observed for that transition;
//! - water graph: mean of the destination node's average water distance
//!   over the observed transitions.
//!
//! Transitions are inferred per crane: its events, in timestamp order,
//! mapped to nodes; each consecutive pair landing on two different nodes
//! is one observation of the ordered pair.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::Serialize;

use crate::cluster::{self, haversine_km, MigratoryNode};
use crate::collections::{ArrayList, LinearProbingMap};
use crate::error::{GrusError, Result};
use crate::graph::DiGraph;
use crate::ingest;
use crate::records::TrackEvent;
use crate::trace_time;

/// Which edge weighting a query runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Distance,
    Water,
}

impl FromStr for Metric {
    type Err = GrusError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "distance" => Ok(Metric::Distance),
            "water" => Ok(Metric::Water),
            other => Err(GrusError::UsageError(format!(
                "unknown metric: {other} (expected: distance or water)"
            ))),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Distance => write!(f, "distance"),
            Metric::Water => write!(f, "water"),
        }
    }
}

/// Counts reported after a load.
#[derive(Debug, Clone, Serialize)]
pub struct LoadSummary {
    pub events: usize,
    pub nodes: usize,
    pub transitions: usize,
}

#[derive(Debug, Clone, Default)]
struct TransitionStats {
    observations: usize,
    dist_sum: f64,
    water_sum: f64,
}

/// Owns everything a query needs; built once per run, then read-only.
#[derive(Debug)]
pub struct Catalog {
    events: ArrayList<TrackEvent>,
    nodes: ArrayList<MigratoryNode>,
    event_node: LinearProbingMap<String, String>,
    node_index: LinearProbingMap<String, usize>,
    distance_graph: DiGraph<String, usize>,
    water_graph: DiGraph<String, usize>,
}

impl Catalog {
    /// Loads a tracking export and builds the full catalog.
    pub fn load(path: &Path) -> Result<Catalog> {
        let events = ingest::load_events(path)?;
        Catalog::build(events)
    }

    /// Builds the catalog from already-sorted events.
    pub fn build(events: ArrayList<TrackEvent>) -> Result<Catalog> {
        let start = std::time::Instant::now();
        let (nodes, event_node) = cluster::build_nodes(&events)?;

        let expected = nodes.size().max(16);
        let mut node_index = LinearProbingMap::with_expected(expected)?;
        let mut distance_graph = DiGraph::new(expected)?;
        let mut water_graph = DiGraph::new(expected)?;
        for (i, node) in nodes.iter().enumerate() {
            node_index.put(node.id.clone(), i)?;
            distance_graph.insert_vertex(node.id.clone(), i)?;
            water_graph.insert_vertex(node.id.clone(), i)?;
        }

        let mut catalog = Catalog {
            events,
            nodes,
            event_node,
            node_index,
            distance_graph,
            water_graph,
        };
        catalog.build_edges()?;
        trace_time!(start, "catalog_built");
        Ok(catalog)
    }

    /// Walks each crane's events and turns node transitions into edges.
    fn build_edges(&mut self) -> Result<()> {
        // events are globally timestamp-sorted, so each group stays sorted
        let mut groups: LinearProbingMap<String, ArrayList<usize>> =
            LinearProbingMap::with_expected(self.events.size().max(16))?;
        for (i, event) in self.events.iter().enumerate() {
            match groups.get_mut(&event.tag) {
                Some(list) => list.add_last(i),
                None => {
                    let mut list = ArrayList::new();
                    list.add_last(i);
                    groups.put(event.tag.clone(), list)?;
                }
            }
        }

        let mut transitions: LinearProbingMap<(String, String), TransitionStats> =
            LinearProbingMap::with_expected(self.events.size().max(16))?;

        for tag in &groups.key_set() {
            let indices = groups.get(tag).expect("key from key_set");
            let mut prev: Option<usize> = None;
            for &i in indices {
                let event = self.events.get(i).expect("index in bounds");
                let node_id = self
                    .event_node
                    .get(&event.event_id)
                    .expect("every event was assigned a node");

                if let Some(p) = prev {
                    let prev_event = self.events.get(p).expect("index in bounds");
                    let prev_node = self
                        .event_node
                        .get(&prev_event.event_id)
                        .expect("every event was assigned a node");

                    if prev_node != node_id {
                        let dist =
                            haversine_km(prev_event.lat, prev_event.lon, event.lat, event.lon);
                        let dest = self.node(node_id)?;
                        let key = (prev_node.clone(), node_id.clone());
                        match transitions.get_mut(&key) {
                            Some(stats) => {
                                stats.observations += 1;
                                stats.dist_sum += dist;
                                stats.water_sum += dest.avg_water;
                            }
                            None => {
                                transitions.put(
                                    key,
                                    TransitionStats {
                                        observations: 1,
                                        dist_sum: dist,
                                        water_sum: dest.avg_water,
                                    },
                                )?;
                            }
                        }
                    }
                }
                prev = Some(i);
            }
        }

        for ((from, to), stats) in transitions.iter() {
            let n = stats.observations as f64;
            self.distance_graph
                .add_edge(from, to, stats.dist_sum / n)?;
            self.water_graph.add_edge(from, to, stats.water_sum / n)?;
        }
        tracing::debug!(
            nodes = self.nodes.size(),
            transitions = self.distance_graph.size(),
            "graphs_built"
        );
        Ok(())
    }

    pub fn summary(&self) -> LoadSummary {
        LoadSummary {
            events: self.events.size(),
            nodes: self.nodes.size(),
            transitions: self.distance_graph.size(),
        }
    }

    pub fn events(&self) -> &ArrayList<TrackEvent> {
        &self.events
    }

    pub fn nodes(&self) -> &ArrayList<MigratoryNode> {
        &self.nodes
    }

    /// The node an event was clustered into.
    pub fn node_of_event(&self, event_id: &str) -> Option<&MigratoryNode> {
        let node_id = self.event_node.get(&event_id.to_string())?;
        self.node(node_id).ok()
    }

    /// Resolves a node id, or a data error naming it.
    pub fn node(&self, id: &str) -> Result<&MigratoryNode> {
        let index = self
            .node_index
            .get(&id.to_string())
            .ok_or_else(|| GrusError::NodeNotFound { id: id.to_string() })?;
        self.nodes
            .get(*index)
            .ok_or_else(|| GrusError::NodeNotFound { id: id.to_string() })
    }

    pub fn graph(&self, metric: Metric) -> &DiGraph<String, usize> {
        match metric {
            Metric::Distance => &self.distance_graph,
            Metric::Water => &self.water_graph,
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use crate::cluster::testing::event;

    /// Two nodes ~33 km apart; both cranes travel north, T-1 twice.
    ///
    /// Node ids are the seed event ids: "e1" (south) and "e3" (north).
    pub fn two_node_catalog() -> Result<Catalog> {
        let mut events = ArrayList::new();
        events.add_last(event("e1", "2021-05-01 06:00:00", 52.0, 10.0, "T-1", 1.0));
        events.add_last(event("e2", "2021-05-01 06:30:00", 52.01, 10.0, "T-2", 2.0));
        events.add_last(event("e3", "2021-05-02 06:00:00", 52.3, 10.0, "T-1", 4.0));
        events.add_last(event("e4", "2021-05-02 07:00:00", 52.3, 10.0, "T-2", 6.0));
        Catalog::build(events)
    }
}
