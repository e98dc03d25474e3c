//! Spatio-temporal clustering of events into migratory nodes
//!
//! A node is seeded by the first event no existing node accepts. An event
//! fits a node when it lies within [`NODE_RADIUS_KM`] of the node's seed
//! position and within [`NODE_WINDOW_HOURS`] of the node's seed timestamp
//! (sub-second precision dropped). The node keeps its seed coordinates for
//! all fit checks; absorbed events only update the aggregates.

use chrono::{NaiveDateTime, Timelike};

use crate::collections::{ArrayList, LinearProbingMap};
use crate::error::Result;
use crate::records::TrackEvent;

/// Spatial threshold for an event to join a node, in kilometres.
pub const NODE_RADIUS_KM: f64 = 3.0;
/// Temporal threshold for an event to join a node, in hours.
pub const NODE_WINDOW_HOURS: f64 = 3.0;
/// Mean Earth radius used by the haversine formula, in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two lat/lon positions, in kilometres.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let dlat = (lat2 - lat1).to_radians();
    let dlon = (lon2 - lon1).to_radians();
    let a = (dlat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

/// A cluster of events close in space and time.
#[derive(Debug, Clone)]
pub struct MigratoryNode {
    /// Seed event id; doubles as the graph vertex key.
    pub id: String,
    pub lat: f64,
    pub lon: f64,
    /// Seed timestamp, truncated to whole seconds.
    pub timestamp: NaiveDateTime,
    /// Distinct crane tags observed at this node.
    pub cranes: ArrayList<String>,
    pub event_count: usize,
    total_water: f64,
    /// Running mean of the member events' water distance, in kilometres.
    pub avg_water: f64,
}

impl MigratoryNode {
    /// Seeds a node from its first event.
    pub fn new(event: &TrackEvent) -> Self {
        let mut cranes = ArrayList::new();
        cranes.add_last(event.tag.clone());
        MigratoryNode {
            id: event.event_id.clone(),
            lat: event.lat,
            lon: event.lon,
            timestamp: truncate_seconds(event.timestamp),
            cranes,
            event_count: 1,
            total_water: event.water_km,
            avg_water: event.water_km,
        }
    }

    /// Whether `event` is within the node's spatial and temporal window.
    pub fn fits(&self, event: &TrackEvent) -> bool {
        let dist = haversine_km(self.lat, self.lon, event.lat, event.lon);
        if dist > NODE_RADIUS_KM {
            return false;
        }
        let delta = truncate_seconds(event.timestamp) - self.timestamp;
        let hours = delta.num_seconds().abs() as f64 / 3600.0;
        hours <= NODE_WINDOW_HOURS
    }

    /// Folds `event` into the node's aggregates.
    pub fn absorb(&mut self, event: &TrackEvent) {
        if !self.cranes.contains(&event.tag) {
            self.cranes.add_last(event.tag.clone());
        }
        self.event_count += 1;
        self.total_water += event.water_km;
        self.avg_water = self.total_water / self.event_count as f64;
    }

    pub fn crane_count(&self) -> usize {
        self.cranes.size()
    }
}

fn truncate_seconds(t: NaiveDateTime) -> NaiveDateTime {
    t.with_nanosecond(0).unwrap_or(t)
}

/// Clusters `events` into nodes, first-fit against existing nodes in
/// creation order. Returns the node list and the event-id → node-id map.
pub fn build_nodes(
    events: &ArrayList<TrackEvent>,
) -> Result<(ArrayList<MigratoryNode>, LinearProbingMap<String, String>)> {
    let mut nodes: ArrayList<MigratoryNode> = ArrayList::new();
    let mut event_node = LinearProbingMap::with_expected(events.size().max(16))?;

    for event in events {
        let mut assigned = None;
        for i in 0..nodes.size() {
            let node = nodes.get_mut(i).expect("index in bounds");
            if node.fits(event) {
                node.absorb(event);
                assigned = Some(node.id.clone());
                break;
            }
        }
        let node_id = match assigned {
            Some(id) => id,
            None => {
                let node = MigratoryNode::new(event);
                let id = node.id.clone();
                nodes.add_last(node);
                id
            }
        };
        event_node.put(event.event_id.clone(), node_id)?;
    }

    tracing::debug!(events = events.size(), nodes = nodes.size(), "nodes_built");
    Ok((nodes, event_node))
}


#[cfg(test)]
mod tests {
    use super::testing::event;
    use super::*;

    #[test]
    fn test_haversine_known_distance() {
        // Berlin to Hamburg, roughly 255 km
        let d = haversine_km(52.52, 13.405, 53.551, 9.993);
        assert!((d - 255.0).abs() < 5.0, "got {d}");

        assert_eq!(haversine_km(10.0, 20.0, 10.0, 20.0), 0.0);
    }

    #[test]
    fn test_fit_thresholds() {
        let seed = event("e1", "2021-05-01 06:00:00", 52.0, 10.0, "T-1", 1.0);
        let node = MigratoryNode::new(&seed);

        // ~0.01 deg latitude is ~1.1 km
        let near = event("e2", "2021-05-01 08:00:00", 52.01, 10.0, "T-2", 1.0);
        assert!(node.fits(&near));

        // ~4.4 km away
        let far = event("e3", "2021-05-01 08:00:00", 52.04, 10.0, "T-2", 1.0);
        assert!(!node.fits(&far));

        let late = event("e4", "2021-05-01 10:00:01", 52.01, 10.0, "T-2", 1.0);
        assert!(!node.fits(&late));

        // exactly at the 3 h boundary still fits
        let edge = event("e5", "2021-05-01 09:00:00", 52.01, 10.0, "T-2", 1.0);
        assert!(node.fits(&edge));
    }

    #[test]
    fn test_absorb_updates_aggregates() {
        let seed = event("e1", "2021-05-01 06:00:00", 52.0, 10.0, "T-1", 2.0);
        let mut node = MigratoryNode::new(&seed);

        node.absorb(&event("e2", "2021-05-01 06:30:00", 52.0, 10.0, "T-2", 4.0));
        node.absorb(&event("e3", "2021-05-01 07:00:00", 52.0, 10.0, "T-1", 3.0));

        assert_eq!(node.event_count, 3);
        // T-1 counted once
        assert_eq!(node.crane_count(), 2);
        assert!((node.avg_water - 3.0).abs() < 1e-9);
        // seed position never moves
        assert_eq!(node.lat, 52.0);
    }

    #[test]
    fn test_build_nodes_two_bursts() {
        let mut events = ArrayList::new();
        events.add_last(event("e1", "2021-05-01 06:00:00", 52.0, 10.0, "T-1", 1.0));
        events.add_last(event("e2", "2021-05-01 06:30:00", 52.01, 10.0, "T-2", 1.0));
        // ~33 km north, next day
        events.add_last(event("e3", "2021-05-02 06:00:00", 52.3, 10.0, "T-1", 1.0));

        let (nodes, event_node) = build_nodes(&events).unwrap();
        assert_eq!(nodes.size(), 2);
        assert_eq!(event_node.get(&"e1".to_string()), Some(&"e1".to_string()));
        assert_eq!(event_node.get(&"e2".to_string()), Some(&"e1".to_string()));
        assert_eq!(event_node.get(&"e3".to_string()), Some(&"e3".to_string()));
    }

    #[test]
    fn test_same_place_different_day_is_a_new_node() {
        let mut events = ArrayList::new();
        events.add_last(event("e1", "2021-05-01 06:00:00", 52.0, 10.0, "T-1", 1.0));
        events.add_last(event("e2", "2021-05-08 06:00:00", 52.0, 10.0, "T-1", 1.0));

        let (nodes, _) = build_nodes(&events).unwrap();
        assert_eq!(nodes.size(), 2);
    }
}
