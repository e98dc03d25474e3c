//! Query layer: the analysis operations the CLI exposes
//!
//! Every query validates its node arguments against the catalog first, so
//! a bad id surfaces as a data error rather than a missing-vertex error
//! from deep inside an algorithm. "No result" outcomes (unreachable
//! target, cyclic graph) are not errors; the report says so.

use serde::Serialize;

use crate::catalog::{Catalog, Metric};
use crate::cluster::MigratoryNode;
use crate::collections::ArrayList;
use crate::error::Result;
use crate::graph::{self, DiGraph};

/// A node resolved for display.
#[derive(Debug, Clone, Serialize)]
pub struct NodeSummary {
    pub id: String,
    pub lat: f64,
    pub lon: f64,
    pub timestamp: String,
    pub cranes: usize,
    pub events: usize,
    pub avg_water_km: f64,
}

impl From<&MigratoryNode> for NodeSummary {
    fn from(node: &MigratoryNode) -> Self {
        NodeSummary {
            id: node.id.clone(),
            lat: node.lat,
            lon: node.lon,
            timestamp: node.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
            cranes: node.crane_count(),
            events: node.event_count,
            avg_water_km: node.avg_water,
        }
    }
}

/// Route between two nodes found by a traversal (DFS or BFS).
#[derive(Debug, Serialize)]
pub struct RouteReport {
    pub from: String,
    pub to: String,
    pub reachable: bool,
    /// Edges along the path; 0 when unreachable or `from == to`.
    pub hops: usize,
    pub path: Vec<NodeSummary>,
}

/// Minimum-weight route under a metric.
#[derive(Debug, Serialize)]
pub struct ShortestReport {
    pub from: String,
    pub to: String,
    pub metric: Metric,
    pub reachable: bool,
    pub total_weight: Option<f64>,
    pub path: Vec<NodeSummary>,
}

#[derive(Debug, Serialize)]
pub struct CorridorEdge {
    pub from: String,
    pub to: String,
    pub weight: f64,
}

/// Cheapest-connection corridor grown from a source node.
#[derive(Debug, Serialize)]
pub struct CorridorReport {
    pub source: String,
    pub metric: Metric,
    pub nodes: usize,
    pub total_weight: f64,
    pub edges: Vec<CorridorEdge>,
}

/// Topological ordering of the migration graph.
#[derive(Debug, Serialize)]
pub struct OrderReport {
    pub acyclic: bool,
    pub order: Vec<NodeSummary>,
}

/// Longest migration chain (vertex count) in the DAG.
#[derive(Debug, Serialize)]
pub struct ChainReport {
    pub acyclic: bool,
    pub length: usize,
    pub path: Vec<NodeSummary>,
}

#[derive(Debug, Serialize)]
pub struct ComponentSummary {
    pub size: usize,
    pub members: Vec<String>,
}

/// Census of the corridor's connected components.
#[derive(Debug, Serialize)]
pub struct ComponentReport {
    pub count: usize,
    pub components: Vec<ComponentSummary>,
}

fn summaries(catalog: &Catalog, keys: &ArrayList<String>) -> Result<Vec<NodeSummary>> {
    let mut out = Vec::with_capacity(keys.size());
    for key in keys {
        out.push(NodeSummary::from(catalog.node(key)?));
    }
    Ok(out)
}

fn route_graph(catalog: &Catalog) -> &DiGraph<String, usize> {
    // both graphs share topology; traversal queries use the distance one
    catalog.graph(Metric::Distance)
}

/// Whether `to` is reachable from `from`, with a DFS witness route.
pub fn reach_route(catalog: &Catalog, from: &str, to: &str) -> Result<RouteReport> {
    catalog.node(from)?;
    catalog.node(to)?;
    let search = graph::dfs(route_graph(catalog), &from.to_string())?;
    report_route(catalog, from, to, search.path_to(&to.to_string()))
}

/// Route with the fewest transitions between two nodes, via BFS.
pub fn min_hop_route(catalog: &Catalog, from: &str, to: &str) -> Result<RouteReport> {
    catalog.node(from)?;
    catalog.node(to)?;
    let search = graph::bfs(route_graph(catalog), &from.to_string())?;
    report_route(catalog, from, to, search.path_to(&to.to_string()))
}

fn report_route(
    catalog: &Catalog,
    from: &str,
    to: &str,
    path: Option<ArrayList<String>>,
) -> Result<RouteReport> {
    let (reachable, path) = match path {
        Some(p) => (true, summaries(catalog, &p)?),
        None => (false, Vec::new()),
    };
    Ok(RouteReport {
        from: from.to_string(),
        to: to.to_string(),
        reachable,
        hops: path.len().saturating_sub(1),
        path,
    })
}

/// Minimum-weight route under `metric`, via Dijkstra.
pub fn shortest_route(
    catalog: &Catalog,
    metric: Metric,
    from: &str,
    to: &str,
) -> Result<ShortestReport> {
    catalog.node(from)?;
    catalog.node(to)?;
    let search = graph::dijkstra(catalog.graph(metric), &from.to_string())?;
    let target = to.to_string();
    let path = match search.path_to(&target) {
        Some(p) => summaries(catalog, &p)?,
        None => Vec::new(),
    };
    Ok(ShortestReport {
        from: from.to_string(),
        to: to.to_string(),
        metric,
        reachable: search.has_path_to(&target),
        total_weight: search.dist_to(&target),
        path,
    })
}

/// Cheapest-connection corridor from `source` under `metric`.
pub fn corridor(catalog: &Catalog, metric: Metric, source: &str) -> Result<CorridorReport> {
    catalog.node(source)?;
    let tree = graph::corridor_tree(catalog.graph(metric), &source.to_string())?;
    let mut edges: Vec<CorridorEdge> = tree
        .tree_edges()
        .iter()
        .map(|e| CorridorEdge {
            from: e.from.clone(),
            to: e.to.clone(),
            weight: e.weight,
        })
        .collect();
    edges.sort_by(|a, b| a.weight.total_cmp(&b.weight));
    Ok(CorridorReport {
        source: source.to_string(),
        metric,
        nodes: tree.vertex_count(),
        total_weight: tree.total_weight(),
        edges,
    })
}

/// Kahn topological order of the migration graph; inapplicable on cycles.
pub fn migration_order(catalog: &Catalog) -> Result<OrderReport> {
    match graph::topological_sort(route_graph(catalog))? {
        Some(order) => Ok(OrderReport {
            acyclic: true,
            order: summaries(catalog, &order)?,
        }),
        None => Ok(OrderReport {
            acyclic: false,
            order: Vec::new(),
        }),
    }
}

/// Longest migration chain by node count; inapplicable on cycles.
pub fn longest_chain(catalog: &Catalog) -> Result<ChainReport> {
    match graph::longest_path(route_graph(catalog))? {
        Some(path) => {
            let path = summaries(catalog, &path)?;
            Ok(ChainReport {
                acyclic: true,
                length: path.len(),
                path,
            })
        }
        None => Ok(ChainReport {
            acyclic: false,
            length: 0,
            path: Vec::new(),
        }),
    }
}

/// Connected-component census of the corridor graph.
pub fn component_census(catalog: &Catalog) -> Result<ComponentReport> {
    let components = graph::connected_components(route_graph(catalog))?;
    let mut out = Vec::with_capacity(components.size());
    for component in &components {
        out.push(ComponentSummary {
            size: component.size(),
            members: component.iter().cloned().collect(),
        });
    }
    out.sort_by(|a, b| b.size.cmp(&a.size));
    Ok(ComponentReport {
        count: out.len(),
        components: out,
    })
}
