//! Human-readable rendering of query reports

use std::fmt::Write;

use grus_core::query::{
    ChainReport, ComponentReport, CorridorReport, NodeSummary, OrderReport, RouteReport,
    ShortestReport,
};
use grus_core::LoadSummary;

fn node_line(node: &NodeSummary) -> String {
    format!(
        "{}  ({:.4}, {:.4})  {}  cranes={} events={} water={:.2}km",
        node.id, node.lat, node.lon, node.timestamp, node.cranes, node.events, node.avg_water_km
    )
}

fn path_block(out: &mut String, path: &[NodeSummary]) {
    for node in path {
        let _ = writeln!(out, "  {}", node_line(node));
    }
}

pub fn summary(report: &LoadSummary) -> String {
    format!(
        "events:      {}\nnodes:       {}\ntransitions: {}",
        report.events, report.nodes, report.transitions
    )
}

pub fn route(report: &RouteReport) -> String {
    let mut out = String::new();
    if report.reachable {
        let _ = writeln!(
            out,
            "route {} -> {}: reachable in {} hop(s)",
            report.from, report.to, report.hops
        );
        path_block(&mut out, &report.path);
    } else {
        let _ = writeln!(out, "route {} -> {}: unreachable", report.from, report.to);
    }
    out.trim_end().to_string()
}

pub fn shortest(report: &ShortestReport) -> String {
    let mut out = String::new();
    match report.total_weight {
        Some(weight) => {
            let _ = writeln!(
                out,
                "shortest {} -> {} ({}): {:.3}",
                report.from, report.to, report.metric, weight
            );
            path_block(&mut out, &report.path);
        }
        None => {
            let _ = writeln!(
                out,
                "shortest {} -> {} ({}): unreachable",
                report.from, report.to, report.metric
            );
        }
    }
    out.trim_end().to_string()
}

pub fn corridor(report: &CorridorReport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "corridor from {} ({}): {} node(s), total weight {:.3}",
        report.source, report.metric, report.nodes, report.total_weight
    );
    for edge in &report.edges {
        let _ = writeln!(out, "  {} -> {}  {:.3}", edge.from, edge.to, edge.weight);
    }
    out.trim_end().to_string()
}

pub fn order(report: &OrderReport) -> String {
    if !report.acyclic {
        return "migration graph is cyclic: no topological order".to_string();
    }
    let mut out = String::from("migration order:\n");
    path_block(&mut out, &report.order);
    out.trim_end().to_string()
}

pub fn chain(report: &ChainReport) -> String {
    if !report.acyclic {
        return "migration graph is cyclic: no longest chain".to_string();
    }
    let mut out = format!("longest chain: {} node(s)\n", report.length);
    path_block(&mut out, &report.path);
    out.trim_end().to_string()
}

pub fn components(report: &ComponentReport) -> String {
    let mut out = format!("{} component(s)\n", report.count);
    for (i, component) in report.components.iter().enumerate() {
        let _ = writeln!(
            out,
            "  #{}: {} node(s): {}",
            i + 1,
            component.size,
            component.members.join(", ")
        );
    }
    out.trim_end().to_string()
}
