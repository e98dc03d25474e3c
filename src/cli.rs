//! CLI argument parsing for grus
//!
//! Global flags: --data, --format, --quiet, --verbose, --log-level,
//! --log-json. Each subcommand maps to one query over the loaded catalog.

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, Subcommand, ValueEnum};

use grus_core::Metric;

/// Grus - migratory-corridor analysis for GPS crane-tracking exports
#[derive(Parser, Debug)]
#[command(name = "grus")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the tracking CSV export
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Verbose logging (grus=debug)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Explicit log level filter (overrides --verbose)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load the export and report event/node/transition counts
    Summary,

    /// Whether a route exists between two nodes (DFS witness path)
    Reach {
        /// Origin node id
        from: String,
        /// Destination node id
        to: String,
    },

    /// Route with the fewest transitions between two nodes (BFS)
    Hops {
        /// Origin node id
        from: String,
        /// Destination node id
        to: String,
    },

    /// Minimum-weight route between two nodes (Dijkstra)
    Shortest {
        /// Origin node id
        from: String,
        /// Destination node id
        to: String,

        /// Edge weighting: distance or water
        #[arg(long, value_parser = parse_metric, default_value = "distance")]
        metric: Metric,
    },

    /// Cheapest-connection corridor grown from a source node
    Corridor {
        /// Source node id
        source: String,

        /// Edge weighting: distance or water
        #[arg(long, value_parser = parse_metric, default_value = "distance")]
        metric: Metric,
    },

    /// Topological ordering of the migration graph
    Order,

    /// Longest migration chain in the graph
    Chain,

    /// Census of connected corridor components
    Components,
}

fn parse_metric(s: &str) -> Result<Metric, String> {
    Metric::from_str(s).map_err(|e| e.to_string())
}
