//! Informed search over small undirected weighted graphs
//!
//! - `heuristic` builds cost-to-goal estimates (exact via Dijkstra, or from node positions)
//! - `graph_algos::search` runs Greedy Best-First, A*, and two hill climbing variants
//! - `graph_algos::yen` finds k loopless alternative routes
//!
//! Every call is synchronous and pure over its inputs, nothing is cached between calls.

pub mod collections;
pub mod config;
pub mod errors;
pub mod geometry;
pub mod graph;
pub mod graph_algos;
pub mod heuristic;

pub use config::{HeuristicKind, PlannerConfig, SearchLimits};
pub use errors::PathPlannerError;
pub use graph::{Graph, fixtures::load_graph};
pub use graph_algos::{
    SearchResult, Strategy, Termination,
    k_shortest_paths, k_shortest_paths_via, k_shortest_paths_with_limits,
    search, search_with_limits,
};
pub use heuristic::{HeuristicMode, HeuristicTable, heuristic};
