use crate::config::SearchLimits;
use crate::errors::PathPlannerError;
use crate::graph::Graph;
use crate::heuristic::HeuristicTable;
use super::best_first::{Ranking, best_first};
use super::hill_climbing::{Ascent, hill_climb};

use std::fmt;
use serde::{Deserialize, Serialize};


/// Single-path search strategies
/// All four share one engine, they differ only in how the next node is picked
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    GreedyBestFirst, // rank by h(n), ignores cost so far
    AStar, // rank by g(n) + h(n), optimal with an admissible heuristic
    SimpleHillClimbing, // first neighbor with the lowest h, no backtracking
    SteepestAscentHillClimbing, // best of all unvisited neighbors, no backtracking
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::SimpleHillClimbing,
        Strategy::SteepestAscentHillClimbing,
        Strategy::AStar,
        Strategy::GreedyBestFirst,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::GreedyBestFirst => "Greedy Best-First Search",
            Strategy::AStar => "A* Search",
            Strategy::SimpleHillClimbing => "Simple Hill Climbing",
            Strategy::SteepestAscentHillClimbing => "Steepest Ascent Hill Climbing",
        }
    }

    /// Hill climbing never backtracks, so it can miss a path that exists
    pub fn is_complete(self) -> bool {
        matches!(self, Strategy::GreedyBestFirst | Strategy::AStar)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}


/// Why a search stopped
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Termination {
    Found,
    /// Every reachable node was explored without meeting the goal
    Unreachable,
    /// Hill climbing ran out of unvisited neighbors, a path may still exist
    LocalOptimum,
}


/// Path and its total edge weight
/// When nothing is found the path is empty and the cost is infinite
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub path: Vec<String>,
    pub cost: f64,
    pub termination: Termination,
}

impl SearchResult {

    pub fn found(path: Vec<String>, cost: f64) -> Self {
        Self { path, cost, termination: Termination::Found }
    }

    pub fn unreachable() -> Self {
        Self::not_found(Termination::Unreachable)
    }

    pub fn local_optimum() -> Self {
        Self::not_found(Termination::LocalOptimum)
    }

    fn not_found(termination: Termination) -> Self {
        Self { path: Vec::new(), cost: f64::INFINITY, termination }
    }

    pub fn is_found(&self) -> bool {
        self.termination == Termination::Found
    }

    /// Number of edges on the path
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

impl fmt::Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.termination {
            Termination::Found => write!(f, "{} (cost {})", self.path.join(" -> "), self.cost),
            Termination::Unreachable => f.write_str("no path found"),
            Termination::LocalOptimum => f.write_str("no path found (stuck at a local optimum)"),
        }
    }
}


/// Find a route from start to goal with the given strategy
/// `heuristic` must be built toward `goal`, otherwise `HeuristicGoalMismatch` is returned
pub fn search(
    strategy: Strategy,
    graph: &Graph,
    start: &str,
    goal: &str,
    heuristic: &HeuristicTable,
) -> Result<SearchResult, PathPlannerError> {
    search_with_limits(strategy, graph, start, goal, heuristic, &SearchLimits::default())
}


/// `search` with a bound on the number of nodes expanded
#[tracing::instrument(level = "debug", skip(strategy, graph, heuristic, limits), fields(strategy = %strategy))]
pub fn search_with_limits(
    strategy: Strategy,
    graph: &Graph,
    start: &str,
    goal: &str,
    heuristic: &HeuristicTable,
    limits: &SearchLimits,
) -> Result<SearchResult, PathPlannerError> {
    graph.ensure_node(start)?;
    graph.ensure_node(goal)?;

    if heuristic.goal() != goal {
        return Err(PathPlannerError::HeuristicGoalMismatch {
            table_goal: heuristic.goal().to_string(),
            goal: goal.to_string(),
        });
    }

    let result = match strategy {
        Strategy::GreedyBestFirst => best_first(graph, start, goal, heuristic, Ranking::Heuristic, limits)?,
        Strategy::AStar => best_first(graph, start, goal, heuristic, Ranking::CostPlusHeuristic, limits)?,
        Strategy::SimpleHillClimbing => hill_climb(graph, start, goal, heuristic, Ascent::Simple, limits)?,
        Strategy::SteepestAscentHillClimbing => hill_climb(graph, start, goal, heuristic, Ascent::Steepest, limits)?,
    };

    if result.termination == Termination::LocalOptimum && !strategy.is_complete() {
        tracing::debug!("strategy gave up early, a path may still exist");
    }
    tracing::debug!(termination = ?result.termination, cost = result.cost, hops = result.hops(), "search finished");
    Ok(result)
}
