use crate::collections::FxIndexSet;
use crate::config::SearchLimits;
use crate::errors::PathPlannerError;
use crate::graph::{Cost, Graph};
use crate::heuristic::HeuristicTable;
use super::SearchResult;

use num_traits::Zero;


/// Neighbor selection rule
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Ascent {
    /// Scan neighbors in adjacency order, keep the first with the strictly lowest estimate
    /// Neighbors with an infinite estimate are never taken
    Simple,
    /// Rank every unvisited neighbor by (estimate, label) and take the best
    Steepest,
}


/// Hill climbing toward the goal
/// https://en.wikipedia.org/wiki/Hill_climbing
/// Keeps a single current path and never backtracks, so it stops at the first
/// node whose neighbors are all on the path already. That dead end is reported
/// as `Termination::LocalOptimum` even when a route exists elsewhere.
pub(crate) fn hill_climb(
    graph: &Graph,
    start: &str,
    goal: &str,
    heuristic: &HeuristicTable,
    ascent: Ascent,
    limits: &SearchLimits,
) -> Result<SearchResult, PathPlannerError> {
    let Some(mut current) = graph.node_key(start) else {
        return Err(PathPlannerError::InvalidNode(start.to_string()));
    };

    // Insertion ordered, so it doubles as the path
    let mut path: FxIndexSet<&str> = FxIndexSet::default();
    path.insert(current);
    let mut cost = Cost::zero();

    while current != goal {

        if let Some(limit) = limits.max_expansions {
            if path.len() > limit {
                tracing::debug!(limit, "step budget exhausted");
                return Err(PathPlannerError::BudgetExhausted { limit });
            }
        }

        let candidates = graph.neighbors(current)
            .filter(|(neighbor, _)| !path.contains(neighbor))
            .map(|(neighbor, weight)| (heuristic.cost(neighbor), neighbor, weight));

        let best = match ascent {
            Ascent::Simple => {
                let mut best: Option<(Cost, &str, f64)> = None;
                for candidate in candidates {
                    let best_score = best.map_or(Cost::INFINITY, |(h, _, _)| h);
                    if candidate.0 < best_score {
                        best = Some(candidate);
                    }
                }
                best
            }
            Ascent::Steepest => candidates.min_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(b.1))),
        };

        let Some((estimate, next, weight)) = best else {
            tracing::debug!(node = current, hops = path.len() - 1, "no unvisited neighbor, stuck at local optimum");
            return Ok(SearchResult::local_optimum());
        };

        tracing::trace!(from = current, to = next, estimate = estimate.value(), "climb");
        cost = cost + Cost(weight);
        current = next;
        path.insert(current);
    }

    let path = path.into_iter().map(str::to_string).collect();
    Ok(SearchResult::found(path, cost.value()))
}
