use crate::collections::FxIndexSet;
use crate::config::SearchLimits;
use crate::errors::PathPlannerError;
use crate::graph::{Exclusions, Graph};
use super::SearchResult;
use super::dijkstra::dijkstra_excluding;



/// Up to `k` loopless paths from start to end, cheapest first
/// Fewer than `k` are returned when the graph does not hold that many
pub fn k_shortest_paths(graph: &Graph, start: &str, end: &str, k: usize) -> Result<Vec<SearchResult>, PathPlannerError> {
    k_shortest_paths_with_limits(graph, start, end, k, &SearchLimits::default())
}


/// Yen's k-shortest loopless paths
/// https://en.wikipedia.org/wiki/Yen%27s_algorithm
/// Each spur search runs Dijkstra against a fresh `Exclusions` set, the graph itself is never modified
#[tracing::instrument(level = "debug", skip(graph, limits))]
pub fn k_shortest_paths_with_limits(
    graph: &Graph,
    start: &str,
    end: &str,
    k: usize,
    limits: &SearchLimits,
) -> Result<Vec<SearchResult>, PathPlannerError> {
    graph.ensure_node(start)?;
    graph.ensure_node(end)?;

    if k == 0 {
        return Ok(Vec::new());
    }

    let shortest = dijkstra_excluding(graph, start, end, &Exclusions::default());
    if !shortest.is_found() {
        tracing::debug!("end is unreachable from start");
        return Ok(Vec::new());
    }

    // Accepted paths, ascending cost
    let mut accepted: Vec<SearchResult> = vec![shortest];
    // Candidate pool
    let mut candidates: Vec<SearchResult> = Vec::new();
    let mut spur_searches = 0;

    while accepted.len() < k {
        let previous = &accepted[accepted.len() - 1].path;

        for j in 0..previous.len() - 1 {
            let spur_node = previous[j].as_str();
            let root_path = &previous[..=j];

            let mut exclusions = Exclusions::new();

            // Block the next hop of every accepted path that shares this root
            for path in accepted.iter().map(|accepted| &accepted.path) {
                if path.len() > j + 1 && path[..=j] == *root_path {
                    exclusions.exclude_edge(&path[j], &path[j + 1]);
                }
            }

            // Block the root nodes so the spur cannot loop back through them
            for node in &root_path[..j] {
                exclusions.exclude_node(node);
            }

            if let Some(limit) = limits.max_spur_searches {
                if spur_searches >= limit {
                    tracing::debug!(limit, accepted = accepted.len(), "spur search budget exhausted");
                    return Err(PathPlannerError::BudgetExhausted { limit });
                }
            }
            spur_searches += 1;

            let spur = dijkstra_excluding(graph, spur_node, end, &exclusions);
            if !spur.is_found() {
                continue;
            }

            let mut path: Vec<String> = root_path[..j].to_vec();
            path.extend(spur.path);

            // Cost is always taken from the full graph
            let Some(cost) = graph.path_cost(&path) else {
                continue;
            };

            let known = accepted.iter().chain(candidates.iter()).any(|result| result.path == path);
            if !known {
                tracing::trace!(spur_node, cost, "candidate");
                candidates.push(SearchResult::found(path, cost));
            }
        }

        // First of the cheapest candidates, ties keep discovery order
        let best = candidates.iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| a.cost.total_cmp(&b.cost))
            .map(|(index, _)| index);

        match best {
            Some(index) => accepted.push(candidates.remove(index)),
            None => {
                tracing::debug!(found = accepted.len(), "no further loopless paths");
                break;
            }
        }
    }

    Ok(accepted)
}


/// Up to `k` paths from start to end that pass through `via`
/// Built from the k cheapest start -> via and via -> end paths,
/// combinations that would visit a node twice are dropped
#[tracing::instrument(level = "debug", skip(graph))]
pub fn k_shortest_paths_via(
    graph: &Graph,
    start: &str,
    via: &str,
    end: &str,
    k: usize,
) -> Result<Vec<SearchResult>, PathPlannerError> {
    graph.ensure_node(via)?;

    let heads = k_shortest_paths(graph, start, via, k)?;
    let tails = k_shortest_paths(graph, via, end, k)?;

    let mut combined: Vec<SearchResult> = Vec::new();
    for head in &heads {
        for tail in &tails {
            let path: Vec<String> = head.path.iter()
                .chain(tail.path.iter().skip(1))
                .cloned()
                .collect();

            let distinct: FxIndexSet<&str> = path.iter().map(String::as_str).collect();
            if distinct.len() != path.len() {
                continue;
            }
            if combined.iter().any(|result| result.path == path) {
                continue;
            }

            combined.push(SearchResult::found(path, head.cost + tail.cost));
        }
    }

    // stable, equal costs keep head-major order
    combined.sort_by(|a, b| a.cost.total_cmp(&b.cost));
    combined.truncate(k);
    Ok(combined)
}
