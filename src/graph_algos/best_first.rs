use crate::config::SearchLimits;
use crate::errors::PathPlannerError;
use crate::graph::{Cost, Graph};
use crate::heuristic::HeuristicTable;
use super::{GraphNodeMap, SearchResult, reconstruct_path};

use std::{
    collections::BinaryHeap,
    cmp::Ordering
};
use num_traits::Zero;



/// How an open entry is ranked, lowest rank is expanded first
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Ranking {
    Heuristic, // greedy best-first: h(n)
    CostPlusHeuristic, // A*: g(n) + h(n)
}

impl Ranking {
    fn rank(self, cost: Cost, estimate: Cost) -> Cost {
        match self {
            Ranking::Heuristic => estimate,
            Ranking::CostPlusHeuristic => cost + estimate,
        }
    }
}


/// Entry on the open list
#[derive(Debug)]
struct OpenEntry<'g> {
    rank: Cost, // ordering key
    node: &'g str,
    parent: usize, // index in the closed list, usize::MAX for the start node
    cost: Cost, // confirmed cost from the start
    seq: usize, // push order, last tie-break
}

// Reversed so the BinaryHeap pops the lowest rank
// Ties fall back to node label, then push order, keeping runs deterministic
impl Ord for OpenEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.rank.cmp(&self.rank)
            .then_with(|| other.node.cmp(self.node))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}
impl PartialOrd for OpenEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl PartialEq for OpenEntry<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Eq for OpenEntry<'_> {}


/// Best-first search shared by Greedy and A*
/// https://en.wikipedia.org/wiki/Best-first_search
/// A node is finalized the first time it is popped and never expanded again,
/// which keeps A* optimal as long as the heuristic is admissible and consistent
pub(crate) fn best_first(
    graph: &Graph,
    start: &str,
    goal: &str,
    heuristic: &HeuristicTable,
    ranking: Ranking,
    limits: &SearchLimits,
) -> Result<SearchResult, PathPlannerError> {
    let Some(start) = graph.node_key(start) else {
        return Err(PathPlannerError::InvalidNode(start.to_string()));
    };

    // Open List
    // Nodes discovered but not finalized, a node may appear more than once
    let mut open_list: BinaryHeap<OpenEntry> = BinaryHeap::new();

    // Closed List
    // Finalized nodes with (parent_index, cost), used to rebuild the final path
    let mut closed_list: GraphNodeMap<&str, Cost> = GraphNodeMap::default();

    let mut seq = 0;
    let mut expansions = 0;

    open_list.push(OpenEntry {
        rank: ranking.rank(Cost::zero(), heuristic.cost(start)),
        node: start,
        parent: usize::MAX,
        cost: Cost::zero(),
        seq,
    });

    while let Some(OpenEntry { node, parent, cost, .. }) = open_list.pop() {

        // Stale duplicate, node was already finalized through another entry
        if closed_list.contains_key(node) {
            continue;
        }

        let index = closed_list.insert_full(node, (parent, cost)).0;

        if node == goal {
            let path = reconstruct_path(&closed_list, index)
                .into_iter()
                .map(str::to_string)
                .collect();
            return Ok(SearchResult::found(path, cost.value()));
        }

        if let Some(limit) = limits.max_expansions {
            if expansions >= limit {
                tracing::debug!(limit, "expansion budget exhausted");
                return Err(PathPlannerError::BudgetExhausted { limit });
            }
        }
        expansions += 1;
        tracing::trace!(node, cost = cost.value(), "expand");

        for (neighbor, weight) in graph.neighbors(node) {
            if closed_list.contains_key(neighbor) {
                continue;
            }

            let new_cost = cost + Cost(weight);
            seq += 1;
            open_list.push(OpenEntry {
                rank: ranking.rank(new_cost, heuristic.cost(neighbor)),
                node: neighbor,
                parent: index,
                cost: new_cost,
                seq,
            });
        }
    }

    Ok(SearchResult::unreachable())
}
