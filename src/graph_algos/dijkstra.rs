use crate::errors::PathPlannerError;
use crate::graph::{Cost, Exclusions, Graph};
use super::{GraphNodeMap, SearchResult, reconstruct_path};

use std::{collections::BinaryHeap, hash::Hash, cmp::Ordering, fmt::Debug};
use num_traits::Zero;
use indexmap::map::Entry::{Occupied, Vacant};



/// Identify the shortest path using Dijkstra's Algorithm
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
/// Fails with InvalidNode if either endpoint is missing, an unreachable end is a normal result
pub fn dijkstra(graph: &Graph, start: &str, end: &str) -> Result<SearchResult, PathPlannerError> {
    graph.ensure_node(start)?;
    graph.ensure_node(end)?;

    let result = dijkstra_excluding(graph, start, end, &Exclusions::default());
    tracing::debug!(start, end, found = result.is_found(), cost = result.cost, "dijkstra");
    Ok(result)
}


/// Shortest path from start to end over the edges `exclusions` leaves visible
/// Unknown or excluded endpoints yield an unreachable result
pub(crate) fn dijkstra_excluding(graph: &Graph, start: &str, end: &str, exclusions: &Exclusions<'_>) -> SearchResult {
    let Some(start) = graph.node_key(start) else {
        return SearchResult::unreachable();
    };
    if exclusions.is_node_excluded(start) || exclusions.is_node_excluded(end) {
        return SearchResult::unreachable();
    }

    let neighbors = |node: &&str| {
        graph.neighbors_excluding(node, exclusions)
            .map(|(neighbor, weight)| (neighbor, Cost(weight)))
            .collect::<Vec<_>>()
    };

    let (node_map, goal_index) = build_dijkstra_graph(start, neighbors, |node: &&str| *node == end);

    match goal_index.and_then(|index| node_map.get_index(index).map(|(_, &(_, cost))| (index, cost))) {
        Some((index, cost)) => {
            let path = reconstruct_path(&node_map, index)
                .into_iter()
                .map(str::to_string)
                .collect();
            SearchResult::found(path, cost.value())
        }
        None => SearchResult::unreachable(),
    }
}


/// Returns a full map of the graph, includes all (reachable) nodes and costs
pub fn dijkstra_nodes_full<N, C, IT, NN>(start: N, neighbors: NN) -> GraphNodeMap<N, C>
where
    N: Eq + Hash + Clone + Debug,
    NN: Fn(&N) -> IT, // returns iterator of neighbors + costs
    IT: IntoIterator<Item = (N, C)>, // Iterator of neighbors + edge cost to neighbor node
    C: Zero + Ord + Copy + Debug,
    {

    // No goal - runs until every reachable node is settled
    let (node_map, _) = build_dijkstra_graph(start, neighbors, |_| false);

    node_map
}


/// Traverses the graph using Dijkstra's algorithm
/// Returns a map of nodes with their smallest costs along with the index of the goal node
fn build_dijkstra_graph<N, C, IT, NN, G>(start: N, neighbors: NN, goal_fn: G) -> (GraphNodeMap<N, C>, Option<usize>)
where
    N: Eq + Hash + Clone + Debug,
    NN: Fn(&N) -> IT, // returns iterator of neighbors + costs
    IT: IntoIterator<Item = (N, C)>, // Iterator of neighbors + edge cost to neighbor node
    C: Zero + Ord + Copy + Debug,
    G: Fn(&N) -> bool // Returns true if goal is met
    {

    // Nodes to visit - binary heap sorts Biggest to Smallest
    // NodeId reverses the ordering so the least costly node is expanded first
    let mut nodes_to_visit: BinaryHeap<NodeId<C>> = BinaryHeap::new();

    // The tuple contains (parent_index, cost) where parent_index is the index of the parent node in the map
    // for the start node, parent_index is set to usize::MAX to indicate it has no parent
    let mut nodes_map: GraphNodeMap<N, C> = GraphNodeMap::default();

    // Add start node to the map and queue
    let start_index = nodes_map.insert_full(start, (usize::MAX, Zero::zero())).0;
    nodes_to_visit.push(NodeId{
        index: start_index,
        cost: Zero::zero(), // This is the cost from the start node
    });

    // Loop over each node to visit, removing the smallest node
    while let Some(NodeId {cost, index}) = nodes_to_visit.pop() {

        // fetch current best cost for node
        let Some((node, &(_, c))) = nodes_map.get_index(index) else {
            continue;
        };

        // If cost of new node from BinaryHeap is higher than the best cost, skip it
        // This implies we've already found a better path to this node
        if cost > c {
            continue;
        }

        // Check if we've reached the goal
        if goal_fn(node) {
            return (nodes_map, Some(index));
        }

        // loop over neighbors
        for (neighbor, edge_cost) in neighbors(node) {

            // new cost to reach this node = edge cost + node cost
            let new_cost = edge_cost + c;

            let neighbor_index;

            match nodes_map.entry(neighbor) {
                Vacant(e) => {
                    // This is the first time we're seeing this neighbor
                    neighbor_index = e.index();
                    e.insert((index, new_cost));
                }
                Occupied(mut e) => {
                    if e.get().1 > new_cost {
                        // Strictly better path to this neighbor
                        neighbor_index = e.index();
                        e.insert((index, new_cost));
                    } else {
                        continue;
                    }
                }
            }

            // Only add to the queue if we've found a better path
            nodes_to_visit.push(NodeId {
                index: neighbor_index,
                cost: new_cost,
            });
        }
    }

    (nodes_map, None)
}


/// Node identifier
/// - for ordering we only need cost and a way to identify the node
#[derive(Debug)]
struct NodeId<T> {
    index: usize,
    cost: T
}

impl<T: Ord> Ord for NodeId<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.cost.cmp(&self.cost)
            .then_with(|| other.index.cmp(&self.index))
    }
}
impl<T: Ord> PartialOrd for NodeId<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<T: Ord> PartialEq for NodeId<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl<T: Ord> Eq for NodeId<T> {}
