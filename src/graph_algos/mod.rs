pub mod dijkstra;
pub mod search;
pub mod yen;
mod best_first;
mod hill_climbing;
mod shortest_path;

use shortest_path::reconstruct_path;

pub use search::{SearchResult, Strategy, Termination, search, search_with_limits};
pub use yen::{k_shortest_paths, k_shortest_paths_via, k_shortest_paths_with_limits};

use crate::collections::FxIndexMap;

/// Type alias for the node map used in path planning algorithms
/// N: Node - space on a graph
/// C: Cost of reaching the node from the start
/// The tuple contains (parent_index, cost) where:
/// - parent_index is the index of the parent node in the map
/// - cost is the total cost to reach this node from the start
pub type GraphNodeMap<N, C> = FxIndexMap<N, (usize, C)>;
