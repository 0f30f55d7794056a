use super::GraphNodeMap;

/// Construct the path from the start node to the node at `goal_index`
/// Follows parent indices back to the start, then reverses
/// node_map: GraphNodeMap<N, C> - map of nodes with their parent index and cost
/// goal_index: usize - index of the goal node in the node_map
pub(crate) fn reconstruct_path<N, C>(node_map: &GraphNodeMap<N, C>, goal_index: usize) -> Vec<N>
where
    N: Clone,
{

    let mut path = Vec::new();
    let mut current_index = goal_index;

    // Trace back from goal to start, start has parent usize::MAX
    while let Some((node, &(parent_index, _))) = node_map.get_index(current_index) {
        path.push(node.clone());
        current_index = parent_index;
    }

    path.reverse();
    path
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reconstruct_path() {
        let mut node_map: GraphNodeMap<&str, u32> = GraphNodeMap::default();

        let a_index = node_map.insert_full("A", (usize::MAX, 0)).0;
        let b_index = node_map.insert_full("B", (a_index, 1)).0;
        let c_index = node_map.insert_full("C", (a_index, 3)).0;
        let d_index = node_map.insert_full("D", (c_index, 4)).0;

        assert_eq!(reconstruct_path(&node_map, d_index), vec!["A", "C", "D"]);
        assert_eq!(reconstruct_path(&node_map, b_index), vec!["A", "B"]);
        assert_eq!(reconstruct_path(&node_map, a_index), vec!["A"]);
    }

    #[test]
    fn test_reconstruct_path_unknown_index_is_empty() {
        let node_map: GraphNodeMap<&str, u32> = GraphNodeMap::default();
        assert!(reconstruct_path(&node_map, 7).is_empty());
    }
}
