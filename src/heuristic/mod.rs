//! Cost-to-goal estimates consumed by the informed search strategies

use crate::collections::FxIndexMap;
use crate::errors::PathPlannerError;
use crate::geometry::Positions;
use crate::graph::{Cost, Graph};
use crate::graph_algos::dijkstra::dijkstra_nodes_full;


/// How the estimate for each node is produced
#[derive(Clone, Copy, Debug)]
pub enum HeuristicMode<'a> {
    /// Exact shortest-path distance, admissible and consistent
    ShortestPath,
    /// Straight line distance between node positions
    /// Approximate: carries no admissibility guarantee unless positions are true distances
    Euclidean(&'a Positions),
    /// Precomputed table, used only when the goal is the one it was built for
    /// Any other goal falls back to `fallback` positions
    Preset {
        goal: &'a str,
        table: &'a FxIndexMap<String, f64>,
        fallback: &'a Positions,
    },
}


/// Estimated cost from every node to a fixed goal
#[derive(Clone, Debug, PartialEq)]
pub struct HeuristicTable {
    goal: String,
    estimates: FxIndexMap<String, f64>,
}

impl HeuristicTable {

    /// Table with every node of `graph` set to infinity, goal set to 0
    fn unreachable(graph: &Graph, goal: &str) -> Self {
        let mut estimates: FxIndexMap<String, f64> = graph.nodes()
            .map(|node| (node.to_string(), f64::INFINITY))
            .collect();
        estimates.insert(goal.to_string(), 0.0);
        Self { goal: goal.to_string(), estimates }
    }

    /// Table from precomputed estimates, nodes left out estimate infinity
    /// Fails with `InvalidEstimate` on a negative or NaN value
    pub fn from_estimates<I, S>(goal: &str, estimates: I) -> Result<Self, PathPlannerError>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut table = FxIndexMap::default();
        for (node, h) in estimates {
            let node = node.into();
            validate_estimate(&node, h)?;
            table.insert(node, h);
        }
        table.entry(goal.to_string()).or_insert(0.0);
        Ok(Self { goal: goal.to_string(), estimates: table })
    }

    pub fn goal(&self) -> &str {
        &self.goal
    }

    /// Estimate for `node`, infinity for nodes the table does not know
    pub fn estimate(&self, node: &str) -> f64 {
        self.estimates.get(node).copied().unwrap_or(f64::INFINITY)
    }

    pub(crate) fn cost(&self, node: &str) -> Cost {
        Cost(self.estimate(node))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.estimates.iter().map(|(node, &h)| (node.as_str(), h))
    }

    pub fn len(&self) -> usize {
        self.estimates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.estimates.is_empty()
    }
}


/// Exact cost-to-goal for every node, via Dijkstra from the goal
/// Edges are symmetric, so distances from the goal are distances to it
pub fn heuristic(graph: &Graph, goal: &str) -> Result<HeuristicTable, PathPlannerError> {
    compute(graph, goal, HeuristicMode::ShortestPath)
}


/// Build a heuristic table toward `goal` with the chosen mode
#[tracing::instrument(level = "debug", skip(graph, mode), fields(nodes = graph.len()))]
pub fn compute(graph: &Graph, goal: &str, mode: HeuristicMode<'_>) -> Result<HeuristicTable, PathPlannerError> {
    graph.ensure_node(goal)?;

    let mut table = HeuristicTable::unreachable(graph, goal);

    match mode {
        HeuristicMode::ShortestPath => fill_shortest_path(graph, goal, &mut table),
        HeuristicMode::Euclidean(positions) => fill_euclidean(goal, positions, &mut table),
        HeuristicMode::Preset { goal: preset_goal, table: preset, fallback } => {
            if preset_goal == goal {
                for (node, estimate) in table.estimates.iter_mut() {
                    let h = preset.get(node).copied().unwrap_or(f64::INFINITY);
                    validate_estimate(node, h)?;
                    *estimate = h;
                }
            } else {
                tracing::debug!(preset_goal, "goal differs from preset table, using positions");
                fill_euclidean(goal, fallback, &mut table);
            }
        }
    }

    let unreachable = table.estimates.values().filter(|h| h.is_infinite()).count();
    if unreachable > 0 {
        tracing::debug!(unreachable, "nodes without a finite estimate");
    }

    Ok(table)
}

/// Estimates are non-negative, infinity allowed
fn validate_estimate(node: &str, value: f64) -> Result<(), PathPlannerError> {
    if value.is_nan() || value < 0.0 {
        return Err(PathPlannerError::InvalidEstimate { node: node.to_string(), value });
    }
    Ok(())
}

fn fill_shortest_path(graph: &Graph, goal: &str, table: &mut HeuristicTable) {
    let Some(goal) = graph.node_key(goal) else {
        return;
    };

    let neighbors = |node: &&str| {
        graph.neighbors(node)
            .map(|(neighbor, weight)| (neighbor, Cost(weight)))
            .collect::<Vec<_>>()
    };

    for (node, &(_, distance)) in dijkstra_nodes_full(goal, neighbors).iter() {
        if let Some(estimate) = table.estimates.get_mut(*node) {
            *estimate = distance.value();
        }
    }
}

/// Nodes without a position estimate 0, so they are never ruled out
fn fill_euclidean(goal: &str, positions: &Positions, table: &mut HeuristicTable) {
    let goal_position = positions.get(goal);

    for (node, estimate) in table.estimates.iter_mut() {
        *estimate = match (positions.get(node), goal_position) {
            (Some(from), Some(to)) => from.distance_to(to),
            _ => 0.0,
        };
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::graph::fixtures::{self, sample_graph};

    #[test]
    fn test_shortest_path_heuristic_on_sample_graph() {
        let table = heuristic(&sample_graph(), "G").unwrap();

        assert_eq!(table.goal(), "G");
        // A -> C -> E -> F -> G
        assert_eq!(table.estimate("A"), 8.0);
        assert_eq!(table.estimate("G"), 0.0);
        assert_eq!(table.estimate("F"), 2.0);
        assert_eq!(table.estimate("E"), 4.0);
        assert_eq!(table.estimate("C"), 5.0);
        assert_eq!(table.estimate("B"), 9.0);
        assert_eq!(table.estimate("D"), 8.0);
        assert_eq!(table.len(), 7);
    }

    #[test]
    fn test_unreachable_nodes_are_infinite() {
        let mut graph = sample_graph();
        graph.add_edge("X", "Y", 1.0).unwrap();

        let table = heuristic(&graph, "G").unwrap();
        assert_eq!(table.estimate("X"), f64::INFINITY);
        assert_eq!(table.estimate("Y"), f64::INFINITY);
        assert_eq!(table.estimate("not-a-node"), f64::INFINITY);
        assert!(table.iter().all(|(_, h)| h >= 0.0));
    }

    #[test]
    fn test_unknown_goal_is_rejected() {
        let result = heuristic(&sample_graph(), "Q");
        assert!(matches!(result, Err(PathPlannerError::InvalidNode(goal)) if goal == "Q"));
    }

    #[test]
    fn test_euclidean_heuristic() {
        let graph = sample_graph();
        let positions: Positions = [
            ("A", Point::new(0.0, 0.0)),
            ("G", Point::new(3.0, 4.0)),
        ]
        .into_iter()
        .map(|(node, point)| (node.to_string(), point))
        .collect();

        let table = compute(&graph, "G", HeuristicMode::Euclidean(&positions)).unwrap();
        assert_eq!(table.estimate("A"), 5.0);
        assert_eq!(table.estimate("G"), 0.0);
        // no position known
        assert_eq!(table.estimate("B"), 0.0);
    }

    #[test]
    fn test_preset_table_only_applies_to_its_goal() {
        let graph = fixtures::load_graph();
        let preset = fixtures::campus_goal_estimates();
        let positions = Positions::default();
        let mode = HeuristicMode::Preset { goal: fixtures::CAMPUS_GOAL, table: &preset, fallback: &positions };

        let toward_goal = compute(&graph, fixtures::CAMPUS_GOAL, mode).unwrap();
        assert_eq!(toward_goal.estimate("G1"), 25.0);
        assert_eq!(toward_goal.estimate("G29"), 1.0);

        let elsewhere = compute(&graph, "G1", mode).unwrap();
        assert!(elsewhere.iter().all(|(_, h)| h == 0.0));
    }

    #[test]
    fn test_from_estimates() {
        let table = HeuristicTable::from_estimates("G", [("A", 3.0), ("B", 1.5)]).unwrap();
        assert_eq!(table.estimate("A"), 3.0);
        assert_eq!(table.estimate("G"), 0.0);
        assert_eq!(table.estimate("C"), f64::INFINITY);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_from_estimates_rejects_negative_and_nan() {
        let negative = HeuristicTable::from_estimates("G", [("A", -3.0)]);
        assert!(matches!(negative, Err(PathPlannerError::InvalidEstimate { node, value }) if node == "A" && value == -3.0));

        let nan = HeuristicTable::from_estimates("G", [("A", 1.0), ("C", f64::NAN)]);
        assert!(matches!(nan, Err(PathPlannerError::InvalidEstimate { node, .. }) if node == "C"));

        // unknown distance is fine
        let infinite = HeuristicTable::from_estimates("G", [("A", f64::INFINITY)]).unwrap();
        assert_eq!(infinite.estimate("A"), f64::INFINITY);
    }

    #[test]
    fn test_preset_table_with_negative_estimate_is_rejected() {
        let graph = sample_graph();
        let mut preset: FxIndexMap<String, f64> = FxIndexMap::default();
        preset.insert("A".to_string(), -7.0);
        preset.insert("G".to_string(), 0.0);
        let positions = Positions::default();
        let mode = HeuristicMode::Preset { goal: "G", table: &preset, fallback: &positions };

        let result = compute(&graph, "G", mode);
        assert!(matches!(result, Err(PathPlannerError::InvalidEstimate { node, value }) if node == "A" && value == -7.0));
    }
}
