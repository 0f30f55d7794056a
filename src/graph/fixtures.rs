//! Built-in graphs for demos and tests

use super::Graph;
use crate::collections::FxIndexMap;


/// Goal the campus estimate table was tuned for
pub const CAMPUS_GOAL: &str = "G30";

const CAMPUS_EDGES: [(&str, &str, f64); 43] = [
    ("G1", "G2", 4.0), ("G1", "G3", 2.0),
    ("G2", "G4", 5.0), ("G2", "G5", 6.0),
    ("G3", "G6", 3.0), ("G3", "G7", 4.0),
    ("G4", "G8", 7.0), ("G4", "G9", 3.0),
    ("G5", "G10", 8.0), ("G5", "G11", 5.0),
    ("G6", "G12", 4.0), ("G6", "G13", 6.0),
    ("G7", "G14", 5.0), ("G7", "G15", 7.0),
    ("G8", "G16", 3.0), ("G8", "G17", 8.0),
    ("G9", "G18", 5.0), ("G9", "G19", 6.0),
    ("G10", "G20", 4.0), ("G10", "G21", 7.0),
    ("G11", "G22", 6.0), ("G11", "G23", 3.0),
    ("G12", "G24", 7.0), ("G12", "G25", 5.0),
    ("G13", "G26", 4.0), ("G13", "G27", 3.0),
    ("G14", "G28", 6.0), ("G14", "G29", 4.0),
    ("G15", "G30", 8.0),
    ("G16", "G17", 5.0),
    ("G17", "G18", 6.0),
    ("G18", "G19", 4.0),
    ("G19", "G20", 3.0),
    ("G20", "G21", 7.0),
    ("G21", "G22", 5.0),
    ("G22", "G23", 4.0),
    ("G23", "G24", 6.0),
    ("G24", "G25", 5.0),
    ("G25", "G26", 4.0),
    ("G26", "G27", 3.0),
    ("G27", "G28", 6.0),
    ("G28", "G29", 4.0),
    ("G29", "G30", 8.0),
];

const CAMPUS_ESTIMATES: [(&str, f64); 30] = [
    ("G1", 25.0), ("G2", 24.0), ("G3", 23.0), ("G4", 22.0), ("G5", 21.0),
    ("G6", 20.0), ("G7", 19.0), ("G8", 18.0), ("G9", 17.0), ("G10", 16.0),
    ("G11", 15.0), ("G12", 14.0), ("G13", 13.0), ("G14", 12.0), ("G15", 11.0),
    ("G16", 10.0), ("G17", 9.0), ("G18", 8.0), ("G19", 7.0), ("G20", 6.0),
    ("G21", 5.0), ("G22", 4.0), ("G23", 3.0), ("G24", 2.0), ("G25", 2.0),
    ("G26", 2.0), ("G27", 1.0), ("G28", 1.0), ("G29", 1.0), ("G30", 0.0),
];

const SAMPLE_EDGES: [(&str, &str, f64); 9] = [
    ("A", "B", 2.0), ("A", "C", 3.0),
    ("B", "D", 4.0), ("B", "E", 5.0),
    ("C", "E", 1.0), ("C", "G", 7.0),
    ("D", "F", 6.0),
    ("E", "F", 2.0),
    ("F", "G", 2.0),
];


/// 30 node campus map, G1 through G30
pub fn load_graph() -> Graph {
    build(&CAMPUS_EDGES)
}

/// Hand-tuned estimates of the distance to `CAMPUS_GOAL`
/// Not derived from the graph, so they carry no admissibility guarantee
pub fn campus_goal_estimates() -> FxIndexMap<String, f64> {
    CAMPUS_ESTIMATES
        .iter()
        .map(|&(node, estimate)| (node.to_string(), estimate))
        .collect()
}

/// Small 7 node graph, A through G
pub fn sample_graph() -> Graph {
    build(&SAMPLE_EDGES)
}

fn build(edges: &[(&str, &str, f64)]) -> Graph {
    let mut graph = Graph::new();
    for &(from, to, weight) in edges {
        graph.link(from, to, weight);
    }
    graph
}
