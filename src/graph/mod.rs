//! Undirected weighted graph keyed by node label

mod cost;
mod exclusions;
pub mod fixtures;

pub use cost::Cost;
pub use exclusions::Exclusions;

use crate::collections::FxIndexMap;
use crate::errors::PathPlannerError;

use std::{fs, path::Path};
use serde::{Deserialize, Serialize};


/// Raw adjacency map: node -> (neighbor -> edge weight)
pub type Adjacency = FxIndexMap<String, FxIndexMap<String, f64>>;

/// Undirected weighted graph
/// Every edge is stored in both directions with the same weight
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Adjacency", into = "Adjacency")]
pub struct Graph {
    adjacency: Adjacency,
}

impl Graph {

    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from an adjacency map, checking that it is symmetric
    /// and that every weight is a finite, non-negative number
    pub fn from_adjacency(adjacency: Adjacency) -> Result<Self, PathPlannerError> {
        for (node, neighbors) in &adjacency {
            for (neighbor, &weight) in neighbors {
                validate_edge(node, neighbor, weight)?;

                let reverse = adjacency.get(neighbor).and_then(|back| back.get(node));
                match reverse {
                    Some(&w) if w == weight => {}
                    Some(_) => {
                        return Err(PathPlannerError::InvalidEdge {
                            from: node.clone(),
                            to: neighbor.clone(),
                            reason: "weight differs from the reverse edge".to_string(),
                        });
                    }
                    None => {
                        return Err(PathPlannerError::AsymmetricEdge {
                            from: node.clone(),
                            to: neighbor.clone(),
                        });
                    }
                }
            }
        }
        Ok(Self { adjacency })
    }

    /// Build a graph from a list of undirected edges
    pub fn from_edges<'e, I>(edges: I) -> Result<Self, PathPlannerError>
    where
        I: IntoIterator<Item = (&'e str, &'e str, f64)>,
    {
        let mut graph = Self::new();
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight)?;
        }
        Ok(graph)
    }

    /// Parse a JSON adjacency map, e.g. `{"A": {"B": 2}, "B": {"A": 2}}`
    pub fn from_json_str(json: &str) -> Result<Self, PathPlannerError> {
        let adjacency: Adjacency = serde_json::from_str(json)?;
        Self::from_adjacency(adjacency)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, PathPlannerError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Add a node with no edges, does nothing if it already exists
    pub fn add_node(&mut self, node: &str) {
        if !self.adjacency.contains_key(node) {
            self.adjacency.insert(node.to_string(), FxIndexMap::default());
        }
    }

    /// Add (or overwrite) the undirected edge between `from` and `to`
    pub fn add_edge(&mut self, from: &str, to: &str, weight: f64) -> Result<(), PathPlannerError> {
        validate_edge(from, to, weight)?;
        self.link(from, to, weight);
        Ok(())
    }

    /// Insert both directions without validation
    pub(crate) fn link(&mut self, from: &str, to: &str, weight: f64) {
        self.adjacency
            .entry(from.to_string())
            .or_default()
            .insert(to.to_string(), weight);
        self.adjacency
            .entry(to.to_string())
            .or_default()
            .insert(from.to_string(), weight);
    }

    pub fn contains(&self, node: &str) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Fails with `InvalidNode` if the label is not in the graph
    pub fn ensure_node(&self, node: &str) -> Result<(), PathPlannerError> {
        if self.contains(node) {
            Ok(())
        } else {
            Err(PathPlannerError::InvalidNode(node.to_string()))
        }
    }

    /// The graph-owned copy of a label, lets callers hold labels as long as the graph
    pub(crate) fn node_key(&self, node: &str) -> Option<&str> {
        self.adjacency.get_key_value(node).map(|(key, _)| key.as_str())
    }

    /// Node labels in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    /// Neighbors of a node with their edge weights, empty for unknown nodes
    pub fn neighbors<'g>(&'g self, node: &str) -> impl Iterator<Item = (&'g str, f64)> + 'g {
        self.adjacency
            .get(node)
            .into_iter()
            .flat_map(|neighbors| neighbors.iter().map(|(n, &w)| (n.as_str(), w)))
    }

    /// Neighbors reachable over edges not hidden by `exclusions`
    pub fn neighbors_excluding<'g>(
        &'g self,
        node: &str,
        exclusions: &Exclusions<'_>,
    ) -> impl Iterator<Item = (&'g str, f64)> {
        self.neighbors(node)
            .filter(move |(neighbor, _)| exclusions.allows(node, neighbor))
    }

    pub fn weight(&self, from: &str, to: &str) -> Option<f64> {
        self.adjacency.get(from)?.get(to).copied()
    }

    /// Sum of edge weights along `path`, None if a hop is not an edge
    pub fn path_cost<S: AsRef<str>>(&self, path: &[S]) -> Option<f64> {
        path.windows(2)
            .map(|hop| self.weight(hop[0].as_ref(), hop[1].as_ref()))
            .sum()
    }

    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(|neighbors| neighbors.len()).sum::<usize>() / 2
    }

    pub fn adjacency(&self) -> &Adjacency {
        &self.adjacency
    }
}

impl TryFrom<Adjacency> for Graph {
    type Error = PathPlannerError;

    fn try_from(adjacency: Adjacency) -> Result<Self, Self::Error> {
        Graph::from_adjacency(adjacency)
    }
}

impl From<Graph> for Adjacency {
    fn from(graph: Graph) -> Self {
        graph.adjacency
    }
}

fn validate_edge(from: &str, to: &str, weight: f64) -> Result<(), PathPlannerError> {
    let reason = if from == to {
        "self loops are not allowed"
    } else if !weight.is_finite() {
        "weight must be finite"
    } else if weight < 0.0 {
        "weight must be non-negative"
    } else {
        return Ok(());
    };

    Err(PathPlannerError::InvalidEdge {
        from: from.to_string(),
        to: to.to_string(),
        reason: reason.to_string(),
    })
}
