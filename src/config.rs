//! Planner configuration
//!
//! Loaded from TOML, every field is optional:
//!
//! ```toml
//! default_k = 4
//! heuristic = "shortest_path"
//!
//! [limits]
//! max_expansions = 10000
//! max_spur_searches = 500
//! ```

use crate::errors::PathPlannerError;
use crate::geometry::Positions;
use crate::heuristic::HeuristicMode;

use std::{fs, path::Path};
use serde::{Deserialize, Serialize};


/// Work budget for a single engine call, `None` means unbounded
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchLimits {
    pub max_expansions: Option<usize>, // nodes expanded by a single-path search
    pub max_spur_searches: Option<usize>, // Dijkstra runs made by Yen's algorithm
}

impl SearchLimits {

    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn with_max_expansions(mut self, limit: usize) -> Self {
        self.max_expansions = Some(limit);
        self
    }

    pub fn with_max_spur_searches(mut self, limit: usize) -> Self {
        self.max_spur_searches = Some(limit);
        self
    }
}


/// Which estimate the planner builds when the goal changes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeuristicKind {
    #[default]
    ShortestPath, // exact, via Dijkstra from the goal
    Euclidean, // distance between node positions, approximate
}

impl HeuristicKind {

    /// Mode to pass to `heuristic::compute`, `positions` is only read for `Euclidean`
    pub fn mode(self, positions: &Positions) -> HeuristicMode<'_> {
        match self {
            HeuristicKind::ShortestPath => HeuristicMode::ShortestPath,
            HeuristicKind::Euclidean => HeuristicMode::Euclidean(positions),
        }
    }
}


#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlannerConfig {
    pub limits: SearchLimits,
    pub default_k: usize, // number of alternative routes to compute
    pub heuristic: HeuristicKind,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            limits: SearchLimits::default(),
            default_k: 4,
            heuristic: HeuristicKind::default(),
        }
    }
}

impl PlannerConfig {

    pub fn from_toml_str(contents: &str) -> Result<Self, PathPlannerError> {
        let config: PlannerConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, PathPlannerError> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn validate(&self) -> Result<(), PathPlannerError> {
        if self.default_k == 0 {
            return Err(PathPlannerError::Config("default_k must be at least 1".to_string()));
        }
        if self.limits.max_expansions == Some(0) || self.limits.max_spur_searches == Some(0) {
            return Err(PathPlannerError::Config("limits must be greater than zero".to_string()));
        }
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = PlannerConfig::from_toml_str("").unwrap();
        assert_eq!(config, PlannerConfig::default());
        assert_eq!(config.default_k, 4);
        assert_eq!(config.limits, SearchLimits::unbounded());
    }

    #[test]
    fn test_full_config() {
        let config = PlannerConfig::from_toml_str(r#"
            default_k = 2
            heuristic = "euclidean"

            [limits]
            max_expansions = 100
        "#).unwrap();

        assert_eq!(config.default_k, 2);
        assert_eq!(config.heuristic, HeuristicKind::Euclidean);
        assert_eq!(config.limits, SearchLimits::unbounded().with_max_expansions(100));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        assert!(matches!(PlannerConfig::from_toml_str("default_k = 0"), Err(PathPlannerError::Config(_))));
        assert!(matches!(PlannerConfig::from_toml_str("colour = \"red\""), Err(PathPlannerError::Config(_))));
        assert!(matches!(
            PlannerConfig::from_toml_str("[limits]\nmax_spur_searches = 0"),
            Err(PathPlannerError::Config(_))
        ));
    }

    #[test]
    fn test_heuristic_kind_selects_mode() {
        use crate::graph::fixtures::sample_graph;
        use crate::heuristic::compute;

        let graph = sample_graph();
        let positions = Positions::default();

        let exact = compute(&graph, "G", HeuristicKind::ShortestPath.mode(&positions)).unwrap();
        assert_eq!(exact.estimate("A"), 8.0);

        // no positions known, every estimate falls back to 0
        let euclidean = compute(&graph, "G", HeuristicKind::Euclidean.mode(&positions)).unwrap();
        assert!(euclidean.iter().all(|(_, h)| h == 0.0));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "heuristic = \"shortest_path\"").unwrap();

        let config = PlannerConfig::from_file(file.path()).unwrap();
        assert_eq!(config.heuristic, HeuristicKind::ShortestPath);
    }
}
