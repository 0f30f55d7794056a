use thiserror::Error;

#[derive(Debug, Error)]
pub enum PathPlannerError {
    #[error("node {0:?} is not in the graph")]
    InvalidNode(String), // start, goal or via label missing from the graph

    #[error("invalid edge {from:?} -> {to:?}: {reason}")]
    InvalidEdge {
        from: String,
        to: String,
        reason: String,
    },

    #[error("edge {from:?} -> {to:?} has no matching reverse edge")]
    AsymmetricEdge { from: String, to: String },

    #[error("estimate {value} for node {node:?} must be a non-negative number")]
    InvalidEstimate { node: String, value: f64 },

    #[error("heuristic table was built for goal {table_goal:?}, search goal is {goal:?}")]
    HeuristicGoalMismatch { table_goal: String, goal: String },

    #[error("search budget of {limit} steps exhausted")]
    BudgetExhausted { limit: usize },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("failed to parse graph: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for PathPlannerError {
    fn from(error: toml::de::Error) -> Self {
        PathPlannerError::Config(error.to_string())
    }
}
