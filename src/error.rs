use thiserror::Error;

/// Invalid arguments, rejected before or instead of doing any work.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("Maximum cost must be positive, got {maximum_cost}")]
    NonPositiveMaximumCost { maximum_cost: String },
    #[error("Paths were not tracked by this search. Enable `track_path` to query them")]
    PathNotTracked,
}

/// A caller-supplied function broke the contract of the engine.
///
/// These signal a defective neighbour function or heuristic and are never
/// worth retrying.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("Negative edge cost {cost} from {from} to {to}")]
    NegativeEdgeCost {
        from: String,
        to: String,
        cost: String,
    },
    #[error("Negative heuristic value {value} at {node}")]
    NegativeHeuristic { node: String, value: String },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("Invalid search configuration: {0}")]
    Configuration(#[from] ConfigurationError),
    #[error("Search invariant violated: {0}")]
    Invariant(#[from] InvariantViolation),
}

pub type Result<T> = std::result::Result<T, SearchError>;

impl InvariantViolation {
    pub(crate) fn negative_edge<N, C>(from: &N, to: &N, cost: C) -> Self
    where
        N: std::fmt::Debug,
        C: std::fmt::Debug,
    {
        Self::NegativeEdgeCost {
            from: format!("{from:?}"),
            to: format!("{to:?}"),
            cost: format!("{cost:?}"),
        }
    }

    pub(crate) fn negative_heuristic<N, C>(node: &N, value: C) -> Self
    where
        N: std::fmt::Debug,
        C: std::fmt::Debug,
    {
        Self::NegativeHeuristic {
            node: format!("{node:?}"),
            value: format!("{value:?}"),
        }
    }
}
