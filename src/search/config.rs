//! Solver configuration parameters.

use serde::{Deserialize, Serialize};

/// Solver configuration parameters.
///
/// The default is an unbounded, short-circuiting search.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Maximum recursion depth in plies below the queried position (0 = unlimited).
    /// Exceeding it aborts the query.
    pub max_depth: u32,

    /// Maximum positions expanded per query (0 = unlimited).
    /// Cache hits do not count.
    pub max_nodes: u64,

    /// Keep evaluating siblings after a winning move is found.
    /// Outcomes are identical either way.
    pub exhaustive: bool,
}

impl SolverConfig {
    /// Create a new config with custom max depth.
    pub fn with_max_depth(mut self, depth: u32) -> Self {
        self.max_depth = depth;
        self
    }

    /// Create a new config with a custom node budget.
    pub fn with_max_nodes(mut self, nodes: u64) -> Self {
        self.max_nodes = nodes;
        self
    }

    /// Create a new config with exhaustive sibling evaluation.
    pub fn with_exhaustive(mut self, exhaustive: bool) -> Self {
        self.exhaustive = exhaustive;
        self
    }
}
