use serde::{Deserialize, Serialize};

use super::classifier::RoleSet;
use crate::graph::{NodeGuid, NodeIndex};

/// Raw weighted score and its percentage of the configured scale.
///
/// `percent` is never clamped: a graph can exceed 100%.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ComplexityScore {
    pub raw_score: f64,
    pub percent: f64,
}

impl ComplexityScore {
    pub fn zero() -> Self {
        Self::default()
    }
}

/// Score for one entry node (event or function entry)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryResult {
    pub node_guid: NodeGuid,
    pub entry_display_name: String,
    pub score: ComplexityScore,
}

/// What a single node added to an entry's score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeContribution {
    pub index: NodeIndex,
    pub guid: NodeGuid,
    pub title: String,
    pub roles: RoleSet,
    pub depth: u32,
    pub contribution: f64,
}

/// Per-node detail of one calculation, in visiting order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub score: ComplexityScore,
    pub nodes: Vec<NodeContribution>,
}

impl ScoreBreakdown {
    /// Deepest nesting level reached by any scored node
    pub fn max_depth(&self) -> u32 {
        self.nodes.iter().map(|n| n.depth).max().unwrap_or(0)
    }
}
