//! Weighted, depth-aware walk of an entry node's control flow.
//!
//! # Algorithm
//!
//! Starting at the entry node (depth 0), every node reachable through exec
//! output links is scored once:
//!
//! - the weight of each role it holds (function call and math are exclusive)
//! - plus `nesting_penalty * depth`
//!
//! Branch, select and loop nodes open a nested scope, so their successors are
//! walked one level deeper. Sequential chains stay at the same depth. A node
//! reached again through another path or a back edge contributes nothing,
//! which makes the walk terminate on any cyclic graph in O(nodes + edges).
//! Links whose target node or pin does not exist are skipped.
//!
//! The walk uses an explicit stack that visits nodes in the same pre-order a
//! recursive walk would (successors pushed in reverse), so a node reachable
//! at two depths is scored at the depth of the first path in pin order.

use super::classifier::{classify_node, NodeRole, RoleSet};
use super::score::{ComplexityScore, NodeContribution, ScoreBreakdown};
use crate::config::ComplexityConfig;
use crate::errors::Result;
use crate::graph::{Graph, GraphNode, NodeIndex};

/// Scores entry nodes using a borrowed, immutable configuration.
///
/// Holds no per-call state, so one calculator can score many entries
/// concurrently.
#[derive(Debug, Clone, Copy)]
pub struct ComplexityCalculator<'c> {
    config: &'c ComplexityConfig,
}

impl<'c> ComplexityCalculator<'c> {
    /// The configuration must already be valid (`percent_scale >= 1`);
    /// use [`ComplexityCalculator::try_new`] when it has not been checked.
    pub fn new(config: &'c ComplexityConfig) -> Self {
        Self { config }
    }

    pub fn try_new(config: &'c ComplexityConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &'c ComplexityConfig {
        self.config
    }

    /// Score the entry node at `entry`. An index with no node yields zero.
    pub fn calculate(&self, graph: &Graph, entry: NodeIndex) -> ComplexityScore {
        let raw_score = self.walk(graph, entry, |_, _, _, _| {});
        self.score_from_raw(raw_score)
    }

    /// Like [`calculate`](Self::calculate), also recording every scored node
    pub fn calculate_detailed(&self, graph: &Graph, entry: NodeIndex) -> ScoreBreakdown {
        let mut nodes = Vec::new();
        let raw_score = self.walk(graph, entry, |index, node, roles, (depth, contribution)| {
            nodes.push(NodeContribution {
                index,
                guid: node.guid.clone(),
                title: node.title.clone(),
                roles,
                depth,
                contribution,
            });
        });

        ScoreBreakdown {
            score: self.score_from_raw(raw_score),
            nodes,
        }
    }

    /// Role weights plus nesting penalty for one node at `depth`
    pub fn node_contribution(&self, roles: RoleSet, depth: u32) -> f64 {
        let weights = &self.config.weights;
        let role_weight: f64 = roles
            .iter()
            .map(|role| match role {
                NodeRole::Entry => weights.base_entry_weight,
                NodeRole::Loop => weights.loop_weight,
                NodeRole::Branch => weights.branch_weight,
                NodeRole::Select => weights.select_weight,
                NodeRole::Latent => weights.latent_weight,
                NodeRole::FunctionCall => weights.function_call_weight,
                NodeRole::Math => weights.math_node_weight,
                NodeRole::Other => 0.0,
            })
            .sum();

        role_weight + weights.nesting_penalty * f64::from(depth)
    }

    fn score_from_raw(&self, raw_score: f64) -> ComplexityScore {
        ComplexityScore {
            raw_score,
            percent: self.config.percent_of(raw_score),
        }
    }

    fn walk<F>(&self, graph: &Graph, entry: NodeIndex, mut on_node: F) -> f64
    where
        F: FnMut(NodeIndex, &GraphNode, RoleSet, (u32, f64)),
    {
        let mut visited = vec![false; graph.node_count()];
        let mut stack = vec![(entry, 0u32)];
        let mut total = 0.0;

        while let Some((index, depth)) = stack.pop() {
            let Some(node) = graph.node(index) else {
                continue;
            };
            if std::mem::replace(&mut visited[index.0], true) {
                continue;
            }

            let roles = classify_node(node);
            let contribution = self.node_contribution(roles, depth);
            total += contribution;
            on_node(index, node, roles, (depth, contribution));

            let next_depth = if roles.increases_nesting() {
                depth + 1
            } else {
                depth
            };
            stack.extend(
                graph
                    .exec_successors(index)
                    .rev()
                    .map(|successor| (successor, next_depth)),
            );
        }

        total
    }
}
