//! Per-graph and per-Blueprint scoring of every entry node.

use super::calculator::ComplexityCalculator;
use super::classifier::{is_entry, NodeDescriptor};
use super::score::EntryResult;
use crate::graph::{Blueprint, Graph, GraphNode, NodeIndex};

/// Entry nodes of `graph`, in stored order
pub fn entry_nodes(graph: &Graph) -> impl Iterator<Item = (NodeIndex, &GraphNode)> {
    graph
        .indexed_nodes()
        .filter(|(_, node)| is_entry(&NodeDescriptor::of(node)))
}

impl ComplexityCalculator<'_> {
    /// One result per entry node, in the graph's node order.
    /// An absent graph yields no results.
    pub fn process_graph(&self, graph: Option<&Graph>) -> Vec<EntryResult> {
        let Some(graph) = graph else {
            return Vec::new();
        };

        entry_nodes(graph)
            .map(|(index, node)| EntryResult {
                node_guid: node.guid.clone(),
                entry_display_name: node.display_name().to_string(),
                score: self.calculate(graph, index),
            })
            .collect()
    }

    /// Results of every event graph followed by every function graph.
    /// Each graph is scored independently.
    pub fn process_blueprint(&self, blueprint: Option<&Blueprint>) -> Vec<EntryResult> {
        let Some(blueprint) = blueprint else {
            return Vec::new();
        };

        let results: Vec<EntryResult> = blueprint
            .graphs()
            .flat_map(|graph| self.process_graph(Some(graph)))
            .collect();
        log::debug!(
            "Scored {} entries in {}",
            results.len(),
            blueprint.name
        );
        results
    }
}
