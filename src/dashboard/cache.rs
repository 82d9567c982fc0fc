//! Per-node score cache shared by the badge overlay and the dashboard.
//!
//! Keyed by node identity so entries survive graph reordering. Every entry
//! belonging to a Blueprint is dropped when that Blueprint recompiles.

use dashmap::DashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::complexity::{
    derives_from_entry, ComplexityCalculator, ComplexityScore, NodeDescriptor,
};
use crate::graph::{Blueprint, Graph, NodeGuid, NodeIndex};

#[derive(Debug)]
pub struct ScoreCache {
    scores: DashMap<NodeGuid, ComplexityScore>,
    show_entry_badges: AtomicBool,
}

impl Default for ScoreCache {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreCache {
    pub fn new() -> Self {
        Self {
            scores: DashMap::new(),
            show_entry_badges: AtomicBool::new(true),
        }
    }

    /// Cached score of the node at `index`, computing and storing it on a miss.
    /// An index with no node scores zero and is not cached.
    pub fn score_for_node(
        &self,
        calculator: &ComplexityCalculator<'_>,
        graph: &Graph,
        index: NodeIndex,
    ) -> ComplexityScore {
        let Some(node) = graph.node(index) else {
            return ComplexityScore::zero();
        };

        *self
            .scores
            .entry(node.guid.clone())
            .or_insert_with(|| calculator.calculate(graph, index))
    }

    pub fn get(&self, guid: &NodeGuid) -> Option<ComplexityScore> {
        self.scores.get(guid).map(|entry| *entry.value())
    }

    /// Drop every cached score for a node of `blueprint`; returns how many
    pub fn invalidate_blueprint(&self, blueprint: &Blueprint) -> usize {
        let removed = blueprint
            .node_guids()
            .into_iter()
            .filter(|guid| self.scores.remove(*guid).is_some())
            .count();
        log::debug!("Invalidated {} cached scores for {}", removed, blueprint.name);
        removed
    }

    /// Recompile hook: invalidate, then rescore every node that is an entry
    /// class or derives from one, so custom events get fresh badges too.
    /// Returns the number of entries rescored.
    pub fn handle_blueprint_compiled(
        &self,
        calculator: &ComplexityCalculator<'_>,
        blueprint: &Blueprint,
    ) -> usize {
        self.invalidate_blueprint(blueprint);

        let mut rescored = 0;
        for graph in blueprint.graphs() {
            let entries = graph
                .indexed_nodes()
                .filter(|(_, node)| derives_from_entry(&NodeDescriptor::of(node)));
            for (index, node) in entries {
                self.scores
                    .insert(node.guid.clone(), calculator.calculate(graph, index));
                rescored += 1;
            }
        }
        log::info!("Rescored {} entries of {}", rescored, blueprint.name);
        rescored
    }

    pub fn show_entry_badges(&self) -> bool {
        self.show_entry_badges.load(Ordering::Relaxed)
    }

    pub fn set_show_entry_badges(&self, show: bool) {
        self.show_entry_badges.store(show, Ordering::Relaxed);
    }

    /// Flip badge visibility; returns the new state
    pub fn toggle_entry_badges(&self) -> bool {
        !self.show_entry_badges.fetch_xor(true, Ordering::Relaxed)
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn clear(&self) {
        self.scores.clear();
    }
}
