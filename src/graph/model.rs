//! Read-only snapshot of a host visual-scripting graph.
//!
//! Nodes live in an arena owned by [`Graph`]; pins link to other pins by
//! [`PinRef`] (node index plus pin index), never by owning references. The
//! scoring code only ever borrows a graph.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identity of a node, independent of its position in the arena
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeGuid(pub String);

impl NodeGuid {
    pub fn new(guid: impl Into<String>) -> Self {
        Self(guid.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeGuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Position of a node inside its graph's arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeIndex(pub usize);

/// A pin on another node: `node` is the owning node, `pin` the pin slot on it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PinRef {
    pub node: NodeIndex,
    pub pin: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PinDirection {
    Input,
    Output,
}

/// Pin category. Only control flow is distinguished; every other category
/// (bool, float, object, struct, ...) is data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PinCategory {
    Exec,
    #[serde(other)]
    Data,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pin {
    #[serde(default)]
    pub name: String,
    pub direction: PinDirection,
    pub category: PinCategory,
    #[serde(default)]
    pub links: Vec<PinRef>,
}

impl Pin {
    pub fn is_exec_output(&self) -> bool {
        self.direction == PinDirection::Output && self.category == PinCategory::Exec
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub guid: NodeGuid,
    /// Node type tag, e.g. `K2Node_IfThenElse`
    pub class: String,
    /// Ancestor classes, nearest first; used for instance-of checks
    #[serde(default)]
    pub superclasses: Vec<String>,
    /// Full title as shown on the node
    #[serde(default)]
    pub title: String,
    /// Short title used in lists; falls back to `title`
    #[serde(default)]
    pub list_title: Option<String>,
    #[serde(default)]
    pub pure: bool,
    #[serde(default)]
    pub pins: Vec<Pin>,
}

impl GraphNode {
    pub fn new(guid: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            guid: NodeGuid::new(guid),
            class: class.into(),
            superclasses: Vec::new(),
            title: String::new(),
            list_title: None,
            pure: false,
            pins: Vec::new(),
        }
    }

    /// True when the node's class is `class` or derives from it
    pub fn is_a(&self, class: &str) -> bool {
        self.class == class || self.superclasses.iter().any(|s| s == class)
    }

    pub fn display_name(&self) -> &str {
        self.list_title.as_deref().unwrap_or(&self.title)
    }

    pub fn has_exec_outputs(&self) -> bool {
        self.pins.iter().any(Pin::is_exec_output)
    }

    /// Every link leaving this node's exec outputs, in pin order then link
    /// order. Duplicates are kept; links are not checked against any graph.
    pub fn exec_links(&self) -> impl DoubleEndedIterator<Item = PinRef> + '_ {
        self.pins
            .iter()
            .filter(|pin| pin.is_exec_output())
            .flat_map(|pin| pin.links.iter().copied())
    }
}

/// One graph page (event graph or function graph)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub nodes: Vec<GraphNode>,
}

impl Graph {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nodes: Vec::new(),
        }
    }

    pub fn node(&self, index: NodeIndex) -> Option<&GraphNode> {
        self.nodes.get(index.0)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Nodes with their arena index, in stored order
    pub fn indexed_nodes(&self) -> impl Iterator<Item = (NodeIndex, &GraphNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (NodeIndex(i), node))
    }

    /// True when both the target node and the target pin of `link` exist
    pub fn resolves(&self, link: PinRef) -> bool {
        self.node(link.node)
            .is_some_and(|target| target.pins.get(link.pin).is_some())
    }

    /// Nodes reached from `index` through resolvable exec links, in pin order
    /// then link order. Dangling links are skipped.
    pub fn exec_successors(
        &self,
        index: NodeIndex,
    ) -> impl DoubleEndedIterator<Item = NodeIndex> + '_ {
        self.node(index)
            .into_iter()
            .flat_map(GraphNode::exec_links)
            .filter(move |link| self.resolves(*link))
            .map(|link| link.node)
    }

    pub fn find_by_guid(&self, guid: &NodeGuid) -> Option<NodeIndex> {
        self.nodes
            .iter()
            .position(|node| &node.guid == guid)
            .map(NodeIndex)
    }

    /// Links whose target node or pin does not exist in this graph.
    ///
    /// The walk treats them as absent; callers use this to report broken
    /// snapshots.
    pub fn dangling_links(&self) -> Vec<(NodeIndex, PinRef)> {
        self.indexed_nodes()
            .flat_map(|(index, node)| {
                node.pins
                    .iter()
                    .flat_map(|pin| pin.links.iter().copied())
                    .filter(|link| !self.resolves(*link))
                    .map(move |link| (index, link))
            })
            .collect()
    }
}
