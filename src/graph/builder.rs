//! Programmatic graph construction, mainly for hosts that build snapshots in
//! memory and for tests.

use super::model::{Graph, GraphNode, NodeIndex, Pin, PinCategory, PinDirection, PinRef};

#[derive(Debug, Default)]
pub struct GraphBuilder {
    graph: Graph,
}

impl GraphBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            graph: Graph::new(name),
        }
    }

    /// Add a node with a generated guid and its class name as title
    pub fn node(&mut self, class: &str) -> NodeIndex {
        self.titled(class, class)
    }

    pub fn titled(&mut self, class: &str, title: &str) -> NodeIndex {
        let guid = format!("{}-{}", self.graph.name, self.graph.nodes.len());
        let mut node = GraphNode::new(guid, class);
        node.title = title.to_string();
        self.add(node)
    }

    /// Add a pure node (no exec pins of its own)
    pub fn pure(&mut self, class: &str) -> NodeIndex {
        let index = self.node(class);
        self.node_mut(index).pure = true;
        index
    }

    pub fn add(&mut self, node: GraphNode) -> NodeIndex {
        self.graph.nodes.push(node);
        NodeIndex(self.graph.nodes.len() - 1)
    }

    /// # Panics
    ///
    /// Panics if `index` was not returned by this builder.
    pub fn node_mut(&mut self, index: NodeIndex) -> &mut GraphNode {
        &mut self.graph.nodes[index.0]
    }

    pub fn with_superclasses(&mut self, index: NodeIndex, superclasses: &[&str]) -> &mut Self {
        self.node_mut(index).superclasses = superclasses.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Add an exec output pin to `node`, returning its pin slot
    pub fn exec_output(&mut self, node: NodeIndex, name: &str) -> usize {
        self.push_pin(node, name, PinDirection::Output, PinCategory::Exec)
    }

    pub fn data_output(&mut self, node: NodeIndex, name: &str) -> usize {
        self.push_pin(node, name, PinDirection::Output, PinCategory::Data)
    }

    /// Link output pin `from_pin` on `from` to the exec input of `to`,
    /// creating the input pin on first use
    ///
    /// # Panics
    ///
    /// Panics if `from` or `to` was not returned by this builder, or if
    /// `from` has no pin at slot `from_pin`.
    pub fn link(&mut self, from: NodeIndex, from_pin: usize, to: NodeIndex) -> &mut Self {
        let to_pin = self.exec_input(to);
        self.node_mut(from).pins[from_pin].links.push(PinRef {
            node: to,
            pin: to_pin,
        });
        self.node_mut(to).pins[to_pin].links.push(PinRef {
            node: from,
            pin: from_pin,
        });
        self
    }

    /// Add a fresh exec output on `from` and link it to `to`
    pub fn connect(&mut self, from: NodeIndex, to: NodeIndex) -> &mut Self {
        let pin = self.exec_output(from, "then");
        self.link(from, pin, to)
    }

    /// Connect `nodes` one after another
    pub fn chain(&mut self, nodes: &[NodeIndex]) -> &mut Self {
        for pair in nodes.windows(2) {
            self.connect(pair[0], pair[1]);
        }
        self
    }

    pub fn build(self) -> Graph {
        self.graph
    }

    fn exec_input(&mut self, node: NodeIndex) -> usize {
        let existing = self.graph.nodes[node.0]
            .pins
            .iter()
            .position(|pin| pin.direction == PinDirection::Input && pin.category == PinCategory::Exec);
        match existing {
            Some(slot) => slot,
            None => self.push_pin(node, "execute", PinDirection::Input, PinCategory::Exec),
        }
    }

    fn push_pin(
        &mut self,
        node: NodeIndex,
        name: &str,
        direction: PinDirection,
        category: PinCategory,
    ) -> usize {
        let pins = &mut self.node_mut(node).pins;
        pins.push(Pin {
            name: name.to_string(),
            direction,
            category,
            links: Vec::new(),
        });
        pins.len() - 1
    }
}
