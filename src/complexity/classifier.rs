//! Node role classification.
//!
//! Roles are decided from a node's class name and, for macro instances, its
//! full title. Several families carry no stable structural identifier, so a
//! few checks match substrings of the class name or title. Those matches are
//! case-sensitive and English-only; renamed or localized macro titles will
//! not be detected as loops. Changing them would silently change scores of
//! existing content, so they are kept exactly as is.

use crate::graph::GraphNode;
use serde::{Serialize, Serializer};
use std::fmt;

/// Semantic role of a node in the complexity walk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NodeRole {
    Entry,
    Branch,
    Select,
    Loop,
    Latent,
    FunctionCall,
    Math,
    /// Reachable, but none of the above
    Other,
}

impl NodeRole {
    pub const ALL: [NodeRole; 8] = [
        NodeRole::Entry,
        NodeRole::Branch,
        NodeRole::Select,
        NodeRole::Loop,
        NodeRole::Latent,
        NodeRole::FunctionCall,
        NodeRole::Math,
        NodeRole::Other,
    ];

    const fn bit(self) -> u8 {
        1 << self as u8
    }

    /// Roles that open a nested scope for their exec successors
    pub fn increases_nesting(self) -> bool {
        matches!(self, NodeRole::Branch | NodeRole::Select | NodeRole::Loop)
    }
}

impl fmt::Display for NodeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeRole::Entry => "entry",
            NodeRole::Branch => "branch",
            NodeRole::Select => "select",
            NodeRole::Loop => "loop",
            NodeRole::Latent => "latent",
            NodeRole::FunctionCall => "function-call",
            NodeRole::Math => "math",
            NodeRole::Other => "other",
        };
        f.write_str(name)
    }
}

/// Set of roles held by one node.
///
/// Never holds both `FunctionCall` and `Math`; holds `Other` exactly when it
/// holds nothing else.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RoleSet(u8);

impl RoleSet {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub fn of(roles: &[NodeRole]) -> Self {
        roles.iter().copied().collect()
    }

    pub fn contains(self, role: NodeRole) -> bool {
        self.0 & role.bit() != 0
    }

    pub fn insert(&mut self, role: NodeRole) {
        self.0 |= role.bit();
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = NodeRole> {
        NodeRole::ALL.into_iter().filter(move |role| self.contains(*role))
    }

    pub fn increases_nesting(self) -> bool {
        self.iter().any(NodeRole::increases_nesting)
    }
}

impl FromIterator<NodeRole> for RoleSet {
    fn from_iter<I: IntoIterator<Item = NodeRole>>(iter: I) -> Self {
        let mut set = RoleSet::empty();
        for role in iter {
            set.insert(role);
        }
        set
    }
}

impl fmt::Debug for RoleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for RoleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.iter().map(|role| role.to_string()).collect();
        f.write_str(&names.join("+"))
    }
}

impl Serialize for RoleSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

/// What the classifier needs to know about a node
#[derive(Debug, Clone, Copy)]
pub struct NodeDescriptor<'a> {
    /// Structural type identifier (class name)
    pub class: &'a str,
    /// Ancestor class names, for instance-of checks
    pub superclasses: &'a [String],
    /// Full title, consulted only for macro instances
    pub title: Option<&'a str>,
    pub pure: bool,
    pub has_exec_outputs: bool,
}

impl<'a> NodeDescriptor<'a> {
    pub fn of(node: &'a GraphNode) -> Self {
        Self {
            class: &node.class,
            superclasses: &node.superclasses,
            title: Some(node.title.as_str()),
            pure: node.pure,
            has_exec_outputs: node.has_exec_outputs(),
        }
    }

    fn is_a(&self, class: &str) -> bool {
        self.class == class || self.superclasses.iter().any(|s| s == class)
    }

    fn class_is_one_of(&self, names: &[&str]) -> bool {
        names.contains(&self.class)
    }

    fn is_k2_node(&self) -> bool {
        self.class.starts_with("K2Node") || self.is_a("K2Node")
    }
}

const ENTRY_CLASSES: &[&str] = &["K2Node_Event", "K2Node_FunctionEntry"];

const BRANCH_CLASSES: &[&str] = &[
    "K2Node_IfThenElse",
    "K2Node_ExecutionSequence",
    "K2Node_MultiGate",
];

const SELECT_CLASSES: &[&str] = &[
    "K2Node_Select",
    "K2Node_SwitchInteger",
    "K2Node_SwitchEnum",
    "K2Node_SwitchName",
    "K2Node_SwitchString",
    "K2Node_Switch",
];

const FOR_EACH_CLASSES: &[&str] = &[
    "K2Node_MapForEach",
    "K2Node_SetForEach",
    "K2Node_ForEachElementInEnum",
];

const LATENT_CLASSES: &[&str] = &[
    "K2Node_Timeline",
    "K2Node_BaseAsyncTask",
    "K2Node_AsyncAction",
];

const MACRO_INSTANCE_CLASS: &str = "K2Node_MacroInstance";
const CALL_FUNCTION_CLASS: &str = "K2Node_CallFunction";

pub fn is_entry(node: &NodeDescriptor) -> bool {
    node.class_is_one_of(ENTRY_CLASSES)
}

/// Entry class or any subclass of one (custom events, input events)
pub fn derives_from_entry(node: &NodeDescriptor) -> bool {
    ENTRY_CLASSES.iter().any(|class| node.is_a(class))
}

pub fn is_branch(node: &NodeDescriptor) -> bool {
    node.class_is_one_of(BRANCH_CLASSES)
}

pub fn is_select(node: &NodeDescriptor) -> bool {
    node.class_is_one_of(SELECT_CLASSES)
}

/// Native loop classes, explicit for-each classes, or a macro instance whose
/// title names a loop (heuristic: `ForLoop`, `ForEach`, `While`).
pub fn is_loop(node: &NodeDescriptor) -> bool {
    if node.class.contains("ForLoop") || node.class.contains("WhileLoop") {
        return true;
    }

    if node.class_is_one_of(FOR_EACH_CLASSES) {
        return true;
    }

    node.class == MACRO_INSTANCE_CLASS
        && node.title.is_some_and(|title| {
            title.contains("ForLoop") || title.contains("ForEach") || title.contains("While")
        })
}

/// Known latent classes, plus plugin families recognised by class-name
/// substring (`LatentGameplayCall`, `AsyncTask`).
pub fn is_latent(node: &NodeDescriptor) -> bool {
    node.class_is_one_of(LATENT_CLASSES)
        || node.class.contains("LatentGameplayCall")
        || node.class.contains("AsyncTask")
}

pub fn is_function_call(node: &NodeDescriptor) -> bool {
    node.is_a(CALL_FUNCTION_CLASS)
}

/// Math expressions, binary operators, or any pure K2 node without exec
/// outputs. Does not check function-call precedence; [`classify`] does.
pub fn is_math(node: &NodeDescriptor) -> bool {
    node.is_a("K2Node_MathExpression")
        || node.is_a("K2Node_CommutativeAssociativeBinaryOperator")
        || (node.is_k2_node() && !node.has_exec_outputs && node.pure)
}

/// Compute every role a node holds
pub fn classify(node: &NodeDescriptor) -> RoleSet {
    let mut roles = RoleSet::empty();

    let checks: [(fn(&NodeDescriptor) -> bool, NodeRole); 5] = [
        (is_entry, NodeRole::Entry),
        (is_branch, NodeRole::Branch),
        (is_select, NodeRole::Select),
        (is_loop, NodeRole::Loop),
        (is_latent, NodeRole::Latent),
    ];
    for (check, role) in checks {
        if check(node) {
            roles.insert(role);
        }
    }

    // FunctionCall wins over Math
    if is_function_call(node) {
        roles.insert(NodeRole::FunctionCall);
    } else if is_math(node) {
        roles.insert(NodeRole::Math);
    }

    if roles.is_empty() {
        roles.insert(NodeRole::Other);
    }
    roles
}

pub fn classify_node(node: &GraphNode) -> RoleSet {
    classify(&NodeDescriptor::of(node))
}
