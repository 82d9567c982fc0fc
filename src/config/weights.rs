//! Scoring weights for the cognitive complexity walk
//!
//! Every weight is added once per node holding the matching role, except
//! `nesting_penalty` which is multiplied by the node's nesting depth.

use serde::{Deserialize, Serialize};

/// Per-role weights applied while walking a graph
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComplexityWeights {
    /// Added once per function/event entry
    #[serde(default = "default_base_entry_weight")]
    pub base_entry_weight: f64,

    /// Branching flow control: Branch, Sequence, MultiGate
    #[serde(default = "default_branch_weight")]
    pub branch_weight: f64,

    /// Select and Switch nodes
    #[serde(default = "default_select_weight")]
    pub select_weight: f64,

    /// Loop constructs: ForLoop, ForEach, While
    #[serde(default = "default_loop_weight")]
    pub loop_weight: f64,

    /// Latent/async nodes: Timeline, async actions
    #[serde(default = "default_latent_weight")]
    pub latent_weight: f64,

    /// Any function call node, pure or impure
    #[serde(default = "default_function_call_weight")]
    pub function_call_weight: f64,

    /// Pure math/data nodes
    #[serde(default = "default_math_node_weight")]
    pub math_node_weight: f64,

    /// Extra cost per nesting level inside branches/loops/selects
    #[serde(default = "default_nesting_penalty")]
    pub nesting_penalty: f64,
}

impl Default for ComplexityWeights {
    fn default() -> Self {
        Self {
            base_entry_weight: default_base_entry_weight(),
            branch_weight: default_branch_weight(),
            select_weight: default_select_weight(),
            loop_weight: default_loop_weight(),
            latent_weight: default_latent_weight(),
            function_call_weight: default_function_call_weight(),
            math_node_weight: default_math_node_weight(),
            nesting_penalty: default_nesting_penalty(),
        }
    }
}

pub fn default_base_entry_weight() -> f64 {
    1.0
}
pub fn default_branch_weight() -> f64 {
    2.0
}
pub fn default_select_weight() -> f64 {
    1.0
}
pub fn default_loop_weight() -> f64 {
    3.0
}
pub fn default_latent_weight() -> f64 {
    2.0
}
pub fn default_function_call_weight() -> f64 {
    1.0
}
pub fn default_math_node_weight() -> f64 {
    1.0
}
pub fn default_nesting_penalty() -> f64 {
    1.0
}

impl ComplexityWeights {
    // Pure function: Check if a weight is usable
    pub fn is_valid_weight(weight: f64) -> bool {
        weight.is_finite() && weight >= 0.0
    }

    // Pure function: Validate a single weight with name
    pub fn validate_weight(weight: f64, name: &str) -> Result<(), String> {
        if Self::is_valid_weight(weight) {
            Ok(())
        } else {
            Err(format!(
                "{} must be a non-negative finite number, got {}",
                name, weight
            ))
        }
    }

    /// Named view over every weight, in declaration order
    pub fn named(&self) -> [(&'static str, f64); 8] {
        [
            ("base_entry_weight", self.base_entry_weight),
            ("branch_weight", self.branch_weight),
            ("select_weight", self.select_weight),
            ("loop_weight", self.loop_weight),
            ("latent_weight", self.latent_weight),
            ("function_call_weight", self.function_call_weight),
            ("math_node_weight", self.math_node_weight),
            ("nesting_penalty", self.nesting_penalty),
        ]
    }

    /// Collect every weight problem instead of stopping at the first one
    pub fn collect_weight_validations(&self) -> Vec<String> {
        self.named()
            .iter()
            .filter_map(|(name, weight)| Self::validate_weight(*weight, name).err())
            .collect()
    }
}
