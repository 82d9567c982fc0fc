pub mod calculator;
pub mod classifier;
pub mod processor;
pub mod score;
pub mod severity;

pub use calculator::ComplexityCalculator;
pub use classifier::{
    classify, classify_node, derives_from_entry, NodeDescriptor, NodeRole, RoleSet,
};
pub use processor::entry_nodes;
pub use score::{ComplexityScore, EntryResult, NodeContribution, ScoreBreakdown};
pub use severity::{ColorBand, Severity};
