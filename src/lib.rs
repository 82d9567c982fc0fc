// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod complexity;
pub mod config;
pub mod dashboard;
pub mod errors;
pub mod graph;
pub mod io;

// Re-export commonly used types
pub use crate::complexity::{
    classify, classify_node, ColorBand, ComplexityCalculator, ComplexityScore, EntryResult,
    NodeRole, RoleSet, ScoreBreakdown, Severity,
};
pub use crate::config::{
    load_config, ComplexityConfig, ComplexityWeights, DashboardConfig, DisplayThresholds,
};
pub use crate::dashboard::{aggregate_rows, Dashboard, DashboardRow, ScannedBlueprint, ScoreCache};
pub use crate::errors::{Error, Result, ResultExt};
pub use crate::graph::{
    Blueprint, Graph, GraphBuilder, GraphNode, NodeGuid, NodeIndex, Pin, PinCategory,
    PinDirection, PinRef, Project,
};
