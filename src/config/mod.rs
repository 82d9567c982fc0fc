// Sub-modules
mod core;
mod loader;
mod thresholds;
mod weights;

// Re-export weight types
pub use weights::{
    default_base_entry_weight, default_branch_weight, default_function_call_weight,
    default_latent_weight, default_loop_weight, default_math_node_weight,
    default_nesting_penalty, default_select_weight, ComplexityWeights,
};

// Re-export display threshold types
pub use thresholds::DisplayThresholds;

// Re-export core types
pub use core::{ComplexityConfig, DashboardConfig};

// Re-export loader functions
pub use loader::{
    directory_ancestors, discover_config, find_config_file, load_config, load_config_from,
    parse_and_validate_config, CONFIG_FILE_NAME,
};
