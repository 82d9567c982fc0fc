//! CLI command implementations.
//!
//! Available commands:
//! - **analyze**: score a project snapshot and list entries over the threshold
//! - **explain**: per-node breakdown of a single entry's score
//! - **init**: write a default `.bpcomplexity.toml`

pub mod analyze;
pub mod explain;
pub mod init;

pub use analyze::{handle_analyze, AnalyzeConfig};
pub use explain::{handle_explain, ExplainConfig};
pub use init::init_config;
