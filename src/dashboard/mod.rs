pub mod aggregator;
pub mod cache;

pub use aggregator::{
    aggregate_rows, compare_rows, scan_blueprints, sort_rows, Dashboard, DashboardRow,
    ScannedBlueprint,
};
pub use cache::ScoreCache;
