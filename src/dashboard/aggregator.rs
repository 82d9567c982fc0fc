//! Cross-Blueprint aggregation for the dashboard view.
//!
//! Scanning and filtering are separate stages: `scan_blueprints` scores every
//! Blueprint (in parallel), `aggregate_rows` filters by threshold and sorts.
//! Changing the threshold is a full re-aggregation.

use rayon::prelude::*;
use serde::Serialize;
use std::cmp::Ordering;

use crate::complexity::{ComplexityCalculator, EntryResult, Severity};
use crate::config::{DashboardConfig, DisplayThresholds};
use crate::graph::{Blueprint, NodeGuid, Project};

/// Scores of one Blueprint, tagged with its name and package path
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScannedBlueprint {
    pub name: String,
    pub path: String,
    pub results: Vec<EntryResult>,
}

/// One dashboard line: an entry whose percent reached the threshold
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardRow {
    pub blueprint_name: String,
    pub blueprint_path: String,
    pub node_guid: NodeGuid,
    pub entry_display_name: String,
    pub raw_score: f64,
    pub percent: f64,
}

impl DashboardRow {
    /// Full object path of the owning Blueprint: `<path>/<name>.<name>`
    pub fn object_path(&self) -> String {
        let path = self.blueprint_path.trim_end_matches('/');
        format!(
            "{}/{}.{}",
            path, self.blueprint_name, self.blueprint_name
        )
    }

    pub fn severity(&self, thresholds: &DisplayThresholds) -> Severity {
        Severity::from_percent(self.percent, thresholds)
    }
}

/// Dashboard ordering: percent descending, then Blueprint name, then entry
/// name. Total over all inputs, so repeated runs give identical output.
pub fn compare_rows(a: &DashboardRow, b: &DashboardRow) -> Ordering {
    b.percent
        .total_cmp(&a.percent)
        .then_with(|| a.blueprint_name.cmp(&b.blueprint_name))
        .then_with(|| a.entry_display_name.cmp(&b.entry_display_name))
}

pub fn sort_rows(mut rows: Vec<DashboardRow>) -> Vec<DashboardRow> {
    rows.sort_by(compare_rows);
    rows
}

/// Score every Blueprint under `package_prefix` (all of them when `None`).
/// Output keeps the input order.
pub fn scan_blueprints(
    calculator: &ComplexityCalculator<'_>,
    blueprints: &[Blueprint],
    package_prefix: Option<&str>,
) -> Vec<ScannedBlueprint> {
    blueprints
        .par_iter()
        .filter(|bp| package_prefix.map_or(true, |prefix| bp.is_in_package(prefix)))
        .map(|bp| ScannedBlueprint {
            name: bp.name.clone(),
            path: bp.package_path.clone(),
            results: calculator.process_blueprint(Some(bp)),
        })
        .collect()
}

/// Keep results with `percent >= threshold` and sort them for display
pub fn aggregate_rows(scanned: &[ScannedBlueprint], threshold: f64) -> Vec<DashboardRow> {
    let rows = scanned
        .iter()
        .flat_map(|bp| {
            bp.results
                .iter()
                .filter(move |result| result.score.percent >= threshold)
                .map(move |result| DashboardRow {
                    blueprint_name: bp.name.clone(),
                    blueprint_path: bp.path.clone(),
                    node_guid: result.node_guid.clone(),
                    entry_display_name: result.entry_display_name.clone(),
                    raw_score: result.score.raw_score,
                    percent: result.score.percent,
                })
        })
        .collect();
    sort_rows(rows)
}

/// Dashboard state: current threshold, package filter and last rows
#[derive(Debug, Clone)]
pub struct Dashboard {
    threshold: f64,
    package_prefix: Option<String>,
    rows: Vec<DashboardRow>,
    scanned_blueprints: usize,
    scanned_entries: usize,
}

impl Dashboard {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            threshold: config.threshold,
            package_prefix: config.package_prefix.clone(),
            rows: Vec::new(),
            scanned_blueprints: 0,
            scanned_entries: 0,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Takes effect on the next [`refresh`](Self::refresh)
    pub fn set_threshold(&mut self, threshold: f64) {
        self.threshold = threshold;
    }

    pub fn set_package_prefix(&mut self, prefix: Option<String>) {
        self.package_prefix = prefix;
    }

    pub fn rows(&self) -> &[DashboardRow] {
        &self.rows
    }

    /// Number of Blueprints that passed the package filter on the last refresh
    pub fn scanned_blueprints(&self) -> usize {
        self.scanned_blueprints
    }

    /// Number of entries scored by the last refresh, before filtering
    pub fn scanned_entries(&self) -> usize {
        self.scanned_entries
    }

    /// Rescan every Blueprint of `project` and rebuild the rows
    pub fn refresh(
        &mut self,
        calculator: &ComplexityCalculator<'_>,
        project: &Project,
    ) -> &[DashboardRow] {
        let scanned = scan_blueprints(
            calculator,
            &project.blueprints,
            self.package_prefix.as_deref(),
        );
        self.scanned_blueprints = scanned.len();
        self.scanned_entries = scanned.iter().map(|bp| bp.results.len()).sum();
        self.rows = aggregate_rows(&scanned, self.threshold);

        log::info!(
            "Dashboard: {} of {} entries at or above {}%",
            self.rows.len(),
            self.scanned_entries,
            self.threshold
        );
        &self.rows
    }
}
