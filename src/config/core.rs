use serde::{Deserialize, Serialize};

use super::thresholds::DisplayThresholds;
use super::weights::ComplexityWeights;
use crate::errors::{Error, Result};

/// Root configuration structure for bpcomplexity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ComplexityConfig {
    /// Scoring weights
    #[serde(default)]
    pub weights: ComplexityWeights,

    /// Percent scale and severity thresholds
    #[serde(default)]
    pub display: DisplayThresholds,

    /// Dashboard defaults
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

/// Dashboard filter defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Minimum percent for an entry to be listed
    #[serde(default = "default_dashboard_threshold")]
    pub threshold: f64,

    /// Only Blueprints under this package path are scanned
    #[serde(default = "default_package_prefix")]
    pub package_prefix: Option<String>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            threshold: default_dashboard_threshold(),
            package_prefix: default_package_prefix(),
        }
    }
}

pub fn default_dashboard_threshold() -> f64 {
    60.0
}

pub fn default_package_prefix() -> Option<String> {
    Some("/Game".to_string())
}

impl ComplexityConfig {
    /// Validate the whole config, reporting every problem at once
    pub fn validate(&self) -> Result<()> {
        let mut errors = self.weights.collect_weight_validations();
        errors.extend(self.display.collect_validations());

        if self.dashboard.threshold.is_nan() {
            errors.push("dashboard threshold must be a number".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(Error::Validation(errors.join("; ")))
        }
    }

    /// Percent of the configured scale that `raw_score` represents
    pub fn percent_of(&self, raw_score: f64) -> f64 {
        raw_score * 100.0 / self.display.percent_scale
    }
}
