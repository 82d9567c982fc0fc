use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::DisplayThresholds;

/// Multiple of the red threshold past which a graph needs refactoring
const REFACTOR_MULTIPLIER: f64 = 1.6;

/// Human label for a percent score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    SimpleEnough,
    StillOkay,
    MildlyComplex,
    VeryComplex,
    ExtremelyComplex,
    RefactorMe,
}

impl Severity {
    pub fn from_percent(percent: f64, thresholds: &DisplayThresholds) -> Self {
        if percent < thresholds.light_green {
            Severity::SimpleEnough
        } else if percent < thresholds.green {
            Severity::StillOkay
        } else if percent < thresholds.orange {
            Severity::MildlyComplex
        } else if percent < thresholds.red {
            Severity::VeryComplex
        } else if percent < thresholds.red * REFACTOR_MULTIPLIER {
            Severity::ExtremelyComplex
        } else {
            Severity::RefactorMe
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Severity::SimpleEnough => "Simple Enough",
            Severity::StillOkay => "Still Okay",
            Severity::MildlyComplex => "Mildly Complex",
            Severity::VeryComplex => "Very Complex",
            Severity::ExtremelyComplex => "Extremely Complex",
            Severity::RefactorMe => "Refactor Me, please?",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Badge colour for a percent score.
///
/// Both bands below the green threshold share one colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorBand {
    Green,
    Orange,
    Red,
    Maroon,
}

impl ColorBand {
    pub fn from_percent(percent: f64, thresholds: &DisplayThresholds) -> Self {
        if percent < thresholds.green {
            ColorBand::Green
        } else if percent < thresholds.orange {
            ColorBand::Orange
        } else if percent < thresholds.red {
            ColorBand::Red
        } else {
            ColorBand::Maroon
        }
    }

    /// Linear RGBA as used by the editor badge
    pub fn rgba(self) -> [f32; 4] {
        match self {
            ColorBand::Green => [0.10, 0.70, 0.25, 0.9],
            ColorBand::Orange => [0.85, 0.55, 0.10, 0.9],
            ColorBand::Red => [0.80, 0.10, 0.10, 0.9],
            ColorBand::Maroon => [0.45, 0.0, 0.0, 0.95],
        }
    }
}
