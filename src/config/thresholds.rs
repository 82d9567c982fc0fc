use serde::{Deserialize, Serialize};

/// Percent conversion and badge severity thresholds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayThresholds {
    /// Converts raw score to percent: percent = raw / percent_scale * 100
    #[serde(default = "default_percent_scale")]
    pub percent_scale: f64,

    #[serde(default = "default_light_green")]
    pub light_green: f64,

    #[serde(default = "default_green")]
    pub green: f64,

    #[serde(default = "default_orange")]
    pub orange: f64,

    #[serde(default = "default_red")]
    pub red: f64,
}

impl Default for DisplayThresholds {
    fn default() -> Self {
        Self {
            percent_scale: default_percent_scale(),
            light_green: default_light_green(),
            green: default_green(),
            orange: default_orange(),
            red: default_red(),
        }
    }
}

pub fn default_percent_scale() -> f64 {
    100.0
}
pub fn default_light_green() -> f64 {
    30.0
}
pub fn default_green() -> f64 {
    60.0
}
pub fn default_orange() -> f64 {
    80.0
}
pub fn default_red() -> f64 {
    100.0
}

impl DisplayThresholds {
    /// Severity thresholds in ascending order
    pub fn ascending(&self) -> [(&'static str, f64); 4] {
        [
            ("light_green", self.light_green),
            ("green", self.green),
            ("orange", self.orange),
            ("red", self.red),
        ]
    }

    pub fn collect_validations(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if !self.percent_scale.is_finite() || self.percent_scale < 1.0 {
            errors.push(format!(
                "percent_scale must be >= 1, got {}",
                self.percent_scale
            ));
        }

        let ordered = self.ascending();
        for (name, value) in ordered {
            if !value.is_finite() || value < 0.0 {
                errors.push(format!(
                    "{} threshold must be a non-negative finite number, got {}",
                    name, value
                ));
            }
        }

        for pair in ordered.windows(2) {
            let (lower_name, lower) = pair[0];
            let (upper_name, upper) = pair[1];
            if lower > upper {
                errors.push(format!(
                    "{} threshold ({}) must not exceed {} threshold ({})",
                    lower_name, lower, upper_name, upper
                ));
            }
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_ascending_and_valid() {
        assert!(DisplayThresholds::default().collect_validations().is_empty());
    }

    #[test]
    fn zero_percent_scale_is_rejected() {
        let thresholds = DisplayThresholds {
            percent_scale: 0.0,
            ..Default::default()
        };
        let errors = thresholds.collect_validations();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("percent_scale"));
    }

    #[test]
    fn decreasing_thresholds_are_rejected() {
        let thresholds = DisplayThresholds {
            orange: 50.0,
            ..Default::default()
        };
        let errors = thresholds.collect_validations();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("green threshold (60) must not exceed orange"));
    }

    #[test]
    fn equal_thresholds_are_allowed() {
        let thresholds = DisplayThresholds {
            light_green: 60.0,
            green: 60.0,
            ..Default::default()
        };
        assert!(thresholds.collect_validations().is_empty());
    }
}
