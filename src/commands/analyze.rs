use crate::complexity::ComplexityCalculator;
use crate::config::{load_config, ComplexityConfig};
use crate::dashboard::Dashboard;
use crate::graph::Project;
use crate::io::{self, DashboardReport};
use anyhow::{Context, Result};
use std::path::PathBuf;

pub struct AnalyzeConfig {
    pub project: PathBuf,
    pub config: Option<PathBuf>,
    pub threshold: Option<f64>,
    pub format: crate::cli::OutputFormat,
    pub output: Option<PathBuf>,
    pub package_prefix: Option<String>,
    pub all_packages: bool,
}

pub fn handle_analyze(config: AnalyzeConfig) -> Result<()> {
    let settings = load_config(config.config.as_deref())
        .context("Failed to load configuration")?;
    let report = build_report(&config, &settings)?;

    let destination = io::open_destination(config.output.as_deref())?;
    let mut writer = io::create_writer(config.format.into(), destination);
    writer.write_dashboard(&report)?;
    Ok(())
}

/// Load the snapshot and aggregate it into a dashboard report
pub fn build_report(config: &AnalyzeConfig, settings: &ComplexityConfig) -> Result<DashboardReport> {
    let calculator = ComplexityCalculator::try_new(settings)?;
    let project = Project::load(&config.project)
        .with_context(|| format!("Failed to load project {}", config.project.display()))?;

    let mut dashboard = Dashboard::new(&settings.dashboard);
    if let Some(threshold) = config.threshold {
        if !threshold.is_finite() {
            anyhow::bail!("Threshold must be a finite number, got {threshold}");
        }
        dashboard.set_threshold(threshold);
    }
    if config.all_packages {
        dashboard.set_package_prefix(None);
    } else if let Some(prefix) = &config.package_prefix {
        dashboard.set_package_prefix(Some(prefix.clone()));
    }

    dashboard.refresh(&calculator, &project);
    Ok(DashboardReport::new(&dashboard, &settings.display))
}
