use crate::complexity::{entry_nodes, ComplexityCalculator};
use crate::config::load_config;
use crate::graph::{Blueprint, Graph, NodeIndex, Project};
use crate::io::{self, BreakdownReport};
use anyhow::{Context, Result};
use std::path::PathBuf;

pub struct ExplainConfig {
    pub project: PathBuf,
    pub blueprint: String,
    pub entry: String,
    pub config: Option<PathBuf>,
    pub format: crate::cli::OutputFormat,
}

pub fn handle_explain(config: ExplainConfig) -> Result<()> {
    let settings = load_config(config.config.as_deref())
        .context("Failed to load configuration")?;
    let calculator = ComplexityCalculator::try_new(&settings)?;
    let project = Project::load(&config.project)
        .with_context(|| format!("Failed to load project {}", config.project.display()))?;

    let blueprint = project
        .find_blueprint(&config.blueprint)
        .with_context(|| format!("Blueprint '{}' not found", config.blueprint))?;
    let (graph, index) = find_entry(blueprint, &config.entry).with_context(|| {
        format!(
            "No entry '{}' in {} (entries: {})",
            config.entry,
            blueprint.name,
            entry_names(blueprint).join(", ")
        )
    })?;

    let breakdown = calculator.calculate_detailed(graph, index);
    let entry_name = graph
        .node(index)
        .map(|node| node.display_name().to_string())
        .unwrap_or_else(|| config.entry.clone());
    let report = BreakdownReport::new(
        &blueprint.name,
        &graph.name,
        &entry_name,
        breakdown,
        &settings.display,
    );

    let mut writer = io::create_writer(config.format.into(), io::open_destination(None)?);
    writer.write_breakdown(&report)?;
    Ok(())
}

/// Locate an entry node by display name or guid, event graphs first
pub fn find_entry<'a>(blueprint: &'a Blueprint, entry: &str) -> Option<(&'a Graph, NodeIndex)> {
    blueprint.graphs().find_map(|graph| {
        entry_nodes(graph)
            .find(|(_, node)| node.display_name() == entry || node.guid.as_str() == entry)
            .map(|(index, _)| (graph, index))
    })
}

fn entry_names(blueprint: &Blueprint) -> Vec<String> {
    blueprint
        .graphs()
        .flat_map(|graph| entry_nodes(graph).map(|(_, node)| node.display_name().to_string()))
        .collect()
}
