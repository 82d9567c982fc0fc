use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use super::model::{Graph, GraphNode, NodeGuid, NodeIndex};
use crate::errors::{Error, Result};

/// A container of graphs: event graph pages followed by function graphs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Blueprint {
    pub name: String,
    /// Package path, e.g. `/Game/Characters`
    #[serde(default)]
    pub package_path: String,
    #[serde(default)]
    pub event_graphs: Vec<Graph>,
    #[serde(default)]
    pub function_graphs: Vec<Graph>,
}

impl Blueprint {
    pub fn new(name: impl Into<String>, package_path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            package_path: package_path.into(),
            event_graphs: Vec::new(),
            function_graphs: Vec::new(),
        }
    }

    /// Every graph in container order: event graphs, then function graphs
    pub fn graphs(&self) -> impl Iterator<Item = &Graph> {
        self.event_graphs.iter().chain(self.function_graphs.iter())
    }

    /// Locate a node by identity, searching event graphs before function graphs
    pub fn find_node(&self, guid: &NodeGuid) -> Option<(&Graph, NodeIndex)> {
        self.graphs()
            .find_map(|graph| graph.find_by_guid(guid).map(|index| (graph, index)))
    }

    pub fn node(&self, guid: &NodeGuid) -> Option<&GraphNode> {
        self.find_node(guid)
            .and_then(|(graph, index)| graph.node(index))
    }

    /// Identities of every node in every graph of this Blueprint
    pub fn node_guids(&self) -> HashSet<&NodeGuid> {
        self.graphs()
            .flat_map(|graph| graph.nodes.iter().map(|node| &node.guid))
            .collect()
    }

    pub fn is_in_package(&self, prefix: &str) -> bool {
        self.package_path.starts_with(prefix)
    }
}

/// Exported snapshot of every Blueprint in a project
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub blueprints: Vec<Blueprint>,
}

impl Project {
    /// Load a JSON project snapshot.
    ///
    /// Links to a node or pin that does not exist are kept but reported with
    /// `log::warn!`; the walk skips them.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| Error::file_system("Failed to read project snapshot", path, e))?;
        let project = Self::from_json(&contents)
            .map_err(|e| Error::snapshot(path, e.to_string()))?;
        project.report_dangling_links();
        log::info!(
            "Loaded {} blueprints from {}",
            project.blueprints.len(),
            path.display()
        );
        Ok(project)
    }

    pub fn from_json(contents: &str) -> Result<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    pub fn find_blueprint(&self, name: &str) -> Option<&Blueprint> {
        self.blueprints.iter().find(|bp| bp.name == name)
    }

    fn report_dangling_links(&self) {
        for blueprint in &self.blueprints {
            for graph in blueprint.graphs() {
                for (from, link) in graph.dangling_links() {
                    log::warn!(
                        "{}/{}: node {} links to missing pin {} on node {}",
                        blueprint.name,
                        graph.name,
                        from.0,
                        link.pin,
                        link.node.0
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    fn blueprint_with_duplicate_guid() -> Blueprint {
        let mut bp = Blueprint::new("BP_Door", "/Game/Props");
        let mut events = Graph::new("EventGraph");
        events.nodes.push(GraphNode::new("shared", "K2Node_Event"));
        let mut func = Graph::new("Open");
        func.nodes.push(GraphNode::new("fn-entry", "K2Node_FunctionEntry"));
        func.nodes.push(GraphNode::new("shared", "K2Node_FunctionEntry"));
        bp.event_graphs.push(events);
        bp.function_graphs.push(func);
        bp
    }

    #[test]
    fn test_graphs_orders_event_graphs_first() {
        let bp = blueprint_with_duplicate_guid();
        let names: Vec<_> = bp.graphs().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["EventGraph", "Open"]);
    }

    #[test]
    fn test_find_node_prefers_event_graphs() {
        let bp = blueprint_with_duplicate_guid();
        let (graph, index) = bp.find_node(&NodeGuid::new("shared")).unwrap();
        assert_eq!(graph.name, "EventGraph");
        assert_eq!(index, NodeIndex(0));

        let (graph, index) = bp.find_node(&NodeGuid::new("fn-entry")).unwrap();
        assert_eq!(graph.name, "Open");
        assert_eq!(index, NodeIndex(0));

        assert!(bp.find_node(&NodeGuid::new("missing")).is_none());
    }

    #[test]
    fn test_node_resolves_guid_to_node() {
        let bp = blueprint_with_duplicate_guid();
        let shared = bp.node(&NodeGuid::new("shared")).unwrap();
        assert_eq!(shared.class, "K2Node_Event");
        let entry = bp.node(&NodeGuid::new("fn-entry")).unwrap();
        assert_eq!(entry.class, "K2Node_FunctionEntry");
        assert!(bp.node(&NodeGuid::new("missing")).is_none());
    }

    #[test]
    fn test_node_guids_collects_all_graphs() {
        let bp = blueprint_with_duplicate_guid();
        assert_eq!(bp.node_guids().len(), 2);
    }

    #[test]
    fn test_project_from_json() {
        let project = Project::from_json(indoc! {r#"
            {
              "blueprints": [
                {
                  "name": "BP_Player",
                  "package_path": "/Game/Characters",
                  "event_graphs": [
                    {
                      "name": "EventGraph",
                      "nodes": [
                        {
                          "guid": "A1",
                          "class": "K2Node_Event",
                          "title": "Event BeginPlay",
                          "pins": [
                            { "name": "then", "direction": "output", "category": "exec",
                              "links": [ { "node": 1, "pin": 0 } ] }
                          ]
                        },
                        {
                          "guid": "B2",
                          "class": "K2Node_CallFunction",
                          "title": "Print String",
                          "pins": [
                            { "name": "execute", "direction": "input", "category": "exec" }
                          ]
                        }
                      ]
                    }
                  ]
                }
              ]
            }
        "#})
        .unwrap();

        let bp = project.find_blueprint("BP_Player").unwrap();
        assert!(bp.is_in_package("/Game"));
        assert!(bp.function_graphs.is_empty());
        let graph = &bp.event_graphs[0];
        assert_eq!(graph.node_count(), 2);
        assert!(graph.dangling_links().is_empty());
    }

    #[test]
    fn test_load_reports_missing_file() {
        let err = Project::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, Error::FileSystem { .. }));
    }
}
