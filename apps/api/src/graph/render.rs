//! Layered DOT rendering of a career graph.
//!
//! Emits one `rank=same` group per layer so Graphviz lays the plan out as
//! columns of years — the multipartite layout the UI collaborator expects.
//! The output is written to a well-known path under the assets directory;
//! rasterizing it to an image is the collaborator's concern, not ours.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use petgraph::graph::NodeIndex;
use tracing::info;

use super::CareerGraph;

/// File name the UI collaborator reads.
pub const GRAPH_ASSET_NAME: &str = "career_plan_graph.dot";

/// Serializes the graph to Graphviz DOT with one rank group per layer.
pub fn to_dot(graph: &CareerGraph) -> String {
    let inner = graph.inner();

    let mut by_layer: BTreeMap<u32, Vec<NodeIndex>> = BTreeMap::new();
    for index in inner.node_indices() {
        by_layer.entry(inner[index].layer).or_default().push(index);
    }

    let mut dot = String::from("digraph career_plan {\n    rankdir=LR;\n    node [shape=box];\n");
    for (layer, indices) in &by_layer {
        let _ = writeln!(dot, "    {{ rank=same; // layer {layer}");
        for &index in indices {
            let _ = writeln!(
                dot,
                "        n{} [label=\"{}\", layer={layer}];",
                index.index(),
                escape(&inner[index].label)
            );
        }
        dot.push_str("    }\n");
    }
    for edge in inner.edge_indices() {
        let (source, target) = inner
            .edge_endpoints(edge)
            .expect("edge index came from this graph");
        let _ = writeln!(dot, "    n{} -> n{};", source.index(), target.index());
    }
    dot.push_str("}\n");
    dot
}

/// Renders the graph and writes it to `{assets_dir}/career_plan_graph.dot`,
/// creating the directory if needed. Returns the written path.
pub fn write_graph_asset(graph: &CareerGraph, assets_dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(assets_dir)
        .with_context(|| format!("Failed to create assets dir {}", assets_dir.display()))?;

    let path = assets_dir.join(GRAPH_ASSET_NAME);
    std::fs::write(&path, to_dot(graph))
        .with_context(|| format!("Failed to write graph asset {}", path.display()))?;

    info!("Career plan graph written to {}", path.display());
    Ok(path)
}

fn escape(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::models::plan::{CareerPlan, FallbackPlans, YearPlan};

    fn plan() -> CareerPlan {
        CareerPlan {
            years: vec![
                YearPlan {
                    year: 1,
                    courses: vec!["Take course: \"Advanced\" SQL".to_string()],
                    jobs: vec![],
                    hours_per_week: 10,
                },
                YearPlan {
                    year: 2,
                    courses: vec![],
                    jobs: vec!["Work on projects".to_string()],
                    hours_per_week: 10,
                },
            ],
            fallback_plans: FallbackPlans {
                if_visa_rejected: String::new(),
                if_course_incomplete: String::new(),
                if_financial_issues: String::new(),
            },
        }
    }

    #[test]
    fn test_dot_has_one_rank_group_per_layer() {
        let graph = CareerGraph::from_plan(&plan()).unwrap();
        let dot = to_dot(&graph);
        assert_eq!(dot.matches("rank=same").count(), 2);
        assert!(dot.contains("layer=1"));
        assert!(dot.contains("layer=2"));
    }

    #[test]
    fn test_dot_contains_every_node_and_edge() {
        let graph = CareerGraph::from_plan(&plan()).unwrap();
        let dot = to_dot(&graph);
        assert!(dot.contains("Year 1"));
        assert!(dot.contains("Year 2: Work on projects"));
        assert_eq!(dot.matches(" -> ").count(), graph.edge_count());
    }

    #[test]
    fn test_dot_escapes_quotes_in_labels() {
        let graph = CareerGraph::from_plan(&plan()).unwrap();
        let dot = to_dot(&graph);
        assert!(dot.contains(r#"\"Advanced\""#));
    }

    #[test]
    fn test_write_graph_asset_creates_well_known_path() {
        let graph = CareerGraph::from_plan(&plan()).unwrap();
        let dir = std::env::temp_dir().join("settling-graph-render-test");
        let path = write_graph_asset(&graph, &dir).unwrap();
        assert!(path.ends_with(GRAPH_ASSET_NAME));
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("digraph career_plan {"));
        std::fs::remove_dir_all(&dir).ok();
    }
}
