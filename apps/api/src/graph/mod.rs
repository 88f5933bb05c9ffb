//! Career Graph — the layered, directed view of a single career plan.
//!
//! One node per year (`"Year N"`) and one per (year, item) pair
//! (`"Year N: {item}"`), every node tagged with a `layer` equal to its year
//! number. Edges run from a year node to each of its course/job nodes, so
//! the graph is a forest of year-rooted stars: every non-year node has
//! in-degree exactly 1, from a predecessor in the same layer. The renderer
//! depends on exactly this shape.
//!
//! The graph is write-once: built in a single pass from a validated
//! [`CareerPlan`], never mutated afterwards.

pub mod render;

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;
use thiserror::Error;

use crate::models::plan::CareerPlan;

#[derive(Debug, Error)]
pub enum GraphError {
    /// The plan handed to the builder does not match the canonical
    /// year-numbering contract. This is a programming error, not bad user
    /// input; fail fast.
    #[error("plan shape mismatch: {0}")]
    ShapeMismatch(String),
}

/// A single node: its display label and the year it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanNode {
    pub label: String,
    pub layer: u32,
}

/// The built graph. The inner petgraph is private; reads go through
/// accessors and the renderer.
#[derive(Debug)]
pub struct CareerGraph {
    graph: DiGraph<PlanNode, ()>,
}

impl CareerGraph {
    /// Builds the layered graph for one career plan.
    ///
    /// Rejects plans whose year numbering is not contiguous from 1 with
    /// [`GraphError::ShapeMismatch`].
    pub fn from_plan(plan: &CareerPlan) -> Result<Self, GraphError> {
        for (index, year_plan) in plan.years.iter().enumerate() {
            let expected = index as u32 + 1;
            if year_plan.year != expected {
                return Err(GraphError::ShapeMismatch(format!(
                    "expected year {expected} at position {index}, found year {}",
                    year_plan.year
                )));
            }
        }

        let mut graph = DiGraph::new();
        for year_plan in &plan.years {
            let year_label = format!("Year {}", year_plan.year);
            let year_node = graph.add_node(PlanNode {
                label: year_label.clone(),
                layer: year_plan.year,
            });

            for item in year_plan.courses.iter().chain(year_plan.jobs.iter()) {
                let item_node = graph.add_node(PlanNode {
                    label: format!("{year_label}: {item}"),
                    layer: year_plan.year,
                });
                graph.add_edge(year_node, item_node, ());
            }
        }

        Ok(Self { graph })
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// All nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &PlanNode> {
        self.graph.node_weights()
    }

    /// (source label, target label) for every edge.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.graph.edge_indices().map(|edge| {
            let (source, target) = self
                .graph
                .edge_endpoints(edge)
                .expect("edge index came from this graph");
            (
                self.graph[source].label.as_str(),
                self.graph[target].label.as_str(),
            )
        })
    }

    pub fn in_degree(&self, index: NodeIndex) -> usize {
        self.graph
            .neighbors_directed(index, Direction::Incoming)
            .count()
    }

    pub(crate) fn inner(&self) -> &DiGraph<PlanNode, ()> {
        &self.graph
    }
}
