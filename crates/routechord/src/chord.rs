//! Chord graph structure and node selection.
//!
//! A chord graph is the circular node/edge structure handed to the renderer:
//! one node per airport, one weighted edge per aggregated route pair.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::aggregate::RouteCount;
use crate::dataset::Dataset;

/// How edges are filtered when a chord graph is restricted to a node subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMode {
    /// Keep an edge only when both endpoints are in the selected set.
    #[default]
    Nodes,
    /// Keep an edge when either endpoint is in the selected set; nodes
    /// incident to a kept edge are retained as well.
    Edges,
}

impl std::fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Nodes => write!(f, "nodes"),
            Self::Edges => write!(f, "edges"),
        }
    }
}

/// A node in the chord graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChordNode {
    /// Airport identifier.
    pub id: String,
    /// Display label (the city name, falling back to the id).
    pub label: String,
}

/// A weighted, directed edge between two nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChordEdge {
    /// Source node id.
    pub source: String,
    /// Target node id.
    pub target: String,
    /// Aggregated route count for this pair.
    pub value: u64,
}

/// The full node/edge structure consumed by a renderer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChordGraph {
    /// Graph nodes, in insertion order.
    pub nodes: Vec<ChordNode>,
    /// Weighted edges.
    pub edges: Vec<ChordEdge>,
}

impl ChordGraph {
    /// Build a chord graph from aggregated route counts and airport metadata.
    ///
    /// Nodes are created for every airport referenced by an edge. Labels come
    /// from the airports table; endpoints with no metadata keep their id as
    /// the label, matching the loose referential integrity of the inputs.
    #[must_use]
    pub fn from_counts(counts: &[RouteCount], dataset: &Dataset) -> Self {
        let index = dataset.airport_index();

        let mut seen = HashSet::new();
        let mut nodes = Vec::new();
        let mut add_node = |id: &str, nodes: &mut Vec<ChordNode>| {
            if seen.insert(id.to_string()) {
                let label = index
                    .get(id)
                    .map_or_else(|| id.to_string(), |a| a.city.clone());
                nodes.push(ChordNode {
                    id: id.to_string(),
                    label,
                });
            }
        };

        let mut edges = Vec::with_capacity(counts.len());
        for rc in counts {
            add_node(&rc.source_id, &mut nodes);
            add_node(&rc.destination_id, &mut nodes);
            edges.push(ChordEdge {
                source: rc.source_id.clone(),
                target: rc.destination_id.clone(),
                value: rc.count,
            });
        }

        Self { nodes, edges }
    }

    /// Restrict the graph to the given node ids.
    ///
    /// With [`SelectionMode::Nodes`] only edges between selected nodes
    /// survive; with [`SelectionMode::Edges`] any edge touching a selected
    /// node survives, along with its other endpoint.
    #[must_use]
    pub fn select_nodes(&self, ids: &HashSet<String>, mode: SelectionMode) -> Self {
        let edges: Vec<ChordEdge> = self
            .edges
            .iter()
            .filter(|e| match mode {
                SelectionMode::Nodes => ids.contains(&e.source) && ids.contains(&e.target),
                SelectionMode::Edges => ids.contains(&e.source) || ids.contains(&e.target),
            })
            .cloned()
            .collect();

        let keep: HashSet<&str> = match mode {
            SelectionMode::Nodes => ids.iter().map(String::as_str).collect(),
            SelectionMode::Edges => edges
                .iter()
                .flat_map(|e| [e.source.as_str(), e.target.as_str()])
                .collect(),
        };

        let nodes: Vec<ChordNode> = self
            .nodes
            .iter()
            .filter(|n| keep.contains(n.id.as_str()))
            .cloned()
            .collect();

        debug!(
            "Selected {} of {} nodes, {} of {} edges (mode: {})",
            nodes.len(),
            self.nodes.len(),
            edges.len(),
            self.edges.len(),
            mode
        );

        Self { nodes, edges }
    }

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Check if the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
