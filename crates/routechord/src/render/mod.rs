//! Rendering backends for chord graphs.
//!
//! The drawing engine is deliberately a replaceable collaborator: the pipeline
//! hands a [`ChordGraph`] plus declarative styling to a [`Renderer`] and takes
//! back a finished document. Two backends are bundled: a minimal SVG writer
//! and a JSON plot description for external engines.

pub mod palette;
mod svg;

use serde::Serialize;

use crate::chord::ChordGraph;
use crate::config::RenderConfig;
use crate::error::Result;

pub use svg::SvgRenderer;

/// A backend that turns a chord graph into a document.
pub trait Renderer {
    /// The name of this backend (for logging/debugging).
    fn name(&self) -> &'static str;

    /// Render the graph with the given styling options.
    ///
    /// # Errors
    ///
    /// Returns an error if the graph is internally inconsistent or the
    /// backend cannot produce output.
    fn render(&self, graph: &ChordGraph, style: &RenderConfig) -> Result<String>;
}

/// Emits the graph and styling options as a JSON plot description.
///
/// The document carries everything an external chord-diagram engine needs;
/// no layout is computed here.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl JsonRenderer {
    /// Create the JSON backend.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[derive(Serialize)]
struct PlotDescription<'a> {
    kind: &'static str,
    graph: &'a ChordGraph,
    style: &'a RenderConfig,
}

impl Renderer for JsonRenderer {
    fn name(&self) -> &'static str {
        "json"
    }

    fn render(&self, graph: &ChordGraph, style: &RenderConfig) -> Result<String> {
        let description = PlotDescription {
            kind: "chord",
            graph,
            style,
        };
        Ok(serde_json::to_string_pretty(&description)?)
    }
}
