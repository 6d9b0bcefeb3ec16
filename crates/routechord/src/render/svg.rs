//! Minimal SVG chord-diagram backend.
//!
//! Nodes are placed as equal arcs on a circle; edges are drawn as quadratic
//! curves pulled through the center. This is intentionally the simplest
//! layout that produces a readable diagram; anything fancier belongs in an
//! external engine.

use std::collections::HashMap;
use std::f64::consts::TAU;
use std::fmt::Write as _;

use tracing::debug;

use crate::chord::ChordGraph;
use crate::config::RenderConfig;
use crate::error::{Error, Result};
use crate::render::{palette, Renderer};

/// Fraction of the circle left as a gap between adjacent node arcs.
const ARC_GAP_FRACTION: f64 = 0.1;

/// Arc stroke width as a fraction of the radius.
const ARC_STROKE_FRACTION: f64 = 0.06;

/// Maximum edge stroke width as a fraction of the radius.
const EDGE_STROKE_FRACTION: f64 = 0.04;

/// The bundled SVG backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgRenderer;

impl SvgRenderer {
    /// Create the SVG backend.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

/// Angular placement of one node on the circle.
struct NodeArc {
    start: f64,
    end: f64,
}

impl NodeArc {
    fn midpoint(&self) -> f64 {
        (self.start + self.end) / 2.0
    }
}

fn point_on_circle(center: f64, radius: f64, angle: f64) -> (f64, f64) {
    (
        center + radius * angle.cos(),
        center + radius * angle.sin(),
    )
}

impl Renderer for SvgRenderer {
    fn name(&self) -> &'static str {
        "svg"
    }

    fn render(&self, graph: &ChordGraph, style: &RenderConfig) -> Result<String> {
        let size = f64::from(style.size);
        let center = size / 2.0;
        let radius = size * 0.38;
        let node_palette = palette::lookup(&style.cmap)
            .ok_or_else(|| Error::render("svg", format!("unknown palette '{}'", style.cmap)))?;
        let edge_palette = palette::lookup(&style.edge_cmap)
            .ok_or_else(|| Error::render("svg", format!("unknown palette '{}'", style.edge_cmap)))?;

        // Equal arcs in node order, with a small gap between neighbors.
        let n = graph.nodes.len();
        let slot = if n == 0 { 0.0 } else { TAU / n as f64 };
        let gap = slot * ARC_GAP_FRACTION / 2.0;
        let mut arcs: HashMap<&str, (usize, NodeArc)> = HashMap::with_capacity(n);
        for (i, node) in graph.nodes.iter().enumerate() {
            let start = i as f64 * slot + gap;
            let end = (i + 1) as f64 * slot - gap;
            arcs.insert(node.id.as_str(), (i, NodeArc { start, end }));
        }

        let max_value = graph.edges.iter().map(|e| e.value).max().unwrap_or(1).max(1);

        let mut out = String::new();
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}">"#
        );
        let _ = writeln!(
            out,
            r#"<rect width="{size}" height="{size}" fill="white"/>"#
        );

        // Edges underneath the node arcs.
        for (i, edge) in graph.edges.iter().enumerate() {
            let (_, src) = arcs
                .get(edge.source.as_str())
                .ok_or_else(|| Error::render("svg", format!("edge references unknown node '{}'", edge.source)))?;
            let (_, dst) = arcs
                .get(edge.target.as_str())
                .ok_or_else(|| Error::render("svg", format!("edge references unknown node '{}'", edge.target)))?;

            let (x1, y1) = point_on_circle(center, radius, src.midpoint());
            let (x2, y2) = point_on_circle(center, radius, dst.midpoint());
            #[allow(clippy::cast_precision_loss)]
            let weight = edge.value as f64 / max_value as f64;
            let width = (radius * EDGE_STROKE_FRACTION * weight).max(0.5);
            let color = palette::color_for(edge_palette, i);

            let _ = writeln!(
                out,
                r#"<path d="M {x1:.2} {y1:.2} Q {center:.2} {center:.2} {x2:.2} {y2:.2}" fill="none" stroke="{color}" stroke-width="{width:.2}" stroke-opacity="0.6"/>"#
            );
        }

        // Node arcs and labels.
        let arc_width = radius * ARC_STROKE_FRACTION;
        let label_radius = radius + arc_width * 1.5;
        for node in &graph.nodes {
            let (i, arc) = &arcs[node.id.as_str()];
            let (x1, y1) = point_on_circle(center, radius, arc.start);
            let (x2, y2) = point_on_circle(center, radius, arc.end);
            let large = i64::from(arc.end - arc.start > std::f64::consts::PI);
            let color = palette::color_for(node_palette, *i);

            let _ = writeln!(
                out,
                r#"<path d="M {x1:.2} {y1:.2} A {radius:.2} {radius:.2} 0 {large} 1 {x2:.2} {y2:.2}" fill="none" stroke="{color}" stroke-width="{arc_width:.2}"/>"#
            );

            let mid = arc.midpoint();
            let (lx, ly) = point_on_circle(center, label_radius, mid);
            let anchor = if mid.cos() < 0.0 { "end" } else { "start" };
            let _ = writeln!(
                out,
                r#"<text x="{lx:.2}" y="{ly:.2}" font-family="sans-serif" font-size="{:.1}" text-anchor="{anchor}" dominant-baseline="middle">{}</text>"#,
                size / 60.0,
                escape_text(&node.label)
            );
        }

        out.push_str("</svg>\n");
        debug!(
            "Rendered {} nodes and {} edges to SVG",
            graph.node_count(),
            graph.edge_count()
        );
        Ok(out)
    }
}

/// Escape the characters SVG text content cannot carry verbatim.
fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
