//! Route aggregation and busiest-airport ranking.
//!
//! This module implements the one non-trivial transformation in the pipeline:
//! grouping route records into per-pair counts and ranking airports by
//! outgoing route volume.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dataset::Route;

/// The number of route records sharing one (source, destination) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteCount {
    /// Identifier of the origin airport.
    pub source_id: String,
    /// Identifier of the destination airport.
    pub destination_id: String,
    /// Number of route records for this pair.
    pub count: u64,
}

/// An airport's total outgoing route volume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceVolume {
    /// Identifier of the origin airport.
    pub source_id: String,
    /// Number of route records originating here.
    pub count: u64,
}

/// Group routes by (source, destination) and count rows per group.
///
/// The output is ordered by ascending (source, destination) key, so repeated
/// runs over the same data produce identical tables.
#[must_use]
pub fn count_routes(routes: &[Route]) -> Vec<RouteCount> {
    let mut groups: HashMap<(&str, &str), u64> = HashMap::new();
    for route in routes {
        *groups
            .entry((route.source_id.as_str(), route.destination_id.as_str()))
            .or_insert(0) += 1;
    }

    let mut counts: Vec<RouteCount> = groups
        .into_iter()
        .map(|((source_id, destination_id), count)| RouteCount {
            source_id: source_id.to_string(),
            destination_id: destination_id.to_string(),
            count,
        })
        .collect();
    counts.sort_by(|a, b| {
        (a.source_id.as_str(), a.destination_id.as_str())
            .cmp(&(b.source_id.as_str(), b.destination_id.as_str()))
    });

    debug!("Aggregated {} routes into {} pairs", routes.len(), counts.len());
    counts
}

/// Rank airports by total outgoing route count and keep the top `n`.
///
/// The result is ordered by descending outgoing count and has length
/// `min(n, distinct source ids)`. Ties resolve by ascending airport id,
/// the stable order of the grouped keys.
#[must_use]
pub fn busiest_sources(routes: &[Route], n: usize) -> Vec<SourceVolume> {
    let mut groups: HashMap<&str, u64> = HashMap::new();
    for route in routes {
        *groups.entry(route.source_id.as_str()).or_insert(0) += 1;
    }

    let mut volumes: Vec<SourceVolume> = groups
        .into_iter()
        .map(|(source_id, count)| SourceVolume {
            source_id: source_id.to_string(),
            count,
        })
        .collect();
    // Sort keys first so the stable sort by count leaves ties in key order.
    volumes.sort_by(|a, b| a.source_id.cmp(&b.source_id));
    volumes.sort_by(|a, b| b.count.cmp(&a.count));
    volumes.truncate(n);

    debug!("Selected {} busiest airports", volumes.len());
    volumes
}
