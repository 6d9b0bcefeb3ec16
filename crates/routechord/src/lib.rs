//! `routechord` - Chord diagrams for airline route data
//!
//! This library provides the core pipeline for loading route and airport
//! tables, aggregating route counts, ranking airports by outgoing volume,
//! and rendering the filtered chord graph.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod aggregate;
pub mod chord;
pub mod cli;
pub mod config;
pub mod dataset;
pub mod error;
pub mod logging;
pub mod render;

pub use aggregate::{busiest_sources, count_routes, RouteCount, SourceVolume};
pub use chord::{ChordGraph, SelectionMode};
pub use config::Config;
pub use dataset::{Dataset, DatasetSource};
pub use error::{Error, Result};
pub use logging::init_logging;
pub use render::Renderer;
