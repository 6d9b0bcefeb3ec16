//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use crate::chord::SelectionMode;

/// Render command arguments.
#[derive(Debug, Args)]
pub struct RenderCommand {
    /// Path to the routes dataset (JSON array)
    #[arg(long, value_name = "FILE")]
    pub routes: Option<PathBuf>,

    /// Path to the airports dataset (JSON array)
    #[arg(long, value_name = "FILE")]
    pub airports: Option<PathBuf>,

    /// Use the built-in sample dataset
    #[arg(long, conflicts_with_all = ["routes", "airports"])]
    pub sample: bool,

    /// Number of busiest airports to keep
    #[arg(short, long, value_name = "N", value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
    pub top: Option<usize>,

    /// How edges are filtered once the busiest nodes are chosen
    #[arg(short = 'm', long, value_enum)]
    pub selection_mode: Option<SelectionModeArg>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "svg")]
    pub format: RenderFormat,

    /// Write output to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output image size in pixels
    #[arg(long, value_name = "PIXELS", value_parser = clap::value_parser!(u32).range(1..))]
    pub size: Option<u32>,
}

/// Stats command arguments.
#[derive(Debug, Args)]
pub struct StatsCommand {
    /// Path to the routes dataset (JSON array)
    #[arg(long, value_name = "FILE")]
    pub routes: Option<PathBuf>,

    /// Path to the airports dataset (JSON array)
    #[arg(long, value_name = "FILE")]
    pub airports: Option<PathBuf>,

    /// Use the built-in sample dataset
    #[arg(long, conflicts_with_all = ["routes", "airports"])]
    pub sample: bool,

    /// Number of busiest airports to report
    #[arg(short, long, value_name = "N", value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
    pub top: Option<usize>,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Selection mode argument for node filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SelectionModeArg {
    /// Keep edges whose endpoints are both selected
    Nodes,
    /// Keep edges touching any selected node
    Edges,
}

impl From<SelectionModeArg> for SelectionMode {
    fn from(arg: SelectionModeArg) -> Self {
        match arg {
            SelectionModeArg::Nodes => Self::Nodes,
            SelectionModeArg::Edges => Self::Edges,
        }
    }
}

/// Output format for the render command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum RenderFormat {
    /// SVG image
    #[default]
    Svg,
    /// JSON plot description for an external engine
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_mode_arg_conversion() {
        assert_eq!(
            SelectionMode::from(SelectionModeArg::Nodes),
            SelectionMode::Nodes
        );
        assert_eq!(
            SelectionMode::from(SelectionModeArg::Edges),
            SelectionMode::Edges
        );
    }

    #[test]
    fn test_render_format_default() {
        assert_eq!(RenderFormat::default(), RenderFormat::Svg);
    }

    #[test]
    fn test_render_command_debug() {
        let cmd = RenderCommand {
            routes: None,
            airports: None,
            sample: true,
            top: Some(10),
            selection_mode: None,
            format: RenderFormat::Svg,
            output: None,
            size: None,
        };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("sample"));
    }

    #[test]
    fn test_stats_command_debug() {
        let cmd = StatsCommand {
            routes: None,
            airports: None,
            sample: true,
            top: None,
            json: true,
        };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("json"));
    }

    #[test]
    fn test_config_command_debug() {
        let cmd = ConfigCommand::Show { json: false };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("Show"));
    }

    #[test]
    fn test_selection_mode_arg_clone() {
        let arg = SelectionModeArg::Edges;
        let cloned = arg;
        assert_eq!(arg, cloned);
    }

    #[test]
    fn test_render_format_clone() {
        let format = RenderFormat::Json;
        let cloned = format;
        assert_eq!(format, cloned);
    }
}
