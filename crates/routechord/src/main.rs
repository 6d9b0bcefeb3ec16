//! `rchord` - CLI for routechord
//!
//! This binary runs the load/aggregate/select/render pipeline and the
//! supporting configuration commands.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::collections::HashSet;
use std::path::PathBuf;

use clap::Parser;

use routechord::aggregate::{busiest_sources, count_routes};
use routechord::chord::{ChordGraph, SelectionMode};
use routechord::cli::{Cli, Command, ConfigCommand, RenderCommand, RenderFormat, StatsCommand};
use routechord::dataset::{Dataset, DatasetSource, JsonFileSource, SampleSource};
use routechord::render::{JsonRenderer, Renderer, SvgRenderer};
use routechord::{init_logging, Config, Error};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let config = Config::load_from(cli.config.clone())?;

    // Execute the command
    match cli.command {
        Command::Render(render_cmd) => handle_render(&config, &render_cmd),
        Command::Stats(stats_cmd) => handle_stats(&config, &stats_cmd),
        Command::Config(config_cmd) => handle_config(&config, config_cmd),
    }
}

/// Resolve the dataset source from CLI flags and configuration.
///
/// CLI paths win over configured paths; `--sample` (or no paths anywhere)
/// falls back to the built-in sample dataset.
fn load_dataset(
    config: &Config,
    routes: Option<&PathBuf>,
    airports: Option<&PathBuf>,
    sample: bool,
) -> Result<Dataset, Error> {
    if sample {
        return SampleSource::new().load();
    }

    let routes_path = routes.or(config.dataset.routes_path.as_ref());
    let airports_path = airports.or(config.dataset.airports_path.as_ref());

    match (routes_path, airports_path) {
        (Some(r), Some(a)) => JsonFileSource::new(r, a).load(),
        (None, None) => SampleSource::new().load(),
        (Some(_), None) => Err(Error::dataset_missing(
            "airports",
            "pass --airports or set dataset.airports_path",
        )),
        (None, Some(_)) => Err(Error::dataset_missing(
            "routes",
            "pass --routes or set dataset.routes_path",
        )),
    }
}

/// Run the full pipeline: aggregate, rank, select.
fn build_chord(dataset: &Dataset, top_n: usize, mode: SelectionMode) -> ChordGraph {
    let counts = count_routes(&dataset.routes);
    let graph = ChordGraph::from_counts(&counts, dataset);

    let busiest: HashSet<String> = busiest_sources(&dataset.routes, top_n)
        .into_iter()
        .map(|v| v.source_id)
        .collect();

    graph.select_nodes(&busiest, mode)
}

fn handle_render(config: &Config, cmd: &RenderCommand) -> Result<(), Box<dyn std::error::Error>> {
    let dataset = load_dataset(config, cmd.routes.as_ref(), cmd.airports.as_ref(), cmd.sample)?;

    let top_n = cmd.top.unwrap_or(config.aggregate.top_n);
    let mode = cmd
        .selection_mode
        .map_or(config.aggregate.selection_mode, Into::into);
    let selected = build_chord(&dataset, top_n, mode);

    let mut style = config.render.clone();
    if let Some(size) = cmd.size {
        style.size = size;
    }

    let output = match cmd.format {
        RenderFormat::Svg => SvgRenderer::new().render(&selected, &style)?,
        RenderFormat::Json => JsonRenderer::new().render(&selected, &style)?,
    };

    match cmd.output.as_ref().or(style.output_path.as_ref()) {
        Some(path) => {
            std::fs::write(path, &output).map_err(|source| Error::OutputWrite {
                path: path.clone(),
                source,
            })?;
            eprintln!("Wrote {}", path.display());
        }
        None => print!("{output}"),
    }
    Ok(())
}

fn handle_stats(config: &Config, cmd: &StatsCommand) -> Result<(), Box<dyn std::error::Error>> {
    let dataset = load_dataset(config, cmd.routes.as_ref(), cmd.airports.as_ref(), cmd.sample)?;

    let top_n = cmd.top.unwrap_or(config.aggregate.top_n);
    let busiest = busiest_sources(&dataset.routes, top_n);
    let index = dataset.airport_index();

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&busiest)?);
    } else {
        println!(
            "Busiest airports by outgoing routes ({} routes, {} airports)",
            dataset.route_count(),
            dataset.airports.len()
        );
        println!("--------------------------------------------------------");
        for (rank, volume) in busiest.iter().enumerate() {
            let city = index
                .get(volume.source_id.as_str())
                .map_or(volume.source_id.as_str(), |a| a.city.as_str());
            println!(
                "{:>3}. {:<6} {:<24} {:>6}",
                rank + 1,
                volume.source_id,
                city,
                volume.count
            );
        }
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Dataset]");
                println!(
                    "  Routes path:    {}",
                    config
                        .dataset
                        .routes_path
                        .as_ref()
                        .map_or("(built-in sample)".to_string(), |p| p.display().to_string())
                );
                println!(
                    "  Airports path:  {}",
                    config
                        .dataset
                        .airports_path
                        .as_ref()
                        .map_or("(built-in sample)".to_string(), |p| p.display().to_string())
                );
                println!();
                println!("[Aggregate]");
                println!("  Top N:          {}", config.aggregate.top_n);
                println!("  Selection mode: {}", config.aggregate.selection_mode);
                println!();
                println!("[Render]");
                println!("  Size:           {}", config.render.size);
                println!("  Node palette:   {}", config.render.cmap);
                println!("  Edge palette:   {}", config.render.edge_cmap);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
