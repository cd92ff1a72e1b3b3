use std::time::Instant;

use anyhow::Result;
use clap::Parser as ClapParser;
use itertools::Itertools;
use log::{debug, info, warn};
use qtcollide::io::export::export_report;
use qtcollide::io::import::Importer;
use qtcollide::io::svg::quadtree_to_svg;
use qtcollide_cli::config::CliConfig;
use qtcollide_cli::io;
use qtcollide_cli::io::cli::Cli;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            CliConfig::default()
        }
        Some(config_file) => io::read_json::<CliConfig>(&config_file)?,
    };

    info!("[MAIN] Successfully parsed CliConfig: {config:?}");

    let ext_scene = io::read_scene(&args.input_file)?;

    let start = Instant::now();
    let scene = Importer::new(config.qt_config).import_scene(&ext_scene)?;
    let report = export_report(&scene);
    info!(
        "[MAIN] indexed {} items in {} nodes (max depth reached: {}) in {:?}",
        report.n_indexed,
        report.n_nodes,
        scene.quadtree.root().max_depth_reached(),
        start.elapsed()
    );

    for (i, query) in report.queries.iter().enumerate() {
        info!(
            "[MAIN] query #{i} {:?}: {} hits",
            query.area,
            query.hits.len()
        );
        debug!("[MAIN] query #{i} hits: [{}]", query.hits.iter().join(", "));
    }

    info!(
        "[MAIN] broad-phase: {} candidate pairs, {} colliding",
        report.candidate_pairs.len(),
        report.colliding_pairs.len()
    );

    if let Some(report_file) = &args.report_file {
        io::write_json(&report, report_file)?;
    }

    if let Some(svg_file) = &args.svg_file {
        let title = args
            .input_file
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let svg = quadtree_to_svg(
            &scene.quadtree,
            &scene.shapes,
            &scene.entries,
            config.svg_draw_options,
            &title,
        );
        io::write_svg(&svg, svg_file)?;
    }

    Ok(())
}
