//! tripgraph - batch chart generation for ride-hailing trip records

use anyhow::Result;
use clap::Parser;
use tracing::info;

use tripgraph_cli::run_pipeline;
use tripgraph_common::logging;
use tripgraph_config::ConfigLoader;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<String>,

    /// Input CSV file of trip records (overrides the configured path)
    #[arg(short, long)]
    data: Option<String>,

    /// Output directory for rendered charts (overrides the configured path)
    #[arg(short, long)]
    out: Option<String>,

    /// Log level
    #[arg(short, long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load()?,
    };
    if let Some(data) = args.data {
        config.data.file = data;
    }
    if let Some(out) = args.out {
        config.chart.output_dir = out;
    }
    if let Some(level) = args.log_level {
        config.logging.level = level;
    }

    logging::init_logging(logging::LoggingConfig {
        level: config.logging.level.clone(),
        colored: config.logging.colored,
        file_path: config.logging.file.clone(),
        include_targets: true,
    })
    .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))?;

    info!(data = %config.data.file, "starting tripgraph");
    let report = run_pipeline(&config)?;
    info!(
        rows = report.rows,
        charts = 3,
        out_dir = %config.chart.output_dir,
        "pipeline finished"
    );

    Ok(())
}
