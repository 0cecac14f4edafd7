//! Command-line inspector for mapx grid definitions.
//!
//! Reads `.gpd` / `.mpp` pairs from the definitions directory and prints the
//! resolved grid, or shows the built-in EPSG grid catalog.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use grid_common::{grids, EpsgCode};
use mapx::{DefinitionsDir, MapxConfig};
use std::path::PathBuf;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "gpdinfo")]
#[command(about = "Inspect mapx grid definitions", long_about = None)]
struct Cli {
    /// Definitions directory (overrides --config and MAPXPATH)
    #[arg(short, long, global = true)]
    definitions_dir: Option<PathBuf>,

    /// YAML configuration file with APP.MAPXPATH
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Parse, resolve and print a grid definition
    Show {
        /// Grid name, with or without the .gpd extension
        name: String,

        /// Print JSON instead of the text report
        #[arg(long)]
        json: bool,
    },

    /// List the grid-parameter files in the definitions directory
    List,

    /// Print grids from the built-in EPSG catalog
    Catalog {
        /// Only show the grid with this name
        name: Option<String>,

        /// Only show grids in this CRS (e.g. EPSG:3408)
        #[arg(long, conflicts_with = "name")]
        epsg: Option<EpsgCode>,
    },
}

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(&cli.log_level, cli.json_logs)?;

    match &cli.command {
        Commands::Show { name, json } => {
            let dir = definitions_dir(&cli)?;
            let grid = dir
                .load(name)
                .with_context(|| format!("Failed to load grid '{}'", name))?;
            if *json {
                println!("{}", serde_json::to_string_pretty(&grid)?);
            } else {
                print!("{}", grid);
                let bbox = grid.bbox();
                println!(
                    "Extent:                             [{:.2}, {:.2}, {:.2}, {:.2}] ; meters",
                    bbox.min_x, bbox.min_y, bbox.max_x, bbox.max_y
                );
            }
        }
        Commands::List => {
            let dir = definitions_dir(&cli)?;
            let names = dir
                .list_grids()
                .with_context(|| format!("Failed to list {}", dir.root().display()))?;
            for name in names {
                println!("{}", name);
            }
        }
        Commands::Catalog { name, epsg } => {
            let selected = match (name, epsg) {
                (Some(name), _) => vec![grids::by_name(name)
                    .with_context(|| format!("No catalog grid named '{}'", name))?],
                (None, Some(code)) => grids::by_epsg(*code),
                (None, None) => grids::all().to_vec(),
            };
            for grid in selected {
                println!(
                    "{:<45} {:<10} {:<50} {:>5} x {:<5} cell {:>10.2} x {:<10.2} upper-left ({:.2}, {:.2})",
                    grid.name,
                    grid.epsg.to_string(),
                    grid.epsg.name(),
                    grid.cols,
                    grid.rows,
                    grid.cell_width,
                    grid.cell_height,
                    grid.upper_left_x,
                    grid.upper_left_y
                );
            }
        }
    }

    Ok(())
}

/// Resolve the definitions directory: flag, then config file, then MAPXPATH.
fn definitions_dir(cli: &Cli) -> Result<DefinitionsDir> {
    let config = if let Some(dir) = &cli.definitions_dir {
        MapxConfig::new(dir)
    } else if let Some(path) = &cli.config {
        MapxConfig::from_yaml(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?
    } else {
        MapxConfig::from_env().context("No definitions directory given")?
    };
    debug!(dir = %config.definitions_dir.display(), "Using definitions directory");
    Ok(DefinitionsDir::from_config(&config))
}

fn init_tracing(log_level: &str, json: bool) -> Result<()> {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr);

    if json {
        tracing::subscriber::set_global_default(builder.json().finish())?;
    } else {
        tracing::subscriber::set_global_default(builder.finish())?;
    }
    Ok(())
}
