//! `tapgrid`: headless host for the launcher core.
//!
//! Lists the catalog, prints the layout (or a full render frame as JSON) and
//! simulates taps, so the core can be driven without a display server.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tapgrid_core::config::ConfigLoader;
use tapgrid_core::logging::{init_logging, init_minimal_logging};
use tapgrid_core::utils::paths;
use tapgrid_core::TapgridConfig;
use tapgrid_system::{LauncherContext, PointerEvent};
use tracing::{error, warn};

#[derive(Parser, Debug)]
#[command(name = "tapgrid", version)]
#[command(about = "Touchscreen application launcher core")]
struct Cli {
    /// User configuration file to use instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List discovered applications with their icon and command
    List,

    /// Print the grid layout for a viewport
    Layout {
        #[arg(long)]
        width: Option<u32>,
        #[arg(long)]
        height: Option<u32>,
        /// Print the full render frame as JSON
        #[arg(long)]
        json: bool,
    },

    /// Simulate a tap release at X,Y and launch what it hits
    Tap {
        x: i32,
        y: i32,
        #[arg(long)]
        width: Option<u32>,
        #[arg(long)]
        height: Option<u32>,
        /// Report the hit without launching
        #[arg(long)]
        dry_run: bool,
    },
}

fn load_config(user_path: Option<&PathBuf>) -> TapgridConfig {
    let loaded = match user_path {
        Some(path) => {
            let system = paths::get_system_config_path_with_override();
            ConfigLoader::load_from_paths(Some(system.as_path()), Some(path.as_path()))
        }
        None => ConfigLoader::load(),
    };
    match loaded {
        Ok(config) => config,
        Err(e) => {
            init_minimal_logging();
            error!("Configuration loading failed, using defaults: {}", e);
            TapgridConfig::default()
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_ref());
    if let Err(e) = init_logging(&config.logging, false) {
        init_minimal_logging();
        warn!("Falling back to minimal logging: {}", e);
    }

    let mut context = LauncherContext::bootstrap(&config)
        .context("Failed to build the application catalog")?;

    match cli.command {
        Commands::List => {
            for (index, entry) in context.catalog().iter().enumerate() {
                let icon = context
                    .icons()
                    .resolve_icon(entry.icon_name())
                    .map(|path| path.display().to_string())
                    .unwrap_or_else(|| format!("<{}: not found>", entry.icon_name()));
                println!(
                    "{:>3}  {:<32} {:<48} {}",
                    index,
                    entry.name(),
                    icon,
                    entry.exec_command()
                );
            }
        }
        Commands::Layout { width, height, json } => {
            context.resize(
                width.unwrap_or(config.display.width),
                height.unwrap_or(config.display.height),
            );
            if json {
                println!("{}", serde_json::to_string_pretty(&context.frame())?);
            } else {
                let g = context.geometry();
                println!("viewport      {}x{}", g.viewport.width, g.viewport.height);
                println!("entries       {}", g.entry_count);
                println!("grid          {} columns x {} rows", g.columns, g.rows);
                println!("icon size     {}", g.icon_size);
                println!("padding       {}", g.padding);
                println!("label height  {}", g.label_height);
                println!("row offset    {}", g.row_extra_padding);
                println!("overflows     {}", g.overflows());
            }
        }
        Commands::Tap { x, y, width, height, dry_run } => {
            context.resize(
                width.unwrap_or(config.display.width),
                height.unwrap_or(config.display.height),
            );
            let event = PointerEvent::release(x, y);
            if dry_run {
                match context.resolve_tap(event.position) {
                    Some(request) => println!("{} -> {}", request.name, request.command),
                    None => println!("no entry at ({}, {})", x, y),
                }
            } else {
                match context.handle_pointer_event(event) {
                    Some(Ok(handle)) => println!("launched pid {}", handle.pid),
                    Some(Err(e)) => println!("launch failed: {}", e),
                    None => println!("no entry at ({}, {})", x, y),
                }
            }
        }
    }

    Ok(())
}
