#![forbid(unsafe_code)]
//! cmap Command Line Interface

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

use cmap::commands::{
    execute_export, execute_init, execute_list, execute_show, ExportCommandOptions, InitOptions,
    ListOptions, ShowOptions,
};
use cmap::Config;

#[derive(Parser)]
#[command(name = "cmap")]
#[command(about = "Export named colormaps as CSV color tables")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, global = true, default_value = cmap::config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write colormaps to <name>.csv files
    Export {
        /// Colormaps to export (append _r for reversed)
        names: Vec<String>,

        /// Output path without the .csv suffix (single colormap only)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Directory to write into
        #[arg(long)]
        dir: Option<PathBuf>,

        /// Export every registered colormap
        #[arg(long, conflicts_with = "names")]
        all: bool,

        /// Fixed number of decimal places
        #[arg(long)]
        precision: Option<usize>,

        /// Add an alpha column
        #[arg(long)]
        alpha: bool,

        /// Resample to this many entries
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        levels: Option<u32>,
    },

    /// List available colormaps
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print a colormap as CSV to stdout
    Show {
        /// Colormap name
        name: String,

        /// Fixed number of decimal places
        #[arg(long)]
        precision: Option<usize>,

        /// Add an alpha column
        #[arg(long)]
        alpha: bool,

        /// Resample to this many entries
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        levels: Option<u32>,
    },

    /// Create a config file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,

        /// Skip interactive prompts
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: &Path) -> anyhow::Result<Config> {
    if path.exists() {
        Ok(Config::load(path)?)
    } else {
        tracing::debug!("No config at {}, using defaults", path.display());
        Ok(Config::default())
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        // Init writes the config, so it never reads one
        Commands::Init { force, yes } => {
            execute_init(InitOptions {
                config_path: cli.config,
                force,
                yes,
            })?;
        }

        Commands::Export { names, output, dir, all, precision, alpha, levels } => {
            let options = ExportCommandOptions {
                names,
                output,
                dir,
                all,
                precision,
                alpha,
                levels: levels.map(|l| l as usize),
            };
            execute_export(options, load_config(&cli.config)?)?;
        }

        Commands::List { json } => {
            execute_list(ListOptions { json }, &load_config(&cli.config)?)?;
        }

        Commands::Show { name, precision, alpha, levels } => {
            let options = ShowOptions {
                name,
                precision,
                alpha,
                levels: levels.map(|l| l as usize),
            };
            execute_show(options, &load_config(&cli.config)?)?;
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", style("✗").red(), e);
        std::process::exit(1);
    }
}
