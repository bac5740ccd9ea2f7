//! Show Command
//!
//! Implements `cmap show`: the CSV `cmap export` would write, on stdout.

use std::io::{self, Write};

use anyhow::Result;

use crate::config::Config;
use crate::export::{write_csv, ChannelFormat, Exporter};

/// Options for the show command
#[derive(Debug, Clone, Default)]
pub struct ShowOptions {
    /// Colormap to print
    pub name: String,
    /// Fixed decimal places
    pub precision: Option<usize>,
    /// Include alpha column
    pub alpha: bool,
    /// Resample to this many entries
    pub levels: Option<usize>,
}

/// Write the CSV for `options.name` to `out`
pub fn show_to<W: Write>(options: &ShowOptions, config: &Config, out: W) -> Result<usize> {
    let mut export_options = config.export_options();
    if options.precision.is_some() {
        export_options.format = ChannelFormat::from_precision(options.precision);
    }
    if options.alpha {
        export_options.include_alpha = true;
    }
    if options.levels.is_some() {
        export_options.levels = options.levels;
    }

    let exporter = Exporter::new(config.registry()?, export_options);
    let colormap = exporter.resolve(&options.name)?;
    Ok(write_csv(&colormap, out, exporter.options())?)
}

/// Execute the show command
pub fn execute_show(options: ShowOptions, config: &Config) -> Result<()> {
    let stdout = io::stdout();
    show_to(&options, config, stdout.lock())?;
    Ok(())
}
