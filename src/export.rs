//! Colormap CSV export.
//!
//! One line per colormap entry, in index order: `red,green,blue\n`.
//! No header, no quoting. The colormap is resolved before the output file
//! is created, so an unknown name never leaves a file behind.

use std::collections::HashSet;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::colormap::Colormap;
use crate::error::{CmapError, Result};
use crate::registry::ColormapRegistry;

/// How channel values are rendered as text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChannelFormat {
    /// Shortest decimal that reads back to the same value (`0.267004`, `1.0`)
    #[default]
    Shortest,
    /// Fixed number of digits after the decimal point
    Fixed(usize),
}

impl ChannelFormat {
    pub fn from_precision(precision: Option<usize>) -> Self {
        precision.map_or(ChannelFormat::Shortest, ChannelFormat::Fixed)
    }

    pub fn format(&self, value: f64) -> String {
        match self {
            ChannelFormat::Shortest => {
                // Display never switches to exponent notation
                let s = value.to_string();
                if s.contains('.') || !value.is_finite() {
                    s
                } else {
                    s + ".0"
                }
            }
            ChannelFormat::Fixed(digits) => format!("{:.*}", digits, value),
        }
    }
}

/// Export settings; the defaults write plain `r,g,b` lines
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExportOptions {
    pub format: ChannelFormat,
    /// Append alpha as a fourth field
    pub include_alpha: bool,
    /// Resample to this many entries before writing
    pub levels: Option<usize>,
    /// Directory output stems are resolved against
    pub output_dir: Option<PathBuf>,
}

/// What a finished export produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub name: String,
    pub path: PathBuf,
    pub entries: usize,
}

/// `<stem>.csv`, appending rather than replacing any extension
pub fn csv_path(stem: impl AsRef<Path>) -> PathBuf {
    let mut path = stem.as_ref().as_os_str().to_owned();
    path.push(".csv");
    PathBuf::from(path)
}

/// Write every entry of `colormap` as one CSV line. Returns the line count.
pub fn write_csv<W: Write>(colormap: &Colormap, writer: W, options: &ExportOptions) -> io::Result<usize> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    let mut lines = 0;
    for color in colormap.colors() {
        let mut record = vec![
            options.format.format(color.r),
            options.format.format(color.g),
            options.format.format(color.b),
        ];
        if options.include_alpha {
            record.push(options.format.format(color.a));
        }
        wtr.write_record(&record)?;
        lines += 1;
    }

    wtr.flush()?;
    Ok(lines)
}

/// Resolves colormaps from a registry and writes them to CSV files
#[derive(Debug, Clone)]
pub struct Exporter {
    registry: ColormapRegistry,
    options: ExportOptions,
}

impl Exporter {
    pub fn new(registry: ColormapRegistry, options: ExportOptions) -> Self {
        Self { registry, options }
    }

    /// Built-in registry, default options
    pub fn with_builtin() -> Result<Self> {
        Ok(Self::new(ColormapRegistry::builtin()?, ExportOptions::default()))
    }

    pub fn options(&self) -> &ExportOptions {
        &self.options
    }

    /// Look up `name` and apply the configured resampling
    pub fn resolve(&self, name: &str) -> Result<Colormap> {
        let colormap = self.registry.get(name)?;
        match self.options.levels {
            Some(levels) => colormap.resampled(levels),
            None => Ok(colormap),
        }
    }

    pub fn output_path(&self, stem: impl AsRef<Path>) -> PathBuf {
        let file = csv_path(stem);
        match &self.options.output_dir {
            Some(dir) => dir.join(file),
            None => file,
        }
    }

    /// Export colormap `name` to `<stem>.csv`
    pub fn export(&self, name: &str, stem: impl AsRef<Path>) -> Result<ExportSummary> {
        let colormap = self.resolve(name)?;
        let path = self.output_path(stem);

        tracing::debug!("Writing {} entries of '{}' to {}", colormap.len(), name, path.display());

        let file = File::create(&path).map_err(|e| CmapError::io(&path, e))?;
        let entries = write_csv(&colormap, file, &self.options).map_err(|e| CmapError::io(&path, e))?;

        tracing::info!("Exported '{}' ({} entries) to {}", name, entries, path.display());

        Ok(ExportSummary {
            name: name.to_string(),
            path,
            entries,
        })
    }

    /// Export each name to `<name>.csv`, in parallel.
    ///
    /// Duplicate names are exported once. `on_done` runs after each export
    /// finishes, successful or not. Results keep the input order.
    pub fn export_all<S, F>(&self, names: &[S], on_done: F) -> Vec<(String, Result<ExportSummary>)>
    where
        S: AsRef<str> + Sync,
        F: Fn(&str) + Sync,
    {
        let mut seen = HashSet::new();
        let unique: Vec<&str> = names
            .iter()
            .map(|name| AsRef::<str>::as_ref(name))
            .filter(|name| seen.insert(*name))
            .collect();

        unique
            .par_iter()
            .map(|name| {
                let result = self.export(name, name);
                if let Err(e) = &result {
                    tracing::warn!("Export of '{}' failed: {}", name, e);
                }
                on_done(name);
                (name.to_string(), result)
            })
            .collect()
    }
}

/// Export colormap `name` from the built-in registry to `<stem>.csv`
pub fn export(name: &str, stem: impl AsRef<Path>) -> Result<PathBuf> {
    Exporter::with_builtin()?.export(name, stem).map(|summary| summary.path)
}
