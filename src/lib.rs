#![forbid(unsafe_code)]

//! # cmap
//!
//! Named colormaps exported as plain CSV color tables.
//!
//! ## Features
//!
//! - **Built-in colormaps**: perceptually uniform, sequential, diverging and
//!   qualitative tables plus procedural presets such as `jet`
//! - **Reversal**: any name with an `_r` suffix resolves to the reversed map
//! - **User definitions**: listed tables or gradients declared in
//!   `.cmap.config.json`
//! - **CSV output**: one `r,g,b` line per entry, optional alpha column
//!
//! ## Example
//!
//! ```rust,no_run
//! use cmap::{ExportOptions, Exporter, ColormapRegistry};
//!
//! fn main() -> cmap::Result<()> {
//!     // Writes viridis.csv with 256 lines
//!     cmap::export("viridis", "viridis")?;
//!
//!     let options = ExportOptions {
//!         include_alpha: true,
//!         levels: Some(16),
//!         ..ExportOptions::default()
//!     };
//!     let exporter = Exporter::new(ColormapRegistry::builtin()?, options);
//!     exporter.export("magma_r", "magma16")?;
//!
//!     Ok(())
//! }
//! ```

pub mod color;
pub mod colormap;
pub mod commands;
pub mod config;
pub mod error;
pub mod export;
pub mod gradient;
pub mod registry;

// Re-exports
pub use color::{ColorSpec, Rgba};
pub use colormap::{Colormap, ColormapKind, DEFAULT_LEVELS};
pub use config::Config;
pub use error::{CmapError, Result};
pub use export::{export, write_csv, ChannelFormat, ExportOptions, ExportSummary, Exporter};
pub use gradient::{CellGradient, ColorGradient, Preset, StopGradient};
pub use registry::{ColormapDef, ColormapRegistry};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
