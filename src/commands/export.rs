//! Export Command
//!
//! Implements `cmap export`: one CSV file per requested colormap.

use std::path::PathBuf;

use anyhow::{bail, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::Config;
use crate::export::{ChannelFormat, ExportOptions, Exporter};

/// Options for the export command
#[derive(Debug, Clone, Default)]
pub struct ExportCommandOptions {
    /// Colormaps to export
    pub names: Vec<String>,
    /// Output stem, only valid with a single colormap
    pub output: Option<PathBuf>,
    /// Output directory (overrides config)
    pub dir: Option<PathBuf>,
    /// Export every registered colormap
    pub all: bool,
    /// Fixed decimal places
    pub precision: Option<usize>,
    /// Include alpha column
    pub alpha: bool,
    /// Resample to this many entries
    pub levels: Option<usize>,
}

impl ExportCommandOptions {
    /// Merge these flags over the config's export settings
    pub fn export_options(&self, config: &Config) -> ExportOptions {
        let mut options = config.export_options();
        if self.precision.is_some() {
            options.format = ChannelFormat::from_precision(self.precision);
        }
        if self.alpha {
            options.include_alpha = true;
        }
        if self.levels.is_some() {
            options.levels = self.levels;
        }
        if let Some(dir) = &self.dir {
            options.output_dir = Some(dir.clone());
        }
        options
    }
}

/// Execute the export command
pub fn execute_export(options: ExportCommandOptions, config: Config) -> Result<()> {
    let registry = config.registry()?;
    let export_options = options.export_options(&config);

    let names: Vec<String> = if options.all {
        registry.names().into_iter().map(String::from).collect()
    } else {
        options.names.clone()
    };

    if names.is_empty() {
        bail!("No colormap given. Pass one or more names, or --all");
    }
    if options.output.is_some() && names.len() != 1 {
        bail!("--output can only be used when exporting a single colormap");
    }

    // Create output directory if needed
    if let Some(dir) = &export_options.output_dir {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            std::fs::create_dir_all(dir)?;
        }
    }

    let exporter = Exporter::new(registry, export_options);

    if let [name] = names.as_slice() {
        let stem = options.output.clone().unwrap_or_else(|| PathBuf::from(name));
        println!("{} Exporting {}...", style("→").cyan(), name);
        let summary = exporter.export(name, &stem)?;
        println!(
            "{} Wrote {} ({} entries)",
            style("✓").green(),
            summary.path.display(),
            summary.entries
        );
        return Ok(());
    }

    println!("{} Exporting {} colormaps...", style("→").cyan(), names.len());

    let progress = ProgressBar::new(names.len() as u64);
    progress.set_style(
        ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    let results = exporter.export_all(&names, |name| {
        progress.set_message(name.to_string());
        progress.inc(1);
    });
    progress.finish_and_clear();

    let mut failed = 0;
    for (name, result) in &results {
        match result {
            Ok(summary) => println!(
                "{} {} -> {} ({} entries)",
                style("✓").green(),
                name,
                summary.path.display(),
                summary.entries
            ),
            Err(e) => {
                failed += 1;
                eprintln!("{} {}: {}", style("✗").red(), name, e);
            }
        }
    }

    if failed > 0 {
        bail!("{} of {} exports failed", failed, results.len());
    }

    println!("{} Exported {} colormaps", style("✓").green(), results.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let config = Config {
            precision: Some(3),
            levels: Some(8),
            ..Config::default()
        };
        let options = ExportCommandOptions {
            precision: Some(5),
            alpha: true,
            dir: Some(PathBuf::from("out")),
            ..ExportCommandOptions::default()
        };

        let merged = options.export_options(&config);
        assert_eq!(merged.format, ChannelFormat::Fixed(5));
        assert!(merged.include_alpha);
        assert_eq!(merged.levels, Some(8));
        assert_eq!(merged.output_dir, Some(PathBuf::from("out")));
    }

    #[test]
    fn test_output_requires_single_name() {
        let options = ExportCommandOptions {
            names: vec!["viridis".to_string(), "magma".to_string()],
            output: Some(PathBuf::from("one")),
            ..ExportCommandOptions::default()
        };
        assert!(execute_export(options, Config::default()).is_err());
    }

    #[test]
    fn test_requires_a_name() {
        assert!(execute_export(ExportCommandOptions::default(), Config::default()).is_err());
    }
}
