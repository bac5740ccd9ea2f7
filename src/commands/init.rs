//! Init Command
//!
//! Implements `cmap init`: writes a config file with export defaults.

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};

use crate::config::Config;

/// Options for the init command
#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    /// Config file to create
    pub config_path: PathBuf,
    /// Force overwrite existing config
    pub force: bool,
    /// Skip interactive prompts
    pub yes: bool,
}

/// Execute the init command
pub fn execute_init(options: InitOptions) -> Result<()> {
    let config_path = &options.config_path;

    if config_path.exists() && !options.force {
        bail!(
            "Config file {} already exists. Use --force to overwrite.",
            config_path.display()
        );
    }

    let mut config = Config::default();
    if !options.yes {
        run_interactive_init(&mut config)?;
    }

    write_config(&config, config_path)?;

    println!("\n{}", style("Next steps:").bold());
    println!("  1. Run {} to see available colormaps", style("cmap list").cyan());
    println!("  2. Run {} to write a CSV", style("cmap export viridis").cyan());

    Ok(())
}

/// Save `config`, creating its output directory when it does not exist yet
pub fn write_config(config: &Config, config_path: &Path) -> Result<()> {
    if !config.output_dir.exists() {
        std::fs::create_dir_all(&config.output_dir)?;
        println!(
            "{} Created {}/ directory",
            style("✓").green(),
            config.output_dir.display()
        );
    }

    config.save(config_path)?;
    println!("{} Created {}", style("✓").green(), config_path.display());
    Ok(())
}

fn run_interactive_init(config: &mut Config) -> Result<()> {
    println!("{} Colormap export setup\n", style("→").cyan());

    let theme = ColorfulTheme::default();

    let output_dir: String = Input::with_theme(&theme)
        .with_prompt("Output directory")
        .default(config.output_dir.display().to_string())
        .interact_text()?;
    config.output_dir = PathBuf::from(output_dir.trim());

    let fixed = Confirm::with_theme(&theme)
        .with_prompt("Write a fixed number of decimal places?")
        .default(false)
        .interact()?;
    if fixed {
        let digits: usize = Input::with_theme(&theme)
            .with_prompt("Decimal places")
            .default(6)
            .interact_text()?;
        config.precision = Some(digits);
    }

    config.include_alpha = Confirm::with_theme(&theme)
        .with_prompt("Include an alpha column?")
        .default(false)
        .interact()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_config_creates_output_dir() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join(".cmap.config.json");
        let config = Config {
            output_dir: temp.path().join("maps"),
            ..Config::default()
        };

        write_config(&config, &config_path).unwrap();

        assert!(temp.path().join("maps").is_dir());
        assert_eq!(Config::load(&config_path).unwrap(), config);
    }

    #[test]
    fn test_init_non_interactive() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("fresh.json");

        execute_init(InitOptions {
            config_path: config_path.clone(),
            force: false,
            yes: true,
        })
        .unwrap();

        assert_eq!(Config::load(&config_path).unwrap(), Config::default());
    }

    #[test]
    fn test_init_keeps_existing_config_without_force() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join(".cmap.config.json");
        std::fs::write(&config_path, r#"{"levels": 8}"#).unwrap();

        let err = execute_init(InitOptions {
            config_path: config_path.clone(),
            force: false,
            yes: true,
        })
        .unwrap_err();

        assert!(err.to_string().contains("already exists"));
        assert_eq!(
            std::fs::read_to_string(&config_path).unwrap(),
            r#"{"levels": 8}"#
        );
    }

    #[test]
    fn test_init_force_overwrites() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join(".cmap.config.json");
        std::fs::write(&config_path, r#"{"levels": 8}"#).unwrap();

        execute_init(InitOptions {
            config_path: config_path.clone(),
            force: true,
            yes: true,
        })
        .unwrap();

        assert_eq!(Config::load(&config_path).unwrap(), Config::default());
    }
}
