//! Project configuration loading and defaults.
//!
//! Read from `.cmap.config.json` unless `--config` points elsewhere. CLI
//! flags override the values found here.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::CmapError;
use crate::export::{ChannelFormat, ExportOptions};
use crate::registry::{ColormapDef, ColormapRegistry};

/// Default config file location
pub const DEFAULT_CONFIG_PATH: &str = ".cmap.config.json";

fn default_version() -> String {
    "1.0.0".to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn is_default_output_dir(p: &Path) -> bool {
    p == Path::new(".")
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Config format version
    #[serde(default = "default_version")]
    pub version: String,

    /// Directory exported CSV files are written to
    #[serde(default = "default_output_dir", skip_serializing_if = "is_default_output_dir")]
    pub output_dir: PathBuf,

    /// Fixed decimal places for channel values (shortest form when absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precision: Option<usize>,

    /// Write alpha as a fourth column
    #[serde(default)]
    pub include_alpha: bool,

    /// Resample every exported colormap to this many entries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub levels: Option<usize>,

    /// Additional colormaps; a definition replaces a built-in of the same name
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub colormaps: Vec<ColormapDef>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            output_dir: default_output_dir(),
            precision: None,
            include_alpha: false,
            levels: None,
            colormaps: Vec::new(),
        }
    }
}

impl Config {
    /// Load config from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| CmapError::io(path, e))?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save config to a file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> crate::Result<()> {
        let path = path.as_ref();
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|e| CmapError::io(path, e))?;
        Ok(())
    }

    /// Export settings described by this config
    pub fn export_options(&self) -> ExportOptions {
        ExportOptions {
            format: ChannelFormat::from_precision(self.precision),
            include_alpha: self.include_alpha,
            levels: self.levels,
            output_dir: if is_default_output_dir(&self.output_dir) {
                None
            } else {
                Some(self.output_dir.clone())
            },
        }
    }

    /// Built-in colormaps plus the ones defined here
    pub fn registry(&self) -> crate::Result<ColormapRegistry> {
        ColormapRegistry::with_user_definitions(&self.colormaps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_export_options() {
        let options = Config::default().export_options();
        assert_eq!(options, ExportOptions::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(DEFAULT_CONFIG_PATH);

        let config = Config {
            output_dir: PathBuf::from("maps"),
            precision: Some(6),
            include_alpha: true,
            ..Config::default()
        };
        config.save(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"outputDir\": \"maps\""));
        assert!(content.contains("\"includeAlpha\": true"));

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded, config);

        let options = loaded.export_options();
        assert_eq!(options.format, ChannelFormat::Fixed(6));
        assert_eq!(options.output_dir, Some(PathBuf::from("maps")));
    }

    #[test]
    fn test_load_with_colormaps() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("custom.json");
        std::fs::write(
            &path,
            r##"{
                "levels": 64,
                "colormaps": [
                    {"name": "sea", "kind": "gradient", "colors": ["#000033", "#3399ff"]}
                ]
            }"##,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.version, "1.0.0");
        assert_eq!(config.levels, Some(64));

        let registry = config.registry().unwrap();
        assert!(registry.contains("sea"));
        assert!(registry.contains("viridis"));
    }

    #[test]
    fn test_malformed_file_is_reported() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(DEFAULT_CONFIG_PATH);
        std::fs::write(&path, r#"{"precision": "six""#).unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, CmapError::Json(_)), "{:?}", err);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let temp = TempDir::new().unwrap();
        let err = Config::load(temp.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, CmapError::Io { .. }));
    }
}
