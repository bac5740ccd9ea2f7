//! Serialized colormap definitions (built-in table and config file).

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::color::{ColorSpec, Rgba};
use crate::colormap::{Colormap, ColormapKind, DEFAULT_LEVELS};
use crate::error::{CmapError, Result};
use crate::gradient::StopGradient;

fn default_kind() -> ColormapKind {
    ColormapKind::Listed
}

/// One colormap as written in JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColormapDef {
    /// Registry name (letters, digits, `_`, `-`, `.`)
    pub name: String,

    #[serde(default = "default_kind")]
    pub kind: ColormapKind,

    /// Colors as `#rrggbb[aa]` or `[r, g, b(, a)]`
    pub colors: Vec<ColorSpec>,

    /// Gradient only: position of each color, ascending
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<f64>>,

    /// Gradient only: `[min, max]` the values are scaled from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<[f64; 2]>,

    /// Entry count; gradients default to 256, listed maps to their color count
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub levels: Option<usize>,
}

/// Top-level shape of a definitions file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefinitionFile {
    #[serde(default)]
    pub colormaps: Vec<ColormapDef>,
}

pub(crate) fn validate_name(name: &str) -> Result<()> {
    let valid = !name.is_empty()
        && !name.starts_with('.')
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));
    if valid {
        Ok(())
    } else {
        Err(CmapError::invalid_definition(
            name,
            "name must be non-empty and use only letters, digits, '_', '-' or '.'",
        ))
    }
}

impl ColormapDef {
    /// Validate and build the colormap
    pub fn build(&self) -> Result<Colormap> {
        validate_name(&self.name)?;
        let invalid = |reason: &str| CmapError::invalid_definition(&self.name, reason);

        if self.colors.is_empty() {
            return Err(invalid("at least one color is required"));
        }
        if self.levels == Some(0) {
            return Err(invalid("levels must be at least 1"));
        }

        let colors = self
            .colors
            .iter()
            .map(ColorSpec::to_rgba)
            .collect::<Result<Vec<Rgba>>>()?;

        match self.kind {
            ColormapKind::Listed => {
                if self.values.is_some() || self.range.is_some() {
                    return Err(invalid("values and range only apply to gradient colormaps"));
                }
                let cmap = Colormap::listed(self.name.clone(), colors)?;
                match self.levels {
                    Some(levels) => cmap.resampled(levels),
                    None => Ok(cmap),
                }
            }
            ColormapKind::Gradient => {
                let [min, max] = self.range.unwrap_or([0.0, 1.0]);
                let gradient = match &self.values {
                    Some(values) => StopGradient::new(min, max, values, colors),
                    None if self.range.is_some() => {
                        return Err(invalid("range requires explicit values"));
                    }
                    None => StopGradient::evenly_spaced(colors),
                }
                .map_err(|e| match e {
                    CmapError::InvalidDefinition { reason, .. } => invalid(&reason),
                    other => other,
                })?;

                Colormap::from_gradient(
                    self.name.clone(),
                    Arc::new(gradient),
                    self.levels.unwrap_or(DEFAULT_LEVELS),
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> ColormapDef {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_listed_definition() {
        let def = parse(r##"{"name": "duo", "colors": ["#000000", [1.0, 1.0, 1.0]]}"##);
        assert_eq!(def.kind, ColormapKind::Listed);
        let cmap = def.build().unwrap();
        assert_eq!(cmap.len(), 2);
        assert_eq!(cmap.sample(1).unwrap(), Rgba::opaque(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_gradient_definition_defaults_to_256_levels() {
        let def = parse(r##"{"name": "ramp", "kind": "gradient", "colors": ["#000000", "#ffffff"]}"##);
        let cmap = def.build().unwrap();
        assert_eq!(cmap.len(), 256);
        assert_eq!(cmap.kind(), ColormapKind::Gradient);
    }

    #[test]
    fn test_gradient_definition_with_values() {
        let def = parse(
            r##"{
                "name": "topo",
                "kind": "gradient",
                "range": [0, 8000],
                "values": [0, 8000],
                "colors": [[0.0, 0.0, 0.0], [1.0, 1.0, 1.0]],
                "levels": 3
            }"##,
        );
        let cmap = def.build().unwrap();
        let reds: Vec<f64> = cmap.colors().map(|c| c.r).collect();
        assert_eq!(reds, vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_invalid_definitions() {
        let cases = [
            r##"{"name": "", "colors": ["#000000"]}"##,
            r##"{"name": "a/b", "colors": ["#000000"]}"##,
            r##"{"name": "none", "colors": []}"##,
            r##"{"name": "bad", "colors": ["#zz0000"]}"##,
            r##"{"name": "zero", "colors": ["#000000"], "levels": 0}"##,
            r##"{"name": "listed", "colors": ["#000000"], "values": [0]}"##,
            r##"{"name": "order", "kind": "gradient", "colors": ["#000000", "#ffffff"], "values": [1, 0]}"##,
            r##"{"name": "range", "kind": "gradient", "colors": ["#000000"], "range": [0, 10]}"##,
        ];
        for json in cases {
            assert!(parse(json).build().is_err(), "expected error for {}", json);
        }
    }

    #[test]
    fn test_validation_errors_name_the_definition() {
        let def = parse(r##"{"name": "order", "kind": "gradient", "colors": ["#000000", "#ffffff"], "values": [1, 0]}"##);
        match def.build() {
            Err(CmapError::InvalidDefinition { name, .. }) => assert_eq!(name, "order"),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
