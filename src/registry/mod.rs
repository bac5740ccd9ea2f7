//! Central colormap registry.
//!
//! - Float tables for viridis, plasma, magma, inferno and turbo
//! - Built-in table embedded via `include_str!` (listed and gradient maps)
//! - Procedural gradient presets
//! - User definitions layered on top, replacing built-ins by name
//! - `<name>_r` resolves to the reversed colormap when not defined itself

mod data;
pub mod definition;

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::color::Rgba;
use crate::colormap::{Colormap, DEFAULT_LEVELS};
use crate::error::{CmapError, Result};
use crate::gradient::Preset;

pub use data::{ColormapTable, INFERNO, MAGMA, PLASMA, TURBO, VIRIDIS};
pub use definition::{ColormapDef, DefinitionFile};

const BUILTIN_JSON: &str = include_str!("builtin.json");

const TABLES: [(&str, &ColormapTable); 5] = [
    ("viridis", &VIRIDIS),
    ("plasma", &PLASMA),
    ("magma", &MAGMA),
    ("inferno", &INFERNO),
    ("turbo", &TURBO),
];

/// Suffix selecting the reversed variant of a colormap
pub const REVERSED_SUFFIX: &str = "_r";

/// Read-only lookup of colormaps by name
#[derive(Debug, Clone, Default)]
pub struct ColormapRegistry {
    entries: BTreeMap<String, Colormap>,
}

impl ColormapRegistry {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Registry holding every built-in colormap
    pub fn builtin() -> Result<Self> {
        let file: DefinitionFile = serde_json::from_str(BUILTIN_JSON)?;

        let mut registry = Self::empty();
        for (name, table) in TABLES {
            registry.insert(Colormap::listed(name, table_colors(table))?);
        }
        for def in &file.colormaps {
            registry.insert(def.build()?);
        }
        for preset in Preset::all() {
            registry.insert(Colormap::from_gradient(
                preset.name(),
                Arc::new(*preset),
                DEFAULT_LEVELS,
            )?);
        }

        tracing::debug!("Loaded {} built-in colormaps", registry.len());
        Ok(registry)
    }

    /// Built-ins plus user definitions
    pub fn with_user_definitions(defs: &[ColormapDef]) -> Result<Self> {
        Self::builtin()?.with_definitions(defs)
    }

    /// Layer definitions on top of this registry
    pub fn with_definitions(mut self, defs: &[ColormapDef]) -> Result<Self> {
        for def in defs {
            if self.insert(def.build()?).is_some() {
                tracing::warn!("Colormap definition '{}' replaces an existing colormap", def.name);
            }
        }
        Ok(self)
    }

    /// Add a colormap under its own name, returning the one it replaced
    pub fn insert(&mut self, colormap: Colormap) -> Option<Colormap> {
        self.entries.insert(colormap.name().to_string(), colormap)
    }

    /// Resolve a colormap by name
    pub fn get(&self, name: &str) -> Result<Colormap> {
        if let Some(cmap) = self.entries.get(name) {
            tracing::debug!("Resolved colormap '{}' ({} entries)", name, cmap.len());
            return Ok(cmap.clone());
        }

        if let Some(base) = name.strip_suffix(REVERSED_SUFFIX) {
            if let Some(cmap) = self.entries.get(base) {
                tracing::debug!("Resolved colormap '{}' as reversed '{}'", name, base);
                return Ok(cmap.reversed());
            }
        }

        Err(CmapError::UnknownColormap {
            name: name.to_string(),
            supported: self.names().join(", "),
        })
    }

    /// True if `get(name)` would succeed
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
            || name
                .strip_suffix(REVERSED_SUFFIX)
                .is_some_and(|base| self.entries.contains_key(base))
    }

    /// Registered names in sorted order (reversed variants not listed)
    pub fn names(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Colormap> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn table_colors(table: &ColormapTable) -> Vec<Rgba> {
    table.iter().map(|&[r, g, b]| Rgba::opaque(r, g, b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colormap::ColormapKind;

    #[test]
    fn test_builtin_registry_loads() {
        let registry = ColormapRegistry::builtin().unwrap();
        for name in ["viridis", "magma", "cividis", "set1", "jet", "bathymetry"] {
            assert!(registry.contains(name), "missing {}", name);
        }
        assert_eq!(registry.len(), 28 + Preset::all().len());
    }

    #[test]
    fn test_builtin_sizes() {
        let registry = ColormapRegistry::builtin().unwrap();
        assert_eq!(registry.get("viridis").unwrap().len(), 256);
        assert_eq!(registry.get("cividis").unwrap().len(), 256);
        assert_eq!(registry.get("cividis").unwrap().kind(), ColormapKind::Listed);
        assert_eq!(registry.get("set1").unwrap().len(), 9);
        assert_eq!(registry.get("tableau10").unwrap().len(), 10);
        assert_eq!(registry.get("jet").unwrap().len(), 256);
    }

    #[test]
    fn test_float_tables_are_exact() {
        let registry = ColormapRegistry::builtin().unwrap();
        for (name, table) in TABLES {
            let cmap = registry.get(name).unwrap();
            assert_eq!(cmap.kind(), ColormapKind::Listed);
            assert_eq!(cmap.len(), 256);
            for (i, &[r, g, b]) in table.iter().enumerate() {
                assert_eq!(cmap.sample(i).unwrap(), Rgba::opaque(r, g, b), "{} row {}", name, i);
            }
        }
        assert_eq!(TURBO[0], [0.18995, 0.07176, 0.23217]);
    }

    #[test]
    fn test_unknown_colormap() {
        let registry = ColormapRegistry::builtin().unwrap();
        let err = registry.get("not-a-colormap").unwrap_err();
        assert!(err.is_unknown_colormap());
        assert!(err.to_string().contains("viridis"));
        assert!(!registry.contains("not-a-colormap"));
    }

    #[test]
    fn test_reversed_lookup() {
        let registry = ColormapRegistry::builtin().unwrap();
        let forward = registry.get("magma").unwrap();
        let reversed = registry.get("magma_r").unwrap();
        assert!(registry.contains("magma_r"));
        assert_eq!(reversed.name(), "magma_r");
        assert_eq!(reversed.sample(0).unwrap(), forward.sample(255).unwrap());
        assert_eq!(reversed.sample(255).unwrap(), forward.sample(0).unwrap());
        assert!(registry.get("magma_r_r").is_err());
    }

    #[test]
    fn test_user_definition_overrides_builtin() {
        let defs: Vec<ColormapDef> = serde_json::from_str(
            r##"[
                {"name": "viridis", "colors": ["#000000", "#ffffff"]},
                {"name": "mine", "kind": "gradient", "colors": ["#000000", "#ffffff"], "levels": 16}
            ]"##,
        )
        .unwrap();
        let registry = ColormapRegistry::with_user_definitions(&defs).unwrap();
        assert_eq!(registry.get("viridis").unwrap().len(), 2);
        assert_eq!(registry.get("mine").unwrap().len(), 16);
        assert_eq!(registry.get("mine_r").unwrap().len(), 16);
    }

    #[test]
    fn test_invalid_user_definition_fails() {
        let defs: Vec<ColormapDef> =
            serde_json::from_str(r##"[{"name": "broken", "colors": []}]"##).unwrap();
        assert!(ColormapRegistry::with_user_definitions(&defs).is_err());
    }

    #[test]
    fn test_names_sorted() {
        let registry = ColormapRegistry::builtin().unwrap();
        let names = registry.names();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }
}
