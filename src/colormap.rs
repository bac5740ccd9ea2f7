//! Named colormaps: a fixed number of discrete color entries.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::color::Rgba;
use crate::error::{CmapError, Result};
use crate::gradient::{CellGradient, ColorGradient, Reversed};

/// Entry count used for gradient colormaps unless told otherwise
pub const DEFAULT_LEVELS: usize = 256;

/// How a colormap produces its entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColormapKind {
    /// Explicit table, one color per entry
    Listed,
    /// Continuous gradient sampled at evenly spaced fractions
    Gradient,
}

impl fmt::Display for ColormapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColormapKind::Listed => f.pad("listed"),
            ColormapKind::Gradient => f.pad("gradient"),
        }
    }
}

#[derive(Debug, Clone)]
enum Source {
    Listed(Arc<[Rgba]>),
    Gradient(Arc<dyn ColorGradient>),
}

/// A named colormap with `len()` entries addressable by index
#[derive(Debug, Clone)]
pub struct Colormap {
    name: String,
    len: usize,
    source: Source,
}

impl Colormap {
    pub fn listed(name: impl Into<String>, colors: Vec<Rgba>) -> Result<Self> {
        let name = name.into();
        if colors.is_empty() {
            return Err(CmapError::invalid_definition(&name, "listed colormap has no colors"));
        }
        Ok(Self {
            name,
            len: colors.len(),
            source: Source::Listed(colors.into()),
        })
    }

    pub fn from_gradient(
        name: impl Into<String>,
        gradient: Arc<dyn ColorGradient>,
        levels: usize,
    ) -> Result<Self> {
        let name = name.into();
        if levels == 0 {
            return Err(CmapError::invalid_definition(&name, "levels must be at least 1"));
        }
        Ok(Self {
            name,
            len: levels,
            source: Source::Gradient(gradient),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn kind(&self) -> ColormapKind {
        match self.source {
            Source::Listed(_) => ColormapKind::Listed,
            Source::Gradient(_) => ColormapKind::Gradient,
        }
    }

    /// Gradient position of entry `index`: `index / (len - 1)`
    pub fn fraction(&self, index: usize) -> f64 {
        if self.len > 1 {
            index as f64 / (self.len - 1) as f64
        } else {
            0.0
        }
    }

    /// Color of entry `index`, channels clamped to [0, 1]
    pub fn sample(&self, index: usize) -> Result<Rgba> {
        if index >= self.len {
            return Err(CmapError::IndexOutOfRange {
                name: self.name.clone(),
                index,
                len: self.len,
            });
        }
        Ok(self.color_at(index))
    }

    /// All entries in index order
    pub fn colors(&self) -> impl Iterator<Item = Rgba> + '_ {
        (0..self.len).map(move |i| self.color_at(i))
    }

    // `index` must be below `len`
    fn color_at(&self, index: usize) -> Rgba {
        let color = match &self.source {
            Source::Listed(colors) => colors[index],
            Source::Gradient(gradient) => gradient.to_color(self.fraction(index)),
        };
        color.clamped()
    }

    /// Same colormap with a different entry count.
    ///
    /// Gradients are sampled again; listed tables are read as equal-width
    /// cells so every entry keeps its color.
    pub fn resampled(&self, levels: usize) -> Result<Colormap> {
        if levels == self.len {
            return Ok(self.clone());
        }
        let gradient: Arc<dyn ColorGradient> = match &self.source {
            Source::Gradient(gradient) => Arc::clone(gradient),
            Source::Listed(colors) => Arc::new(CellGradient::new(colors.to_vec())?),
        };
        Colormap::from_gradient(self.name.clone(), gradient, levels)
    }

    /// Entries in reverse order, named with an `_r` suffix
    pub fn reversed(&self) -> Colormap {
        let name = format!("{}_r", self.name);
        let source = match &self.source {
            Source::Listed(colors) => Source::Listed(colors.iter().rev().copied().collect()),
            Source::Gradient(gradient) => Source::Gradient(Arc::new(Reversed(Arc::clone(gradient)))),
        };
        Colormap {
            name,
            len: self.len,
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gradient::StopGradient;

    fn ramp(levels: usize) -> Colormap {
        let g = StopGradient::evenly_spaced(vec![
            Rgba::opaque(0.0, 0.0, 0.0),
            Rgba::opaque(1.0, 1.0, 1.0),
        ])
        .unwrap();
        Colormap::from_gradient("ramp", Arc::new(g), levels).unwrap()
    }

    #[test]
    fn test_listed_sampling() {
        let red = Rgba::opaque(1.0, 0.0, 0.0);
        let blue = Rgba::opaque(0.0, 0.0, 1.0);
        let cmap = Colormap::listed("two", vec![red, blue]).unwrap();
        assert_eq!(cmap.len(), 2);
        assert_eq!(cmap.kind(), ColormapKind::Listed);
        assert_eq!(cmap.sample(0).unwrap(), red);
        assert_eq!(cmap.sample(1).unwrap(), blue);
        assert!(matches!(
            cmap.sample(2),
            Err(CmapError::IndexOutOfRange { index: 2, len: 2, .. })
        ));
    }

    #[test]
    fn test_gradient_sampling_hits_both_ends() {
        let cmap = ramp(5);
        let values: Vec<f64> = cmap.colors().map(|c| c.r).collect();
        assert_eq!(values, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn test_colors_matches_sample() {
        let cmap = ramp(7);
        let colors: Vec<Rgba> = cmap.colors().collect();
        assert_eq!(colors.len(), cmap.len());
        for (i, color) in colors.iter().enumerate() {
            assert_eq!(*color, cmap.sample(i).unwrap());
        }
    }

    #[test]
    fn test_single_level() {
        let cmap = ramp(1);
        assert_eq!(cmap.fraction(0), 0.0);
        assert_eq!(cmap.colors().count(), 1);
    }

    #[test]
    fn test_rejects_empty() {
        assert!(Colormap::listed("empty", vec![]).is_err());
        let g = StopGradient::evenly_spaced(vec![Rgba::opaque(0.0, 0.0, 0.0)]).unwrap();
        assert!(Colormap::from_gradient("none", Arc::new(g), 0).is_err());
    }

    #[test]
    fn test_resampled_listed_keeps_cells() {
        let a = Rgba::opaque(1.0, 0.0, 0.0);
        let b = Rgba::opaque(0.0, 1.0, 0.0);
        let cmap = Colormap::listed("ab", vec![a, b]).unwrap().resampled(4).unwrap();
        let colors: Vec<Rgba> = cmap.colors().collect();
        assert_eq!(colors, vec![a, a, b, b]);
        assert_eq!(cmap.name(), "ab");
    }

    #[test]
    fn test_resampled_gradient() {
        let cmap = ramp(256).resampled(3).unwrap();
        let values: Vec<f64> = cmap.colors().map(|c| c.g).collect();
        assert_eq!(values, vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_reversed() {
        let cmap = ramp(3).reversed();
        assert_eq!(cmap.name(), "ramp_r");
        let values: Vec<f64> = cmap.colors().map(|c| c.b).collect();
        assert_eq!(values, vec![1.0, 0.5, 0.0]);

        let a = Rgba::opaque(1.0, 0.0, 0.0);
        let b = Rgba::opaque(0.0, 1.0, 0.0);
        let listed = Colormap::listed("ab", vec![a, b]).unwrap().reversed();
        assert_eq!(listed.colors().collect::<Vec<_>>(), vec![b, a]);
    }
}
