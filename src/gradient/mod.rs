//! Continuous color gradients.
//!
//! A gradient maps a fraction in [0, 1] to a color. Colormaps with a
//! gradient source sample one at evenly spaced fractions.

pub mod presets;

use std::fmt;
use std::sync::Arc;

use crate::color::Rgba;
use crate::error::{CmapError, Result};

pub use presets::Preset;

/// Maps a fraction in [0, 1] to a color
pub trait ColorGradient: Send + Sync + fmt::Debug {
    fn to_color(&self, fraction: f64) -> Rgba;
}

/// Index of the first element strictly greater than `x`.
///
/// For an exact match this is the position after the value's last
/// occurrence, so repeated values act as a hard edge.
pub fn index_after(sorted: &[f64], x: f64) -> usize {
    sorted.partition_point(|&v| v <= x)
}

/// Multi-segment gradient through value/color stops.
///
/// Values are scaled by `[min, max]` into fractions. Two consecutive stops
/// with the same value and different colors produce a discontinuity.
#[derive(Debug, Clone)]
pub struct StopGradient {
    fracs: Vec<f64>,
    colors: Vec<Rgba>,
}

impl StopGradient {
    /// Stops at explicit values on `[min, max]`. Values must ascend.
    pub fn new(min: f64, max: f64, values: &[f64], colors: Vec<Rgba>) -> Result<Self> {
        let invalid = |reason: &str| CmapError::invalid_definition("gradient", reason);

        if colors.is_empty() {
            return Err(invalid("at least one color stop is required"));
        }
        if values.len() != colors.len() {
            return Err(invalid("values and colors must have the same length"));
        }
        if !(min.is_finite() && max.is_finite() && min < max) {
            return Err(invalid("range min must be < max"));
        }
        if values.iter().any(|v| !v.is_finite()) {
            return Err(invalid("stop values must be finite"));
        }
        if values.windows(2).any(|w| w[1] < w[0]) {
            return Err(invalid("stop values must be in ascending order"));
        }

        let fracs = values.iter().map(|v| (v - min) / (max - min)).collect();
        Ok(Self { fracs, colors })
    }

    /// Stops evenly spaced over [0, 1]
    pub fn evenly_spaced(colors: Vec<Rgba>) -> Result<Self> {
        let n = colors.len();
        let values: Vec<f64> = (0..n)
            .map(|i| if n > 1 { i as f64 / (n - 1) as f64 } else { 0.0 })
            .collect();
        Self::new(0.0, 1.0, &values, colors)
    }
}

impl ColorGradient for StopGradient {
    fn to_color(&self, fraction: f64) -> Rgba {
        let last = self.fracs.len() - 1;
        let i_max = index_after(&self.fracs, fraction).min(last);
        let i_min = i_max.saturating_sub(1);

        if i_min == i_max {
            return self.colors[i_max];
        }

        let (v_min, v_max) = (self.fracs[i_min], self.fracs[i_max]);
        let span = v_max - v_min;
        let w = if span > 0.0 {
            ((fraction - v_min) / span).clamp(0.0, 1.0)
        } else if fraction >= v_max {
            1.0
        } else {
            0.0
        };
        self.colors[i_min].mix(self.colors[i_max], w)
    }
}

/// Piecewise-constant gradient: `n` equal cells, one color each.
#[derive(Debug, Clone)]
pub struct CellGradient {
    colors: Vec<Rgba>,
}

impl CellGradient {
    pub fn new(colors: Vec<Rgba>) -> Result<Self> {
        if colors.is_empty() {
            return Err(CmapError::invalid_definition(
                "cells",
                "at least one color is required",
            ));
        }
        Ok(Self { colors })
    }

    /// Cell holding `fraction`; fractions outside [0, 1] land in the end cells
    pub fn cell_index(&self, fraction: f64) -> usize {
        let n = self.colors.len();
        ((n as f64 * fraction) as usize).min(n - 1)
    }
}

impl ColorGradient for CellGradient {
    fn to_color(&self, fraction: f64) -> Rgba {
        self.colors[self.cell_index(fraction)]
    }
}

/// Runs another gradient backwards
#[derive(Debug, Clone)]
pub struct Reversed(pub Arc<dyn ColorGradient>);

impl ColorGradient for Reversed {
    fn to_color(&self, fraction: f64) -> Rgba {
        self.0.to_color(1.0 - fraction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray(v: f64) -> Rgba {
        Rgba::opaque(v, v, v)
    }

    #[test]
    fn test_index_after() {
        let a = [0.0, 0.25, 0.5, 0.5, 1.0];
        assert_eq!(index_after(&a, -1.0), 0);
        assert_eq!(index_after(&a, 0.0), 1);
        assert_eq!(index_after(&a, 0.3), 2);
        assert_eq!(index_after(&a, 0.5), 4);
        assert_eq!(index_after(&a, 1.0), 5);
    }

    #[test]
    fn test_stop_gradient_interpolates() {
        let g = StopGradient::evenly_spaced(vec![gray(0.0), gray(1.0)]).unwrap();
        assert_eq!(g.to_color(0.0), gray(0.0));
        assert_eq!(g.to_color(0.5), gray(0.5));
        assert_eq!(g.to_color(1.0), gray(1.0));
        assert_eq!(g.to_color(-0.5), gray(0.0));
        assert_eq!(g.to_color(2.0), gray(1.0));
    }

    #[test]
    fn test_stop_gradient_scaled_values() {
        // Altitudes in feet, as a topography ramp would be written
        let g = StopGradient::new(
            0.0,
            8000.0,
            &[0.0, 4000.0, 8000.0],
            vec![gray(0.0), gray(0.8), gray(1.0)],
        )
        .unwrap();
        assert_eq!(g.to_color(0.25), gray(0.4));
        assert_eq!(g.to_color(0.75), gray(0.9));
    }

    #[test]
    fn test_stop_gradient_discontinuity() {
        let red = Rgba::opaque(1.0, 0.0, 0.0);
        let blue = Rgba::opaque(0.0, 0.0, 1.0);
        let g = StopGradient::new(
            0.0,
            1.0,
            &[0.0, 0.5, 0.5, 1.0],
            vec![red, red, blue, blue],
        )
        .unwrap();
        assert_eq!(g.to_color(0.49), red);
        assert_eq!(g.to_color(0.5), blue);
        assert_eq!(g.to_color(0.51), blue);
    }

    #[test]
    fn test_stop_gradient_single_stop() {
        let g = StopGradient::evenly_spaced(vec![gray(0.3)]).unwrap();
        assert_eq!(g.to_color(0.0), gray(0.3));
        assert_eq!(g.to_color(1.0), gray(0.3));
    }

    #[test]
    fn test_stop_gradient_validation() {
        assert!(StopGradient::evenly_spaced(vec![]).is_err());
        assert!(StopGradient::new(0.0, 1.0, &[0.0], vec![gray(0.0), gray(1.0)]).is_err());
        assert!(StopGradient::new(1.0, 1.0, &[0.0, 1.0], vec![gray(0.0), gray(1.0)]).is_err());
        assert!(StopGradient::new(0.0, 1.0, &[1.0, 0.0], vec![gray(0.0), gray(1.0)]).is_err());
    }

    #[test]
    fn test_cell_gradient() {
        let g = CellGradient::new(vec![gray(0.0), gray(0.5), gray(1.0)]).unwrap();
        assert_eq!(g.cell_index(0.0), 0);
        assert_eq!(g.cell_index(0.34), 1);
        assert_eq!(g.cell_index(1.0), 2);
        assert_eq!(g.cell_index(-3.0), 0);
        assert_eq!(g.to_color(0.9), gray(1.0));
    }

    #[test]
    fn test_reversed() {
        let inner = StopGradient::evenly_spaced(vec![gray(0.0), gray(1.0)]).unwrap();
        let g = Reversed(Arc::new(inner));
        assert_eq!(g.to_color(0.0), gray(1.0));
        assert_eq!(g.to_color(0.25), gray(0.75));
    }
}
