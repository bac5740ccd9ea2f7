//! Procedural gradients computed from closed-form ramps.

use crate::color::{hsb_to_rgb, Rgba};

use super::ColorGradient;

/// Built-in procedural gradients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    Gray,
    Jet,
    GreenBone,
    PurpleBone,
    ReverseBone,
    Bathymetry,
    Topography,
    ClearToBlack,
    BlackToClear,
}

impl Preset {
    pub fn all() -> &'static [Preset] {
        &[
            Preset::Gray,
            Preset::Jet,
            Preset::GreenBone,
            Preset::PurpleBone,
            Preset::ReverseBone,
            Preset::Bathymetry,
            Preset::Topography,
            Preset::ClearToBlack,
            Preset::BlackToClear,
        ]
    }

    /// Registry name
    pub fn name(&self) -> &'static str {
        match self {
            Preset::Gray => "gray",
            Preset::Jet => "jet",
            Preset::GreenBone => "green_bone",
            Preset::PurpleBone => "purple_bone",
            Preset::ReverseBone => "reverse_bone",
            Preset::Bathymetry => "bathymetry",
            Preset::Topography => "topography",
            Preset::ClearToBlack => "clear_to_black",
            Preset::BlackToClear => "black_to_clear",
        }
    }

    pub fn from_name(name: &str) -> Option<Preset> {
        Preset::all().iter().copied().find(|p| p.name() == name)
    }
}

impl ColorGradient for Preset {
    fn to_color(&self, fraction: f64) -> Rgba {
        let f = fraction;
        match self {
            Preset::Gray => Rgba::opaque(f, f, f),
            Preset::Jet => jet(f),
            Preset::GreenBone => {
                if f < 0.5 {
                    Rgba::opaque(0.0, 2.0 * f, 0.0)
                } else {
                    let x = (f - 0.5) * 2.0;
                    Rgba::opaque(x, 1.0, x)
                }
            }
            Preset::PurpleBone => {
                if f < 0.5 {
                    hsb_to_rgb(0.749, 1.0, 2.0 * f)
                } else {
                    hsb_to_rgb(0.749, 1.0 - (f - 0.5) * 2.0, 1.0)
                }
            }
            Preset::ReverseBone => reverse_bone(f),
            Preset::Bathymetry => bathymetry(f),
            Preset::Topography => topography(f),
            Preset::ClearToBlack => Rgba::new(0.0, 0.0, 0.0, f),
            Preset::BlackToClear => Rgba::new(0.0, 0.0, 0.0, 1.0 - f),
        }
    }
}

fn jet(f: f64) -> Rgba {
    let x = 4.0 * f;
    match (8.0 * f) as i64 {
        i64::MIN..=0 => Rgba::opaque(0.0, 0.0, 0.5 + x),
        1 | 2 => Rgba::opaque(0.0, -0.5 + x, 1.0),
        3 | 4 => Rgba::opaque(-1.5 + x, 1.0, 2.5 - x),
        5 | 6 => Rgba::opaque(1.0, 3.5 - x, 0.0),
        _ => Rgba::opaque(4.5 - x, 0.0, 0.0),
    }
}

fn reverse_bone(f: f64) -> Rgba {
    let x = 1.0 - 0.875 * f;
    if f < 0.375 {
        Rgba::opaque(x, x, x - f / 3.0)
    } else if f < 0.75 {
        Rgba::opaque(x, x + 0.125 - f / 3.0, x - 0.125)
    } else {
        Rgba::opaque(x + 0.375 - f * 0.5, x - 0.125, x - 0.125)
    }
}

/// Ocean depths from -8000 (deep blue) up to 0 (cyan-white)
fn bathymetry(f: f64) -> Rgba {
    let bathy_min = -10000.0;
    let depth = (1.0 - f) * -8000.0;

    let (r, g, b) = if depth < -5000.0 {
        let span = -5000.0 - bathy_min;
        (0.0, 0.0, 192.0 / span * depth + 192.0 + 192.0 * 5000.0 / span + 0.5)
    } else if depth < -2500.0 {
        (
            0.0,
            192.0 / 2500.0 * depth + 384.0 + 0.5,
            63.0 / 2500.0 * depth + 318.0 + 0.5,
        )
    } else if depth < -500.0 {
        (0.0, 63.0 / 2000.0 * depth + 270.75 + 0.5, 255.0)
    } else {
        (128.0 / 500.0 * depth + 128.0 + 0.5, 255.0, 255.0)
    };

    Rgba::opaque(r / 255.0, g / 255.0, b / 255.0)
}

/// Land heights from 0 (green) up to 8000 (dark red)
fn topography(f: f64) -> Rgba {
    let height_max = 8000.0;
    let height = f * 8000.0;

    let (r, g) = if height < 1000.0 {
        (0.255 * height + 0.5, 0.081 * height + 174.0 + 0.5)
    } else if height < 3000.0 {
        (255.0, -127.0 / 2000.0 * height + 318.5 + 0.5)
    } else if height < 5000.0 {
        (255.0, -128.0 / 2000.0 * height + 320.0 + 0.5)
    } else {
        let slope = 255.0 / (5000.0 - height_max);
        (slope * height + 255.0 - 5000.0 * slope + 0.5, 0.0)
    };

    Rgba::opaque(r / 255.0, g / 255.0, 0.0)
}
