//! RGBA color values and the color syntaxes accepted in colormap definitions.

use serde::{Deserialize, Serialize};

use crate::error::{CmapError, Result};

/// A color with four channels normalized to [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: f64, g: f64, b: f64) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Build from 8-bit channels
    pub fn from_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
            f64::from(a) / 255.0,
        )
    }

    /// Parse `#rrggbb` or `#rrggbbaa` (leading `#` optional)
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.trim().trim_start_matches('#');
        if !digits.is_ascii() || (digits.len() != 6 && digits.len() != 8) {
            return Err(CmapError::InvalidColor(hex.to_string()));
        }

        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| CmapError::InvalidColor(hex.to_string()))
        };

        let alpha = if digits.len() == 8 { channel(6)? } else { 255 };
        Ok(Self::from_u8(channel(0)?, channel(2)?, channel(4)?, alpha))
    }

    /// Clamp every channel into [0, 1]; NaN and -0.0 become 0
    pub fn clamped(self) -> Self {
        let c = |v: f64| if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) + 0.0 };
        Self::new(c(self.r), c(self.g), c(self.b), c(self.a))
    }

    /// Linear mix; `w` is the weight of `other`
    pub fn mix(self, other: Rgba, w: f64) -> Self {
        let u = 1.0 - w;
        Self::new(
            u * self.r + w * other.r,
            u * self.g + w * other.g,
            u * self.b + w * other.b,
            u * self.a + w * other.a,
        )
    }

    pub fn to_array(self) -> [f64; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// HSB to RGB with 8-bit quantization, matching `java.awt.Color.HSBtoRGB`.
pub fn hsb_to_rgb(hue: f64, saturation: f64, brightness: f64) -> Rgba {
    let q8 = |v: f64| (v * 255.0 + 0.5) as u8;

    if saturation == 0.0 {
        let v = q8(brightness);
        return Rgba::from_u8(v, v, v, 255);
    }

    let h = (hue - hue.floor()) * 6.0;
    let f = h - h.floor();
    let p = brightness * (1.0 - saturation);
    let q = brightness * (1.0 - saturation * f);
    let t = brightness * (1.0 - saturation * (1.0 - f));

    let (r, g, b) = match h as u32 {
        0 => (brightness, t, p),
        1 => (q, brightness, p),
        2 => (p, brightness, t),
        3 => (p, q, brightness),
        4 => (t, p, brightness),
        _ => (brightness, p, q),
    };

    Rgba::from_u8(q8(r), q8(g), q8(b), 255)
}

/// Color as written in a definition file: a hex string or 3/4 float channels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorSpec {
    Hex(String),
    Channels(Vec<f64>),
}

impl ColorSpec {
    pub fn to_rgba(&self) -> Result<Rgba> {
        match self {
            ColorSpec::Hex(hex) => Rgba::from_hex(hex),
            ColorSpec::Channels(c) => {
                let in_range = c.iter().all(|v| (0.0..=1.0).contains(v));
                match (c.as_slice(), in_range) {
                    (&[r, g, b], true) => Ok(Rgba::opaque(r, g, b)),
                    (&[r, g, b, a], true) => Ok(Rgba::new(r, g, b, a)),
                    _ => Err(CmapError::InvalidColor(format!("{:?}", c))),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        let c = Rgba::from_hex("#440154").unwrap();
        assert_eq!(c, Rgba::from_u8(0x44, 0x01, 0x54, 0xff));
        assert_eq!(c.a, 1.0);

        let c = Rgba::from_hex("ff000080").unwrap();
        assert_eq!(c.r, 1.0);
        assert!((c.a - 128.0 / 255.0).abs() < 1e-12);
    }

    #[test]
    fn test_from_hex_rejects_bad_input() {
        assert!(Rgba::from_hex("#12345").is_err());
        assert!(Rgba::from_hex("#gg0000").is_err());
        assert!(Rgba::from_hex("").is_err());
        assert!(Rgba::from_hex("#ééé").is_err());
    }

    #[test]
    fn test_clamped() {
        let c = Rgba::new(-0.5, 1.5, f64::NAN, 0.5).clamped();
        assert_eq!(c, Rgba::new(0.0, 1.0, 0.0, 0.5));
    }

    #[test]
    fn test_mix() {
        let black = Rgba::opaque(0.0, 0.0, 0.0);
        let white = Rgba::opaque(1.0, 1.0, 1.0);
        assert_eq!(black.mix(white, 0.25), Rgba::opaque(0.25, 0.25, 0.25));
        assert_eq!(black.mix(white, 0.0), black);
        assert_eq!(black.mix(white, 1.0), white);
    }

    #[test]
    fn test_hsb_to_rgb() {
        assert_eq!(hsb_to_rgb(0.0, 1.0, 1.0), Rgba::from_u8(255, 0, 0, 255));
        assert_eq!(hsb_to_rgb(0.25, 1.0, 1.0), Rgba::from_u8(128, 255, 0, 255));
        assert_eq!(hsb_to_rgb(0.5, 0.0, 0.5), Rgba::from_u8(128, 128, 128, 255));
        assert_eq!(hsb_to_rgb(0.749, 1.0, 0.0), Rgba::from_u8(0, 0, 0, 255));
    }

    #[test]
    fn test_color_spec() {
        let hex: ColorSpec = serde_json::from_str("\"#ffffff\"").unwrap();
        assert_eq!(hex.to_rgba().unwrap(), Rgba::opaque(1.0, 1.0, 1.0));

        let rgb: ColorSpec = serde_json::from_str("[0.267004, 0.004874, 0.329415]").unwrap();
        assert_eq!(rgb.to_rgba().unwrap(), Rgba::opaque(0.267004, 0.004874, 0.329415));

        let bad: ColorSpec = serde_json::from_str("[0.1, 2.0, 0.3]").unwrap();
        assert!(bad.to_rgba().is_err());
        let short: ColorSpec = serde_json::from_str("[0.1, 0.2]").unwrap();
        assert!(short.to_rgba().is_err());
    }
}
