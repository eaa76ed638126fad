//! Colors and per-level palettes.
//!
//! A palette turns a level index into a color. The grayscale palettes
//! reproduce the classic contour panel look: bands get darker as the level
//! rises, outlines get lighter.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{RenderError, RenderResult};

/// Color value in RGBA format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const TRANSPARENT: Color = Color::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub const fn gray(v: u8) -> Self {
        Self::rgb(v, v, v)
    }

    /// Parse `#rrggbb` or `#rrggbbaa`; the leading `#` is optional.
    pub fn from_hex(hex: &str) -> RenderResult<Self> {
        let digits = hex.trim().trim_start_matches('#');
        let channel = |i: usize| {
            digits
                .get(i..i + 2)
                .and_then(|s| u8::from_str_radix(s, 16).ok())
                .ok_or_else(|| RenderError::InvalidColor(hex.to_string()))
        };
        match digits.len() {
            6 => Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => Ok(Self::new(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
            _ => Err(RenderError::InvalidColor(hex.to_string())),
        }
    }

    /// `#rrggbb`, with an alpha byte appended only when not opaque.
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }

    pub fn to_rgba8(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Linear interpolation towards `other`; `t` is clamped to `[0, 1]`.
    pub fn lerp(self, other: Color, t: f64) -> Color {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f64 * (1.0 - t) + b as f64 * t).round() as u8;
        Color::new(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
            mix(self.a, other.a),
        )
    }
}

impl FromStr for Color {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = RenderError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Color::from_hex(&s)
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self {
        c.to_hex()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Color stop for [`Palette::Stops`]; `position` runs from 0 (lowest level)
/// to 1 (highest level).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    pub position: f64,
    pub color: Color,
}

/// Maps level `i` of `count` to a color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Palette {
    /// Light gray for the lowest level down to black for the highest.
    Grayscale,
    /// Dark gray for the lowest level up to white for the highest.
    InverseGrayscale,
    /// Interpolated color stops.
    Stops { stops: Vec<ColorStop> },
    /// Same color for every level.
    Solid { color: Color },
}

impl Palette {
    /// Color for level `index` out of `count`.
    pub fn color(&self, index: usize, count: usize) -> Color {
        let count = count.max(1);
        // 256 / count steps, one step in from the end of the ramp.
        let step = |i: usize| (256.0 * (i + 1) as f64 / count as f64).floor();
        match self {
            Palette::Grayscale => Color::gray((256.0 - step(index)).clamp(0.0, 255.0) as u8),
            Palette::InverseGrayscale => Color::gray(step(index).clamp(0.0, 255.0) as u8),
            Palette::Stops { stops } => {
                let t = if count == 1 {
                    0.0
                } else {
                    index as f64 / (count - 1) as f64
                };
                color_at_position(stops, t)
            }
            Palette::Solid { color } => *color,
        }
    }

    /// Colors for all `count` levels, lowest first.
    pub fn colors(&self, count: usize) -> Vec<Color> {
        (0..count).map(|i| self.color(i, count)).collect()
    }

    pub fn validate(&self) -> RenderResult<()> {
        if let Palette::Stops { stops } = self {
            if stops.is_empty() {
                return Err(RenderError::InvalidConfig(
                    "palette needs at least one color stop".into(),
                ));
            }
            if let Some(bad) = stops.iter().find(|s| !s.position.is_finite()) {
                return Err(RenderError::InvalidConfig(format!(
                    "color stop position {} is not finite",
                    bad.position
                )));
            }
        }
        Ok(())
    }
}

/// Color at `t` along the stops, sorted by position; clamps outside the range.
fn color_at_position(stops: &[ColorStop], t: f64) -> Color {
    let mut sorted: Vec<&ColorStop> = stops.iter().collect();
    sorted.sort_by(|a, b| a.position.total_cmp(&b.position));

    let (first, last) = match (sorted.first(), sorted.last()) {
        (Some(f), Some(l)) => (*f, *l),
        _ => return Color::TRANSPARENT,
    };
    if t <= first.position {
        return first.color;
    }
    if t >= last.position {
        return last.color;
    }

    for pair in sorted.windows(2) {
        let (lo, hi) = (pair[0], pair[1]);
        if t <= hi.position {
            let span = hi.position - lo.position;
            let local = if span.abs() < f64::EPSILON {
                0.0
            } else {
                (t - lo.position) / span
            };
            return lo.color.lerp(hi.color, local);
        }
    }
    last.color
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        assert_eq!(Color::from_hex("#FF0000").unwrap(), Color::rgb(255, 0, 0));
        assert_eq!(Color::from_hex("00ff00").unwrap(), Color::rgb(0, 255, 0));
        assert_eq!(
            Color::from_hex("#0000ff80").unwrap(),
            Color::new(0, 0, 255, 128)
        );
        assert!(Color::from_hex("#GGGGGG").is_err());
        assert!(Color::from_hex("#fff").is_err());
    }

    #[test]
    fn test_hex_round_trip_through_serde() {
        let json = serde_json::to_string(&Color::new(1, 2, 3, 4)).unwrap();
        assert_eq!(json, "\"#01020304\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Color::new(1, 2, 3, 4));
        assert!(serde_json::from_str::<Color>("\"nope\"").is_err());
    }

    #[test]
    fn test_lerp() {
        let mid = Color::BLACK.lerp(Color::WHITE, 0.5);
        assert_eq!(mid, Color::gray(128));
        assert_eq!(Color::BLACK.lerp(Color::WHITE, 2.0), Color::WHITE);
    }

    #[test]
    fn test_grayscale_eight_levels() {
        let grays: Vec<u8> = Palette::Grayscale.colors(8).iter().map(|c| c.r).collect();
        assert_eq!(grays, vec![224, 192, 160, 128, 96, 64, 32, 0]);
    }

    #[test]
    fn test_inverse_grayscale_eight_levels() {
        let grays: Vec<u8> = Palette::InverseGrayscale
            .colors(8)
            .iter()
            .map(|c| c.r)
            .collect();
        assert_eq!(grays, vec![32, 64, 96, 128, 160, 192, 224, 255]);
    }

    #[test]
    fn test_stops() {
        let palette = Palette::Stops {
            stops: vec![
                ColorStop { position: 1.0, color: Color::WHITE },
                ColorStop { position: 0.0, color: Color::BLACK },
            ],
        };
        let colors = palette.colors(3);
        assert_eq!(colors[0], Color::BLACK);
        assert_eq!(colors[1], Color::gray(128));
        assert_eq!(colors[2], Color::WHITE);
    }

    #[test]
    fn test_palette_json() {
        let p: Palette = serde_json::from_str(r##"{"type": "solid", "color": "#102030"}"##).unwrap();
        assert_eq!(p, Palette::Solid { color: Color::rgb(16, 32, 48) });
        let p: Palette = serde_json::from_str(r#"{"type": "grayscale"}"#).unwrap();
        assert_eq!(p, Palette::Grayscale);
    }

    #[test]
    fn test_empty_stops_rejected() {
        let err = Palette::Stops { stops: vec![] }.validate().unwrap_err();
        assert_eq!(err.code(), "InvalidConfig");
    }
}
