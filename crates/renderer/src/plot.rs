//! Filled contour plots.
//!
//! Bands are painted lowest level first, each one covering the region above
//! its threshold, so higher bands overwrite lower ones. Contour outlines, when
//! enabled, go on top.

use std::path::Path;

use isoband::{join_segments, AxisOrder, BandFiller, ContourTracer, ExtractOptions, Grid};
use serde::{Deserialize, Serialize};

use crate::error::{RenderError, RenderResult};
use crate::levels::{interval_level_count, interval_levels, linear_ladder, MAX_LEVELS};
use crate::palette::{Color, Palette};
use crate::png;
use crate::surface::{DrawingSurface, PixmapSurface, Viewport};

/// Default number of ladder levels.
pub const DEFAULT_LEVEL_COUNT: usize = 8;

/// Largest image side, in pixels.
pub const MAX_IMAGE_SIDE: u32 = 16_384;

/// How thresholds are chosen from the data range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum LevelSpec {
    /// `count` evenly spaced levels, see [`linear_ladder`].
    Ladder { count: usize },
    /// Multiples of `interval` inside the range.
    Interval { interval: f64 },
    /// Fixed thresholds.
    Explicit { values: Vec<f64> },
}

impl Default for LevelSpec {
    fn default() -> Self {
        LevelSpec::Ladder {
            count: DEFAULT_LEVEL_COUNT,
        }
    }
}

impl LevelSpec {
    /// Ascending, de-duplicated thresholds for a `[min, max]` data range.
    ///
    /// Fails when there would be more than [`MAX_LEVELS`] thresholds.
    pub fn resolve(&self, min: f64, max: f64) -> RenderResult<Vec<f64>> {
        let count = match self {
            LevelSpec::Ladder { count } => *count as f64,
            LevelSpec::Interval { interval } => interval_level_count(min, max, *interval),
            LevelSpec::Explicit { values } => values.len() as f64,
        };
        if count > MAX_LEVELS as f64 {
            return Err(RenderError::InvalidConfig(format!(
                "more than {MAX_LEVELS} levels over [{min}, {max}]"
            )));
        }
        let mut levels = match self {
            LevelSpec::Ladder { count } => linear_ladder(min, max, *count),
            LevelSpec::Interval { interval } => interval_levels(min, max, *interval),
            LevelSpec::Explicit { values } => values.clone(),
        };
        levels.sort_by(f64::total_cmp);
        levels.dedup();
        Ok(levels)
    }
}

/// Plot configuration loaded from JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    pub levels: LevelSpec,
    /// `[min, max]` used for level generation; the data range when absent.
    pub range: Option<[f64; 2]>,
    pub fill_palette: Palette,
    pub stroke_palette: Palette,
    /// Draw contour outlines over the bands.
    pub contours: bool,
    /// Stroke joined polylines instead of loose segments.
    pub join_contours: bool,
    /// Pixels per grid step.
    pub scale: f64,
    /// Blank border around the plot, in pixels.
    pub margin: u32,
    pub line_width: f32,
    pub background: Color,
    pub anti_alias: bool,
    /// Put `y = 0` at the bottom of the image.
    pub flip_y: bool,
    pub extract: ExtractOptions,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            levels: LevelSpec::default(),
            range: None,
            fill_palette: Palette::Grayscale,
            stroke_palette: Palette::InverseGrayscale,
            contours: false,
            join_contours: true,
            scale: 3.0,
            margin: 0,
            line_width: 1.0,
            background: Color::WHITE,
            anti_alias: false,
            flip_y: false,
            // Rows run along x, as on the classic contour panel.
            extract: ExtractOptions::default().with_axis(AxisOrder::Transposed),
        }
    }
}

impl PlotConfig {
    /// Load plot configuration from JSON string
    pub fn from_json(json: &str) -> RenderResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load plot configuration from file
    pub fn from_file(path: impl AsRef<Path>) -> RenderResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn validate(&self) -> RenderResult<()> {
        let invalid = |msg: String| Err(RenderError::InvalidConfig(msg));

        if !self.scale.is_finite() || self.scale <= 0.0 {
            return invalid(format!("scale must be positive, got {}", self.scale));
        }
        if !self.line_width.is_finite() || self.line_width <= 0.0 {
            return invalid(format!("line_width must be positive, got {}", self.line_width));
        }
        match &self.levels {
            LevelSpec::Ladder { count: 0 } => return invalid("level count must be at least 1".into()),
            LevelSpec::Ladder { count } if *count > MAX_LEVELS => {
                return invalid(format!("level count must be at most {MAX_LEVELS}, got {count}"));
            }
            LevelSpec::Explicit { values } if values.len() > MAX_LEVELS => {
                return invalid(format!(
                    "at most {MAX_LEVELS} explicit levels are allowed, got {}",
                    values.len()
                ));
            }
            LevelSpec::Interval { interval } if !interval.is_finite() || *interval <= 0.0 => {
                return invalid(format!("level interval must be positive, got {interval}"));
            }
            LevelSpec::Explicit { values } if values.iter().any(|v| !v.is_finite()) => {
                return invalid("explicit levels must be finite".into());
            }
            _ => {}
        }
        if let Some([min, max]) = self.range {
            if !min.is_finite() || !max.is_finite() || min > max {
                return invalid(format!("invalid value range [{min}, {max}]"));
            }
        }
        self.fill_palette.validate()?;
        self.stroke_palette.validate()
    }

    /// Thresholds for `grid`, ascending.
    pub fn thresholds(&self, grid: &Grid<'_>) -> RenderResult<Vec<f64>> {
        let (min, max) = match self.range {
            Some([min, max]) => (min, max),
            None => grid.value_range(),
        };
        self.levels.resolve(min, max)
    }

    /// Image size in pixels for `grid`, at most [`MAX_IMAGE_SIDE`] per side.
    pub fn image_size(&self, grid: &Grid<'_>) -> RenderResult<(u32, u32)> {
        let (extent_x, extent_y) = plot_extent(grid, self.extract.axis);
        let margin = 2.0 * f64::from(self.margin);
        let width = (extent_x * self.scale).ceil() + margin;
        let height = (extent_y * self.scale).ceil() + margin;

        if width > f64::from(MAX_IMAGE_SIDE) || height > f64::from(MAX_IMAGE_SIDE) {
            // Float to int casts saturate.
            return Err(RenderError::Canvas {
                width: width as u32,
                height: height as u32,
            });
        }
        Ok((width as u32, height as u32))
    }
}

/// Grid extent in output units, `(x, y)`.
fn plot_extent(grid: &Grid<'_>, axis: AxisOrder) -> (f64, f64) {
    let rows = (grid.rows() - 1) as f64;
    let cols = (grid.cols() - 1) as f64;
    match axis {
        AxisOrder::RowMajor => (cols, rows),
        AxisOrder::Transposed => (rows, cols),
    }
}

/// A rendered plot: straight RGBA pixels plus the levels that were drawn.
#[derive(Debug, Clone)]
pub struct RenderedPlot {
    pub width: u32,
    pub height: u32,
    pub thresholds: Vec<f64>,
    pub pixels: Vec<u8>,
}

impl RenderedPlot {
    pub fn to_png(&self) -> RenderResult<Vec<u8>> {
        png::create_png_auto(&self.pixels, self.width as usize, self.height as usize)
    }
}

/// Fill one band per threshold, in the order given. Returns the number of
/// polygons painted.
pub fn paint_bands<D: DrawingSurface + ?Sized>(
    surface: &mut D,
    grid: &Grid<'_>,
    thresholds: &[f64],
    colors: &[Color],
    options: ExtractOptions,
) -> RenderResult<usize> {
    let bands = BandFiller::new(options).fill(grid, thresholds, colors)?;

    let mut painted = 0;
    for band in &bands {
        for (color, polygon) in band.iter_styled() {
            surface.fill_polygon(polygon, *color);
            painted += 1;
        }
    }
    Ok(painted)
}

/// Stroke the contour at each threshold. With `join` set, segments are first
/// assembled into polylines. Returns the number of strokes drawn.
pub fn paint_contours<D: DrawingSurface + ?Sized>(
    surface: &mut D,
    grid: &Grid<'_>,
    thresholds: &[f64],
    colors: &[Color],
    options: ExtractOptions,
    line_width: f32,
    join: bool,
) -> RenderResult<usize> {
    let contours = ContourTracer::new(options).trace(grid, thresholds, colors)?;

    let mut strokes = 0;
    for contour in &contours {
        let color = *contour.style;
        if join {
            for line in join_segments(&contour.shapes, isoband::join::DEFAULT_TOLERANCE) {
                surface.stroke_polyline(&line, color, line_width);
                strokes += 1;
            }
        } else {
            for segment in &contour.shapes {
                surface.stroke_segment(segment, color, line_width);
                strokes += 1;
            }
        }
    }
    Ok(strokes)
}

/// Render a filled contour plot of `grid` to RGBA pixels.
pub fn render_plot(grid: &Grid<'_>, config: &PlotConfig) -> RenderResult<RenderedPlot> {
    config.validate()?;

    let thresholds = config.thresholds(grid)?;
    let fills = config.fill_palette.colors(thresholds.len());
    let strokes = config.stroke_palette.colors(thresholds.len());

    let (width, height) = config.image_size(grid)?;
    let margin = config.margin as f64;
    let mut viewport = Viewport::new(config.scale).with_offset(margin, margin);
    if config.flip_y {
        viewport = viewport.flipped(plot_extent(grid, config.extract.axis).1);
    }

    let mut surface =
        PixmapSurface::new(width, height, viewport)?.with_anti_alias(config.anti_alias);
    surface.clear(config.background);

    let polygons = paint_bands(&mut surface, grid, &thresholds, &fills, config.extract)?;
    let lines = if config.contours {
        paint_contours(
            &mut surface,
            grid,
            &thresholds,
            &strokes,
            config.extract,
            config.line_width,
            config.join_contours,
        )?
    } else {
        0
    };

    tracing::debug!(
        rows = grid.rows(),
        cols = grid.cols(),
        width = width,
        height = height,
        levels = thresholds.len(),
        polygons = polygons,
        lines = lines,
        "Rendered contour plot"
    );

    Ok(RenderedPlot {
        width,
        height,
        thresholds,
        pixels: surface.to_rgba(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_json() {
        let config = PlotConfig::from_json("{}").unwrap();
        assert_eq!(config, PlotConfig::default());
        assert_eq!(config.extract.axis, AxisOrder::Transposed);
    }

    #[test]
    fn test_level_spec_json() {
        let config =
            PlotConfig::from_json(r#"{"levels": {"mode": "interval", "interval": 2.5}}"#).unwrap();
        assert_eq!(config.levels, LevelSpec::Interval { interval: 2.5 });
    }

    #[test]
    fn test_resolve_sorts_and_dedups() {
        let spec = LevelSpec::Explicit {
            values: vec![3.0, 1.0, 3.0, 2.0],
        };
        assert_eq!(spec.resolve(0.0, 10.0).unwrap(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_resolve_rejects_dense_interval() {
        let err = LevelSpec::Interval { interval: 1e-300 }
            .resolve(0.0, 1.0)
            .unwrap_err();
        assert_eq!(err.code(), "InvalidConfig");

        let wide = LevelSpec::Interval { interval: 1.0 }.resolve(-f64::MAX, f64::MAX);
        assert!(wide.is_err());

        let ladder = LevelSpec::Ladder { count: 4_000_000_000 }.resolve(0.0, 1.0);
        assert_eq!(ladder.unwrap_err().code(), "InvalidConfig");
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        for json in [
            r#"{"scale": 0}"#,
            r#"{"line_width": -1}"#,
            r#"{"levels": {"mode": "ladder", "count": 0}}"#,
            r#"{"levels": {"mode": "interval", "interval": 0}}"#,
            r#"{"range": [5, 1]}"#,
            r#"{"levels": {"mode": "ladder", "count": 4000000000}}"#,
        ] {
            let err = PlotConfig::from_json(json).unwrap_err();
            assert_eq!(err.code(), "InvalidConfig", "{json}");
        }
    }
}
