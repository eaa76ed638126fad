//! Contour plot rendering.
//!
//! Draws the geometry produced by `isoband` onto a raster:
//! - Threshold ladders and interval levels
//! - Grayscale and color-stop palettes
//! - Filled bands with optional contour outlines, via tiny-skia
//! - PNG encoding

pub mod error;
pub mod levels;
pub mod palette;
pub mod plot;
pub mod png;
pub mod surface;

pub use error::{RenderError, RenderResult};
pub use palette::{Color, ColorStop, Palette};
pub use plot::{paint_bands, paint_contours, render_plot, LevelSpec, PlotConfig, RenderedPlot};
pub use surface::{DrawingSurface, PixmapSurface, Viewport};
