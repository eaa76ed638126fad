//! Iso-contour and iso-band extraction for gridded scalar fields.
//!
//! Implements the two marching squares passes used for contour plots:
//! - Contour tracing: independent line segments where the field crosses a level
//! - Band filling: per-cell polygons covering the region above a level, meant
//!   to be painted in ascending level order
//!
//! Both passes share the same cell classification, edge interpolation and
//! case tables, and emit geometry in grid-fractional coordinates. Scaling to
//! pixels, colours and draw order belong to the caller.

pub mod cell;
pub mod error;
pub mod fill;
pub mod geometry;
pub mod grid;
pub mod join;
pub mod table;
pub mod trace;

mod options;
mod sweep;

pub use cell::{classify, interpolate, Cell, TopologyCode, EPSILON};
pub use error::{IsobandError, IsobandResult};
pub use fill::BandFiller;
pub use geometry::{LevelGeometry, LineSegment, Point, Polygon, Polyline};
pub use grid::Grid;
pub use join::join_segments;
pub use options::{AxisOrder, ExtractOptions, SaddleMode};
pub use table::{Corner, Edge, Vertex};
pub use trace::ContourTracer;
