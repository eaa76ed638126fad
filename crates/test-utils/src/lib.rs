//! Shared test utilities for the isoband workspace.
//!
//! This crate provides common testing infrastructure including:
//! - Scalar field generators (ramps, peaks, saddles, waves, noise)
//! - Small hand-checked fixture grids
//! - A float comparison macro
//!
//! # Usage
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```
//!
//! Then import in your tests:
//!
//! ```ignore
//! use test_utils::{assert_close, create_peak_grid, fixtures};
//! ```

pub mod fixtures;
pub mod generators;

// Re-export commonly used items at the crate root
pub use generators::*;

/// Assert that two floats differ by less than a tolerance (default `1e-9`).
///
/// # Usage
///
/// ```
/// use test_utils::assert_close;
///
/// assert_close!(0.1 + 0.2, 0.3);
/// assert_close!(1.0, 1.05, 0.1);
/// ```
#[macro_export]
macro_rules! assert_close {
    ($left:expr, $right:expr) => {
        $crate::assert_close!($left, $right, 1e-9)
    };
    ($left:expr, $right:expr, $tol:expr) => {{
        let (left, right, tol): (f64, f64, f64) = ($left, $right, $tol);
        assert!(
            (left - right).abs() < tol,
            "assertion failed: |{} - {}| < {}",
            left,
            right,
            tol
        );
    }};
}
