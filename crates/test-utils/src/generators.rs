//! Test data generators for synthetic scalar fields.
//!
//! These generators create predictable, verifiable fields that exercise the
//! different cell topologies. All return row-major `Vec<f64>` buffers.

/// Creates a test grid with predictable values.
///
/// Each sample is `col * 1000 + row`, so `grid[row * width + col]` can be
/// checked directly.
///
/// # Example
///
/// ```
/// use test_utils::create_test_grid;
///
/// let grid = create_test_grid(10, 5);
/// assert_eq!(grid.len(), 50);
/// assert_eq!(grid[1], 1000.0); // col=1, row=0
/// assert_eq!(grid[10], 1.0);   // col=0, row=1
/// ```
pub fn create_test_grid(width: usize, height: usize) -> Vec<f64> {
    let mut data = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            data.push((col * 1000 + row) as f64);
        }
    }
    data
}

/// Creates a grid filled with a constant value.
pub fn create_constant_grid(width: usize, height: usize, value: f64) -> Vec<f64> {
    vec![value; width * height]
}

/// Creates a linear ramp along the columns, from `0.0` at column 0 to `max`
/// at the last column.
pub fn create_ramp_grid(width: usize, height: usize, max: f64) -> Vec<f64> {
    let span = (width.max(2) - 1) as f64;
    let mut data = Vec::with_capacity(width * height);
    for _ in 0..height {
        for col in 0..width {
            data.push(col as f64 / span * max);
        }
    }
    data
}

/// Creates a cone-shaped peak of height `peak` at the grid centre, falling
/// linearly to zero at distance `radius` (in samples).
pub fn create_peak_grid(width: usize, height: usize, peak: f64, radius: f64) -> Vec<f64> {
    let cx = (width as f64 - 1.0) / 2.0;
    let cy = (height as f64 - 1.0) / 2.0;
    let mut data = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            let d = ((col as f64 - cx).powi(2) + (row as f64 - cy).powi(2)).sqrt();
            data.push((peak * (1.0 - d / radius)).max(0.0));
        }
    }
    data
}

/// Creates a checkerboard of `high` and `low` samples. Every cell of the
/// result is a saddle at any threshold strictly between the two.
pub fn create_saddle_grid(width: usize, height: usize, low: f64, high: f64) -> Vec<f64> {
    let mut data = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            data.push(if (row + col) % 2 == 0 { high } else { low });
        }
    }
    data
}

/// Creates a smooth field of overlapping sine waves in roughly `[0, 100]`.
pub fn create_wave_grid(width: usize, height: usize) -> Vec<f64> {
    use std::f64::consts::PI;

    let mut data = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            let fx = col as f64 / width.max(1) as f64;
            let fy = row as f64 / height.max(1) as f64;
            let v1 = (fx * PI * 4.0).sin() * 20.0;
            let v2 = (fy * PI * 4.0).sin() * 20.0;
            let v3 = ((fx + fy) * PI * 2.0).sin() * 10.0;
            data.push(50.0 + v1 + v2 + v3);
        }
    }
    data
}

/// Creates deterministic pseudo-random samples in `[0, 1)`.
pub fn create_noise_grid(width: usize, height: usize, seed: u32) -> Vec<f64> {
    let mut data = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            let hash = simple_hash(col as u32, row as u32, seed);
            data.push((hash % 10_000) as f64 / 10_000.0);
        }
    }
    data
}

/// Simple deterministic hash for reproducible test data.
fn simple_hash(x: u32, y: u32, seed: u32) -> u32 {
    let mut h = seed;
    h = h.wrapping_mul(31).wrapping_add(x);
    h = h.wrapping_mul(31).wrapping_add(y);
    h ^= h >> 16;
    h = h.wrapping_mul(0x85ebca6b);
    h ^= h >> 13;
    h = h.wrapping_mul(0xc2b2ae35);
    h ^= h >> 16;
    h
}

/// Creates a grid with NaN values at specified `(col, row)` positions,
/// zeros elsewhere.
pub fn create_grid_with_nans(
    width: usize,
    height: usize,
    nan_positions: &[(usize, usize)],
) -> Vec<f64> {
    let mut data = vec![0.0f64; width * height];
    for &(col, row) in nan_positions {
        if col < width && row < height {
            data[row * width + col] = f64::NAN;
        }
    }
    data
}

/// Nests a row-major buffer into rows.
pub fn to_rows(data: &[f64], width: usize) -> Vec<Vec<f64>> {
    data.chunks(width).map(|r| r.to_vec()).collect()
}
