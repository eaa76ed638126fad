//! Small hand-checked grids used across the test suite.

/// 3x3 grid with a single interior peak; every border sample is zero.
pub const PEAK_3X3: [[f64; 3]; 3] = [[0.0, 0.0, 0.0], [0.0, 10.0, 0.0], [0.0, 0.0, 0.0]];

/// 2x2 grid rising left to right. At threshold 5 the single cell has
/// `p0 = 0, p1 = 10, p2 = 10, p3 = 0`, topology code 6.
pub const RISING_2X2: [[f64; 2]; 2] = [[0.0, 10.0], [0.0, 10.0]];

/// 2x2 saddle with `p0` and `p2` high (code 10 for thresholds in `(0, 10)`).
pub const SADDLE_2X2: [[f64; 2]; 2] = [[10.0, 0.0], [0.0, 10.0]];

/// 4x4 grid with a plateau of height 4 in the middle.
pub const PLATEAU_4X4: [[f64; 4]; 4] = [
    [0.0, 0.0, 0.0, 0.0],
    [0.0, 4.0, 4.0, 0.0],
    [0.0, 4.0, 4.0, 0.0],
    [0.0, 0.0, 0.0, 0.0],
];

/// Corner values of a cell with topology code `code` at threshold 5.
///
/// Above corners get `10.0`, below corners `0.0`, in `p0..p3` order.
pub fn corners_for_code(code: u8) -> [f64; 4] {
    let bit = |b: u8| if code & b != 0 { 10.0 } else { 0.0 };
    [bit(8), bit(4), bit(2), bit(1)]
}

/// Ascending thresholds with one style token per level.
pub fn ladder(levels: &[f64]) -> (Vec<f64>, Vec<String>) {
    let styles = (0..levels.len()).map(|i| format!("level-{i}")).collect();
    (levels.to_vec(), styles)
}
