//! Error types for contour extraction.

use thiserror::Error;

/// Result type alias using IsobandError.
pub type IsobandResult<T> = Result<T, IsobandError>;

/// Precondition failures detected before any geometry is produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IsobandError {
    #[error("Invalid grid: {0}")]
    InvalidGrid(String),

    #[error("Got {thresholds} thresholds but {styles} styles")]
    MismatchedThresholdStyles { thresholds: usize, styles: usize },

    #[error("Non-finite sample {value} at row {row}, column {col}")]
    NonFiniteSample { row: usize, col: usize, value: f64 },

    #[error("Non-finite threshold {value} at index {index}")]
    NonFiniteThreshold { index: usize, value: f64 },
}

impl IsobandError {
    /// Short machine-readable code, stable across message changes.
    pub fn code(&self) -> &'static str {
        match self {
            IsobandError::InvalidGrid(_) => "InvalidGrid",
            IsobandError::MismatchedThresholdStyles { .. } => "MismatchedThresholdStyles",
            IsobandError::NonFiniteSample { .. } => "NonFiniteSample",
            IsobandError::NonFiniteThreshold { .. } => "NonFiniteThreshold",
        }
    }
}

/// Check that thresholds and styles pair up and every threshold is finite.
pub(crate) fn validate_levels<S>(thresholds: &[f64], styles: &[S]) -> IsobandResult<()> {
    if thresholds.len() != styles.len() {
        return Err(IsobandError::MismatchedThresholdStyles {
            thresholds: thresholds.len(),
            styles: styles.len(),
        });
    }

    if let Some((index, &value)) = thresholds.iter().enumerate().find(|(_, t)| !t.is_finite()) {
        return Err(IsobandError::NonFiniteThreshold { index, value });
    }

    Ok(())
}
