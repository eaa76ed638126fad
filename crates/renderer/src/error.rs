//! Error types for plot rendering.

use isoband::IsobandError;
use thiserror::Error;

/// Result type alias using RenderError.
pub type RenderResult<T> = Result<T, RenderError>;

/// Errors raised while configuring, drawing or encoding a plot.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Invalid plot configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid color '{0}'")]
    InvalidColor(String),

    #[error("Cannot allocate a {width}x{height} canvas")]
    Canvas { width: u32, height: u32 },

    #[error("PNG encoding failed: {0}")]
    Encode(String),

    #[error(transparent)]
    Extract(#[from] IsobandError),

    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    Json(#[from] serde_json::Error),
}

impl RenderError {
    /// Short machine-readable name for the error kind.
    pub fn code(&self) -> &'static str {
        match self {
            RenderError::InvalidConfig(_) => "InvalidConfig",
            RenderError::InvalidColor(_) => "InvalidColor",
            RenderError::Canvas { .. } => "Canvas",
            RenderError::Encode(_) => "Encode",
            RenderError::Extract(e) => e.code(),
            RenderError::Io(_) => "Io",
            RenderError::Json(_) => "Json",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_error_passes_through() {
        let err: RenderError = IsobandError::InvalidGrid("too small".into()).into();
        assert_eq!(err.code(), "InvalidGrid");
        assert_eq!(err.to_string(), "Invalid grid: too small");
    }

    #[test]
    fn test_canvas_message() {
        let err = RenderError::Canvas { width: 0, height: 3 };
        assert_eq!(err.to_string(), "Cannot allocate a 0x3 canvas");
    }
}
