//! Error types for the Martian DMV core

use thiserror::Error;

/// Main error type for Martian DMV operations
#[derive(Error, Debug)]
pub enum DmvError {
    /// Camera access was denied or no device is present
    #[error("Camera unavailable: {0}")]
    CameraUnavailable(String),

    /// Camera session was used after its stream was released
    #[error("Camera session already released")]
    CameraReleased,

    /// Image encoding/decoding error
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings file could not be parsed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Settings are present but unusable
    #[error("Config error: {0}")]
    Config(String),
}

/// Result type alias using DmvError
pub type DmvResult<T> = Result<T, DmvError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DmvError::CameraUnavailable("permission denied".to_string());
        assert_eq!(format!("{}", err), "Camera unavailable: permission denied");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let dmv_err: DmvError = io_err.into();
        assert!(matches!(dmv_err, DmvError::Io(_)));
    }
}
