//! Errors raised while turning a presentation into a concrete frame

use presentr_domain::{DomainError, ModalCenterPosition, Rect, Size};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LayoutError {
    /// Container frame has a negative or non-finite dimension
    #[error("Invalid container frame: {0:?}")]
    InvalidContainer(Rect),

    /// Measured or computed size has a negative or non-finite dimension
    #[error("Invalid presented size: {0:?}")]
    InvalidSize(Size),

    /// A dynamic presentation was laid out without a measured content size
    #[error("Presentation type '{presentation_type}' requires a measured content size")]
    MissingContentSize { presentation_type: &'static str },

    /// Neither the centre nor the origin resolver produced a point
    #[error("Position '{0}' resolved neither a center nor an origin")]
    UnresolvedPosition(ModalCenterPosition),

    /// Settings hold out-of-range values
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    #[error("Settings JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl LayoutError {
    pub fn invalid_settings(msg: impl Into<String>) -> Self {
        Self::InvalidSettings(msg.into())
    }
}
