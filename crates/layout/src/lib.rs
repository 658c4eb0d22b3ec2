//! Presentr Layout - controller-side geometry
//!
//! This crate plays the presentation controller's part: it takes a
//! [`PresentationType`], the caller's [`PresentationSettings`], the container frame and
//! (for dynamic presets) the measured content size, and produces the final frame and
//! appearance of the presented content.
//!
//! # Design Principles
//!
//! 1. **Pure** - no host views, every call is a function of its inputs
//! 2. **Centre first** - origin resolution is only used when the centre is absent
//! 3. **Logged, not printed** - diagnostics go through `tracing`

pub mod error;
pub mod frame;
pub mod settings;
pub mod style;

use presentr_domain::{PresentationType, Rect, Size};
use serde::{Deserialize, Serialize};

pub use error::LayoutError;
pub use frame::PresentedFrame;
pub use settings::PresentationSettings;
pub use style::PresentationStyle;

/// Everything a host needs to run a presentation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedPresentation {
    pub presentation_type: PresentationType,
    pub frame: Rect,
    pub style: PresentationStyle,
}

/// Resolve frame and style for `presentation_type` inside `container`
pub fn resolve_presentation(
    presentation_type: PresentationType,
    settings: &PresentationSettings,
    container: Rect,
    content_size: Option<Size>,
) -> Result<ResolvedPresentation, LayoutError> {
    let frame = PresentedFrame::new(&presentation_type, settings).compute(container, content_size)?;
    Ok(ResolvedPresentation {
        presentation_type,
        frame,
        style: PresentationStyle::resolve(&presentation_type, settings),
    })
}
