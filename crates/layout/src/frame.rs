//! Frame of the presented content inside its container
//!
//! Sizes come from the preset (or the measured content for dynamic presets). The
//! position is resolved by centre first and by origin when the centre is absent.

use presentr_domain::{ModalCenterPosition, PresentationType, Rect, Size};

use crate::error::LayoutError;
use crate::settings::PresentationSettings;

/// Computes the frame a presentation occupies in a given container
#[derive(Debug, Clone, Copy)]
pub struct PresentedFrame<'a> {
    presentation_type: &'a PresentationType,
    settings: &'a PresentationSettings,
}

impl<'a> PresentedFrame<'a> {
    pub fn new(presentation_type: &'a PresentationType, settings: &'a PresentationSettings) -> Self {
        Self {
            presentation_type,
            settings,
        }
    }

    /// Position in effect: the settings override or the preset default
    pub fn center_position(&self) -> ModalCenterPosition {
        self.settings
            .center_position
            .unwrap_or_else(|| self.presentation_type.default_center_position())
    }

    /// Size of the presented content.
    ///
    /// `content_size` is the measured size of the content; it is required by the
    /// dynamic presets and ignored by the others. The result always has finite,
    /// non-negative dimensions.
    pub fn size(&self, container: Rect, content_size: Option<Size>) -> Result<Size, LayoutError> {
        let size = self.unchecked_size(container, content_size)?;
        if !size.is_valid() {
            return Err(LayoutError::InvalidSize(size));
        }
        Ok(size)
    }

    fn unchecked_size(
        &self,
        container: Rect,
        content_size: Option<Size>,
    ) -> Result<Size, LayoutError> {
        if let Some((width, height)) = self.presentation_type.size() {
            width.validate()?;
            height.validate()?;
            return Ok(Size::new(
                width.calculate_width(container.width()),
                height.calculate_height(container.height()),
            ));
        }

        let measured = content_size.ok_or(LayoutError::MissingContentSize {
            presentation_type: self.presentation_type.name(),
        })?;
        if !measured.is_valid() {
            return Err(LayoutError::InvalidSize(measured));
        }

        match self.presentation_type {
            PresentationType::DynamicHeight { side_margin, .. } => {
                let side_margin = side_margin.unwrap_or(self.settings.dynamic_side_margin);
                Ok(Size::new(
                    container.width() - side_margin * 2.0,
                    measured.height,
                ))
            }
            PresentationType::Dynamic { .. }
            | PresentationType::Alert
            | PresentationType::Popup
            | PresentationType::TopHalf
            | PresentationType::BottomHalf
            | PresentationType::FullScreen
            | PresentationType::Custom { .. } => Ok(measured),
        }
    }

    /// Full frame of the presented content
    pub fn compute(&self, container: Rect, content_size: Option<Size>) -> Result<Rect, LayoutError> {
        self.settings.validate()?;

        let origin_finite = container.origin.x.is_finite() && container.origin.y.is_finite();
        if !origin_finite || !container.size.is_valid() {
            return Err(LayoutError::InvalidContainer(container));
        }

        let size = self.size(container, content_size)?;
        if size.width > container.width() || size.height > container.height() {
            tracing::warn!(
                "Presented size {}x{} exceeds container {}x{} for {}",
                size.width,
                size.height,
                container.width(),
                container.height(),
                self.presentation_type
            );
        }

        let position = self.center_position();
        let frame = match position.resolve_center_point(container) {
            Some(center) => Rect::centered_at(center, size),
            None => {
                let origin = position
                    .resolve_origin(container, size, self.settings.margin)
                    .ok_or(LayoutError::UnresolvedPosition(position))?;
                Rect::from_origin_size(origin, size)
            }
        };

        tracing::debug!(
            "Resolved {} frame at ({}, {}) size {}x{} using {}",
            self.presentation_type,
            frame.origin.x,
            frame.origin.y,
            frame.width(),
            frame.height(),
            position
        );
        Ok(frame)
    }
}
