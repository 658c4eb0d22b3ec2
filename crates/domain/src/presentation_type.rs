//! Presentation presets
//!
//! A [`PresentationType`] describes the size and position of the presented content
//! without knowing anything about the device. Only the `Custom` case carries explicit
//! dimensions; the dynamic cases leave sizing to content-driven measurement.

use serde::{Deserialize, Serialize};

use crate::center_position::ModalCenterPosition;
use crate::modal_size::ModalSize;
use crate::transition::TransitionType;

/// Width of the alert preset, matching the platform's stock alert
pub const ALERT_WIDTH: f64 = 270.0;

/// Height of the alert preset
pub const ALERT_HEIGHT: f64 = 180.0;

/// Named presentation style
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PresentationType {
    /// Small 270 x 180 alert
    Alert,
    /// Average sized popup
    Popup,
    /// Top half of the container
    TopHalf,
    /// Bottom half of the container
    BottomHalf,
    /// The entire container
    FullScreen,
    /// Width and height measured from the content
    Dynamic { center: ModalCenterPosition },
    /// Height measured from the content, width constrained to the container
    DynamicHeight {
        center: ModalCenterPosition,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        side_margin: Option<f64>,
    },
    /// Caller supplied width, height and centre
    Custom {
        width: ModalSize,
        height: ModalSize,
        center: ModalCenterPosition,
    },
}

impl PresentationType {
    /// Width and height sizing for this preset.
    ///
    /// `None` for the dynamic presets, whose size comes from the content.
    pub fn size(&self) -> Option<(ModalSize, ModalSize)> {
        match self {
            PresentationType::Alert => Some((
                ModalSize::Custom { size: ALERT_WIDTH },
                ModalSize::Custom { size: ALERT_HEIGHT },
            )),
            PresentationType::Popup => Some((ModalSize::Default, ModalSize::Default)),
            PresentationType::TopHalf | PresentationType::BottomHalf => {
                Some((ModalSize::Full, ModalSize::Half))
            }
            PresentationType::FullScreen => Some((ModalSize::Full, ModalSize::Full)),
            PresentationType::Custom { width, height, .. } => Some((*width, *height)),
            PresentationType::Dynamic { .. } | PresentationType::DynamicHeight { .. } => None,
        }
    }

    /// Position used when the caller does not override it
    pub fn default_center_position(&self) -> ModalCenterPosition {
        match self {
            PresentationType::Alert | PresentationType::Popup => ModalCenterPosition::Center,
            PresentationType::TopHalf => ModalCenterPosition::TopCenter,
            PresentationType::BottomHalf => ModalCenterPosition::BottomCenter,
            PresentationType::FullScreen => ModalCenterPosition::Center,
            PresentationType::Custom { center, .. } => *center,
            PresentationType::Dynamic { center } => *center,
            PresentationType::DynamicHeight { center, .. } => *center,
        }
    }

    /// Transition used when the caller does not provide one
    pub fn default_transition(&self) -> TransitionType {
        match self {
            PresentationType::TopHalf => TransitionType::CoverVerticalFromTop,
            PresentationType::Alert
            | PresentationType::Popup
            | PresentationType::BottomHalf
            | PresentationType::FullScreen
            | PresentationType::Dynamic { .. }
            | PresentationType::DynamicHeight { .. }
            | PresentationType::Custom { .. } => TransitionType::CoverVertical,
        }
    }

    /// Default corner rounding
    pub fn should_round_corners(&self) -> bool {
        match self {
            PresentationType::Alert | PresentationType::Popup => true,
            PresentationType::TopHalf
            | PresentationType::BottomHalf
            | PresentationType::FullScreen
            | PresentationType::Dynamic { .. }
            | PresentationType::DynamicHeight { .. }
            | PresentationType::Custom { .. } => false,
        }
    }

    /// Whether the size comes from measuring the presented content
    pub fn is_dynamic(&self) -> bool {
        self.size().is_none()
    }

    /// Short name, for logs
    pub fn name(&self) -> &'static str {
        match self {
            PresentationType::Alert => "alert",
            PresentationType::Popup => "popup",
            PresentationType::TopHalf => "top_half",
            PresentationType::BottomHalf => "bottom_half",
            PresentationType::FullScreen => "full_screen",
            PresentationType::Dynamic { .. } => "dynamic",
            PresentationType::DynamicHeight { .. } => "dynamic_height",
            PresentationType::Custom { .. } => "custom",
        }
    }
}

impl std::fmt::Display for PresentationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
