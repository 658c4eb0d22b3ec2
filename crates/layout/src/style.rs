//! Effective appearance of a presentation once settings are applied

use presentr_domain::{PresentationType, TransitionType};
use serde::{Deserialize, Serialize};

use crate::settings::PresentationSettings;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PresentationStyle {
    pub transition: TransitionType,
    pub dismiss_transition: TransitionType,
    pub round_corners: bool,
    /// Zero whenever corners are not rounded
    pub corner_radius: f64,
}

impl PresentationStyle {
    /// Merge explicit settings with the preset's defaults
    pub fn resolve(presentation_type: &PresentationType, settings: &PresentationSettings) -> Self {
        let transition = settings
            .transition
            .unwrap_or_else(|| presentation_type.default_transition());
        let round_corners = settings
            .round_corners
            .unwrap_or_else(|| presentation_type.should_round_corners());

        Self {
            transition,
            dismiss_transition: settings.dismiss_transition.unwrap_or(transition),
            round_corners,
            corner_radius: if round_corners {
                settings.corner_radius
            } else {
                0.0
            },
        }
    }
}
