//! Presentation settings value object
//!
//! Every field is optional in the serialized form. Overrides left as `None` fall back
//! to the defaults of the chosen [`PresentationType`](presentr_domain::PresentationType).

use presentr_domain::{ModalCenterPosition, TransitionType};
use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

/// Caller-tunable knobs applied on top of a presentation preset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresentationSettings {
    // ============================================================================
    // Geometry
    // ============================================================================

    /// Gap between bottom-aligned content and the container's bottom edge
    #[serde(default)]
    pub margin: f64,

    /// Replaces the preset's default center position
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub center_position: Option<ModalCenterPosition>,

    /// Side margin for `DynamicHeight` presets that don't carry their own
    #[serde(default)]
    pub dynamic_side_margin: f64,

    // ============================================================================
    // Transitions
    // ============================================================================

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition: Option<TransitionType>,

    /// Falls back to the presentation transition
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dismiss_transition: Option<TransitionType>,

    // ============================================================================
    // Appearance
    // ============================================================================

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub round_corners: Option<bool>,

    #[serde(default = "default_corner_radius")]
    pub corner_radius: f64,
}

fn default_corner_radius() -> f64 { 4.0 }

impl Default for PresentationSettings {
    fn default() -> Self {
        Self {
            margin: 0.0,
            center_position: None,
            dynamic_side_margin: 0.0,
            transition: None,
            dismiss_transition: None,
            round_corners: None,
            corner_radius: default_corner_radius(),
        }
    }
}

impl PresentationSettings {
    /// Parse settings from JSON and validate them
    pub fn from_json(json: &str) -> Result<Self, LayoutError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), LayoutError> {
        for (name, value) in [
            ("margin", self.margin),
            ("dynamic_side_margin", self.dynamic_side_margin),
            ("corner_radius", self.corner_radius),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(LayoutError::invalid_settings(format!(
                    "{} must be a finite, non-negative number, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Builder methods
    // -------------------------------------------------------------------------

    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_center_position(mut self, position: ModalCenterPosition) -> Self {
        self.center_position = Some(position);
        self
    }

    pub fn with_dynamic_side_margin(mut self, margin: f64) -> Self {
        self.dynamic_side_margin = margin;
        self
    }

    pub fn with_transition(mut self, transition: TransitionType) -> Self {
        self.transition = Some(transition);
        self
    }

    pub fn with_dismiss_transition(mut self, transition: TransitionType) -> Self {
        self.dismiss_transition = Some(transition);
        self
    }

    pub fn with_round_corners(mut self, round: bool) -> Self {
        self.round_corners = Some(round);
        self
    }

    pub fn with_corner_radius(mut self, radius: f64) -> Self {
        self.corner_radius = radius;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_uses_defaults() {
        let settings = PresentationSettings::from_json("{}").expect("valid settings");
        assert_eq!(settings, PresentationSettings::default());
        assert_eq!(settings.corner_radius, 4.0);
    }

    #[test]
    fn test_json_overrides() {
        let settings = PresentationSettings::from_json(
            r#"{
                "margin": 20.0,
                "center_position": {"type": "bottom"},
                "transition": "cross-dissolve",
                "round_corners": true
            }"#,
        )
        .expect("valid settings");

        assert_eq!(settings.margin, 20.0);
        assert_eq!(settings.center_position, Some(ModalCenterPosition::Bottom));
        assert_eq!(settings.transition, Some(TransitionType::CrossDissolve));
        assert_eq!(settings.dismiss_transition, None);
        assert_eq!(settings.round_corners, Some(true));
    }

    #[test]
    fn test_rejects_negative_values() {
        let err = PresentationSettings::from_json(r#"{"margin": -1.0}"#)
            .expect_err("negative margin");
        assert!(matches!(err, LayoutError::InvalidSettings(_)));

        let settings = PresentationSettings::default().with_corner_radius(f64::NAN);
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = PresentationSettings::from_json(r#"{"transition": "wobble"}"#)
            .expect_err("unknown transition");
        assert!(matches!(err, LayoutError::Json(_)));
    }
}
