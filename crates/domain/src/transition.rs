//! Transition styles used to present and dismiss a modal

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Named transition animation, executed by the host's transition system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransitionType {
    CrossDissolve,
    /// Slides up from the bottom edge
    #[default]
    CoverVertical,
    /// Slides down from the top edge
    CoverVerticalFromTop,
    CoverHorizontalFromRight,
    CoverHorizontalFromLeft,
    FlipHorizontal,
}

impl TransitionType {
    pub const ALL: [TransitionType; 6] = [
        TransitionType::CrossDissolve,
        TransitionType::CoverVertical,
        TransitionType::CoverVerticalFromTop,
        TransitionType::CoverHorizontalFromRight,
        TransitionType::CoverHorizontalFromLeft,
        TransitionType::FlipHorizontal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionType::CrossDissolve => "cross-dissolve",
            TransitionType::CoverVertical => "cover-vertical",
            TransitionType::CoverVerticalFromTop => "cover-vertical-from-top",
            TransitionType::CoverHorizontalFromRight => "cover-horizontal-from-right",
            TransitionType::CoverHorizontalFromLeft => "cover-horizontal-from-left",
            TransitionType::FlipHorizontal => "flip-horizontal",
        }
    }
}

impl std::fmt::Display for TransitionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TransitionType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        TransitionType::ALL
            .into_iter()
            .find(|transition| transition.as_str() == normalized)
            .ok_or_else(|| DomainError::parse(format!("Invalid transition type: {}", s)))
    }
}
