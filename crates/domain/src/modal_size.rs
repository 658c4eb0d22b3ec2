//! Sizing policy for one dimension of a presented modal
//!
//! A `ModalSize` is relative to the parent dimension it is evaluated against, except
//! for [`ModalSize::Custom`] which is a fixed value.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Fraction of the parent used by [`ModalSize::Default`]
pub const DEFAULT_SIZE_RATIO: f64 = 0.66;

/// Fraction of the parent used by [`ModalSize::Half`]
pub const HALF_SIZE_RATIO: f64 = 0.5;

/// Describes how large one dimension of the presented content is
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ModalSize {
    /// Two thirds of the parent, rounded down
    #[default]
    Default,
    /// Half of the parent, rounded down
    Half,
    /// The whole parent
    Full,
    /// A fixed value, independent of the parent
    Custom { size: f64 },
    /// A fraction of the parent in `(0, 1]`, rounded down
    Fluid { percentage: f64 },
    /// The parent minus `margin` on each side
    SideMargin { margin: f64 },
}

impl ModalSize {
    /// Fixed size, rejecting negative or non-finite values
    pub fn custom(size: f64) -> Result<Self, DomainError> {
        let modal_size = ModalSize::Custom { size };
        modal_size.validate()?;
        Ok(modal_size)
    }

    /// Fraction of the parent, rejecting anything outside `(0, 1]`
    pub fn fluid(percentage: f64) -> Result<Self, DomainError> {
        let modal_size = ModalSize::Fluid { percentage };
        modal_size.validate()?;
        Ok(modal_size)
    }

    /// Inset on each side, rejecting negative or non-finite values
    pub fn side_margin(margin: f64) -> Result<Self, DomainError> {
        let modal_size = ModalSize::SideMargin { margin };
        modal_size.validate()?;
        Ok(modal_size)
    }

    /// Check the payload of literal variants, which bypass the constructors
    pub fn validate(&self) -> Result<(), DomainError> {
        match self {
            ModalSize::Default | ModalSize::Half | ModalSize::Full => Ok(()),
            ModalSize::Custom { size } => ensure_non_negative("Custom modal size", *size),
            ModalSize::Fluid { percentage } => {
                if !percentage.is_finite() || *percentage <= 0.0 || *percentage > 1.0 {
                    return Err(DomainError::validation(format!(
                        "Fluid modal size must be within (0, 1], got {}",
                        percentage
                    )));
                }
                Ok(())
            }
            ModalSize::SideMargin { margin } => ensure_non_negative("Modal side margin", *margin),
        }
    }

    /// Width of the presented content inside a parent of width `parent_width`
    pub fn calculate_width(&self, parent_width: f64) -> f64 {
        self.calculate(parent_width)
    }

    /// Height of the presented content inside a parent of height `parent_height`
    pub fn calculate_height(&self, parent_height: f64) -> f64 {
        self.calculate(parent_height)
    }

    fn calculate(&self, parent: f64) -> f64 {
        match self {
            ModalSize::Default => (parent * DEFAULT_SIZE_RATIO).floor(),
            ModalSize::Half => (parent * HALF_SIZE_RATIO).floor(),
            ModalSize::Full => parent,
            ModalSize::Custom { size } => *size,
            ModalSize::Fluid { percentage } => (parent * percentage).floor(),
            ModalSize::SideMargin { margin } => parent - margin * 2.0,
        }
    }
}

fn ensure_non_negative(what: &str, value: f64) -> Result<(), DomainError> {
    if !value.is_finite() || value < 0.0 {
        return Err(DomainError::validation(format!(
            "{} must be a finite, non-negative number, got {}",
            what, value
        )));
    }
    Ok(())
}
