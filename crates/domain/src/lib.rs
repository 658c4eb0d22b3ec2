//! Presentr Domain - geometry of modal presentations
//!
//! Pure value types describing where a presented modal should appear and how large it
//! is. Nothing here mutates state or performs I/O; each query is a total function over
//! a closed set of variants.

pub mod center_position;
pub mod error;
pub mod geometry;
pub mod modal_size;
pub mod presentation_type;
pub mod transition;

pub use center_position::ModalCenterPosition;
pub use error::DomainError;
pub use geometry::{Point, Rect, Size};
pub use modal_size::{ModalSize, DEFAULT_SIZE_RATIO, HALF_SIZE_RATIO};
pub use presentation_type::{PresentationType, ALERT_HEIGHT, ALERT_WIDTH};
pub use transition::TransitionType;
