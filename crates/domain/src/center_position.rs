//! Center position of a presented modal
//!
//! A position is deliberately non-specific: it only becomes a concrete point once the
//! container frame is known at presentation time. Modes anchored by their centre are
//! resolved with [`ModalCenterPosition::resolve_center_point`]; bottom-aligned and
//! origin-anchored modes go through [`ModalCenterPosition::resolve_origin`]. Callers try
//! the centre first and fall back to the origin.

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Rect, Size};

/// Where the presented content should land inside its container
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ModalCenterPosition {
    /// Centre of the container
    Center,
    /// Centre of the top half of the container
    TopCenter,
    /// Centre of the bottom half of the container
    BottomCenter,
    /// Aligned to the bottom edge of the container
    Bottom,
    /// Explicit centre point
    Custom { center: Point },
    /// Explicit origin (top-left corner) of the presented content
    CustomOrigin { origin: Point },
}

impl ModalCenterPosition {
    /// Centre point of the presented content for centre-anchored modes.
    ///
    /// Returns `None` for [`Bottom`](Self::Bottom) and
    /// [`CustomOrigin`](Self::CustomOrigin), which are resolved by
    /// [`resolve_origin`](Self::resolve_origin) instead.
    pub fn resolve_center_point(&self, container_frame: Rect) -> Option<Point> {
        match self {
            ModalCenterPosition::Center => {
                Some(Point::new(container_frame.mid_x(), container_frame.mid_y()))
            }
            // Quarter line, lifted by one point
            ModalCenterPosition::TopCenter => Some(Point::new(
                container_frame.mid_x(),
                container_frame.origin.y + (container_frame.height() * (1.0 / 4.0) - 1.0),
            )),
            ModalCenterPosition::BottomCenter => Some(Point::new(
                container_frame.mid_x(),
                container_frame.origin.y + container_frame.height() * (3.0 / 4.0),
            )),
            ModalCenterPosition::Bottom => None,
            ModalCenterPosition::Custom { center } => Some(*center),
            ModalCenterPosition::CustomOrigin { .. } => None,
        }
    }

    /// Origin of the presented content for origin-anchored modes.
    ///
    /// `Bottom` centres horizontally and leaves `margin` between the content and the
    /// container's bottom edge. It works in the container's own coordinates, so
    /// `container_frame.origin` is not added. Every centre-anchored mode returns `None`.
    pub fn resolve_origin(
        &self,
        container_frame: Rect,
        presented_size: Size,
        margin: f64,
    ) -> Option<Point> {
        match self {
            ModalCenterPosition::Bottom => Some(Point::new(
                (container_frame.width() - presented_size.width) / 2.0,
                container_frame.height() - presented_size.height - margin,
            )),
            ModalCenterPosition::CustomOrigin { origin } => Some(*origin),
            ModalCenterPosition::Center
            | ModalCenterPosition::TopCenter
            | ModalCenterPosition::BottomCenter
            | ModalCenterPosition::Custom { .. } => None,
        }
    }
}

impl std::fmt::Display for ModalCenterPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModalCenterPosition::Center => write!(f, "center"),
            ModalCenterPosition::TopCenter => write!(f, "top center"),
            ModalCenterPosition::BottomCenter => write!(f, "bottom center"),
            ModalCenterPosition::Bottom => write!(f, "bottom"),
            ModalCenterPosition::Custom { center } => {
                write!(f, "custom center ({}, {})", center.x, center.y)
            }
            ModalCenterPosition::CustomOrigin { origin } => {
                write!(f, "custom origin ({}, {})", origin.x, origin.y)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frames() -> Vec<Rect> {
        vec![
            Rect::new(0.0, 0.0, 320.0, 480.0),
            Rect::new(12.0, 64.0, 375.0, 667.0),
            Rect::new(-40.0, 20.5, 1024.0, 768.0),
            Rect::new(0.0, 0.0, 0.0, 0.0),
        ]
    }

    #[test]
    fn test_center_is_midpoint() {
        for frame in frames() {
            let point = ModalCenterPosition::Center
                .resolve_center_point(frame)
                .expect("center resolves");
            assert_eq!(point.x, frame.origin.x + frame.width() / 2.0);
            assert_eq!(point.y, frame.origin.y + frame.height() / 2.0);
        }
    }

    #[test]
    fn test_top_and_bottom_center_offsets() {
        for frame in frames() {
            let top = ModalCenterPosition::TopCenter
                .resolve_center_point(frame)
                .expect("top center resolves");
            assert_eq!(top.x, frame.mid_x());
            assert_eq!(top.y, frame.origin.y + frame.height() / 4.0 - 1.0);

            let bottom = ModalCenterPosition::BottomCenter
                .resolve_center_point(frame)
                .expect("bottom center resolves");
            assert_eq!(bottom.x, frame.mid_x());
            assert_eq!(bottom.y, frame.origin.y + frame.height() * 3.0 / 4.0);
        }
    }

    #[test]
    fn test_portrait_phone_scenario() {
        let frame = Rect::new(0.0, 0.0, 320.0, 480.0);
        assert_eq!(
            ModalCenterPosition::Center.resolve_center_point(frame),
            Some(Point::new(160.0, 240.0))
        );
        assert_eq!(
            ModalCenterPosition::TopCenter.resolve_center_point(frame),
            Some(Point::new(160.0, 119.0))
        );
        assert_eq!(
            ModalCenterPosition::BottomCenter.resolve_center_point(frame),
            Some(Point::new(160.0, 360.0))
        );
    }

    #[test]
    fn test_origin_modes_have_no_center() {
        let origin = ModalCenterPosition::CustomOrigin {
            origin: Point::new(5.0, 5.0),
        };
        for frame in frames() {
            assert_eq!(ModalCenterPosition::Bottom.resolve_center_point(frame), None);
            assert_eq!(origin.resolve_center_point(frame), None);
        }
    }

    #[test]
    fn test_custom_center_ignores_container() {
        let center = Point::new(42.0, -7.0);
        let position = ModalCenterPosition::Custom { center };
        for frame in frames() {
            assert_eq!(position.resolve_center_point(frame), Some(center));
        }
    }

    #[test]
    fn test_bottom_origin_scenario() {
        let origin = ModalCenterPosition::Bottom.resolve_origin(
            Rect::new(0.0, 0.0, 320.0, 480.0),
            Size::new(300.0, 100.0),
            20.0,
        );
        assert_eq!(origin, Some(Point::new(10.0, 360.0)));
    }

    #[test]
    fn test_bottom_origin_ignores_container_origin() {
        let size = Size::new(300.0, 100.0);
        let at_zero =
            ModalCenterPosition::Bottom.resolve_origin(Rect::new(0.0, 0.0, 320.0, 480.0), size, 8.0);
        let shifted = ModalCenterPosition::Bottom.resolve_origin(
            Rect::new(100.0, 250.0, 320.0, 480.0),
            size,
            8.0,
        );
        assert_eq!(at_zero, shifted);
    }

    #[test]
    fn test_custom_origin_is_verbatim() {
        let origin = Point::new(-3.0, 99.5);
        let position = ModalCenterPosition::CustomOrigin { origin };
        assert_eq!(
            position.resolve_origin(Rect::new(1.0, 2.0, 3.0, 4.0), Size::new(500.0, 500.0), 77.0),
            Some(origin)
        );
        assert_eq!(
            position.resolve_origin(Rect::ZERO, Size::ZERO, 0.0),
            Some(origin)
        );
    }

    #[test]
    fn test_center_modes_have_no_origin() {
        let frame = Rect::new(0.0, 0.0, 320.0, 480.0);
        let size = Size::new(100.0, 100.0);
        for position in [
            ModalCenterPosition::Center,
            ModalCenterPosition::TopCenter,
            ModalCenterPosition::BottomCenter,
            ModalCenterPosition::Custom {
                center: Point::new(1.0, 1.0),
            },
        ] {
            assert_eq!(position.resolve_origin(frame, size, 0.0), None);
        }
    }

    #[test]
    fn test_serde_tagged_form() {
        let json = serde_json::to_value(ModalCenterPosition::CustomOrigin {
            origin: Point::new(1.0, 2.0),
        })
        .expect("serialize");
        assert_eq!(json["type"], "custom_origin");
        assert_eq!(json["origin"]["x"], 1.0);

        let parsed: ModalCenterPosition =
            serde_json::from_str(r#"{"type":"top_center"}"#).expect("deserialize");
        assert_eq!(parsed, ModalCenterPosition::TopCenter);
    }
}
