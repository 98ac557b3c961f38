//! Slide math for the two-slot page transition

use egui::Vec2;
use pf_core::{Axis, SlideDirection};

/// Cubic ease-in-out curve used for the page slide
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u * u / 2.0
    }
}

/// Offsets of the outgoing and incoming slots at eased progress `t`
///
/// Forward: the incoming slot starts one extent past the forward edge
/// (bottom for the vertical axis, right for the horizontal) and slides to
/// zero while the outgoing slot leaves toward the backward edge. Backward
/// is the mirror image.
pub fn slide_offsets(
    axis: Axis,
    direction: SlideDirection,
    extent: Vec2,
    t: f32,
) -> (Vec2, Vec2) {
    let span = match axis {
        Axis::Vertical => extent.y,
        Axis::Horizontal => extent.x,
    };
    let sign = match direction {
        SlideDirection::Forward => 1.0,
        SlideDirection::Backward => -1.0,
    };

    let outgoing = -t * span * sign;
    let incoming = (1.0 - t) * span * sign;

    let along = |value: f32| match axis {
        Axis::Vertical => Vec2::new(0.0, value),
        Axis::Horizontal => Vec2::new(value, 0.0),
    };
    (along(outgoing), along(incoming))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_endpoints() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(1.0), 1.0);
        assert!((ease_in_out(0.5) - 0.5).abs() < 1e-6);
        // Out-of-range progress is clamped, not extrapolated
        assert_eq!(ease_in_out(2.0), 1.0);
        assert_eq!(ease_in_out(-1.0), 0.0);
    }

    #[test]
    fn test_ease_is_monotonic() {
        let mut last = 0.0;
        for i in 1..=20 {
            let value = ease_in_out(i as f32 / 20.0);
            assert!(value >= last);
            last = value;
        }
    }

    #[test]
    fn test_forward_vertical_slides_up() {
        let extent = Vec2::new(800.0, 600.0);

        let (out_start, in_start) =
            slide_offsets(Axis::Vertical, SlideDirection::Forward, extent, 0.0);
        assert_eq!(out_start, Vec2::ZERO);
        assert_eq!(in_start, Vec2::new(0.0, 600.0));

        let (out_end, in_end) = slide_offsets(Axis::Vertical, SlideDirection::Forward, extent, 1.0);
        assert_eq!(out_end, Vec2::new(0.0, -600.0));
        assert_eq!(in_end, Vec2::ZERO);
    }

    #[test]
    fn test_backward_vertical_is_mirrored() {
        let extent = Vec2::new(800.0, 600.0);
        let (out_end, in_start) =
            slide_offsets(Axis::Vertical, SlideDirection::Backward, extent, 1.0);
        assert_eq!(out_end, Vec2::new(0.0, 600.0));
        assert_eq!(in_start, Vec2::ZERO);

        let (_, in_at_zero) = slide_offsets(Axis::Vertical, SlideDirection::Backward, extent, 0.0);
        assert_eq!(in_at_zero, Vec2::new(0.0, -600.0));
    }

    #[test]
    fn test_horizontal_axis_moves_on_x() {
        let extent = Vec2::new(800.0, 600.0);
        let (outgoing, incoming) =
            slide_offsets(Axis::Horizontal, SlideDirection::Forward, extent, 0.25);
        assert_eq!(outgoing, Vec2::new(-200.0, 0.0));
        assert_eq!(incoming, Vec2::new(600.0, 0.0));
    }
}
