//! Dot indicator overlay
//!
//! One clickable dot per page, anchored to a container edge. Clicking a dot
//! requests that page through the controller; while a transition is locked
//! the request is simply dropped, like any other navigation.

use egui::{Color32, Painter, Pos2, Rect, Sense, Ui, Vec2};
use pf_core::{ControlPosition, PageController};

/// Custom dot renderer: painter, dot center, whether the dot's page is
/// current, page index
pub type DotPainter = Box<dyn Fn(&Painter, Pos2, bool, usize) + Send + Sync>;

/// Dot indicator visuals
#[derive(Debug, Clone)]
pub struct DotStyle {
    /// Radius of the current page's dot
    pub active_radius: f32,

    /// Radius of the other dots
    pub inactive_radius: f32,

    /// Space between dot edges
    pub gap: f32,

    /// Distance from the anchored container edge to the dot centers
    pub edge_inset: f32,

    pub active_color: Color32,
    pub inactive_color: Color32,
}

impl Default for DotStyle {
    fn default() -> Self {
        Self {
            active_radius: 6.0,
            inactive_radius: 4.0,
            gap: 8.0,
            edge_inset: 20.0,
            active_color: crate::theme::accent_color(),
            inactive_color: crate::theme::muted_color(),
        }
    }
}

impl DotStyle {
    /// Center-to-center distance between neighboring dots
    pub fn spacing(&self) -> f32 {
        self.active_radius * 2.0 + self.gap
    }
}

/// Dot indicator widget
pub struct DotIndicator {
    style: DotStyle,
    custom: Option<DotPainter>,
}

impl Default for DotIndicator {
    fn default() -> Self {
        Self {
            style: DotStyle::default(),
            custom: None,
        }
    }
}

impl DotIndicator {
    pub fn new(style: DotStyle) -> Self {
        Self {
            style,
            custom: None,
        }
    }

    /// Replace the default circle rendering with a custom painter
    pub fn with_painter(mut self, painter: DotPainter) -> Self {
        self.custom = Some(painter);
        self
    }

    /// Draw the dots over the container and route clicks to the controller
    pub fn ui(&self, ui: &mut Ui, container: Rect, controller: &PageController) {
        let count = controller.page_count();
        if count == 0 {
            return;
        }

        let current = controller.current_page();
        let position = controller.config().control_position;
        let centers = dot_centers(
            container,
            position,
            count,
            self.style.spacing(),
            self.style.edge_inset,
        );

        for (index, center) in centers.into_iter().enumerate() {
            let hit = Rect::from_center_size(
                center,
                Vec2::splat(self.style.active_radius * 2.0 + 4.0),
            );
            let id = ui.id().with(("page_dot", controller.id(), index));
            let response = ui.interact(hit, id, Sense::click());
            if response.clicked() {
                controller.go_to(index);
            }

            let active = index == current;
            if let Some(custom) = &self.custom {
                custom(ui.painter(), center, active, index);
            } else {
                let (mut radius, color) = if active {
                    (self.style.active_radius, self.style.active_color)
                } else {
                    (self.style.inactive_radius, self.style.inactive_color)
                };
                if response.hovered() && !active {
                    radius += 1.0;
                }
                ui.painter().circle_filled(center, radius, color);
            }
        }
    }
}

/// Dot center positions for a given container edge
///
/// Left/Right anchor a vertical column centered at mid-height; Top/Bottom a
/// horizontal row centered at mid-width. `inset` is measured from the
/// anchored edge.
pub fn dot_centers(
    container: Rect,
    position: ControlPosition,
    count: usize,
    spacing: f32,
    inset: f32,
) -> Vec<Pos2> {
    let total = spacing * count.saturating_sub(1) as f32;

    (0..count)
        .map(|i| {
            let offset = i as f32 * spacing - total / 2.0;
            match position {
                ControlPosition::Left => {
                    Pos2::new(container.left() + inset, container.center().y + offset)
                }
                ControlPosition::Right => {
                    Pos2::new(container.right() - inset, container.center().y + offset)
                }
                ControlPosition::Top => {
                    Pos2::new(container.center().x + offset, container.top() + inset)
                }
                ControlPosition::Bottom => {
                    Pos2::new(container.center().x + offset, container.bottom() - inset)
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn container() -> Rect {
        Rect::from_min_size(Pos2::ZERO, Vec2::new(800.0, 600.0))
    }

    #[test]
    fn test_right_edge_column_is_centered() {
        let centers = dot_centers(container(), ControlPosition::Right, 3, 20.0, 20.0);
        assert_eq!(centers.len(), 3);
        for center in &centers {
            assert_eq!(center.x, 780.0);
        }
        assert_eq!(centers[0].y, 280.0);
        assert_eq!(centers[1].y, 300.0);
        assert_eq!(centers[2].y, 320.0);
    }

    #[test]
    fn test_bottom_edge_row_is_centered() {
        let centers = dot_centers(container(), ControlPosition::Bottom, 2, 20.0, 20.0);
        for center in &centers {
            assert_eq!(center.y, 580.0);
        }
        assert_eq!(centers[0].x, 390.0);
        assert_eq!(centers[1].x, 410.0);
    }

    #[test]
    fn test_single_dot_sits_at_the_middle() {
        let centers = dot_centers(container(), ControlPosition::Left, 1, 20.0, 20.0);
        assert_eq!(centers, vec![Pos2::new(20.0, 300.0)]);
    }

    #[test]
    fn test_spacing_accounts_for_active_diameter() {
        let style = DotStyle::default();
        assert_eq!(style.spacing(), 20.0);
    }
}
