//! Pager configuration

use serde::{Deserialize, Serialize};

/// Gesture axis and slide direction of the container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    /// Pages stack top-to-bottom; wheel/touch vertical component drives navigation
    Vertical,
    /// Pages stack left-to-right; horizontal component drives navigation
    Horizontal,
}

/// Placement of the dot indicator overlay inside the container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlPosition {
    Left,
    Right,
    Top,
    Bottom,
}

/// Pager configuration, fixed for the lifetime of a mounted container
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagerConfig {
    /// Gesture dimension and enter/exit edges
    pub axis: Axis,

    /// Accumulated delta magnitude required to commit a page change
    pub threshold: f32,

    /// Transition lock duration and slide timing, in seconds
    pub duration_seconds: f32,

    /// When false the container renders a plain sequential layout with
    /// no gesture or transition machinery
    pub interaction_enabled: bool,

    /// Whether the dot indicator overlay is shown
    pub controls_enabled: bool,

    /// Where the dot indicator overlay is anchored
    pub control_position: ControlPosition,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            axis: Axis::Vertical,
            threshold: 100.0,
            duration_seconds: 0.8,
            interaction_enabled: true,
            controls_enabled: true,
            control_position: ControlPosition::Right,
        }
    }
}

impl PagerConfig {
    /// Transition duration as a [`std::time::Duration`]
    pub fn duration(&self) -> std::time::Duration {
        std::time::Duration::from_secs_f32(self.duration_seconds.max(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PagerConfig::default();
        assert_eq!(config.axis, Axis::Vertical);
        assert_eq!(config.threshold, 100.0);
        assert_eq!(config.duration_seconds, 0.8);
        assert!(config.interaction_enabled);
        assert!(config.controls_enabled);
        assert_eq!(config.control_position, ControlPosition::Right);
    }

    #[test]
    fn test_negative_duration_clamps_to_zero() {
        let config = PagerConfig {
            duration_seconds: -1.0,
            ..Default::default()
        };
        assert_eq!(config.duration(), std::time::Duration::ZERO);
    }
}
