use crate::foundation::error::{ScrollError, ScrollResult};

pub use kurbo::{Size, Vec2};

/// Scroll axis of the content strip.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Direction {
    /// Slides laid out left to right.
    #[default]
    Horizontal,
    /// Slides laid out top to bottom.
    Vertical,
}

impl Direction {
    /// Extent of `size` along this axis.
    pub fn extent(self, size: Size) -> f64 {
        match self {
            Self::Horizontal => size.width,
            Self::Vertical => size.height,
        }
    }

    /// Vector with `value` on this axis and zero on the other.
    pub fn along(self, value: f64) -> Vec2 {
        match self {
            Self::Horizontal => Vec2::new(value, 0.0),
            Self::Vertical => Vec2::new(0.0, value),
        }
    }

    /// Component of `v` on this axis.
    pub fn component(self, v: Vec2) -> f64 {
        match self {
            Self::Horizontal => v.x,
            Self::Vertical => v.y,
        }
    }
}

/// Layout-only subset of [`ScrollConfig`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisConfig {
    /// Scroll axis.
    pub direction: Direction,
    /// Center each element inside the viewport and space neighbours by their margins.
    pub center_elements: bool,
    /// Gap between consecutive elements when not centering.
    pub item_spacing: f64,
}

impl Default for AxisConfig {
    fn default() -> Self {
        ScrollConfig::default().axis()
    }
}

/// Session configuration of a scroll view.
///
/// Set once before initialization. Changing it later requires re-running layout and snap
/// computation (see [`crate::ScrollController::reconfigure`]).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Scroll axis.
    pub direction: Direction,
    /// Snap to the nearest slide when a drag ends.
    pub enable_snapping: bool,
    /// Smoothing rate of the snap animation, per second.
    pub snap_speed: f64,
    /// Center each element inside the viewport.
    pub center_elements: bool,
    /// Gap between consecutive elements when not centering.
    pub item_spacing: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            direction: Direction::Horizontal,
            enable_snapping: true,
            snap_speed: 10.0,
            center_elements: false,
            item_spacing: 20.0,
        }
    }
}

impl ScrollConfig {
    /// Validate numeric settings.
    ///
    /// A non-positive snap speed would leave the snap animation running forever, so it is
    /// rejected here rather than tolerated by the controller.
    pub fn validate(&self) -> ScrollResult<()> {
        if !self.snap_speed.is_finite() || self.snap_speed <= 0.0 {
            return Err(ScrollError::validation(
                "snap_speed must be finite and > 0",
            ));
        }
        if !self.item_spacing.is_finite() || self.item_spacing < 0.0 {
            return Err(ScrollError::validation(
                "item_spacing must be finite and >= 0",
            ));
        }
        Ok(())
    }

    /// Layout settings for the arranger and snap calculator.
    pub fn axis(&self) -> AxisConfig {
        AxisConfig {
            direction: self.direction,
            center_elements: self.center_elements,
            item_spacing: self.item_spacing,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
