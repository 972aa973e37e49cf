use crate::{
    foundation::{
        core::{AxisConfig, Direction},
        error::{ScrollError, ScrollResult},
        math::clamp01,
    },
    layout::arrange::{Arrangement, centering_margin},
};

/// Normalized scroll positions, one per slide, in slide order.
///
/// Each value is in `[0, 1]`. Horizontal targets grow from 0 (start) to 1 (end); vertical
/// targets follow the scroll-rect convention where 1 is the top.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(transparent)]
pub struct SnapTargets(Vec<f64>);

impl SnapTargets {
    /// Derive snap targets from a finished arrangement.
    pub fn compute(arrangement: &Arrangement, viewport_size: f64, axis: &AxisConfig) -> Self {
        let dir = axis.direction;
        let scrollable = (arrangement.content_size - viewport_size).max(1.0);

        let targets = arrangement
            .elements
            .iter()
            .map(|el| {
                let margin = centering_margin(viewport_size, el.extent(dir), axis.center_elements);
                match dir {
                    Direction::Horizontal => clamp01((el.position - margin) / scrollable),
                    Direction::Vertical => 1.0 - clamp01((-el.position - margin) / scrollable),
                }
            })
            .collect();
        Self(targets)
    }

    /// Target for `index`.
    pub fn get(&self, index: usize) -> ScrollResult<f64> {
        self.0
            .get(index)
            .copied()
            .ok_or(ScrollError::IndexOutOfRange {
                index,
                len: self.0.len(),
            })
    }

    /// Target of the first slide, if any.
    pub fn first(&self) -> Option<f64> {
        self.0.first().copied()
    }

    /// Index of the target closest to `normalized`.
    pub fn nearest_index(&self, normalized: f64) -> usize {
        find_nearest_index(&self.0, normalized)
    }

    /// Number of targets (= slides).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` when there are no slides.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the raw target values.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

impl From<Vec<f64>> for SnapTargets {
    fn from(value: Vec<f64>) -> Self {
        Self(value)
    }
}

/// Index of the value in `targets` closest to `normalized`.
///
/// Ties go to the lowest index. An empty slice yields 0, so callers must check for slides first.
pub fn find_nearest_index(targets: &[f64], normalized: f64) -> usize {
    let mut best_idx = 0;
    let mut best_dist = f64::INFINITY;
    for (idx, &t) in targets.iter().enumerate() {
        let dist = (normalized - t).abs();
        if dist < best_dist {
            best_dist = dist;
            best_idx = idx;
        }
    }
    best_idx
}

#[cfg(test)]
#[path = "../../tests/unit/snap/targets.rs"]
mod tests;
