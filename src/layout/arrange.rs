use crate::foundation::{
    core::{AxisConfig, Direction, Size, Vec2},
    error::{ScrollError, ScrollResult},
};

/// One slide after layout.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct PlacedElement {
    /// Intrinsic size of the slide.
    pub size: Size,
    /// Leading-edge position along the scroll axis.
    ///
    /// Horizontal positions grow to the right from 0. Vertical positions are negative offsets
    /// from the top of the content (the first slide sits at `-margin`).
    pub position: f64,
}

impl PlacedElement {
    /// Extent of the slide along `direction`.
    pub fn extent(&self, direction: Direction) -> f64 {
        direction.extent(self.size)
    }
}

/// Result of one arrangement pass.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Arrangement {
    /// Axis the slides were laid out on.
    pub direction: Direction,
    /// Slides in input order.
    pub elements: Vec<PlacedElement>,
    /// Total content extent along the scroll axis.
    pub content_size: f64,
}

impl Arrangement {
    /// Number of arranged slides.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// `true` when nothing was arranged.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Anchored offset of slide `idx` in content space, or zero for an unknown index.
    pub fn offset_for(&self, idx: usize) -> Vec2 {
        self.elements
            .get(idx)
            .map(|e| self.direction.along(e.position))
            .unwrap_or(Vec2::ZERO)
    }
}

/// Half of the space left around an element inside the viewport, or 0 when not centering.
///
/// Never negative: an element larger than the viewport is placed flush.
pub fn centering_margin(viewport_size: f64, element_size: f64, center: bool) -> f64 {
    if !center {
        return 0.0;
    }
    ((viewport_size - element_size) * 0.5).max(0.0)
}

/// Lay out `sizes` one after another along the configured axis.
///
/// Each slide is placed at the running position plus its centering margin. The running position
/// then advances by the slide extent and, except after the last slide, by the spacing: twice the
/// margin when centering, `item_spacing` otherwise.
pub fn arrange(sizes: &[Size], viewport_size: f64, axis: &AxisConfig) -> ScrollResult<Arrangement> {
    if sizes.is_empty() {
        return Err(ScrollError::NoElements);
    }

    let dir = axis.direction;
    let last = sizes.len() - 1;
    let mut elements = Vec::with_capacity(sizes.len());
    let mut cursor = 0.0f64;

    for (idx, &size) in sizes.iter().enumerate() {
        let extent = dir.extent(size);
        let margin = centering_margin(viewport_size, extent, axis.center_elements);

        let leading = cursor + margin;
        let position = match dir {
            Direction::Horizontal => leading,
            Direction::Vertical => -leading,
        };
        elements.push(PlacedElement { size, position });

        if idx < last {
            let spacing = if axis.center_elements {
                margin * 2.0
            } else {
                axis.item_spacing
            };
            cursor += extent + spacing;
        } else {
            cursor += extent;
        }
    }

    Ok(Arrangement {
        direction: dir,
        elements,
        content_size: cursor,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/layout/arrange.rs"]
mod tests;
