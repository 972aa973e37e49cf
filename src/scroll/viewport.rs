use crate::{
    foundation::core::{Direction, Size, Vec2},
    layout::arrange::Arrangement,
};

/// Host-side scroll rect the controller drives.
///
/// The host owns the actual content: it reports slide sizes, receives their placement, and
/// stores the normalized scroll position that both the drag mechanism and the snap animation
/// write to.
pub trait ScrollViewport {
    /// Size of the visible window.
    fn viewport_size(&self) -> Size;

    /// Sizes of the slides currently in the content, in order.
    fn element_sizes(&self) -> Vec<Size>;

    /// Move slides to their arranged positions and resize the content.
    fn apply_arrangement(&mut self, arrangement: &Arrangement);

    /// Content extent along `direction`.
    fn content_size(&self, direction: Direction) -> f64;

    /// Current normalized position along `direction`.
    fn normalized_position(&self, direction: Direction) -> f64;

    /// Overwrite the normalized position along `direction`.
    fn set_normalized_position(&mut self, direction: Direction, value: f64);
}

/// In-memory [`ScrollViewport`] with no rendering attached.
#[derive(Clone, Debug, PartialEq)]
pub struct VirtualViewport {
    viewport: Size,
    elements: Vec<Size>,
    offsets: Vec<Vec2>,
    content: Size,
    normalized: Vec2,
}

impl VirtualViewport {
    /// Viewport of `viewport` size holding `elements`, scrolled to the start (left / top).
    pub fn new(viewport: Size, elements: Vec<Size>) -> Self {
        Self {
            viewport,
            offsets: vec![Vec2::ZERO; elements.len()],
            elements,
            content: viewport,
            normalized: Vec2::new(0.0, 1.0),
        }
    }

    /// Replace the slide collection. Offsets reset until the next arrangement.
    pub fn set_elements(&mut self, elements: Vec<Size>) {
        self.offsets = vec![Vec2::ZERO; elements.len()];
        self.elements = elements;
    }

    /// Anchored offsets written by the last arrangement.
    pub fn element_offsets(&self) -> &[Vec2] {
        &self.offsets
    }

    /// Content size written by the last arrangement.
    pub fn content(&self) -> Size {
        self.content
    }
}

impl ScrollViewport for VirtualViewport {
    fn viewport_size(&self) -> Size {
        self.viewport
    }

    fn element_sizes(&self) -> Vec<Size> {
        self.elements.clone()
    }

    fn apply_arrangement(&mut self, arrangement: &Arrangement) {
        self.offsets = (0..arrangement.len())
            .map(|idx| arrangement.offset_for(idx))
            .collect();
        match arrangement.direction {
            Direction::Horizontal => self.content.width = arrangement.content_size,
            Direction::Vertical => self.content.height = arrangement.content_size,
        }
    }

    fn content_size(&self, direction: Direction) -> f64 {
        direction.extent(self.content)
    }

    fn normalized_position(&self, direction: Direction) -> f64 {
        direction.component(self.normalized)
    }

    fn set_normalized_position(&mut self, direction: Direction, value: f64) {
        match direction {
            Direction::Horizontal => self.normalized.x = value,
            Direction::Vertical => self.normalized.y = value,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/viewport.rs"]
mod tests;
