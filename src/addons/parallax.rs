use crate::{
    foundation::core::{Direction, Vec2},
    scroll::observer::{SlideChange, SlideListener},
};

/// A background layer that follows the content at a fraction of its speed.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ParallaxLayer {
    /// Fraction of the content displacement applied to this layer.
    #[serde(default = "default_layer_speed")]
    pub speed: f64,
    /// Layer position with the content at rest.
    #[serde(default)]
    pub initial: Vec2,
}

fn default_layer_speed() -> f64 {
    0.5
}

impl ParallaxLayer {
    pub fn new(speed: f64, initial: Vec2) -> Self {
        Self { speed, initial }
    }
}

/// Moves background layers with the scroll position every frame.
///
/// Content displacement uses the same axis convention as the arranged slides: horizontal content
/// moves toward negative x as it scrolls, vertical content toward positive y (slides sit at
/// negative y below the top).
#[derive(Clone, Debug, PartialEq)]
pub struct ParallaxEffect {
    layers: Vec<ParallaxLayer>,
    positions: Vec<Vec2>,
    focused_slide: Option<usize>,
}

impl ParallaxEffect {
    pub fn new(layers: Vec<ParallaxLayer>) -> Self {
        let positions = layers.iter().map(|l| l.initial).collect();
        Self {
            layers,
            positions,
            focused_slide: None,
        }
    }

    pub fn layers(&self) -> &[ParallaxLayer] {
        &self.layers
    }

    /// Current layer positions, in layer order.
    pub fn positions(&self) -> &[Vec2] {
        &self.positions
    }

    /// Slide named by the last notification.
    pub fn focused_slide(&self) -> Option<usize> {
        self.focused_slide
    }

    /// Recompute layer positions for a normalized scroll position.
    ///
    /// `scrollable_px` is the content extent minus the viewport extent.
    pub fn update(&mut self, direction: Direction, normalized: f64, scrollable_px: f64) {
        let scrollable_px = scrollable_px.max(0.0);
        let displacement = match direction {
            Direction::Horizontal => -normalized * scrollable_px,
            Direction::Vertical => (1.0 - normalized) * scrollable_px,
        };
        for (pos, layer) in self.positions.iter_mut().zip(&self.layers) {
            *pos = layer.initial + direction.along(displacement * layer.speed);
        }
    }
}

impl SlideListener for ParallaxEffect {
    fn on_slides_cleared(&mut self) {
        self.focused_slide = None;
        for (pos, layer) in self.positions.iter_mut().zip(&self.layers) {
            *pos = layer.initial;
        }
    }

    fn on_slide_changed(&mut self, change: &SlideChange) {
        self.focused_slide = Some(change.index);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/addons/parallax.rs"]
mod tests;
