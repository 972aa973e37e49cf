//! Optional behaviors attached to a controller at construction time.

pub(crate) mod buttons;
pub(crate) mod indicators;
pub(crate) mod parallax;

use crate::scroll::observer::{SlideChange, SlideListener};

use self::{buttons::NavigationButtons, indicators::ToggleIndicators, parallax::ParallaxEffect};

/// Navigation request produced by UI input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum NavCommand {
    /// Advance one slide.
    Next,
    /// Go back one slide.
    Previous,
    /// Jump to a slide.
    Slide(usize),
}

#[derive(Debug, Default)]
pub(crate) struct Addons {
    pub(crate) buttons: Option<NavigationButtons>,
    pub(crate) indicators: Option<ToggleIndicators>,
    pub(crate) parallax: Option<ParallaxEffect>,
}

impl Addons {
    fn listeners(&mut self) -> impl Iterator<Item = &mut dyn SlideListener> {
        let buttons = self.buttons.as_mut().map(|b| b as &mut dyn SlideListener);
        let indicators = self.indicators.as_mut().map(|i| i as &mut dyn SlideListener);
        let parallax = self.parallax.as_mut().map(|p| p as &mut dyn SlideListener);
        buttons.into_iter().chain(indicators).chain(parallax)
    }

    pub(crate) fn slides_ready(&mut self, slide_count: usize, current_index: usize) {
        for l in self.listeners() {
            l.on_slides_ready(slide_count, current_index);
        }
    }

    pub(crate) fn slides_cleared(&mut self) {
        for l in self.listeners() {
            l.on_slides_cleared();
        }
    }

    pub(crate) fn slide_changed(&mut self, change: &SlideChange) {
        for l in self.listeners() {
            l.on_slide_changed(change);
        }
    }
}
