use crate::{
    addons::NavCommand,
    scroll::observer::{SlideChange, SlideListener},
};

/// One toggle dot per slide with exclusive selection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToggleIndicators {
    toggles: Vec<bool>,
}

impl ToggleIndicators {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of toggles currently created.
    pub fn len(&self) -> usize {
        self.toggles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toggles.is_empty()
    }

    /// Index of the toggle that is on.
    pub fn selected(&self) -> Option<usize> {
        self.toggles.iter().position(|&on| on)
    }

    /// Turn toggle `index` on by user interaction.
    ///
    /// Yields a navigation command only for an existing toggle that was off; the selection itself
    /// follows once the controller reports the slide change.
    pub fn select(&self, index: usize) -> Option<NavCommand> {
        match self.toggles.get(index) {
            Some(false) => Some(NavCommand::Slide(index)),
            _ => None,
        }
    }

    fn set_exclusive(&mut self, index: usize) {
        if index >= self.toggles.len() {
            return;
        }
        for (i, on) in self.toggles.iter_mut().enumerate() {
            *on = i == index;
        }
    }
}

impl SlideListener for ToggleIndicators {
    fn on_slides_ready(&mut self, slide_count: usize, current_index: usize) {
        self.toggles.clear();
        self.toggles.resize(slide_count, false);
        self.set_exclusive(current_index);
    }

    fn on_slides_cleared(&mut self) {
        self.toggles.clear();
    }

    fn on_slide_changed(&mut self, change: &SlideChange) {
        self.set_exclusive(change.index);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/addons/indicators.rs"]
mod tests;
