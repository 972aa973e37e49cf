use crate::{
    addons::NavCommand,
    scroll::observer::{SlideChange, SlideListener},
};

/// Which navigation button was pressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum NavButton {
    /// Go back one slide.
    Previous,
    /// Go forward one slide.
    Next,
}

/// How a button reacts when its direction runs out of slides.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum BoundaryMode {
    /// Hide the button.
    #[default]
    Hide,
    /// Keep it visible but not interactable.
    Disable,
}

/// Presentation state of one button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ButtonState {
    pub visible: bool,
    pub interactable: bool,
}

impl ButtonState {
    const ACTIVE: Self = Self {
        visible: true,
        interactable: true,
    };

    fn at_boundary(mode: BoundaryMode, boundary: bool) -> Self {
        match (mode, boundary) {
            (_, false) => Self::ACTIVE,
            (BoundaryMode::Hide, true) => Self {
                visible: false,
                interactable: true,
            },
            (BoundaryMode::Disable, true) => Self {
                visible: true,
                interactable: false,
            },
        }
    }

    /// Visible and interactable.
    pub fn is_usable(&self) -> bool {
        self.visible && self.interactable
    }
}

/// Boundary modes for the two buttons, as loaded from a scene file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ButtonsConfig {
    pub previous: BoundaryMode,
    pub next: BoundaryMode,
}

/// Previous/next buttons that disappear (or grey out) at the ends of the strip.
///
/// Buttons stay inert until the controller reports that slides are ready.
#[derive(Clone, Debug, PartialEq)]
pub struct NavigationButtons {
    config: ButtonsConfig,
    ready: bool,
    previous: ButtonState,
    next: ButtonState,
}

impl NavigationButtons {
    pub fn new(config: ButtonsConfig) -> Self {
        Self {
            config,
            ready: false,
            previous: ButtonState::ACTIVE,
            next: ButtonState::ACTIVE,
        }
    }

    pub fn previous(&self) -> ButtonState {
        self.previous
    }

    pub fn next(&self) -> ButtonState {
        self.next
    }

    /// Command for a click on `button`, if the button can currently be clicked.
    pub fn click(&self, button: NavButton) -> Option<NavCommand> {
        if !self.ready {
            return None;
        }
        match button {
            NavButton::Previous if self.previous.is_usable() => Some(NavCommand::Previous),
            NavButton::Next if self.next.is_usable() => Some(NavCommand::Next),
            _ => None,
        }
    }

    fn refresh(&mut self, index: usize, slide_count: usize) {
        let is_first = index == 0;
        let is_last = index + 1 == slide_count;
        self.previous = ButtonState::at_boundary(self.config.previous, is_first);
        self.next = ButtonState::at_boundary(self.config.next, is_last);
    }
}

impl SlideListener for NavigationButtons {
    fn on_slides_ready(&mut self, slide_count: usize, current_index: usize) {
        self.ready = true;
        self.refresh(current_index, slide_count);
    }

    fn on_slides_cleared(&mut self) {
        self.ready = false;
        self.previous = ButtonState::ACTIVE;
        self.next = ButtonState::ACTIVE;
    }

    fn on_slide_changed(&mut self, change: &SlideChange) {
        self.refresh(change.index, change.slide_count);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/addons/buttons.rs"]
mod tests;
