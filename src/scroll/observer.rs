/// Payload of a slide-changed notification.
///
/// Emitted when navigation is accepted or a drag resolves to a slide, before any snap animation
/// has finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct SlideChange {
    /// Slide the view is now heading to.
    pub index: usize,
    /// Total number of slides.
    pub slide_count: usize,
}

impl SlideChange {
    /// `true` for the first slide.
    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    /// `true` for the last slide.
    pub fn is_last(&self) -> bool {
        self.index + 1 == self.slide_count
    }
}

/// Capability shared by the built-in add-ons.
pub trait SlideListener {
    /// Slides were arranged and navigation is now enabled.
    fn on_slides_ready(&mut self, _slide_count: usize, _current_index: usize) {}

    /// Navigation was disabled; no slides are available until the next `on_slides_ready`.
    fn on_slides_cleared(&mut self) {}

    /// The current slide changed (or a drag resolved to it again).
    fn on_slide_changed(&mut self, change: &SlideChange);
}

/// Handle returned by [`SlideObservers::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut(&SlideChange)>;

/// Synchronous observer list, notified in subscription order.
#[derive(Default)]
pub struct SlideObservers {
    next_id: u64,
    entries: Vec<(SubscriptionId, Callback)>,
}

impl SlideObservers {
    pub fn subscribe(&mut self, f: impl FnMut(&SlideChange) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(f)));
        id
    }

    /// Remove a subscriber. Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(eid, _)| *eid != id);
        self.entries.len() != before
    }

    pub fn notify(&mut self, change: &SlideChange) {
        for (_, f) in &mut self.entries {
            f(change);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for SlideObservers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlideObservers")
            .field("subscribers", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/observer.rs"]
mod tests;
