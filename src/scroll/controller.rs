use crate::{
    addons::{
        Addons, NavCommand,
        buttons::{NavButton, NavigationButtons},
        indicators::ToggleIndicators,
        parallax::ParallaxEffect,
    },
    foundation::{
        core::ScrollConfig,
        error::{ScrollError, ScrollResult},
        math::{SNAP_EPSILON, lerp},
    },
    layout::arrange::{Arrangement, arrange},
    scroll::{
        observer::{SlideChange, SlideObservers, SubscriptionId},
        viewport::ScrollViewport,
    },
    snap::targets::SnapTargets,
};

/// Phase of the scroll state machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub enum ScrollPhase {
    /// Nothing is moving under the controller's control.
    #[default]
    Idle,
    /// An external drag owns the scroll position.
    Dragging,
    /// The controller is easing the position toward the current slide's snap target.
    Snapping,
}

/// Builder for [`ScrollController`]; add-ons are chosen here and cannot be attached later.
#[derive(Debug)]
pub struct ScrollControllerBuilder<V> {
    config: ScrollConfig,
    viewport: Option<V>,
    addons: Addons,
}

impl<V: ScrollViewport> ScrollControllerBuilder<V> {
    pub fn viewport(mut self, viewport: V) -> Self {
        self.viewport = Some(viewport);
        self
    }

    pub fn navigation_buttons(mut self, buttons: NavigationButtons) -> Self {
        self.addons.buttons = Some(buttons);
        self
    }

    pub fn toggle_indicators(mut self, indicators: ToggleIndicators) -> Self {
        self.addons.indicators = Some(indicators);
        self
    }

    pub fn parallax(mut self, parallax: ParallaxEffect) -> Self {
        self.addons.parallax = Some(parallax);
        self
    }

    /// Finish construction. The controller stays inert until [`ScrollController::initialize`].
    pub fn build(self) -> ScrollController<V> {
        ScrollController {
            config: self.config,
            viewport: self.viewport,
            arrangement: None,
            targets: SnapTargets::default(),
            phase: ScrollPhase::Idle,
            current_index: 0,
            ready: false,
            addons: self.addons,
            observers: SlideObservers::default(),
        }
    }
}

/// Snapping, paginated scroll state machine over a [`ScrollViewport`].
///
/// The controller owns the current slide index and the animation phase. It is driven by three
/// kinds of input, all on the caller's thread:
///
/// - drag events ([`begin_drag`](Self::begin_drag) / [`end_drag`](Self::end_drag)),
/// - navigation requests ([`go_to_slide`](Self::go_to_slide) and friends),
/// - one [`advance`](Self::advance) call per rendered frame.
///
/// Slide-changed notifications go out synchronously when a transition is accepted, not when the
/// animation finishes. Until [`initialize`](Self::initialize) succeeds every operation is a no-op.
#[derive(Debug)]
pub struct ScrollController<V> {
    config: ScrollConfig,
    viewport: Option<V>,
    arrangement: Option<Arrangement>,
    targets: SnapTargets,
    phase: ScrollPhase,
    current_index: usize,
    ready: bool,
    addons: Addons,
    observers: SlideObservers,
}

impl<V: ScrollViewport> ScrollController<V> {
    pub fn builder(config: ScrollConfig) -> ScrollControllerBuilder<V> {
        ScrollControllerBuilder {
            config,
            viewport: None,
            addons: Addons::default(),
        }
    }

    /// Controller over `viewport` with no add-ons.
    pub fn new(config: ScrollConfig, viewport: V) -> Self {
        Self::builder(config).viewport(viewport).build()
    }

    /// Arrange slides, compute snap targets and enable navigation.
    ///
    /// Returns the slide count. On error the controller is left inert; calling this again after
    /// the slide collection changed re-runs the whole pass.
    #[tracing::instrument(skip(self))]
    pub fn initialize(&mut self) -> ScrollResult<usize> {
        self.disable();

        if let Err(err) = self.config.validate() {
            tracing::error!(%err, "invalid scroll configuration; scroll view stays inert");
            return Err(err);
        }
        let Some(vp) = self.viewport.as_mut() else {
            tracing::error!("no viewport attached; scroll view stays inert");
            return Err(ScrollError::missing_dependency("viewport"));
        };

        let axis = self.config.axis();
        let dir = axis.direction;
        let viewport_size = dir.extent(vp.viewport_size());

        let arrangement = match arrange(&vp.element_sizes(), viewport_size, &axis) {
            Ok(a) => a,
            Err(err) => {
                tracing::warn!(%err, "nothing to scroll; navigation disabled");
                return Err(err);
            }
        };
        vp.apply_arrangement(&arrangement);

        let targets = SnapTargets::compute(&arrangement, viewport_size, &axis);
        if let Some(first) = targets.first() {
            vp.set_normalized_position(dir, first);
        }

        let slide_count = targets.len();
        tracing::debug!(
            slide_count,
            content_size = arrangement.content_size,
            "snap targets ready"
        );
        self.arrangement = Some(arrangement);
        self.targets = targets;
        self.ready = true;
        self.addons.slides_ready(slide_count, self.current_index);
        Ok(slide_count)
    }

    /// Replace the configuration and re-run [`initialize`](Self::initialize).
    pub fn reconfigure(&mut self, config: ScrollConfig) -> ScrollResult<usize> {
        self.config = config;
        self.initialize()
    }

    fn disable(&mut self) {
        self.ready = false;
        self.arrangement = None;
        self.targets = SnapTargets::default();
        self.phase = ScrollPhase::Idle;
        self.current_index = 0;
        self.addons.slides_cleared();
    }

    /// A drag started. Cancels any in-flight snap. Ignored until the controller is ready.
    pub fn begin_drag(&mut self) {
        if !self.ready {
            return;
        }
        if self.phase == ScrollPhase::Snapping {
            tracing::debug!(index = self.current_index, "drag interrupted snap");
        }
        self.phase = ScrollPhase::Dragging;
    }

    /// A drag ended: pick the slide nearest to the released position and start snapping to it.
    ///
    /// Notifies even when the slide did not change. Returns the resolved index, or `None` when
    /// snapping is disabled or the controller is not ready.
    pub fn end_drag(&mut self) -> Option<usize> {
        self.phase = ScrollPhase::Idle;
        if !self.ready || !self.config.enable_snapping {
            return None;
        }
        let vp = self.viewport.as_ref()?;
        let released = vp.normalized_position(self.config.direction);
        let index = self.targets.nearest_index(released);
        tracing::debug!(released, index, "drag resolved");
        self.navigate(index);
        Some(index)
    }

    /// Advance one frame by `dt` seconds.
    ///
    /// While snapping, moves the normalized position toward the target by exponential smoothing
    /// (`lerp` with factor `dt * snap_speed * 2`) and goes idle once within `0.001`. Frame ticks
    /// never notify.
    pub fn advance(&mut self, dt: f64) -> ScrollPhase {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        if self.ready && self.phase == ScrollPhase::Snapping {
            self.step_snap(dt);
        }
        self.update_parallax();
        self.phase
    }

    fn step_snap(&mut self, dt: f64) {
        let dir = self.config.direction;
        let target = match self.targets.get(self.current_index) {
            Ok(t) => t,
            Err(err) => {
                tracing::warn!(%err, "snap target missing; stopping animation");
                self.phase = ScrollPhase::Idle;
                return;
            }
        };
        let Some(vp) = self.viewport.as_mut() else {
            self.phase = ScrollPhase::Idle;
            return;
        };

        let current = vp.normalized_position(dir);
        let t = dt * self.config.snap_speed * 2.0;
        vp.set_normalized_position(dir, lerp(current, target, t));

        if (vp.normalized_position(dir) - target).abs() < SNAP_EPSILON {
            self.phase = ScrollPhase::Idle;
            tracing::debug!(index = self.current_index, "snap settled");
        }
    }

    fn update_parallax(&mut self) {
        if !self.ready {
            return;
        }
        let (Some(parallax), Some(vp)) = (self.addons.parallax.as_mut(), self.viewport.as_ref())
        else {
            return;
        };
        let dir = self.config.direction;
        let scrollable = vp.content_size(dir) - dir.extent(vp.viewport_size());
        parallax.update(dir, vp.normalized_position(dir), scrollable);
    }

    /// Snap to slide `index`. Out-of-range indices are ignored.
    pub fn go_to_slide(&mut self, index: usize) -> bool {
        if !self.ready {
            return false;
        }
        if index >= self.targets.len() {
            tracing::debug!(
                index,
                slide_count = self.targets.len(),
                "navigation ignored: index out of range"
            );
            return false;
        }
        self.navigate(index);
        true
    }

    /// Snap to the next slide; no-op on the last one.
    pub fn go_to_next(&mut self) -> bool {
        if !self.ready || self.current_index + 1 >= self.targets.len() {
            return false;
        }
        self.navigate(self.current_index + 1);
        true
    }

    /// Snap to the previous slide; no-op on the first one.
    pub fn go_to_previous(&mut self) -> bool {
        if !self.ready || self.current_index == 0 {
            return false;
        }
        self.navigate(self.current_index - 1);
        true
    }

    pub fn handle(&mut self, cmd: NavCommand) -> bool {
        match cmd {
            NavCommand::Next => self.go_to_next(),
            NavCommand::Previous => self.go_to_previous(),
            NavCommand::Slide(index) => self.go_to_slide(index),
        }
    }

    /// Route a click on a navigation button. Ignored without the buttons add-on or when the
    /// button is hidden or disabled.
    pub fn click_button(&mut self, button: NavButton) -> bool {
        let cmd = self.addons.buttons.as_ref().and_then(|b| b.click(button));
        match cmd {
            Some(cmd) => self.handle(cmd),
            None => false,
        }
    }

    /// Route a click on indicator dot `index`.
    pub fn select_indicator(&mut self, index: usize) -> bool {
        let cmd = self.addons.indicators.as_ref().and_then(|t| t.select(index));
        match cmd {
            Some(cmd) => self.handle(cmd),
            None => false,
        }
    }

    fn navigate(&mut self, index: usize) {
        self.current_index = index;
        self.phase = ScrollPhase::Snapping;

        let change = SlideChange {
            index,
            slide_count: self.targets.len(),
        };
        self.addons.slide_changed(&change);
        self.observers.notify(&change);
    }

    pub fn subscribe(&mut self, f: impl FnMut(&SlideChange) + 'static) -> SubscriptionId {
        self.observers.subscribe(f)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Number of slides, 0 until initialized.
    pub fn slide_count(&self) -> usize {
        self.targets.len()
    }

    pub fn phase(&self) -> ScrollPhase {
        self.phase
    }

    pub fn is_animating(&self) -> bool {
        self.phase == ScrollPhase::Snapping
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    pub fn snap_targets(&self) -> &SnapTargets {
        &self.targets
    }

    pub fn arrangement(&self) -> Option<&Arrangement> {
        self.arrangement.as_ref()
    }

    pub fn viewport(&self) -> Option<&V> {
        self.viewport.as_ref()
    }

    /// Mutable viewport access for the host's drag mechanism.
    pub fn viewport_mut(&mut self) -> Option<&mut V> {
        self.viewport.as_mut()
    }

    pub fn navigation_buttons(&self) -> Option<&NavigationButtons> {
        self.addons.buttons.as_ref()
    }

    pub fn toggle_indicators(&self) -> Option<&ToggleIndicators> {
        self.addons.indicators.as_ref()
    }

    pub fn parallax(&self) -> Option<&ParallaxEffect> {
        self.addons.parallax.as_ref()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/controller.rs"]
mod tests;
