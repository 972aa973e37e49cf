//! snapscroll is the core of a snapping, paginated scroll view.
//!
//! A strip of fixed-size slides is laid out along one axis, each slide gets a normalized snap
//! target, and a frame-driven state machine keeps the scroll position converging on the current
//! slide while staying out of the way of external drags.
//!
//! # Pipeline overview
//!
//! 1. **Arrange**: `slide sizes + viewport -> Arrangement` (leading-edge positions, content size)
//! 2. **Snap**: `Arrangement -> SnapTargets` (one normalized position in `[0, 1]` per slide)
//! 3. **Control**: [`ScrollController`] turns drag ends, navigation requests and frame ticks into
//!    scroll position updates and slide-changed notifications
//!
//! Rendering, input devices and widget wiring stay on the host side behind the
//! [`ScrollViewport`] trait. [`VirtualViewport`] is an in-memory host for tests and tooling.
//!
//! # Getting started
//!
//! ```
//! use snapscroll::{ScrollConfig, ScrollController, Size, VirtualViewport};
//!
//! let vp = VirtualViewport::new(Size::new(100.0, 100.0), vec![Size::new(100.0, 100.0); 3]);
//! let mut scroll = ScrollController::new(ScrollConfig::default(), vp);
//! scroll.initialize().unwrap();
//!
//! scroll.go_to_next();
//! while scroll.is_animating() {
//!     scroll.advance(1.0 / 60.0);
//! }
//! assert_eq!(scroll.current_index(), 1);
//! ```
#![forbid(unsafe_code)]

mod addons;
mod foundation;
mod layout;
mod scene;
mod scroll;
mod snap;

pub use addons::NavCommand;
pub use addons::buttons::{BoundaryMode, ButtonState, ButtonsConfig, NavButton, NavigationButtons};
pub use addons::indicators::ToggleIndicators;
pub use addons::parallax::{ParallaxEffect, ParallaxLayer};
pub use foundation::core::{AxisConfig, Direction, ScrollConfig, Size, Vec2};
pub use foundation::error::{ScrollError, ScrollResult};
pub use layout::arrange::{Arrangement, PlacedElement, arrange, centering_margin};
pub use scene::model::ScrollScene;
pub use scroll::controller::{ScrollController, ScrollControllerBuilder, ScrollPhase};
pub use scroll::observer::{SlideChange, SlideListener, SlideObservers, SubscriptionId};
pub use scroll::viewport::{ScrollViewport, VirtualViewport};
pub use snap::targets::{SnapTargets, find_nearest_index};
