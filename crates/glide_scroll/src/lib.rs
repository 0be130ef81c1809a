//! Glide Scroll
//!
//! Smooth, interruptible programmatic scrolling for list-style UIs.
//!
//! # Features
//!
//! - **Immediate scrolls**: synchronous offset changes by position, delta, or item
//! - **Smooth scrolls**: frame-synchronized eased tweens with cooperative,
//!   flag-free cancellation (an explicit per-operation state machine)
//! - **Scroll into view**: debounced two-frame sequence that tolerates a
//!   concurrent collapse/expand layout animation
//! - **Injected frame source and clock**: deterministic, virtual-time testing
//!
//! The controller owns no layout and performs no clamping. The host exposes
//! its scrollable surface through [`ScrollContainer`], child elements through
//! [`ScrollItem`], and display refreshes through [`FrameSource`].
//!
//! # Example
//!
//! ```ignore
//! use glide_scroll::{ScrollConfig, ScrollController, ScrollRequest};
//!
//! let controller = ScrollController::new(viewport, frames, ScrollConfig::default());
//!
//! // Jump without animation
//! controller.scroll_now(&ScrollRequest::position(0.0))?;
//!
//! // Animate; a later cancel_running_scroll() resolves this with Cancelled
//! controller.scroll_to(ScrollRequest::delta(320.0)).await?;
//! ```

pub mod bounds;
pub mod container;
pub mod controller;
pub mod easing;
pub mod error;
pub mod frame;
pub mod request;
pub mod state;

pub use bounds::Bounds;
pub use container::{ScrollContainer, ScrollItem};
pub use controller::{ScrollConfig, ScrollController, ScrollOptions};
pub use easing::Easing;
pub use error::ScrollError;
pub use frame::{Clock, FrameNotifier, FrameSource, SystemClock};
pub use request::ScrollRequest;
pub use state::{AnimationPhase, AnimationState, SharedAnimationState, StateTransitions};
