//! Host-side scrolling capabilities
//!
//! The controller does not own a widget tree. The host exposes its
//! scrollable surface and the elements inside it through these traits, and
//! the controller re-queries them every frame so layout shifts mid-animation
//! are tolerated.

use crate::bounds::Bounds;

/// A scrollable surface with a mutable vertical offset.
///
/// Offsets are unbounded here; clamping to content limits is the host's
/// responsibility.
pub trait ScrollContainer: Send + Sync {
    /// Current scroll offset.
    fn scroll_offset(&self) -> f32;

    /// Set the scroll offset. Called synchronously, possibly many times per
    /// animation.
    fn set_scroll_offset(&self, offset: f32);

    /// Viewport bounds, in the shared viewport-relative coordinate space.
    fn bounds(&self) -> Bounds;
}

/// A child element that can report its own bounds.
///
/// Referenced only transiently, per call; the controller never stores items.
pub trait ScrollItem: Send + Sync {
    /// Element bounds, same coordinate space as the container's.
    fn bounds(&self) -> Bounds;
}
