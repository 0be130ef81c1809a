//! Scroll request values

use crate::container::ScrollItem;
use crate::error::ScrollError;

/// One scroll intent: exactly one of {item, position, delta}.
///
/// A request carrying none of the three fails validation with
/// [`ScrollError::InvalidRequest`]. `immediate` skips the tween;
/// `duration_ms` overrides the controller's default animation length (a
/// zero override snaps on the first frame).
///
/// # Example
///
/// ```ignore
/// let req = ScrollRequest::position(480.0).with_duration(90.0);
/// controller.scroll_to(req).await?;
/// ```
#[derive(Default)]
pub struct ScrollRequest<'a> {
    pub item: Option<&'a dyn ScrollItem>,
    pub position: Option<f32>,
    pub delta: Option<f32>,
    pub immediate: bool,
    pub duration_ms: Option<f32>,
}

impl<'a> ScrollRequest<'a> {
    /// Scroll to an absolute offset.
    pub fn position(position: f32) -> Self {
        Self {
            position: Some(position),
            ..Default::default()
        }
    }

    /// Scroll by a relative amount.
    pub fn delta(delta: f32) -> Self {
        Self {
            delta: Some(delta),
            ..Default::default()
        }
    }

    /// Scroll just far enough to bring `item` into view.
    pub fn item(item: &'a dyn ScrollItem) -> Self {
        Self {
            item: Some(item),
            ..Default::default()
        }
    }

    /// Perform synchronously, without animation.
    pub fn immediate(mut self) -> Self {
        self.immediate = true;
        self
    }

    /// Override the controller's default animation duration.
    pub fn with_duration(mut self, duration_ms: f32) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    /// At least one of item, position, or delta must be present.
    pub(crate) fn validate(&self) -> Result<(), ScrollError> {
        if self.item.is_none() && self.position.is_none() && self.delta.is_none() {
            return Err(ScrollError::InvalidRequest);
        }
        Ok(())
    }
}

impl std::fmt::Debug for ScrollRequest<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollRequest")
            .field("item", &self.item.is_some())
            .field("position", &self.position)
            .field("delta", &self.delta)
            .field("immediate", &self.immediate)
            .field("duration_ms", &self.duration_ms)
            .finish()
    }
}
