//! Programmatic scroll controller
//!
//! Drives a host-provided container's offset, either immediately or through
//! a frame-synchronized eased tween, and brings child items into view with a
//! debounced two-frame sequence that tolerates a concurrent collapse/expand
//! layout animation.
//!
//! All suspension happens at frame boundaries delivered by the injected
//! [`FrameSource`]; cancellation is cooperative and observed at the next
//! such boundary, never mid-computation.

use std::sync::{Arc, Mutex};

use tracing::{debug, trace};

use crate::container::{ScrollContainer, ScrollItem};
use crate::easing::Easing;
use crate::error::ScrollError;
use crate::frame::{Clock, FrameSource, SystemClock};
use crate::request::ScrollRequest;
use crate::state::{phase_events, AnimationPhase, AnimationState, SharedAnimationState};

/// Configuration for scroll animation behavior
#[derive(Debug, Clone, Copy)]
pub struct ScrollConfig {
    /// Default animation length for smooth scrolls, in milliseconds.
    pub duration_ms: f32,
    /// Overshoot added when scrolling an item into view, so the neighboring
    /// item partially shows.
    pub margin: f32,
    /// Easing curve for the tween.
    pub easing: Easing,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            duration_ms: 150.0,
            margin: 10.0,
            easing: Easing::SineOut,
        }
    }
}

impl ScrollConfig {
    /// Config with a custom default duration.
    pub fn with_duration(duration_ms: f32) -> Self {
        Self {
            duration_ms,
            ..Default::default()
        }
    }
}

/// Caller options for [`ScrollController::scroll_to_item`].
///
/// Merged into the final scroll request once the item's target position has
/// been computed.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScrollOptions {
    /// Duration override for the final smooth scroll.
    pub duration_ms: Option<f32>,
    /// Skip the tween and jump in a single frame.
    pub immediate: bool,
}

/// Smooth, interruptible scrolling of one container.
///
/// The controller holds non-owning handles to the container, the frame
/// source, and the clock; it owns only its animation bookkeeping. It is
/// `Send + Sync`, but all of its guarantees assume cooperative scheduling —
/// callers that want mutual exclusion between two raw smooth scrolls must
/// serialize them (see [`ScrollController::smooth_scroll_to`]).
pub struct ScrollController {
    container: Arc<dyn ScrollContainer>,
    frames: Arc<dyn FrameSource>,
    clock: Arc<dyn Clock>,
    config: ScrollConfig,
    state: SharedAnimationState,
}

impl ScrollController {
    pub fn new(
        container: Arc<dyn ScrollContainer>,
        frames: Arc<dyn FrameSource>,
        config: ScrollConfig,
    ) -> Self {
        Self::with_clock(container, frames, Arc::new(SystemClock::new()), config)
    }

    /// Construct with an injected clock (virtual time in tests).
    pub fn with_clock(
        container: Arc<dyn ScrollContainer>,
        frames: Arc<dyn FrameSource>,
        clock: Arc<dyn Clock>,
        config: ScrollConfig,
    ) -> Self {
        Self {
            container,
            frames,
            clock,
            config,
            state: Arc::new(Mutex::new(AnimationState::default())),
        }
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    /// Immediate or smooth dispatch.
    ///
    /// With `request.immediate` set, positions the container synchronously
    /// and resolves at once; otherwise delegates to
    /// [`smooth_scroll_to`](Self::smooth_scroll_to). Validation failures
    /// surface before any animation starts.
    pub async fn scroll_to(&self, request: ScrollRequest<'_>) -> Result<(), ScrollError> {
        request.validate()?;
        if !request.immediate {
            return self.smooth_scroll_to(request).await;
        }
        self.scroll_now(&request)
    }

    /// Synchronous positioning; no animation, no frames.
    pub fn scroll_now(&self, request: &ScrollRequest<'_>) -> Result<(), ScrollError> {
        if let Some(item) = request.item {
            let delta = self.scroll_delta_for_item(item);
            self.container
                .set_scroll_offset(self.container.scroll_offset() + delta);
        } else if let Some(position) = request.position {
            self.container.set_scroll_offset(position);
        } else if let Some(delta) = request.delta {
            self.container
                .set_scroll_offset(self.container.scroll_offset() + delta);
        } else {
            return Err(ScrollError::InvalidRequest);
        }
        Ok(())
    }

    /// Eased tween toward the requested target.
    ///
    /// Resolves `Ok(())` once the container lands exactly on the end
    /// position, or `Err(Cancelled)` if superseded first — exactly one of
    /// the two per invocation, never both, never dropped. On cancellation
    /// the container keeps whatever partial offset the last frame applied.
    ///
    /// Starting a second smooth scroll does *not* cancel one already in
    /// flight; the two interleave their writes until one reaches a terminal
    /// state, which ends the other with `Cancelled` at its next frame check.
    /// Callers needing mutual exclusion serialize themselves;
    /// [`scroll_to_item`](Self::scroll_to_item) does so via
    /// [`cancel_running_scroll`](Self::cancel_running_scroll).
    pub async fn smooth_scroll_to(&self, request: ScrollRequest<'_>) -> Result<(), ScrollError> {
        let start_position = self.container.scroll_offset();

        let delta = if let Some(item) = request.item {
            self.scroll_delta_for_item(item)
        } else if let Some(position) = request.position {
            position - start_position
        } else if let Some(delta) = request.delta {
            delta
        } else {
            return Err(ScrollError::InvalidRequest);
        };
        let end_position = start_position + delta;

        let duration_ms = request.duration_ms.unwrap_or(self.config.duration_ms);
        let easing = self.config.easing;

        {
            let mut state = self.state.lock().unwrap();
            state.tween_event(phase_events::START);
            state.inflight_offset = delta;
        }
        debug!(
            start_position,
            end_position, duration_ms, "smooth scroll started"
        );

        let start_time = self.clock.now_ms();
        loop {
            self.frames.next_frame().await;

            {
                let mut state = self.state.lock().unwrap();
                match state.tween {
                    AnimationPhase::Running => {}
                    AnimationPhase::Cancelling => {
                        state.tween_event(phase_events::FRAME_TICK);
                        state.inflight_offset = 0.0;
                        debug!("smooth scroll cancelled");
                        return Err(ScrollError::Cancelled);
                    }
                    // Another invocation drove the shared machine to a
                    // terminal state; this tween no longer owns the offset.
                    _ => {
                        state.inflight_offset = 0.0;
                        return Err(ScrollError::Cancelled);
                    }
                }
            }

            let elapsed = (self.clock.now_ms() - start_time) as f32;
            if elapsed >= duration_ms {
                self.scroll_now(&ScrollRequest::position(end_position))?;
                let mut state = self.state.lock().unwrap();
                state.tween_event(phase_events::DURATION_ELAPSED);
                state.inflight_offset = 0.0;
                debug!(end_position, "smooth scroll completed");
                return Ok(());
            }

            let progress = easing.apply(elapsed / duration_ms);
            // Pixel offsets truncate toward zero, not floor: floor would
            // push negative deltas one pixel too far.
            let current_delta = (delta * progress).trunc();
            self.scroll_now(&ScrollRequest::position(start_position + current_delta))?;
            self.state.lock().unwrap().inflight_offset = current_delta;
            trace!(elapsed, current_delta, "tween frame");
        }
    }

    /// Whether a smooth-scroll tween is currently active.
    pub fn is_smooth_scrolling(&self) -> bool {
        self.state.lock().unwrap().tween.is_active()
    }

    /// Current phase of the smooth-scroll tween machine.
    pub fn tween_phase(&self) -> AnimationPhase {
        self.state.lock().unwrap().tween
    }

    /// Current phase of the item-into-view sequence machine.
    pub fn item_phase(&self) -> AnimationPhase {
        self.state.lock().unwrap().item
    }

    /// Request cancellation of any in-flight smooth scroll and any pending
    /// item-into-view sequence.
    ///
    /// Cooperative: the loops stop at their next frame boundary, not
    /// immediately. Idempotent.
    pub fn cancel_running_scroll(&self) {
        let mut state = self.state.lock().unwrap();
        state.tween_event(phase_events::CANCEL);
        state.item_event(phase_events::CANCEL);
        debug!(tween = ?state.tween, item = ?state.item, "cancel requested");
    }

    /// Scroll distance needed to bring `item` fully into view.
    ///
    /// Positive scrolls down, negative scrolls up, zero means already
    /// visible. The in-flight offset of a running tween is folded in so the
    /// answer stays accurate mid-animation, and an extra margin is added so
    /// the neighboring item partially shows.
    pub fn scroll_delta_for_item(&self, item: &dyn ScrollItem) -> f32 {
        let container = self.container.bounds();
        let item_bounds = item.bounds();
        let offset = self.state.lock().unwrap().inflight_offset;

        if container.bottom < item_bounds.bottom + offset {
            // Item pokes out below the viewport: scroll down
            item_bounds.bottom - container.bottom + offset + self.config.margin
        } else if container.top > item_bounds.top + offset {
            // Item pokes out above: scroll up
            item_bounds.top - container.top + offset - self.config.margin
        } else {
            0.0
        }
    }

    /// True when no scrolling is needed to show `item`.
    pub fn is_item_visible(&self, item: &dyn ScrollItem) -> bool {
        self.scroll_delta_for_item(item) == 0.0
    }

    /// Bring `item` into view with a debounced multi-frame sequence.
    ///
    /// Cancels prior scrolls, then waits two frames before measuring final
    /// geometry so a concurrent collapse/expand animation can begin. A later
    /// call preempts the wait phase silently (`Ok(())`, no offset change
    /// attributable to the preempted call). An already-visible item is a
    /// no-op. Otherwise resolves with the final smooth scroll's outcome.
    pub async fn scroll_to_item(
        &self,
        item: &dyn ScrollItem,
        options: ScrollOptions,
    ) -> Result<(), ScrollError> {
        self.cancel_running_scroll();

        let epoch = {
            let mut state = self.state.lock().unwrap();
            state.item_event(phase_events::START);
            state.item_epoch += 1;
            state.item_epoch
        };
        debug!(epoch, "scroll to item started");

        self.frames.next_frame().await;
        if self.item_wait_preempted(epoch) {
            return Ok(());
        }

        if self.is_item_visible(item) {
            self.state
                .lock()
                .unwrap()
                .item_event(phase_events::DURATION_ELAPSED);
            trace!(epoch, "item already visible");
            return Ok(());
        }

        // One more frame so a collapse/expand layout animation is underway
        // before the final geometry is measured.
        self.frames.next_frame().await;
        if self.item_wait_preempted(epoch) {
            return Ok(());
        }

        let position = self.container.scroll_offset() + self.scroll_delta_for_item(item);
        self.state
            .lock()
            .unwrap()
            .item_event(phase_events::DURATION_ELAPSED);

        let mut request = ScrollRequest::position(position);
        if let Some(duration_ms) = options.duration_ms {
            request = request.with_duration(duration_ms);
        }
        if options.immediate {
            request = request.immediate();
        }
        self.scroll_to(request).await
    }

    /// A wait phase is preempted when a later sequence took the machine
    /// (fresh epoch) or a cancel arrived without a successor.
    fn item_wait_preempted(&self, epoch: u64) -> bool {
        let mut state = self.state.lock().unwrap();
        if state.item_epoch != epoch {
            trace!(epoch, newest = state.item_epoch, "item scroll preempted");
            return true;
        }
        match state.item {
            AnimationPhase::Running => false,
            AnimationPhase::Cancelling => {
                state.item_event(phase_events::FRAME_TICK);
                trace!(epoch, "item scroll cancelled");
                true
            }
            _ => true,
        }
    }
}
