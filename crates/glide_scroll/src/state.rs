//! Animation lifecycle state machines
//!
//! Instead of raw cancellation booleans, every cancellable scroll operation
//! advances an explicit state machine. One [`AnimationState`] holds two
//! machines: the smooth-scroll tween and the item-into-view sequence. The
//! two are independent — a pending item sequence and a running tween can
//! overlap — but a single cancel request marks both.

use std::sync::{Arc, Mutex};

/// State machine transition handler (event-driven)
pub trait StateTransitions:
    Clone + Copy + PartialEq + Eq + std::hash::Hash + Send + Sync + std::fmt::Debug + 'static
{
    /// Handle an event and return the new state, or None if no transition
    fn on_event(&self, event: u32) -> Option<Self>;
}

/// Events that drive [`AnimationPhase`] transitions.
pub mod phase_events {
    /// A scroll operation began (re-arms any terminal state).
    pub const START: u32 = 1;
    /// A later operation requested cancellation.
    pub const CANCEL: u32 = 2;
    /// The animation loop observed a frame boundary.
    pub const FRAME_TICK: u32 = 3;
    /// Elapsed time reached the animation duration (or the sequence ran its
    /// final step).
    pub const DURATION_ELAPSED: u32 = 4;
}

/// Lifecycle of one cancellable scroll operation.
///
/// ```text
///           START                  DURATION_ELAPSED
///  Idle ────────────► Running ─────────────────────► Completed
///                        │
///                        │ CANCEL
///                        ▼
///                   Cancelling ─── FRAME_TICK ─────► Cancelled
/// ```
///
/// START from any state re-arms the machine: a new call takes ownership.
/// Cancellation is cooperative — CANCEL only marks the machine, and the
/// running loop acknowledges it at its next frame boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationPhase {
    #[default]
    Idle,
    Running,
    Cancelling,
    Completed,
    Cancelled,
}

impl AnimationPhase {
    /// True while the operation has not reached a terminal state.
    pub fn is_active(&self) -> bool {
        matches!(self, AnimationPhase::Running | AnimationPhase::Cancelling)
    }

    /// True while the operation runs unchallenged.
    pub fn is_running(&self) -> bool {
        matches!(self, AnimationPhase::Running)
    }
}

impl StateTransitions for AnimationPhase {
    fn on_event(&self, event: u32) -> Option<Self> {
        use phase_events::*;

        match (self, event) {
            // Any state -> Running: a new operation owns the machine
            (_, START) => Some(AnimationPhase::Running),

            (AnimationPhase::Running, CANCEL) => Some(AnimationPhase::Cancelling),

            // Cancel is idempotent
            (AnimationPhase::Cancelling, CANCEL) => None,

            // The loop acknowledges the cancel at the next frame boundary
            (AnimationPhase::Cancelling, FRAME_TICK) => Some(AnimationPhase::Cancelled),

            (AnimationPhase::Running, FRAME_TICK) => None,

            (AnimationPhase::Running, DURATION_ELAPSED) => Some(AnimationPhase::Completed),

            _ => None,
        }
    }
}

/// Mutable per-controller animation bookkeeping.
///
/// Shared behind a mutex so the controller can answer visibility and
/// activity queries while a tween is mid-flight. Reset at construction,
/// mutated by every scroll call, lives as long as the controller.
#[derive(Debug, Default)]
pub struct AnimationState {
    /// Smooth-scroll tween lifecycle.
    pub(crate) tween: AnimationPhase,
    /// Item-into-view sequence lifecycle.
    pub(crate) item: AnimationPhase,
    /// Identity of the newest item sequence. An older sequence that wakes to
    /// a different epoch knows it was preempted, even though the phase
    /// machine itself was re-armed by the successor.
    pub(crate) item_epoch: u64,
    /// Delta already applied by the running tween; item visibility checks
    /// fold it in so mid-flight geometry reads stay accurate.
    pub(crate) inflight_offset: f32,
}

impl AnimationState {
    /// Advance the tween machine; returns the resulting phase.
    pub(crate) fn tween_event(&mut self, event: u32) -> AnimationPhase {
        if let Some(next) = self.tween.on_event(event) {
            self.tween = next;
        }
        self.tween
    }

    /// Advance the item-sequence machine; returns the resulting phase.
    pub(crate) fn item_event(&mut self, event: u32) -> AnimationPhase {
        if let Some(next) = self.item.on_event(event) {
            self.item = next;
        }
        self.item
    }
}

/// Shared handle to animation state
pub type SharedAnimationState = Arc<Mutex<AnimationState>>;

#[cfg(test)]
pub(crate) mod tests_support {
    use std::task::{RawWaker, RawWakerVTable, Waker};

    static VTABLE: RawWakerVTable = RawWakerVTable::new(
        |_| RawWaker::new(std::ptr::null(), &VTABLE),
        |_| {},
        |_| {},
        |_| {},
    );

    /// Waker that ignores wakes; the tests poll futures manually.
    pub(crate) fn noop_waker() -> Waker {
        unsafe { Waker::from_raw(RawWaker::new(std::ptr::null(), &VTABLE)) }
    }
}
