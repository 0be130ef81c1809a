//! Frame scheduling and clocks
//!
//! The controller never polls a timer; it suspends until the host delivers
//! the next display frame. Both the frame source and the clock are injected
//! at construction so tests can drive animations on virtual time.

use std::future::Future;
use std::pin::Pin;
use std::time::Instant;

use tokio::sync::Notify;

/// A per-display-frame suspension point.
///
/// `next_frame()` returns a future that resolves once, on the next frame the
/// host delivers. All animation loops suspend only here, never
/// mid-computation.
pub trait FrameSource: Send + Sync {
    fn next_frame(&self) -> Pin<Box<dyn Future<Output = ()> + Send + '_>>;
}

/// Production frame source backed by `tokio::sync::Notify`.
///
/// The host calls [`FrameNotifier::frame`] once per display refresh (vsync
/// callback, redraw-requested handler, ...); every future obtained from
/// `next_frame()` before that call resolves on it.
///
/// If the host stops delivering frames (background window, suspended
/// display), in-flight animations stall until frames resume. That is an
/// accepted platform constraint.
pub struct FrameNotifier {
    notify: Notify,
}

impl FrameNotifier {
    pub fn new() -> Self {
        Self {
            notify: Notify::new(),
        }
    }

    /// Deliver one display frame to all pending waiters.
    pub fn frame(&self) {
        self.notify.notify_waiters();
    }
}

impl Default for FrameNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameSource for FrameNotifier {
    fn next_frame(&self) -> Pin<Box<dyn Future<Output = ()> + Send + '_>> {
        Box::pin(self.notify.notified())
    }
}

/// Millisecond clock for elapsed-time measurement.
pub trait Clock: Send + Sync {
    /// Milliseconds since an arbitrary fixed origin.
    fn now_ms(&self) -> f64;
}

/// Monotonic clock over `std::time::Instant`.
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}
