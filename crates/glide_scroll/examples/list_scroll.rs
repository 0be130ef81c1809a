//! Simulated list demo: a 60fps frame pump driving smooth scrolls and
//! scroll-into-view over an in-memory viewport.
//!
//! Run with `RUST_LOG=debug cargo run -p glide_scroll --example list_scroll`.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use glide_scroll::{
    Bounds, FrameNotifier, ScrollConfig, ScrollContainer, ScrollController, ScrollItem,
    ScrollOptions, ScrollRequest,
};

const ROW_HEIGHT: f32 = 44.0;
const VIEWPORT_HEIGHT: f32 = 400.0;

/// A list viewport over fixed-height rows.
struct ListViewport {
    offset: Mutex<f32>,
}

impl ScrollContainer for ListViewport {
    fn scroll_offset(&self) -> f32 {
        *self.offset.lock().unwrap()
    }

    fn set_scroll_offset(&self, offset: f32) {
        *self.offset.lock().unwrap() = offset;
    }

    fn bounds(&self) -> Bounds {
        Bounds::new(0.0, VIEWPORT_HEIGHT)
    }
}

/// Row bounds depend on the current scroll offset, like a real layout query.
struct RowHandle {
    index: usize,
    viewport: Arc<ListViewport>,
}

impl ScrollItem for RowHandle {
    fn bounds(&self) -> Bounds {
        let top = self.index as f32 * ROW_HEIGHT - self.viewport.scroll_offset();
        Bounds::new(top, top + ROW_HEIGHT)
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let viewport = Arc::new(ListViewport {
        offset: Mutex::new(0.0),
    });
    let frames = Arc::new(FrameNotifier::new());
    let controller =
        ScrollController::new(viewport.clone(), frames.clone(), ScrollConfig::default());

    // 60fps frame pump, the stand-in for a host's vsync callback.
    let running = Arc::new(AtomicBool::new(true));
    let pump = {
        let frames = frames.clone();
        let running = running.clone();
        thread::spawn(move || {
            while running.load(Ordering::Relaxed) {
                thread::sleep(Duration::from_millis(16));
                frames.frame();
            }
        })
    };

    pollster::block_on(async {
        controller
            .scroll_to(ScrollRequest::delta(600.0))
            .await
            .expect("smooth scroll");
        println!("after smooth delta: offset = {}", viewport.scroll_offset());

        let row = RowHandle {
            index: 40,
            viewport: viewport.clone(),
        };
        controller
            .scroll_to_item(&row, ScrollOptions::default())
            .await
            .expect("scroll into view");
        println!(
            "row 40 visible: {} (offset = {})",
            controller.is_item_visible(&row),
            viewport.scroll_offset()
        );

        controller
            .scroll_now(&ScrollRequest::position(0.0))
            .expect("jump to top");
        println!("back to top: offset = {}", viewport.scroll_offset());
    });

    running.store(false, Ordering::Relaxed);
    let _ = pump.join();
}
