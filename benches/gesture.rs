//! Benchmarks for the pointer-move hot path
//!
//! Every move during a drag clamps, recomputes progress and writes two
//! panel properties; these runs keep an eye on that path and on the
//! settle bookkeeping around it.
//!
//! Run with: cargo bench gesture

use std::time::{Duration, Instant};

use sidedrawer::geometry::{clamp_offset, progress, CommitDecision};
use sidedrawer::panel::RecordingPanel;
use sidedrawer::{DrawerController, PointerEvent};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

const WIDTH: f64 = 300.0;

// ============================================================================
// Geometry
// ============================================================================

#[divan::bench(args = [100, 1000])]
fn geometry_clamp_and_progress(samples: usize) {
    for i in 0..samples {
        let raw = -(i as f64 * 0.9) + 40.0;
        let offset = clamp_offset(divan::black_box(raw), WIDTH);
        divan::black_box(progress(offset, WIDTH));
    }
}

#[divan::bench]
fn geometry_commit_decision() -> CommitDecision {
    CommitDecision::from_release(divan::black_box(-140.0), WIDTH, 0.5)
}

// ============================================================================
// Controller
// ============================================================================

#[divan::bench(args = [100, 1000])]
fn controller_drag_moves(moves: usize) {
    let mut controller = DrawerController::with_panel(RecordingPanel::new(WIDTH, false));
    let now = Instant::now();

    controller.handle_event(PointerEvent::down(1, 4.0, 100.0), now);
    for i in 0..moves {
        let x = 20.0 + (i % 280) as f64;
        let result = controller.handle_event(PointerEvent::moved(1, x, 100.0), now);
        divan::black_box(result);
        if let Some(panel) = controller.panel_mut() {
            panel.take_writes();
        }
    }

    divan::black_box(&controller);
}

#[divan::bench(args = [10, 100])]
fn controller_full_gesture_cycle(cycles: u64) {
    let mut controller = DrawerController::with_panel(RecordingPanel::new(WIDTH, false));
    let base = Instant::now();

    for cycle in 0..cycles {
        let start = base + Duration::from_millis(cycle * 500);
        let open = controller.panel().is_some_and(|p| p.open);
        let (from, to) = if open { (250.0, 10.0) } else { (4.0, 260.0) };

        controller.handle_event(PointerEvent::down(cycle, from, 0.0), start);
        controller.handle_event(PointerEvent::moved(cycle, to, 0.0), start);
        controller.handle_event(PointerEvent::up(cycle), start);
        controller.poll(start + Duration::from_millis(250));

        if let Some(panel) = controller.panel_mut() {
            divan::black_box(panel.take_writes());
        }
    }
}
