use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use tetris_rules::core::{GameSnapshot, Tetris};
use tetris_rules::input::{Controller, KeyBindings};
use tetris_rules::types::Action;

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            let _ = layout;
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            let _ = (layout, new_size);
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

// One test per binary: the counter is process-global.
#[test]
fn engine_hot_paths_do_not_allocate() {
    // Setup (outside counting) so one-time allocations don't trip the gate.
    let mut game = Tetris::new(1);
    let mut ctl = Controller::with_seed(7, KeyBindings::arrows());
    let mut snap = GameSnapshot::default();

    // Warm-up.
    game.move_down();
    game.apply_action(Action::MoveLeft);
    let _ = ctl.update(16);

    let allocs = with_alloc_counting(|| {
        for _ in 0..50 {
            game.apply_action(Action::MoveLeft);
            game.apply_action(Action::MoveRight);
            game.apply_action(Action::Rotate);
            game.snapshot_into(&mut snap);
        }

        // Gravity drives lock, sweep, respawn and game-over paths.
        for _ in 0..2000 {
            game.move_down();
        }
        let _ = game.state();

        for _ in 0..600 {
            let _ = ctl.update(16);
        }
    });

    assert_eq!(allocs, 0);
}
