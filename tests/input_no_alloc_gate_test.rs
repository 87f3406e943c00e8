use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use tui_linkup::input::{handle_key_event, handle_mouse_event, should_quit, Cursor};
use tui_linkup::types::BoardLayout;

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

#[test]
fn key_and_mouse_handling_does_not_allocate() {
    let layout = BoardLayout {
        origin_x: 4,
        origin_y: 2,
        cell_w: 2,
        cell_h: 1,
    };
    let keys = [
        KeyCode::Left,
        KeyCode::Right,
        KeyCode::Up,
        KeyCode::Down,
        KeyCode::Char('h'),
        KeyCode::Char(' '),
        KeyCode::Enter,
        KeyCode::Char('?'),
        KeyCode::Char('r'),
        KeyCode::Char('q'),
    ];
    let mut cursor = Cursor::new(8);
    let mut picked = 0usize;

    let allocs = with_alloc_counting(|| {
        for i in 0..200u16 {
            for code in keys {
                let key = KeyEvent::from(code);
                if should_quit(key) {
                    continue;
                }
                if let Some(action) = handle_key_event(key) {
                    cursor.apply(action);
                }
            }
            let click = MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column: 4 + i % 16,
                row: 2 + i % 8,
                modifiers: KeyModifiers::NONE,
            };
            if let Some(pos) = handle_mouse_event(click, layout, 8) {
                cursor.set(pos);
                picked += 1;
            }
        }
    });

    assert!(allocs == 0);
    assert_eq!(picked, 200);
}
