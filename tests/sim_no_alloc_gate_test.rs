use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use snake_loop::core::{Actor, Item, Screen, World};
use snake_loop::input::InputBuffer;
use snake_loop::types::{Direction, Position, Rgb};

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
fn advance_and_draw_do_not_allocate() {
    let mut world = World::new(20, 20);
    let snake = world.add(Actor::new(Position::new(0, 0), 9).with_glyph('▀'));
    world.add(Item::new(Position::new(10, 10)).with_glyph('∆'));
    let mut screen = Screen::new(20, 20, Rgb::BLACK);

    let allocs = with_alloc_counting(|| {
        for i in 0..200 {
            if i % 7 == 0 {
                if let Some(actor) = world.actor_mut(snake) {
                    actor.set_direction(Direction::ALL[i % 4]);
                }
            }
            world.advance();
            screen.clear();
            world.draw(&mut screen);
        }
    });

    assert!(screen.errors().is_empty());
    assert!(allocs == 0);
}

#[test]
fn input_ring_does_not_allocate() {
    let mut buf = InputBuffer::default();

    let allocs = with_alloc_counting(|| {
        for i in 0..500u32 {
            let key = if i % 3 == 0 { None } else { char::from_u32('a' as u32 + i % 26) };
            buf.push(key);
            if i % 2 == 0 {
                let _ = buf.pop_front();
            }
            let _ = buf.contains('q');
        }
    });

    assert!(allocs == 0);
}
