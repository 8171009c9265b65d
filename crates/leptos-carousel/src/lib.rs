//! Leptos Carousel Utilities
//!
//! Slide rotation for Leptos on top of existing page markup.
//! One slide (and its indicator dot) is active at a time; auto-play advances
//! the active slide on a recurring timer, and manual dot selection restarts
//! that timer instead of stacking a second one.

use gloo_timers::callback::Interval;
use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use wasm_bindgen::JsCast;

/// Default auto-play period in milliseconds
pub const AUTO_PLAY_DELAY_MS: u32 = 5000;

/// CSS class marking the current slide and dot
pub const ACTIVE_CLASS: &str = "active";

/// Position within a fixed number of slides.
///
/// An empty cursor (zero slides) ignores every move.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SlideCursor {
    current: usize,
    count: usize,
}

impl SlideCursor {
    pub fn new(count: usize) -> Self {
        Self { current: 0, count }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Current slide, or `None` when there are no slides
    pub fn current(&self) -> Option<usize> {
        (!self.is_empty()).then_some(self.current)
    }

    /// Move to `index`, wrapping negative and out-of-range values.
    /// Returns the selected slide.
    pub fn set(&mut self, index: isize) -> Option<usize> {
        let count = isize::try_from(self.count).ok().filter(|n| *n > 0)?;
        self.current = index.rem_euclid(count) as usize;
        Some(self.current)
    }

    pub fn next(&mut self) -> Option<usize> {
        self.set(self.offset(1))
    }

    pub fn prev(&mut self) -> Option<usize> {
        self.set(self.offset(-1))
    }

    /// Whether slide (or dot) `index` should carry the active marker.
    /// Dots past the slide count never match.
    pub fn is_active(&self, index: usize) -> bool {
        self.current() == Some(index)
    }

    fn offset(&self, delta: isize) -> isize {
        self.current as isize + delta
    }
}

/// Slot holding the one running auto-play timer.
///
/// Generic over the timer handle; the handle is expected to cancel its timer
/// on drop, as `gloo_timers::callback::Interval` does.
#[derive(Debug)]
pub struct AutoPlay<H> {
    handle: Option<H>,
}

impl<H> Default for AutoPlay<H> {
    fn default() -> Self {
        Self { handle: None }
    }
}

impl<H> AutoPlay<H> {
    /// Cancel the running timer (if any), then install the one built by `start`.
    pub fn restart(&mut self, start: impl FnOnce() -> H) {
        drop(self.handle.take());
        self.handle = Some(start());
    }
}

/// Reactive carousel controller
#[derive(Clone, Copy)]
pub struct Carousel {
    cursor: RwSignal<SlideCursor>,
    timer: StoredValue<AutoPlay<Interval>, LocalStorage>,
    delay_ms: u32,
}

impl Carousel {
    pub fn new(slide_count: usize, delay_ms: u32) -> Self {
        Self {
            cursor: RwSignal::new(SlideCursor::new(slide_count)),
            timer: StoredValue::new_local(AutoPlay::default()),
            delay_ms,
        }
    }

    pub fn slide_count(&self) -> usize {
        self.cursor.with_untracked(|c| c.count())
    }

    /// Current slide (tracked)
    pub fn current(&self) -> Option<usize> {
        self.cursor.with(|c| c.current())
    }

    /// Whether slide or dot `index` is active (tracked)
    pub fn is_active(&self, index: usize) -> bool {
        self.cursor.with(|c| c.is_active(index))
    }

    pub fn set_slide(&self, index: isize) {
        // No slides: leave the signal untouched so nothing re-renders
        if self.cursor.with_untracked(|c| c.is_empty()) {
            return;
        }
        self.cursor.update(|c| {
            c.set(index);
        });
    }

    pub fn next_slide(&self) {
        if self.cursor.with_untracked(|c| c.is_empty()) {
            return;
        }
        self.cursor.update(|c| {
            c.next();
        });
    }

    pub fn prev_slide(&self) {
        if self.cursor.with_untracked(|c| c.is_empty()) {
            return;
        }
        self.cursor.update(|c| {
            c.prev();
        });
    }

    /// (Re)start the auto-play timer. Any previous timer is cancelled first.
    pub fn start_auto_play(&self) {
        let this = *self;
        let delay_ms = self.delay_ms;
        self.timer.update_value(|timer| {
            timer.restart(|| Interval::new(delay_ms, move || this.next_slide()));
        });
    }

    /// Jump to a dot's slide and reset the auto-play cycle
    pub fn select_dot(&self, index: usize) {
        self.set_slide(index as isize);
        self.start_auto_play();
    }
}

/// Keep the `active` class on `slides` and `dots` in step with the carousel
pub fn bind_active_class(carousel: Carousel, slides: Vec<web_sys::Element>, dots: Vec<web_sys::Element>) {
    Effect::new(move |_| {
        let current = carousel.current();
        toggle_all(&slides, current);
        toggle_all(&dots, current);
    });
}

fn toggle_all(elements: &[web_sys::Element], current: Option<usize>) {
    for (i, el) in elements.iter().enumerate() {
        let _ = el.class_list().toggle_with_force(ACTIVE_CLASS, current == Some(i));
    }
}

/// Bind click handlers on indicator dots
pub fn bind_dots(carousel: Carousel, dots: &[web_sys::Element]) {
    use wasm_bindgen::closure::Closure;

    for (index, dot) in dots.iter().enumerate() {
        let on_click = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
            log::debug!("dot {} selected", index);
            carousel.select_dot(index);
        });
        let _ = dot.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        on_click.forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    /// Timer driven by hand; handles deactivate their timer on drop
    #[derive(Default)]
    struct ManualTicker {
        timers: RefCell<Vec<ManualTimer>>,
    }

    struct ManualTimer {
        period: u32,
        elapsed: u32,
        live: Rc<Cell<bool>>,
        callback: Box<dyn FnMut()>,
    }

    struct TickHandle(Rc<Cell<bool>>);

    impl Drop for TickHandle {
        fn drop(&mut self) {
            self.0.set(false);
        }
    }

    impl ManualTicker {
        fn every(&self, period: u32, callback: impl FnMut() + 'static) -> TickHandle {
            let live = Rc::new(Cell::new(true));
            self.timers.borrow_mut().push(ManualTimer {
                period,
                elapsed: 0,
                live: live.clone(),
                callback: Box::new(callback),
            });
            TickHandle(live)
        }

        fn advance(&self, ms: u32) {
            for timer in self.timers.borrow_mut().iter_mut().filter(|t| t.live.get()) {
                timer.elapsed += ms;
                while timer.elapsed >= timer.period {
                    timer.elapsed -= timer.period;
                    (timer.callback)();
                }
            }
        }

        fn live_count(&self) -> usize {
            self.timers.borrow().iter().filter(|t| t.live.get()).count()
        }
    }

    #[test]
    fn test_set_wraps_any_index() {
        let mut cursor = SlideCursor::new(3);
        for i in -7isize..=7 {
            let expected = (((i % 3) + 3) % 3) as usize;
            assert_eq!(cursor.set(i), Some(expected), "index {}", i);
            assert_eq!(cursor.current(), Some(expected));
        }
        assert_eq!(cursor.set(isize::MIN), Some(isize::MIN.rem_euclid(3) as usize));
    }

    #[test]
    fn test_exactly_one_active() {
        let mut cursor = SlideCursor::new(4);
        cursor.set(-1);
        let active: Vec<usize> = (0..4).filter(|i| cursor.is_active(*i)).collect();
        assert_eq!(active, vec![3]);
        // A fifth dot with only four slides is never active
        assert!(!cursor.is_active(4));
    }

    #[test]
    fn test_next_prev_loop() {
        let mut cursor = SlideCursor::new(3);
        assert_eq!(cursor.prev(), Some(2));
        assert_eq!(cursor.next(), Some(0));
        assert_eq!(cursor.next(), Some(1));
    }

    #[test]
    fn test_empty_cursor_is_inert() {
        let mut cursor = SlideCursor::new(0);
        assert_eq!(cursor.set(5), None);
        assert_eq!(cursor.next(), None);
        assert_eq!(cursor.current(), None);
        assert!(!cursor.is_active(0));
        assert_eq!(cursor, SlideCursor::new(0));
    }

    #[test]
    fn test_restart_keeps_single_timer() {
        let ticker = ManualTicker::default();
        let fired = Rc::new(Cell::new(0));
        let mut autoplay = AutoPlay::default();

        for _ in 0..2 {
            let fired = fired.clone();
            autoplay.restart(|| ticker.every(AUTO_PLAY_DELAY_MS, move || fired.set(fired.get() + 1)));
        }
        assert_eq!(ticker.live_count(), 1);

        ticker.advance(AUTO_PLAY_DELAY_MS);
        assert_eq!(fired.get(), 1);
        ticker.advance(AUTO_PLAY_DELAY_MS);
        assert_eq!(fired.get(), 2);
    }

    #[test]
    fn test_autoplay_advances_cursor() {
        let ticker = ManualTicker::default();
        let cursor = Rc::new(RefCell::new(SlideCursor::new(3)));
        let mut autoplay = AutoPlay::default();

        let c = cursor.clone();
        autoplay.restart(|| ticker.every(AUTO_PLAY_DELAY_MS, move || {
            c.borrow_mut().next();
        }));
        ticker.advance(AUTO_PLAY_DELAY_MS * 4);
        assert_eq!(cursor.borrow().current(), Some(1));

        // Dropping the slot cancels its timer
        drop(autoplay);
        assert_eq!(ticker.live_count(), 0);
        ticker.advance(AUTO_PLAY_DELAY_MS);
        assert_eq!(cursor.borrow().current(), Some(1));
    }

    #[test]
    fn test_carousel_signal_navigation() {
        let carousel = Carousel::new(3, AUTO_PLAY_DELAY_MS);
        assert_eq!(carousel.current(), Some(0));
        carousel.prev_slide();
        assert_eq!(carousel.current(), Some(2));
        carousel.set_slide(-4);
        assert_eq!(carousel.current(), Some(2));
        carousel.next_slide();
        assert!(carousel.is_active(0));
    }

    #[test]
    fn test_carousel_without_slides() {
        let carousel = Carousel::new(0, AUTO_PLAY_DELAY_MS);
        carousel.set_slide(2);
        carousel.next_slide();
        assert_eq!(carousel.current(), None);
        assert_eq!(carousel.slide_count(), 0);
    }
}
