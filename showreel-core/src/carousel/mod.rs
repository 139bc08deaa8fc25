//! Paged reel carousel with timed auto-advance.
//!
//! [`Carousel`] is a cheap-to-clone handle around single-threaded shared state:
//! timer ticks and indicator clicks hold weak references back into it, so
//! dropping the last handle also drops the running timer.

mod window;

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

pub use window::{CarouselWindow, page_size_for_width};

use crate::config::{Breakpoints, CarouselConfig};
use crate::media::MediaItem;

/// Repeating timer source. Dropping the returned guard cancels the timer.
pub trait Ticker {
    type Guard;

    fn every(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> Self::Guard;
}

/// Draws one carousel state. Each call replaces everything drawn before.
pub trait CarouselView {
    fn render(&mut self, frame: &CarouselFrame<'_>);
}

/// Jump-to-offset hook handed to views for their indicator strip.
#[derive(Clone)]
pub struct SlideSelector(Rc<dyn Fn(usize)>);

impl SlideSelector {
    pub fn select(&self, index: usize) {
        (self.0)(index);
    }
}

impl std::fmt::Debug for SlideSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SlideSelector")
    }
}

/// Everything a view needs to draw the current page.
#[derive(Debug)]
pub struct CarouselFrame<'a> {
    /// Items on the current page, in order.
    pub items: &'a [MediaItem],
    /// Position of `items[0]` in the full list; also the active indicator.
    pub offset: usize,
    pub indicator_count: usize,
    pub selector: &'a SlideSelector,
}

struct Inner<V, T: Ticker> {
    items: Vec<MediaItem>,
    breakpoints: Breakpoints,
    period_ms: u32,
    view: V,
    ticker: T,
    timer: Option<T::Guard>,
    selector: SlideSelector,
}

/// Window and timer flag sit in cells so they stay readable while the rest
/// is borrowed, e.g. from inside a view's `render`.
struct Shared<V, T: Ticker> {
    window: Cell<CarouselWindow>,
    running: Cell<bool>,
    inner: RefCell<Inner<V, T>>,
}

impl<V: CarouselView, T: Ticker> Shared<V, T> {
    fn update_window<R>(&self, f: impl FnOnce(&mut CarouselWindow) -> R) -> R {
        let mut window = self.window.get();
        let out = f(&mut window);
        self.window.set(window);
        out
    }

    fn render(&self, inner: &mut Inner<V, T>) {
        let window = self.window.get();
        let frame = CarouselFrame {
            items: &inner.items[window.visible()],
            offset: window.offset(),
            indicator_count: window.indicator_count(),
            selector: &inner.selector,
        };
        inner.view.render(&frame);
    }
}

pub struct Carousel<V, T: Ticker> {
    shared: Rc<Shared<V, T>>,
}

impl<V, T: Ticker> Clone for Carousel<V, T> {
    fn clone(&self) -> Self {
        Self {
            shared: Rc::clone(&self.shared),
        }
    }
}

impl<V, T> Carousel<V, T>
where
    V: CarouselView + 'static,
    T: Ticker + 'static,
{
    /// Build a stopped carousel at offset 0, sized for `viewport_width`.
    /// Nothing is drawn until [`Carousel::render`] or [`Carousel::mount`].
    #[must_use]
    pub fn new(
        items: Vec<MediaItem>,
        config: &CarouselConfig,
        viewport_width: f64,
        view: V,
        ticker: T,
    ) -> Self {
        let breakpoints = config.breakpoints;
        let window = CarouselWindow::new(items.len(), breakpoints.page_size(viewport_width));
        let shared = Rc::new_cyclic(|weak: &Weak<Shared<V, T>>| {
            let weak = weak.clone();
            let selector = SlideSelector(Rc::new(move |index| {
                if let Some(shared) = weak.upgrade() {
                    Self { shared }.set_window(i64::try_from(index).unwrap_or(i64::MAX));
                }
            }));
            Shared {
                window: Cell::new(window),
                running: Cell::new(false),
                inner: RefCell::new(Inner {
                    items,
                    breakpoints,
                    period_ms: config.auto_advance_ms,
                    view,
                    ticker,
                    timer: None,
                    selector,
                }),
            }
        });
        Self { shared }
    }

    fn with_inner(&self, op: &str, f: impl FnOnce(&Shared<V, T>, &mut Inner<V, T>)) {
        match self.shared.inner.try_borrow_mut() {
            Ok(mut inner) => f(&self.shared, &mut inner),
            Err(_) => log::warn!("carousel busy, dropping re-entrant {op}"),
        }
    }

    /// Page-load transition: draw the first page and start auto-advance.
    pub fn mount(&self) {
        self.render();
        self.start_auto_advance();
    }

    pub fn render(&self) {
        self.with_inner("render", Shared::render);
    }

    /// Jump to `offset`, clamped into the valid range, and redraw.
    pub fn set_window(&self, offset: i64) {
        self.with_inner("set_window", |shared, inner| {
            shared.update_window(|window| window.set_offset(offset));
            shared.render(inner);
        });
    }

    pub fn advance(&self) {
        self.with_inner("advance", |shared, inner| {
            shared.update_window(CarouselWindow::advance);
            shared.render(inner);
        });
    }

    pub fn retreat(&self) {
        self.with_inner("retreat", |shared, inner| {
            shared.update_window(CarouselWindow::retreat);
            shared.render(inner);
        });
    }

    /// Start (or restart) the repeating advance timer with a full period.
    /// Any timer already running is cancelled first.
    pub fn start_auto_advance(&self) {
        let weak = Rc::downgrade(&self.shared);
        self.with_inner("start_auto_advance", move |shared, inner| {
            inner.timer = None;
            let tick = Box::new(move || {
                if let Some(shared) = weak.upgrade() {
                    Self { shared }.advance();
                }
            });
            inner.timer = Some(inner.ticker.every(inner.period_ms, tick));
            shared.running.set(true);
        });
    }

    pub fn stop_auto_advance(&self) {
        self.with_inner("stop_auto_advance", |shared, inner| {
            inner.timer = None;
            shared.running.set(false);
        });
    }

    pub fn pointer_enter(&self) {
        self.stop_auto_advance();
    }

    pub fn pointer_leave(&self) {
        self.start_auto_advance();
    }

    /// Re-derive the page size for `viewport_width`; redraws and returns `true`
    /// only when it changed.
    pub fn resize(&self, viewport_width: f64) -> bool {
        let mut changed = false;
        self.with_inner("resize", |shared, inner| {
            let size = inner.breakpoints.page_size(viewport_width);
            if shared.update_window(|window| window.set_page_size(size)) {
                log::debug!("carousel page size -> {size}");
                shared.render(inner);
                changed = true;
            }
        });
        changed
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.shared.running.get()
    }

    #[must_use]
    pub fn offset(&self) -> usize {
        self.shared.window.get().offset()
    }

    #[must_use]
    pub fn page_size(&self) -> usize {
        self.shared.window.get().page_size()
    }

    #[must_use]
    pub fn window(&self) -> CarouselWindow {
        self.shared.window.get()
    }
}
