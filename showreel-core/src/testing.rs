//! In-memory doubles for driving the controllers without a browser.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use crate::carousel::{CarouselFrame, CarouselView, SlideSelector, Ticker};
use crate::dom::{Dom, Target};
use crate::media::MediaItem;

/// The eight reels shipped with the site.
#[must_use]
pub fn sample_reels() -> Vec<MediaItem> {
    crate::config::SiteConfig::embedded()
        .map(|config| config.reels)
        .unwrap_or_default()
}

#[derive(Debug, Clone, Default)]
pub struct FakeElement {
    pub attributes: BTreeMap<String, String>,
    pub classes: BTreeSet<String>,
    pub styles: BTreeMap<String, String>,
    pub text: Option<String>,
    /// Text of registered descendants, keyed by child selector.
    pub children: BTreeMap<String, String>,
    pub left: Option<f64>,
}

/// A page made of flat selector lists.
///
/// Elements are registered under the exact selector string the controllers
/// query with; no CSS matching happens.
#[derive(Debug, Default)]
pub struct FakeDom {
    root: BTreeMap<String, String>,
    elements: BTreeMap<String, Vec<FakeElement>>,
    mutations: usize,
    pulses: Vec<(f64, u32)>,
}

impl FakeDom {
    /// Register another element under `selector`; returns its index.
    pub fn add(&mut self, selector: &str) -> usize {
        self.add_with(selector, &[])
    }

    pub fn add_with(&mut self, selector: &str, attributes: &[(&str, &str)]) -> usize {
        let list = self.elements.entry(selector.to_string()).or_default();
        list.push(FakeElement {
            attributes: attributes
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
            ..FakeElement::default()
        });
        list.len() - 1
    }

    /// Register a descendant matching `child` inside an existing element.
    pub fn add_child(&mut self, selector: &str, index: usize, child: &str) {
        if let Some(el) = self.element_mut(selector, index) {
            el.children.insert(child.to_string(), String::new());
        }
    }

    pub fn set_left(&mut self, selector: &str, index: usize, left: f64) {
        if let Some(el) = self.element_mut(selector, index) {
            el.left = Some(left);
        }
    }

    #[must_use]
    pub fn element(&self, selector: &str, index: usize) -> Option<&FakeElement> {
        self.elements.get(selector).and_then(|list| list.get(index))
    }

    fn element_mut(&mut self, selector: &str, index: usize) -> Option<&mut FakeElement> {
        self.elements
            .get_mut(selector)
            .and_then(|list| list.get_mut(index))
    }

    #[must_use]
    pub fn root_attribute(&self, name: &str) -> Option<&str> {
        self.root.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn text(&self, selector: &str, index: usize) -> Option<&str> {
        self.element(selector, index)
            .and_then(|el| el.text.as_deref())
    }

    #[must_use]
    pub fn child_text(&self, selector: &str, index: usize, child: &str) -> Option<&str> {
        self.element(selector, index)
            .and_then(|el| el.children.get(child))
            .map(String::as_str)
    }

    #[must_use]
    pub fn has_class(&self, selector: &str, index: usize, class: &str) -> bool {
        self.element(selector, index)
            .is_some_and(|el| el.classes.contains(class))
    }

    #[must_use]
    pub fn style(&self, selector: &str, index: usize, property: &str) -> Option<&str> {
        self.element(selector, index)
            .and_then(|el| el.styles.get(property))
            .map(String::as_str)
    }

    /// Successful writes so far.
    #[must_use]
    pub const fn mutations(&self) -> usize {
        self.mutations
    }

    #[must_use]
    pub fn pulses(&self) -> &[(f64, u32)] {
        &self.pulses
    }
}

impl Dom for FakeDom {
    fn set_root_attribute(&mut self, name: &str, value: &str) {
        self.root.insert(name.to_string(), value.to_string());
        self.mutations += 1;
    }

    fn set_attribute_all(&mut self, selector: &str, name: &str, value: &str) -> usize {
        let Some(list) = self.elements.get_mut(selector) else {
            return 0;
        };
        for el in list.iter_mut() {
            el.attributes.insert(name.to_string(), value.to_string());
        }
        self.mutations += list.len();
        list.len()
    }

    fn count(&self, selector: &str) -> usize {
        self.elements.get(selector).map_or(0, Vec::len)
    }

    fn attribute(&self, selector: &str, index: usize, name: &str) -> Option<String> {
        self.element(selector, index)
            .and_then(|el| el.attributes.get(name).cloned())
    }

    fn set_text(&mut self, target: &Target<'_>, text: &str) -> bool {
        let Some(el) = self.element_mut(target.selector, target.index) else {
            return false;
        };
        let written = match target.child {
            Some(child) => el.children.get_mut(child).map(|slot| {
                *slot = text.to_string();
            }),
            None => {
                el.text = Some(text.to_string());
                Some(())
            }
        };
        if written.is_some() {
            self.mutations += 1;
        }
        written.is_some()
    }

    fn toggle_class(&mut self, target: &Target<'_>, class: &str, on: bool) -> bool {
        let Some(el) = self.element_mut(target.selector, target.index) else {
            return false;
        };
        if on {
            el.classes.insert(class.to_string());
        } else {
            el.classes.remove(class);
        }
        self.mutations += 1;
        true
    }

    fn set_style(&mut self, target: &Target<'_>, property: &str, value: &str) -> bool {
        let Some(el) = self.element_mut(target.selector, target.index) else {
            return false;
        };
        el.styles.insert(property.to_string(), value.to_string());
        self.mutations += 1;
        true
    }

    fn offset_left_within(&self, target: &Target<'_>, container: &Target<'_>) -> Option<f64> {
        let left = self.element(target.selector, target.index)?.left?;
        let origin = self.element(container.selector, container.index)?.left?;
        Some(left - origin)
    }

    fn pulse_opacity(&mut self, opacity: f64, restore_after_ms: u32) {
        self.pulses.push((opacity, restore_after_ms));
        self.mutations += 1;
    }
}

struct ManualTimer {
    id: u64,
    period: u64,
    due: u64,
    tick: Option<Box<dyn FnMut()>>,
    cancelled: Rc<Cell<bool>>,
}

#[derive(Default)]
struct Clock {
    now: u64,
    next_id: u64,
    timers: Vec<ManualTimer>,
}

/// Virtual-time repeating timers, advanced explicitly with [`ManualTicker::advance_by`].
#[derive(Clone, Default)]
pub struct ManualTicker {
    clock: Rc<RefCell<Clock>>,
}

/// Cancels its timer when dropped.
pub struct ManualGuard {
    cancelled: Rc<Cell<bool>>,
}

impl Drop for ManualGuard {
    fn drop(&mut self) {
        self.cancelled.set(true);
    }
}

impl Ticker for ManualTicker {
    type Guard = ManualGuard;

    fn every(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> ManualGuard {
        let cancelled = Rc::new(Cell::new(false));
        let mut clock = self.clock.borrow_mut();
        let id = clock.next_id;
        clock.next_id += 1;
        let period = u64::from(period_ms.max(1));
        let due = clock.now + period;
        clock.timers.push(ManualTimer {
            id,
            period,
            due,
            tick: Some(tick),
            cancelled: Rc::clone(&cancelled),
        });
        ManualGuard { cancelled }
    }
}

impl ManualTicker {
    /// Timers that have not been cancelled.
    #[must_use]
    pub fn active_timers(&self) -> usize {
        self.clock
            .borrow()
            .timers
            .iter()
            .filter(|t| !t.cancelled.get())
            .count()
    }

    /// Move virtual time forward by `ms`, firing due ticks in order.
    /// Returns the number of ticks fired.
    pub fn advance_by(&self, ms: u64) -> usize {
        let target = self.clock.borrow().now + ms;
        let mut fired = 0;
        loop {
            let next = {
                let mut clock = self.clock.borrow_mut();
                clock.timers.retain(|t| !t.cancelled.get());
                let due = clock
                    .timers
                    .iter()
                    .filter(|t| t.due <= target)
                    .min_by_key(|t| (t.due, t.id))
                    .map(|t| (t.id, t.due));
                due.and_then(|(id, due)| {
                    clock.now = due;
                    let timer = clock.timers.iter_mut().find(|t| t.id == id)?;
                    timer.due += timer.period;
                    timer.tick.take().map(|tick| (id, tick))
                })
            };
            let Some((id, mut tick)) = next else {
                break;
            };
            tick();
            fired += 1;
            if let Some(timer) = self
                .clock
                .borrow_mut()
                .timers
                .iter_mut()
                .find(|t| t.id == id)
            {
                timer.tick = Some(tick);
            }
        }
        self.clock.borrow_mut().now = target;
        fired
    }
}

/// What a view was asked to draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameRecord {
    pub offset: usize,
    pub ids: Vec<String>,
    pub indicator_count: usize,
}

/// Records every frame and keeps the latest indicator hook for simulated clicks.
#[derive(Clone, Default)]
pub struct RecordingView {
    frames: Rc<RefCell<Vec<FrameRecord>>>,
    selector: Rc<RefCell<Option<SlideSelector>>>,
}

impl RecordingView {
    #[must_use]
    pub fn frames(&self) -> Vec<FrameRecord> {
        self.frames.borrow().clone()
    }

    /// Activate indicator `index` of the last drawn frame.
    pub fn click_indicator(&self, index: usize) {
        let selector = self.selector.borrow().clone();
        if let Some(selector) = selector {
            selector.select(index);
        }
    }
}

impl CarouselView for RecordingView {
    fn render(&mut self, frame: &CarouselFrame<'_>) {
        self.frames.borrow_mut().push(FrameRecord {
            offset: frame.offset,
            ids: frame.items.iter().map(|item| item.id.clone()).collect(),
            indicator_count: frame.indicator_count,
        });
        *self.selector.borrow_mut() = Some(frame.selector.clone());
    }
}
