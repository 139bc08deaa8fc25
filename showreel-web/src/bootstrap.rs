//! Page wiring: builds the controllers once the document is ready and keeps
//! them, their Yew apps and their listeners alive for the page lifetime.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Context;
use gloo::events::EventListener;
use showreel_core::filter::FILTER_BUTTON;
use showreel_core::{Carousel, Catalog, Localizer, SiteConfig, apply_filter};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event};
use yew::{AppHandle, Callback, Renderer};

use crate::components::LanguageOption;
use crate::components::language_switcher::{LanguageSwitcher, Props as SwitcherProps};
use crate::dom::{self, WebDom};
use crate::timers::GlooTicker;
use crate::view::WebCarouselView;

pub type WebCarousel = Carousel<WebCarouselView, GlooTicker>;
pub type SharedLocalizer = Rc<RefCell<Localizer<WebDom>>>;

const NAV_CONTAINER: &str = ".nav-container";
const SWITCHER_HOST_CLASS: &str = "language-switcher-host";
const CAROUSEL_ROOT_ID: &str = "videoCarousel";
const INDICATORS_ROOT_ID: &str = "indicators";
const CAROUSEL_CONTAINER: &str = ".video-carousel-container";
const CAROUSEL_PREV: &str = ".carousel-prev";
const CAROUSEL_NEXT: &str = ".carousel-next";

#[derive(Debug, thiserror::Error)]
pub enum BootError {
    #[error("no browser window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("could not create {0}: {1}")]
    CreateElement(&'static str, String),
}

struct Site {
    localizer: SharedLocalizer,
    carousel: Option<WebCarousel>,
    _switcher: Option<AppHandle<LanguageSwitcher>>,
    _listeners: Vec<EventListener>,
}

thread_local! {
    static SITE: RefCell<Option<Site>> = const { RefCell::new(None) };
}

/// Mount now, or on `DOMContentLoaded` while the document is still loading.
///
/// # Errors
///
/// Fails when there is no document, or when mounting right away fails.
pub fn boot() -> anyhow::Result<()> {
    let document = dom::document().ok_or(BootError::NoDocument)?;
    if document.ready_state() == "loading" {
        EventListener::once(&document, "DOMContentLoaded", |_| {
            if let Err(err) = mount() {
                log::error!("site boot failed: {err:#}");
            }
        })
        .forget();
        return Ok(());
    }
    mount()
}

fn mount() -> anyhow::Result<()> {
    let document = dom::document().ok_or(BootError::NoDocument)?;
    let config = SiteConfig::embedded().context("loading site config")?;
    let catalog = Catalog::embedded().context("loading translations")?;

    let localizer = Rc::new(RefCell::new(Localizer::new(
        catalog,
        WebDom::new(document.clone()),
    )));
    {
        let mut localizer = localizer.borrow_mut();
        localizer.apply_direction();
        let report = localizer.render_text();
        log::debug!(
            "initial render: {} written, {} skipped",
            report.written,
            report.skipped
        );
    }

    let switcher = or_skip("language switcher", mount_switcher(&document, &localizer)).flatten();

    let mut listeners = Vec::new();
    let carousel = match document.get_element_by_id(CAROUSEL_ROOT_ID) {
        Some(root) => or_skip(
            "carousel",
            mount_carousel(&document, root, &config, &mut listeners),
        ),
        None => {
            log::debug!("no #{CAROUSEL_ROOT_ID}, carousel disabled");
            None
        }
    };
    bind_filters(&document, &mut listeners);

    SITE.with(|site| {
        *site.borrow_mut() = Some(Site {
            localizer,
            carousel,
            _switcher: switcher,
            _listeners: listeners,
        });
    });
    Ok(())
}

/// A page part that fails to mount is logged and left out; the rest of the
/// site still comes up.
fn or_skip<T>(part: &str, result: anyhow::Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("{part} not mounted: {err:#}");
            None
        }
    }
}

fn mount_switcher(
    document: &Document,
    localizer: &SharedLocalizer,
) -> anyhow::Result<Option<AppHandle<LanguageSwitcher>>> {
    let Some(nav) = document.query_selector(NAV_CONTAINER).ok().flatten() else {
        log::debug!("no {NAV_CONTAINER}, language switcher skipped");
        return Ok(None);
    };
    // Yew clears its host, so give it one of its own.
    let host = document
        .create_element("div")
        .map_err(|err| BootError::CreateElement("switcher host", dom::js_error_message(&err)))?;
    host.set_class_name(SWITCHER_HOST_CLASS);
    nav.append_child(&host)
        .map_err(|err| anyhow::anyhow!(dom::js_error_message(&err)))
        .context("attaching language switcher")?;

    let options = localizer
        .borrow()
        .options()
        .into_iter()
        .map(|(meta, active)| LanguageOption {
            code: meta.code.into(),
            label: meta.label.into(),
            name: meta.name.into(),
            active,
        })
        .collect();
    let weak = Rc::downgrade(localizer);
    let on_select = Callback::from(move |code: String| {
        let Some(shared) = weak.upgrade() else {
            return;
        };
        let Ok(mut localizer) = shared.try_borrow_mut() else {
            log::warn!("localizer busy, dropping switch to {code}");
            return;
        };
        if let Err(err) = localizer.switch_language(&code) {
            log::warn!("language switch rejected: {err}");
        }
    });

    let props = SwitcherProps { options, on_select };
    Ok(Some(
        Renderer::<LanguageSwitcher>::with_root_and_props(host, props).render(),
    ))
}

fn mount_carousel(
    document: &Document,
    root: Element,
    config: &SiteConfig,
    listeners: &mut Vec<EventListener>,
) -> anyhow::Result<WebCarousel> {
    let window = dom::window().ok_or(BootError::NoWindow)?;
    let width = dom::viewport_width().unwrap_or(config.carousel.breakpoints.desktop);
    let view = WebCarouselView::new(root, document.get_element_by_id(INDICATORS_ROOT_ID));
    let carousel = Carousel::new(
        config.reels.clone(),
        &config.carousel,
        width,
        view,
        GlooTicker,
    );
    carousel.mount();

    let on_resize = carousel.clone();
    listeners.push(EventListener::new(&window, "resize", move |_| {
        if let Some(width) = dom::viewport_width() {
            on_resize.resize(width);
        }
    }));

    let hover = [
        ("mouseenter", WebCarousel::pointer_enter as fn(&WebCarousel)),
        ("mouseleave", WebCarousel::pointer_leave),
    ];
    for (event, action) in hover {
        let target = carousel.clone();
        listen(document, CAROUSEL_CONTAINER, event, listeners, move |_| {
            action(&target);
        });
    }

    let steps = [
        (CAROUSEL_PREV, WebCarousel::retreat as fn(&WebCarousel)),
        (CAROUSEL_NEXT, WebCarousel::advance),
    ];
    for (selector, action) in steps {
        let target = carousel.clone();
        listen(document, selector, "click", listeners, move |_| {
            action(&target);
        });
    }

    Ok(carousel)
}

fn bind_filters(document: &Document, listeners: &mut Vec<EventListener>) {
    let Ok(buttons) = document.query_selector_all(FILTER_BUTTON) else {
        return;
    };
    for i in 0..buttons.length() {
        let Some(button) = buttons.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let value = button
            .get_attribute("data-filter")
            .unwrap_or_else(|| "all".to_string());
        let mut dom = WebDom::new(document.clone());
        listeners.push(EventListener::new(&button, "click", move |_| {
            apply_filter(&mut dom, &value);
        }));
    }
}

/// Attach `handler` to the first element matching `selector`, if any.
fn listen(
    document: &Document,
    selector: &str,
    event: &'static str,
    listeners: &mut Vec<EventListener>,
    handler: impl FnMut(&Event) + 'static,
) {
    match document.query_selector(selector).ok().flatten() {
        Some(el) => listeners.push(EventListener::new(&el, event, handler)),
        None => log::debug!("no {selector}, {event} not bound"),
    }
}

/// Switch the page language from script; unknown codes are logged and ignored.
pub fn switch_language(code: &str) {
    with_localizer(|localizer| {
        if let Err(err) = localizer.switch_language(code) {
            log::warn!("language switch rejected: {err}");
        }
    });
}

/// Run `f` on the mounted carousel, if there is one.
pub fn with_carousel(f: impl FnOnce(&WebCarousel)) {
    let carousel = SITE.with(|site| site.borrow().as_ref().and_then(|s| s.carousel.clone()));
    match carousel {
        Some(carousel) => f(&carousel),
        None => log::debug!("carousel not mounted"),
    }
}

fn with_localizer(f: impl FnOnce(&mut Localizer<WebDom>)) {
    let localizer = SITE.with(|site| site.borrow().as_ref().map(|s| Rc::clone(&s.localizer)));
    let Some(localizer) = localizer else {
        log::debug!("localizer not mounted");
        return;
    };
    match localizer.try_borrow_mut() {
        Ok(mut localizer) => f(&mut localizer),
        Err(_) => log::warn!("localizer busy, dropping scripted switch"),
    }
}
