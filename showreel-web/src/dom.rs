use gloo::timers::callback::Timeout;
use showreel_core::dom::{Dom, Target};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, NodeList, Window};

/// Retrieve the global `window` object, if running in a browser.
#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Retrieve the document object for DOM interactions.
#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|w| w.document())
}

/// Current layout viewport width in CSS pixels.
#[must_use]
pub fn viewport_width() -> Option<f64> {
    window()?.inner_width().ok()?.as_f64()
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// [`Dom`] over a live browser document.
#[derive(Clone)]
pub struct WebDom {
    document: Document,
}

impl WebDom {
    #[must_use]
    pub const fn new(document: Document) -> Self {
        Self { document }
    }

    fn all(&self, selector: &str) -> Option<NodeList> {
        self.document.query_selector_all(selector).ok()
    }

    fn nth(&self, selector: &str, index: usize) -> Option<Element> {
        let index = u32::try_from(index).ok()?;
        self.all(selector)?.item(index)?.dyn_into::<Element>().ok()
    }

    fn resolve(&self, target: &Target<'_>) -> Option<Element> {
        let el = self.nth(target.selector, target.index)?;
        match target.child {
            Some(child) => el.query_selector(child).ok().flatten(),
            None => Some(el),
        }
    }
}

impl Dom for WebDom {
    fn set_root_attribute(&mut self, name: &str, value: &str) {
        if let Some(root) = self.document.document_element() {
            if let Err(err) = root.set_attribute(name, value) {
                log::debug!("root {name}={value} not set: {}", js_error_message(&err));
            }
        }
    }

    fn set_attribute_all(&mut self, selector: &str, name: &str, value: &str) -> usize {
        let Some(list) = self.all(selector) else {
            return 0;
        };
        (0..list.length())
            .filter_map(|i| list.item(i)?.dyn_into::<Element>().ok())
            .filter(|el| el.set_attribute(name, value).is_ok())
            .count()
    }

    fn count(&self, selector: &str) -> usize {
        self.all(selector)
            .map_or(0, |list| usize::try_from(list.length()).unwrap_or(0))
    }

    fn attribute(&self, selector: &str, index: usize, name: &str) -> Option<String> {
        self.nth(selector, index)?.get_attribute(name)
    }

    fn set_text(&mut self, target: &Target<'_>, text: &str) -> bool {
        let Some(el) = self.resolve(target) else {
            return false;
        };
        el.set_text_content(Some(text));
        true
    }

    fn toggle_class(&mut self, target: &Target<'_>, class: &str, on: bool) -> bool {
        self.resolve(target)
            .is_some_and(|el| el.class_list().toggle_with_force(class, on).is_ok())
    }

    fn set_style(&mut self, target: &Target<'_>, property: &str, value: &str) -> bool {
        self.resolve(target)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .is_some_and(|el| el.style().set_property(property, value).is_ok())
    }

    fn offset_left_within(&self, target: &Target<'_>, container: &Target<'_>) -> Option<f64> {
        let left = self.resolve(target)?.get_bounding_client_rect().left();
        let origin = self.resolve(container)?.get_bounding_client_rect().left();
        Some(left - origin)
    }

    fn pulse_opacity(&mut self, opacity: f64, restore_after_ms: u32) {
        let Some(body) = self.document.body() else {
            return;
        };
        set_opacity(&body, &opacity.to_string());
        Timeout::new(restore_after_ms, move || set_opacity(&body, "1")).forget();
    }
}

fn set_opacity(el: &HtmlElement, value: &str) {
    if let Err(err) = el.style().set_property("opacity", value) {
        log::debug!("opacity {value} not applied: {}", js_error_message(&err));
    }
}
