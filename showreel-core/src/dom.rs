//! The page surface the controllers write into.
//!
//! Controllers never create page regions; they only read and patch the ones the
//! host document already carries. Every method tolerates a missing target and
//! reports it through its return value instead of failing.

/// Addresses one element: the `index`th match of `selector`, optionally
/// narrowed to the first descendant matching `child`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Target<'a> {
    pub selector: &'a str,
    pub index: usize,
    pub child: Option<&'a str>,
}

impl<'a> Target<'a> {
    /// First match of `selector`.
    #[must_use]
    pub const fn first(selector: &'a str) -> Self {
        Self {
            selector,
            index: 0,
            child: None,
        }
    }

    #[must_use]
    pub const fn nth(selector: &'a str, index: usize) -> Self {
        Self {
            selector,
            index,
            child: None,
        }
    }

    /// Narrow the target to a descendant of the addressed element.
    #[must_use]
    pub const fn child(self, child: &'a str) -> Self {
        Self {
            child: Some(child),
            ..self
        }
    }
}

/// Document operations needed by the localization controller and the
/// portfolio filter.
pub trait Dom {
    /// Set an attribute on the document root (`<html>`).
    fn set_root_attribute(&mut self, name: &str, value: &str);

    /// Set an attribute on every element matching `selector`; returns how many were touched.
    fn set_attribute_all(&mut self, selector: &str, name: &str, value: &str) -> usize;

    /// Number of elements matching `selector`.
    fn count(&self, selector: &str) -> usize;

    /// Read an attribute from the `index`th match of `selector`.
    fn attribute(&self, selector: &str, index: usize, name: &str) -> Option<String>;

    /// Replace the text content of `target`; returns `false` when it does not exist.
    fn set_text(&mut self, target: &Target<'_>, text: &str) -> bool;

    /// Add or remove `class` on `target`; returns `false` when it does not exist.
    fn toggle_class(&mut self, target: &Target<'_>, class: &str, on: bool) -> bool;

    /// Set an inline style property on `target`; returns `false` when it does not exist.
    fn set_style(&mut self, target: &Target<'_>, property: &str, value: &str) -> bool;

    /// Horizontal distance in CSS pixels from the left edge of `container` to
    /// the left edge of `target`, using on-screen bounding boxes.
    fn offset_left_within(&self, target: &Target<'_>, container: &Target<'_>) -> Option<f64>;

    /// Dim the page body to `opacity` and restore it after `restore_after_ms`
    /// without blocking the caller.
    fn pulse_opacity(&mut self, opacity: f64, restore_after_ms: u32);
}
