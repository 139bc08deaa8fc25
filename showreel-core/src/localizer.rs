//! Active-language state and the page updates that follow a switch.

use crate::dom::{Dom, Target};
use crate::i18n::{
    Catalog, Direction, Lang, LocaleError, LocaleMeta, SLOT_TABLE, SlotTable, locales,
};

/// Regions that keep left-to-right layout whatever the document direction is,
/// so embedded players never mirror.
pub const MEDIA_REGIONS: &[&str] = &[
    ".portfolio",
    ".portfolio-reels",
    ".video-carousel-container",
    ".video-item",
    ".swiper-container",
    ".swiper-slide",
];

pub const LANGUAGE_OPTION: &str = ".language-option";
pub const LANGUAGE_TOGGLE: &str = ".language-toggle";
pub const LANGUAGE_SLIDER: &str = ".language-slider";

pub const FADE_OPACITY: f64 = 0.9;
pub const FADE_MS: u32 = 200;

/// Outcome of a text pass: how many slots were written and how many were
/// skipped because the element or the string was missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderReport {
    pub written: usize,
    pub skipped: usize,
}

impl RenderReport {
    fn record(&mut self, wrote: bool) {
        if wrote {
            self.written += 1;
        } else {
            self.skipped += 1;
        }
    }
}

pub struct Localizer<D: Dom> {
    catalog: Catalog,
    slots: SlotTable,
    active: Lang,
    dom: D,
}

impl<D: Dom> Localizer<D> {
    /// Start in English against the default slot table.
    #[must_use]
    pub fn new(catalog: Catalog, dom: D) -> Self {
        Self::with_slots(catalog, SLOT_TABLE, dom)
    }

    #[must_use]
    pub fn with_slots(catalog: Catalog, slots: SlotTable, dom: D) -> Self {
        Self {
            catalog,
            slots,
            active: Lang::default(),
            dom,
        }
    }

    #[must_use]
    pub const fn active(&self) -> Lang {
        self.active
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.active.direction()
    }

    #[must_use]
    pub const fn dom(&self) -> &D {
        &self.dom
    }

    /// Switch the page to `code`.
    ///
    /// Returns `Ok(false)` when `code` is already active, in which case the page
    /// is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`LocaleError::Unsupported`] for codes outside the shipped set and
    /// [`LocaleError::MissingLocale`] when the catalog has no tree for the
    /// language. Neither mutates state or the page.
    pub fn switch_language(&mut self, code: &str) -> Result<bool, LocaleError> {
        let lang: Lang = code.parse()?;
        if lang == self.active {
            return Ok(false);
        }
        if !self.catalog.contains(lang) {
            return Err(LocaleError::MissingLocale(lang));
        }

        log::debug!("switching language {} -> {lang}", self.active);
        self.active = lang;
        self.apply_direction();
        self.mark_selected_option();
        self.move_slider();
        let report = self.render_text();
        log::debug!(
            "rendered {lang}: {} written, {} skipped",
            report.written,
            report.skipped
        );
        self.dom.pulse_opacity(FADE_OPACITY, FADE_MS);
        Ok(true)
    }

    /// Write `lang` and `dir` on the document root, then pin media regions back
    /// to left-to-right.
    pub fn apply_direction(&mut self) {
        self.dom.set_root_attribute("lang", self.active.code());
        self.dom
            .set_root_attribute("dir", self.active.direction().as_str());
        self.pin_media_ltr();
    }

    /// Force `dir="ltr"` on every media region.
    pub fn pin_media_ltr(&mut self) -> usize {
        MEDIA_REGIONS
            .iter()
            .map(|selector| self.dom.set_attribute_all(selector, "dir", "ltr"))
            .sum()
    }

    fn mark_selected_option(&mut self) {
        let code = self.active.code();
        for index in 0..self.dom.count(LANGUAGE_OPTION) {
            let selected = self
                .dom
                .attribute(LANGUAGE_OPTION, index, "data-lang")
                .is_some_and(|lang| lang == code);
            self.dom
                .toggle_class(&Target::nth(LANGUAGE_OPTION, index), "active", selected);
        }
    }

    fn move_slider(&mut self) {
        let code = self.active.code();
        let Some(index) = (0..self.dom.count(LANGUAGE_OPTION)).find(|&i| {
            self.dom
                .attribute(LANGUAGE_OPTION, i, "data-lang")
                .is_some_and(|lang| lang == code)
        }) else {
            return;
        };
        let option = Target::nth(LANGUAGE_OPTION, index);
        if let Some(left) = self
            .dom
            .offset_left_within(&option, &Target::first(LANGUAGE_TOGGLE))
        {
            self.dom.set_style(
                &Target::first(LANGUAGE_SLIDER),
                "transform",
                &format!("translateX({left}px)"),
            );
        }
    }

    /// Write every translated string for the active language into the page.
    ///
    /// Each slot is independent: a missing element or a missing string skips
    /// that slot only.
    pub fn render_text(&mut self) -> RenderReport {
        let lang = self.active;
        let mut report = RenderReport::default();
        let Self {
            catalog, slots, dom, ..
        } = self;

        for slot in slots.fields {
            let wrote = catalog
                .text(lang, slot.key)
                .is_some_and(|text| dom.set_text(&slot.target, text));
            report.record(wrote);
        }

        for set in slots.cards {
            let keys = catalog.keys(lang, set.items);
            for index in 0..dom.count(set.selector) {
                let key = dom
                    .attribute(set.selector, index, set.key_attr)
                    .or_else(|| keys.get(index).map(|k| (*k).to_string()));
                for (child, name) in set.fields {
                    let target = Target::nth(set.selector, index).child(child);
                    let wrote = key
                        .as_deref()
                        .and_then(|key| catalog.text(lang, &format!("{}.{key}.{name}", set.items)))
                        .is_some_and(|text| dom.set_text(&target, text));
                    report.record(wrote);
                }
            }
        }

        for list in slots.lists {
            let len = catalog.list_len(lang, list.items);
            for index in 0..dom.count(list.selector).min(len) {
                for (child, name) in list.fields {
                    let target = Target::nth(list.selector, index).child(child);
                    let wrote = catalog
                        .text(lang, &format!("{}.{index}.{name}", list.items))
                        .is_some_and(|text| dom.set_text(&target, text));
                    report.record(wrote);
                }
            }
        }

        report
    }

    /// Locales offered by the switcher, with the active one flagged.
    #[must_use]
    pub fn options(&self) -> Vec<(&'static LocaleMeta, bool)> {
        locales()
            .iter()
            .map(|meta| (meta, meta.lang == self.active))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeDom;
    use serde_json::json;

    fn page() -> FakeDom {
        let mut dom = FakeDom::default();
        for _ in 0..5 {
            dom.add(".nav-link");
        }
        dom.add(".hero-title-line");
        dom.add(".portfolio");
        for code in ["en", "nl", "ar"] {
            dom.add_with(LANGUAGE_OPTION, &[("data-lang", code)]);
        }
        dom
    }

    fn localizer(dom: FakeDom) -> Localizer<FakeDom> {
        Localizer::new(Catalog::embedded().unwrap(), dom)
    }

    #[test]
    fn repeated_switch_is_a_no_op() {
        let mut l10n = localizer(page());
        assert_eq!(l10n.switch_language("nl"), Ok(true));
        let writes = l10n.dom().mutations();
        assert_eq!(l10n.switch_language("nl"), Ok(false));
        assert_eq!(l10n.dom().mutations(), writes);
    }

    #[test]
    fn switching_to_the_initial_language_does_nothing() {
        let mut l10n = localizer(page());
        assert_eq!(l10n.switch_language("en"), Ok(false));
        assert_eq!(l10n.dom().mutations(), 0);
    }

    #[test]
    fn arabic_flips_root_but_not_media() {
        let mut l10n = localizer(page());
        l10n.switch_language("ar").unwrap();
        assert_eq!(l10n.dom().root_attribute("dir"), Some("rtl"));
        assert_eq!(l10n.dom().root_attribute("lang"), Some("ar"));
        assert_eq!(
            l10n.dom().attribute(".portfolio", 0, "dir").as_deref(),
            Some("ltr")
        );
        assert_eq!(l10n.direction(), Direction::Rtl);

        l10n.switch_language("en").unwrap();
        assert_eq!(l10n.dom().root_attribute("dir"), Some("ltr"));
    }

    #[test]
    fn selector_and_slider_follow_the_active_language() {
        let mut dom = page();
        dom.add(LANGUAGE_TOGGLE);
        dom.add(LANGUAGE_SLIDER);
        dom.set_left(LANGUAGE_TOGGLE, 0, 100.0);
        dom.set_left(LANGUAGE_OPTION, 2, 164.0);
        let mut l10n = localizer(dom);

        l10n.switch_language("ar").unwrap();
        let dom = l10n.dom();
        assert!(!dom.has_class(LANGUAGE_OPTION, 0, "active"));
        assert!(!dom.has_class(LANGUAGE_OPTION, 1, "active"));
        assert!(dom.has_class(LANGUAGE_OPTION, 2, "active"));
        assert_eq!(
            dom.style(LANGUAGE_SLIDER, 0, "transform"),
            Some("translateX(64px)")
        );
        assert_eq!(dom.pulses(), &[(FADE_OPACITY, FADE_MS)]);
    }

    #[test]
    fn unsupported_code_leaves_everything_alone() {
        let mut l10n = localizer(page());
        let err = l10n.switch_language("fr").unwrap_err();
        assert_eq!(err, LocaleError::Unsupported("fr".into()));
        assert_eq!(l10n.active(), Lang::En);
        assert_eq!(l10n.dom().mutations(), 0);
    }

    #[test]
    fn language_missing_from_catalog_is_rejected() {
        let catalog = Catalog::from_entries([(Lang::En, json!({"nav": {"home": "Home"}}))]);
        let mut l10n = Localizer::new(catalog, page());
        assert_eq!(
            l10n.switch_language("nl"),
            Err(LocaleError::MissingLocale(Lang::Nl))
        );
        assert_eq!(l10n.active(), Lang::En);
        assert_eq!(l10n.dom().mutations(), 0);
    }

    #[test]
    fn missing_strings_and_slots_are_skipped_independently() {
        let catalog = Catalog::from_entries([
            (Lang::En, json!({"nav": {"home": "Home"}})),
            (
                Lang::Nl,
                json!({"nav": {"home": "Thuis", "about": "Over Mij"}, "hero": {"title": "Adnan"}}),
            ),
        ]);
        let mut dom = FakeDom::default();
        dom.add(".nav-link");
        dom.add(".hero-title-line");
        let mut l10n = Localizer::new(catalog, dom);
        l10n.switch_language("nl").unwrap();

        assert_eq!(l10n.dom().text(".nav-link", 0), Some("Thuis"));
        assert_eq!(l10n.dom().text(".hero-title-line", 0), Some("Adnan"));

        let report = l10n.render_text();
        assert_eq!(report.written, 2);
        assert!(report.skipped > 0);
    }

    #[test]
    fn options_flag_the_active_language() {
        let mut l10n = localizer(page());
        l10n.switch_language("nl").unwrap();
        let options = l10n.options();
        assert_eq!(options.len(), 3);
        let (nl, active) = options[1];
        assert!(active);
        assert_eq!((nl.code, nl.label, nl.name), ("nl", "NL", "Nederlands"));
        assert!(!options[0].1 && !options[2].1);
    }
}
