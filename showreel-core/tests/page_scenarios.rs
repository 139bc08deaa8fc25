use showreel_core::testing::{FakeDom, ManualTicker, RecordingView, sample_reels};
use showreel_core::{
    Carousel, CarouselConfig, Catalog, Dom, Lang, LocaleError, Localizer, SiteConfig,
};

const DESKTOP: f64 = 1300.0;
const MOBILE: f64 = 375.0;

fn full_page() -> FakeDom {
    let mut dom = FakeDom::default();
    for _ in 0..5 {
        dom.add(".nav-link");
    }
    for selector in [
        ".hero-title-line",
        ".hero-subtitle",
        ".scroll-indicator span",
        "#about .section-title",
        ".about-text",
        "#services .section-title",
        "#testimonials .section-title",
        ".portfolio-reels .section-title",
        ".portfolio",
        ".video-carousel-container",
    ] {
        dom.add(selector);
    }
    for _ in 0..6 {
        let i = dom.add(".service-item");
        dom.add_child(".service-item", i, "h3");
        dom.add_child(".service-item", i, "p");
    }
    for _ in 0..3 {
        let i = dom.add(".testimonial-item");
        dom.add_child(".testimonial-item", i, "p");
        dom.add_child(".testimonial-item", i, ".client-name");
    }
    dom
}

fn localizer(dom: FakeDom) -> Localizer<FakeDom> {
    Localizer::new(Catalog::embedded().expect("catalog"), dom)
}

#[test]
fn arabic_flips_document_but_keeps_media_ltr() {
    let mut l10n = localizer(full_page());
    assert_eq!(l10n.switch_language("ar"), Ok(true));

    let dom = l10n.dom();
    assert_eq!(dom.root_attribute("dir"), Some("rtl"));
    assert_eq!(dom.attribute(".portfolio", 0, "dir").as_deref(), Some("ltr"));
    assert_eq!(
        dom.attribute(".video-carousel-container", 0, "dir").as_deref(),
        Some("ltr")
    );
    assert_eq!(dom.text(".nav-link", 0), Some("الرئيسية"));
}

#[test]
fn unsupported_language_changes_nothing() {
    let mut l10n = localizer(full_page());
    l10n.switch_language("nl").unwrap();
    let before = l10n.dom().text(".hero-subtitle", 0).map(str::to_string);
    let writes = l10n.dom().mutations();

    assert_eq!(
        l10n.switch_language("fr"),
        Err(LocaleError::Unsupported("fr".into()))
    );
    assert_eq!(l10n.active(), Lang::Nl);
    assert_eq!(l10n.dom().mutations(), writes);
    assert_eq!(
        l10n.dom().text(".hero-subtitle", 0),
        before.as_deref()
    );
}

#[test]
fn switching_back_and_forth_is_idempotent_per_language() {
    let mut l10n = localizer(full_page());
    for code in ["nl", "ar", "en"] {
        assert_eq!(l10n.switch_language(code), Ok(true));
        let writes = l10n.dom().mutations();
        assert_eq!(l10n.switch_language(code), Ok(false));
        assert_eq!(l10n.dom().mutations(), writes, "second {code} switch wrote");
    }
}

#[test]
fn service_cards_fill_positionally_in_catalog_order() {
    let mut l10n = localizer(full_page());
    l10n.switch_language("nl").unwrap();
    let dom = l10n.dom();
    assert_eq!(dom.child_text(".service-item", 0, "h3"), Some("Videografie"));
    assert_eq!(dom.child_text(".service-item", 5, "h3"), Some("Drone Fotografie"));
    assert_eq!(
        dom.child_text(".testimonial-item", 1, ".client-name"),
        Some("- Marcus Rivera, Muzikant")
    );
}

#[test]
fn keyed_cards_ignore_position() {
    let mut dom = FakeDom::default();
    let i = dom.add_with(".service-item", &[("data-service", "drone")]);
    dom.add_child(".service-item", i, "h3");
    let j = dom.add(".service-item");
    dom.add_child(".service-item", j, "h3");

    let mut l10n = localizer(dom);
    l10n.switch_language("nl").unwrap();
    assert_eq!(
        l10n.dom().child_text(".service-item", 0, "h3"),
        Some("Drone Fotografie")
    );
    assert_eq!(
        l10n.dom().child_text(".service-item", 1, "h3"),
        Some("Social Media Marketing")
    );
}

#[test]
fn sparse_page_renders_what_exists() {
    let mut dom = FakeDom::default();
    dom.add(".about-text");
    let mut l10n = localizer(dom);
    l10n.switch_language("nl").unwrap();
    assert!(
        l10n.dom()
            .text(".about-text", 0)
            .is_some_and(|t| t.starts_with("Adnan Kousa is een"))
    );
    let report = l10n.render_text();
    assert_eq!(report.written, 1);
}

#[test]
fn mobile_resize_after_last_desktop_page_lands_on_last_item() {
    let view = RecordingView::default();
    let ticker = ManualTicker::default();
    let carousel = Carousel::new(
        sample_reels(),
        &CarouselConfig::default(),
        DESKTOP,
        view.clone(),
        ticker,
    );
    assert_eq!(carousel.page_size(), 3);

    carousel.set_window(6);
    assert_eq!(carousel.offset(), 5);

    assert!(carousel.resize(MOBILE));
    assert_eq!(carousel.page_size(), 1);
    assert_eq!(carousel.offset(), 7);

    let last = view.frames().pop().unwrap();
    assert_eq!(last.ids, ["xQPCVxtSdzw"]);
    assert_eq!(last.indicator_count, 8);
}

#[test]
fn set_window_always_lands_in_range() {
    let carousel = Carousel::new(
        sample_reels(),
        &CarouselConfig::default(),
        800.0,
        RecordingView::default(),
        ManualTicker::default(),
    );
    for request in [-100, -1, 0, 3, 6, 7, 8, 1_000] {
        carousel.set_window(request);
        let window = carousel.window();
        assert!(window.offset() <= window.len() - window.page_size());
    }
}

#[test]
fn auto_advance_cycles_back_to_start() {
    let config = SiteConfig::embedded().unwrap();
    let view = RecordingView::default();
    let ticker = ManualTicker::default();
    let carousel = Carousel::new(
        config.reels,
        &config.carousel,
        DESKTOP,
        view.clone(),
        ticker.clone(),
    );
    carousel.mount();
    assert!(carousel.is_running());

    let period = u64::from(config.carousel.auto_advance_ms);
    let cycle = 8 - 3 + 1;
    assert_eq!(ticker.advance_by(period * cycle), 6);
    assert_eq!(carousel.offset(), 0);

    let offsets: Vec<usize> = view.frames().iter().map(|f| f.offset).collect();
    assert_eq!(offsets, [0, 1, 2, 3, 4, 5, 0]);
}

#[test]
fn restarting_auto_advance_never_doubles_ticks() {
    let ticker = ManualTicker::default();
    let carousel = Carousel::new(
        sample_reels(),
        &CarouselConfig::default(),
        DESKTOP,
        RecordingView::default(),
        ticker.clone(),
    );
    carousel.start_auto_advance();
    carousel.pointer_leave();
    carousel.start_auto_advance();
    assert_eq!(ticker.active_timers(), 1);
    assert_eq!(ticker.advance_by(4000), 1);

    carousel.stop_auto_advance();
    carousel.stop_auto_advance();
    assert!(!carousel.is_running());
    assert_eq!(ticker.advance_by(20_000), 0);
}
