use showreel_core::{CarouselFrame, CarouselView};
use web_sys::Element;
use yew::{AppHandle, Callback, Renderer};

use crate::components::reel_carousel::{CardsProps, IndicatorsProps};
use crate::components::{CarouselCards, CarouselIndicators};

/// Draws carousel frames into `#videoCarousel` and `#indicators`.
///
/// Each frame tears down the previous Yew apps and mounts fresh ones, so
/// the card elements are recreated on every page change.
pub struct WebCarouselView {
    cards_root: Element,
    indicators_root: Option<Element>,
    cards: Option<AppHandle<CarouselCards>>,
    indicators: Option<AppHandle<CarouselIndicators>>,
}

impl WebCarouselView {
    #[must_use]
    pub const fn new(cards_root: Element, indicators_root: Option<Element>) -> Self {
        Self {
            cards_root,
            indicators_root,
            cards: None,
            indicators: None,
        }
    }
}

impl CarouselView for WebCarouselView {
    fn render(&mut self, frame: &CarouselFrame<'_>) {
        if let Some(app) = self.cards.take() {
            app.destroy();
        }
        self.cards_root.set_inner_html("");
        let props = CardsProps {
            items: frame.items.to_vec(),
            offset: frame.offset,
        };
        self.cards = Some(
            Renderer::<CarouselCards>::with_root_and_props(self.cards_root.clone(), props).render(),
        );

        let Some(root) = &self.indicators_root else {
            return;
        };
        if let Some(app) = self.indicators.take() {
            app.destroy();
        }
        root.set_inner_html("");
        let selector = frame.selector.clone();
        let props = IndicatorsProps {
            count: frame.indicator_count,
            active: frame.offset,
            on_select: Callback::from(move |idx| selector.select(idx)),
        };
        self.indicators =
            Some(Renderer::<CarouselIndicators>::with_root_and_props(root.clone(), props).render());
    }
}
