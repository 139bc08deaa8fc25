use showreel_core::MediaItem;
use yew::prelude::*;

const IFRAME_ALLOW: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture";

#[derive(Properties, PartialEq, Clone)]
pub struct VideoCardProps {
    pub item: MediaItem,
    /// Position in the full reel list.
    pub index: usize,
}

#[function_component(VideoCard)]
pub fn video_card(p: &VideoCardProps) -> Html {
    html! {
        <div class="video-card" data-index={p.index.to_string()}>
            <div class="video-wrapper">
                <iframe
                    class="video-iframe"
                    src={p.item.embed_url()}
                    title={p.item.title.clone()}
                    allowfullscreen={true}
                    allow={IFRAME_ALLOW}
                ></iframe>
                <div class="video-overlay">
                    <div class="play-button">
                        <i class="fas fa-play"></i>
                    </div>
                    <div class="video-info">
                        <h3 class="video-title">{ p.item.title.clone() }</h3>
                        <p class="video-category">{ p.item.category.clone() }</p>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct CardsProps {
    pub items: Vec<MediaItem>,
    pub offset: usize,
}

/// The cards of the current page.
#[function_component(CarouselCards)]
pub fn carousel_cards(p: &CardsProps) -> Html {
    html! {
        <>
            { for p.items.iter().enumerate().map(|(i, item)| html! {
                <VideoCard key={item.id.clone()} item={item.clone()} index={p.offset + i} />
            }) }
        </>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct IndicatorsProps {
    pub count: usize,
    pub active: usize,
    #[prop_or_default]
    pub on_select: Callback<usize>,
}

/// One dot per reachable page offset.
#[function_component(CarouselIndicators)]
pub fn carousel_indicators(p: &IndicatorsProps) -> Html {
    html! {
        <>
            { for (0..p.count).map(|idx| {
                let class = classes!("indicator", (idx == p.active).then_some("active"));
                let onclick = {
                    let cb = p.on_select.clone();
                    Callback::from(move |_: MouseEvent| cb.emit(idx))
                };
                html! {
                    <div class={class} role="button" aria-label={format!("Go to slide {}", idx + 1)} onclick={onclick}></div>
                }
            }) }
        </>
    }
}
