pub mod language_switcher;
pub mod reel_carousel;

pub use language_switcher::{LanguageOption, LanguageSwitcher};
pub use reel_carousel::{CarouselCards, CarouselIndicators, VideoCard};
